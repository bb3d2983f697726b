//! Swipe controller: the stack state machine.
//!
//! ## States
//!
//! - `Idle`: the front card accepts a drag
//! - `Dragging`: a drag session is open on the front card
//! - `Exiting`: a committed card is animating out; the new front card is
//!   inert until the renderer reports the animation finished
//!
//! ## Transitions
//!
//! ```text
//! Idle ──drag_start──▶ Dragging ──drag_end (≤ threshold)──▶ Idle
//!                         │
//!                         └──drag_end (> threshold)──▶ Exiting
//!                                                         │
//!                                 Idle ◀──exit_complete───┘
//! ```
//!
//! A commit pops the front card, wraps it in an [`ActiveSwipe`], notifies
//! listeners and pushes one fresh card onto the back, all within the
//! `drag_end` call. Only the visual exit is deferred to `exit_complete`.
//!
//! Events that arrive in the wrong state are ignored and reported as
//! [`IgnoredReason`]; they never fail.
//!
//! ```
//! use swipe_stack::cards::SequentialSupply;
//! use swipe_stack::core::{CardId, StackConfig};
//! use swipe_stack::gesture::{Direction, DragOffset};
//! use swipe_stack::stack::{DragEndOutcome, SwipeController};
//!
//! let config = StackConfig::new(3, 100.0).with_initial_cards(5);
//! let supply = SequentialSupply::new(config.first_card_id);
//! let mut stack = SwipeController::with_supply(config, supply).unwrap();
//!
//! stack.drag_start(DragOffset::ZERO);
//! let outcome = stack.drag_end(DragOffset::new(150.0, 0.0));
//!
//! match outcome {
//!     DragEndOutcome::Committed(event) => {
//!         assert_eq!(event.direction, Direction::Right);
//!         assert_eq!(event.card_id, CardId::new(1));
//!     }
//!     other => panic!("expected commit, got {:?}", other),
//! }
//! assert_eq!(stack.queue().len(), 5);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use super::events::{ListenerId, ListenerRegistry, SwipeCommitted, SwipeListener};
use super::stats::SwipeStats;
use super::window::{project, Window};
use crate::cards::{CardSupply, RandomSupply};
use crate::core::{Card, CardId, ConfigError, StackConfig};
use crate::gesture::{classify, Direction, DragFeedback, DragOffset, DragSession};
use crate::queue::CardQueue;

/// Observable controller state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwipeState {
    Idle,
    Dragging,
    Exiting,
}

impl std::fmt::Display for SwipeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SwipeState::Idle => "idle",
            SwipeState::Dragging => "dragging",
            SwipeState::Exiting => "exiting",
        };
        f.write_str(name)
    }
}

/// A committed card in its exit phase.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveSwipe {
    pub card: Card,
    pub direction: Direction,
}

/// Why an event was dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IgnoredReason {
    /// Drag start while a drag is open or a card is exiting.
    NotIdle(SwipeState),
    /// Drag update or end without an open drag.
    NotDragging(SwipeState),
    /// Exit completion with nothing exiting.
    NotExiting(SwipeState),
}

/// Result of `drag_start`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragStartOutcome {
    Started { card_id: CardId },
    Ignored(IgnoredReason),
}

/// Result of `drag_end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragEndOutcome {
    /// Below threshold: the renderer resets the card offset to zero.
    Cancelled,
    /// Card removed and replaced; the exit animation should start.
    Committed(SwipeCommitted),
    Ignored(IgnoredReason),
}

/// Result of `exit_complete`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SettleOutcome {
    /// The exited swipe, now discarded by the controller.
    Settled(ActiveSwipe),
    Ignored(IgnoredReason),
}

#[derive(Clone, Debug)]
enum Phase {
    Idle,
    Dragging(DragSession),
    Exiting(ActiveSwipe),
}

impl Phase {
    fn state(&self) -> SwipeState {
        match self {
            Phase::Idle => SwipeState::Idle,
            Phase::Dragging(_) => SwipeState::Dragging,
            Phase::Exiting(_) => SwipeState::Exiting,
        }
    }
}

/// The swipe stack.
///
/// Owns the queue and the card supply exclusively. All methods run to
/// completion on the caller's thread.
#[derive(Debug)]
pub struct SwipeController<S: CardSupply = RandomSupply> {
    config: StackConfig,
    queue: CardQueue,
    supply: S,
    phase: Phase,
    listeners: ListenerRegistry,
    stats: SwipeStats,
}

impl SwipeController<RandomSupply> {
    /// Create a stack with randomly colored cards.
    pub fn new(config: StackConfig) -> Result<Self, ConfigError> {
        let supply = RandomSupply::new(config.first_card_id, config.seed);
        Self::with_supply(config, supply)
    }
}

impl<S: CardSupply> SwipeController<S> {
    /// Create a stack drawing cards from `supply`.
    ///
    /// The initial fill takes `initial_card_count` cards from the supply.
    pub fn with_supply(config: StackConfig, mut supply: S) -> Result<Self, ConfigError> {
        config.validate()?;

        let queue = CardQueue::filled_from(&mut supply, config.initial_card_count);
        debug!(
            visible = config.visible_count,
            initial = queue.len(),
            threshold = config.swipe_threshold,
            "swipe stack created"
        );

        Ok(Self {
            config,
            queue,
            supply,
            phase: Phase::Idle,
            listeners: ListenerRegistry::new(),
            stats: SwipeStats::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &StackConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> SwipeState {
        self.phase.state()
    }

    #[must_use]
    pub fn queue(&self) -> &CardQueue {
        &self.queue
    }

    #[must_use]
    pub fn supply(&self) -> &S {
        &self.supply
    }

    #[must_use]
    pub fn stats(&self) -> &SwipeStats {
        &self.stats
    }

    /// The card currently exiting, if any.
    #[must_use]
    pub fn active_swipe(&self) -> Option<&ActiveSwipe> {
        match &self.phase {
            Phase::Exiting(swipe) => Some(swipe),
            _ => None,
        }
    }

    /// The open drag, if any.
    #[must_use]
    pub fn drag_session(&self) -> Option<&DragSession> {
        match &self.phase {
            Phase::Dragging(session) => Some(session),
            _ => None,
        }
    }

    /// The card at the front of the queue.
    #[must_use]
    pub fn front_card(&self) -> Option<&Card> {
        self.queue.front()
    }

    /// Whether the front card would accept a drag start right now.
    #[must_use]
    pub fn is_front_interactive(&self) -> bool {
        matches!(self.phase, Phase::Idle | Phase::Dragging(_))
    }

    /// The visible window, recomputed from the queue.
    #[must_use]
    pub fn current_window(&self) -> Window {
        project(
            &self.queue,
            self.config.visible_count,
            &self.config.layout,
            self.is_front_interactive(),
        )
    }

    /// Register a swipe listener.
    pub fn subscribe<L>(&mut self, listener: L) -> ListenerId
    where
        L: SwipeListener + 'static,
    {
        self.listeners.register(Box::new(listener))
    }

    /// Remove a swipe listener. Returns `false` if the ID was unknown.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unregister(id)
    }

    fn ignore(&mut self, reason: IgnoredReason) -> IgnoredReason {
        self.stats.ignored += 1;
        debug!(?reason, "stale event ignored");
        reason
    }

    /// Begin dragging the front card at pointer position `origin`.
    pub fn drag_start(&mut self, origin: DragOffset) -> DragStartOutcome {
        let state = self.state();
        if state != SwipeState::Idle {
            return DragStartOutcome::Ignored(self.ignore(IgnoredReason::NotIdle(state)));
        }

        let card_id = match self.queue.front() {
            Some(card) => card.id(),
            None => panic!("drag_start on empty card queue: replenishment invariant violated"),
        };

        self.phase = Phase::Dragging(DragSession::start(card_id, origin));
        debug!(%card_id, "drag started");
        DragStartOutcome::Started { card_id }
    }

    /// Report the current drag offset. Returns feedback for rendering.
    ///
    /// Never changes the stack.
    pub fn drag_update(&mut self, offset: DragOffset) -> Option<DragFeedback> {
        if let Phase::Dragging(session) = &mut self.phase {
            trace!(dx = offset.dx, dy = offset.dy, "drag update");
            return Some(session.update(offset, &self.config.feedback));
        }

        let state = self.state();
        self.ignore(IgnoredReason::NotDragging(state));
        None
    }

    /// Report an absolute pointer position instead of an offset.
    ///
    /// The offset is measured from the origin given to `drag_start`.
    pub fn drag_move_to(&mut self, position: DragOffset) -> Option<DragFeedback> {
        let offset = self.drag_session().map_or(position, |s| s.offset_to(position));
        self.drag_update(offset)
    }

    /// End the drag at an absolute pointer position.
    pub fn drag_end_at(&mut self, position: DragOffset) -> DragEndOutcome {
        let offset = self.drag_session().map_or(position, |s| s.offset_to(position));
        self.drag_end(offset)
    }

    /// End the drag with final offset `offset`, committing or cancelling.
    pub fn drag_end(&mut self, offset: DragOffset) -> DragEndOutcome {
        let session = match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Dragging(session) => session,
            other => {
                let state = other.state();
                self.phase = other;
                return DragEndOutcome::Ignored(self.ignore(IgnoredReason::NotDragging(state)));
            }
        };

        match classify(offset, self.config.swipe_threshold) {
            None => {
                self.stats.cancels += 1;
                debug!(
                    card_id = %session.card_id(),
                    dx = offset.dx,
                    dy = offset.dy,
                    "drag cancelled"
                );
                DragEndOutcome::Cancelled
            }
            Some(direction) => DragEndOutcome::Committed(self.commit(direction)),
        }
    }

    fn commit(&mut self, direction: Direction) -> SwipeCommitted {
        let card = self.queue.pop_front();
        let event = SwipeCommitted {
            direction,
            card_id: card.id(),
        };
        self.phase = Phase::Exiting(ActiveSwipe { card, direction });

        info!(card_id = %event.card_id, %direction, "swipe committed");
        self.listeners.notify(&event);

        self.queue.push_back(self.supply.next_card());
        debug_assert!(self.queue.len() >= self.config.visible_count);

        self.stats.record_commit(direction);
        event
    }

    /// The exit animation finished. Clears the active swipe.
    ///
    /// A second call while already idle is a no-op.
    pub fn exit_complete(&mut self) -> SettleOutcome {
        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Exiting(swipe) => {
                self.stats.settles += 1;
                debug!(
                    card_id = %swipe.card.id(),
                    front = ?self.queue.front().map(Card::id),
                    "exit settled"
                );
                SettleOutcome::Settled(swipe)
            }
            other => {
                let state = other.state();
                self.phase = other;
                SettleOutcome::Ignored(self.ignore(IgnoredReason::NotExiting(state)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::SequentialSupply;

    fn stack(visible: usize, threshold: f64, initial: usize) -> SwipeController<SequentialSupply> {
        let config = StackConfig::new(visible, threshold).with_initial_cards(initial);
        let supply = SequentialSupply::new(config.first_card_id);
        SwipeController::with_supply(config, supply).unwrap()
    }

    fn ids(stack: &SwipeController<SequentialSupply>) -> Vec<u64> {
        stack.queue().iter().map(|c| c.id().raw()).collect()
    }

    #[test]
    fn test_initial_state() {
        let stack = stack(3, 100.0, 5);
        assert_eq!(stack.state(), SwipeState::Idle);
        assert_eq!(ids(&stack), vec![1, 2, 3, 4, 5]);
        assert_eq!(stack.supply().peek_next_id(), CardId::new(6));
        assert!(stack.active_swipe().is_none());
        assert!(stack.is_front_interactive());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = StackConfig::new(3, 100.0).with_initial_cards(1);
        let supply = SequentialSupply::new(config.first_card_id);
        assert!(SwipeController::with_supply(config, supply).is_err());
    }

    #[test]
    fn test_random_supply_constructor() {
        let stack = SwipeController::new(StackConfig::default()).unwrap();
        assert_eq!(stack.queue().len(), 10);
        assert_eq!(stack.supply().peek_next_id(), CardId::new(11));
    }

    #[test]
    fn test_commit_sequence() {
        let mut stack = stack(3, 100.0, 5);

        assert_eq!(
            stack.drag_start(DragOffset::ZERO),
            DragStartOutcome::Started { card_id: CardId::new(1) }
        );
        assert_eq!(stack.state(), SwipeState::Dragging);

        let outcome = stack.drag_end(DragOffset::new(150.0, 0.0));
        assert_eq!(
            outcome,
            DragEndOutcome::Committed(SwipeCommitted {
                direction: Direction::Right,
                card_id: CardId::new(1),
            })
        );
        assert_eq!(stack.state(), SwipeState::Exiting);
        assert_eq!(ids(&stack), vec![2, 3, 4, 5, 6]);

        let active = stack.active_swipe().unwrap();
        assert_eq!(active.card.id(), CardId::new(1));
        assert_eq!(active.direction, Direction::Right);
        assert!(!stack.is_front_interactive());

        match stack.exit_complete() {
            SettleOutcome::Settled(swipe) => assert_eq!(swipe.card.id(), CardId::new(1)),
            other => panic!("expected settle, got {:?}", other),
        }
        assert_eq!(stack.state(), SwipeState::Idle);
        assert_eq!(stack.front_card().map(Card::id), Some(CardId::new(2)));
        assert!(stack.is_front_interactive());
    }

    #[test]
    fn test_cancel_below_threshold() {
        let mut stack = stack(3, 100.0, 5);
        stack.drag_start(DragOffset::ZERO);

        assert_eq!(stack.drag_end(DragOffset::new(40.0, 0.0)), DragEndOutcome::Cancelled);
        assert_eq!(stack.state(), SwipeState::Idle);
        assert_eq!(ids(&stack), vec![1, 2, 3, 4, 5]);
        assert_eq!(stack.stats().cancels, 1);
    }

    #[test]
    fn test_drag_start_ignored_while_exiting() {
        let mut stack = stack(3, 100.0, 3);
        stack.drag_start(DragOffset::ZERO);
        stack.drag_end(DragOffset::new(0.0, -200.0));

        assert_eq!(
            stack.drag_start(DragOffset::ZERO),
            DragStartOutcome::Ignored(IgnoredReason::NotIdle(SwipeState::Exiting))
        );
        assert!(stack.drag_session().is_none());
        assert_eq!(stack.state(), SwipeState::Exiting);
    }

    #[test]
    fn test_second_drag_start_ignored() {
        let mut stack = stack(3, 100.0, 3);
        stack.drag_start(DragOffset::new(5.0, 5.0));
        stack.drag_update(DragOffset::new(30.0, 0.0));

        assert_eq!(
            stack.drag_start(DragOffset::ZERO),
            DragStartOutcome::Ignored(IgnoredReason::NotIdle(SwipeState::Dragging))
        );
        // Original session kept
        let session = stack.drag_session().unwrap();
        assert_eq!(session.origin(), DragOffset::new(5.0, 5.0));
        assert_eq!(session.current_offset(), DragOffset::new(30.0, 0.0));
    }

    #[test]
    fn test_drag_end_without_drag_ignored() {
        let mut stack = stack(3, 100.0, 3);
        assert_eq!(
            stack.drag_end(DragOffset::new(500.0, 0.0)),
            DragEndOutcome::Ignored(IgnoredReason::NotDragging(SwipeState::Idle))
        );
        assert_eq!(ids(&stack), vec![1, 2, 3]);
    }

    #[test]
    fn test_drag_end_while_exiting_ignored() {
        let mut stack = stack(3, 100.0, 3);
        stack.drag_start(DragOffset::ZERO);
        stack.drag_end(DragOffset::new(-300.0, 0.0));

        assert_eq!(
            stack.drag_end(DragOffset::new(-300.0, 0.0)),
            DragEndOutcome::Ignored(IgnoredReason::NotDragging(SwipeState::Exiting))
        );
        assert_eq!(stack.active_swipe().map(|s| s.card.id()), Some(CardId::new(1)));
        assert_eq!(ids(&stack), vec![2, 3, 4]);
    }

    #[test]
    fn test_duplicate_settle_is_noop() {
        let mut stack = stack(3, 100.0, 3);
        stack.drag_start(DragOffset::ZERO);
        stack.drag_end(DragOffset::new(200.0, 0.0));

        assert!(matches!(stack.exit_complete(), SettleOutcome::Settled(_)));
        assert_eq!(
            stack.exit_complete(),
            SettleOutcome::Ignored(IgnoredReason::NotExiting(SwipeState::Idle))
        );
        assert_eq!(stack.stats().settles, 1);
        assert_eq!(stack.stats().ignored, 1);
    }

    #[test]
    fn test_settle_while_dragging_keeps_session() {
        let mut stack = stack(3, 100.0, 3);
        stack.drag_start(DragOffset::ZERO);

        assert!(matches!(stack.exit_complete(), SettleOutcome::Ignored(_)));
        assert_eq!(stack.state(), SwipeState::Dragging);
    }

    #[test]
    fn test_drag_update_feedback() {
        let mut stack = stack(3, 100.0, 3);
        assert!(stack.drag_update(DragOffset::new(10.0, 0.0)).is_none());

        stack.drag_start(DragOffset::ZERO);
        let feedback = stack.drag_update(DragOffset::new(150.0, 0.0)).unwrap();
        assert_eq!(feedback.rotation_degrees, 15.0);
        assert_eq!(ids(&stack), vec![1, 2, 3]);
    }

    #[test]
    fn test_position_based_drag() {
        let mut stack = stack(3, 100.0, 3);
        stack.drag_start(DragOffset::new(200.0, 300.0));

        let feedback = stack.drag_move_to(DragOffset::new(260.0, 300.0)).unwrap();
        assert_eq!(feedback.offset, DragOffset::new(60.0, 0.0));
        assert_eq!(
            stack.drag_session().map(DragSession::current_offset),
            Some(DragOffset::new(60.0, 0.0))
        );

        // 150px left of the origin, not of the screen edge
        let outcome = stack.drag_end_at(DragOffset::new(50.0, 300.0));
        assert_eq!(
            outcome,
            DragEndOutcome::Committed(SwipeCommitted {
                direction: Direction::Left,
                card_id: CardId::new(1),
            })
        );
    }

    #[test]
    fn test_position_based_drag_below_threshold() {
        let mut stack = stack(3, 100.0, 3);
        // Far from the screen origin, close to the drag origin
        stack.drag_start(DragOffset::new(500.0, 500.0));
        assert_eq!(stack.drag_end_at(DragOffset::new(540.0, 520.0)), DragEndOutcome::Cancelled);
        assert_eq!(ids(&stack), vec![1, 2, 3]);
    }

    #[test]
    fn test_position_based_drag_without_session_ignored() {
        let mut stack = stack(3, 100.0, 3);
        assert!(stack.drag_move_to(DragOffset::new(500.0, 0.0)).is_none());
        assert!(matches!(
            stack.drag_end_at(DragOffset::new(500.0, 0.0)),
            DragEndOutcome::Ignored(IgnoredReason::NotDragging(SwipeState::Idle))
        ));
    }

    #[test]
    fn test_window_inert_while_exiting() {
        let mut stack = stack(3, 100.0, 5);
        stack.drag_start(DragOffset::ZERO);
        stack.drag_end(DragOffset::new(150.0, 0.0));

        let window = stack.current_window();
        assert_eq!(window.front().map(|s| s.card.id()), Some(CardId::new(2)));
        assert!(window.slots().iter().all(|s| !s.interactive));

        stack.exit_complete();
        assert!(stack.current_window().front().unwrap().interactive);
    }

    #[test]
    fn test_listener_fires_once_per_commit() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut stack = stack(3, 100.0, 3);
        let sink = Rc::clone(&seen);
        stack.subscribe(move |e: &SwipeCommitted| sink.borrow_mut().push(*e));

        stack.drag_start(DragOffset::ZERO);
        stack.drag_end(DragOffset::new(10.0, 0.0));
        assert!(seen.borrow().is_empty());

        stack.drag_start(DragOffset::ZERO);
        stack.drag_end(DragOffset::new(0.0, 150.0));
        stack.drag_end(DragOffset::new(0.0, 150.0));

        assert_eq!(
            *seen.borrow(),
            vec![SwipeCommitted {
                direction: Direction::Down,
                card_id: CardId::new(1),
            }]
        );
    }
}
