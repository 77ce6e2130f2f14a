#![forbid(unsafe_code)]

//! The card stack state machine.
//!
//! [`RgStack`] owns the deck, the index of the front card, the position held
//! by each of the four slots, and the last two drag values. Everything a
//! frame needs is derived from that state by [`RgStack::configuration`].
//!
//! # State machine
//!
//! States are `(index, slots)` pairs. Only [`RgStack::move_to`] changes
//! them, guarded by the deck bounds; drags only change the drag history and
//! therefore the interpolated layouts.
//!
//! # Invariants
//!
//! 1. `index < len()` at all times; the deck is never empty.
//! 2. `positions().current` is `Slots::INDEX0` at index 0 and
//!    `Slots::canonical(index)` everywhere else.
//! 3. Layouts are never flagged `animated` while a drag is in progress.
//! 4. At the last card the `Bottom` and `Off` slots are collapsed to zero
//!    size; at the first card the `Off` slot collapses while dragging
//!    backward.
//!
//! # Failure Modes
//!
//! There are none at runtime. Moves past either end are rejected silently
//! (the drag resets to zero) and data lookups outside the deck yield `None`.

use rgstack_core::{
    CardInfo, Direction, Layout, Movement, Position, Size, Slots, Tracked, Translation,
};

use crate::card::{CardConfiguration, StackConfiguration};
use crate::config::{DEFAULT_SNAP_THRESHOLD, StackConfig, snap_threshold_error};
use crate::error::StackError;
use crate::feedback::TransitionFeedback;

/// What a released drag did to the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// The release had no vertical travel.
    Idle,
    /// The release stayed within the threshold; the cards spring back.
    SnappedBack,
    /// The release crossed the threshold and the deck moved.
    Committed(Direction),
    /// The release crossed the threshold but the deck was already at its end.
    Rejected(Direction),
}

/// A drag-navigable stack of cards over `data`.
#[derive(Debug, Clone)]
pub struct RgStack<D> {
    data: Vec<D>,
    card_info: CardInfo,
    snap_threshold: f64,
    index: usize,
    positions: Tracked<Slots>,
    drags: Tracked<f64>,
}

impl<D> RgStack<D> {
    /// Build a stack over `data` with the first card in front.
    ///
    /// Fails if `data` is empty or `card_info` does not validate.
    pub fn new(data: Vec<D>, card_info: CardInfo) -> Result<Self, StackError> {
        if data.is_empty() {
            return Err(StackError::EmptyDeck);
        }
        let errors = card_info.validate();
        if !errors.is_empty() {
            return Err(StackError::InvalidCardInfo(errors));
        }
        Ok(Self {
            data,
            card_info,
            snap_threshold: DEFAULT_SNAP_THRESHOLD,
            index: 0,
            positions: Tracked::new(Slots::INDEX0),
            drags: Tracked::new(0.0),
        })
    }

    /// Build a stack from a configuration.
    ///
    /// The whole configuration is validated first, so a hand-built
    /// [`StackConfig`] is held to the same rules as a loaded one.
    pub fn from_config(data: Vec<D>, config: &StackConfig) -> Result<Self, StackError> {
        let errors = config.validate();
        if !errors.is_empty() {
            return Err(StackError::InvalidConfig(errors));
        }
        Self::new(data, config.card)?.with_snap_threshold(config.snap_threshold)
    }

    /// Set the release threshold (builder pattern).
    ///
    /// Fails if `threshold` is negative, NaN or infinite.
    pub fn with_snap_threshold(mut self, threshold: f64) -> Result<Self, StackError> {
        if let Some(error) = snap_threshold_error(threshold) {
            return Err(StackError::InvalidConfig(vec![error]));
        }
        self.snap_threshold = threshold;
        Ok(self)
    }

    /// The deck.
    #[must_use]
    pub fn data(&self) -> &[D] {
        &self.data
    }

    /// Number of cards. Always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false: a stack holds at least one card.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Index of the front card.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether the first card is in front.
    #[must_use]
    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    /// Whether the last card is in front.
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.index + 1 == self.data.len()
    }

    /// Card geometry.
    #[must_use]
    pub fn card_info(&self) -> &CardInfo {
        &self.card_info
    }

    /// Release threshold used by [`end_drag`](Self::end_drag).
    #[must_use]
    pub fn snap_threshold(&self) -> f64 {
        self.snap_threshold
    }

    /// Slot assignment, with the one it replaced.
    #[must_use]
    pub fn positions(&self) -> Tracked<Slots> {
        self.positions
    }

    /// Normalized drag values, with the one each replaced.
    #[must_use]
    pub fn drags(&self) -> Tracked<f64> {
        self.drags
    }

    /// Classified current drag.
    #[must_use]
    pub fn movement(&self) -> Movement {
        Movement::from_drag(self.drags.current)
    }

    /// Size of the container hosting the stack.
    #[must_use]
    pub fn container_size(&self) -> Size {
        self.card_info.container_size()
    }

    /// Normalize a drag translation into a signed card count.
    #[must_use]
    pub fn variance(&self, translation: Translation) -> f64 {
        self.card_info.variance(translation)
    }

    /// Data index shown at `position` for the current front card.
    ///
    /// May fall outside the deck near either end.
    #[must_use]
    pub fn data_index(&self, position: Position) -> isize {
        self.index as isize + position.data_offset()
    }

    fn data_at(&self, index: isize) -> Option<&D> {
        usize::try_from(index).ok().and_then(|i| self.data.get(i))
    }

    /// Track a drag in progress.
    pub fn update_drag(&mut self, translation: Translation) {
        self.set_drag(self.variance(translation));
    }

    /// Record a normalized drag value.
    ///
    /// The slot assignment does not change; it is re-pushed so that
    /// `positions().last` matches the current frame.
    pub fn set_drag(&mut self, value: f64) {
        self.drags.push(value);
        self.positions.refresh();
        tracing::trace!(message = "rgstack.drag", value, index = self.index);
    }

    /// Slot assignment the current frame animates from.
    ///
    /// When the assignment did not change, each slot's previous position is
    /// reconstructed by projecting it through the previous drag. That is
    /// where the card was drawn last frame, so releasing a drag animates it
    /// back home.
    #[must_use]
    pub fn previous_positions(&self) -> Slots {
        if self.positions.changed() {
            self.positions.last
        } else {
            self.positions
                .current
                .projected(&Movement::from_drag(self.drags.last))
        }
    }

    /// Layout and data for each slot in the current frame.
    #[must_use]
    pub fn configuration(&self) -> StackConfiguration<'_, D> {
        let movement = self.movement();
        let current = self.positions.current;
        let previous = self.previous_positions();
        let is_first = self.is_first();
        let is_last = self.is_last();

        std::array::from_fn(|slot| {
            let position = current[slot];
            let mut layout = Layout::dynamic(position, &movement, &self.card_info);
            layout.animated =
                !movement.is_dragging() && previous[slot].should_animate_transition(position);

            let clipped = if is_last {
                matches!(position, Position::Bottom | Position::Off)
                    || (movement.is_forward() && position == Position::Back)
            } else {
                is_first && position == Position::Off && movement.is_backward()
            };
            if clipped {
                layout = layout.hidden();
            }

            CardConfiguration {
                layout,
                data: self.data_at(self.data_index(position)),
            }
        })
    }

    /// Finish a drag using the configured threshold.
    pub fn end_drag(
        &mut self,
        translation: Translation,
        feedback: &mut impl TransitionFeedback,
    ) -> DragOutcome {
        self.end_drag_with_threshold(translation, self.snap_threshold, feedback)
    }

    /// Finish a drag: commit a move if the release travelled further than
    /// `threshold` card distances, otherwise spring back.
    pub fn end_drag_with_threshold(
        &mut self,
        translation: Translation,
        threshold: f64,
        feedback: &mut impl TransitionFeedback,
    ) -> DragOutcome {
        let movement = Movement::from_drag(self.variance(translation));
        let Some(direction) = movement.direction() else {
            self.set_drag(0.0);
            return DragOutcome::Idle;
        };

        let progress = movement.progress();
        if progress > threshold {
            feedback.notify_transition_committed(direction);
            if self.move_to(direction) {
                DragOutcome::Committed(direction)
            } else {
                DragOutcome::Rejected(direction)
            }
        } else {
            tracing::debug!(
                message = "rgstack.snap_back",
                progress,
                threshold,
                index = self.index
            );
            self.set_drag(0.0);
            DragOutcome::SnappedBack
        }
    }

    /// Move one card in `direction`.
    ///
    /// Returns false, resetting the drag, when the move would leave the
    /// deck.
    pub fn move_to(&mut self, direction: Direction) -> bool {
        let target = self
            .index
            .checked_add_signed(direction.step())
            .filter(|&i| i < self.data.len());
        let Some(new_index) = target else {
            tracing::debug!(
                message = "rgstack.move_rejected",
                direction = ?direction,
                index = self.index,
                len = self.data.len()
            );
            self.set_drag(0.0);
            return false;
        };

        let updated = self.positions.current.updated(new_index, direction);
        let from = self.index;
        self.index = new_index;
        self.set_drag(0.0);
        self.positions.push(updated);
        tracing::debug!(
            message = "rgstack.move",
            direction = ?direction,
            from,
            to = new_index
        );
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::{NoFeedback, RecordingFeedback};
    use std::sync::{Arc, Mutex};
    use tracing::Subscriber;
    use tracing_subscriber::Layer;
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use Position::{Back, Bottom, Front, Off};

    fn info() -> CardInfo {
        // Travel distance 100 keeps translations easy to read.
        CardInfo::new(Size::new(60.0, 80.0)).with_gap_distance(20.0)
    }

    fn stack(n: usize) -> RgStack<usize> {
        RgStack::new((0..n).collect(), info()).expect("non-empty deck")
    }

    fn up(distance: f64) -> Translation {
        Translation::vertical(-distance)
    }

    #[test]
    fn empty_deck_is_rejected() {
        assert_eq!(
            RgStack::<u8>::new(Vec::new(), info()).unwrap_err(),
            StackError::EmptyDeck
        );
    }

    #[test]
    fn invalid_geometry_is_rejected() {
        let err = RgStack::new(vec![1], CardInfo::new(Size::new(0.0, 10.0))).unwrap_err();
        assert!(matches!(err, StackError::InvalidCardInfo(ref e) if e.len() == 1), "{err}");
    }

    #[test]
    fn starts_on_first_card() {
        let s = stack(4);
        assert_eq!(s.index(), 0);
        assert_eq!(s.positions(), Tracked::new(Slots::INDEX0));
        assert_eq!(s.drags(), Tracked::new(0.0));
        assert_eq!(s.snap_threshold(), 0.2);
    }

    #[test]
    fn drag_updates_history_but_not_slots() {
        let mut s = stack(4);
        s.update_drag(up(30.0));
        s.update_drag(up(50.0));
        assert_eq!(s.drags().last, 0.3);
        assert_eq!(s.drags().current, 0.5);
        assert_eq!(s.positions().current, Slots::INDEX0);
        assert!(!s.positions().changed());
        assert_eq!(s.movement(), Movement::Forward(0.5));
    }

    #[test]
    fn data_follows_position_offsets() {
        let mut s = stack(5);
        s.move_to(Direction::Next);
        s.move_to(Direction::Next);
        let config = s.configuration();
        let data: Vec<Option<usize>> = config.iter().map(|c| c.data.copied()).collect();
        // index 2: slots [Off, Back, Front, Bottom]
        assert_eq!(s.positions().current, Slots::new([Off, Back, Front, Bottom]));
        assert_eq!(data, vec![Some(4), Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn out_of_deck_slots_have_no_data() {
        let s = stack(2);
        let data: Vec<Option<usize>> = s.configuration().iter().map(|c| c.data.copied()).collect();
        // index 0: [Front, Bottom, Off, Off] -> 0, 1, 2, 2
        assert_eq!(data, vec![Some(0), Some(1), None, None]);
    }

    #[test]
    fn move_rejected_at_both_ends() {
        let mut s = stack(2);
        assert!(!s.move_to(Direction::Back));
        assert_eq!(s.index(), 0);
        assert!(s.move_to(Direction::Next));
        assert!(!s.move_to(Direction::Next));
        assert_eq!(s.index(), 1);
        assert_eq!(s.positions().current, Slots::INDEX1);
    }

    #[test]
    fn rejected_move_resets_drag() {
        let mut s = stack(3);
        s.update_drag(up(-40.0));
        assert!(!s.move_to(Direction::Back));
        assert_eq!(s.drags().current, 0.0);
    }

    #[test]
    fn end_drag_outcomes() {
        let mut s = stack(3);
        let mut feedback = RecordingFeedback::new();
        assert_eq!(s.end_drag(Translation::ZERO, &mut feedback), DragOutcome::Idle);
        assert_eq!(s.end_drag(up(10.0), &mut feedback), DragOutcome::SnappedBack);
        assert_eq!(s.end_drag(up(20.0), &mut feedback), DragOutcome::SnappedBack);
        assert_eq!(feedback.count(), 0);
        assert_eq!(
            s.end_drag(up(21.0), &mut feedback),
            DragOutcome::Committed(Direction::Next)
        );
        assert_eq!(
            s.end_drag(up(-60.0), &mut feedback),
            DragOutcome::Committed(Direction::Back)
        );
        assert_eq!(
            s.end_drag(up(-60.0), &mut feedback),
            DragOutcome::Rejected(Direction::Back)
        );
        assert_eq!(
            feedback.committed(),
            &[Direction::Next, Direction::Back, Direction::Back]
        );
    }

    #[test]
    fn custom_threshold_is_honoured() {
        let mut s = stack(3).with_snap_threshold(0.6).expect("valid threshold");
        assert_eq!(s.end_drag(up(50.0), &mut NoFeedback), DragOutcome::SnappedBack);
        assert_eq!(
            s.end_drag_with_threshold(up(50.0), 0.4, &mut NoFeedback),
            DragOutcome::Committed(Direction::Next)
        );
    }

    #[test]
    fn unusable_thresholds_are_rejected() {
        for threshold in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, -0.5] {
            let err = stack(3).with_snap_threshold(threshold).unwrap_err();
            assert!(
                matches!(err, StackError::InvalidConfig(ref e) if e.len() == 1),
                "{threshold}: {err}"
            );
        }
        let s = stack(3).with_snap_threshold(0.0).expect("zero threshold");
        assert_eq!(s.snap_threshold(), 0.0);
    }

    #[test]
    fn from_config_validates_threshold() {
        for threshold in [f64::NAN, f64::INFINITY, -1.0] {
            let config = StackConfig {
                card: info(),
                snap_threshold: threshold,
                ..StackConfig::default()
            };
            let err = RgStack::from_config(vec![1, 2, 3], &config).unwrap_err();
            assert!(
                matches!(err, StackError::InvalidConfig(ref e)
                    if e[0].starts_with("snap_threshold must be >= 0")),
                "{threshold}: {err}"
            );
        }
    }

    #[test]
    fn from_config_validates_card_geometry() {
        let config = StackConfig {
            card: CardInfo::new(Size::new(0.0, 10.0)),
            ..StackConfig::default()
        };
        let err = RgStack::from_config(vec![1], &config).unwrap_err();
        assert!(matches!(err, StackError::InvalidConfig(ref e) if e.len() == 1), "{err}");
    }

    #[test]
    fn from_config_applies_threshold() {
        let config = StackConfig {
            card: info(),
            snap_threshold: 0.6,
            ..StackConfig::default()
        };
        let mut s = RgStack::from_config(vec![1, 2, 3], &config).expect("valid config");
        assert_eq!(s.snap_threshold(), 0.6);
        assert_eq!(s.end_drag(up(50.0), &mut NoFeedback), DragOutcome::SnappedBack);
        assert_eq!(
            s.end_drag(up(61.0), &mut NoFeedback),
            DragOutcome::Committed(Direction::Next)
        );
    }

    #[test]
    fn layouts_are_not_animated_while_dragging() {
        let mut s = stack(4);
        s.move_to(Direction::Next);
        s.update_drag(up(10.0));
        assert!(s.configuration().iter().all(|c| !c.layout.animated));
    }

    #[test]
    fn commit_animates_interpolated_slot_changes() {
        let mut s = stack(4);
        s.set_drag(0.0);
        s.update_drag(up(30.0));
        s.update_drag(up(50.0));
        assert_eq!(
            s.end_drag(up(50.0), &mut NoFeedback),
            DragOutcome::Committed(Direction::Next)
        );
        assert_eq!(s.previous_positions(), Slots::INDEX0);
        let animated: Vec<bool> = s.configuration().iter().map(|c| c.layout.animated).collect();
        // Front->Back, Bottom->Front, Off->Bottom animate; Off->Off does not.
        assert_eq!(animated, vec![true, true, true, false]);
    }

    #[test]
    fn snap_back_animates_home_except_over_snapping_edges() {
        let mut s = stack(4);
        s.move_to(Direction::Next);
        s.update_drag(up(10.0));
        assert_eq!(s.end_drag(up(10.0), &mut NoFeedback), DragOutcome::SnappedBack);
        assert_eq!(s.drags().last, 0.1);
        // Projected through Forward: [Off, Back, Front, Bottom].
        assert_eq!(s.previous_positions(), Slots::new([Off, Back, Front, Bottom]));
        let animated: Vec<bool> = s.configuration().iter().map(|c| c.layout.animated).collect();
        // Off->Back is a snapping edge.
        assert_eq!(animated, vec![false, true, true, true]);
    }

    #[test]
    fn settled_frames_do_not_animate() {
        let mut s = stack(4);
        s.move_to(Direction::Next);
        s.set_drag(0.0);
        assert!(s.configuration().iter().all(|c| !c.layout.animated));
    }

    #[test]
    fn last_card_hides_bottom_and_off() {
        let mut s = stack(3);
        s.move_to(Direction::Next);
        s.move_to(Direction::Next);
        assert!(s.is_last());
        let config = s.configuration();
        let current = s.positions().current;
        for slot in 0..4 {
            let hidden = config[slot].layout.size == Size::ZERO;
            assert_eq!(hidden, matches!(current[slot], Bottom | Off), "slot {slot}");
            if hidden {
                assert!(!config[slot].layout.animated);
            }
        }
    }

    #[test]
    fn last_card_hides_back_when_dragging_forward() {
        let mut s = stack(2);
        s.move_to(Direction::Next);
        s.update_drag(up(30.0));
        let config = s.configuration();
        let back = s.positions().current.slot_of(Back).expect("back slot");
        assert!(config[back].layout.is_hidden());
        s.update_drag(up(-30.0));
        assert!(!s.configuration()[back].layout.is_hidden());
    }

    #[test]
    fn first_card_hides_off_when_dragging_backward() {
        let mut s = stack(4);
        s.update_drag(up(-30.0));
        let config = s.configuration();
        assert!(config[2].layout.is_hidden() && config[3].layout.is_hidden());
        assert!(!config[0].layout.is_hidden() && !config[1].layout.is_hidden());
        s.update_drag(up(30.0));
        assert!(s.configuration().iter().all(|c| !c.layout.is_hidden()));
    }

    #[test]
    fn single_card_deck_uses_last_card_rules() {
        let mut s = stack(1);
        assert!(s.is_first() && s.is_last());
        s.update_drag(up(-30.0));
        let hidden: Vec<bool> = s.configuration().iter().map(|c| c.layout.is_hidden()).collect();
        assert_eq!(hidden, vec![false, true, true, true]);
        assert_eq!(s.end_drag(up(-90.0), &mut NoFeedback), DragOutcome::Rejected(Direction::Back));
        assert_eq!(s.index(), 0);
    }

    #[test]
    fn container_size_comes_from_card_info() {
        assert_eq!(stack(1).container_size(), Size::new(60.0, 80.0 * 1.2 + 20.0));
    }

    // --- tracing ---

    #[derive(Default)]
    struct Captured {
        messages: Vec<String>,
    }

    struct Capture {
        state: Arc<Mutex<Captured>>,
    }

    impl<S> Layer<S> for Capture
    where
        S: Subscriber + for<'lookup> tracing_subscriber::registry::LookupSpan<'lookup>,
    {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            struct Msg {
                message: Option<String>,
            }
            impl tracing::field::Visit for Msg {
                fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
                    if field.name() == "message" {
                        self.message = Some(value.to_string());
                    }
                }

                fn record_debug(
                    &mut self,
                    field: &tracing::field::Field,
                    value: &dyn std::fmt::Debug,
                ) {
                    if field.name() == "message" {
                        self.message = Some(format!("{value:?}").trim_matches('"').to_string());
                    }
                }
            }
            let mut msg = Msg { message: None };
            event.record(&mut msg);
            if let Some(message) = msg.message {
                self.state.lock().expect("capture lock").messages.push(message);
            }
        }
    }

    #[test]
    fn moves_and_rejections_are_traced() {
        let state = Arc::new(Mutex::new(Captured::default()));
        let subscriber = tracing_subscriber::registry().with(Capture {
            state: Arc::clone(&state),
        });
        let _guard = tracing::subscriber::set_default(subscriber);
        tracing::callsite::rebuild_interest_cache();

        let mut s = stack(2);
        s.end_drag(up(10.0), &mut NoFeedback);
        s.move_to(Direction::Next);
        s.move_to(Direction::Next);

        let captured = state.lock().expect("capture lock");
        for expected in ["rgstack.snap_back", "rgstack.move", "rgstack.move_rejected"] {
            assert!(
                captured.messages.iter().any(|m| m == expected),
                "missing {expected} in {:?}",
                captured.messages
            );
        }
    }
}
