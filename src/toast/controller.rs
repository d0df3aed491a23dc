// SPDX-License-Identifier: MPL-2.0
//! Show/hide state machine for a single toast.
//!
//! The controller has two states, hidden and visible. `show` makes it
//! visible and, when the duration is positive, schedules one auto-dismiss
//! timer. The toast hides on that timer, on a tap (if enabled), or on an
//! explicit `dismiss`. Every visible → hidden transition fires the
//! completion callback exactly once.
//!
//! Each `show` starts a new generation. Timers carry the generation they were
//! scheduled for, so a timer that outlives its presentation is ignored.

use super::animation::EntranceAnimation;
use super::descriptor::ToastDescriptor;
use super::scheduler::{Scheduler, TimerToken};
use std::fmt;
use std::time::{Duration, Instant};

/// Messages the host routes to the controller.
#[derive(Debug, Clone)]
pub enum Message {
    /// The user tapped the toast.
    Tap,
    /// Hide regardless of the tap setting.
    Dismiss,
    /// An auto-dismiss timer came due.
    TimerFired(TimerToken),
    /// Animation frame.
    Frame(Instant),
}

/// Visibility plus the effective settings of the current presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PresentationState {
    pub visible: bool,
    /// Zero means no auto-dismiss.
    pub duration: Duration,
    pub tap_to_dismiss: bool,
}

type Completion = Box<dyn FnMut(bool)>;

pub struct PresentationController<S: Scheduler> {
    state: PresentationState,
    descriptor: Option<ToastDescriptor>,
    animation: EntranceAnimation,
    generation: u64,
    scheduler: S,
    on_hidden: Option<Completion>,
}

impl<S: Scheduler> fmt::Debug for PresentationController<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PresentationController")
            .field("state", &self.state)
            .field("descriptor", &self.descriptor)
            .field("generation", &self.generation)
            .field("has_completion", &self.on_hidden.is_some())
            .finish_non_exhaustive()
    }
}

/// Converts a caller-supplied duration, treating negative and non-finite
/// values as "no auto-dismiss".
fn clamp_duration(duration_secs: f64) -> Duration {
    if duration_secs.is_finite() && duration_secs > 0.0 {
        Duration::try_from_secs_f64(duration_secs).unwrap_or(Duration::ZERO)
    } else {
        Duration::ZERO
    }
}

impl<S: Scheduler> PresentationController<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            state: PresentationState::default(),
            descriptor: None,
            animation: EntranceAnimation::default(),
            generation: 0,
            scheduler,
            on_hidden: None,
        }
    }

    /// Registers the callback fired with `true` after each hide.
    ///
    /// Replaces any previously registered callback.
    pub fn on_hidden(&mut self, callback: impl FnMut(bool) + 'static) {
        self.on_hidden = Some(Box::new(callback));
    }

    /// Presents `descriptor`.
    ///
    /// Loading toasts ignore `duration_secs` and `tap_to_dismiss`: they stay
    /// until dismissed explicitly. Calling `show` while already visible
    /// replaces the descriptor and restarts the timer and entrance animation
    /// without firing the completion callback.
    pub fn show(&mut self, descriptor: ToastDescriptor, duration_secs: f64, tap_to_dismiss: bool) {
        let loading = descriptor.content().is_loading();
        let duration = if loading {
            Duration::ZERO
        } else {
            clamp_duration(duration_secs)
        };
        let tap_to_dismiss = tap_to_dismiss && !loading;

        let was_visible = self.state.visible;
        self.generation = self.generation.wrapping_add(1);
        self.state = PresentationState {
            visible: true,
            duration,
            tap_to_dismiss,
        };
        self.animation = EntranceAnimation::for_content(descriptor.content());
        self.descriptor = Some(descriptor);

        tracing::debug!(
            generation = self.generation,
            ?duration,
            tap_to_dismiss,
            replaced = was_visible,
            "toast shown"
        );

        if !duration.is_zero() {
            self.scheduler
                .schedule(duration, TimerToken::new(self.generation));
        }
    }

    /// Hides the toast. Returns `false` if it was already hidden.
    pub fn dismiss(&mut self) -> bool {
        if !self.state.visible {
            return false;
        }

        self.state.visible = false;
        tracing::debug!(generation = self.generation, "toast hidden");

        if let Some(callback) = self.on_hidden.as_mut() {
            callback(true);
        }
        true
    }

    /// Handles a tap on the toast. Ignored unless tap-to-dismiss is enabled.
    pub fn tap(&mut self) -> bool {
        if self.state.visible && self.state.tap_to_dismiss {
            self.dismiss()
        } else {
            false
        }
    }

    /// Handles a timer delivered by the scheduler.
    ///
    /// Timers from an earlier presentation, or arriving after a dismiss, do
    /// nothing.
    pub fn handle_timer(&mut self, token: TimerToken) -> bool {
        if token.generation() != self.generation {
            tracing::trace!(
                stale = token.generation(),
                current = self.generation,
                "ignoring stale toast timer"
            );
            return false;
        }
        self.dismiss()
    }

    /// Routes a message. Returns `true` if the toast was hidden.
    pub fn update(&mut self, message: Message) -> bool {
        match message {
            Message::Tap => self.tap(),
            Message::Dismiss => self.dismiss(),
            Message::TimerFired(token) => self.handle_timer(token),
            Message::Frame(now) => {
                if self.state.visible {
                    self.animation.tick(now);
                }
                false
            }
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.state.visible
    }

    #[must_use]
    pub fn state(&self) -> PresentationState {
        self.state
    }

    /// The descriptor of the current (or last) presentation.
    #[must_use]
    pub fn descriptor(&self) -> Option<&ToastDescriptor> {
        self.descriptor.as_ref()
    }

    #[must_use]
    pub fn animation(&self) -> &EntranceAnimation {
        &self.animation
    }

    /// Whether the host should keep sending animation frames.
    #[must_use]
    pub fn needs_frames(&self) -> bool {
        self.state.visible && self.animation.is_running()
    }

    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::descriptor::{Content, Placement};
    use crate::toast::scheduler::ManualScheduler;
    use std::cell::Cell;
    use std::rc::Rc;

    fn controller_with_counter() -> (PresentationController<ManualScheduler>, Rc<Cell<u32>>) {
        let mut controller = PresentationController::new(ManualScheduler::new());
        let hidden = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hidden);
        controller.on_hidden(move |completed| {
            assert!(completed);
            counter.set(counter.get() + 1);
        });
        (controller, hidden)
    }

    fn advance(controller: &mut PresentationController<ManualScheduler>, millis: u64) {
        let due = controller
            .scheduler_mut()
            .advance(Duration::from_millis(millis));
        for token in due {
            controller.handle_timer(token);
        }
    }

    #[test]
    fn new_controller_is_hidden() {
        let (controller, hidden) = controller_with_counter();
        assert!(!controller.is_visible());
        assert!(controller.descriptor().is_none());
        assert_eq!(hidden.get(), 0);
    }

    #[test]
    fn loading_forces_no_timer_and_no_tap() {
        let (mut controller, _) = controller_with_counter();
        controller.show(ToastDescriptor::loading(), 5.0, true);

        let state = controller.state();
        assert!(state.visible);
        assert_eq!(state.duration, Duration::ZERO);
        assert!(!state.tap_to_dismiss);
        assert_eq!(controller.scheduler().pending_count(), 0);
    }

    #[test]
    fn loading_stays_until_explicit_dismiss() {
        let (mut controller, hidden) = controller_with_counter();
        controller.show(ToastDescriptor::loading(), 5.0, true);

        advance(&mut controller, 60_000);
        assert!(!controller.tap());
        assert!(controller.is_visible());

        assert!(controller.dismiss());
        assert!(!controller.is_visible());
        assert_eq!(hidden.get(), 1);
    }

    #[test]
    fn text_toast_hides_after_duration() {
        let (mut controller, hidden) = controller_with_counter();
        controller.show(ToastDescriptor::text("Copied"), 2.0, true);

        advance(&mut controller, 1_900);
        assert!(controller.is_visible());
        assert_eq!(hidden.get(), 0);

        advance(&mut controller, 100);
        assert!(!controller.is_visible());
        assert_eq!(hidden.get(), 1);

        advance(&mut controller, 10_000);
        assert_eq!(hidden.get(), 1);
    }

    #[test]
    fn dismiss_before_timer_prevents_second_completion() {
        let (mut controller, hidden) = controller_with_counter();
        controller.show(ToastDescriptor::complete("Saved"), 2.0, true);

        assert!(controller.dismiss());
        assert_eq!(hidden.get(), 1);

        advance(&mut controller, 2_000);
        assert!(!controller.is_visible());
        assert_eq!(hidden.get(), 1);
    }

    #[test]
    fn dismiss_when_hidden_is_noop() {
        let (mut controller, hidden) = controller_with_counter();
        assert!(!controller.dismiss());

        controller.show(ToastDescriptor::text("x"), 0.0, true);
        assert!(controller.dismiss());
        assert!(!controller.dismiss());
        assert_eq!(hidden.get(), 1);
    }

    #[test]
    fn tap_is_ignored_without_tap_to_dismiss() {
        let (mut controller, hidden) = controller_with_counter();
        controller.show(ToastDescriptor::text("Pinned"), 0.0, false);

        assert!(!controller.update(Message::Tap));
        assert!(controller.is_visible());
        assert_eq!(hidden.get(), 0);
    }

    #[test]
    fn tap_dismisses_when_enabled() {
        let (mut controller, hidden) = controller_with_counter();
        controller.show(ToastDescriptor::text("Tap me"), 0.0, true);

        assert!(controller.update(Message::Tap));
        assert!(!controller.is_visible());
        assert_eq!(hidden.get(), 1);
    }

    #[test]
    fn negative_or_nan_duration_disables_auto_dismiss() {
        let (mut controller, _) = controller_with_counter();
        controller.show(ToastDescriptor::text("a"), -3.0, true);
        assert_eq!(controller.state().duration, Duration::ZERO);

        controller.show(ToastDescriptor::text("b"), f64::NAN, true);
        assert_eq!(controller.state().duration, Duration::ZERO);

        controller.show(ToastDescriptor::text("c"), f64::INFINITY, true);
        assert_eq!(controller.state().duration, Duration::ZERO);

        assert_eq!(controller.scheduler().pending_count(), 0);
    }

    #[test]
    fn repeated_show_restarts_timer_and_replaces_descriptor() {
        let (mut controller, hidden) = controller_with_counter();
        controller.show(ToastDescriptor::text("first"), 2.0, true);
        advance(&mut controller, 1_500);

        controller.show(ToastDescriptor::text("second"), 2.0, true);
        assert_eq!(hidden.get(), 0);
        assert_eq!(
            controller.descriptor().and_then(ToastDescriptor::get_title),
            Some("second")
        );

        // The first timer is due now but belongs to the old presentation.
        advance(&mut controller, 500);
        assert!(controller.is_visible());

        advance(&mut controller, 1_500);
        assert!(!controller.is_visible());
        assert_eq!(hidden.get(), 1);
    }

    #[test]
    fn stale_timer_does_not_hide_next_presentation() {
        let (mut controller, hidden) = controller_with_counter();
        controller.show(ToastDescriptor::text("one"), 2.0, true);
        controller.dismiss();

        controller.show(ToastDescriptor::text("two"), 0.0, true);
        advance(&mut controller, 5_000);
        assert!(controller.is_visible());
        assert_eq!(hidden.get(), 1);
    }

    #[test]
    fn each_cycle_fires_completion_once() {
        let (mut controller, hidden) = controller_with_counter();
        for _ in 0..3 {
            controller.show(ToastDescriptor::text("cycle"), 1.0, true);
            advance(&mut controller, 1_000);
        }
        assert_eq!(hidden.get(), 3);
    }

    #[test]
    fn frames_drive_entrance_animation_only_while_visible() {
        let (mut controller, _) = controller_with_counter();
        controller.show(
            ToastDescriptor::new(Placement::TopDrop, Content::complete()),
            0.0,
            true,
        );
        assert!(controller.needs_frames());

        let start = Instant::now();
        controller.update(Message::Frame(start));
        controller.update(Message::Frame(start + Duration::from_secs(1)));
        assert_eq!(controller.animation().trim_progress(), 1.0);
        assert!(!controller.needs_frames());
    }

    #[test]
    fn new_presentation_restarts_entrance_animation() {
        let (mut controller, _) = controller_with_counter();
        controller.show(ToastDescriptor::complete("a"), 0.0, true);
        let start = Instant::now();
        controller.update(Message::Frame(start));
        controller.update(Message::Frame(start + Duration::from_secs(1)));
        assert_eq!(controller.animation().trim_progress(), 1.0);

        controller.dismiss();
        controller.show(ToastDescriptor::complete("b"), 0.0, true);
        assert_eq!(controller.animation().trim_progress(), 0.0);
    }
}
