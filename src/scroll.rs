//! Back-to-top control: visibility state machine and the scroll animation.

use std::time::Duration;

/// Scroll offset (px) past which the control is shown.
pub const SHOW_THRESHOLD: f64 = 300.0;

/// Time the exit transition gets before the control is taken out of layout.
pub const EXIT_DELAY: Duration = Duration::from_millis(250);

/// Duration of the animated scroll back to the top, in milliseconds.
pub const SCROLL_DURATION_MS: f64 = 750.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Enter,
    Exit,
}

/// One scheduled hide; only the most recent one takes effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HideTicket(u64);

/// State of the back-to-top control.
///
/// Leaving the visible zone starts the exit animation at once but keeps the
/// control in layout until the [`HideTicket`] handed out for that exit is
/// passed to [`BackToTop::hide`], [`EXIT_DELAY`] later. Re-entering first
/// invalidates the ticket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BackToTop {
    state: Visibility,
    transition: Option<Transition>,
    displayed: bool,
    pending_hide: Option<HideTicket>,
    next_hide: u64,
}

impl BackToTop {
    #[must_use]
    pub fn state(&self) -> Visibility {
        self.state
    }

    /// Whether the control takes up layout (`display: block`).
    #[must_use]
    pub fn is_displayed(&self) -> bool {
        self.displayed
    }

    #[must_use]
    pub fn pending_hide(&self) -> Option<HideTicket> {
        self.pending_hide
    }

    #[must_use]
    pub fn class(&self) -> &'static str {
        match self.transition {
            Some(Transition::Enter) => "back-to-top btnEntrance",
            Some(Transition::Exit) => "back-to-top btnExit",
            None => "back-to-top",
        }
    }

    /// Feed the current vertical offset; returns a transition only when the
    /// state actually changes.
    pub fn on_scroll(&mut self, offset: f64) -> Option<Transition> {
        let next = if offset > SHOW_THRESHOLD {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };

        if next == self.state {
            return None;
        }

        self.state = next;
        let transition = match next {
            Visibility::Visible => {
                self.displayed = true;
                self.pending_hide = None;
                Transition::Enter
            }
            Visibility::Hidden => {
                self.next_hide += 1;
                self.pending_hide = Some(HideTicket(self.next_hide));
                Transition::Exit
            }
        };
        self.transition = Some(transition);
        Some(transition)
    }

    /// Take the control out of layout if `ticket` is still the pending hide.
    /// Returns whether anything changed.
    pub fn hide(&mut self, ticket: HideTicket) -> bool {
        if self.pending_hide != Some(ticket) {
            return false;
        }
        self.pending_hide = None;
        self.displayed = false;
        true
    }
}

/// Cubic ease-in-out: `t` elapsed, `b` start value, `c` total change, `d` duration.
#[must_use]
pub fn ease_in_out_cubic(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let mut t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * t * t * t + b;
    }
    t -= 2.0;
    c / 2.0 * (t * t * t + 2.0) + b
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub position: f64,
    pub done: bool,
}

/// Samples an eased scroll from `start` to `target`, one frame at a time.
///
/// The first sample fixes the time origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnimation {
    start_position: f64,
    distance: f64,
    duration: f64,
    started_at: Option<f64>,
}

impl ScrollAnimation {
    #[must_use]
    pub fn new(start_position: f64, target: f64, duration: f64) -> Self {
        Self {
            start_position,
            distance: target - start_position,
            duration,
            started_at: None,
        }
    }

    #[must_use]
    pub fn to_top(start_position: f64) -> Self {
        Self::new(start_position, 0.0, SCROLL_DURATION_MS)
    }

    pub fn sample(&mut self, timestamp: f64) -> Frame {
        let started_at = *self.started_at.get_or_insert(timestamp);
        let progress = timestamp - started_at;

        if progress >= self.duration {
            return Frame {
                position: self.start_position + self.distance,
                done: true,
            };
        }

        Frame {
            position: ease_in_out_cubic(
                progress,
                self.start_position,
                self.distance,
                self.duration,
            ),
            done: false,
        }
    }
}
