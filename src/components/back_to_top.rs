use leptos::prelude::*;

use crate::scroll::{BackToTop, ScrollAnimation, EXIT_DELAY};

fn scroll_offset() -> f64 {
    window().scroll_y().unwrap_or(0.0)
}

fn now_ms() -> f64 {
    window().performance().map_or(0.0, |performance| performance.now())
}

/// Drive one animation frame, then queue the next until the animation ends.
fn animate_scroll(mut animation: ScrollAnimation) {
    request_animation_frame(move || {
        let frame = animation.sample(now_ms());
        window().scroll_to_with_x_and_y(0.0, frame.position);
        if !frame.done {
            animate_scroll(animation);
        }
    });
}

#[component]
pub fn BackToTopButton() -> impl IntoView {
    let (control, set_control) = signal(BackToTop::default());
    let hide_timer = StoredValue::new(None::<TimeoutHandle>);

    let on_scroll = move || {
        let offset = scroll_offset();
        let mut change = None;
        set_control.maybe_update(|c| {
            change = c.on_scroll(offset);
            change.is_some()
        });
        if change.is_none() {
            return;
        }

        hide_timer.update_value(|timer| {
            if let Some(timer) = timer.take() {
                timer.clear();
            }
        });

        let Some(ticket) = control.with_untracked(BackToTop::pending_hide) else {
            return;
        };
        let hide = move || set_control.maybe_update(|c| c.hide(ticket));
        match set_timeout_with_handle(hide, EXIT_DELAY) {
            Ok(handle) => hide_timer.set_value(Some(handle)),
            Err(_) => hide(),
        }
    };

    // Listeners only make sense in the browser; effects never run on the server.
    Effect::new(move |_| {
        let handle = window_event_listener(leptos::ev::scroll, move |_| on_scroll());
        on_cleanup(move || handle.remove());
    });

    view! {
        <button
            id="back-to-top-btn"
            class=move || control.with(BackToTop::class)
            style:display=move || if control.with(BackToTop::is_displayed) { "block" } else { "none" }
            on:click=move |_| animate_scroll(ScrollAnimation::to_top(scroll_offset()))
        >
            "↑"
        </button>
    }
}
