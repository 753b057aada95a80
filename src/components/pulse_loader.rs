use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Default splash duration in milliseconds
const DEFAULT_DURATION_MS: u32 = 3000;

/// Fixed-duration splash animation.
///
/// Shows three pulsing circles, then hides itself permanently and invokes
/// `on_loading_complete` exactly once. The pending timer is cancelled if
/// the component is torn down first, so the callback never fires after
/// teardown.
#[component]
pub fn PulseLoader(
    /// Called once when the splash duration has elapsed
    #[prop(optional)]
    on_loading_complete: Option<Callback<()>>,
    /// How long the loader stays on screen
    #[prop(default = DEFAULT_DURATION_MS)]
    duration_ms: u32,
) -> impl IntoView {
    let (visible, set_visible) = signal(true);

    // One-shot timer; dropping the handle clears a still-pending timeout
    let timer = StoredValue::new_local(Some(Timeout::new(duration_ms, move || {
        set_visible.set(false);
        if let Some(cb) = on_loading_complete {
            cb.run(());
        }
    })));

    on_cleanup(move || {
        timer.update_value(|t| {
            t.take();
        });
    });

    view! {
        <Show when=move || visible.get()>
            <div class="loader-container">
                <div class="pulse-loader">
                    <div class="outer-circle"></div>
                    <div class="middle-circle"></div>
                    <div class="inner-circle"></div>
                </div>
            </div>
        </Show>
    }
}
