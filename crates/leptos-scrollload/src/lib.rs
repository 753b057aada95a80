//! Leptos ScrollLoad Utilities
//!
//! Infinite-scroll building blocks for Leptos: a pagination cursor state
//! machine and an IntersectionObserver binding for a sentinel element at
//! the end of a list.

mod cursor;

pub use cursor::PageCursor;

use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// RAII wrapper around a browser IntersectionObserver watching a single
/// sentinel element. The JS callback stays alive as long as the wrapper
/// does; dropping it disconnects the observer.
pub struct SentinelObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl SentinelObserver {
    /// `margin_px` widens the viewport by that many pixels, so the callback
    /// fires shortly before the sentinel actually scrolls into view.
    /// `threshold` is the visible fraction required (1.0 = fully visible).
    pub fn new(
        margin_px: i32,
        threshold: f64,
        mut on_visible: impl FnMut() + 'static,
    ) -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    on_visible();
                }
            }
        });

        let options = IntersectionObserverInit::new();
        options.set_root_margin(&format!("{}px", margin_px));
        options.set_threshold(&JsValue::from_f64(threshold));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, target: &web_sys::Element) {
        self.observer.observe(target);
    }
}

impl Drop for SentinelObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Bind a sentinel div to a visibility callback.
///
/// An IntersectionObserver reports only threshold *crossings*, plus one
/// record per `observe()` call. A sentinel that stays fully visible while
/// content is appended never crosses again, so the observer is recreated
/// whenever `rearm` changes (e.g. a fetch settling); the fresh `observe()`
/// re-delivers the record and a still-visible sentinel fires again.
///
/// Also re-observes whenever the node behind `target` changes (e.g. the
/// list is unmounted and remounted), and disconnects the observer when the
/// calling component is cleaned up.
pub fn watch_sentinel(
    target: NodeRef<Div>,
    margin_px: i32,
    threshold: f64,
    rearm: Signal<bool>,
    on_visible: impl Fn() + Clone + 'static,
) {
    let handle = StoredValue::new_local(None::<SentinelObserver>);

    Effect::new(move |_| {
        rearm.track();
        let Some(el) = target.get() else {
            return;
        };
        let on_visible = on_visible.clone();
        match SentinelObserver::new(margin_px, threshold, move || on_visible()) {
            Ok(observer) => {
                observer.observe(&el);
                // Replacing the handle drops (disconnects) any previous observer
                handle.set_value(Some(observer));
            }
            Err(e) => web_sys::console::error_1(&e),
        }
    });

    on_cleanup(move || {
        handle.update_value(|h| {
            h.take();
        });
    });
}
