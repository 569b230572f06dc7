//! Element Size Observation
//!
//! ResizeObserver-backed size signal for scroll containers. Reports (0, 0)
//! until the element is mounted, so windowing degrades to an empty viewport
//! instead of panicking.

use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Observed (width, height) of the element behind `target`, updated on
/// mount and on every resize.
pub fn use_element_size(target: NodeRef<Div>) -> ReadSignal<(f64, f64)> {
    let (size, set_size) = signal((0.0f64, 0.0f64));

    Effect::new(move |observed: Option<bool>| {
        // Bind once, when the node first mounts.
        if observed.unwrap_or(false) {
            return true;
        }
        let Some(element) = target.get() else {
            return false;
        };

        let rect = element.get_bounding_client_rect();
        set_size.set((rect.width(), rect.height()));

        let on_resize = Closure::<dyn FnMut(js_sys::Array, web_sys::ResizeObserver)>::new(
            move |entries: js_sys::Array, _observer: web_sys::ResizeObserver| {
                if let Ok(entry) = entries.get(0).dyn_into::<web_sys::ResizeObserverEntry>() {
                    let rect = entry.content_rect();
                    set_size.set((rect.width(), rect.height()));
                }
            },
        );
        match web_sys::ResizeObserver::new(on_resize.as_ref().unchecked_ref()) {
            Ok(observer) => {
                observer.observe(&element);
                // Keep the callback and the observer handle alive for the
                // element's lifetime.
                on_resize.forget();
                std::mem::forget(observer);
                true
            }
            Err(_) => {
                on_resize.forget();
                false
            }
        }
    });

    size
}
