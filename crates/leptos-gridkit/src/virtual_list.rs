//! Virtualized List
//!
//! Windowed rendering for long lists: only items intersecting the scroll
//! viewport (plus overscan) hit the DOM, absolutely positioned inside a
//! total-height sizer so the scrollbar stays honest.

use std::sync::Arc;

use leptos::html::Div;
use leptos::prelude::*;

use crate::observer::use_element_size;
use crate::window::ItemLayout;

/// Stable render key for an item.
pub type KeyFn<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;
/// Renders one item to a view.
pub type RenderFn<T> = Arc<dyn Fn(&T) -> AnyView + Send + Sync>;
/// Per-item size estimate in pixels.
pub type SizeFn<T> = Arc<dyn Fn(&T) -> f64 + Send + Sync>;

pub const DEFAULT_ITEM_PX: f64 = 48.0;
pub const DEFAULT_OVERSCAN: usize = 4;

#[component]
pub fn VirtualList<T>(
    items: Signal<Vec<T>>,
    key: KeyFn<T>,
    render: RenderFn<T>,
    /// Constant size estimate, used unless `size_of` is given.
    #[prop(default = DEFAULT_ITEM_PX)]
    item_size: f64,
    #[prop(optional)]
    size_of: Option<SizeFn<T>>,
    #[prop(default = DEFAULT_OVERSCAN)]
    overscan: usize,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    let container = NodeRef::<Div>::new();
    let (scroll_top, set_scroll_top) = signal(0.0f64);
    let size = use_element_size(container);

    let layout = Memo::new(move |_| {
        items.with(|items| match &size_of {
            Some(size_of) => ItemLayout::from_fn(items.len(), |i| size_of(&items[i])),
            None => ItemLayout::uniform(items.len(), item_size),
        })
    });

    let windowed = {
        let key = key.clone();
        move || {
            let layout = layout.get();
            let range = layout.visible_range(scroll_top.get(), size.get().1, overscan);
            items.with(|items| {
                range
                    .filter_map(|i| {
                        items.get(i).map(|item| {
                            (key(item), item.clone(), layout.offset(i), layout.size(i))
                        })
                    })
                    .collect::<Vec<_>>()
            })
        }
    };

    view! {
        <div
            class="gridkit-viewport"
            node_ref=container
            on:scroll=move |_| {
                if let Some(element) = container.get_untracked() {
                    set_scroll_top.set(element.scroll_top() as f64);
                }
            }
        >
            <div
                class="gridkit-sizer"
                style=move || format!("position: relative; height: {}px;", layout.get().total())
            >
                <For
                    each=windowed
                    key=|entry| entry.0.clone()
                    children=move |(_, item, top, height)| {
                        let style = format!(
                            "position: absolute; top: {top}px; left: 0; right: 0; height: {height}px;"
                        );
                        view! { <div class="gridkit-item" style=style>{render(&item)}</div> }
                    }
                />
            </div>
        </div>
    }
}
