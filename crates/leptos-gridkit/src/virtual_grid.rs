//! Virtualized Grid
//!
//! Row-windowed rendering for responsive multi-column collections. Column
//! count follows the container width through the breakpoint table; rows are
//! recomputed as ceil(items / columns), the last row padded with empty
//! placeholders.

use leptos::html::Div;
use leptos::prelude::*;

use crate::observer::use_element_size;
use crate::virtual_list::{KeyFn, RenderFn};
use crate::window::{row_count, GridBreakpoints, ItemLayout};

pub const DEFAULT_ROW_PX: f64 = 120.0;
pub const DEFAULT_GRID_OVERSCAN: usize = 2;

#[component]
pub fn VirtualGrid<T>(
    items: Signal<Vec<T>>,
    key: KeyFn<T>,
    render: RenderFn<T>,
    #[prop(default = GridBreakpoints::default())]
    breakpoints: GridBreakpoints,
    #[prop(default = DEFAULT_ROW_PX)]
    row_size: f64,
    #[prop(default = DEFAULT_GRID_OVERSCAN)]
    overscan: usize,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    let container = NodeRef::<Div>::new();
    let (scroll_top, set_scroll_top) = signal(0.0f64);
    let size = use_element_size(container);

    let columns = Memo::new(move |_| breakpoints.resolve(size.get().0));
    let layout = Memo::new(move |_| {
        ItemLayout::uniform(row_count(items.with(|i| i.len()), columns.get()), row_size)
    });

    let windowed_rows = {
        let key = key.clone();
        move || {
            let columns = columns.get();
            let layout = layout.get();
            let range = layout.visible_range(scroll_top.get(), size.get().1, overscan);
            items.with(|items| {
                range
                    .map(|row| {
                        let start = row * columns;
                        let end = (start + columns).min(items.len());
                        let cells: Vec<T> = items[start..end].to_vec();
                        let row_key = cells.iter().map(|c| key(c)).collect::<Vec<_>>().join("|");
                        (format!("{row_key}#{columns}"), cells, layout.offset(row))
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
                    each=windowed_rows
                    key=|entry| entry.0.clone()
                    children=move |(_, cells, top)| {
                        let pad = columns.get_untracked().saturating_sub(cells.len());
                        let style = format!(
                            "position: absolute; top: {top}px; left: 0; right: 0; height: {row_size}px;"
                        );
                        view! {
                            <div class="gridkit-grid-row" style=style>
                                {cells.iter().map(|cell| render(cell)).collect_view()}
                                {(0..pad).map(|_| view! { <div class="gridkit-grid-pad"></div> }).collect_view()}
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
