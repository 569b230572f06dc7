//! Tent Layout View
//!
//! Walks a `TentLayoutSpec` and renders every position through the
//! renderer registry. Pages supply the spec, an optional override map and
//! a render context; everything else is generic.

use leptos::prelude::*;

use crate::registry::{create_position_renderer_map, render_position, RenderContext, RendererMap};
use crate::spec::{TentLayoutSpec, TentSpec};

#[component]
pub fn TentLayoutView(
    spec: Signal<TentLayoutSpec>,
    #[prop(optional, into)] renderers: Option<RendererMap>,
    #[prop(optional)] context: RenderContext,
) -> impl IntoView {
    let renderers = renderers.unwrap_or_else(|| create_position_renderer_map(RendererMap::new()));

    // Specs are rebuilt wholesale each pass, so the tree re-renders as one
    // unit; per-tent diffing would hide in-place occupant changes.
    view! {
        <div class="tent-layout">
            {move || {
                spec.get()
                    .tents
                    .into_iter()
                    .map(|tent| {
                        let renderers = renderers.clone();
                        let context = context.clone();
                        view! { <TentSection tent=tent renderers=renderers context=context /> }
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
fn TentSection(tent: TentSpec, renderers: RendererMap, context: RenderContext) -> impl IntoView {
    let removed_slots: u32 = tent
        .meta
        .as_ref()
        .map(|meta| meta.removed_slots_in_shelf.iter().sum())
        .unwrap_or(0);
    let tent_code = tent.meta.as_ref().and_then(|meta| meta.tent_code.clone());

    view! {
        <section class="tent-section" class:selected=tent.state.selected>
            <header class="tent-header">
                <span class="tent-label">{tent.label.clone()}</span>
                {tent_code.map(|code| view! { <span class="tent-code">{code}</span> })}
                {tent.chips.iter().cloned().map(|chip| {
                    view! { <span class=format!("chip chip-{}", chip.tone.class())>{chip.label}</span> }
                }).collect_view()}
                {(removed_slots > 0).then(|| view! {
                    <span class="tent-removed-note">{format!("{removed_slots} slots removed")}</span>
                })}
            </header>
            {tent.shelves.iter().cloned().map(|shelf| {
                let renderers = renderers.clone();
                let context = context.clone();
                view! {
                    <div class="shelf-row">
                        <span class="shelf-label">{shelf.label.clone()}</span>
                        <div class="shelf-positions">
                            {shelf.positions.iter().map(|position| {
                                render_position(&renderers, position, &context)
                            }).collect_view()}
                        </div>
                    </div>
                }
            }).collect_view()}
        </section>
    }
}
