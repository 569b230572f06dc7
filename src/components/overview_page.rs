//! Overview Page
//!
//! Tent layout with expandable tray folders, plus the unplaced-plant
//! roster and the baseline capture panel.

use std::sync::Arc;

use leptos::prelude::*;

use leptos_gridkit::{provide_tray_folders, RenderContext, TentLayoutView};

use crate::components::{BaselinePanel, PlantRoster};
use crate::context::AppContext;
use crate::layout::{build_overview_spec, ordered_plant_roster};
use crate::models::{Plant, PlantStatus};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn OverviewPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    // One open tray folder at a time, scoped to this page.
    provide_tray_folders();

    let spec = Memo::new(move |_| {
        let experiment = ctx.current_experiment.get().unwrap_or_default();
        store.tents().with(|tents| {
            store.trays().with(|trays| {
                store.plants().with(|plants| build_overview_spec(&experiment, tents, trays, plants))
            })
        })
    });

    let unplaced = Memo::new(move |_| {
        store.tents().with(|tents| {
            store.trays().with(|trays| {
                store.plants().with(|plants| {
                    ordered_plant_roster(plants, tents, trays)
                        .into_iter()
                        .filter(|plant| plant.status == PlantStatus::Unplaced)
                        .collect::<Vec<Plant>>()
                })
            })
        })
    });

    let context = RenderContext {
        tray_folders: true,
        on_plant_press: Some(Arc::new(move |plant_id: &str| {
            ctx.select_plant(Some(plant_id.to_string()));
        })),
        ..RenderContext::default()
    };

    view! {
        <div class="overview-page">
            <div class="overview-main">
                <TentLayoutView spec=Signal::from(spec) context=context />

                <h2 class="roster-heading">
                    {move || format!("Unplaced plants ({})", unplaced.with(|p| p.len()))}
                </h2>
                <PlantRoster plants=Signal::from(unplaced) />
            </div>

            <BaselinePanel />
        </div>
    }
}
