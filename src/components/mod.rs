//! UI Components
//!
//! Console pages and shared widgets.

mod baseline_panel;
mod experiment_bar;
mod feeding_page;
mod overview_page;
mod placement_wizard;
mod plant_roster;
mod recipes_page;
mod rotations_page;

pub use baseline_panel::BaselinePanel;
pub use experiment_bar::ExperimentBar;
pub use feeding_page::FeedingPage;
pub use overview_page::OverviewPage;
pub use placement_wizard::PlacementWizard;
pub use plant_roster::PlantRoster;
pub use recipes_page::RecipesPage;
pub use rotations_page::RotationsPage;
