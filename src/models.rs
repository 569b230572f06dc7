//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

/// Experiment lifecycle status (computed server-side)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperimentStatus {
    #[default]
    Planning,
    Active,
    Closed,
}

/// Experiment data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experiment {
    pub id: String,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub status: ExperimentStatus,
    #[serde(default)]
    pub started_at: Option<String>,
}

/// Tent data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tent {
    pub id: String,
    pub experiment_id: String,
    pub code: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub shelves: Vec<Shelf>,
}

/// Shelf within a tent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shelf {
    pub id: String,
    /// 1-based index within the tent
    pub index: u32,
    #[serde(default)]
    pub slots: Vec<Slot>,
}

/// Addressable slot on a shelf
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    pub id: String,
    /// 1-based index on the shelf
    pub index: u32,
    #[serde(default)]
    pub tray_id: Option<String>,
}

/// Tray data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tray {
    pub id: String,
    pub code: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub capacity: u32,
    #[serde(default)]
    pub plant_ids: Vec<String>,
    #[serde(default)]
    pub recipe_code: Option<String>,
}

/// Plant placement status (computed server-side)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlantStatus {
    #[default]
    Unplaced,
    Placed,
    Harvested,
}

impl PlantStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlantStatus::Unplaced => "unplaced",
            PlantStatus::Placed => "placed",
            PlantStatus::Harvested => "harvested",
        }
    }
}

/// Plant data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    pub id: String,
    pub code: String,
    #[serde(default)]
    pub strain: Option<String>,
    #[serde(default)]
    pub status: PlantStatus,
    #[serde(default)]
    pub grade: Option<String>,
    #[serde(default)]
    pub recipe_code: Option<String>,
    #[serde(default)]
    pub tray_id: Option<String>,
}

/// Recipe data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub phase_count: u32,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Plant baseline measurement (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Baseline {
    pub id: String,
    pub plant_id: String,
    pub captured_at: String,
    #[serde(default)]
    pub height_mm: u32,
    #[serde(default)]
    pub node_count: u32,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Tray rotation entry (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rotation {
    pub id: String,
    pub tray_id: String,
    pub rotated_at: String,
    /// Quarter turns clockwise
    pub quarter_turns: u32,
    #[serde(default)]
    pub operator: Option<String>,
}

/// Feeding action status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedingStatus {
    #[default]
    Pending,
    Done,
    Skipped,
}

impl FeedingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedingStatus::Pending => "pending",
            FeedingStatus::Done => "done",
            FeedingStatus::Skipped => "skipped",
        }
    }
}

/// Scheduled feeding action (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedingAction {
    pub id: String,
    pub experiment_id: String,
    #[serde(default)]
    pub recipe_code: Option<String>,
    pub scheduled_for: String,
    #[serde(default)]
    pub status: FeedingStatus,
    #[serde(default)]
    pub solution: Option<String>,
    #[serde(default)]
    pub volume_ml: u32,
}
