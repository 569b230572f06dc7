//! GridKit
//!
//! Layout pipeline for grow-console pages: a serializable tent layout spec
//! built by page-owned builders, a renderer registry dispatching occupant
//! kinds to cells, windowed rendering for large collections, and draft
//! overlay utilities for multi-step wizards.

mod cells;
mod draft;
mod folder;
mod observer;
mod registry;
mod spec;
mod view;
mod virtual_grid;
mod virtual_list;
mod window;

pub use cells::{fallback_cell, ChipBadge, EmptySlotCell, PlantCell, SlotDefCell, TrayCell, TrayFolderCell};
pub use draft::{build_changeset, build_changeset_by, get_draft_or_persisted, is_dirty_value, is_dirty_value_by, Change};
pub use folder::{provide_tray_folders, use_tray_folders, FolderState, TrayFolderManager};
pub use observer::use_element_size;
pub use registry::{
    create_position_renderer_map, render_position, PositionRenderer, PressHandler, RenderContext, RendererMap,
};
pub use spec::{
    spec_id, CellState, ChipCorner, ChipSpec, DndSpec, EmptySlotOccupant, OccupantKind, OccupantSpec,
    PlantOccupant, PositionSpec, ShelfSpec, SlotDefOccupant, TentLayoutSpec, TentMeta, TentSpec, Tone,
    TrayOccupant, TrayStackOccupant,
};
pub use view::TentLayoutView;
pub use virtual_grid::{VirtualGrid, DEFAULT_GRID_OVERSCAN, DEFAULT_ROW_PX};
pub use virtual_list::{KeyFn, RenderFn, SizeFn, VirtualList, DEFAULT_ITEM_PX, DEFAULT_OVERSCAN};
pub use window::{
    row_count, GridBreakpoints, ItemLayout, LG_MIN_PX, MD_MIN_PX, SM_MIN_PX, VIRTUALIZATION_THRESHOLD, XL_MIN_PX,
};
