//! Windowing Math
//!
//! Pure visible-range and responsive-column arithmetic shared by the
//! virtualized list and grid components.

use std::ops::Range;

/// Collections at or below this length render statically; virtualization
/// only pays off above it.
pub const VIRTUALIZATION_THRESHOLD: usize = 24;

/// Prefix-summed item offsets built from a size estimate.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemLayout {
    // offsets[i] is the top of item i; offsets[len] is the total height.
    offsets: Vec<f64>,
}

impl ItemLayout {
    /// Every item gets the same estimated size.
    pub fn uniform(count: usize, size: f64) -> Self {
        let size = size.max(0.0);
        let mut offsets = Vec::with_capacity(count + 1);
        for i in 0..=count {
            offsets.push(i as f64 * size);
        }
        Self { offsets }
    }

    /// Per-item size estimates.
    pub fn from_fn(count: usize, size_of: impl Fn(usize) -> f64) -> Self {
        let mut offsets = Vec::with_capacity(count + 1);
        let mut top = 0.0;
        offsets.push(0.0);
        for i in 0..count {
            top += size_of(i).max(0.0);
            offsets.push(top);
        }
        Self { offsets }
    }

    pub fn count(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Total estimated height, used for the scrollbar sizer element.
    pub fn total(&self) -> f64 {
        *self.offsets.last().unwrap_or(&0.0)
    }

    pub fn offset(&self, index: usize) -> f64 {
        self.offsets[index]
    }

    pub fn size(&self, index: usize) -> f64 {
        self.offsets[index + 1] - self.offsets[index]
    }

    /// Indices of items intersecting `[scroll_top, scroll_top + viewport]`,
    /// widened by `overscan` items on each side. Empty when the viewport has
    /// no height yet (container not mounted or not laid out).
    pub fn visible_range(&self, scroll_top: f64, viewport: f64, overscan: usize) -> Range<usize> {
        let count = self.count();
        if count == 0 || viewport <= 0.0 {
            return 0..0;
        }
        let top = scroll_top.max(0.0);
        let bottom = top + viewport;
        // First item whose bottom edge is past the top of the viewport.
        let first = self.offsets[1..=count].partition_point(|&b| b <= top);
        // First item whose top edge is at or past the bottom of the viewport.
        let last = self.offsets[..count].partition_point(|&t| t < bottom);
        first.saturating_sub(overscan)..(last + overscan).min(count)
    }
}

/// Minimum container widths for each responsive tier.
pub const SM_MIN_PX: f64 = 640.0;
pub const MD_MIN_PX: f64 = 768.0;
pub const LG_MIN_PX: f64 = 1024.0;
pub const XL_MIN_PX: f64 = 1280.0;

/// Ordered column-count breakpoints. `base` always applies; each defined
/// tier overrides it once the width reaches that tier's threshold, and the
/// overrides accumulate monotonically with width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridBreakpoints {
    pub base: usize,
    pub sm: Option<usize>,
    pub md: Option<usize>,
    pub lg: Option<usize>,
    pub xl: Option<usize>,
}

impl Default for GridBreakpoints {
    fn default() -> Self {
        Self {
            base: 1,
            sm: Some(2),
            md: Some(3),
            lg: Some(4),
            xl: None,
        }
    }
}

impl GridBreakpoints {
    pub fn resolve(&self, width: f64) -> usize {
        let tiers = [
            (SM_MIN_PX, self.sm),
            (MD_MIN_PX, self.md),
            (LG_MIN_PX, self.lg),
            (XL_MIN_PX, self.xl),
        ];
        let mut columns = self.base;
        for (min_width, count) in tiers {
            if width < min_width {
                break;
            }
            if let Some(count) = count {
                columns = count;
            }
        }
        columns.max(1)
    }
}

/// Rows needed to hold `items` at `columns` per row.
pub fn row_count(items: usize, columns: usize) -> usize {
    items.div_ceil(columns.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_visible_range() {
        let layout = ItemLayout::uniform(100, 10.0);
        assert_eq!(layout.total(), 1000.0);
        // Viewport [100, 150): items 10..15 intersect.
        assert_eq!(layout.visible_range(100.0, 50.0, 0), 10..15);
        // Overscan widens both sides.
        assert_eq!(layout.visible_range(100.0, 50.0, 2), 8..17);
    }

    #[test]
    fn test_visible_range_clamps_at_edges() {
        let layout = ItemLayout::uniform(5, 10.0);
        assert_eq!(layout.visible_range(0.0, 100.0, 3), 0..5);
        assert_eq!(layout.visible_range(-50.0, 20.0, 0), 0..2);
    }

    #[test]
    fn test_zero_viewport_renders_nothing() {
        let layout = ItemLayout::uniform(100, 10.0);
        assert_eq!(layout.visible_range(100.0, 0.0, 4), 0..0);
        let empty = ItemLayout::uniform(0, 10.0);
        assert_eq!(empty.visible_range(0.0, 500.0, 4), 0..0);
    }

    #[test]
    fn test_from_fn_offsets() {
        let sizes = [10.0, 30.0, 20.0];
        let layout = ItemLayout::from_fn(3, |i| sizes[i]);
        assert_eq!(layout.total(), 60.0);
        assert_eq!(layout.offset(1), 10.0);
        assert_eq!(layout.size(1), 30.0);
        // Viewport [15, 35): item 1 only.
        assert_eq!(layout.visible_range(15.0, 20.0, 0), 1..2);
    }

    #[test]
    fn test_breakpoint_resolution() {
        let bp = GridBreakpoints {
            base: 1,
            sm: None,
            md: Some(2),
            lg: Some(4),
            xl: None,
        };
        // 1100 >= lg threshold 1024.
        assert_eq!(bp.resolve(1100.0), 4);
        // 700 < md threshold 768 and no sm tier defined: base applies.
        assert_eq!(bp.resolve(700.0), 1);
        assert_eq!(bp.resolve(800.0), 2);
    }

    #[test]
    fn test_breakpoint_gaps_keep_last_defined_tier() {
        let bp = GridBreakpoints {
            base: 2,
            sm: Some(3),
            md: None,
            lg: None,
            xl: Some(6),
        };
        // md/lg undefined: sm's count holds until xl kicks in.
        assert_eq!(bp.resolve(900.0), 3);
        assert_eq!(bp.resolve(1300.0), 6);
        assert_eq!(bp.resolve(100.0), 2);
    }

    #[test]
    fn test_row_count_pads_partial_rows() {
        assert_eq!(row_count(10, 4), 3);
        assert_eq!(row_count(8, 4), 2);
        assert_eq!(row_count(0, 4), 0);
        assert_eq!(row_count(5, 0), 5);
    }
}
