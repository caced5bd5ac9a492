//! Fixed-height row windowing for long lists

use std::ops::Range;

/// Row height used by the agents list
pub const AGENT_ROW_HEIGHT: u32 = 50;
/// Rows rendered beyond each edge of the viewport
pub const AGENT_OVERSCAN: usize = 10;

/// One rendered row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VirtualItem {
    pub index: usize,
    pub start: u32,
    pub end: u32,
}

/// Computes which rows of a list need rendering for a scroll position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Virtualizer {
    pub count: usize,
    pub row_height: u32,
    pub overscan: usize,
}

impl Virtualizer {
    pub fn new(count: usize, row_height: u32, overscan: usize) -> Self {
        Self {
            count,
            row_height,
            overscan,
        }
    }

    pub fn for_agents(count: usize) -> Self {
        Self::new(count, AGENT_ROW_HEIGHT, AGENT_OVERSCAN)
    }

    /// Offsets saturate at `u32::MAX` rather than wrapping
    pub fn total_size(&self) -> u32 {
        self.item_start(self.count)
    }

    pub fn item_start(&self, index: usize) -> u32 {
        u32::try_from(index)
            .unwrap_or(u32::MAX)
            .saturating_mul(self.row_height)
    }

    /// Indexes intersecting the viewport, widened by the overscan
    pub fn range(&self, scroll_offset: u32, viewport_height: u32) -> Range<usize> {
        if self.count == 0 || self.row_height == 0 {
            return 0..0;
        }

        let row = self.row_height as usize;
        let first = (scroll_offset as usize / row).min(self.count - 1);
        let bottom = scroll_offset.saturating_add(viewport_height) as usize;
        let last = bottom.div_ceil(row).min(self.count);

        first.saturating_sub(self.overscan)..last.saturating_add(self.overscan).min(self.count)
    }

    pub fn items(&self, scroll_offset: u32, viewport_height: u32) -> Vec<VirtualItem> {
        self.range(scroll_offset, viewport_height)
            .map(|index| {
                let start = self.item_start(index);
                VirtualItem {
                    index,
                    start,
                    end: start.saturating_add(self.row_height),
                }
            })
            .collect()
    }

    /// Space above and below the rendered rows as `(top, bottom)`
    pub fn padding(&self, items: &[VirtualItem]) -> (u32, u32) {
        match (items.first(), items.last()) {
            (Some(first), Some(last)) => (first.start, self.total_size().saturating_sub(last.end)),
            _ => (0, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_renders_nothing() {
        let virtualizer = Virtualizer::for_agents(0);
        assert_eq!(virtualizer.range(0, 600), 0..0);
        assert_eq!(virtualizer.padding(&[]), (0, 0));
        assert_eq!(virtualizer.total_size(), 0);
    }

    #[test]
    fn short_list_renders_everything() {
        let virtualizer = Virtualizer::for_agents(5);
        assert_eq!(virtualizer.range(0, 600), 0..5);
    }

    #[test]
    fn window_extends_by_overscan() {
        let virtualizer = Virtualizer::for_agents(1000);
        // Rows 100..112 are visible at offset 5000 with a 600px viewport
        assert_eq!(virtualizer.range(5000, 600), 90..122);
    }

    #[test]
    fn window_clamps_at_the_end() {
        let virtualizer = Virtualizer::for_agents(100);
        assert_eq!(virtualizer.range(100_000, 600), 89..100);
    }

    #[test]
    fn padding_fills_space_around_rows() {
        let virtualizer = Virtualizer::for_agents(1000);
        let items = virtualizer.items(5000, 600);
        let (top, bottom) = virtualizer.padding(&items);

        assert_eq!(items[0].start, 4500);
        assert_eq!(top, 4500);
        assert_eq!(bottom, 50_000 - 122 * 50);
        assert_eq!(top + items.len() as u32 * 50 + bottom, virtualizer.total_size());
    }

    #[test]
    fn extreme_offsets_saturate() {
        let virtualizer = Virtualizer::for_agents(10);
        assert_eq!(virtualizer.range(u32::MAX - 100, 600), 0..10);

        let huge = Virtualizer::new(usize::MAX, 50, usize::MAX);
        assert_eq!(huge.total_size(), u32::MAX);
        assert_eq!(huge.range(0, 600), 0..usize::MAX);
    }
}
