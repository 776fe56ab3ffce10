//! Responsive card sizing for the rail strip

use crate::infra::constants::{breakpoints, page, product_rail::layout as rail};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RailLayout {
    /// Cards fully visible at once.
    pub columns: u16,
    /// Width of one preview card.
    pub item_width: f32,
    /// Gap between cards.
    pub gap: f32,
    /// Vertical section padding.
    pub padding_y: f32,
}

impl RailLayout {
    /// Layout for a strip `strip_width` wide inside a window `window_width`
    /// wide. Two cards fit below the `small` breakpoint, three above.
    pub fn new(window_width: f32, strip_width: f32) -> Self {
        let small_up = breakpoints::is_small_up(window_width);
        let columns = if small_up {
            rail::WIDE_COLUMNS
        } else {
            rail::NARROW_COLUMNS
        };
        let gaps = rail::ITEM_GAP * f32::from(columns - 1);
        let item_width = ((strip_width - gaps) / f32::from(columns)).max(0.0);
        Self {
            columns,
            item_width,
            gap: rail::ITEM_GAP,
            padding_y: if small_up {
                rail::SECTION_PADDING_Y_SMALL
            } else {
                rail::SECTION_PADDING_Y
            },
        }
    }

    /// Layout for a rail placed in the page content container.
    pub fn for_window(window_width: f32) -> Self {
        Self::new(window_width, page::content_width(window_width))
    }

    /// Total width of a strip holding `count` cards.
    pub fn content_width(&self, count: usize) -> f32 {
        if count == 0 {
            return 0.0;
        }
        let n = count as f32;
        n * self.item_width + (n - 1.0) * self.gap
    }
}
