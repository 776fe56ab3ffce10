//! Product rail constants
//!
//! Strip geometry, labels and smooth-scroll cadence for every rail.
//! Tuning should happen here so all rails update consistently.

/// Strip geometry.
pub mod layout {
    /// Gap between adjacent preview cards.
    pub const ITEM_GAP: f32 = 24.0;
    /// Cards fully visible below the `small` breakpoint.
    pub const NARROW_COLUMNS: u16 = 2;
    /// Cards fully visible at or above the `small` breakpoint.
    pub const WIDE_COLUMNS: u16 = 3;
    /// Vertical section padding below the `small` breakpoint.
    pub const SECTION_PADDING_Y: f32 = 48.0;
    /// Vertical section padding at or above the `small` breakpoint.
    pub const SECTION_PADDING_Y_SMALL: f32 = 96.0;
    /// Space between the header row and the strip.
    pub const HEADER_GAP: f32 = 32.0;
    /// Bottom padding inside the strip.
    pub const STRIP_PADDING_BOTTOM: f32 = 16.0;
    /// Padding around a directional control's icon.
    pub const CONTROL_PADDING: f32 = 12.0;
    /// Icon size inside a directional control.
    pub const CONTROL_ICON_SIZE: f32 = 24.0;
    /// Header title text size (`txt-xlarge`).
    pub const TITLE_SIZE: f32 = 24.0;
}

/// Smooth-scroll cadence. Step and duration come from `RailSettings`.
pub mod motion {
    /// Tick interval in nanoseconds while a transition is running (~120 FPS).
    pub const TICK_NS: u64 = 8_333_333;
}

/// Accessible labels and header copy.
pub mod labels {
    /// Previous control.
    pub const PREVIOUS: &str = "Anterior";
    /// Next control.
    pub const NEXT: &str = "Próximo";
    /// Header link to the full collection listing.
    pub const VIEW_ALL: &str = "Ver todos";
}
