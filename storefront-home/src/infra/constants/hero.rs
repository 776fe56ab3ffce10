//! Hero banner constants
//!
//! Geometry and keyframe timing of the decorative loop. Values follow the
//! storefront's `animate-blob` (7 s) and `animate-bounce` (1 s) cycles.

/// Banner geometry.
pub mod layout {
    /// Banner height as a fraction of the window height.
    pub const HEIGHT_FRACTION: f32 = 0.75;
    /// Minimum banner height when the window is very short.
    pub const MIN_HEIGHT: f32 = 420.0;
    /// Diameter of each decorative blob.
    pub const BLOB_SIZE: f32 = 288.0;
    /// Blob opacity.
    pub const BLOB_OPACITY: f32 = 0.7;
    /// Horizontal padding of the content block below the breakpoint.
    pub const CONTENT_PADDING_X: f32 = 24.0;
    /// Horizontal padding of the content block at or above the breakpoint.
    pub const CONTENT_PADDING_X_SMALL: f32 = 128.0;
    /// Gap between the heading group and the call-to-action row.
    pub const CONTENT_GAP: f32 = 32.0;
    /// Gap between heading and sub-heading.
    pub const HEADING_GAP: f32 = 24.0;
    /// Gap between the call-to-action buttons.
    pub const CTA_GAP: f32 = 16.0;
    /// Maximum width of the sub-heading block.
    pub const SUBHEADING_MAX_WIDTH: f32 = 768.0;
    /// Distance of the scroll indicator from the bottom edge.
    pub const INDICATOR_BOTTOM: f32 = 32.0;
    /// Size of the scroll indicator glyph.
    pub const INDICATOR_SIZE: f32 = 24.0;
}

/// Type scale.
pub mod typography {
    /// Heading size below / at-or-above the breakpoint.
    pub const HEADING: (f32, f32) = (48.0, 72.0);
    /// Sub-heading size below / at-or-above the breakpoint.
    pub const SUBHEADING: (f32, f32) = (20.0, 30.0);
}

/// Decorative loop timing.
pub mod motion {
    /// Length of one blob drift cycle (ms).
    pub const BLOB_CYCLE_MS: u64 = 7_000;
    /// Start delay of each blob (ms).
    pub const BLOB_DELAYS_MS: [u64; 3] = [0, 2_000, 4_000];
    /// Length of one scroll-indicator bounce (ms).
    pub const BOUNCE_CYCLE_MS: u64 = 1_000;
    /// Bounce height as a fraction of the indicator size.
    pub const BOUNCE_LIFT_FRACTION: f32 = 0.25;
    /// Frame interval of the decorative loop (~30 FPS).
    pub const TICK_MS: u64 = 33;
}
