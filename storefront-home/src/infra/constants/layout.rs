//! Page-level layout constants shared by every home page section

/// Responsive breakpoints, in logical pixels of window width.
pub mod breakpoints {
    /// Width at which the `small` layout (three rail items, larger type)
    /// takes over.
    pub const SMALL: f32 = 1024.0;

    /// Whether a window of this width uses the `small` (wide) layout.
    pub fn is_small_up(width: f32) -> bool {
        width >= SMALL
    }
}

/// The centered content container every section is laid out in.
pub mod page {
    /// Maximum width of the content container.
    pub const CONTENT_MAX_WIDTH: f32 = 1440.0;
    /// Horizontal padding on each side of the content container.
    pub const CONTENT_PADDING_X: f32 = 24.0;

    /// Inner width available to section content for a given window width.
    pub fn content_width(window_width: f32) -> f32 {
        (window_width.min(CONTENT_MAX_WIDTH) - 2.0 * CONTENT_PADDING_X).max(0.0)
    }

}
