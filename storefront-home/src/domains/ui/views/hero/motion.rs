//! Decorative motion of the hero banner.
//!
//! Pure functions of elapsed time: the same instant always yields the same
//! frame, and nothing here feeds back into layout structure.

use std::time::Duration;

use iced::{Rectangle, Size};

use super::content::{BlobAnchor, BlobSpec, HeroContent};
use crate::infra::constants::hero::{layout, motion};

/// Transform of one blob at an instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlobFrame {
    pub dx: f32,
    pub dy: f32,
    pub scale: f32,
}

impl BlobFrame {
    pub const IDENTITY: Self = Self {
        dx: 0.0,
        dy: 0.0,
        scale: 1.0,
    };
}

/// All animated values of the banner at an instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroFrame {
    pub blobs: [BlobFrame; 3],
    /// Upward offset of the scroll indicator, in pixels.
    pub indicator_lift: f32,
}

impl HeroFrame {
    pub fn at(content: &HeroContent, elapsed: Duration) -> Self {
        Self {
            blobs: content.blobs.map(|spec| blob_frame(elapsed, spec.delay_ms)),
            indicator_lift: indicator_lift(elapsed),
        }
    }
}

// (progress, dx, dy, scale)
const BLOB_KEYFRAMES: [(f32, f32, f32, f32); 4] = [
    (0.0, 0.0, 0.0, 1.0),
    (0.33, 30.0, -50.0, 1.1),
    (0.66, -20.0, 20.0, 0.9),
    (1.0, 0.0, 0.0, 1.0),
];

/// Blob drift: a 7 s loop through three keyframes, held at rest until its
/// start delay has passed.
pub fn blob_frame(elapsed: Duration, delay_ms: u64) -> BlobFrame {
    let elapsed_ms = elapsed.as_millis() as u64;
    if elapsed_ms < delay_ms {
        return BlobFrame::IDENTITY;
    }
    let cycle_ms = (elapsed_ms - delay_ms) % motion::BLOB_CYCLE_MS;
    let p = cycle_ms as f32 / motion::BLOB_CYCLE_MS as f32;

    for pair in BLOB_KEYFRAMES.windows(2) {
        let (p0, x0, y0, s0) = pair[0];
        let (p1, x1, y1, s1) = pair[1];
        if p <= p1 {
            let t = (p - p0) / (p1 - p0);
            return BlobFrame {
                dx: x0 + (x1 - x0) * t,
                dy: y0 + (y1 - y0) * t,
                scale: s0 + (s1 - s0) * t,
            };
        }
    }
    BlobFrame::IDENTITY
}

/// Scroll indicator bounce: highest at the start and end of each 1 s cycle,
/// touching down half way.
pub fn indicator_lift(elapsed: Duration) -> f32 {
    let cycle_ms = (elapsed.as_millis() as u64) % motion::BOUNCE_CYCLE_MS;
    let p = cycle_ms as f32 / motion::BOUNCE_CYCLE_MS as f32;
    let amplitude = layout::INDICATOR_SIZE * motion::BOUNCE_LIFT_FRACTION;
    amplitude * (std::f32::consts::PI * p).cos().abs()
}

/// Bounds of a blob inside a banner of `banner` size for a given frame.
/// Scaling keeps the blob centered on its resting position.
pub fn blob_bounds(spec: &BlobSpec, frame: BlobFrame, banner: Size) -> Rectangle {
    let size = layout::BLOB_SIZE;
    let (x, y) = match spec.anchor {
        BlobAnchor::TopLeft { left, top } => (left, top),
        BlobAnchor::TopRight { right, top } => (banner.width - size - right, top),
        BlobAnchor::BottomLeft { left, bottom } => {
            (left, banner.height - size - bottom)
        }
    };
    let scaled = size * frame.scale;
    let inset = (scaled - size) / 2.0;
    Rectangle {
        x: x + frame.dx - inset,
        y: y + frame.dy - inset,
        width: scaled,
        height: scaled,
    }
}
