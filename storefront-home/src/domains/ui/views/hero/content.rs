//! Fixed copy and decoration layout of the hero banner

use crate::domains::ui::links::LinkStyle;
use crate::infra::constants::hero::motion;

/// One call-to-action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallToAction {
    pub label: &'static str,
    /// Unlocalized destination path.
    pub destination: &'static str,
    pub style: LinkStyle,
}

/// Color family a blob is tinted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlobTint {
    Primary,
    Accent,
    Secondary,
}

/// Where a blob rests before animation offsets are applied. Offsets are in
/// pixels from the named banner edges; negative values bleed past the edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BlobAnchor {
    TopLeft { left: f32, top: f32 },
    TopRight { right: f32, top: f32 },
    BottomLeft { left: f32, bottom: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlobSpec {
    pub tint: BlobTint,
    pub anchor: BlobAnchor,
    pub delay_ms: u64,
}

/// Everything the banner shows apart from motion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroContent {
    pub heading: &'static str,
    pub subheading: &'static str,
    pub actions: [CallToAction; 2],
    pub blobs: [BlobSpec; 3],
}

pub static HERO: HeroContent = HeroContent {
    heading: "Bem-vindo à JF Imperadores",
    subheading: "Descubra produtos incríveis com os melhores preços e ofertas exclusivas",
    actions: [
        CallToAction {
            label: "Ver Produtos",
            destination: "/store",
            style: LinkStyle::Primary,
        },
        CallToAction {
            label: "Ver Coleções",
            destination: "/collections",
            style: LinkStyle::Secondary,
        },
    ],
    blobs: [
        BlobSpec {
            tint: BlobTint::Primary,
            anchor: BlobAnchor::TopLeft {
                left: -16.0,
                top: 0.0,
            },
            delay_ms: motion::BLOB_DELAYS_MS[0],
        },
        BlobSpec {
            tint: BlobTint::Accent,
            anchor: BlobAnchor::TopRight {
                right: -16.0,
                top: 0.0,
            },
            delay_ms: motion::BLOB_DELAYS_MS[1],
        },
        BlobSpec {
            tint: BlobTint::Secondary,
            anchor: BlobAnchor::BottomLeft {
                left: 80.0,
                bottom: -32.0,
            },
            delay_ms: motion::BLOB_DELAYS_MS[2],
        },
    ],
};
