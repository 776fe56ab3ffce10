//! Hero banner
//!
//! Static marketing copy with two call-to-action links over a decorative,
//! continuously animated background. The banner has no inputs of its own;
//! the page supplies the animation clock, the link renderer and the window
//! size.

pub mod content;
pub mod motion;
pub mod view;

pub use content::{HERO, HeroContent};
pub use motion::HeroFrame;
pub use view::{HeroLayer, hero_banner, layer_plan};
