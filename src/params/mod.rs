//! Parameter definitions with documented semantics.
//!
//! All magic numbers are extracted here with:
//! - Documented ranges and meanings
//! - Observed sketch values noted alongside defaults
//! - Validation before generation begins

mod camera;
mod generation;
mod render;

// Re-export all types
pub use camera::FreeFlyParams;
pub use generation::{default_palette, ColorPolicy, DensityParams, GenerationConfig, NoiseParams};
pub use render::RenderConfig;
