//! Text measurement.
//!
//! Layout code needs the ink height of short strings (clock numerals) to place
//! them optically on a circle. [`GlyphMetrics`] is the seam: [`FontSystem`]
//! measures real outlines through `fontdue`, [`FixedMetrics`] approximates
//! them from a cap-height ratio when no font file is available.

mod font_system;
mod metrics;

pub use font_system::{FaceMetrics, FontId, FontLoadError, FontSystem};
pub use metrics::{FixedMetrics, GlyphMetrics};
