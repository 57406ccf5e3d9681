//! PBR material object model.
//!
//! - [`PbrMaterial`] — top-level material with scalar, color and texture fields
//! - [`ClearCoat`], [`Anisotropy`], [`Sheen`], [`SubSurface`], [`Brdf`] —
//!   feature blocks, each independently switched on or off
//! - [`TextureRef`] / [`TextureSlot`] — optional texture links and the fields
//!   they live in

mod texture;
mod types;

pub use texture::{TextureRef, TextureSlot};
pub use types::{Anisotropy, Brdf, ClearCoat, PbrMaterial, Sheen, SubSurface};
