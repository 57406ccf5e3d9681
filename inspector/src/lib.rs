//! egui property grid for [`PbrMaterial`](matgrid_core::material::PbrMaterial).
//!
//! [`PbrMaterialPropertyGrid`] draws a static [`layout`] of collapsible
//! sections. Every widget is two-way bound to one material field through
//! [`binding::commit`], which writes the value and publishes a single
//! [`PropertyChangedEvent`](matgrid_core::property::PropertyChangedEvent).

pub mod binding;
pub mod global_state;
pub mod layout;
mod lines;
mod pbr_grid;
pub mod texture_link;

pub use global_state::GlobalState;
pub use layout::{FeatureGates, Gate};
pub use pbr_grid::{GridResponse, PbrMaterialPropertyGrid, PropertyGridContext};
pub use texture_link::{SelectionChanged, TextureDebugSelection};
