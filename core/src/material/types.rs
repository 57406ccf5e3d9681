//! PBR material data: top-level fields plus the optional feature blocks.
//!
//! Field defaults follow the engine's PBR material. Every block is always
//! present; an `is_enabled` style flag decides whether the shader (and the
//! inspector) uses its fields.

use serde::{Deserialize, Serialize};

use super::texture::{TextureRef, TextureSlot};
use crate::math::{Color3, Vector2};

/// Clear-coat layer on top of the base surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClearCoat {
    pub is_enabled: bool,
    pub intensity: f32,
    pub roughness: f32,
    pub index_of_refraction: f32,
    pub texture: Option<TextureRef>,
    pub bump_texture: Option<TextureRef>,
    pub is_tint_enabled: bool,
    pub tint_color: Color3,
    pub tint_color_at_distance: f32,
    pub tint_thickness: f32,
    pub tint_texture: Option<TextureRef>,
}

impl Default for ClearCoat {
    fn default() -> Self {
        Self {
            is_enabled: false,
            intensity: 1.0,
            roughness: 0.0,
            index_of_refraction: 1.5,
            texture: None,
            bump_texture: None,
            is_tint_enabled: false,
            tint_color: Color3::WHITE,
            tint_color_at_distance: 1.0,
            tint_thickness: 1.0,
            tint_texture: None,
        }
    }
}

/// Anisotropic specular highlights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Anisotropy {
    pub is_enabled: bool,
    pub intensity: f32,
    pub direction: Vector2,
    pub texture: Option<TextureRef>,
}

impl Default for Anisotropy {
    fn default() -> Self {
        Self {
            is_enabled: false,
            intensity: 1.0,
            direction: Vector2::new(1.0, 0.0),
            texture: None,
        }
    }
}

/// Cloth-like sheen lobe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sheen {
    pub is_enabled: bool,
    pub link_sheen_with_albedo: bool,
    pub intensity: f32,
    pub color: Color3,
    pub texture: Option<TextureRef>,
}

impl Default for Sheen {
    fn default() -> Self {
        Self {
            is_enabled: false,
            link_sheen_with_albedo: false,
            intensity: 1.0,
            color: Color3::WHITE,
            texture: None,
        }
    }
}

/// Refraction and translucency through the surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubSurface {
    pub thickness_texture: Option<TextureRef>,
    pub minimum_thickness: f32,
    pub maximum_thickness: f32,
    pub use_mask_from_thickness_texture: bool,
    pub tint_color: Color3,
    pub is_refraction_enabled: bool,
    pub refraction_intensity: f32,
    pub index_of_refraction: f32,
    pub tint_color_at_distance: f32,
    pub link_refraction_with_transparency: bool,
    pub is_translucency_enabled: bool,
    pub translucency_intensity: f32,
    pub diffusion_distance: Color3,
}

impl Default for SubSurface {
    fn default() -> Self {
        Self {
            thickness_texture: None,
            minimum_thickness: 0.0,
            maximum_thickness: 1.0,
            use_mask_from_thickness_texture: false,
            tint_color: Color3::WHITE,
            is_refraction_enabled: false,
            refraction_intensity: 1.0,
            index_of_refraction: 1.5,
            tint_color_at_distance: 1.0,
            link_refraction_with_transparency: false,
            is_translucency_enabled: false,
            translucency_intensity: 1.0,
            diffusion_distance: Color3::WHITE,
        }
    }
}

/// BRDF evaluation switches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Brdf {
    pub use_energy_conservation: bool,
    pub use_spherical_harmonics: bool,
}

impl Default for Brdf {
    fn default() -> Self {
        Self {
            use_energy_conservation: true,
            use_spherical_harmonics: true,
        }
    }
}

/// A physically-based material with metallic/roughness workflow and optional
/// clear-coat, anisotropy, sheen and subsurface layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PbrMaterial {
    // -- Common material fields --
    pub name: String,
    pub alpha: f32,
    pub back_face_culling: bool,
    pub wireframe: bool,
    pub disable_depth_write: bool,
    pub need_depth_pre_pass: bool,

    // -- Textures --
    pub albedo_texture: Option<TextureRef>,
    pub metallic_texture: Option<TextureRef>,
    pub reflection_texture: Option<TextureRef>,
    pub refraction_texture: Option<TextureRef>,
    pub micro_surface_texture: Option<TextureRef>,
    pub bump_texture: Option<TextureRef>,
    pub emissive_texture: Option<TextureRef>,
    pub opacity_texture: Option<TextureRef>,
    pub ambient_texture: Option<TextureRef>,
    pub lightmap_texture: Option<TextureRef>,
    pub use_lightmap_as_shadowmap: bool,

    // -- Lighting & colors --
    pub albedo_color: Color3,
    pub reflectivity_color: Color3,
    pub micro_surface: f32,
    pub emissive_color: Color3,
    pub ambient_color: Color3,
    pub use_physical_light_falloff: bool,

    // -- Metallic workflow --
    pub metallic: f32,
    pub roughness: f32,

    // -- Feature blocks --
    pub clear_coat: ClearCoat,
    pub anisotropy: Anisotropy,
    pub sheen: Sheen,
    pub sub_surface: SubSurface,
    pub brdf: Brdf,

    // -- Levels --
    pub environment_intensity: f32,
    pub specular_intensity: f32,
    pub emissive_intensity: f32,
    pub direct_intensity: f32,
    pub ambient_texture_strength: f32,

    // -- Rendering --
    pub use_alpha_from_albedo_texture: bool,
    pub use_ambient_in_gray_scale: bool,
    pub use_radiance_over_alpha: bool,
    pub use_micro_surface_from_reflectivity_map_alpha: bool,
    pub use_specular_over_alpha: bool,
    pub enable_specular_anti_aliasing: bool,

    // -- Advanced --
    pub use_radiance_occlusion: bool,
    pub use_horizon_occlusion: bool,
    pub unlit: bool,

    // -- Debug --
    /// Shader debug output selector, see [`crate::debug_mode`].
    pub debug_mode: i32,
    /// Split-screen position of the debug view, `-1` shows it full screen.
    pub debug_limit: f32,
    pub debug_factor: f32,
}

impl Default for PbrMaterial {
    fn default() -> Self {
        Self {
            name: String::new(),
            alpha: 1.0,
            back_face_culling: true,
            wireframe: false,
            disable_depth_write: false,
            need_depth_pre_pass: false,

            albedo_texture: None,
            metallic_texture: None,
            reflection_texture: None,
            refraction_texture: None,
            micro_surface_texture: None,
            bump_texture: None,
            emissive_texture: None,
            opacity_texture: None,
            ambient_texture: None,
            lightmap_texture: None,
            use_lightmap_as_shadowmap: false,

            albedo_color: Color3::WHITE,
            reflectivity_color: Color3::WHITE,
            micro_surface: 1.0,
            emissive_color: Color3::BLACK,
            ambient_color: Color3::BLACK,
            use_physical_light_falloff: true,

            metallic: 1.0,
            roughness: 1.0,

            clear_coat: ClearCoat::default(),
            anisotropy: Anisotropy::default(),
            sheen: Sheen::default(),
            sub_surface: SubSurface::default(),
            brdf: Brdf::default(),

            environment_intensity: 1.0,
            specular_intensity: 1.0,
            emissive_intensity: 1.0,
            direct_intensity: 1.0,
            ambient_texture_strength: 1.0,

            use_alpha_from_albedo_texture: false,
            use_ambient_in_gray_scale: false,
            use_radiance_over_alpha: true,
            use_micro_surface_from_reflectivity_map_alpha: false,
            use_specular_over_alpha: true,
            enable_specular_anti_aliasing: false,

            use_radiance_occlusion: true,
            use_horizon_occlusion: true,
            unlit: false,

            debug_mode: 0,
            debug_limit: -1.0,
            debug_factor: 1.0,
        }
    }
}

impl PbrMaterial {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Texture linked in `slot`, if any.
    pub fn texture(&self, slot: TextureSlot) -> Option<&TextureRef> {
        self.texture_field(slot).as_ref()
    }

    pub fn texture_mut(&mut self, slot: TextureSlot) -> Option<&mut TextureRef> {
        self.texture_field_mut(slot).as_mut()
    }

    /// Links (or unlinks, with `None`) a texture, returning the previous one.
    pub fn set_texture(
        &mut self,
        slot: TextureSlot,
        texture: Option<TextureRef>,
    ) -> Option<TextureRef> {
        std::mem::replace(self.texture_field_mut(slot), texture)
    }

    pub fn has_texture(&self, slot: TextureSlot) -> bool {
        self.texture(slot).is_some()
    }

    fn texture_field(&self, slot: TextureSlot) -> &Option<TextureRef> {
        match slot {
            TextureSlot::Albedo => &self.albedo_texture,
            TextureSlot::Metallic => &self.metallic_texture,
            TextureSlot::Reflection => &self.reflection_texture,
            TextureSlot::Refraction => &self.refraction_texture,
            TextureSlot::MicroSurface => &self.micro_surface_texture,
            TextureSlot::Bump => &self.bump_texture,
            TextureSlot::Emissive => &self.emissive_texture,
            TextureSlot::Opacity => &self.opacity_texture,
            TextureSlot::Ambient => &self.ambient_texture,
            TextureSlot::Lightmap => &self.lightmap_texture,
            TextureSlot::ClearCoat => &self.clear_coat.texture,
            TextureSlot::ClearCoatBump => &self.clear_coat.bump_texture,
            TextureSlot::ClearCoatTint => &self.clear_coat.tint_texture,
            TextureSlot::Anisotropy => &self.anisotropy.texture,
            TextureSlot::Sheen => &self.sheen.texture,
            TextureSlot::Thickness => &self.sub_surface.thickness_texture,
        }
    }

    fn texture_field_mut(&mut self, slot: TextureSlot) -> &mut Option<TextureRef> {
        match slot {
            TextureSlot::Albedo => &mut self.albedo_texture,
            TextureSlot::Metallic => &mut self.metallic_texture,
            TextureSlot::Reflection => &mut self.reflection_texture,
            TextureSlot::Refraction => &mut self.refraction_texture,
            TextureSlot::MicroSurface => &mut self.micro_surface_texture,
            TextureSlot::Bump => &mut self.bump_texture,
            TextureSlot::Emissive => &mut self.emissive_texture,
            TextureSlot::Opacity => &mut self.opacity_texture,
            TextureSlot::Ambient => &mut self.ambient_texture,
            TextureSlot::Lightmap => &mut self.lightmap_texture,
            TextureSlot::ClearCoat => &mut self.clear_coat.texture,
            TextureSlot::ClearCoatBump => &mut self.clear_coat.bump_texture,
            TextureSlot::ClearCoatTint => &mut self.clear_coat.tint_texture,
            TextureSlot::Anisotropy => &mut self.anisotropy.texture,
            TextureSlot::Sheen => &mut self.sheen.texture,
            TextureSlot::Thickness => &mut self.sub_surface.thickness_texture,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_feature_blocks_disabled() {
        let mat = PbrMaterial::default();
        assert!(!mat.clear_coat.is_enabled);
        assert!(!mat.clear_coat.is_tint_enabled);
        assert!(!mat.anisotropy.is_enabled);
        assert!(!mat.sheen.is_enabled);
        assert!(!mat.sub_surface.is_refraction_enabled);
        assert!(!mat.sub_surface.is_translucency_enabled);
    }

    #[test]
    fn default_debug_state() {
        let mat = PbrMaterial::default();
        assert_eq!(mat.debug_mode, 0);
        assert_eq!(mat.debug_limit, -1.0);
        assert_eq!(mat.debug_factor, 1.0);
    }

    #[test]
    fn set_texture_returns_previous() {
        let mut mat = PbrMaterial::new("floor");
        assert!(!mat.has_texture(TextureSlot::Bump));
        assert!(
            mat.set_texture(TextureSlot::Bump, Some(TextureRef::new("floor_n.png")))
                .is_none()
        );
        assert_eq!(mat.bump_texture.as_ref().unwrap().name, "floor_n.png");

        let previous = mat.set_texture(TextureSlot::Bump, None);
        assert_eq!(previous.unwrap().name, "floor_n.png");
        assert!(!mat.has_texture(TextureSlot::Bump));
    }

    #[test]
    fn nested_slots_reach_feature_blocks() {
        let mut mat = PbrMaterial::default();
        mat.set_texture(TextureSlot::ClearCoatBump, Some(TextureRef::new("coat_n.png")));
        mat.set_texture(TextureSlot::Thickness, Some(TextureRef::new("thick.png")));
        assert!(mat.clear_coat.bump_texture.is_some());
        assert!(mat.sub_surface.thickness_texture.is_some());
        assert!(mat.bump_texture.is_none());

        mat.texture_mut(TextureSlot::ClearCoatBump).unwrap().level = 1.5;
        assert_eq!(mat.clear_coat.bump_texture.as_ref().unwrap().level, 1.5);
    }

    #[test]
    fn ron_roundtrip_keeps_nested_state() {
        let mut mat = PbrMaterial::new("car_paint");
        mat.clear_coat.is_enabled = true;
        mat.clear_coat.is_tint_enabled = true;
        mat.metallic_texture = Some(TextureRef::new("paint_m.png").with_level(0.8));

        let text = ron::to_string(&mat).unwrap();
        let back: PbrMaterial = ron::from_str(&text).unwrap();
        assert_eq!(back, mat);
    }

    #[test]
    fn partial_document_fills_defaults() {
        let back: PbrMaterial = ron::from_str("(name: \"partial\", metallic: 0.25)").unwrap();
        assert_eq!(back.name, "partial");
        assert_eq!(back.metallic, 0.25);
        assert_eq!(back.roughness, 1.0);
        assert!(back.brdf.use_energy_conservation);
    }
}
