//! Typed get/set of material fields by [`PropertyKey`].
//!
//! The key-to-field table is written once in [`bound_fields!`] and expands to
//! both the shared and the mutable accessor.

use super::key::PropertyKey;
use super::value::PropertyValue;
use crate::error::PropertyError;
use crate::material::PbrMaterial;
use crate::math::{Color3, Vector2};

enum FieldRef<'a> {
    Bool(&'a bool),
    Float(&'a f32),
    Int(&'a i32),
    Color3(&'a Color3),
    Vector2(&'a Vector2),
    Text(&'a String),
}

impl FieldRef<'_> {
    fn to_value(&self) -> PropertyValue {
        match self {
            Self::Bool(v) => PropertyValue::Bool(**v),
            Self::Float(v) => PropertyValue::Float(**v),
            Self::Int(v) => PropertyValue::Int(**v),
            Self::Color3(v) => PropertyValue::Color3(**v),
            Self::Vector2(v) => PropertyValue::Vector2(**v),
            Self::Text(v) => PropertyValue::Text((*v).clone()),
        }
    }
}

enum FieldMut<'a> {
    Bool(&'a mut bool),
    Float(&'a mut f32),
    Int(&'a mut i32),
    Color3(&'a mut Color3),
    Vector2(&'a mut Vector2),
    Text(&'a mut String),
}

macro_rules! bound_fields {
    ($($key:ident => $kind:ident($($field:tt)+)),* $(,)?) => {
        impl PbrMaterial {
            fn field(&self, key: PropertyKey) -> Option<FieldRef<'_>> {
                Some(match key {
                    $(PropertyKey::$key => FieldRef::$kind(&self.$($field)+),)*
                    PropertyKey::TextureLevel(slot) => FieldRef::Float(&self.texture(slot)?.level),
                })
            }

            fn field_mut(&mut self, key: PropertyKey) -> Option<FieldMut<'_>> {
                Some(match key {
                    $(PropertyKey::$key => FieldMut::$kind(&mut self.$($field)+),)*
                    PropertyKey::TextureLevel(slot) => {
                        FieldMut::Float(&mut self.texture_mut(slot)?.level)
                    }
                })
            }
        }
    };
}

bound_fields! {
    Name => Text(name),
    Alpha => Float(alpha),
    BackFaceCulling => Bool(back_face_culling),
    Wireframe => Bool(wireframe),
    DisableDepthWrite => Bool(disable_depth_write),
    NeedDepthPrePass => Bool(need_depth_pre_pass),

    UseLightmapAsShadowmap => Bool(use_lightmap_as_shadowmap),
    AlbedoColor => Color3(albedo_color),
    ReflectivityColor => Color3(reflectivity_color),
    MicroSurface => Float(micro_surface),
    EmissiveColor => Color3(emissive_color),
    AmbientColor => Color3(ambient_color),
    UsePhysicalLightFalloff => Bool(use_physical_light_falloff),
    Metallic => Float(metallic),
    Roughness => Float(roughness),
    EnvironmentIntensity => Float(environment_intensity),
    SpecularIntensity => Float(specular_intensity),
    EmissiveIntensity => Float(emissive_intensity),
    DirectIntensity => Float(direct_intensity),
    AmbientTextureStrength => Float(ambient_texture_strength),
    UseAlphaFromAlbedoTexture => Bool(use_alpha_from_albedo_texture),
    UseAmbientInGrayScale => Bool(use_ambient_in_gray_scale),
    UseRadianceOverAlpha => Bool(use_radiance_over_alpha),
    UseMicroSurfaceFromReflectivityMapAlpha => Bool(use_micro_surface_from_reflectivity_map_alpha),
    UseSpecularOverAlpha => Bool(use_specular_over_alpha),
    EnableSpecularAntiAliasing => Bool(enable_specular_anti_aliasing),
    UseRadianceOcclusion => Bool(use_radiance_occlusion),
    UseHorizonOcclusion => Bool(use_horizon_occlusion),
    Unlit => Bool(unlit),
    DebugMode => Int(debug_mode),
    DebugLimit => Float(debug_limit),
    DebugFactor => Float(debug_factor),

    ClearCoatEnabled => Bool(clear_coat.is_enabled),
    ClearCoatIntensity => Float(clear_coat.intensity),
    ClearCoatRoughness => Float(clear_coat.roughness),
    ClearCoatIndexOfRefraction => Float(clear_coat.index_of_refraction),
    ClearCoatTintEnabled => Bool(clear_coat.is_tint_enabled),
    ClearCoatTintColor => Color3(clear_coat.tint_color),
    ClearCoatTintColorAtDistance => Float(clear_coat.tint_color_at_distance),
    ClearCoatTintThickness => Float(clear_coat.tint_thickness),

    AnisotropyEnabled => Bool(anisotropy.is_enabled),
    AnisotropyIntensity => Float(anisotropy.intensity),
    AnisotropyDirection => Vector2(anisotropy.direction),

    SheenEnabled => Bool(sheen.is_enabled),
    SheenLinkWithAlbedo => Bool(sheen.link_sheen_with_albedo),
    SheenIntensity => Float(sheen.intensity),
    SheenColor => Color3(sheen.color),

    SubSurfaceMinimumThickness => Float(sub_surface.minimum_thickness),
    SubSurfaceMaximumThickness => Float(sub_surface.maximum_thickness),
    SubSurfaceUseMaskFromThicknessTexture => Bool(sub_surface.use_mask_from_thickness_texture),
    SubSurfaceTintColor => Color3(sub_surface.tint_color),
    SubSurfaceRefractionEnabled => Bool(sub_surface.is_refraction_enabled),
    SubSurfaceRefractionIntensity => Float(sub_surface.refraction_intensity),
    SubSurfaceIndexOfRefraction => Float(sub_surface.index_of_refraction),
    SubSurfaceTintColorAtDistance => Float(sub_surface.tint_color_at_distance),
    SubSurfaceLinkRefractionWithTransparency => Bool(sub_surface.link_refraction_with_transparency),
    SubSurfaceTranslucencyEnabled => Bool(sub_surface.is_translucency_enabled),
    SubSurfaceTranslucencyIntensity => Float(sub_surface.translucency_intensity),
    SubSurfaceDiffusionDistance => Color3(sub_surface.diffusion_distance),

    BrdfUseEnergyConservation => Bool(brdf.use_energy_conservation),
    BrdfUseSphericalHarmonics => Bool(brdf.use_spherical_harmonics),
}

impl PbrMaterial {
    /// Current value of a bound field.
    ///
    /// Returns `None` only for [`PropertyKey::TextureLevel`] when no texture
    /// is linked in that slot.
    pub fn get(&self, key: PropertyKey) -> Option<PropertyValue> {
        self.field(key).map(|field| field.to_value())
    }

    /// Writes `value` onto the field named by `key` and returns the previous
    /// value.
    ///
    /// The value is stored as given: no range clamping happens here.
    pub fn set(
        &mut self,
        key: PropertyKey,
        value: PropertyValue,
    ) -> Result<PropertyValue, PropertyError> {
        let mismatch = |found: &PropertyValue| PropertyError::TypeMismatch {
            key,
            expected: key.kind(),
            found: found.kind(),
        };

        let field = match self.field_mut(key) {
            Some(field) => field,
            None => {
                let PropertyKey::TextureLevel(slot) = key else {
                    unreachable!("only texture levels can be absent");
                };
                return Err(PropertyError::MissingTexture(slot));
            }
        };

        let previous = match (field, value) {
            (FieldMut::Bool(slot), PropertyValue::Bool(v)) => {
                PropertyValue::Bool(std::mem::replace(slot, v))
            }
            (FieldMut::Float(slot), PropertyValue::Float(v)) => {
                PropertyValue::Float(std::mem::replace(slot, v))
            }
            (FieldMut::Int(slot), PropertyValue::Int(v)) => {
                PropertyValue::Int(std::mem::replace(slot, v))
            }
            (FieldMut::Color3(slot), PropertyValue::Color3(v)) => {
                PropertyValue::Color3(std::mem::replace(slot, v))
            }
            (FieldMut::Vector2(slot), PropertyValue::Vector2(v)) => {
                PropertyValue::Vector2(std::mem::replace(slot, v))
            }
            (FieldMut::Text(slot), PropertyValue::Text(v)) => {
                PropertyValue::Text(std::mem::replace(slot, v))
            }
            (_, other) => return Err(mismatch(&other)),
        };
        Ok(previous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::{TextureRef, TextureSlot};
    use crate::property::ValueKind;

    #[test]
    fn get_reads_nested_fields() {
        let mut mat = PbrMaterial::default();
        mat.clear_coat.index_of_refraction = 2.2;
        mat.anisotropy.direction = Vector2::new(0.0, 1.0);
        assert_eq!(
            mat.get(PropertyKey::ClearCoatIndexOfRefraction),
            Some(PropertyValue::Float(2.2))
        );
        assert_eq!(
            mat.get(PropertyKey::AnisotropyDirection),
            Some(PropertyValue::Vector2(Vector2::new(0.0, 1.0)))
        );
    }

    #[test]
    fn set_writes_and_returns_previous() {
        let mut mat = PbrMaterial::default();
        let previous = mat
            .set(PropertyKey::Roughness, PropertyValue::Float(0.4))
            .unwrap();
        assert_eq!(previous, PropertyValue::Float(1.0));
        assert_eq!(mat.roughness, 0.4);

        mat.set(PropertyKey::SheenEnabled, PropertyValue::Bool(true))
            .unwrap();
        assert!(mat.sheen.is_enabled);

        mat.set(PropertyKey::DebugMode, PropertyValue::Int(65))
            .unwrap();
        assert_eq!(mat.debug_mode, 65);
    }

    #[test]
    fn set_does_not_clamp() {
        let mut mat = PbrMaterial::default();
        mat.set(PropertyKey::Roughness, PropertyValue::Float(1.5))
            .unwrap();
        assert_eq!(mat.roughness, 1.5);
        mat.set(PropertyKey::ClearCoatIndexOfRefraction, PropertyValue::Float(0.2))
            .unwrap();
        assert_eq!(mat.clear_coat.index_of_refraction, 0.2);
    }

    #[test]
    fn set_rejects_wrong_kind() {
        let mut mat = PbrMaterial::default();
        let err = mat
            .set(PropertyKey::Metallic, PropertyValue::Bool(true))
            .unwrap_err();
        assert_eq!(
            err,
            PropertyError::TypeMismatch {
                key: PropertyKey::Metallic,
                expected: ValueKind::Float,
                found: ValueKind::Bool,
            }
        );
        assert_eq!(mat.metallic, 1.0);
    }

    #[test]
    fn texture_level_requires_texture() {
        let mut mat = PbrMaterial::default();
        let key = PropertyKey::TextureLevel(TextureSlot::Bump);
        assert_eq!(mat.get(key), None);
        assert_eq!(
            mat.set(key, PropertyValue::Float(1.2)),
            Err(PropertyError::MissingTexture(TextureSlot::Bump))
        );

        mat.bump_texture = Some(TextureRef::new("n.png"));
        mat.set(key, PropertyValue::Float(1.2)).unwrap();
        assert_eq!(mat.bump_texture.as_ref().unwrap().level, 1.2);
        assert_eq!(mat.get(key), Some(PropertyValue::Float(1.2)));
    }

    #[test]
    fn every_key_kind_matches_field() {
        let mut mat = PbrMaterial::default();
        for slot in TextureSlot::ALL {
            mat.set_texture(slot, Some(TextureRef::new("t.png")));
        }
        let keys = [
            PropertyKey::Name,
            PropertyKey::Alpha,
            PropertyKey::AlbedoColor,
            PropertyKey::DebugMode,
            PropertyKey::ClearCoatTintColor,
            PropertyKey::AnisotropyDirection,
            PropertyKey::SheenLinkWithAlbedo,
            PropertyKey::SubSurfaceDiffusionDistance,
            PropertyKey::BrdfUseEnergyConservation,
            PropertyKey::TextureLevel(TextureSlot::ClearCoatBump),
        ];
        for key in keys {
            let value = mat.get(key).unwrap();
            assert_eq!(value.kind(), key.kind(), "{key}");
        }
    }
}
