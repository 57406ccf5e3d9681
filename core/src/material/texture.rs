//! Texture references held by a [`PbrMaterial`](super::PbrMaterial).

use serde::{Deserialize, Serialize};

use crate::property::PropertyTarget;

/// Link from a material field to a texture resource.
///
/// The material does not own pixel data; it only names the texture and
/// carries the per-link `level` (strength) the shader multiplies it by.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextureRef {
    /// Display name / asset path of the texture.
    pub name: String,
    /// Strength multiplier (bump strength, reflection strength, ...).
    #[serde(default = "default_level")]
    pub level: f32,
}

fn default_level() -> f32 {
    1.0
}

impl TextureRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: default_level(),
        }
    }

    pub fn with_level(mut self, level: f32) -> Self {
        self.level = level;
        self
    }
}

/// Every texture field of a PBR material, including the ones nested in
/// feature blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextureSlot {
    Albedo,
    Metallic,
    Reflection,
    Refraction,
    MicroSurface,
    Bump,
    Emissive,
    Opacity,
    Ambient,
    Lightmap,
    ClearCoat,
    ClearCoatBump,
    ClearCoatTint,
    Anisotropy,
    Sheen,
    Thickness,
}

impl TextureSlot {
    pub const ALL: [TextureSlot; 16] = [
        TextureSlot::Albedo,
        TextureSlot::Metallic,
        TextureSlot::Reflection,
        TextureSlot::Refraction,
        TextureSlot::MicroSurface,
        TextureSlot::Bump,
        TextureSlot::Emissive,
        TextureSlot::Opacity,
        TextureSlot::Ambient,
        TextureSlot::Lightmap,
        TextureSlot::ClearCoat,
        TextureSlot::ClearCoatBump,
        TextureSlot::ClearCoatTint,
        TextureSlot::Anisotropy,
        TextureSlot::Sheen,
        TextureSlot::Thickness,
    ];

    /// Object that owns the texture field.
    pub fn owner(self) -> PropertyTarget {
        match self {
            TextureSlot::ClearCoat | TextureSlot::ClearCoatBump | TextureSlot::ClearCoatTint => {
                PropertyTarget::ClearCoat
            }
            TextureSlot::Anisotropy => PropertyTarget::Anisotropy,
            TextureSlot::Sheen => PropertyTarget::Sheen,
            TextureSlot::Thickness => PropertyTarget::SubSurface,
            _ => PropertyTarget::Material,
        }
    }

    /// Field name on the owning object.
    pub fn field_name(self) -> &'static str {
        match self {
            TextureSlot::Albedo => "albedoTexture",
            TextureSlot::Metallic => "metallicTexture",
            TextureSlot::Reflection => "reflectionTexture",
            TextureSlot::Refraction => "refractionTexture",
            TextureSlot::MicroSurface => "microSurfaceTexture",
            TextureSlot::Bump => "bumpTexture",
            TextureSlot::Emissive => "emissiveTexture",
            TextureSlot::Opacity => "opacityTexture",
            TextureSlot::Ambient => "ambientTexture",
            TextureSlot::Lightmap => "lightmapTexture",
            TextureSlot::ClearCoat => "texture",
            TextureSlot::ClearCoatBump => "bumpTexture",
            TextureSlot::ClearCoatTint => "tintTexture",
            TextureSlot::Anisotropy => "texture",
            TextureSlot::Sheen => "texture",
            TextureSlot::Thickness => "thicknessTexture",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_texture_has_unit_level() {
        let tex = TextureRef::new("bricks_albedo.png");
        assert_eq!(tex.level, 1.0);
        assert_eq!(tex.with_level(0.5).level, 0.5);
    }

    #[test]
    fn nested_slots_report_their_block() {
        assert_eq!(TextureSlot::ClearCoatTint.owner(), PropertyTarget::ClearCoat);
        assert_eq!(TextureSlot::Thickness.owner(), PropertyTarget::SubSurface);
        assert_eq!(TextureSlot::Metallic.owner(), PropertyTarget::Material);
    }

    #[test]
    fn all_slots_listed_once() {
        let mut seen = std::collections::HashSet::new();
        for slot in TextureSlot::ALL {
            assert!(seen.insert(slot));
        }
        assert_eq!(seen.len(), 16);
    }
}
