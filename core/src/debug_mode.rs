//! Shader debug-output codes.
//!
//! The integer written to [`PbrMaterial::debug_mode`](crate::material::PbrMaterial::debug_mode)
//! selects which internal shading quantity the shader outputs instead of the
//! final color. The codes are shared with the shader's debug switch and must
//! not be renumbered.

/// A dropdown entry: display label and shader code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebugModeOption {
    pub label: &'static str,
    pub value: i32,
}

const fn option(label: &'static str, value: i32) -> DebugModeOption {
    DebugModeOption { label, value }
}

pub const NONE: i32 = 0;
/// Code forced when debugging the ambient texture.
pub const AMBIENT_MAP: i32 = 21;
/// Code forced when debugging the metallic texture.
pub const METALLIC: i32 = 62;

/// All debug modes in dropdown order.
pub const DEBUG_MODE_OPTIONS: &[DebugModeOption] = &[
    option("None", NONE),
    // Geometry
    option("Normalized position", 1),
    option("Normals", 2),
    option("Tangents", 3),
    option("Bitangents", 4),
    option("Bump Normals", 5),
    option("UV1", 6),
    option("UV2", 7),
    option("ClearCoat Normals", 8),
    option("ClearCoat Tangents", 9),
    option("ClearCoat Bitangents", 10),
    option("Anisotropic Normals", 11),
    option("Anisotropic Tangents", 12),
    option("Anisotropic Bitangents", 13),
    // Maps
    option("Albedo Map", 20),
    option("Ambient Map", AMBIENT_MAP),
    option("Opacity Map", 22),
    option("Emissive Map", 23),
    option("Light Map", 24),
    option("Metallic Map", 25),
    option("Reflectivity Map", 26),
    option("ClearCoat Map", 27),
    option("ClearCoat Tint Map", 28),
    option("Sheen Map", 29),
    option("Anisotropic Map", 30),
    option("Thickness Map", 31),
    // Env
    option("Env Refraction", 40),
    option("Env Reflection", 41),
    option("Env Clear Coat", 42),
    // Lighting
    option("Direct Diffuse", 50),
    option("Direct Specular", 51),
    option("Direct Clear Coat", 52),
    option("Direct Sheen", 53),
    option("Env Irradiance", 54),
    // Lighting params
    option("Surface Albedo", 60),
    option("Reflectance 0", 61),
    option("Metallic", METALLIC),
    option("Roughness", 63),
    option("AlphaG", 64),
    option("NdotV", 65),
    option("ClearCoat Color", 66),
    option("ClearCoat Roughness", 67),
    option("ClearCoat NdotV", 68),
    option("Transmittance", 69),
    option("Refraction Transmittance", 70),
    // Misc
    option("SEO", 80),
    option("EHO", 81),
    option("Energy Factor", 82),
    option("Specular Reflectance", 83),
    option("Clear Coat Reflectance", 84),
    option("Sheen Reflectance", 85),
    option("Luminance Over Alpha", 86),
    option("Alpha", 87),
];

/// Label for a code, or `None` for codes the shader does not know.
pub fn label_for(value: i32) -> Option<&'static str> {
    DEBUG_MODE_OPTIONS
        .iter()
        .find(|o| o.value == value)
        .map(|o| o.label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn table_size() {
        assert_eq!(DEBUG_MODE_OPTIONS.len(), 53);
    }

    #[test]
    fn codes_unique_and_ascending() {
        let mut seen = HashSet::new();
        for pair in DEBUG_MODE_OPTIONS.windows(2) {
            assert!(pair[0].value < pair[1].value, "{:?}", pair);
        }
        for o in DEBUG_MODE_OPTIONS {
            assert!(seen.insert(o.value));
        }
    }

    #[test]
    fn category_ranges() {
        let codes: Vec<i32> = DEBUG_MODE_OPTIONS.iter().map(|o| o.value).collect();
        let count_in = |lo: i32, hi: i32| codes.iter().filter(|&&c| c >= lo && c <= hi).count();
        assert_eq!(count_in(1, 13), 13);
        assert_eq!(count_in(20, 31), 12);
        assert_eq!(count_in(40, 42), 3);
        assert_eq!(count_in(50, 54), 5);
        assert_eq!(count_in(60, 70), 11);
        assert_eq!(count_in(80, 87), 8);
    }

    #[test]
    fn forced_codes_match_labels() {
        assert_eq!(label_for(METALLIC), Some("Metallic"));
        assert_eq!(label_for(AMBIENT_MAP), Some("Ambient Map"));
        assert_eq!(label_for(NONE), Some("None"));
        assert_eq!(label_for(15), None);
    }

    #[test]
    fn labels_are_trimmed() {
        for o in DEBUG_MODE_OPTIONS {
            assert_eq!(o.label, o.label.trim());
        }
    }
}
