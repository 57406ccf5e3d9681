//! Statically-typed names for every bindable material field.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::material::TextureSlot;

/// Object that owns a bound field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyTarget {
    Material,
    ClearCoat,
    Anisotropy,
    Sheen,
    SubSurface,
    Brdf,
    /// A linked texture (its `level`).
    Texture(TextureSlot),
}

impl fmt::Display for PropertyTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Material => f.write_str("material"),
            Self::ClearCoat => f.write_str("clearCoat"),
            Self::Anisotropy => f.write_str("anisotropy"),
            Self::Sheen => f.write_str("sheen"),
            Self::SubSurface => f.write_str("subSurface"),
            Self::Brdf => f.write_str("brdf"),
            Self::Texture(slot) => match slot.owner() {
                Self::Material => f.write_str(slot.field_name()),
                owner => write!(f, "{owner}.{}", slot.field_name()),
            },
        }
    }
}

/// Kind of value a field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Bool,
    Float,
    Int,
    Color3,
    Vector2,
    Text,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bool => "bool",
            Self::Float => "float",
            Self::Int => "int",
            Self::Color3 => "color3",
            Self::Vector2 => "vector2",
            Self::Text => "text",
        };
        f.write_str(name)
    }
}

/// A bindable material field.
///
/// Each key knows its owning [`PropertyTarget`], its wire name (the name
/// published in property-changed events) and its [`ValueKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyKey {
    // -- Common --
    Name,
    Alpha,
    BackFaceCulling,
    Wireframe,
    DisableDepthWrite,
    NeedDepthPrePass,

    // -- Material --
    UseLightmapAsShadowmap,
    AlbedoColor,
    ReflectivityColor,
    MicroSurface,
    EmissiveColor,
    AmbientColor,
    UsePhysicalLightFalloff,
    Metallic,
    Roughness,
    EnvironmentIntensity,
    SpecularIntensity,
    EmissiveIntensity,
    DirectIntensity,
    AmbientTextureStrength,
    UseAlphaFromAlbedoTexture,
    UseAmbientInGrayScale,
    UseRadianceOverAlpha,
    UseMicroSurfaceFromReflectivityMapAlpha,
    UseSpecularOverAlpha,
    EnableSpecularAntiAliasing,
    UseRadianceOcclusion,
    UseHorizonOcclusion,
    Unlit,
    DebugMode,
    DebugLimit,
    DebugFactor,

    // -- Clear coat --
    ClearCoatEnabled,
    ClearCoatIntensity,
    ClearCoatRoughness,
    ClearCoatIndexOfRefraction,
    ClearCoatTintEnabled,
    ClearCoatTintColor,
    ClearCoatTintColorAtDistance,
    ClearCoatTintThickness,

    // -- Anisotropy --
    AnisotropyEnabled,
    AnisotropyIntensity,
    AnisotropyDirection,

    // -- Sheen --
    SheenEnabled,
    SheenLinkWithAlbedo,
    SheenIntensity,
    SheenColor,

    // -- Subsurface --
    SubSurfaceMinimumThickness,
    SubSurfaceMaximumThickness,
    SubSurfaceUseMaskFromThicknessTexture,
    SubSurfaceTintColor,
    SubSurfaceRefractionEnabled,
    SubSurfaceRefractionIntensity,
    SubSurfaceIndexOfRefraction,
    SubSurfaceTintColorAtDistance,
    SubSurfaceLinkRefractionWithTransparency,
    SubSurfaceTranslucencyEnabled,
    SubSurfaceTranslucencyIntensity,
    SubSurfaceDiffusionDistance,

    // -- BRDF --
    BrdfUseEnergyConservation,
    BrdfUseSphericalHarmonics,

    /// `level` of the texture linked in the slot.
    TextureLevel(TextureSlot),
}

impl PropertyKey {
    pub fn target(self) -> PropertyTarget {
        use PropertyKey::*;
        match self {
            ClearCoatEnabled
            | ClearCoatIntensity
            | ClearCoatRoughness
            | ClearCoatIndexOfRefraction
            | ClearCoatTintEnabled
            | ClearCoatTintColor
            | ClearCoatTintColorAtDistance
            | ClearCoatTintThickness => PropertyTarget::ClearCoat,

            AnisotropyEnabled | AnisotropyIntensity | AnisotropyDirection => {
                PropertyTarget::Anisotropy
            }

            SheenEnabled | SheenLinkWithAlbedo | SheenIntensity | SheenColor => {
                PropertyTarget::Sheen
            }

            SubSurfaceMinimumThickness
            | SubSurfaceMaximumThickness
            | SubSurfaceUseMaskFromThicknessTexture
            | SubSurfaceTintColor
            | SubSurfaceRefractionEnabled
            | SubSurfaceRefractionIntensity
            | SubSurfaceIndexOfRefraction
            | SubSurfaceTintColorAtDistance
            | SubSurfaceLinkRefractionWithTransparency
            | SubSurfaceTranslucencyEnabled
            | SubSurfaceTranslucencyIntensity
            | SubSurfaceDiffusionDistance => PropertyTarget::SubSurface,

            BrdfUseEnergyConservation | BrdfUseSphericalHarmonics => PropertyTarget::Brdf,

            TextureLevel(slot) => PropertyTarget::Texture(slot),

            _ => PropertyTarget::Material,
        }
    }

    /// Field name on the owning target, as published in change events.
    pub fn name(self) -> &'static str {
        use PropertyKey::*;
        match self {
            Name => "name",
            Alpha => "alpha",
            BackFaceCulling => "backFaceCulling",
            Wireframe => "wireframe",
            DisableDepthWrite => "disableDepthWrite",
            NeedDepthPrePass => "needDepthPrePass",

            UseLightmapAsShadowmap => "useLightmapAsShadowmap",
            AlbedoColor => "albedoColor",
            ReflectivityColor => "reflectivityColor",
            MicroSurface => "microSurface",
            EmissiveColor => "emissiveColor",
            AmbientColor => "ambientColor",
            UsePhysicalLightFalloff => "usePhysicalLightFalloff",
            Metallic => "metallic",
            Roughness => "roughness",
            EnvironmentIntensity => "environmentIntensity",
            SpecularIntensity => "specularIntensity",
            EmissiveIntensity => "emissiveIntensity",
            DirectIntensity => "directIntensity",
            AmbientTextureStrength => "ambientTextureStrength",
            UseAlphaFromAlbedoTexture => "useAlphaFromAlbedoTexture",
            UseAmbientInGrayScale => "useAmbientInGrayScale",
            UseRadianceOverAlpha => "useRadianceOverAlpha",
            UseMicroSurfaceFromReflectivityMapAlpha => "useMicroSurfaceFromReflectivityMapAlpha",
            UseSpecularOverAlpha => "useSpecularOverAlpha",
            EnableSpecularAntiAliasing => "enableSpecularAntiAliasing",
            UseRadianceOcclusion => "useRadianceOcclusion",
            UseHorizonOcclusion => "useHorizonOcclusion",
            Unlit => "unlit",
            DebugMode => "debugMode",
            DebugLimit => "debugLimit",
            DebugFactor => "debugFactor",

            ClearCoatEnabled => "isEnabled",
            ClearCoatIntensity => "intensity",
            ClearCoatRoughness => "roughness",
            ClearCoatIndexOfRefraction => "indexOfRefraction",
            ClearCoatTintEnabled => "isTintEnabled",
            ClearCoatTintColor => "tintColor",
            ClearCoatTintColorAtDistance => "tintColorAtDistance",
            ClearCoatTintThickness => "tintThickness",

            AnisotropyEnabled => "isEnabled",
            AnisotropyIntensity => "intensity",
            AnisotropyDirection => "direction",

            SheenEnabled => "isEnabled",
            SheenLinkWithAlbedo => "linkSheenWithAlbedo",
            SheenIntensity => "intensity",
            SheenColor => "color",

            SubSurfaceMinimumThickness => "minimumThickness",
            SubSurfaceMaximumThickness => "maximumThickness",
            SubSurfaceUseMaskFromThicknessTexture => "useMaskFromThicknessTexture",
            SubSurfaceTintColor => "tintColor",
            SubSurfaceRefractionEnabled => "isRefractionEnabled",
            SubSurfaceRefractionIntensity => "refractionIntensity",
            SubSurfaceIndexOfRefraction => "indexOfRefraction",
            SubSurfaceTintColorAtDistance => "tintColorAtDistance",
            SubSurfaceLinkRefractionWithTransparency => "linkRefractionWithTransparency",
            SubSurfaceTranslucencyEnabled => "isTranslucencyEnabled",
            SubSurfaceTranslucencyIntensity => "translucencyIntensity",
            SubSurfaceDiffusionDistance => "diffusionDistance",

            BrdfUseEnergyConservation => "useEnergyConservation",
            BrdfUseSphericalHarmonics => "useSphericalHarmonics",

            TextureLevel(_) => "level",
        }
    }

    pub fn kind(self) -> ValueKind {
        use PropertyKey::*;
        match self {
            Name => ValueKind::Text,

            DebugMode => ValueKind::Int,

            AnisotropyDirection => ValueKind::Vector2,

            AlbedoColor
            | ReflectivityColor
            | EmissiveColor
            | AmbientColor
            | ClearCoatTintColor
            | SheenColor
            | SubSurfaceTintColor
            | SubSurfaceDiffusionDistance => ValueKind::Color3,

            Alpha
            | MicroSurface
            | Metallic
            | Roughness
            | EnvironmentIntensity
            | SpecularIntensity
            | EmissiveIntensity
            | DirectIntensity
            | AmbientTextureStrength
            | DebugLimit
            | DebugFactor
            | ClearCoatIntensity
            | ClearCoatRoughness
            | ClearCoatIndexOfRefraction
            | ClearCoatTintColorAtDistance
            | ClearCoatTintThickness
            | AnisotropyIntensity
            | SheenIntensity
            | SubSurfaceMinimumThickness
            | SubSurfaceMaximumThickness
            | SubSurfaceRefractionIntensity
            | SubSurfaceIndexOfRefraction
            | SubSurfaceTintColorAtDistance
            | SubSurfaceTranslucencyIntensity
            | TextureLevel(_) => ValueKind::Float,

            _ => ValueKind::Bool,
        }
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.target(), self.name())
    }
}
