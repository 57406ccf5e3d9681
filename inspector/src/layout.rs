//! Static layout of the PBR property grid.
//!
//! Every section, line, range and visibility requirement is `'static` data
//! built at compile time. The grid walks this table each frame; nothing here
//! depends on egui, so visibility can be evaluated (and tested) without a UI.

use matgrid_core::debug_mode::{DEBUG_MODE_OPTIONS, DebugModeOption};
use matgrid_core::material::{PbrMaterial, TextureSlot};
use matgrid_core::property::PropertyKey;

/// Slider bounds and step. Enforced by the slider widget, never by the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderRange {
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl SliderRange {
    pub const fn new(min: f32, max: f32, step: f32) -> Self {
        Self { min, max, step }
    }
}

/// Widget used for a bound field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Control {
    Slider(SliderRange),
    CheckBox,
    Color3,
    Vector2,
    Text,
    Options(&'static [DebugModeOption]),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineKind {
    /// Widget two-way bound to a material field.
    Field { key: PropertyKey, control: Control },
    /// Link to a texture; shown only while the texture is present.
    TextureLink { slot: TextureSlot },
}

/// Boolean feature flag that hides or shows dependent lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gate {
    ClearCoat,
    ClearCoatTint,
    Anisotropy,
    Sheen,
    Refraction,
    Translucency,
}

impl Gate {
    pub const ALL: [Gate; 6] = [
        Gate::ClearCoat,
        Gate::ClearCoatTint,
        Gate::Anisotropy,
        Gate::Sheen,
        Gate::Refraction,
        Gate::Translucency,
    ];

    /// Gate controlled by a checkbox bound to `key`, if any.
    pub fn for_key(key: PropertyKey) -> Option<Gate> {
        match key {
            PropertyKey::ClearCoatEnabled => Some(Gate::ClearCoat),
            PropertyKey::ClearCoatTintEnabled => Some(Gate::ClearCoatTint),
            PropertyKey::AnisotropyEnabled => Some(Gate::Anisotropy),
            PropertyKey::SheenEnabled => Some(Gate::Sheen),
            PropertyKey::SubSurfaceRefractionEnabled => Some(Gate::Refraction),
            PropertyKey::SubSurfaceTranslucencyEnabled => Some(Gate::Translucency),
            _ => None,
        }
    }

    pub fn key(self) -> PropertyKey {
        match self {
            Gate::ClearCoat => PropertyKey::ClearCoatEnabled,
            Gate::ClearCoatTint => PropertyKey::ClearCoatTintEnabled,
            Gate::Anisotropy => PropertyKey::AnisotropyEnabled,
            Gate::Sheen => PropertyKey::SheenEnabled,
            Gate::Refraction => PropertyKey::SubSurfaceRefractionEnabled,
            Gate::Translucency => PropertyKey::SubSurfaceTranslucencyEnabled,
        }
    }
}

/// Component-local copy of every gating flag.
///
/// Synced from the material when the grid starts drawing, then updated
/// directly by the toggle handler, so lines below a toggled checkbox see the
/// new value in the same frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FeatureGates {
    pub clear_coat: bool,
    pub clear_coat_tint: bool,
    pub anisotropy: bool,
    pub sheen: bool,
    pub refraction: bool,
    pub translucency: bool,
}

impl FeatureGates {
    pub fn from_material(material: &PbrMaterial) -> Self {
        Self {
            clear_coat: material.clear_coat.is_enabled,
            clear_coat_tint: material.clear_coat.is_tint_enabled,
            anisotropy: material.anisotropy.is_enabled,
            sheen: material.sheen.is_enabled,
            refraction: material.sub_surface.is_refraction_enabled,
            translucency: material.sub_surface.is_translucency_enabled,
        }
    }

    pub fn get(&self, gate: Gate) -> bool {
        match gate {
            Gate::ClearCoat => self.clear_coat,
            Gate::ClearCoatTint => self.clear_coat_tint,
            Gate::Anisotropy => self.anisotropy,
            Gate::Sheen => self.sheen,
            Gate::Refraction => self.refraction,
            Gate::Translucency => self.translucency,
        }
    }

    pub fn set(&mut self, gate: Gate, open: bool) {
        let flag = match gate {
            Gate::ClearCoat => &mut self.clear_coat,
            Gate::ClearCoatTint => &mut self.clear_coat_tint,
            Gate::Anisotropy => &mut self.anisotropy,
            Gate::Sheen => &mut self.sheen,
            Gate::Refraction => &mut self.refraction,
            Gate::Translucency => &mut self.translucency,
        };
        *flag = open;
    }
}

/// One condition a line needs to be shown. A line's requirements are ANDed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Requirement {
    Gate(Gate),
    Texture(TextureSlot),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub label: &'static str,
    pub kind: LineKind,
    pub requires: &'static [Requirement],
}

impl Line {
    const fn field(label: &'static str, key: PropertyKey, control: Control) -> Self {
        Self {
            label,
            kind: LineKind::Field { key, control },
            requires: &[],
        }
    }

    const fn when(self, requires: &'static [Requirement]) -> Self {
        Self {
            label: self.label,
            kind: self.kind,
            requires,
        }
    }

    pub fn key(&self) -> Option<PropertyKey> {
        match self.kind {
            LineKind::Field { key, .. } => Some(key),
            LineKind::TextureLink { .. } => None,
        }
    }

    pub fn is_visible(&self, gates: &FeatureGates, material: &PbrMaterial) -> bool {
        if let LineKind::TextureLink { slot } = self.kind
            && !material.has_texture(slot)
        {
            return false;
        }
        self.requires.iter().all(|requirement| match *requirement {
            Requirement::Gate(gate) => gates.get(gate),
            Requirement::Texture(slot) => material.has_texture(slot),
        })
    }
}

const fn slider(label: &'static str, key: PropertyKey, min: f32, max: f32, step: f32) -> Line {
    Line::field(label, key, Control::Slider(SliderRange::new(min, max, step)))
}

const fn check(label: &'static str, key: PropertyKey) -> Line {
    Line::field(label, key, Control::CheckBox)
}

const fn color(label: &'static str, key: PropertyKey) -> Line {
    Line::field(label, key, Control::Color3)
}

const fn texture(label: &'static str, slot: TextureSlot) -> Line {
    Line {
        label,
        kind: LineKind::TextureLink { slot },
        requires: &[],
    }
}

/// A titled, collapsible group of lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Section {
    pub title: &'static str,
    pub closed_by_default: bool,
    pub lines: &'static [Line],
}

impl Section {
    pub fn visible_lines<'a>(
        &'a self,
        gates: &'a FeatureGates,
        material: &'a PbrMaterial,
    ) -> impl Iterator<Item = &'a Line> + 'a {
        self.lines
            .iter()
            .filter(move |line| line.is_visible(gates, material))
    }
}

use PropertyKey as K;
use TextureSlot as T;

const CLEAR_COAT: &[Requirement] = &[Requirement::Gate(Gate::ClearCoat)];
const CLEAR_COAT_TINT: &[Requirement] = &[
    Requirement::Gate(Gate::ClearCoat),
    Requirement::Gate(Gate::ClearCoatTint),
];
const ANISOTROPY: &[Requirement] = &[Requirement::Gate(Gate::Anisotropy)];
const SHEEN: &[Requirement] = &[Requirement::Gate(Gate::Sheen)];
const REFRACTION: &[Requirement] = &[Requirement::Gate(Gate::Refraction)];
const TRANSLUCENCY: &[Requirement] = &[Requirement::Gate(Gate::Translucency)];

/// Shared common-material panel.
pub const GENERAL: Section = Section {
    title: "GENERAL",
    closed_by_default: false,
    lines: &[
        Line::field("Name", K::Name, Control::Text),
        check("Back face culling", K::BackFaceCulling),
        check("Disable depth write", K::DisableDepthWrite),
        check("Need depth pre-pass", K::NeedDepthPrePass),
        check("Wireframe", K::Wireframe),
        slider("Alpha", K::Alpha, 0.0, 1.0, 0.01),
    ],
};

pub const TEXTURES: Section = Section {
    title: "TEXTURES",
    closed_by_default: false,
    lines: &[
        texture("Albedo", T::Albedo),
        texture("Metallic", T::Metallic),
        texture("Reflection", T::Reflection),
        texture("Refraction", T::Refraction),
        texture("Micro-surface", T::MicroSurface),
        texture("Bump", T::Bump),
        texture("Emissive", T::Emissive),
        texture("Opacity", T::Opacity),
        texture("Ambient", T::Ambient),
        texture("Lightmap", T::Lightmap),
        check("Use lightmap as shadowmap", K::UseLightmapAsShadowmap),
    ],
};

/// Sections drawn after [`GENERAL`] and [`TEXTURES`], in order.
pub const PBR_SECTIONS: &[Section] = &[
    Section {
        title: "LIGHTING & COLORS",
        closed_by_default: false,
        lines: &[
            color("Albedo", K::AlbedoColor),
            color("Reflectivity", K::ReflectivityColor),
            slider("Micro-surface", K::MicroSurface, 0.0, 1.0, 0.01),
            color("Emissive", K::EmissiveColor),
            color("Ambient", K::AmbientColor),
            check("Use physical light falloff", K::UsePhysicalLightFalloff),
        ],
    },
    Section {
        title: "METALLIC WORKFLOW",
        closed_by_default: false,
        lines: &[
            slider("Metallic", K::Metallic, 0.0, 1.0, 0.01),
            slider("Roughness", K::Roughness, 0.0, 1.0, 0.01),
        ],
    },
    Section {
        title: "CLEAR COAT",
        closed_by_default: false,
        lines: &[
            check("Enabled", K::ClearCoatEnabled),
            slider("Intensity", K::ClearCoatIntensity, 0.0, 1.0, 0.01).when(CLEAR_COAT),
            slider("Roughness", K::ClearCoatRoughness, 0.0, 1.0, 0.01).when(CLEAR_COAT),
            slider("IOR", K::ClearCoatIndexOfRefraction, 1.0, 3.0, 0.01).when(CLEAR_COAT),
            texture("Texture", T::ClearCoat).when(CLEAR_COAT),
            texture("Bump", T::ClearCoatBump).when(CLEAR_COAT),
            slider(
                "Bump strength",
                K::TextureLevel(T::ClearCoatBump),
                0.0,
                2.0,
                0.01,
            )
            .when(&[
                Requirement::Gate(Gate::ClearCoat),
                Requirement::Texture(T::ClearCoatBump),
            ]),
            check("Tint", K::ClearCoatTintEnabled).when(CLEAR_COAT),
            color("Tint Color", K::ClearCoatTintColor).when(CLEAR_COAT_TINT),
            slider("At Distance", K::ClearCoatTintColorAtDistance, 0.0, 20.0, 0.1)
                .when(CLEAR_COAT_TINT),
            slider("Tint Thickness", K::ClearCoatTintThickness, 0.0, 20.0, 0.1)
                .when(CLEAR_COAT_TINT),
            texture("Tint Texture", T::ClearCoatTint).when(CLEAR_COAT_TINT),
        ],
    },
    Section {
        title: "ANISOTROPIC",
        closed_by_default: false,
        lines: &[
            check("Enabled", K::AnisotropyEnabled),
            slider("Intensity", K::AnisotropyIntensity, 0.0, 1.0, 0.01).when(ANISOTROPY),
            Line::field("Direction", K::AnisotropyDirection, Control::Vector2).when(ANISOTROPY),
            texture("Texture", T::Anisotropy).when(ANISOTROPY),
        ],
    },
    Section {
        title: "SHEEN",
        closed_by_default: false,
        lines: &[
            check("Enabled", K::SheenEnabled),
            check("Link to Albedo", K::SheenLinkWithAlbedo).when(SHEEN),
            slider("Intensity", K::SheenIntensity, 0.0, 1.0, 0.01).when(SHEEN),
            color("Color", K::SheenColor).when(SHEEN),
            texture("Texture", T::Sheen).when(SHEEN),
        ],
    },
    Section {
        title: "SUBSURFACE",
        closed_by_default: false,
        lines: &[
            texture("Thickness", T::Thickness),
            slider("Min Thickness", K::SubSurfaceMinimumThickness, 0.0, 10.0, 0.1),
            slider("Max Thickness", K::SubSurfaceMaximumThickness, 0.0, 10.0, 0.1),
            check("Mask From Thickness", K::SubSurfaceUseMaskFromThicknessTexture),
            color("Tint Color", K::SubSurfaceTintColor),
            check("Refraction Enabled", K::SubSurfaceRefractionEnabled),
            slider("Intensity", K::SubSurfaceRefractionIntensity, 0.0, 1.0, 0.01)
                .when(REFRACTION),
            slider("Index of Refraction", K::SubSurfaceIndexOfRefraction, 1.0, 2.0, 0.01)
                .when(REFRACTION),
            slider("Tint at Distance", K::SubSurfaceTintColorAtDistance, 0.0, 10.0, 0.1)
                .when(REFRACTION),
            check(
                "Link refraction with transparency",
                K::SubSurfaceLinkRefractionWithTransparency,
            )
            .when(REFRACTION),
            check("Translucency Enabled", K::SubSurfaceTranslucencyEnabled),
            slider("Intensity", K::SubSurfaceTranslucencyIntensity, 0.0, 1.0, 0.01)
                .when(TRANSLUCENCY),
            color("Diffusion Distance", K::SubSurfaceDiffusionDistance).when(TRANSLUCENCY),
        ],
    },
    Section {
        title: "LEVELS",
        closed_by_default: true,
        lines: &[
            slider("Environment", K::EnvironmentIntensity, 0.0, 1.0, 0.01),
            slider("Specular", K::SpecularIntensity, 0.0, 1.0, 0.01),
            slider("Emissive", K::EmissiveIntensity, 0.0, 1.0, 0.01),
            slider("Direct", K::DirectIntensity, 0.0, 1.0, 0.01),
            slider("Bump strength", K::TextureLevel(T::Bump), 0.0, 2.0, 0.01)
                .when(&[Requirement::Texture(T::Bump)]),
            slider("Ambient strength", K::AmbientTextureStrength, 0.0, 1.0, 0.01)
                .when(&[Requirement::Texture(T::Ambient)]),
            slider(
                "Reflection strength",
                K::TextureLevel(T::Reflection),
                0.0,
                1.0,
                0.01,
            )
            .when(&[Requirement::Texture(T::Reflection)]),
        ],
    },
    Section {
        title: "RENDERING",
        closed_by_default: true,
        lines: &[
            check("Alpha from albedo", K::UseAlphaFromAlbedoTexture),
            check("Ambient in grayscale", K::UseAmbientInGrayScale),
            check("Radiance over alpha", K::UseRadianceOverAlpha),
            check(
                "Micro-surface from ref. map alpha",
                K::UseMicroSurfaceFromReflectivityMapAlpha,
            ),
            check("Specular over alpha", K::UseSpecularOverAlpha),
            check("Specular anti-aliasing", K::EnableSpecularAntiAliasing),
        ],
    },
    Section {
        title: "ADVANCED",
        closed_by_default: true,
        lines: &[
            check("Energy Conservation", K::BrdfUseEnergyConservation),
            check("Spherical Harmonics", K::BrdfUseSphericalHarmonics),
            check("Radiance occlusion", K::UseRadianceOcclusion),
            check("Horizon occlusion", K::UseHorizonOcclusion),
            check("Unlit", K::Unlit),
        ],
    },
    Section {
        title: "DEBUG",
        closed_by_default: true,
        lines: &[
            Line::field("Debug mode", K::DebugMode, Control::Options(DEBUG_MODE_OPTIONS)),
            slider("Split position", K::DebugLimit, -1.0, 1.0, 0.01),
            slider("Output factor", K::DebugFactor, 0.0, 5.0, 0.01),
        ],
    },
];

/// Every section in drawing order.
pub fn all_sections() -> impl Iterator<Item = &'static Section> {
    [&GENERAL, &TEXTURES]
        .into_iter()
        .chain(PBR_SECTIONS.iter())
}

pub fn section(title: &str) -> Option<&'static Section> {
    all_sections().find(|s| s.title == title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use matgrid_core::property::ValueKind;

    #[test]
    fn section_order() {
        let titles: Vec<_> = all_sections().map(|s| s.title).collect();
        assert_eq!(
            titles,
            [
                "GENERAL",
                "TEXTURES",
                "LIGHTING & COLORS",
                "METALLIC WORKFLOW",
                "CLEAR COAT",
                "ANISOTROPIC",
                "SHEEN",
                "SUBSURFACE",
                "LEVELS",
                "RENDERING",
                "ADVANCED",
                "DEBUG",
            ]
        );
    }

    #[test]
    fn collapsed_by_default() {
        let closed: Vec<_> = all_sections()
            .filter(|s| s.closed_by_default)
            .map(|s| s.title)
            .collect();
        assert_eq!(closed, ["LEVELS", "RENDERING", "ADVANCED", "DEBUG"]);
    }

    #[test]
    fn controls_match_value_kinds() {
        for section in all_sections() {
            for line in section.lines {
                let LineKind::Field { key, control } = line.kind else {
                    continue;
                };
                let expected = match control {
                    Control::Slider(_) => ValueKind::Float,
                    Control::CheckBox => ValueKind::Bool,
                    Control::Color3 => ValueKind::Color3,
                    Control::Vector2 => ValueKind::Vector2,
                    Control::Text => ValueKind::Text,
                    Control::Options(_) => ValueKind::Int,
                };
                assert_eq!(key.kind(), expected, "{} / {}", section.title, line.label);
            }
        }
    }

    #[test]
    fn slider_ranges_are_ordered() {
        for section in all_sections() {
            for line in section.lines {
                if let LineKind::Field {
                    control: Control::Slider(range),
                    ..
                } = line.kind
                {
                    assert!(range.min < range.max, "{}", line.label);
                    assert!(range.step > 0.0, "{}", line.label);
                }
            }
        }
    }

    #[test]
    fn slider_ranges_match_table() {
        #[rustfmt::skip]
        let expected: &[(&str, &str, f32, f32, f32)] = &[
            ("GENERAL", "Alpha", 0.0, 1.0, 0.01),
            ("LIGHTING & COLORS", "Micro-surface", 0.0, 1.0, 0.01),
            ("METALLIC WORKFLOW", "Metallic", 0.0, 1.0, 0.01),
            ("METALLIC WORKFLOW", "Roughness", 0.0, 1.0, 0.01),
            ("CLEAR COAT", "Intensity", 0.0, 1.0, 0.01),
            ("CLEAR COAT", "Roughness", 0.0, 1.0, 0.01),
            ("CLEAR COAT", "IOR", 1.0, 3.0, 0.01),
            ("CLEAR COAT", "Bump strength", 0.0, 2.0, 0.01),
            ("CLEAR COAT", "At Distance", 0.0, 20.0, 0.1),
            ("CLEAR COAT", "Tint Thickness", 0.0, 20.0, 0.1),
            ("ANISOTROPIC", "Intensity", 0.0, 1.0, 0.01),
            ("SHEEN", "Intensity", 0.0, 1.0, 0.01),
            ("SUBSURFACE", "Min Thickness", 0.0, 10.0, 0.1),
            ("SUBSURFACE", "Max Thickness", 0.0, 10.0, 0.1),
            ("SUBSURFACE", "Intensity", 0.0, 1.0, 0.01),
            ("SUBSURFACE", "Index of Refraction", 1.0, 2.0, 0.01),
            ("SUBSURFACE", "Tint at Distance", 0.0, 10.0, 0.1),
            ("SUBSURFACE", "Intensity", 0.0, 1.0, 0.01),
            ("LEVELS", "Environment", 0.0, 1.0, 0.01),
            ("LEVELS", "Specular", 0.0, 1.0, 0.01),
            ("LEVELS", "Emissive", 0.0, 1.0, 0.01),
            ("LEVELS", "Direct", 0.0, 1.0, 0.01),
            ("LEVELS", "Bump strength", 0.0, 2.0, 0.01),
            ("LEVELS", "Ambient strength", 0.0, 1.0, 0.01),
            ("LEVELS", "Reflection strength", 0.0, 1.0, 0.01),
            ("DEBUG", "Split position", -1.0, 1.0, 0.01),
            ("DEBUG", "Output factor", 0.0, 5.0, 0.01),
        ];

        let actual: Vec<_> = all_sections()
            .flat_map(|section| {
                section.lines.iter().filter_map(move |line| match line.kind {
                    LineKind::Field {
                        control: Control::Slider(r),
                        ..
                    } => Some((section.title, line.label, r.min, r.max, r.step)),
                    _ => None,
                })
            })
            .collect();

        assert_eq!(actual, expected);
    }

    #[test]
    fn labels_are_trimmed() {
        for section in all_sections() {
            for line in section.lines {
                assert_eq!(line.label, line.label.trim());
            }
        }
    }

    #[test]
    fn gate_keys_round_trip() {
        for gate in Gate::ALL {
            assert_eq!(Gate::for_key(gate.key()), Some(gate));
        }
        assert_eq!(Gate::for_key(PropertyKey::Metallic), None);
    }

    #[test]
    fn gates_follow_material() {
        let mut mat = PbrMaterial::default();
        mat.sheen.is_enabled = true;
        mat.clear_coat.is_tint_enabled = true;
        let gates = FeatureGates::from_material(&mat);
        assert!(gates.sheen);
        assert!(gates.clear_coat_tint);
        assert!(!gates.clear_coat);

        let mut gates = gates;
        gates.set(Gate::Refraction, true);
        assert!(gates.get(Gate::Refraction));
    }
}
