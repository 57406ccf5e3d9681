use matgrid_core::material::{PbrMaterial, TextureSlot};
use matgrid_core::property::{PropertyChangedEvent, PropertyKey, PropertyValue};
use matgrid_core::{LockObject, Observable, PropertyError};

use crate::binding;
use crate::global_state::GlobalState;
use crate::layout::{self, FeatureGates, Gate, Line, LineKind, PBR_SECTIONS, Section};
use crate::lines::{self, TextureLinkAction};
use crate::texture_link::{SelectionChanged, TextureDebugSelection, TextureDebugState};

/// Host-provided collaborators for one [`PbrMaterialPropertyGrid::show`] call.
pub struct PropertyGridContext<'a> {
    pub global_state: &'a mut GlobalState,
    /// Held while a text field of the grid has keyboard focus.
    pub lock_object: &'a LockObject,
    pub on_property_changed: Option<&'a Observable<PropertyChangedEvent>>,
    pub on_selection_changed: Option<&'a Observable<SelectionChanged>>,
}

/// What happened during one frame of the grid.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GridResponse {
    /// Committed edits, in order.
    pub edits: Vec<PropertyChangedEvent>,
    /// Texture the user clicked, if any.
    pub selected: Option<SelectionChanged>,
}

/// Property grid for a [`PbrMaterial`].
///
/// Draws the common GENERAL panel, the texture links and the PBR sections.
/// Lines behind a feature flag are hidden or shown from the component's own
/// [`FeatureGates`], which the flag's checkbox updates as soon as it is
/// toggled.
#[derive(Debug, Default)]
pub struct PbrMaterialPropertyGrid {
    gates: FeatureGates,
    texture_debug: TextureDebugState,
    on_debug_selection_changed: Observable<TextureDebugSelection>,
}

impl PbrMaterialPropertyGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fires when a texture's debug toggle changes.
    pub fn on_debug_selection_changed(&self) -> &Observable<TextureDebugSelection> {
        &self.on_debug_selection_changed
    }

    pub fn gates(&self) -> &FeatureGates {
        &self.gates
    }

    pub fn debug_texture(&self) -> Option<TextureSlot> {
        self.texture_debug.selected()
    }

    /// Re-reads gating flags and the debug selection from `material`.
    ///
    /// Called at the start of every [`show`](Self::show); hosts that edit the
    /// material outside the grid (undo, reload) need nothing else.
    pub fn sync(&mut self, material: &mut PbrMaterial) {
        self.gates = FeatureGates::from_material(material);
        self.texture_debug
            .sync(material, &self.on_debug_selection_changed);
    }

    /// Lines of `section` that would be drawn with the current gates.
    pub fn visible_lines(&self, section: &'static Section, material: &PbrMaterial) -> Vec<&'static Line> {
        section
            .lines
            .iter()
            .filter(|line| line.is_visible(&self.gates, material))
            .collect()
    }

    /// Writes a value through the grid's binding and updates the gate the
    /// key controls, if any.
    pub fn commit(
        &mut self,
        material: &mut PbrMaterial,
        key: PropertyKey,
        value: PropertyValue,
        on_property_changed: Option<&Observable<PropertyChangedEvent>>,
    ) -> Result<PropertyChangedEvent, PropertyError> {
        let event = binding::commit(material, key, value, on_property_changed)?;
        if let Some(gate) = Gate::for_key(key)
            && let Some(open) = event.value.as_bool()
        {
            self.gates.set(gate, open);
        }
        Ok(event)
    }

    /// Flips the debug view of the texture in `slot`; returns whether it is
    /// now on.
    pub fn toggle_texture_debug(&mut self, slot: TextureSlot, material: &mut PbrMaterial) -> bool {
        self.texture_debug
            .toggle(slot, material, &self.on_debug_selection_changed)
    }

    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        material: &mut PbrMaterial,
        context: &mut PropertyGridContext<'_>,
    ) -> GridResponse {
        self.sync(material);

        let mut frame = Frame::default();
        self.show_section(ui, &layout::GENERAL, material, context, &mut frame);
        self.show_textures(ui, material, context, &mut frame);
        for section in PBR_SECTIONS {
            self.show_section(ui, section, material, context, &mut frame);
        }

        context.lock_object.set_locked(frame.text_focus);
        frame.response
    }

    fn show_textures(
        &mut self,
        ui: &mut egui::Ui,
        material: &mut PbrMaterial,
        context: &mut PropertyGridContext<'_>,
        frame: &mut Frame,
    ) {
        let section = &layout::TEXTURES;
        self.show_collapsing(ui, section, context, |grid, ui, context| {
            let linked = TextureSlot::ALL
                .iter()
                .any(|slot| material.has_texture(*slot));
            if !linked {
                ui.weak("No textures linked");
            }
            for line in section.lines {
                grid.show_line(ui, line, material, context, frame);
            }
        });
    }

    fn show_section(
        &mut self,
        ui: &mut egui::Ui,
        section: &'static Section,
        material: &mut PbrMaterial,
        context: &mut PropertyGridContext<'_>,
        frame: &mut Frame,
    ) {
        self.show_collapsing(ui, section, context, |grid, ui, context| {
            for line in section.lines {
                grid.show_line(ui, line, material, context, frame);
            }
        });
    }

    fn show_collapsing(
        &mut self,
        ui: &mut egui::Ui,
        section: &'static Section,
        context: &mut PropertyGridContext<'_>,
        add_body: impl FnOnce(&mut Self, &mut egui::Ui, &mut PropertyGridContext<'_>),
    ) {
        let open = context.global_state.is_open(section);
        let header = egui::CollapsingHeader::new(section.title)
            .open(Some(open))
            .show(ui, |ui| add_body(self, ui, context));
        if header.header_response.clicked() {
            context.global_state.toggle(section);
        }
    }

    /// Visibility is checked here, line by line, so a gate toggled above
    /// applies to the lines below it in the same frame.
    fn show_line(
        &mut self,
        ui: &mut egui::Ui,
        line: &Line,
        material: &mut PbrMaterial,
        context: &mut PropertyGridContext<'_>,
        frame: &mut Frame,
    ) {
        if !line.is_visible(&self.gates, material) {
            return;
        }

        match line.kind {
            LineKind::Field { key, control } => {
                let Some(current) = material.get(key) else {
                    return;
                };
                if let Some(value) =
                    lines::field(ui, line.label, control, &current, &mut frame.text_focus)
                    && let Ok(event) = self.commit(material, key, value, context.on_property_changed)
                {
                    frame.response.edits.push(event);
                }
            }
            LineKind::TextureLink { slot } => {
                let Some(texture) = material.texture(slot).cloned() else {
                    return;
                };
                let debugging = self.texture_debug.is_selected(slot);
                match lines::texture_link(ui, line.label, &texture, debugging) {
                    Some(TextureLinkAction::Select) => {
                        let selection = SelectionChanged { slot, texture };
                        log::debug!("Selected {} ({slot:?})", selection.texture.name);
                        if let Some(channel) = context.on_selection_changed {
                            channel.notify_observers(&selection);
                        }
                        frame.response.selected = Some(selection);
                    }
                    Some(TextureLinkAction::ToggleDebug) => {
                        self.toggle_texture_debug(slot, material);
                    }
                    None => {}
                }
            }
        }
    }
}

#[derive(Default)]
struct Frame {
    response: GridResponse,
    text_focus: bool,
}
