use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use egui::{Key, KeyboardShortcut, Modifiers};
use parking_lot::Mutex;

use matgrid_core::abstract_editor::{DEFAULT_MAX_UNDO, EditActionHistory};
use matgrid_core::material::PbrMaterial;
use matgrid_core::property::{PropertyChangedEvent, SetPropertyAction};
use matgrid_core::{LockObject, Observable};
use matgrid_inspector::{PbrMaterialPropertyGrid, PropertyGridContext, SelectionChanged};

use crate::config::EditorConfig;
use crate::document;
use crate::event_log::EventLogPanel;
use crate::history_panel::{self, HistoryRequest};
use crate::log_capture::SharedLogBuffer;
use crate::theme;

const SAVE: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::S);
const REDO: KeyboardShortcut =
    KeyboardShortcut::new(Modifiers::COMMAND.plus(Modifiers::SHIFT), Key::Z);
const UNDO: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatusKind {
    Info,
    Error,
}

struct StatusMessage {
    text: String,
    kind: StatusKind,
    created_at: Instant,
}

impl StatusMessage {
    fn new(kind: StatusKind, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind,
            created_at: Instant::now(),
        }
    }

    fn expired(&self) -> bool {
        self.created_at.elapsed() > Duration::from_secs(6)
    }
}

/// Single-material editor window: property grid on the left, history and
/// event log in the center.
pub struct MaterialEditor {
    config: EditorConfig,
    config_path: PathBuf,
    material: PbrMaterial,
    history: EditActionHistory<PbrMaterial>,
    grid: PbrMaterialPropertyGrid,
    lock: LockObject,
    on_property_changed: Observable<PropertyChangedEvent>,
    on_selection_changed: Observable<SelectionChanged>,
    /// Edits published by the grid, recorded into history after each frame.
    pending: Arc<Mutex<Vec<PropertyChangedEvent>>>,
    event_log: EventLogPanel,
    status: Option<StatusMessage>,
    title_dirty: Option<bool>,
}

impl MaterialEditor {
    pub fn new(
        config: EditorConfig,
        config_path: PathBuf,
        material: PbrMaterial,
        log_buffer: SharedLogBuffer,
    ) -> Self {
        let pending = Arc::new(Mutex::new(Vec::new()));
        let on_property_changed = Observable::new();
        let sink = pending.clone();
        on_property_changed.add(move |event: &PropertyChangedEvent| {
            sink.lock().push(event.clone());
        });

        let on_selection_changed = Observable::new();
        on_selection_changed.add(|selection: &SelectionChanged| {
            log::info!(
                "Selected texture {} ({:?})",
                selection.texture.name,
                selection.slot
            );
        });

        let grid = PbrMaterialPropertyGrid::new();
        grid.on_debug_selection_changed().add(|selection| {
            let state = if selection.enabled { "on" } else { "off" };
            log::info!("Texture debug view {state} for {:?}", selection.slot);
        });

        Self {
            config,
            config_path,
            material,
            history: EditActionHistory::new(DEFAULT_MAX_UNDO),
            grid,
            lock: LockObject::new(),
            on_property_changed,
            on_selection_changed,
            pending,
            event_log: EventLogPanel::new(log_buffer),
            status: None,
            title_dirty: None,
        }
    }

    fn set_status(&mut self, kind: StatusKind, text: impl Into<String>) {
        self.status = Some(StatusMessage::new(kind, text));
    }

    fn record_edits(&mut self) {
        let edits = std::mem::take(&mut *self.pending.lock());
        for event in &edits {
            let action = Box::new(SetPropertyAction::from(event));
            if let Err(e) = self.history.execute(action, &mut self.material) {
                log::warn!("Could not record {}: {e}", event.key);
            }
        }
    }

    fn undo(&mut self) {
        match self.history.undo(&mut self.material) {
            Ok(()) => log::info!("Undo"),
            Err(e) => log::warn!("Undo failed: {e}"),
        }
    }

    fn redo(&mut self) {
        match self.history.redo(&mut self.material) {
            Ok(()) => log::info!("Redo"),
            Err(e) => log::warn!("Redo failed: {e}"),
        }
    }

    fn save(&mut self) {
        match document::save(&self.config.material, &self.material) {
            Ok(()) => {
                self.history.mark_saved();
                let text = format!("Saved {}", self.config.material.display());
                self.set_status(StatusKind::Info, text);
            }
            Err(e) => {
                log::error!("{e}");
                self.set_status(StatusKind::Error, e.to_string());
            }
        }
    }

    fn persist_config(&self) {
        match self.config.save(&self.config_path) {
            Ok(()) => log::info!("Wrote {}", self.config_path.display()),
            Err(e) => log::error!("{e}"),
        }
    }

    /// Shortcuts are ignored while a grid text field holds the lock.
    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        if self.lock.is_locked() {
            return;
        }
        let (save, redo, undo) = ctx.input_mut(|i| {
            (
                i.consume_shortcut(&SAVE),
                i.consume_shortcut(&REDO),
                i.consume_shortcut(&UNDO),
            )
        });
        if save {
            self.save();
        }
        if redo {
            self.redo();
        } else if undo {
            self.undo();
        }
    }

    fn update_title(&mut self, ctx: &egui::Context) {
        let dirty = self.history.has_unsaved_changes();
        if self.title_dirty == Some(dirty) {
            return;
        }
        self.title_dirty = Some(dirty);
        let marker = if dirty { "*" } else { "" };
        ctx.send_viewport_cmd(egui::ViewportCommand::Title(format!(
            "{}{marker} - matgrid",
            self.material.name
        )));
    }

    fn draw_top_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.strong(&self.material.name);
            ui.weak(self.config.material.display().to_string());
            if self.history.has_unsaved_changes() {
                ui.label(egui::RichText::new("modified").color(theme::WARNING));
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Save").clicked() {
                    self.save();
                }
            });
        });
    }

    fn draw_status_bar(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if let Some(status) = &self.status {
                let color = match status.kind {
                    StatusKind::Info => theme::TEXT_SECONDARY,
                    StatusKind::Error => theme::ERROR,
                };
                ui.label(egui::RichText::new(&status.text).color(color));
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if let Some(slot) = self.grid.debug_texture() {
                    ui.label(
                        egui::RichText::new(format!("debugging {slot:?}")).color(theme::INFO),
                    );
                }
                if self.lock.is_locked() {
                    ui.weak("editing text");
                }
            });
        });
    }

    fn draw_grid(&mut self, ui: &mut egui::Ui) {
        let mut context = PropertyGridContext {
            global_state: &mut self.config.inspector,
            lock_object: &self.lock,
            on_property_changed: Some(&self.on_property_changed),
            on_selection_changed: Some(&self.on_selection_changed),
        };
        let response = egui::ScrollArea::vertical()
            .id_salt("property_grid")
            .show(ui, |ui| self.grid.show(ui, &mut self.material, &mut context))
            .inner;
        if let Some(selection) = response.selected {
            self.status = Some(StatusMessage::new(
                StatusKind::Info,
                format!("Selected {}", selection.texture.name),
            ));
        }
    }
}

impl eframe::App for MaterialEditor {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);
        if self.status.as_ref().is_some_and(StatusMessage::expired) {
            self.status = None;
        }

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| self.draw_top_bar(ui));
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| self.draw_status_bar(ui));

        egui::SidePanel::left("property_grid")
            .resizable(true)
            .default_width(360.0)
            .show(ctx, |ui| self.draw_grid(ui));
        self.record_edits();

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::TopBottomPanel::top("history")
                .resizable(true)
                .default_height(220.0)
                .show_inside(ui, |ui| {
                    ui.heading("History");
                    match history_panel::show_history(ui, &self.history) {
                        Some(HistoryRequest::Undo) => self.undo(),
                        Some(HistoryRequest::Redo) => self.redo(),
                        None => {}
                    }
                });
            ui.heading("Events");
            self.event_log.show(ui);
        });

        self.update_title(ctx);

        if ctx.input(|i| i.viewport().close_requested()) {
            if self.history.has_unsaved_changes() {
                log::warn!("Closing with unsaved changes to {}", self.material.name);
            }
            if let Some(rect) = ctx.input(|i| i.viewport().inner_rect) {
                self.config.window.width = rect.width();
                self.config.window.height = rect.height();
            }
            self.persist_config();
        }
    }
}

pub fn apply_theme(cc: &eframe::CreationContext<'_>) {
    theme::apply(&cc.egui_ctx);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log_capture::LogBuffer;
    use matgrid_core::property::{PropertyKey, PropertyValue};

    fn editor() -> MaterialEditor {
        let config_path = std::env::temp_dir().join("matgrid-editor-test.toml");
        MaterialEditor::new(
            EditorConfig::default(),
            config_path,
            PbrMaterial::new("test"),
            Arc::new(Mutex::new(LogBuffer::new(16))),
        )
    }

    fn edit(editor: &mut MaterialEditor, key: PropertyKey, value: PropertyValue) {
        editor
            .grid
            .commit(
                &mut editor.material,
                key,
                value,
                Some(&editor.on_property_changed),
            )
            .unwrap();
        editor.record_edits();
    }

    #[test]
    fn grid_edits_become_undo_steps() {
        let mut editor = editor();
        edit(&mut editor, PropertyKey::Metallic, PropertyValue::Float(0.2));
        edit(&mut editor, PropertyKey::Roughness, PropertyValue::Float(0.4));
        assert_eq!(editor.history.undo_count(), 2);
        assert!(editor.history.has_unsaved_changes());

        editor.undo();
        assert_eq!(editor.material.roughness, 1.0);
        assert_eq!(editor.material.metallic, 0.2);

        editor.redo();
        assert_eq!(editor.material.roughness, 0.4);
    }

    #[test]
    fn slider_drag_is_one_step() {
        let mut editor = editor();
        for v in [0.9, 0.8, 0.7] {
            edit(&mut editor, PropertyKey::Alpha, PropertyValue::Float(v));
        }
        assert_eq!(editor.history.undo_count(), 1);
        editor.undo();
        assert_eq!(editor.material.alpha, 1.0);
    }

    #[test]
    fn shortcuts_ignored_while_locked() {
        let mut editor = editor();
        edit(&mut editor, PropertyKey::Metallic, PropertyValue::Float(0.2));
        editor.lock.set_locked(true);

        let ctx = egui::Context::default();
        let mut input = egui::RawInput::default();
        input.modifiers = Modifiers::COMMAND;
        input.events.push(egui::Event::Key {
            key: Key::Z,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: Modifiers::COMMAND,
        });
        let _ = ctx.run(input, |ctx| editor.handle_shortcuts(ctx));

        assert_eq!(editor.material.metallic, 0.2);
        assert_eq!(editor.history.undo_count(), 1);
    }
}
