use matgrid_core::abstract_editor::EditActionHistory;
use matgrid_core::material::PbrMaterial;

use crate::theme;

/// What the user asked for in the history panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryRequest {
    Undo,
    Redo,
}

/// Undo/redo stacks of the open material, newest entry next to the marker.
pub fn show_history(
    ui: &mut egui::Ui,
    history: &EditActionHistory<PbrMaterial>,
) -> Option<HistoryRequest> {
    let mut request = None;

    ui.horizontal(|ui| {
        if ui
            .add_enabled(history.can_undo(), egui::Button::new("Undo"))
            .clicked()
        {
            request = Some(HistoryRequest::Undo);
        }
        if ui
            .add_enabled(history.can_redo(), egui::Button::new("Redo"))
            .clicked()
        {
            request = Some(HistoryRequest::Redo);
        }
        ui.separator();
        ui.label(
            egui::RichText::new(format!(
                "{} / {}",
                history.undo_count(),
                history.redo_count()
            ))
            .monospace()
            .color(theme::TEXT_MUTED),
        );
        if history.has_unsaved_changes() {
            ui.label(egui::RichText::new("unsaved").color(theme::WARNING));
        }
    });
    ui.separator();

    egui::ScrollArea::vertical()
        .id_salt("history")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let redo: Vec<_> = history.redo_descriptions().collect();
            for desc in redo.iter().rev() {
                entry(ui, "REDO", theme::INFO, desc, theme::TEXT_SECONDARY);
            }
            ui.label(
                egui::RichText::new("▸ current")
                    .monospace()
                    .color(theme::WARNING),
            );
            for desc in history.undo_descriptions() {
                entry(ui, "UNDO", theme::SUCCESS, desc, theme::TEXT_PRIMARY);
            }
        });

    request
}

fn entry(ui: &mut egui::Ui, tag: &str, tag_color: egui::Color32, desc: &str, color: egui::Color32) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 4.0;
        ui.label(egui::RichText::new(tag).monospace().color(tag_color));
        ui.label(egui::RichText::new(desc).monospace().color(color));
    });
}
