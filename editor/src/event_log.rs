use std::time::Instant;

use crate::log_capture::{LogEntry, SharedLogBuffer};
use crate::theme;

const LEVELS: [log::Level; 5] = [
    log::Level::Error,
    log::Level::Warn,
    log::Level::Info,
    log::Level::Debug,
    log::Level::Trace,
];

/// Scrolling view of captured log records. Property edits are logged by the
/// grid, so with "Edits only" this is the property-changed event stream.
pub struct EventLogPanel {
    buffer: SharedLogBuffer,
    start_time: Instant,
    max_level: log::Level,
    edits_only: bool,
    filter: String,
}

impl EventLogPanel {
    pub fn new(buffer: SharedLogBuffer) -> Self {
        Self {
            buffer,
            start_time: Instant::now(),
            max_level: log::Level::Debug,
            edits_only: false,
            filter: String::new(),
        }
    }

    fn accepts(&self, entry: &LogEntry, filter: &str) -> bool {
        entry.level <= self.max_level
            && (!self.edits_only || entry.target.starts_with("matgrid_inspector"))
            && (filter.is_empty() || entry.message.to_lowercase().contains(filter))
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for level in LEVELS {
                let text = egui::RichText::new(level_label(level)).color(level_color(level));
                if ui.selectable_label(self.max_level >= level, text).clicked() {
                    self.max_level = level;
                }
            }
            ui.separator();
            ui.checkbox(&mut self.edits_only, "Edits only");
            ui.separator();
            ui.label("Filter:");
            ui.text_edit_singleline(&mut self.filter);
            if ui.button("Clear").clicked() {
                self.buffer.lock().clear();
            }
        });
        ui.separator();

        // The logger locks the same buffer; never hold it while drawing.
        let filter = self.filter.to_lowercase();
        let rows: Vec<(log::Level, String, Instant)> = self
            .buffer
            .lock()
            .entries()
            .iter()
            .filter(|entry| self.accepts(entry, &filter))
            .map(|entry| (entry.level, entry.message.clone(), entry.timestamp))
            .collect();

        let row_height = ui.text_style_height(&egui::TextStyle::Monospace) + 2.0;
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .stick_to_bottom(true)
            .show_rows(ui, row_height, rows.len(), |ui, range| {
                for (level, message, timestamp) in &rows[range] {
                    ui.horizontal(|ui| {
                        ui.spacing_mut().item_spacing.x = 4.0;
                        let elapsed = timestamp.duration_since(self.start_time);
                        ui.label(
                            egui::RichText::new(format!("{:>7.3}", elapsed.as_secs_f32()))
                                .monospace()
                                .color(theme::TEXT_MUTED),
                        );
                        ui.label(
                            egui::RichText::new(level_label(*level))
                                .monospace()
                                .color(level_color(*level)),
                        );
                        ui.label(egui::RichText::new(message).monospace());
                    });
                }
            });
    }
}

fn level_label(level: log::Level) -> &'static str {
    match level {
        log::Level::Error => "ERR",
        log::Level::Warn => "WRN",
        log::Level::Info => "INF",
        log::Level::Debug => "DBG",
        log::Level::Trace => "TRC",
    }
}

fn level_color(level: log::Level) -> egui::Color32 {
    match level {
        log::Level::Error => theme::ERROR,
        log::Level::Warn => theme::WARNING,
        log::Level::Info => theme::SUCCESS,
        log::Level::Debug => theme::INFO,
        log::Level::Trace => theme::TEXT_MUTED,
    }
}
