//! Editor palette: neutral graphite with a brass accent.

use egui::Color32;

pub const ACCENT: Color32 = Color32::from_rgb(201, 162, 88);
pub const ACCENT_DIM: Color32 = Color32::from_rgb(150, 118, 60);

pub const BG: Color32 = Color32::from_rgb(17, 18, 20);
pub const PANEL: Color32 = Color32::from_rgb(24, 26, 29);
pub const WIDGET: Color32 = Color32::from_rgb(34, 37, 41);
pub const WIDGET_HOVER: Color32 = Color32::from_rgb(44, 48, 54);
pub const BORDER: Color32 = Color32::from_rgb(56, 61, 68);

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(228, 230, 234);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(168, 173, 181);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(116, 122, 131);

pub const SUCCESS: Color32 = Color32::from_rgb(96, 170, 120);
pub const WARNING: Color32 = Color32::from_rgb(224, 180, 90);
pub const ERROR: Color32 = Color32::from_rgb(214, 92, 92);
pub const INFO: Color32 = Color32::from_rgb(104, 156, 220);

pub fn apply(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    let v = &mut style.visuals;
    *v = egui::Visuals::dark();

    v.window_fill = PANEL;
    v.panel_fill = PANEL;
    v.extreme_bg_color = BG;
    v.faint_bg_color = WIDGET;
    v.window_stroke = egui::Stroke::new(1.0, BORDER);

    v.widgets.noninteractive.bg_fill = PANEL;
    v.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, BORDER);
    v.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, TEXT_SECONDARY);

    v.widgets.inactive.bg_fill = WIDGET;
    v.widgets.inactive.weak_bg_fill = WIDGET;
    v.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, TEXT_PRIMARY);

    v.widgets.hovered.bg_fill = WIDGET_HOVER;
    v.widgets.hovered.weak_bg_fill = WIDGET_HOVER;
    v.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, ACCENT);

    v.widgets.active.bg_fill = ACCENT_DIM;
    v.widgets.active.weak_bg_fill = ACCENT_DIM;
    v.widgets.active.bg_stroke = egui::Stroke::new(1.0, ACCENT);

    v.selection.bg_fill = ACCENT_DIM;
    v.selection.stroke = egui::Stroke::new(1.0, ACCENT);
    v.hyperlink_color = ACCENT;

    v.override_text_color = Some(TEXT_PRIMARY);
    v.warn_fg_color = WARNING;
    v.error_fg_color = ERROR;

    ctx.set_style(style);
}
