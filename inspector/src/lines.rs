//! egui widgets for single grid lines.
//!
//! Each function draws one line from the current value and returns the new
//! value when the user changed it. Nothing here touches the material.

use matgrid_core::debug_mode::{self, DebugModeOption};
use matgrid_core::material::TextureRef;
use matgrid_core::math::{Color3, Vector2};
use matgrid_core::property::PropertyValue;

use crate::layout::{Control, SliderRange};

/// User interaction on a texture link line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TextureLinkAction {
    Select,
    ToggleDebug,
}

/// Draws a bound field. Sets `text_focus` when a text field has keyboard
/// focus this frame.
pub(crate) fn field(
    ui: &mut egui::Ui,
    label: &str,
    control: Control,
    current: &PropertyValue,
    text_focus: &mut bool,
) -> Option<PropertyValue> {
    match (control, current) {
        (Control::Slider(range), PropertyValue::Float(v)) => {
            slider(ui, label, range, *v).map(PropertyValue::Float)
        }
        (Control::CheckBox, PropertyValue::Bool(v)) => {
            check_box(ui, label, *v).map(PropertyValue::Bool)
        }
        (Control::Color3, PropertyValue::Color3(v)) => {
            color3(ui, label, *v).map(PropertyValue::Color3)
        }
        (Control::Vector2, PropertyValue::Vector2(v)) => {
            vector2(ui, label, *v).map(PropertyValue::Vector2)
        }
        (Control::Text, PropertyValue::Text(v)) => {
            text(ui, label, v, text_focus).map(PropertyValue::Text)
        }
        (Control::Options(options), PropertyValue::Int(v)) => {
            options_line(ui, label, options, *v).map(PropertyValue::Int)
        }
        (control, value) => {
            log::error!("{label}: {control:?} cannot edit a {} value", value.kind());
            None
        }
    }
}

fn slider(ui: &mut egui::Ui, label: &str, range: SliderRange, value: f32) -> Option<f32> {
    let mut v = value;
    let changed = ui
        .horizontal(|ui| {
            ui.label(label);
            ui.add(egui::Slider::new(&mut v, range.min..=range.max).step_by(range.step as f64))
                .changed()
        })
        .inner;
    changed.then_some(v)
}

fn check_box(ui: &mut egui::Ui, label: &str, value: bool) -> Option<bool> {
    let mut v = value;
    ui.checkbox(&mut v, label).changed().then_some(v)
}

fn color3(ui: &mut egui::Ui, label: &str, value: Color3) -> Option<Color3> {
    let mut rgb = value.to_array();
    let changed = ui
        .horizontal(|ui| {
            ui.label(label);
            let changed = ui.color_edit_button_rgb(&mut rgb).changed();
            ui.weak(Color3::from_array(rgb).to_hex_string());
            changed
        })
        .inner;
    changed.then(|| Color3::from_array(rgb))
}

fn vector2(ui: &mut egui::Ui, label: &str, value: Vector2) -> Option<Vector2> {
    let mut v = value;
    let changed = ui
        .horizontal(|ui| {
            ui.label(label);
            let x = ui
                .add(egui::DragValue::new(&mut v.x).speed(0.01).prefix("x: "))
                .changed();
            let y = ui
                .add(egui::DragValue::new(&mut v.y).speed(0.01).prefix("y: "))
                .changed();
            x || y
        })
        .inner;
    changed.then_some(v)
}

fn text(ui: &mut egui::Ui, label: &str, value: &str, text_focus: &mut bool) -> Option<String> {
    let mut v = value.to_owned();
    let response = ui
        .horizontal(|ui| {
            ui.label(label);
            ui.text_edit_singleline(&mut v)
        })
        .inner;
    if response.has_focus() {
        *text_focus = true;
    }
    response.changed().then_some(v)
}

fn options_line(
    ui: &mut egui::Ui,
    label: &str,
    options: &[DebugModeOption],
    value: i32,
) -> Option<i32> {
    let mut v = value;
    let selected = debug_mode::label_for(value).unwrap_or("Unknown");
    ui.horizontal(|ui| {
        ui.label(label);
        egui::ComboBox::from_id_salt(label)
            .selected_text(selected)
            .show_ui(ui, |ui| {
                for option in options {
                    ui.selectable_value(&mut v, option.value, option.label);
                }
            });
    });
    (v != value).then_some(v)
}

/// Draws a texture link: label, clickable texture name and debug toggle.
pub(crate) fn texture_link(
    ui: &mut egui::Ui,
    label: &str,
    texture: &TextureRef,
    debugging: bool,
) -> Option<TextureLinkAction> {
    ui.horizontal(|ui| {
        ui.label(label);
        let select = ui
            .link(texture.name.as_str())
            .on_hover_text("Select texture")
            .clicked();
        let toggle = ui
            .selectable_label(debugging, "debug")
            .on_hover_text("Show this texture only")
            .clicked();
        if select {
            Some(TextureLinkAction::Select)
        } else if toggle {
            Some(TextureLinkAction::ToggleDebug)
        } else {
            None
        }
    })
    .inner
}
