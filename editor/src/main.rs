mod config;
mod document;
mod editor;
mod event_log;
mod history_panel;
mod log_capture;
mod theme;

use std::path::PathBuf;

use crate::config::{DEFAULT_CONFIG_PATH, EditorConfig};

/// `matgrid [MATERIAL.ron] [--config PATH]`
struct Args {
    material: Option<PathBuf>,
    config: PathBuf,
}

fn parse_args() -> Args {
    let mut args = Args {
        material: None,
        config: PathBuf::from(DEFAULT_CONFIG_PATH),
    };
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                if let Some(path) = iter.next() {
                    args.config = PathBuf::from(path);
                }
            }
            _ => args.material = Some(PathBuf::from(arg)),
        }
    }
    args
}

fn main() -> eframe::Result<()> {
    let log_buffer = match log_capture::install() {
        Ok(buffer) => buffer,
        Err(e) => {
            eprintln!("Failed to install logger: {e}");
            std::process::exit(1);
        }
    };

    let args = parse_args();
    let mut config = EditorConfig::load_or_default(&args.config);
    if let Some(material) = args.material {
        config.material = material;
    }

    let material = match document::load_or_new(&config.material) {
        Ok(material) => material,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };
    log::info!("Editing \"{}\"", material.name);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!("{} - matgrid", material.name))
            .with_inner_size(egui::vec2(config.window.width, config.window.height))
            .with_min_inner_size(egui::vec2(720.0, 480.0)),
        ..Default::default()
    };

    let app = editor::MaterialEditor::new(config, args.config, material, log_buffer);
    eframe::run_native(
        "matgrid",
        options,
        Box::new(move |cc| {
            editor::apply_theme(cc);
            Ok(Box::new(app))
        }),
    )
}
