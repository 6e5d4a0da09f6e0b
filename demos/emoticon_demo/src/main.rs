//! Minimal host app for the emoticon widget: two buttons set the
//! expression explicitly, clicking the face toggles it, and the current
//! expression survives an app restart.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use eframe::egui;
use egui_emoticon::{Emoticon, Expression};

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([320.0, 400.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Emoticon",
        options,
        Box::new(|cc| Ok(Box::new(EmoticonApp::new(cc)))),
    )
}

struct EmoticonApp {
    expression: Expression,
}

impl EmoticonApp {
    fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let expression = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        Self { expression }
    }
}

impl eframe::App for EmoticonApp {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.expression);
    }

    fn ui(&mut self, ui: &mut egui::Ui, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show_inside(ui, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Happy").clicked() {
                    self.expression = Expression::Happy;
                }
                if ui.button("Sad").clicked() {
                    self.expression = Expression::Sad;
                }
            });
            ui.add(Emoticon::new(&mut self.expression));
        });
    }
}
