//! HyperNEAT Substrate Designer.
//!
//! Rust-basierter Editor zum Entwerfen von HyperNEAT-Substraten auf einem
//! ganzzahligen Raster mit JSON-Export.

use eframe::egui;
use hn_substrate_designer::{ui, AppController, AppIntent, AppState, EditorOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "HyperNEAT Substrate Designer v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 960.0])
                .with_title("HyperNEAT Substrate Designer"),
            ..Default::default()
        };

        eframe::run_native(
            "HyperNEAT Substrate Designer",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    /// Ob am Ende des letzten Frames ein Textfeld den Tastaturfokus hatte
    text_focus_last_frame: bool,
}

impl EditorApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let mut state = AppState::new();
        state.ui.show_instructions = editor_options.show_instructions_on_start;
        state.options = editor_options;

        Self {
            state,
            controller: AppController::new(),
            text_focus_last_frame: false,
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);
        self.text_focus_last_frame = ctx.wants_keyboard_input();
        let has_events = !events.is_empty();

        self.process_events(events);

        if has_events {
            ctx.request_repaint();
        }
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = ui::collect_keyboard_intents(
            ctx,
            self.state.ui.validation_message.is_some(),
            self.text_focus_last_frame,
        );

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::render_toolbar(ctx, &self.state));
        events.extend(ui::render_substrate_panel(ctx, &self.state));

        let default_name = self.state.options.export_file_name.clone();
        events.extend(ui::handle_export_dialog(&mut self.state.ui, &default_name));
        events.extend(ui::show_instructions_popup(ctx, &self.state.ui));
        events.extend(ui::show_validation_dialog(ctx, &self.state.ui));
        events.extend(ui::show_options_dialog(ctx, &self.state));

        egui::CentralPanel::default().show(ctx, |ui| {
            let scene = self.controller.build_grid_scene(&self.state);
            egui::ScrollArea::both().show(ui, |ui| {
                events.extend(ui::render_grid(ui, &scene, &self.state.options));
            });
        });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }
}
