// src/bin/gui.rs
use eframe::egui::ViewportBuilder;
use otis_dash::config::state::GuiState;
use otis_dash::gui;

fn main() {
    let gui = GuiState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([gui.window_w as f32, gui.window_h as f32]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
