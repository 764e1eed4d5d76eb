// src/gui/app.rs
use std::error::Error;
use std::sync::Arc;

use eframe::egui;

use crate::{
    catalog::Catalog,
    config::{consts::DATA_URL, state::AppState},
    gate::Gate,
    store::{self, Dataset},
};

use super::components;

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "OTIS Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // password gate; nothing below loads or draws until it opens
    pub gate: Gate,
    pub password_input: String,

    // loaded once per process via the store cache
    pub dataset: Option<Arc<Dataset>>,
    pub catalog: Option<Catalog>,

    // fatal for the session; shown instead of the dashboard
    pub load_error: Option<String>,

    pub status: String,
}

impl App {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            gate: Gate::from_env(),
            password_input: s!(),
            dataset: None,
            catalog: None,
            load_error: None,
            status: s!("Idle"),
        }
    }

    #[inline]
    pub fn set_status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    /// Fetch + decode on the first authorized frame. The store memoizes the
    /// fetch process-wide; a failure sticks for the session (no retry).
    pub fn ensure_loaded(&mut self) {
        if self.dataset.is_some() || self.load_error.is_some() {
            return;
        }
        self.set_status("Loading data...");
        match store::load_dataset(DATA_URL) {
            Ok(ds) => {
                logf!("Init: dataset rows={} cols={}", ds.len(), ds.headers.len());
                self.catalog = Some(Catalog::build(&ds));
                self.dataset = Some(ds);
                self.set_status("Ready");
            }
            Err(e) => {
                loge!("Load: {}", e);
                self.load_error = Some(e.to_string());
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.gate.is_authorized() {
            components::password::draw(ctx, self);
            return;
        }

        self.ensure_loaded();

        if let Some(err) = self.load_error.clone() {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.heading("OTIS Dashboard");
                ui.colored_label(
                    egui::Color32::RED,
                    format!("Failed to load dataset: {}", err),
                );
            });
            return;
        }

        egui::SidePanel::left("filters")
            .resizable(false)
            .default_width(270.0)
            .show(ctx, |ui| {
                components::sidebar::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::dashboard::draw(ui, self);
        });
    }
}
