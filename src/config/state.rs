// src/config/state.rs
use super::options::ExportOptions;
use crate::filter::FilterSelection;

/// Show/hide toggles for the main panel. All session-transient.
#[derive(Clone, Debug)]
pub struct GuiState {
    pub show_raw: bool,
    pub show_filtered: bool,

    pub show_race_table: bool,
    pub show_gender_table: bool,
    pub show_age_table: bool,
    pub show_age_stats: bool,
    pub show_time_served_table: bool,
    pub show_time_served_stats: bool,
    pub show_min_sentence_table: bool,
    pub show_county_table: bool,
    pub show_crime_type_table: bool,

    pub window_w: u32,
    pub window_h: u32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            show_raw: false,
            show_filtered: false,
            show_race_table: false,
            show_gender_table: false,
            show_age_table: false,
            show_age_stats: false,
            show_time_served_table: false,
            show_time_served_stats: false,
            show_min_sentence_table: false,
            show_county_table: false,
            show_crime_type_table: false,
            window_w: 1280,
            window_h: 800,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub filters: FilterSelection,
    pub export: ExportOptions,
    pub gui: GuiState,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            filters: FilterSelection::defaults(),
            export: ExportOptions::default(),
            gui: GuiState::default(),
        }
    }
}
