// src/config/consts.rs

// Data source
pub const DATA_URL: &str = "https://drive.google.com/uc?id=1QsGJ7LO5JwWFgqu-I_e54os9v-tf2nar";
pub const SCRAPE_DATE: &str = "01-06-2025"; // dd-mm-yyyy

// Access gate: shared secret, supplied out-of-band
pub const PASSWORD_ENV: &str = "OTIS_DASH_PASSWORD";

// Slider bounds (configuration constants, not data-derived).
// Source declared time-served bounds 0–70 but defaulted the tuple to 100;
// 70 wins here for both.
pub const CURRENT_AGE_BOUNDS: (f64, f64) = (0.0, 100.0);
pub const AGE_AT_OFFENSE_BOUNDS: (f64, f64) = (0.0, 100.0);
pub const TIME_SERVED_BOUNDS: (f64, f64) = (0.0, 70.0);
pub const MIN_SENTENCE_BOUNDS: (f64, f64) = (0.0, 100.0);
pub const MAX_SENTENCE_BOUNDS: (f64, f64) = (0.0, 1000.0);
pub const YEAR_OF_OFFENSE_BOUNDS: (f64, f64) = (1950.0, 2024.0);

// Charts
pub const COUNTY_TOP_N: usize = 10;

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
