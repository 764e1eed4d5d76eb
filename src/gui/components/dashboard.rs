// src/gui/components/dashboard.rs
//
// Main panel: raw/filtered table toggles, the total metric, and the paired
// chart/table panels. Filtering + aggregation re-run synchronously on every
// frame egui repaints (i.e. per interaction); the dataset Arc keeps that
// allocation-light.

use eframe::egui::{self, RichText};

use crate::{
    aggregate::{self, AggRow, MIN_SENTENCE_BINS},
    config::consts::{COUNTY_TOP_N, SCRAPE_DATE},
    file,
    record::{Facet, RangeField},
    gui::app::App,
};

use super::{chart_panel, data_table};

const BLURB: &str = "This dashboard is a tool to explore the data scraped from \
the Michigan Department of Corrections Offender Tracking Information System \
(OTIS). Use the sidebar to filter the data, then explore the visualizations \
below. All tables can be downloaded.";

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(ds) = app.dataset.clone() else { return };
    let view = {
        let Some(catalog) = app.catalog.as_ref() else { return };
        app.state.filters.apply(catalog, &ds)
    };

    let total = view.len();
    let race = aggregate::facet_counts(&view, Facet::Race);
    let gender = aggregate::facet_counts(&view, Facet::Gender);
    let age = aggregate::numeric_counts(&view, RangeField::CurrentAge);
    let served = aggregate::numeric_counts(&view, RangeField::TimeServed);
    let min_sentence = aggregate::binned_counts(&view, RangeField::MinSentence, &MIN_SENTENCE_BINS);
    let county = aggregate::facet_counts(&view, Facet::County);
    let crime_type = aggregate::facet_counts(&view, Facet::CrimeType);

    // Only the toggled stats panels read these; skip the work otherwise.
    let age_stats = app.state.gui.show_age_stats
        .then(|| aggregate::describe(&view, RangeField::CurrentAge))
        .flatten();
    let served_stats = app.state.gui.show_time_served_stats
        .then(|| aggregate::describe(&view, RangeField::TimeServed))
        .flatten();

    egui::ScrollArea::vertical()
        .id_salt("dashboard_scroll")
        .show(ui, |ui| {
            ui.heading("OTIS Dashboard");
            ui.label(BLURB);
            ui.label(format!("Scrape Date (dd/mm/yyyy): {}", SCRAPE_DATE));
            ui.weak(&app.status);
            ui.separator();

            // Raw scrape
            ui.checkbox(&mut app.state.gui.show_raw, "Show/Download Raw Web Scrape");
            if app.state.gui.show_raw {
                ui.label(RichText::new("Raw data").strong());
                let rows: Vec<&[String]> = ds.rows.iter().map(|r| r.as_slice()).collect();
                data_table::draw(ui, "raw_data", &ds.headers, &rows);
                if ui.button("Download raw data").clicked() {
                    export_rows(app, "raw_data", &ds.headers, &ds.rows);
                }
            }

            // Filtered subset
            ui.checkbox(&mut app.state.gui.show_filtered, "Show/Download Filtered Data");
            if app.state.gui.show_filtered {
                ui.label(RichText::new("Filtered Data").strong());
                let rows: Vec<&[String]> = (0..view.len())
                    .filter_map(|i| view.raw_row(i))
                    .collect();
                data_table::draw(ui, "filtered_data", &ds.headers, &rows);
                if ui.button("Download filtered data").clicked() {
                    let owned = view.to_owned_rows();
                    export_rows(app, "filtered_data", &ds.headers, &owned);
                }
            }

            ui.separator();

            ui.label(
                RichText::new(format!(
                    "Total (Filtered) Individuals: {}",
                    aggregate::fmt_count(total)
                ))
                .strong()
                .size(20.0),
            );

            ui.separator();

            ui.columns(2, |cols| {
                race_panel(&mut cols[0], app, &race);
                gender_panel(&mut cols[1], app, &gender);
            });

            ui.columns(2, |cols| {
                age_panel(&mut cols[0], app, &age, &age_stats);
                served_panel(&mut cols[1], app, &served, &served_stats);
            });

            ui.columns(2, |cols| {
                min_sentence_panel(&mut cols[0], app, &min_sentence);
                county_panel(&mut cols[1], app, &county);
            });

            ui.columns(2, |cols| {
                crime_type_panel(&mut cols[0], app, &crime_type);
            });
        });
}

/* ---------------- Panels ---------------- */

fn race_panel(ui: &mut egui::Ui, app: &mut App, rows: &[AggRow]) {
    ui.label(RichText::new("Race/Ethnicity").heading());
    ui.checkbox(&mut app.state.gui.show_race_table, "Show Race/Ethnicity Table");
    if app.state.gui.show_race_table {
        chart_panel::agg_table(ui, "race_table", "Race", rows);
        if ui.button("Download race table").clicked() {
            export_agg(app, "race", "Race", rows);
        }
    }
    chart_panel::bar_chart(ui, "race_chart", rows);
}

fn gender_panel(ui: &mut egui::Ui, app: &mut App, rows: &[AggRow]) {
    ui.label(RichText::new("Gender").heading());
    ui.checkbox(&mut app.state.gui.show_gender_table, "Show Gender Table");
    if app.state.gui.show_gender_table {
        chart_panel::agg_table(ui, "gender_table", "Gender", rows);
        if ui.button("Download gender table").clicked() {
            export_agg(app, "gender", "Gender", rows);
        }
    }
    chart_panel::bar_chart(ui, "gender_chart", rows);
}

fn age_panel(ui: &mut egui::Ui, app: &mut App, rows: &[AggRow], stats: &Option<aggregate::Stats>) {
    ui.label(RichText::new("Age").heading());
    ui.checkbox(&mut app.state.gui.show_age_table, "Show Age Table");
    if app.state.gui.show_age_table {
        chart_panel::agg_table(ui, "age_table", "Age", rows);
        if ui.button("Download age table").clicked() {
            export_agg(app, "age", "Age", rows);
        }
    }
    ui.checkbox(&mut app.state.gui.show_age_stats, "Show Age Stats");
    if app.state.gui.show_age_stats {
        chart_panel::stats_table(ui, "age", stats.as_ref());
    }
    chart_panel::bar_chart(ui, "age_chart", rows);
}

fn served_panel(ui: &mut egui::Ui, app: &mut App, rows: &[AggRow], stats: &Option<aggregate::Stats>) {
    ui.label(RichText::new("Time Served").heading());
    ui.checkbox(&mut app.state.gui.show_time_served_table, "Show Time Served Table");
    if app.state.gui.show_time_served_table {
        chart_panel::agg_table(ui, "served_table", "Time Served", rows);
        if ui.button("Download time served table").clicked() {
            export_agg(app, "time_served", "Time Served", rows);
        }
    }
    ui.checkbox(&mut app.state.gui.show_time_served_stats, "Show Time Served Stats");
    if app.state.gui.show_time_served_stats {
        chart_panel::stats_table(ui, "served", stats.as_ref());
    }
    chart_panel::bar_chart(ui, "served_chart", rows);
}

fn min_sentence_panel(ui: &mut egui::Ui, app: &mut App, rows: &[AggRow]) {
    ui.label(RichText::new("Min Sentence").heading());
    ui.checkbox(&mut app.state.gui.show_min_sentence_table, "Show Min Sentence Table");
    if app.state.gui.show_min_sentence_table {
        chart_panel::agg_table(ui, "min_sentence_table", "Min Sentence", rows);
        if ui.button("Download min sentence table").clicked() {
            export_agg(app, "min_sentence", "Min Sentence", rows);
        }
    }
    chart_panel::bar_chart(ui, "min_sentence_chart", rows);
    ui.weak("*Note: Bins are lower bounded (i.e. 0-5 includes 0 but not 5).");
}

fn county_panel(ui: &mut egui::Ui, app: &mut App, rows: &[AggRow]) {
    ui.label(RichText::new("County").heading());
    ui.checkbox(&mut app.state.gui.show_county_table, "Show County Table");
    if app.state.gui.show_county_table {
        // table keeps the full ranked list
        chart_panel::agg_table(ui, "county_table", "County", rows);
        if ui.button("Download county table").clicked() {
            export_agg(app, "county", "County", rows);
        }
    }
    chart_panel::bar_chart(ui, "county_chart", aggregate::top_n(rows, COUNTY_TOP_N));
    ui.weak("*Note: Only the top ten counties are displayed. Table has full list.");
}

fn crime_type_panel(ui: &mut egui::Ui, app: &mut App, rows: &[AggRow]) {
    ui.label(RichText::new("Crime Type").heading());
    ui.checkbox(&mut app.state.gui.show_crime_type_table, "Show Crime Type Table");
    if app.state.gui.show_crime_type_table {
        chart_panel::agg_table(ui, "crime_type_table", "Crime Type", rows);
        if ui.button("Download crime type table").clicked() {
            export_agg(app, "crime_type", "Crime Type", rows);
        }
    }
    chart_panel::bar_chart(ui, "crime_type_chart", rows);
}

/* ---------------- Export actions ---------------- */

fn export_rows(app: &mut App, stem: &str, headers: &[String], rows: &[Vec<String>]) {
    let headers = Some(headers.to_vec());
    match file::export_table(&app.state.export, stem, &headers, rows) {
        Ok(p) => {
            logf!("Export: {} → {}", stem, p.display());
            app.set_status(format!("Exported {}", p.display()));
        }
        Err(e) => {
            loge!("Export: {} failed: {}", stem, e);
            app.set_status(format!("Export failed: {}", e));
        }
    }
}

fn export_agg(app: &mut App, stem: &str, value_header: &str, rows: &[AggRow]) {
    let headers = vec![s!(value_header), s!("Count"), s!("Percentage (%)")];
    let data: Vec<Vec<String>> = rows
        .iter()
        .map(|r| vec![r.label.clone(), r.count.to_string(), aggregate::fmt_pct(r.pct)])
        .collect();
    export_rows(app, stem, &headers, &data);
}
