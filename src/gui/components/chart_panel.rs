// src/gui/components/chart_panel.rs
//
// Pure presentation helpers for one dashboard panel: a bar chart over an
// aggregation, its optional detail table, and the optional stats table.

use eframe::egui::{self, RichText};
use egui_plot::{Bar, BarChart, Plot};

use crate::aggregate::{self, AggRow, Stats};

pub fn bar_chart(ui: &mut egui::Ui, id: &str, rows: &[AggRow]) {
    let bars: Vec<Bar> = rows
        .iter()
        .enumerate()
        .map(|(i, r)| Bar::new(i as f64, r.count as f64).name(r.label.clone()))
        .collect();
    let labels: Vec<String> = rows.iter().map(|r| r.label.clone()).collect();

    Plot::new(id)
        .height(220.0)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .x_axis_formatter(move |mark, _range| {
            // integer marks carry the category labels; suppress the rest
            let i = mark.value.round();
            if (mark.value - i).abs() > f64::EPSILON || i < 0.0 {
                return s!();
            }
            labels.get(i as usize).cloned().unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(id.to_string(), bars));
        });
}

pub fn agg_table(ui: &mut egui::Ui, id: &str, value_header: &str, rows: &[AggRow]) {
    egui::ScrollArea::vertical()
        .id_salt((id, "scroll"))
        .max_height(220.0)
        .show(ui, |ui| {
            egui::Grid::new((id, "grid")).striped(true).show(ui, |ui| {
                ui.label(RichText::new(value_header).strong());
                ui.label(RichText::new("Count").strong());
                ui.label(RichText::new("Percentage (%)").strong());
                ui.end_row();

                for r in rows {
                    ui.label(&r.label);
                    ui.label(aggregate::fmt_count(r.count));
                    ui.label(aggregate::fmt_pct(r.pct));
                    ui.end_row();
                }
            });
        });
}

pub fn stats_table(ui: &mut egui::Ui, id: &str, stats: Option<&Stats>) {
    let Some(st) = stats else {
        ui.weak("(no data)");
        return;
    };

    let fmt = |v: f64| if v.is_nan() { s!("NaN") } else { format!("{:.2}", v) };

    egui::Grid::new((id, "stats")).striped(true).show(ui, |ui| {
        let pairs = [
            ("count", st.count.to_string()),
            ("mean", fmt(st.mean)),
            ("std", fmt(st.std)),
            ("min", fmt(st.min)),
            ("25%", fmt(st.q1)),
            ("50%", fmt(st.median)),
            ("75%", fmt(st.q3)),
            ("max", fmt(st.max)),
        ];
        for (k, v) in pairs {
            ui.label(k);
            ui.label(v);
            ui.end_row();
        }
    });
}
