// src/gui/components/data_table.rs
//
// Scrollable raw/filtered table view. Purely a view over borrowed rows.

use eframe::egui::{self, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

pub fn draw(ui: &mut egui::Ui, id: &str, headers: &[String], rows: &[&[String]]) {
    let cols = headers
        .len()
        .max(rows.first().map(|r| r.len()).unwrap_or(0));
    if cols == 0 {
        ui.weak("(no columns)");
        return;
    }

    egui::ScrollArea::horizontal()
        .id_salt((id, "hscroll"))
        .show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .striped(true)
                .id_salt((id, "table"))
                .min_scrolled_height(0.0)
                .max_scroll_height(320.0);
            for _ in 0..cols {
                table = table.column(Column::auto().resizable(true).clip(true).at_least(40.0));
            }

            table
                .header(24.0, |mut header| {
                    for ci in 0..cols {
                        header.col(|ui| {
                            ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                            let text = headers
                                .get(ci)
                                .cloned()
                                .unwrap_or_else(|| format!("Col {}", ci + 1));
                            ui.label(RichText::new(text).strong());
                        });
                    }
                })
                .body(|body| {
                    body.rows(20.0, rows.len(), |mut row| {
                        let r = rows[row.index()];
                        for ci in 0..cols {
                            row.col(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                if let Some(cell) = r.get(ci) {
                                    ui.label(cell);
                                }
                            });
                        }
                    });
                });
        });
}
