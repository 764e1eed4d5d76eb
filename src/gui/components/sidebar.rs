// src/gui/components/sidebar.rs
//
// Renders the facet multi-selects and range sliders, writing changes
// straight into app.state.filters. The dashboard re-applies the filter
// selection on the next frame; nothing is cached here.

use std::collections::BTreeSet;

use eframe::egui;

use crate::catalog::{ALL_OPTION, Catalog};
use crate::filter::{FilterSelection, Selection};
use crate::record::{Facet, RangeField};
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(catalog) = app.catalog.as_ref() else { return };
    let filters = &mut app.state.filters;

    ui.heading("Select options from below:");
    ui.separator();

    egui::ScrollArea::vertical()
        .id_salt("sidebar_scroll")
        .show(ui, |ui| {
            for facet in Facet::ALL {
                facet_multiselect(ui, filters, catalog, facet);
            }

            ui.separator();

            for field in RangeField::ALL {
                range_slider(ui, filters, field);
            }
        });
}

fn facet_multiselect(
    ui: &mut egui::Ui,
    filters: &mut FilterSelection,
    catalog: &Catalog,
    facet: Facet,
) {
    let distinct = catalog.distinct(facet);

    ui.collapsing(facet.label(), |ui| {
        // "All" toggle where the facet offers it: on → Universal,
        // off → empty explicit set (matches nothing; valid).
        if facet.has_all_option() {
            let mut all = filters.selection(facet).is_universal();
            if ui.checkbox(&mut all, ALL_OPTION).changed() {
                let sel = if all {
                    Selection::Universal
                } else {
                    Selection::Explicit(BTreeSet::new())
                };
                filters.set_selection(facet, sel);
                logf!("UI: {} set to {}", facet.label(), if all { "All" } else { "None" });
            }
        }

        let mut next: Option<Selection> = None;

        egui::ScrollArea::vertical()
            .id_salt((facet.label(), "options"))
            .max_height(170.0)
            .show(ui, |ui| {
                let resolved = filters.selection(facet).resolve(distinct);
                for value in distinct {
                    let mut on = resolved.contains(value);
                    if ui.checkbox(&mut on, value.as_str()).changed() {
                        let mut set = resolved.clone();
                        if on { set.insert(value.clone()); } else { set.remove(value); }
                        next = Some(Selection::Explicit(set));
                    }
                }
            });

        if let Some(sel) = next {
            // A full explicit set collapses back to Universal, so "All"
            // and the hand-picked full set stay interchangeable.
            let sel = match &sel {
                Selection::Explicit(set) if set.len() == distinct.len() => Selection::Universal,
                _ => sel,
            };
            filters.set_selection(facet, sel);
            logd!("UI: {} selection changed", facet.label());
        }
    });
}

fn range_slider(ui: &mut egui::Ui, filters: &mut FilterSelection, field: RangeField) {
    let (b_lo, b_hi) = field.bounds();
    let (mut lo, mut hi) = filters.range(field);

    ui.label(field.label());
    let mut changed = false;
    changed |= ui
        .add(egui::Slider::new(&mut lo, b_lo..=b_hi).integer().text("min"))
        .changed();
    changed |= ui
        .add(egui::Slider::new(&mut hi, b_lo..=b_hi).integer().text("max"))
        .changed();

    if changed {
        // keep the interval well-formed
        if lo > hi { hi = lo; }
        filters.set_range(field, lo, hi);
    }
    ui.add_space(4.0);
}
