// src/filter.rs
//
// Declarative filter state and the engine that turns it into a FilteredView.
//
// - Selection: per-facet choice, Universal ("All") or an explicit value set.
// - FilterSelection: one Selection per facet + one closed interval per
//   numeric field. Applying it folds every field predicate into a single
//   conjunction per record; predicate order is irrelevant.
// - FilteredView: kept row indices borrowed against the dataset, the same
//   zero-copy shape the table renderer consumes directly.

use std::collections::BTreeSet;

use crate::catalog::Catalog;
use crate::record::{Facet, RangeField, Record};
use crate::store::Dataset;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    /// Every observed value; resolved against the catalog at apply time.
    Universal,
    /// A concrete value set. Empty is valid and matches nothing.
    Explicit(BTreeSet<String>),
}

impl Selection {
    pub fn of<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Selection::Explicit(values.into_iter().map(Into::into).collect())
    }

    pub fn is_universal(&self) -> bool {
        matches!(self, Selection::Universal)
    }

    /// The concrete value set this selection stands for.
    pub fn resolve<'a>(&'a self, distinct: &'a BTreeSet<String>) -> &'a BTreeSet<String> {
        match self {
            Selection::Universal => distinct,
            Selection::Explicit(set) => set,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FilterSelection {
    facets: Vec<Selection>,   // indexed by Facet::ix()
    ranges: Vec<(f64, f64)>,  // indexed by RangeField::ix()
}

impl FilterSelection {
    /// Everything selected, full slider ranges.
    pub fn universal() -> Self {
        Self {
            facets: vec![Selection::Universal; Facet::COUNT],
            ranges: RangeField::ALL.iter().map(|f| f.bounds()).collect(),
        }
    }

    /// Startup defaults mirroring the dashboard's sidebar: prisoners only,
    /// every SSL category, both listed genders, everything else open.
    pub fn defaults() -> Self {
        let mut sel = Self::universal();
        sel.set_selection(Facet::Status, Selection::of(["Prisoner"]));
        sel.set_selection(Facet::SslCategory, Selection::of([
            "Currently Eligible",
            "Eligible in Next Ten Years",
            "Not Eligible",
        ]));
        sel.set_selection(Facet::Gender, Selection::of(["Male", "Female"]));
        sel
    }

    pub fn selection(&self, f: Facet) -> &Selection {
        &self.facets[f.ix()]
    }

    pub fn selection_mut(&mut self, f: Facet) -> &mut Selection {
        &mut self.facets[f.ix()]
    }

    pub fn set_selection(&mut self, f: Facet, sel: Selection) {
        self.facets[f.ix()] = sel;
    }

    pub fn range(&self, f: RangeField) -> (f64, f64) {
        self.ranges[f.ix()]
    }

    pub fn range_mut(&mut self, f: RangeField) -> &mut (f64, f64) {
        &mut self.ranges[f.ix()]
    }

    pub fn set_range(&mut self, f: RangeField, lo: f64, hi: f64) {
        self.ranges[f.ix()] = (lo, hi);
    }

    /// Evaluate the conjunction of all field predicates over the dataset.
    pub fn apply<'a>(&self, catalog: &Catalog, ds: &'a Dataset) -> FilteredView<'a> {
        // Resolve each facet selection once, not per record.
        let resolved: Vec<&BTreeSet<String>> = Facet::ALL
            .iter()
            .map(|f| self.selection(*f).resolve(catalog.distinct(*f)))
            .collect();

        let row_ix = ds.records
            .iter()
            .enumerate()
            .filter(|(_, r)| self.keep(&resolved, r))
            .map(|(i, _)| i)
            .collect();

        FilteredView { row_ix, raw: ds }
    }

    fn keep(&self, resolved: &[&BTreeSet<String>], r: &Record) -> bool {
        let facets_ok = Facet::ALL
            .iter()
            .zip(resolved)
            .all(|(f, set)| set.contains(f.get(r)));

        // NaN fails both bounds, so unparseable cells drop out here.
        let ranges_ok = RangeField::ALL.iter().all(|f| {
            let (lo, hi) = self.range(*f);
            let v = f.get(r);
            (lo <= v && v <= hi) || (f.life_escape() && v.is_infinite())
        });

        facets_ok && ranges_ok
    }
}

/// Zero-copy filtered view: positions of kept rows in the dataset.
/// Derived per interaction, never stored.
#[derive(Clone, Debug)]
pub struct FilteredView<'a> {
    pub row_ix: Vec<usize>,
    raw: &'a Dataset,
}

impl<'a> FilteredView<'a> {
    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }

    pub fn records(&self) -> impl Iterator<Item = &'a Record> + '_ {
        self.row_ix.iter().map(|&ix| &self.raw.records[ix])
    }

    /// Borrow a single raw row by projected index (no cloning).
    pub fn raw_row(&self, i: usize) -> Option<&'a [String]> {
        self.row_ix.get(i).and_then(|&ix| self.raw.rows.get(ix).map(|r| r.as_slice()))
    }

    /// Materialize owned raw rows (for export boundaries).
    pub fn to_owned_rows(&self) -> Vec<Vec<String>> {
        self.row_ix.iter().map(|&ix| self.raw.rows[ix].clone()).collect()
    }
}
