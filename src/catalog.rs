// src/catalog.rs
//
// Distinct observed values per facet, computed once from the loaded
// dataset. Seeds the multi-select controls and resolves the Universal
// ("All") selection in the filter engine.

use std::collections::BTreeSet;

use crate::record::Facet;
use crate::store::Dataset;

/// Option-list sentinel meaning "every observed value".
pub const ALL_OPTION: &str = "All";

#[derive(Clone, Debug)]
pub struct Catalog {
    distinct: Vec<BTreeSet<String>>, // indexed by Facet::ix()
}

impl Catalog {
    pub fn build(ds: &Dataset) -> Self {
        let mut distinct: Vec<BTreeSet<String>> = vec![BTreeSet::new(); Facet::COUNT];
        for r in &ds.records {
            for f in Facet::ALL {
                let v = f.get(r);
                if !distinct[f.ix()].contains(v) {
                    distinct[f.ix()].insert(s!(v));
                }
            }
        }
        Self { distinct }
    }

    pub fn distinct(&self, f: Facet) -> &BTreeSet<String> {
        &self.distinct[f.ix()]
    }

    /// Sorted option list for a facet's control, with "All" appended for
    /// the facets that offer it.
    pub fn options(&self, f: Facet) -> Vec<String> {
        let mut opts: Vec<String> = self.distinct[f.ix()].iter().cloned().collect();
        if f.has_all_option() {
            opts.push(s!(ALL_OPTION));
        }
        opts
    }
}
