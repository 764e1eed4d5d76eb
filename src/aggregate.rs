// src/aggregate.rs
//
// Display-only projections over a FilteredView: value counts with
// percentages, fixed-table binning, top-N truncation, descriptive stats.
// Nothing here feeds back into filtering.

use std::collections::HashMap;

use crate::filter::FilteredView;
use crate::record::{Facet, RangeField};

/// One row of an aggregation table: (label, count, % of filtered total).
#[derive(Clone, Debug, PartialEq)]
pub struct AggRow {
    pub label: String,
    pub count: usize,
    pub pct: f64,
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Count labels and attach percentages against `total` (the filtered view
/// size — NOT the label count, so dimensions that drop rows, like binning
/// dropping NaN, keep the original denominator). total == 0 → pct is NaN.
/// Sorted by descending count, ties by label.
pub fn value_counts<I>(labels: I, total: usize) -> Vec<AggRow>
where
    I: IntoIterator<Item = String>,
{
    let mut counts: HashMap<String, usize> = HashMap::new();
    for label in labels {
        *counts.entry(label).or_insert(0) += 1;
    }

    let mut rows: Vec<AggRow> = counts
        .into_iter()
        .map(|(label, count)| AggRow {
            label,
            count,
            // zero total → NaN, shown as such rather than erroring
            pct: if total == 0 {
                f64::NAN
            } else {
                round2(count as f64 / total as f64 * 100.0)
            },
        })
        .collect();

    rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    rows
}

/// Counts along a categorical facet.
pub fn facet_counts(view: &FilteredView, facet: Facet) -> Vec<AggRow> {
    value_counts(view.records().map(|r| s!(facet.get(r))), view.len())
}

/// Counts along a numeric field's distinct values (e.g. age). NaN rows drop.
pub fn numeric_counts(view: &FilteredView, field: RangeField) -> Vec<AggRow> {
    let labels = view
        .records()
        .map(|r| field.get(r))
        .filter(|v| !v.is_nan())
        .map(fmt_value);
    value_counts(labels, view.len())
}

/// Counts along a binned numeric field. NaN rows drop; the terminal bucket
/// absorbs the unbounded sentinel.
pub fn binned_counts(view: &FilteredView, field: RangeField, bins: &BinTable) -> Vec<AggRow> {
    let labels = view
        .records()
        .filter_map(|r| bin_label(field.get(r), bins))
        .map(|l| s!(l));
    value_counts(labels, view.len())
}

/// First `n` rows of an already-ranked aggregation (county chart).
pub fn top_n(rows: &[AggRow], n: usize) -> &[AggRow] {
    &rows[..rows.len().min(n)]
}

/* ---------------- Binning ---------------- */

/// Edge/label table for bucketing a continuous field. `labels.len()` must
/// be `edges.len() - 1`. Bins are lower-open/upper-closed, except the first
/// bin which includes its lower edge.
pub struct BinTable {
    pub edges: &'static [f64],
    pub labels: &'static [&'static str],
}

/// Min-sentence buckets; the terminal bucket runs to +inf so life and
/// indeterminate sentences land in "Life".
pub const MIN_SENTENCE_BINS: BinTable = BinTable {
    edges: &[
        0.0, 5.0, 10.0, 15.0, 20.0, 25.0, 30.0, 35.0, 40.0, 45.0, 50.0, 101.0,
        f64::INFINITY,
    ],
    labels: &[
        "0-5", "5-10", "10-15", "15-20", "20-25", "25-30", "30-35", "35-40",
        "40-45", "45-50", "50-100", "Life",
    ],
};

/// Pure bucket lookup, independent of rendering. NaN and values below the
/// first edge yield None (the row drops from the aggregation).
pub fn bin_label(v: f64, table: &BinTable) -> Option<&'static str> {
    if v.is_nan() || v < table.edges[0] {
        return None;
    }
    if v == table.edges[0] {
        return table.labels.first().copied();
    }
    for (i, label) in table.labels.iter().enumerate() {
        if v > table.edges[i] && v <= table.edges[i + 1] {
            return Some(label);
        }
    }
    None
}

/* ---------------- Descriptive stats ---------------- */

/// pandas-describe shape: count/mean/std/min/quartiles/max.
#[derive(Clone, Debug, PartialEq)]
pub struct Stats {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// Linear-interpolation quantile over a sorted slice.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    if n == 1 { return sorted[0]; }
    let pos = q * (n - 1) as f64;
    let lo = pos.floor() as usize;
    let frac = pos - lo as f64;
    if frac == 0.0 {
        sorted[lo]
    } else {
        sorted[lo] + (sorted[lo + 1] - sorted[lo]) * frac
    }
}

/// Descriptive stats over a numeric field, skipping NaN. None when no
/// usable values remain. std is the sample deviation (NaN for count 1).
pub fn describe(view: &FilteredView, field: RangeField) -> Option<Stats> {
    let mut vals: Vec<f64> = view
        .records()
        .map(|r| field.get(r))
        .filter(|v| !v.is_nan())
        .collect();
    if vals.is_empty() {
        return None;
    }
    vals.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let n = vals.len();
    let mean = vals.iter().sum::<f64>() / n as f64;
    let std = if n > 1 {
        let ss = vals.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>();
        (ss / (n - 1) as f64).sqrt()
    } else {
        f64::NAN
    };

    Some(Stats {
        count: n,
        mean,
        std,
        min: vals[0],
        q1: quantile(&vals, 0.25),
        median: quantile(&vals, 0.5),
        q3: quantile(&vals, 0.75),
        max: vals[n - 1],
    })
}

/* ---------------- Display formatting ---------------- */

/// Integer-looking floats print without the trailing ".0".
pub fn fmt_value(v: f64) -> String {
    if v.is_infinite() {
        s!("inf")
    } else if v.fract() == 0.0 {
        format!("{:.0}", v)
    } else {
        format!("{}", v)
    }
}

/// Thousands separators for the total metric.
pub fn fmt_count(n: usize) -> String {
    let digits = n.to_string();
    let mut out = s!();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Percentage cell; NaN (empty view) renders as such rather than erroring.
pub fn fmt_pct(pct: f64) -> String {
    if pct.is_nan() { s!("NaN") } else { format!("{:.2}", pct) }
}
