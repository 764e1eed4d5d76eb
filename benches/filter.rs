// benches/filter.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use otis_dash::aggregate::{self, MIN_SENTENCE_BINS};
use otis_dash::catalog::Catalog;
use otis_dash::filter::{FilterSelection, Selection};
use otis_dash::record::{Facet, RangeField};
use otis_dash::store::Dataset;

const HEADER: &str = "valCurrentStatus,SSL_category,life_sentence,valRace,valGender,\
County,MCL#,crime_type,valLocation,current_age,age_at_offense,time_served,\
min_sentence_years,max_sentence_years,year_of_offense";

/// Synthetic table in the shape of the real scrape, big enough to make the
/// per-interaction filter pass measurable.
fn sample_dataset(rows: usize) -> Dataset {
    let statuses = ["Prisoner", "Paroled", "Discharged"];
    let races = ["White", "Black", "Hispanic", "Other"];
    let counties = ["Wayne", "Kent", "Oakland", "Genesee", "Macomb", "Ingham"];
    let crimes = ["Violent", "Nonviolent", "Drug"];

    let mut text = String::from(HEADER);
    text.push('\n');
    for i in 0..rows {
        let min_sentence = if i % 17 == 0 { "inf".to_string() } else { (i % 40).to_string() };
        text.push_str(&format!(
            "{},Not Eligible,{},{},{},{},750.{},{},Alger,{},{},{},{},{},{}\n",
            statuses[i % statuses.len()],
            if i % 5 == 0 { "Yes" } else { "No" },
            races[i % races.len()],
            if i % 2 == 0 { "Male" } else { "Female" },
            counties[i % counties.len()],
            i % 900,
            crimes[i % crimes.len()],
            20 + i % 60,           // current_age
            18 + i % 40,           // age_at_offense
            i % 35,                // time_served
            min_sentence,
            (i % 60) * 2,          // max_sentence
            1960 + i % 60,         // year_of_offense
        ));
    }
    Dataset::from_csv(&text).expect("synthetic dataset")
}

fn bench_filter(c: &mut Criterion) {
    let ds = sample_dataset(10_000);
    let catalog = Catalog::build(&ds);

    let mut sel = FilterSelection::defaults();
    sel.set_selection(Facet::Race, Selection::of(["White", "Black"]));
    sel.set_range(RangeField::MinSentence, 0.0, 25.0);

    c.bench_function("filter_apply_10k", |b| {
        b.iter(|| {
            let view = black_box(&sel).apply(&catalog, &ds);
            black_box(view.len())
        })
    });

    c.bench_function("filter_and_aggregate_10k", |b| {
        b.iter(|| {
            let view = sel.apply(&catalog, &ds);
            let county = aggregate::facet_counts(&view, Facet::County);
            let bins = aggregate::binned_counts(&view, RangeField::MinSentence, &MIN_SENTENCE_BINS);
            black_box((county.len(), bins.len()))
        })
    });
}

criterion_group!(benches, bench_filter);
criterion_main!(benches);
