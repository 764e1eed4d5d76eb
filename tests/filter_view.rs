// tests/filter_view.rs
//
// Filter engine behavior: conjunction semantics, the "All" sentinel,
// the unbounded-sentence escape, and the empty-selection edge case.
//
use otis_dash::catalog::Catalog;
use otis_dash::filter::{FilterSelection, Selection};
use otis_dash::record::{Facet, RangeField};
use otis_dash::store::Dataset;

const HEADER: &str = "valCurrentStatus,SSL_category,life_sentence,valRace,valGender,\
County,MCL#,crime_type,valLocation,current_age,age_at_offense,time_served,\
min_sentence_years,max_sentence_years,year_of_offense";

fn dataset(rows: &[&str]) -> Dataset {
    let mut text = String::from(HEADER);
    text.push('\n');
    for r in rows {
        text.push_str(r);
        text.push('\n');
    }
    Dataset::from_csv(&text).expect("test dataset")
}

/// The three-record scenario from the dashboard's acceptance checks.
fn scenario() -> Dataset {
    dataset(&[
        "Prisoner,Not Eligible,No,White,Male,Wayne,750.1,Violent,Alger,40,30,10,3,10,2000",
        "Prisoner,Not Eligible,Yes,Black,Male,Wayne,750.2,Violent,Alger,50,25,20,inf,inf,1995",
        "Paroled,Not Eligible,No,White,Male,Kent,750.3,Nonviolent,Alger,35,28,5,7,15,2001",
    ])
}

#[test]
fn universal_selection_keeps_everything() {
    let ds = scenario();
    let catalog = Catalog::build(&ds);
    let view = FilterSelection::universal().apply(&catalog, &ds);
    assert_eq!(view.row_ix, vec![0, 1, 2]);
}

#[test]
fn filtered_view_is_subset_of_dataset() {
    let ds = scenario();
    let catalog = Catalog::build(&ds);

    let mut sel = FilterSelection::universal();
    sel.set_selection(Facet::Status, Selection::of(["Prisoner"]));
    let view = sel.apply(&catalog, &ds);

    assert!(view.row_ix.iter().all(|&ix| ix < ds.len()));
    assert!(view.len() <= ds.len());
}

#[test]
fn all_equals_explicit_full_set() {
    let ds = scenario();
    let catalog = Catalog::build(&ds);

    let mut universal = FilterSelection::universal();
    universal.set_selection(Facet::Race, Selection::Universal);

    let mut explicit = FilterSelection::universal();
    explicit.set_selection(
        Facet::Race,
        Selection::Explicit(catalog.distinct(Facet::Race).clone()),
    );

    assert_eq!(
        universal.apply(&catalog, &ds).row_ix,
        explicit.apply(&catalog, &ds).row_ix,
    );
}

#[test]
fn unbounded_sentence_bypasses_the_range() {
    let ds = scenario();
    let catalog = Catalog::build(&ds);

    // min_sentence range [0,10] — record 1 has min=inf and must survive
    let mut sel = FilterSelection::universal();
    sel.set_selection(Facet::Status, Selection::of(["Prisoner"]));
    sel.set_range(RangeField::MinSentence, 0.0, 10.0);

    let view = sel.apply(&catalog, &ds);
    assert_eq!(view.row_ix, vec![0, 1]);
}

#[test]
fn year_range_has_no_unbounded_escape() {
    // Year of offense is a plain range: nothing escapes it.
    let ds = scenario();
    let catalog = Catalog::build(&ds);

    let mut sel = FilterSelection::universal();
    sel.set_range(RangeField::YearOfOffense, 1996.0, 2024.0);

    let view = sel.apply(&catalog, &ds);
    assert_eq!(view.row_ix, vec![0, 2]);
}

#[test]
fn empty_explicit_selection_matches_nothing() {
    let ds = scenario();
    let catalog = Catalog::build(&ds);

    let mut sel = FilterSelection::universal();
    sel.set_selection(Facet::Race, Selection::of(Vec::<String>::new()));

    let view = sel.apply(&catalog, &ds);
    assert!(view.is_empty());
}

#[test]
fn narrowing_never_grows_the_view() {
    let ds = scenario();
    let catalog = Catalog::build(&ds);

    let mut wide = FilterSelection::universal();
    wide.set_selection(Facet::Status, Selection::of(["Prisoner", "Paroled"]));
    let wide_len = wide.apply(&catalog, &ds).len();

    let mut narrow = wide.clone();
    narrow.set_selection(Facet::Status, Selection::of(["Prisoner"]));
    assert!(narrow.apply(&catalog, &ds).len() <= wide_len);

    let mut narrower = narrow.clone();
    narrower.set_range(RangeField::CurrentAge, 0.0, 45.0);
    assert!(narrower.apply(&catalog, &ds).len() <= narrow.apply(&catalog, &ds).len());
}

#[test]
fn out_of_bounds_values_are_silently_excluded() {
    // current_age 150 sits outside the hardcoded 0–100 slider bound; the
    // full default range still drops it (no clamping).
    let ds = dataset(&[
        "Prisoner,Not Eligible,No,White,Male,Wayne,750.1,Violent,Alger,150,30,10,3,10,2000",
        "Prisoner,Not Eligible,No,White,Male,Wayne,750.1,Violent,Alger,60,30,10,3,10,2000",
    ]);
    let catalog = Catalog::build(&ds);

    let view = FilterSelection::universal().apply(&catalog, &ds);
    assert_eq!(view.row_ix, vec![1]);
}

#[test]
fn nan_numeric_cells_never_match_a_range() {
    let ds = dataset(&[
        "Prisoner,Not Eligible,No,White,Male,Wayne,750.1,Violent,Alger,,30,10,3,10,2000",
    ]);
    let catalog = Catalog::build(&ds);

    let view = FilterSelection::universal().apply(&catalog, &ds);
    assert!(view.is_empty());
}

#[test]
fn default_selection_keeps_prisoners_only() {
    let ds = scenario();
    let catalog = Catalog::build(&ds);

    let view = FilterSelection::defaults().apply(&catalog, &ds);
    assert_eq!(view.row_ix, vec![0, 1]);
}

#[test]
fn view_projects_raw_rows() {
    let ds = scenario();
    let catalog = Catalog::build(&ds);

    let mut sel = FilterSelection::universal();
    sel.set_selection(Facet::County, Selection::of(["Kent"]));
    let view = sel.apply(&catalog, &ds);

    assert_eq!(view.len(), 1);
    let row = view.raw_row(0).expect("projected row");
    assert_eq!(row[0], "Paroled");
    assert_eq!(view.to_owned_rows(), vec![ds.rows[2].clone()]);
}
