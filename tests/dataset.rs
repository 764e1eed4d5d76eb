// tests/dataset.rs
//
// CSV decode into the typed dataset: column mapping, numeric spellings,
// catalog derivation, and the writer/parser round trip used by exports.
//
use otis_dash::catalog::{ALL_OPTION, Catalog};
use otis_dash::csv::{parse_rows, rows_to_string};
use otis_dash::record::{parse_numeric, Facet};
use otis_dash::store::Dataset;

const HEADER: &str = "valCurrentStatus,SSL_category,life_sentence,valRace,valGender,\
County,MCL#,crime_type,valLocation,current_age,age_at_offense,time_served,\
min_sentence_years,max_sentence_years,year_of_offense";

#[test]
fn numeric_cell_spellings() {
    assert_eq!(parse_numeric("7"), 7.0);
    assert_eq!(parse_numeric(" 12.5 "), 12.5);
    assert!(parse_numeric("inf").is_infinite());
    assert!(parse_numeric("Infinity").is_infinite());
    assert!(parse_numeric("LIFE").is_infinite());
    assert!(parse_numeric("").is_nan());
    assert!(parse_numeric("n/a").is_nan());
}

#[test]
fn decode_typed_records() {
    let text = format!(
        "{}\n\
         Prisoner,Not Eligible,Yes,White,Male,\"Wayne, MI\",750.316,Violent,Alger,44,22,20,life,inf,2003\n",
        HEADER
    );
    let ds = Dataset::from_csv(&text).unwrap();

    assert_eq!(ds.len(), 1);
    let r = &ds.records[0];
    assert_eq!(r.status, "Prisoner");
    assert_eq!(r.county, "Wayne, MI"); // quoted comma survives
    assert!(r.min_sentence_years.is_infinite());
    assert!(r.max_sentence_years.is_infinite());
    assert_eq!(r.current_age, 44.0);
    assert_eq!(r.year_of_offense, 2003.0);

    // raw rows are kept verbatim alongside the typed records
    assert_eq!(ds.rows.len(), 1);
    assert_eq!(ds.rows[0][0], "Prisoner");
}

#[test]
fn decode_is_header_order_independent() {
    // Same columns, scrambled order: name-based mapping must not care.
    let text = "min_sentence_years,valCurrentStatus,SSL_category,life_sentence,valRace,\
valGender,County,MCL#,crime_type,valLocation,current_age,age_at_offense,\
time_served,max_sentence_years,year_of_offense\n\
7,Paroled,Not Eligible,No,Black,Female,Kent,750.1,Nonviolent,Alger,31,25,4,15,2015\n";
    let ds = Dataset::from_csv(text).unwrap();

    let r = &ds.records[0];
    assert_eq!(r.status, "Paroled");
    assert_eq!(r.gender, "Female");
    assert_eq!(r.min_sentence_years, 7.0);
}

#[test]
fn missing_column_is_a_load_error() {
    let err = Dataset::from_csv("a,b,c\n1,2,3\n").unwrap_err();
    assert!(err.to_string().contains("valCurrentStatus"));
}

#[test]
fn empty_input_is_a_load_error() {
    assert!(Dataset::from_csv("").is_err());
}

#[test]
fn catalog_distinct_values_and_all_option() {
    let text = format!(
        "{}\n\
         Prisoner,Not Eligible,No,White,Male,Wayne,750.1,Violent,Alger,40,30,10,3,10,2000\n\
         Paroled,Not Eligible,No,Black,Male,Kent,750.2,Violent,Alger,41,31,11,4,11,2001\n\
         Prisoner,Not Eligible,No,White,Female,Wayne,750.1,Violent,Alger,42,32,12,5,12,2002\n",
        HEADER
    );
    let ds = Dataset::from_csv(&text).unwrap();
    let catalog = Catalog::build(&ds);

    let counties: Vec<&str> = catalog.distinct(Facet::County).iter().map(|s| s.as_str()).collect();
    assert_eq!(counties, vec!["Kent", "Wayne"]); // sorted, deduped

    // "All" appended only where the control offers it
    assert_eq!(catalog.options(Facet::County).last().map(|s| s.as_str()), Some(ALL_OPTION));
    assert!(!catalog.options(Facet::Gender).iter().any(|o| o == ALL_OPTION));
    assert!(!catalog.options(Facet::LifeSentence).iter().any(|o| o == ALL_OPTION));
}

#[test]
fn export_round_trips_through_the_parser() {
    let headers = Some(vec!["County".to_string(), "Count".to_string()]);
    let rows = vec![
        vec!["Wayne, MI".to_string(), "2".to_string()],
        vec!["He said \"hi\"".to_string(), "1".to_string()],
    ];

    let text = rows_to_string(&rows, &headers, ',');
    let mut parsed = parse_rows(&text, ',');

    assert_eq!(parsed.remove(0), headers.unwrap());
    assert_eq!(parsed, rows);
}
