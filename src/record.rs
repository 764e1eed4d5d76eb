// src/record.rs
//
// Typed row model for the OTIS scrape plus the field tables the rest of
// the app is driven by:
//
// - Facet:      categorical fields (multi-select filters, value counts)
// - RangeField: numeric fields (range sliders, binning, stats)
//
// Numeric cells decode to f64. `inf`/`life` become f64::INFINITY (life or
// indeterminate sentence); anything unparseable becomes NaN, which every
// range test rejects — same net effect as pandas NaN rows.

use std::error::Error;

use crate::config::consts::*;

/* ---------------- Source columns ---------------- */

pub const COL_STATUS: &str = "valCurrentStatus";
pub const COL_SSL_CATEGORY: &str = "SSL_category";
pub const COL_LIFE_SENTENCE: &str = "life_sentence";
pub const COL_RACE: &str = "valRace";
pub const COL_GENDER: &str = "valGender";
pub const COL_COUNTY: &str = "County";
pub const COL_MCL: &str = "MCL#";
pub const COL_CRIME_TYPE: &str = "crime_type";
pub const COL_LOCATION: &str = "valLocation";
pub const COL_CURRENT_AGE: &str = "current_age";
pub const COL_AGE_AT_OFFENSE: &str = "age_at_offense";
pub const COL_TIME_SERVED: &str = "time_served";
pub const COL_MIN_SENTENCE: &str = "min_sentence_years";
pub const COL_MAX_SENTENCE: &str = "max_sentence_years";
pub const COL_YEAR_OF_OFFENSE: &str = "year_of_offense";

/* ---------------- Record ---------------- */

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Record {
    pub status: String,
    pub ssl_category: String,
    pub life_sentence: String,
    pub race: String,
    pub gender: String,
    pub county: String,
    pub mcl: String,
    pub crime_type: String,
    pub location: String,

    pub current_age: f64,
    pub age_at_offense: f64,
    pub time_served: f64,
    pub min_sentence_years: f64,
    pub max_sentence_years: f64,
    pub year_of_offense: f64,
}

/// Parse a numeric cell. Empty/garbage → NaN, life/indeterminate → +inf.
pub fn parse_numeric(cell: &str) -> f64 {
    let t = cell.trim();
    if t.is_empty() { return f64::NAN; }
    if t.eq_ignore_ascii_case("inf")
        || t.eq_ignore_ascii_case("infinity")
        || t.eq_ignore_ascii_case("life")
    {
        return f64::INFINITY;
    }
    t.parse::<f64>().unwrap_or(f64::NAN)
}

/// Header-name → column-index map, so source column order is not load-bearing.
struct ColumnMap {
    ix: [usize; 15],
}

impl ColumnMap {
    const NAMES: [&'static str; 15] = [
        COL_STATUS, COL_SSL_CATEGORY, COL_LIFE_SENTENCE, COL_RACE, COL_GENDER,
        COL_COUNTY, COL_MCL, COL_CRIME_TYPE, COL_LOCATION,
        COL_CURRENT_AGE, COL_AGE_AT_OFFENSE, COL_TIME_SERVED,
        COL_MIN_SENTENCE, COL_MAX_SENTENCE, COL_YEAR_OF_OFFENSE,
    ];

    fn resolve(headers: &[String]) -> Result<Self, Box<dyn Error>> {
        let mut ix = [0usize; 15];
        for (slot, name) in ix.iter_mut().zip(Self::NAMES) {
            *slot = headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| format!("Missing column: {}", name))?;
        }
        Ok(Self { ix })
    }

    fn text(&self, row: &[String], slot: usize) -> String {
        row.get(self.ix[slot]).map(|c| c.trim().to_string()).unwrap_or_default()
    }

    fn num(&self, row: &[String], slot: usize) -> f64 {
        row.get(self.ix[slot]).map(|c| parse_numeric(c)).unwrap_or(f64::NAN)
    }
}

/// Decode raw string rows into typed records. Fails only on a missing column.
pub fn decode_rows(headers: &[String], rows: &[Vec<String>]) -> Result<Vec<Record>, Box<dyn Error>> {
    let map = ColumnMap::resolve(headers)?;

    let records = rows.iter().map(|row| Record {
        status:        map.text(row, 0),
        ssl_category:  map.text(row, 1),
        life_sentence: map.text(row, 2),
        race:          map.text(row, 3),
        gender:        map.text(row, 4),
        county:        map.text(row, 5),
        mcl:           map.text(row, 6),
        crime_type:    map.text(row, 7),
        location:      map.text(row, 8),
        current_age:        map.num(row, 9),
        age_at_offense:     map.num(row, 10),
        time_served:        map.num(row, 11),
        min_sentence_years: map.num(row, 12),
        max_sentence_years: map.num(row, 13),
        year_of_offense:    map.num(row, 14),
    }).collect();

    Ok(records)
}

/* ---------------- Field tables ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Facet {
    Status,
    SslCategory,
    LifeSentence,
    Race,
    Gender,
    County,
    Mcl,
    CrimeType,
    Location,
}

impl Facet {
    pub const COUNT: usize = 9;
    pub const ALL: [Facet; Facet::COUNT] = [
        Facet::Status, Facet::SslCategory, Facet::LifeSentence,
        Facet::Race, Facet::Gender, Facet::County,
        Facet::Mcl, Facet::CrimeType, Facet::Location,
    ];

    #[inline]
    pub fn ix(self) -> usize { self as usize }

    pub fn label(self) -> &'static str {
        match self {
            Facet::Status       => "Status",
            Facet::SslCategory  => "SSL Eligible",
            Facet::LifeSentence => "Life Sentence",
            Facet::Race         => "Race",
            Facet::Gender       => "Gender",
            Facet::County       => "County",
            Facet::Mcl          => "MCL",
            Facet::CrimeType    => "Crime Type",
            Facet::Location     => "Location",
        }
    }

    /// Whether the filter control for this facet offers the "All" option.
    /// Gender, SSL and life sentence enumerate their few values directly.
    pub fn has_all_option(self) -> bool {
        !matches!(self, Facet::SslCategory | Facet::LifeSentence | Facet::Gender)
    }

    pub fn get(self, r: &Record) -> &str {
        match self {
            Facet::Status       => &r.status,
            Facet::SslCategory  => &r.ssl_category,
            Facet::LifeSentence => &r.life_sentence,
            Facet::Race         => &r.race,
            Facet::Gender       => &r.gender,
            Facet::County       => &r.county,
            Facet::Mcl          => &r.mcl,
            Facet::CrimeType    => &r.crime_type,
            Facet::Location     => &r.location,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RangeField {
    CurrentAge,
    AgeAtOffense,
    TimeServed,
    MinSentence,
    MaxSentence,
    YearOfOffense,
}

impl RangeField {
    pub const COUNT: usize = 6;
    pub const ALL: [RangeField; RangeField::COUNT] = [
        RangeField::CurrentAge, RangeField::AgeAtOffense, RangeField::TimeServed,
        RangeField::MinSentence, RangeField::MaxSentence, RangeField::YearOfOffense,
    ];

    #[inline]
    pub fn ix(self) -> usize { self as usize }

    pub fn label(self) -> &'static str {
        match self {
            RangeField::CurrentAge    => "Current Age",
            RangeField::AgeAtOffense  => "Age at Offense",
            RangeField::TimeServed    => "Time Served",
            RangeField::MinSentence   => "Min Sentence",
            RangeField::MaxSentence   => "Max Sentence",
            RangeField::YearOfOffense => "Year of Offense",
        }
    }

    /// Hardcoded slider bounds; not data-derived. Values outside are
    /// silently excluded by the range filter, never clamped.
    pub fn bounds(self) -> (f64, f64) {
        match self {
            RangeField::CurrentAge    => CURRENT_AGE_BOUNDS,
            RangeField::AgeAtOffense  => AGE_AT_OFFENSE_BOUNDS,
            RangeField::TimeServed    => TIME_SERVED_BOUNDS,
            RangeField::MinSentence   => MIN_SENTENCE_BOUNDS,
            RangeField::MaxSentence   => MAX_SENTENCE_BOUNDS,
            RangeField::YearOfOffense => YEAR_OF_OFFENSE_BOUNDS,
        }
    }

    /// Sentence lengths carry the unbounded sentinel: a life/indeterminate
    /// sentence (+inf) passes the range test no matter the selected range.
    pub fn life_escape(self) -> bool {
        matches!(self, RangeField::MinSentence | RangeField::MaxSentence)
    }

    pub fn get(self, r: &Record) -> f64 {
        match self {
            RangeField::CurrentAge    => r.current_age,
            RangeField::AgeAtOffense  => r.age_at_offense,
            RangeField::TimeServed    => r.time_served,
            RangeField::MinSentence   => r.min_sentence_years,
            RangeField::MaxSentence   => r.max_sentence_years,
            RangeField::YearOfOffense => r.year_of_offense,
        }
    }
}
