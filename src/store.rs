// src/store.rs
//
// Dataset holder plus the process-wide read-through cache.
//
// The dataset is immutable after load. The cache is keyed by source URL
// and populated at most once per key; every session thereafter shares the
// same Arc, so repeated renders never refetch and need no further locking.

use std::collections::HashMap;
use std::error::Error;
use std::sync::{Arc, Mutex, OnceLock};

use crate::{csv, net, record::{self, Record}};

/// Immutable table: raw header/cells exactly as scraped (for the raw table
/// view and exports) alongside the typed records, same order and length.
#[derive(Clone, Debug)]
pub struct Dataset {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub records: Vec<Record>,
}

impl Dataset {
    pub fn from_csv(text: &str) -> Result<Self, Box<dyn Error>> {
        let mut rows = csv::parse_rows(text, ',');
        if rows.is_empty() {
            return Err("Malformed CSV: no header row".into());
        }
        let headers = rows.remove(0);
        let records = record::decode_rows(&headers, &rows)?;
        Ok(Self { headers, rows, records })
    }

    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }
}

fn cache() -> &'static Mutex<HashMap<String, Arc<Dataset>>> {
    static CACHE: OnceLock<Mutex<HashMap<String, Arc<Dataset>>>> = OnceLock::new();
    CACHE.get_or_init(|| Mutex::new(HashMap::new()))
}

/// Read-through load: fetch + parse on first call per source, cached Arc on
/// every call after. Fetch/parse failure propagates and caches nothing.
pub fn load_dataset(source: &str) -> Result<Arc<Dataset>, Box<dyn Error>> {
    if let Some(ds) = cache().lock().unwrap().get(source) {
        return Ok(ds.clone());
    }

    logf!("Load: fetching {}", source);
    let text = net::http_get(source)?;
    let ds = Arc::new(Dataset::from_csv(&text)?);
    logf!("Load: OK rows={} cols={}", ds.len(), ds.headers.len());

    cache().lock().unwrap()
        .entry(source.to_string())
        .or_insert_with(|| ds.clone());
    Ok(ds)
}

/// Drop the cached entry for a source (explicit invalidation only).
pub fn invalidate(source: &str) {
    cache().lock().unwrap().remove(source);
    logd!("Cache: invalidated {}", source);
}
