//! Row shape expected by the humidor catalog's `cigars` table.
//!
//! Records only carry a name and a brand, so most columns are placeholders the
//! catalog UI lets users fill in later.

use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use tracing::warn;

use crate::output::write_json;
use crate::record::Record;

const DEFAULT_SIZE: &str = "5 x 50";
const DEFAULT_FORMAT: &str = "Robusto";
const DEFAULT_RING_GAUGE: u32 = 50;
const DEFAULT_LOW_STOCK_ALERT: u32 = 5;
const DEFAULT_PRICE: u32 = 15;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogRow {
    pub brand: String,
    pub name: String,
    pub size: String,
    pub format: String,
    pub country: String,
    pub strength: String,
    pub wrapper: String,
    pub price: u32,
    pub quantity: u32,
    pub ring_gauge: u32,
    pub factory: String,
    pub release_year: Option<i32>,
    pub purchase_location: String,
    pub low_stock_alert: u32,
    pub added_date: String,
    pub aging_start_date: String,
    pub tags: Vec<String>,
    pub photo: String,
    pub in_wishlist: bool,
    pub user_id: Option<String>,
}

impl CatalogRow {
    pub fn from_record(record: &Record, added_at: DateTime<Utc>) -> Self {
        let stamp = added_at.to_rfc3339_opts(SecondsFormat::Millis, true);
        CatalogRow {
            brand: record.brand.clone(),
            name: record.name.clone(),
            size: DEFAULT_SIZE.to_string(),
            format: DEFAULT_FORMAT.to_string(),
            country: record.origin.clone(),
            strength: normalize_strength(&record.strength).to_string(),
            wrapper: record.wrapper.clone(),
            price: price_from_range(&record.price_range),
            quantity: 0,
            ring_gauge: DEFAULT_RING_GAUGE,
            factory: String::new(),
            release_year: None,
            purchase_location: String::new(),
            low_stock_alert: DEFAULT_LOW_STOCK_ALERT,
            added_date: stamp.clone(),
            aging_start_date: stamp,
            tags: Vec::new(),
            photo: record.image_url.clone(),
            in_wishlist: false,
            user_id: None,
        }
    }
}

/// The catalog only knows Mild, Medium and Full.
pub fn normalize_strength(strength: &str) -> &str {
    match strength {
        "Medium-Full" => "Full",
        other => other,
    }
}

pub fn price_from_range(range: &str) -> u32 {
    match range {
        "$" => 5,
        "$$" => 15,
        "$$$" => 25,
        "$$$$" => 50,
        _ => DEFAULT_PRICE,
    }
}

pub fn catalog_rows(records: &[Record], added_at: DateTime<Utc>) -> Vec<CatalogRow> {
    records
        .iter()
        .map(|r| CatalogRow::from_record(r, added_at))
        .collect()
}

/// Write catalog rows next to the main output.
///
/// The catalog is an optional extra, so a failed write is logged and reported
/// through the return value instead of ending the run.
pub fn export_catalog(path: &Path, records: &[Record], added_at: DateTime<Utc>) -> bool {
    let rows = catalog_rows(records, added_at);
    match write_json(path, &rows) {
        Ok(()) => {
            println!("\nCatalog rows: {} written to {}", rows.len(), path.display());
            true
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "catalog export failed");
            println!("\nCatalog export skipped: {e:#}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 9, 18, 30, 0).unwrap()
    }

    #[test]
    fn row_from_default_record() {
        let row = CatalogRow::from_record(&Record::new("Perdomos Lote", "Perdomo"), at());
        assert_eq!(row.brand, "Perdomo");
        assert_eq!(row.country, "Dominican Republic");
        assert_eq!(row.strength, "Medium");
        assert_eq!(row.price, 15);
        assert_eq!(row.size, "5 x 50");
        assert_eq!(row.ring_gauge, 50);
        assert_eq!(row.added_date, "2024-03-09T18:30:00.000Z");
        assert_eq!(row.added_date, row.aging_start_date);
        assert!(row.tags.is_empty());
        assert!(!row.in_wishlist);
    }

    #[test]
    fn price_buckets() {
        assert_eq!(price_from_range("$"), 5);
        assert_eq!(price_from_range("$$$"), 25);
        assert_eq!(price_from_range("$$$$"), 50);
        assert_eq!(price_from_range("cheap"), 15);
    }

    #[test]
    fn strength_normalization() {
        assert_eq!(normalize_strength("Medium-Full"), "Full");
        assert_eq!(normalize_strength("Mild"), "Mild");
    }

    #[test]
    fn nulls_serialize_as_null() {
        let row = CatalogRow::from_record(&Record::new("Perdomos Lote", "Perdomo"), at());
        let json = serde_json::to_value(&row).unwrap();
        assert!(json["release_year"].is_null());
        assert!(json["user_id"].is_null());
        assert_eq!(json["photo"], "");
    }

    #[test]
    fn export_writes_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        let records = vec![Record::new("Perdomos Lote", "Perdomo")];
        assert!(export_catalog(&path, &records, at()));

        let text = std::fs::read_to_string(&path).unwrap();
        let rows: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(rows.as_array().map(Vec::len), Some(1));
        assert_eq!(rows[0]["price"], 15);
    }

    #[test]
    fn export_failure_is_reported_not_raised() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("catalog.json");
        let records = vec![Record::new("Perdomos Lote", "Perdomo")];
        assert!(!export_catalog(&path, &records, at()));
        assert!(!path.exists());
    }
}
