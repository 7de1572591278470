//! # Snapshot Persistence
//!
//! The persisted blob shape and the JSON file codec.
//!
//! ## Blob Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     store.json (one document)                           │
//! │                                                                         │
//! │  {                                                                      │
//! │    "customers":      [ Customer, ... ],                                 │
//! │    "products":       [ Product, ... ],                                  │
//! │    "invoices":       [ Invoice, ... ],                                  │
//! │    "nextInvoiceNum": 5                                                  │
//! │  }                                                                      │
//! │                                                                         │
//! │  • Loaded in full at startup                                            │
//! │  • Overwritten in full on every mutating command                        │
//! │  • No versioning, no migrations: schema changes are breaking            │
//! │  • Field names are camelCase so blobs written by earlier builds         │
//! │    keep loading                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Write Strategy
//! Saves go through a sibling temp file followed by a rename, so a crash
//! mid-write leaves the previous blob readable rather than a truncated one.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use quill_core::types::{Customer, Invoice, Product};

use crate::error::{StoreError, StoreResult};

// =============================================================================
// Snapshot Blob
// =============================================================================

/// The full persisted state: three collections plus the invoice counter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSnapshot {
    pub customers: Vec<Customer>,
    pub products: Vec<Product>,
    pub invoices: Vec<Invoice>,
    pub next_invoice_num: u64,
}

impl Default for StoreSnapshot {
    /// An empty store: no entities, counter at 1 (first invoice is INV-001).
    fn default() -> Self {
        StoreSnapshot {
            customers: Vec::new(),
            products: Vec::new(),
            invoices: Vec::new(),
            next_invoice_num: 1,
        }
    }
}

// =============================================================================
// Snapshot File
// =============================================================================

/// Reads and writes the snapshot blob at a fixed path.
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    /// Creates a codec for the given path. Nothing is touched on disk yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SnapshotFile { path: path.into() }
    }

    /// The snapshot's location on disk.
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the snapshot, or `None` if no file exists yet (first run).
    ///
    /// A present-but-unreadable or corrupt file is an error: silently
    /// starting empty would overwrite the user's data on the next save.
    pub fn load(&self) -> StoreResult<Option<StoreSnapshot>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = ?self.path, "no snapshot file, starting empty");
                return Ok(None);
            }
            Err(err) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source: err,
                })
            }
        };

        let snapshot = serde_json::from_slice(&bytes).map_err(|err| StoreError::Corrupt {
            path: self.path.clone(),
            source: err,
        })?;
        debug!(path = ?self.path, "loaded snapshot");
        Ok(Some(snapshot))
    }

    /// Saves the snapshot, replacing whatever was there.
    pub fn save(&self, snapshot: &StoreSnapshot) -> StoreResult<()> {
        let json = serde_json::to_vec_pretty(snapshot).map_err(StoreError::Serialize)?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, &json).map_err(|err| StoreError::Write {
            path: tmp.clone(),
            source: err,
        })?;
        fs::rename(&tmp, &self.path).map_err(|err| StoreError::Write {
            path: self.path.clone(),
            source: err,
        })?;

        debug!(path = ?self.path, bytes = json.len(), "saved snapshot");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use quill_core::types::{InvoiceItem, InvoiceStatus};
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    /// Unique throwaway path under the system temp dir.
    fn temp_snapshot_path() -> PathBuf {
        std::env::temp_dir().join(format!("quill-snapshot-test-{}.json", Uuid::new_v4()))
    }

    fn sample_snapshot() -> StoreSnapshot {
        StoreSnapshot {
            customers: vec![Customer {
                id: "c1".to_string(),
                name: "Acme Corp".to_string(),
                email: "billing@acme.com".to_string(),
                phone: "+1-555-0101".to_string(),
                address: "123 Business Ave, NY 10001".to_string(),
                gst_id: "GST001".to_string(),
                created_at: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            }],
            products: vec![Product {
                id: "p3".to_string(),
                name: "Cloud Hosting".to_string(),
                description: "Monthly cloud hosting package".to_string(),
                price: dec!(49.99),
                tax_percent: dec!(18),
                sku: "SVC-HOST".to_string(),
            }],
            invoices: vec![Invoice {
                id: "inv1".to_string(),
                invoice_number: "INV-001".to_string(),
                customer_id: "c1".to_string(),
                customer_name: "Acme Corp".to_string(),
                items: vec![InvoiceItem {
                    product_id: "p3".to_string(),
                    name: "Cloud Hosting".to_string(),
                    quantity: 12,
                    price: dec!(49.99),
                    discount: dec!(10),
                    tax_percent: dec!(18),
                }],
                status: InvoiceStatus::Paid,
                due_date: NaiveDate::from_ymd_opt(2025, 1, 30).unwrap(),
                created_at: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                notes: String::new(),
            }],
            next_invoice_num: 5,
        }
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let file = SnapshotFile::new(temp_snapshot_path());
        let snapshot = sample_snapshot();

        file.save(&snapshot).unwrap();
        let loaded = file.load().unwrap().expect("file exists");
        assert_eq!(loaded, snapshot);

        std::fs::remove_file(file.path()).unwrap();
    }

    #[test]
    fn test_missing_file_loads_as_none() {
        let file = SnapshotFile::new(temp_snapshot_path());
        assert!(file.load().unwrap().is_none());
    }

    #[test]
    fn test_corrupt_file_is_an_error_not_an_empty_store() {
        let path = temp_snapshot_path();
        std::fs::write(&path, b"{ not json").unwrap();

        let file = SnapshotFile::new(&path);
        assert!(matches!(file.load(), Err(StoreError::Corrupt { .. })));

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_blob_field_names_match_legacy_data() {
        let json = serde_json::to_value(sample_snapshot()).unwrap();
        assert!(json.get("nextInvoiceNum").is_some());
        assert!(json["customers"][0].get("gstId").is_some());
        assert!(json["customers"][0].get("createdAt").is_some());
        assert!(json["products"][0].get("taxPercent").is_some());
        assert!(json["invoices"][0].get("invoiceNumber").is_some());
        assert!(json["invoices"][0]["items"][0].get("productId").is_some());
    }

    #[test]
    fn test_loads_blob_written_by_the_original_frontend() {
        // Verbatim shape of a legacy localStorage payload
        let legacy = r#"{
            "customers": [
                { "id": "c2", "name": "TechStart Inc", "email": "accounts@techstart.io",
                  "phone": "+1-555-0202", "address": "456 Innovation Blvd, SF 94105",
                  "gstId": "GST002", "createdAt": "2024-02-10" }
            ],
            "products": [
                { "id": "p1", "name": "Web Development",
                  "description": "Full-stack web development services",
                  "price": 150, "taxPercent": 18, "sku": "SVC-WEB" }
            ],
            "invoices": [
                { "id": "inv2", "invoiceNumber": "INV-002", "customerId": "c2",
                  "customerName": "TechStart Inc",
                  "items": [ { "productId": "p1", "name": "Web Development",
                               "quantity": 20, "price": 120, "discount": 5,
                               "taxPercent": 18 } ],
                  "status": "sent", "dueDate": "2025-02-28",
                  "createdAt": "2025-02-05", "notes": "Net 30" }
            ],
            "nextInvoiceNum": 3
        }"#;

        let snapshot: StoreSnapshot = serde_json::from_str(legacy).unwrap();
        assert_eq!(snapshot.next_invoice_num, 3);
        assert_eq!(snapshot.customers[0].gst_id, "GST002");
        assert_eq!(snapshot.invoices[0].status, InvoiceStatus::Sent);
        assert_eq!(snapshot.invoices[0].items[0].quantity, 20);
        assert_eq!(snapshot.invoices[0].items[0].discount, dec!(5));
    }

    #[test]
    fn test_decimal_prices_serialize_as_plain_numbers() {
        let json = serde_json::to_string(&sample_snapshot()).unwrap();
        // 49.99 must stay a bare number, not a string, for blob compatibility
        assert!(json.contains("49.99"));
        assert!(!json.contains("\"49.99\""));
    }
}
