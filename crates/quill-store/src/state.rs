//! # Store State
//!
//! The shared handle the rest of the application talks to: one mutex
//! around the store, persistence woven into every command.
//!
//! ## Thread Safety
//! The store is wrapped in `Arc<Mutex<T>>` because:
//! 1. There is exactly one logical writer (the interactive user), but the
//!    host may dispatch commands from more than one thread
//! 2. No store operation is designed to interleave with another, so every
//!    command takes the lock exclusively
//!
//! ## Why Not RwLock?
//! Commands are quick and queries clone a snapshot anyway. A RwLock would
//! add complexity with minimal benefit.
//!
//! ## Commit-Then-Swap
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Lifecycle                                    │
//! │                                                                         │
//! │  command(payload)                                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  lock the store                                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  clone ──► apply mutation to the clone                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  save clone's snapshot to disk ──── FAILS ──► return StoreError;        │
//! │       │                                       memory keeps the          │
//! │       ▼                                       last-known-good state     │
//! │  swap the clone in; return the command's result                         │
//! │                                                                         │
//! │  A mutation is therefore never partially applied: disk and memory       │
//! │  cannot diverge.                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use tracing::error;

use quill_core::types::{
    Customer, CustomerPatch, Invoice, InvoicePatch, NewCustomer, NewInvoice, NewProduct, Product,
    ProductPatch,
};

use crate::error::StoreResult;
use crate::snapshot::{SnapshotFile, StoreSnapshot};
use crate::store::Store;

/// Shared, persistent store handle.
///
/// Cloning is cheap (the inner store is behind an `Arc`); clones share
/// state and the snapshot file.
#[derive(Debug, Clone)]
pub struct StoreState {
    inner: Arc<Mutex<Store>>,
    file: SnapshotFile,
}

impl StoreState {
    /// Opens the store backed by the snapshot file at `path`.
    ///
    /// Missing file: first run, starts empty with the counter at 1.
    /// Present-but-corrupt file: error - refusing to start beats silently
    /// clobbering the user's data on the next save.
    pub fn open(path: impl Into<std::path::PathBuf>) -> StoreResult<Self> {
        let file = SnapshotFile::new(path);
        let store = match file.load()? {
            Some(snapshot) => Store::from_snapshot(snapshot),
            None => Store::new(),
        };
        Ok(StoreState {
            inner: Arc::new(Mutex::new(store)),
            file,
        })
    }

    // =========================================================================
    // Query Surface
    // =========================================================================

    /// A consistent copy of the full state.
    ///
    /// Views call this after each command instead of holding references
    /// into the store; a snapshot can never observe a half-applied change.
    pub fn snapshot(&self) -> StoreSnapshot {
        self.lock().to_snapshot()
    }

    /// Runs `f` with read access to the store, without cloning.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let count = state.with_store(|store| store.invoices().len());
    /// ```
    pub fn with_store<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Store) -> R,
    {
        f(&self.lock())
    }

    // =========================================================================
    // Command Surface
    // =========================================================================

    /// Adds a customer and persists. See [`Store::add_customer`].
    pub fn add_customer(&self, draft: NewCustomer) -> StoreResult<Customer> {
        self.commit(|store| store.add_customer(draft))
    }

    /// Patches a customer and persists. No-op (but still saved) if unknown.
    pub fn update_customer(&self, id: &str, patch: CustomerPatch) -> StoreResult<()> {
        self.commit(|store| store.update_customer(id, patch))
    }

    /// Deletes a customer and persists. No-op if unknown.
    pub fn delete_customer(&self, id: &str) -> StoreResult<()> {
        self.commit(|store| store.delete_customer(id))
    }

    /// Adds a product and persists. See [`Store::add_product`].
    pub fn add_product(&self, draft: NewProduct) -> StoreResult<Product> {
        self.commit(|store| store.add_product(draft))
    }

    /// Patches a product and persists. No-op if unknown.
    pub fn update_product(&self, id: &str, patch: ProductPatch) -> StoreResult<()> {
        self.commit(|store| store.update_product(id, patch))
    }

    /// Deletes a product and persists. No-op if unknown.
    pub fn delete_product(&self, id: &str) -> StoreResult<()> {
        self.commit(|store| store.delete_product(id))
    }

    /// Adds an invoice (consuming the next sequence number) and persists.
    pub fn add_invoice(&self, draft: NewInvoice) -> StoreResult<Invoice> {
        self.commit(|store| store.add_invoice(draft))
    }

    /// Patches an invoice and persists. No-op if unknown.
    pub fn update_invoice(&self, id: &str, patch: InvoicePatch) -> StoreResult<()> {
        self.commit(|store| store.update_invoice(id, patch))
    }

    /// Deletes an invoice and persists. The counter is never decremented.
    pub fn delete_invoice(&self, id: &str) -> StoreResult<()> {
        self.commit(|store| store.delete_invoice(id))
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn lock(&self) -> std::sync::MutexGuard<'_, Store> {
        self.inner.lock().expect("store mutex poisoned")
    }

    /// Applies `f` to a scratch copy, persists it, then swaps it in.
    fn commit<F, R>(&self, f: F) -> StoreResult<R>
    where
        F: FnOnce(&mut Store) -> R,
    {
        let mut guard = self.lock();
        let mut scratch = guard.clone();
        let result = f(&mut scratch);

        if let Err(err) = self.file.save(&scratch.to_snapshot()) {
            error!(path = ?self.file.path(), %err, "persist failed, mutation discarded");
            return Err(err);
        }

        *guard = scratch;
        Ok(result)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use quill_core::types::InvoiceStatus;
    use std::path::PathBuf;
    use uuid::Uuid;

    /// Unique throwaway path under the system temp dir.
    fn temp_store_path() -> PathBuf {
        std::env::temp_dir().join(format!("quill-state-test-{}.json", Uuid::new_v4()))
    }

    fn customer_draft() -> NewCustomer {
        NewCustomer {
            name: "Acme Corp".to_string(),
            email: "billing@acme.com".to_string(),
            phone: String::new(),
            address: String::new(),
            gst_id: String::new(),
        }
    }

    fn invoice_draft() -> NewInvoice {
        NewInvoice {
            customer_id: "c1".to_string(),
            customer_name: "Acme Corp".to_string(),
            items: vec![],
            status: InvoiceStatus::Draft,
            due_date: chrono::NaiveDate::from_ymd_opt(2025, 3, 15).unwrap(),
            notes: String::new(),
        }
    }

    #[test]
    fn test_open_on_missing_file_starts_empty() {
        let path = temp_store_path();
        let state = StoreState::open(&path).unwrap();

        let snapshot = state.snapshot();
        assert!(snapshot.customers.is_empty());
        assert_eq!(snapshot.next_invoice_num, 1);
        // opening alone must not create the file; only commands persist
        assert!(!path.exists());
    }

    #[test]
    fn test_every_command_persists_and_survives_reopen() {
        let path = temp_store_path();

        {
            let state = StoreState::open(&path).unwrap();
            state.add_customer(customer_draft()).unwrap();
            let invoice = state.add_invoice(invoice_draft()).unwrap();
            state
                .update_invoice(
                    &invoice.id,
                    InvoicePatch {
                        status: Some(InvoiceStatus::Sent),
                        ..Default::default()
                    },
                )
                .unwrap();
        }

        // a brand-new handle sees everything the first one wrote
        let reopened = StoreState::open(&path).unwrap();
        let snapshot = reopened.snapshot();
        assert_eq!(snapshot.customers.len(), 1);
        assert_eq!(snapshot.invoices.len(), 1);
        assert_eq!(snapshot.invoices[0].status, InvoiceStatus::Sent);
        assert_eq!(snapshot.next_invoice_num, 2);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_noop_delete_still_succeeds_and_changes_nothing() {
        let path = temp_store_path();
        let state = StoreState::open(&path).unwrap();
        state.add_customer(customer_draft()).unwrap();

        let before = state.snapshot();
        state.delete_customer("nonexistent-id").unwrap();
        assert_eq!(state.snapshot(), before);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_failed_persist_leaves_memory_at_last_known_good() {
        let path = temp_store_path();
        let state = StoreState::open(&path).unwrap();
        state.add_customer(customer_draft()).unwrap();
        let before = state.snapshot();

        // Replace the snapshot path's parent with a directory that does not
        // exist, by moving the file handle out from under the state: easiest
        // is a fresh state whose path is inside a missing directory.
        let broken = StoreState {
            inner: state.inner.clone(),
            file: SnapshotFile::new(
                std::env::temp_dir()
                    .join(format!("quill-missing-{}", Uuid::new_v4()))
                    .join("store.json"),
            ),
        };

        let err = broken.add_customer(customer_draft());
        assert!(err.is_err());
        // shared in-memory state is unchanged
        assert_eq!(state.snapshot(), before);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_clones_share_state() {
        let path = temp_store_path();
        let state = StoreState::open(&path).unwrap();
        let clone = state.clone();

        clone.add_customer(customer_draft()).unwrap();
        assert_eq!(state.snapshot().customers.len(), 1);

        std::fs::remove_file(&path).unwrap();
    }
}
