//! # quill-store: Domain Store for Quill Invoice
//!
//! This crate is the single source of truth for customers, products and
//! invoices, plus the invoice-number counter. It mediates all mutation and
//! owns the one piece of I/O in the system: the persisted snapshot blob.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Quill Invoice Data Flow                            │
//! │                                                                         │
//! │  Frontend form submit (already validated via quill-core)               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    quill-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │  StoreState   │    │     Store     │    │ SnapshotFile │  │   │
//! │  │   │  (state.rs)   │    │  (store.rs)   │    │ (snapshot.rs)│  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ Arc<Mutex<_>> │───►│ collections + │───►│ JSON blob,   │  │   │
//! │  │   │ commit-then-  │    │ counter, add/ │    │ full rewrite │  │   │
//! │  │   │ swap          │    │ update/delete │    │ per save     │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ~/.local/share/quill/store.json   (one document, no migrations)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - In-memory collections and the command/query surface
//! - [`snapshot`] - The persisted blob shape and the JSON file codec
//! - [`state`] - Shared handle serializing commands behind one mutex
//! - [`error`] - Persistence error types
//!
//! ## Failure Semantics
//!
//! - Commands on a missing id are silent no-ops, never errors.
//! - Validation is NOT performed here; callers use `quill-core::validation`
//!   before issuing a command.
//! - Persistence failure is the only error a command can return, and it
//!   leaves the in-memory collections at their last-known-good state.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quill_core::types::NewCustomer;
//! use quill_store::StoreState;
//!
//! let store = StoreState::open("store.json")?;
//! let customer = store.add_customer(NewCustomer {
//!     name: "Acme Corp".to_string(),
//!     email: "billing@acme.com".to_string(),
//!     phone: String::new(),
//!     address: String::new(),
//!     gst_id: String::new(),
//! })?;
//! println!("created {}", customer.id);
//! # Ok::<(), quill_store::StoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod snapshot;
pub mod state;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use snapshot::{SnapshotFile, StoreSnapshot};
pub use state::StoreState;
pub use store::Store;
