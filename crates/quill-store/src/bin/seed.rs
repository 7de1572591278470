//! # Seed Data Generator
//!
//! Writes a development snapshot with a handful of realistic customers,
//! products and invoices, so the frontend has something to render on a
//! fresh checkout.
//!
//! ## Usage
//! ```bash
//! # Write ./store.json (refuses to clobber an existing file)
//! cargo run -p quill-store --bin seed
//!
//! # Specify the snapshot path
//! cargo run -p quill-store --bin seed -- --out ./data/store.json
//!
//! # Overwrite an existing snapshot
//! cargo run -p quill-store --bin seed -- --force
//! ```
//!
//! ## Generated Data
//! - 3 customers (service agencies with GST ids)
//! - 4 products (web/design/hosting/SEO service lines)
//! - 4 invoices covering every status: paid, sent, overdue, draft
//! - Counter at 5, so the next created invoice is INV-005

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use tracing::{error, info};

use quill_core::types::{Customer, Invoice, InvoiceItem, InvoiceStatus, Product};
use quill_store::{SnapshotFile, StoreSnapshot};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

fn customers() -> Vec<Customer> {
    vec![
        Customer {
            id: "c1".to_string(),
            name: "Acme Corp".to_string(),
            email: "billing@acme.com".to_string(),
            phone: "+1-555-0101".to_string(),
            address: "123 Business Ave, NY 10001".to_string(),
            gst_id: "GST001".to_string(),
            created_at: date(2024, 1, 15),
        },
        Customer {
            id: "c2".to_string(),
            name: "TechStart Inc".to_string(),
            email: "accounts@techstart.io".to_string(),
            phone: "+1-555-0202".to_string(),
            address: "456 Innovation Blvd, SF 94105".to_string(),
            gst_id: "GST002".to_string(),
            created_at: date(2024, 2, 10),
        },
        Customer {
            id: "c3".to_string(),
            name: "Global Services LLC".to_string(),
            email: "finance@globalsvcs.com".to_string(),
            phone: "+1-555-0303".to_string(),
            address: "789 Enterprise Dr, Chicago 60601".to_string(),
            gst_id: "GST003".to_string(),
            created_at: date(2024, 3, 5),
        },
    ]
}

fn products() -> Vec<Product> {
    vec![
        Product {
            id: "p1".to_string(),
            name: "Web Development".to_string(),
            description: "Full-stack web development services".to_string(),
            price: dec!(150),
            tax_percent: dec!(18),
            sku: "SVC-WEB".to_string(),
        },
        Product {
            id: "p2".to_string(),
            name: "UI/UX Design".to_string(),
            description: "User interface and experience design".to_string(),
            price: dec!(120),
            tax_percent: dec!(18),
            sku: "SVC-UX".to_string(),
        },
        Product {
            id: "p3".to_string(),
            name: "Cloud Hosting".to_string(),
            description: "Monthly cloud hosting package".to_string(),
            price: dec!(49.99),
            tax_percent: dec!(18),
            sku: "SVC-HOST".to_string(),
        },
        Product {
            id: "p4".to_string(),
            name: "SEO Optimization".to_string(),
            description: "Search engine optimization package".to_string(),
            price: dec!(200),
            tax_percent: dec!(18),
            sku: "SVC-SEO".to_string(),
        },
    ]
}

fn item(
    product_id: &str,
    name: &str,
    quantity: i64,
    price: rust_decimal::Decimal,
    discount: rust_decimal::Decimal,
) -> InvoiceItem {
    InvoiceItem {
        product_id: product_id.to_string(),
        name: name.to_string(),
        quantity,
        price,
        discount,
        tax_percent: dec!(18),
    }
}

fn invoices() -> Vec<Invoice> {
    vec![
        Invoice {
            id: "inv1".to_string(),
            invoice_number: "INV-001".to_string(),
            customer_id: "c1".to_string(),
            customer_name: "Acme Corp".to_string(),
            items: vec![
                item("p1", "Web Development", 40, dec!(150), dec!(0)),
                item("p3", "Cloud Hosting", 12, dec!(49.99), dec!(10)),
            ],
            status: InvoiceStatus::Paid,
            due_date: date(2025, 1, 30),
            created_at: date(2025, 1, 1),
            notes: String::new(),
        },
        Invoice {
            id: "inv2".to_string(),
            invoice_number: "INV-002".to_string(),
            customer_id: "c2".to_string(),
            customer_name: "TechStart Inc".to_string(),
            items: vec![item("p2", "UI/UX Design", 20, dec!(120), dec!(5))],
            status: InvoiceStatus::Sent,
            due_date: date(2025, 2, 28),
            created_at: date(2025, 2, 5),
            notes: "Net 30".to_string(),
        },
        Invoice {
            id: "inv3".to_string(),
            invoice_number: "INV-003".to_string(),
            customer_id: "c3".to_string(),
            customer_name: "Global Services LLC".to_string(),
            items: vec![
                item("p4", "SEO Optimization", 3, dec!(200), dec!(0)),
                item("p1", "Web Development", 10, dec!(150), dec!(0)),
            ],
            status: InvoiceStatus::Overdue,
            due_date: date(2025, 1, 15),
            created_at: date(2024, 12, 15),
            notes: String::new(),
        },
        Invoice {
            id: "inv4".to_string(),
            invoice_number: "INV-004".to_string(),
            customer_id: "c1".to_string(),
            customer_name: "Acme Corp".to_string(),
            items: vec![item("p2", "UI/UX Design", 15, dec!(120), dec!(0))],
            status: InvoiceStatus::Draft,
            due_date: date(2025, 3, 15),
            created_at: date(2025, 2, 20),
            notes: "Draft pending review".to_string(),
        },
    ]
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut out = PathBuf::from("store.json");
    let mut force = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--out" => match args.next() {
                Some(path) => out = PathBuf::from(path),
                None => {
                    error!("--out requires a path");
                    return ExitCode::FAILURE;
                }
            },
            "--force" => force = true,
            other => {
                error!(arg = other, "unknown argument");
                return ExitCode::FAILURE;
            }
        }
    }

    if out.exists() && !force {
        error!(path = ?out, "snapshot already exists, pass --force to overwrite");
        return ExitCode::FAILURE;
    }

    let snapshot = StoreSnapshot {
        customers: customers(),
        products: products(),
        invoices: invoices(),
        // inv1..inv4 are taken; the next created invoice will be INV-005
        next_invoice_num: 5,
    };

    if let Err(err) = SnapshotFile::new(&out).save(&snapshot) {
        error!(%err, "seed failed");
        return ExitCode::FAILURE;
    }

    info!(
        path = ?out,
        customers = snapshot.customers.len(),
        products = snapshot.products.len(),
        invoices = snapshot.invoices.len(),
        "seeded snapshot"
    );
    ExitCode::SUCCESS
}
