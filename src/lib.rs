//! # bookmend
//!
//! Maintenance passes for a children's-book catalog: a flat JSON file of
//! records, enriched and repaired one pass at a time.
//!
//! ## Architecture
//!
//! - **Catalog store** (`catalog`): whole-file load, wholesale pretty-JSON save
//! - **Resolution chain** (`resolve`): ordered sources, first-non-absent wins,
//!   per-step failures swallowed
//! - **Description sources** (`describe`): manual table → primary provider →
//!   secondary provider → tag-template fallback
//! - **Cover maintenance** (`covers`): placeholder pruning, integrity checks,
//!   re-acquisition from two providers
//! - **Audit** (`audit`): read-only structural checks
//!
//! Everything runs sequentially, one record at a time, with bounded request
//! timeouts and cooperative rate-limit pauses. A pass either completes and
//! saves once, or persists nothing.
//!
//! ## Library usage
//!
//! ```no_run
//! use bookmend::catalog::BookCatalog;
//! use bookmend::config::MaintenanceConfig;
//! use bookmend::describe;
//!
//! let config = MaintenanceConfig::default();
//! let mut catalog = BookCatalog::load(&config.books_path).unwrap();
//! let sources = describe::standard_chain(&config);
//! let report = describe::run(&mut catalog, &config, &sources, |_, _, _, _| {});
//! println!("resolved {} records", report.resolved);
//! catalog.save().unwrap();
//! ```

pub mod audit;
pub mod catalog;
pub mod config;
pub mod covers;
pub mod describe;
pub mod error;
pub mod model;
pub mod normalize;
pub mod resolve;
