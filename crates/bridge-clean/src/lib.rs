//! `bridge-clean` — turn raw inventory rows into typed [`Bridge`] records.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                      |
//! |-------------|---------------------------------------------------------------|
//! | [`spans`]   | `clean_span_data` — the `Total=… (1)=…;` micro-parser         |
//! | [`history`] | `clean_bci_data` — score tail → `ConditionHistory`            |
//! | [`record`]  | column layout, `clean_length_data`, `clean_record`, `clean_data` |
//! | [`loader`]  | `load_bridges_csv`, `load_bridges_reader`                     |
//! | [`error`]   | `CleanError`, `CleanResult<T>`                                |
//!
//! Cleaning runs once at load time.  It assigns ids `1, 2, 3, …` in row
//! order, ignoring whatever id text the source rows carried.
//!
//! [`Bridge`]: bridge_core::Bridge

pub mod error;
pub mod history;
pub mod loader;
pub mod record;
pub mod spans;


pub use error::{CleanError, CleanResult};
pub use history::clean_bci_data;
pub use loader::{load_bridges_csv, load_bridges_reader};
pub use record::{clean_data, clean_length_data, clean_record};
pub use spans::clean_span_data;
