//! Core domain types for tabular PII detection and de-identification.
//!
//! This crate defines the types shared between the detection engine and
//! its hosts: the closed [`PiiType`] taxonomy, the in-memory [`Table`]
//! model, and the report-facing [`Detection`] and [`ScanSummary`]
//! records. It contains no detection logic.

pub mod detection;
pub mod pii;
pub mod table;

pub use detection::{Detection, ScanSummary};
pub use pii::PiiType;
pub use table::{Cell, Table};
