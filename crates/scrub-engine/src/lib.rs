//! Detection and redaction engine for Indian PII in tabular data.
//!
//! The engine scans every cell of a [`Table`], classifies values
//! against a fixed set of recognizers (Aadhaar, PAN, mobile numbers,
//! email, IFSC codes, bank accounts, payment cards), and produces an
//! ordered detection list, a de-identified copy of the table, and an
//! aggregate summary.
//!
//! ```
//! use scrub_engine::{ScrubConfig, Scrubber, Table};
//!
//! let table = Table::new(
//!     vec!["phone".into()],
//!     vec![vec!["9876543210".into()]],
//! );
//! let scrubber = Scrubber::new(ScrubConfig::new(0.5).unwrap());
//! let output = scrubber.scrub(&table);
//! assert_eq!(output.detections.len(), 1);
//! assert_eq!(output.deidentified.value_at(0, 0), Some("XXXXXX3210"));
//! ```
//!
//! A scan is a pure function of (table, config): there is no shared
//! mutable state, so one [`Scrubber`] may be used from multiple
//! threads concurrently.

pub mod aggregator;
pub mod config;
pub mod error;
pub mod recognizer;
pub mod redactor;
pub mod scanner;
pub mod scrubber;
pub mod validators;

pub use aggregator::summarize;
pub use config::ScrubConfig;
pub use error::{EngineError, EngineResult};
pub use recognizer::{Recognizer, ScoreTable, Scores};
pub use redactor::{MaskPolicy, Redactor};
pub use scanner::Scanner;
pub use scrubber::{ScrubOutput, Scrubber};

pub use scrub_core::{Cell, Detection, PiiType, ScanSummary, Table};
