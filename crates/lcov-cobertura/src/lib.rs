//! lcov-cobertura: LCOV tracefiles to Cobertura XML
//!
//! Converts the line-oriented LCOV format written by gcov, c8, nyc, grcov
//! and friends into the Cobertura XML report CI dashboards read.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   parse_lcov    ┌───────────────┐  generate_cobertura_xml  ┌──────────────┐
//! │ LCOV text    │ ──────────────► │ CoverageModel │ ───────────────────────► │ Cobertura XML│
//! └──────────────┘                 └───────────────┘                          └──────────────┘
//! ```
//!
//! Both stages are pure: no I/O, no shared state, no failure modes. Malformed
//! tracefile lines degrade to "not covered" instead of aborting the run.
//!
//! # Example
//!
//! ```
//! use lcov_cobertura::{generate_cobertura_xml, parse_lcov, ParseOptions, ReportOptions};
//!
//! let lcov = "SF:foo/file.ext\nDA:1,1\nDA:2,0\nend_of_record\n";
//! let model = parse_lcov(lcov, &ParseOptions::default());
//! assert_eq!(model.packages["foo"].line_rate, "0.5");
//!
//! let xml = generate_cobertura_xml(&model, &ReportOptions::default());
//! assert!(xml.contains(r#"<package line-rate="0.5" branch-rate="0.0" name="foo" complexity="0">"#));
//! ```

#![warn(missing_docs)]

pub mod cobertura;
mod error;
pub mod lcov;
mod model;
mod options;
mod rate;

pub use cobertura::{generate_cobertura_xml, CoberturaFormatter, COBERTURA_VERSION};
pub use error::{ConvertError, ConvertResult};
pub use lcov::{parse_lcov, Record, TracefileParser};
pub use model::{Class, CoverageModel, LineRecord, MethodRecord, Package, Totals};
pub use options::{ParseOptions, ReportOptions, DEFAULT_BASE_DIR};
pub use rate::{format_rate, is_positive_count, parse_leading_int};
