//! LCOV tracefile reading
//!
//! [`Record`] classifies single lines, [`TracefileParser`] folds them into a
//! [`CoverageModel`](crate::CoverageModel).

mod parser;
mod paths;
mod record;

pub use parser::{parse_lcov, TracefileParser};
pub use paths::{display_name, join_normalized, package_name};
pub use record::Record;
