//! Conversion options

use regex::Regex;

use crate::error::{ConvertError, ConvertResult};

/// Default base directory and source label
pub const DEFAULT_BASE_DIR: &str = ".";

/// Options for [`parse_lcov`](crate::parse_lcov)
#[derive(Debug, Clone)]
pub struct ParseOptions {
    base_dir: String,
    excludes: Vec<Regex>,
    timestamp: Option<String>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_DIR)
    }
}

impl ParseOptions {
    /// Options resolving `SF` paths against `base_dir`
    #[must_use]
    pub fn new(base_dir: impl Into<String>) -> Self {
        Self {
            base_dir: base_dir.into(),
            excludes: Vec::new(),
            timestamp: None,
        }
    }

    /// Compile package exclusion patterns.
    ///
    /// A package is dropped when any pattern matches anywhere in its name.
    pub fn with_excludes<I, S>(mut self, patterns: I) -> ConvertResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for pattern in patterns {
            let pattern = pattern.as_ref();
            let regex = Regex::new(pattern).map_err(|source| ConvertError::InvalidExcludePattern {
                pattern: pattern.to_string(),
                source,
            })?;
            self.excludes.push(regex);
        }
        Ok(self)
    }

    /// Use a fixed timestamp instead of the current time
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    /// Base directory `SF` paths are joined onto
    #[must_use]
    pub fn base_dir(&self) -> &str {
        &self.base_dir
    }

    /// Fixed timestamp, if one was set
    #[must_use]
    pub fn timestamp(&self) -> Option<&str> {
        self.timestamp.as_deref()
    }

    /// Whether `package` matches any exclusion pattern
    #[must_use]
    pub fn is_excluded(&self, package: &str) -> bool {
        self.excludes.iter().any(|regex| regex.is_match(package))
    }
}

/// Options for [`generate_cobertura_xml`](crate::generate_cobertura_xml)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    /// Text of the `<source>` element
    pub source: String,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_DIR)
    }
}

impl ReportOptions {
    /// Report options labelling sources with `source`
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }
}
