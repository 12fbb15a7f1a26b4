//! LCOV tracefile records
//!
//! ## LCOV Format
//!
//! ```text
//! TN:<test name>
//! SF:<source file>
//! FN:<line>,<function name>
//! FNDA:<execution count>,<function name>
//! FNF:<functions found>
//! FNH:<functions hit>
//! BRDA:<line>,<block>,<branch>,<taken>
//! BRF:<branches found>
//! BRH:<branches hit>
//! DA:<line>,<execution count>[,<checksum>]
//! LF:<lines found>
//! LH:<lines hit>
//! end_of_record
//! ```
//!
//! Reading a line never fails. Fields that cannot be read as numbers are
//! carried as `None` and left for the parser to treat as "not covered".

use crate::rate::{is_positive_count, parse_leading_int};

/// One line of a tracefile, classified by its tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Record<'a> {
    /// `SF:<path>`
    SourceFile(&'a str),
    /// `DA:<line>,<hits>[,<checksum>]`
    LineData {
        /// Line number, `None` when unreadable
        line: Option<u32>,
        /// Execution count, `None` when unreadable
        hits: Option<i64>,
    },
    /// `BRDA:<line>,<block>,<branch>,<taken>`
    BranchData {
        /// Line number, `None` when unreadable
        line: Option<u32>,
        /// Whether the branch was taken at least once
        taken: bool,
    },
    /// `BRF:<n>`
    BranchesFound(Option<u64>),
    /// `BRH:<n>`
    BranchesHit(Option<u64>),
    /// `FN:<line>,<name>`
    Function {
        /// Declared line, kept as written
        line: &'a str,
        /// Function name, commas included
        name: &'a str,
    },
    /// `FNDA:<hits>,<name>`
    FunctionData {
        /// Hit token, kept as written
        hits: &'a str,
        /// Function name, commas included
        name: &'a str,
    },
    /// `end_of_record`
    EndOfRecord,
    /// `TN`, `LF`, `LH`, `FNF`, `FNH`, blank lines and unknown tags
    Other,
}

impl<'a> Record<'a> {
    /// Classify one tracefile line.
    #[must_use]
    pub fn parse(raw: &'a str) -> Self {
        let line = raw.trim();
        if line == "end_of_record" {
            return Self::EndOfRecord;
        }
        // First colon only: `SF:C:/src/a.c` keeps its drive letter.
        let Some((tag, body)) = line.split_once(':') else {
            return Self::Other;
        };
        let body = body.trim();

        match tag {
            "SF" => Self::SourceFile(body),
            "DA" => {
                let mut fields = body.split(',');
                Self::LineData {
                    line: fields.next().and_then(line_number),
                    hits: fields.next().and_then(parse_leading_int),
                }
            }
            "BRDA" => {
                let mut fields = body.split(',');
                let line = fields.next().and_then(line_number);
                let taken = fields
                    .nth(2)
                    .is_some_and(|hits| hits != "-" && is_positive_count(hits));
                Self::BranchData { line, taken }
            }
            "BRF" => Self::BranchesFound(count(body)),
            "BRH" => Self::BranchesHit(count(body)),
            "FN" => {
                let (line, name) = split_name(body);
                Self::Function { line, name }
            }
            "FNDA" => {
                let (hits, name) = split_name(body);
                Self::FunctionData { hits, name }
            }
            _ => Self::Other,
        }
    }
}

/// Split `<first>,<name>`; the name keeps any further commas.
fn split_name(body: &str) -> (&str, &str) {
    body.split_once(',').unwrap_or((body, ""))
}

fn line_number(field: &str) -> Option<u32> {
    parse_leading_int(field).and_then(|n| u32::try_from(n).ok())
}

/// Non-negative counter; a negative `BRF`/`BRH` reads as unreadable.
fn count(field: &str) -> Option<u64> {
    parse_leading_int(field).and_then(|n| u64::try_from(n).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_file() {
        assert_eq!(
            Record::parse("SF:foo/file.ext"),
            Record::SourceFile("foo/file.ext")
        );
        assert_eq!(
            Record::parse("SF:C:/work/a.c\r"),
            Record::SourceFile("C:/work/a.c")
        );
    }

    #[test]
    fn test_line_data() {
        assert_eq!(
            Record::parse("DA:3,7"),
            Record::LineData {
                line: Some(3),
                hits: Some(7)
            }
        );
    }

    #[test]
    fn test_line_data_with_checksum() {
        assert_eq!(
            Record::parse("DA:1,1,dummychecksum"),
            Record::LineData {
                line: Some(1),
                hits: Some(1)
            }
        );
    }

    #[test]
    fn test_line_data_non_numeric_hits() {
        assert_eq!(
            Record::parse("DA:1,====="),
            Record::LineData {
                line: Some(1),
                hits: None
            }
        );
        assert_eq!(
            Record::parse("DA:9"),
            Record::LineData {
                line: Some(9),
                hits: None
            }
        );
    }

    #[test]
    fn test_branch_data() {
        assert_eq!(
            Record::parse("BRDA:1,1,1,1"),
            Record::BranchData {
                line: Some(1),
                taken: true
            }
        );
        assert_eq!(
            Record::parse("BRDA:1,1,2,0"),
            Record::BranchData {
                line: Some(1),
                taken: false
            }
        );
        assert_eq!(
            Record::parse("BRDA:4,0,0,-"),
            Record::BranchData {
                line: Some(4),
                taken: false
            }
        );
        assert_eq!(
            Record::parse("BRDA:4,0"),
            Record::BranchData {
                line: Some(4),
                taken: false
            }
        );
    }

    #[test]
    fn test_branch_summaries() {
        assert_eq!(Record::parse("BRF:12"), Record::BranchesFound(Some(12)));
        assert_eq!(Record::parse("BRH:5"), Record::BranchesHit(Some(5)));
        assert_eq!(Record::parse("BRF:x"), Record::BranchesFound(None));
        assert_eq!(Record::parse("BRF:-3"), Record::BranchesFound(None));
        assert_eq!(Record::parse("BRH:-3"), Record::BranchesHit(None));
    }

    #[test]
    fn test_function_names_keep_commas() {
        assert_eq!(
            Record::parse("FN:1,(anonymous_1<foo, bar>)"),
            Record::Function {
                line: "1",
                name: "(anonymous_1<foo, bar>)"
            }
        );
        assert_eq!(
            Record::parse("FNDA:3,(anonymous_1<foo, bar>)"),
            Record::FunctionData {
                hits: "3",
                name: "(anonymous_1<foo, bar>)"
            }
        );
    }

    #[test]
    fn test_end_of_record_and_others() {
        assert_eq!(Record::parse("end_of_record"), Record::EndOfRecord);
        assert_eq!(Record::parse("  end_of_record\r"), Record::EndOfRecord);
        assert_eq!(Record::parse("TN:"), Record::Other);
        assert_eq!(Record::parse("LF:10"), Record::Other);
        assert_eq!(Record::parse(""), Record::Other);
        assert_eq!(Record::parse("garbage"), Record::Other);
    }
}
