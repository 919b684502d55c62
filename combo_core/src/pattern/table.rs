//! The registered pattern table and its declarative source.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{PatternCode, MAX_WINDOW};

/// Default window length: the three most recent kills.
pub const DEFAULT_WINDOW: usize = 3;

/// Configuration errors rejected when building a table at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("window length {0} is out of range (1..=9); ranks are decimal digits")]
    WindowOutOfRange(usize),

    #[error("pattern '{name}' has length 0; a pattern must cover at least one kill")]
    ZeroLengthPattern { name: String },

    #[error("pattern '{name}' has length {length}, but the window holds at most {window}")]
    PatternTooLong {
        name: String,
        length: usize,
        window: usize,
    },

    #[error("pattern '{name}' registers code {code} under length {length}, but the code has {digits} digits")]
    CodeLengthMismatch {
        name: String,
        code: u32,
        length: usize,
        digits: usize,
    },

    #[error("pattern '{name}' has code {code} with a zero digit; ranks start at 1")]
    ZeroDigit { name: String, code: u32 },

    #[error("failed to parse pattern table: {0}")]
    Parse(#[from] toml::de::Error),
}

/// One registered pattern: a code and the name announced when it matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternEntry {
    pub code: PatternCode,
    pub name: String,
}

impl PatternEntry {
    pub fn new(code: u32, name: impl Into<String>) -> Self {
        Self {
            code: PatternCode(code),
            name: name.into(),
        }
    }
}

/// Declarative form of one pattern registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternSpec {
    pub length: usize,
    pub code: u32,
    pub name: String,
}

/// Declarative form of a whole table, as read from TOML or JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSpec {
    /// How many recent kills the window holds.
    #[serde(default = "default_window")]
    pub window: usize,
    pub patterns: Vec<PatternSpec>,
}

fn default_window() -> usize {
    DEFAULT_WINDOW
}

impl Default for TableSpec {
    /// The registrations the game ships with.
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            patterns: vec![
                PatternSpec {
                    length: 2,
                    code: 11,
                    name: "Pair".into(),
                },
                PatternSpec {
                    length: 3,
                    code: 121,
                    name: "Sandwich".into(),
                },
                PatternSpec {
                    length: 3,
                    code: 111,
                    name: "Three of a kind".into(),
                },
            ],
        }
    }
}

/// Registered patterns bucketed by length.
///
/// Built once at startup, immutable for the rest of the session, and freely
/// shared read-only across sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternTable {
    /// `buckets[length]` holds the patterns of that length, in registration
    /// order; bucket 0 stays empty.
    buckets: Vec<Vec<PatternEntry>>,
    window: usize,
}

impl PatternTable {
    /// Validate a spec and build the runtime table.
    pub fn from_spec(spec: &TableSpec) -> Result<Self, ConfigError> {
        if spec.window == 0 || spec.window > MAX_WINDOW {
            return Err(ConfigError::WindowOutOfRange(spec.window));
        }

        let mut buckets: Vec<Vec<PatternEntry>> = vec![Vec::new(); spec.window + 1];
        for pattern in &spec.patterns {
            let code = PatternCode(pattern.code);
            if pattern.length == 0 {
                return Err(ConfigError::ZeroLengthPattern {
                    name: pattern.name.clone(),
                });
            }
            if pattern.length > spec.window {
                return Err(ConfigError::PatternTooLong {
                    name: pattern.name.clone(),
                    length: pattern.length,
                    window: spec.window,
                });
            }
            let digits = code.digit_count();
            if digits != pattern.length {
                return Err(ConfigError::CodeLengthMismatch {
                    name: pattern.name.clone(),
                    code: pattern.code,
                    length: pattern.length,
                    digits,
                });
            }
            if has_zero_digit(pattern.code) {
                return Err(ConfigError::ZeroDigit {
                    name: pattern.name.clone(),
                    code: pattern.code,
                });
            }
            if !code.is_producible() {
                log::warn!(
                    "pattern '{}' registers code {} that no kill window can produce",
                    pattern.name,
                    pattern.code
                );
            }

            let bucket = &mut buckets[pattern.length];
            if bucket.iter().any(|entry| entry.code == code) {
                log::warn!(
                    "duplicate code {} among length-{} patterns; '{}' will never match",
                    pattern.code,
                    pattern.length,
                    pattern.name
                );
            }
            bucket.push(PatternEntry {
                code,
                name: pattern.name.clone(),
            });
        }

        Ok(Self {
            buckets,
            window: spec.window,
        })
    }

    /// Parse and validate a table from its TOML source.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let spec: TableSpec = toml::from_str(source)?;
        Self::from_spec(&spec)
    }

    /// The table the game ships with: Pair, Sandwich, Three of a kind.
    pub fn standard() -> Self {
        let mut buckets = vec![Vec::new(); DEFAULT_WINDOW + 1];
        buckets[2].push(PatternEntry::new(11, "Pair"));
        buckets[3].push(PatternEntry::new(121, "Sandwich"));
        buckets[3].push(PatternEntry::new(111, "Three of a kind"));
        Self {
            buckets,
            window: DEFAULT_WINDOW,
        }
    }

    /// Patterns registered under the given length, in registration order.
    pub fn bucket(&self, length: usize) -> &[PatternEntry] {
        self.buckets
            .get(length)
            .map(|bucket| bucket.as_slice())
            .unwrap_or(&[])
    }

    /// The window length this table was built for.
    pub fn window(&self) -> usize {
        self.window
    }

    /// Total number of registered patterns.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(|bucket| bucket.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(|bucket| bucket.is_empty())
    }
}

fn has_zero_digit(code: u32) -> bool {
    let mut rest = code;
    while rest > 0 {
        if rest % 10 == 0 {
            return true;
        }
        rest /= 10;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table() {
        let table = PatternTable::standard();
        assert_eq!(table.window(), 3);
        assert_eq!(table.len(), 3);
        assert!(!table.is_empty());

        assert_eq!(table.bucket(2), &[PatternEntry::new(11, "Pair")]);
        assert_eq!(
            table.bucket(3),
            &[
                PatternEntry::new(121, "Sandwich"),
                PatternEntry::new(111, "Three of a kind"),
            ]
        );
        // No patterns of length 0 or 1 exist, and out-of-range lengths are
        // simply empty.
        assert!(table.bucket(0).is_empty());
        assert!(table.bucket(1).is_empty());
        assert!(table.bucket(9).is_empty());
    }

    #[test]
    fn test_default_spec_builds_the_standard_table() {
        let table = PatternTable::from_spec(&TableSpec::default()).unwrap();
        assert_eq!(table.bucket(2), PatternTable::standard().bucket(2));
        assert_eq!(table.bucket(3), PatternTable::standard().bucket(3));
    }

    #[test]
    fn test_table_from_toml() {
        let source = r#"
            window = 3

            [[patterns]]
            length = 2
            code = 11
            name = "Pair"

            [[patterns]]
            length = 3
            code = 121
            name = "Sandwich"
        "#;

        let table = PatternTable::from_toml_str(source).unwrap();
        assert_eq!(table.window(), 3);
        assert_eq!(table.len(), 2);
        assert_eq!(table.bucket(2)[0].name, "Pair");
    }

    #[test]
    fn test_table_from_json_spec() {
        // The spec is plain serde data, so hosts with JSON config can feed
        // it through serde_json just as well.
        let spec: TableSpec = serde_json::from_str(
            r#"{"window": 3, "patterns": [{"length": 2, "code": 11, "name": "Pair"}]}"#,
        )
        .unwrap();

        let table = PatternTable::from_spec(&spec).unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_window_out_of_range() {
        let mut spec = TableSpec::default();
        spec.window = 0;
        assert!(matches!(
            PatternTable::from_spec(&spec),
            Err(ConfigError::WindowOutOfRange(0))
        ));

        spec.window = 10;
        assert!(matches!(
            PatternTable::from_spec(&spec),
            Err(ConfigError::WindowOutOfRange(10))
        ));
    }

    #[test]
    fn test_pattern_longer_than_window() {
        let spec = TableSpec {
            window: 3,
            patterns: vec![PatternSpec {
                length: 4,
                code: 1111,
                name: "Quad".into(),
            }],
        };
        assert!(matches!(
            PatternTable::from_spec(&spec),
            Err(ConfigError::PatternTooLong { length: 4, .. })
        ));
    }

    #[test]
    fn test_zero_length_pattern() {
        let spec = TableSpec {
            window: 3,
            patterns: vec![PatternSpec {
                length: 0,
                code: 1,
                name: "Nothing".into(),
            }],
        };
        assert!(matches!(
            PatternTable::from_spec(&spec),
            Err(ConfigError::ZeroLengthPattern { .. })
        ));
    }

    #[test]
    fn test_code_length_mismatch() {
        let spec = TableSpec {
            window: 3,
            patterns: vec![PatternSpec {
                length: 3,
                code: 11,
                name: "Short".into(),
            }],
        };
        assert!(matches!(
            PatternTable::from_spec(&spec),
            Err(ConfigError::CodeLengthMismatch { digits: 2, .. })
        ));
    }

    #[test]
    fn test_zero_digit_rejected() {
        let spec = TableSpec {
            window: 3,
            patterns: vec![PatternSpec {
                length: 3,
                code: 101,
                name: "Holey".into(),
            }],
        };
        assert!(matches!(
            PatternTable::from_spec(&spec),
            Err(ConfigError::ZeroDigit { code: 101, .. })
        ));
    }

    #[test]
    fn test_duplicate_codes_keep_registration_order() {
        // Precedence between same-code registrations is first-wins; the
        // table keeps both and warns.
        let spec = TableSpec {
            window: 3,
            patterns: vec![
                PatternSpec {
                    length: 2,
                    code: 11,
                    name: "Pair".into(),
                },
                PatternSpec {
                    length: 2,
                    code: 11,
                    name: "Echo".into(),
                },
            ],
        };

        let table = PatternTable::from_spec(&spec).unwrap();
        assert_eq!(table.bucket(2)[0].name, "Pair");
        assert_eq!(table.bucket(2)[1].name, "Echo");
    }

    #[test]
    fn test_toml_parse_error() {
        assert!(matches!(
            PatternTable::from_toml_str("patterns = 5"),
            Err(ConfigError::Parse(_))
        ));
    }
}
