//! Parser options
//!
//! The syntax tree itself has no configuration: green nodes are the same no
//! matter how they were produced. Options only steer which diagnostics the
//! reference parser reports.
//!
//! ## Example Configuration
//!
//! ```json
//! {
//!   "allowComments": true,
//!   "allowTrailingCommas": false,
//!   "maxDepth": 128
//! }
//! ```

mod loader;

pub use loader::ConfigLoader;

use crate::result::Result;
use serde::{Deserialize, Serialize};

/// Options for [`crate::syntax::parse_with_options`]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ParseOptions {
    /// When false, every comment is reported with a `CommentNotAllowed` warning
    pub allow_comments: bool,

    /// When true, an empty slot after the last comma of a list or map is not
    /// reported as a missing value
    pub allow_trailing_commas: bool,

    /// Lists and maps nested deeper than this are not opened: the bracket
    /// or brace becomes an unknown symbol, keeping the tree depth bounded
    pub max_depth: usize,
}

/// Nesting limit of [`ParseOptions::default`]
pub const DEFAULT_MAX_DEPTH: usize = 128;

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            allow_comments: true,
            allow_trailing_commas: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParseOptions {
    /// Options for plain RFC 8259 JSON
    pub fn strict() -> Self {
        Self {
            allow_comments: false,
            allow_trailing_commas: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Options accepting comments and trailing commas
    pub fn lenient() -> Self {
        Self {
            allow_comments: true,
            allow_trailing_commas: true,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Deserialize options from a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ParseOptions::default();
        assert!(options.allow_comments);
        assert!(!options.allow_trailing_commas);
        assert_eq!(options.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_from_json_str_partial() {
        let options = ParseOptions::from_json_str(r#"{ "allowTrailingCommas": true }"#).unwrap();
        assert!(options.allow_comments);
        assert!(options.allow_trailing_commas);
    }

    #[test]
    fn test_from_json_str_rejects_unknown_fields() {
        let result = ParseOptions::from_json_str(r#"{ "allowSingleQuotes": true }"#);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::Config);
        assert!(err.to_string().contains("Invalid parse options"));
    }

    #[test]
    fn test_round_trip_through_serde() {
        let json = serde_json::to_string(&ParseOptions::strict()).unwrap();
        assert_eq!(
            json,
            r#"{"allowComments":false,"allowTrailingCommas":false,"maxDepth":128}"#
        );
        assert_eq!(ParseOptions::from_json_str(&json).unwrap(), ParseOptions::strict());
    }
}
