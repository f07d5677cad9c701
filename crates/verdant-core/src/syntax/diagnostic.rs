//! Structured diagnostics attached to the syntax tree
//!
//! A [`JsonErrorInfo`] is position-relative while it lives in the green
//! layer: a terminal reports its errors given its own start, and every
//! composite shifts its children's errors by the child's offset. Only the
//! red projection and the root wrapper hold absolute offsets.
//!
//! Messages are not rendered here. Parameters carry their untyped textual
//! value and a separate formatter decides how to present them.

use serde::Serialize;
use std::fmt;
use std::ops::Range;

/// Kind of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum JsonErrorCode {
    // Structural
    MissingValue,
    MultipleValues,
    ExpectedEof,
    ControlSymbolInArray,
    ControlSymbolInObject,
    MissingSquareBracketClose,
    MissingCurlyClose,
    UnexpectedEofInArray,
    UnexpectedEofInObject,
    MissingPropertyKey,
    InvalidPropertyKey,
    MultiplePropertyKeySections,

    // Literal content
    UnterminatedString,
    UnrecognizedEscapeSequence,
    IllegalControlCharacterInString,
    UnterminatedMultiLineComment,
    InvalidNumber,
    UnrecognizedValue,

    // Characters the tokenizer does not recognize
    UnexpectedSymbol,

    // Reported depending on parse options
    CommentNotAllowed,
}

impl JsonErrorCode {
    /// Level a diagnostic of this kind is reported with unless overridden
    pub fn default_level(self) -> JsonErrorLevel {
        match self {
            JsonErrorCode::CommentNotAllowed => JsonErrorLevel::Warning,
            _ => JsonErrorLevel::Error,
        }
    }
}

impl fmt::Display for JsonErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Severity of a diagnostic
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonErrorLevel {
    #[default]
    Error,
    Warning,
    Message,
}

/// Untyped value interpolated into a diagnostic message
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct JsonErrorInfoParameter(String);

impl JsonErrorInfoParameter {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn untyped_value(&self) -> &str {
        &self.0
    }
}

impl From<char> for JsonErrorInfoParameter {
    fn from(value: char) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for JsonErrorInfoParameter {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for JsonErrorInfoParameter {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for JsonErrorInfoParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An immutable diagnostic record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonErrorInfo {
    error_code: JsonErrorCode,
    level: JsonErrorLevel,
    start: usize,
    length: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    parameters: Vec<JsonErrorInfoParameter>,
}

impl JsonErrorInfo {
    pub fn new(error_code: JsonErrorCode, start: usize, length: usize) -> Self {
        Self {
            error_code,
            level: error_code.default_level(),
            start,
            length,
            parameters: Vec::new(),
        }
    }

    pub fn with_level(mut self, level: JsonErrorLevel) -> Self {
        self.level = level;
        self
    }

    pub fn with_parameters<P>(mut self, parameters: impl IntoIterator<Item = P>) -> Self
    where
        P: Into<JsonErrorInfoParameter>,
    {
        self.parameters = parameters.into_iter().map(Into::into).collect();
        self
    }

    pub fn error_code(&self) -> JsonErrorCode {
        self.error_code
    }

    pub fn level(&self) -> JsonErrorLevel {
        self.level
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn end(&self) -> usize {
        self.start + self.length
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }

    pub fn parameters(&self) -> &[JsonErrorInfoParameter] {
        &self.parameters
    }

    /// Copy of this diagnostic shifted right by `offset`
    pub fn translate(&self, offset: usize) -> Self {
        Self {
            start: self.start + offset,
            ..self.clone()
        }
    }
}

impl fmt::Display for JsonErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}..{})", self.error_code, self.start, self.end())?;
        if !self.parameters.is_empty() {
            let params: Vec<&str> = self.parameters.iter().map(|p| p.untyped_value()).collect();
            write!(f, " [{}]", params.join(", "))?;
        }
        Ok(())
    }
}

/// Sort diagnostics into source order, keeping insertion order for ties
pub(crate) fn sort_in_source_order(errors: &mut [JsonErrorInfo]) {
    errors.sort_by_key(|e| e.start);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_keeps_everything_but_start() {
        let error = JsonErrorInfo::new(JsonErrorCode::UnrecognizedEscapeSequence, 3, 2)
            .with_parameters(["\\x"]);
        let moved = error.translate(10);

        assert_eq!(moved.start(), 13);
        assert_eq!(moved.length(), 2);
        assert_eq!(moved.error_code(), error.error_code());
        assert_eq!(moved.parameters(), error.parameters());
    }

    #[test]
    fn test_default_levels() {
        assert_eq!(
            JsonErrorInfo::new(JsonErrorCode::MissingValue, 0, 0).level(),
            JsonErrorLevel::Error
        );
        assert_eq!(
            JsonErrorInfo::new(JsonErrorCode::CommentNotAllowed, 0, 2).level(),
            JsonErrorLevel::Warning
        );
    }

    #[test]
    fn test_serialize() {
        let error = JsonErrorInfo::new(JsonErrorCode::UnexpectedSymbol, 4, 1).with_parameters(['*']);
        let json = serde_json::to_string(&error).unwrap();
        assert_eq!(
            json,
            r#"{"errorCode":"UnexpectedSymbol","level":"error","start":4,"length":1,"parameters":["*"]}"#
        );
    }

    #[test]
    fn test_display() {
        let error = JsonErrorInfo::new(JsonErrorCode::UnterminatedString, 2, 5);
        assert_eq!(error.to_string(), "UnterminatedString(2..7)");
    }

    #[test]
    fn test_sort_is_stable() {
        let mut errors = vec![
            JsonErrorInfo::new(JsonErrorCode::MissingValue, 5, 1),
            JsonErrorInfo::new(JsonErrorCode::UnexpectedSymbol, 1, 1),
            JsonErrorInfo::new(JsonErrorCode::MultipleValues, 5, 1),
        ];
        sort_in_source_order(&mut errors);
        let codes: Vec<_> = errors.iter().map(|e| e.error_code()).collect();
        assert_eq!(
            codes,
            vec![
                JsonErrorCode::UnexpectedSymbol,
                JsonErrorCode::MissingValue,
                JsonErrorCode::MultipleValues
            ]
        );
    }
}
