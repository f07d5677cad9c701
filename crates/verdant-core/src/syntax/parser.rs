//! Error-tolerant parser building a green tree from symbols
//!
//! Parsing never fails. Every symbol of the input lands somewhere in the
//! tree, and every structural problem becomes a diagnostic with an absolute
//! position. Recovery rules:
//!
//! - A value delimiter ends the innermost value slot whose structure
//!   accepts it.
//! - A closing bracket or brace the current structure does not accept
//!   closes it if an enclosing structure does; the current structure is
//!   then reported as missing its own closer.
//! - A delimiter nothing accepts is kept as background.
//! - A slot with more than one value keeps all of them.
//! - An opening bracket or brace past [`ParseOptions::max_depth`] is kept
//!   as an unknown symbol instead of opening a structure.

use super::diagnostic::{JsonErrorCode, JsonErrorInfo};
use super::green::{
    GreenBackgroundList, GreenKeyValue, GreenList, GreenMap, GreenMultiValue, GreenRoot,
    GreenSymbol, GreenValue, GreenValueWithBackground,
};
use super::kind::SymbolKind;
use super::lexer::tokenize;
use super::red::JsonRootSyntax;
use crate::config::ParseOptions;
use std::sync::Arc;
use tracing::{debug, trace};

/// Parse `source` with default options
pub fn parse(source: &str) -> JsonRootSyntax {
    parse_with_options(source, &ParseOptions::default())
}

pub fn parse_with_options(source: &str, options: &ParseOptions) -> JsonRootSyntax {
    JsonRootSyntax::new(parse_symbols(tokenize(source), options))
}

/// Build a green tree from an already tokenized document
pub fn parse_symbols(symbols: Vec<GreenSymbol>, options: &ParseOptions) -> Arc<GreenRoot> {
    debug!(symbols = symbols.len(), "parsing document");

    let mut parser = Parser::new(symbols, options);
    let syntax = parser.parse_root();
    let root = GreenRoot::new(syntax, parser.errors);

    debug!(
        length = root.length(),
        errors = root.errors().len(),
        "parsed document"
    );
    Arc::new(root)
}

/// Structures a value slot can be nested in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Structure {
    List,
    Map,
}

impl Structure {
    /// Whether a delimiter ends a value slot directly inside this structure
    fn accepts(self, kind: SymbolKind) -> bool {
        match self {
            Structure::List => matches!(kind, SymbolKind::Comma | SymbolKind::SquareBracketClose),
            Structure::Map => matches!(
                kind,
                SymbolKind::Colon | SymbolKind::Comma | SymbolKind::CurlyClose
            ),
        }
    }
}

struct Parser<'a> {
    symbols: Vec<GreenSymbol>,
    pos: usize,
    /// Absolute offset of the current symbol
    offset: usize,
    /// Open structures, innermost last
    open: Vec<Structure>,
    options: &'a ParseOptions,
    errors: Vec<JsonErrorInfo>,
}

impl<'a> Parser<'a> {
    fn new(symbols: Vec<GreenSymbol>, options: &'a ParseOptions) -> Self {
        Self {
            symbols,
            pos: 0,
            offset: 0,
            open: Vec::new(),
            options,
            errors: Vec::new(),
        }
    }

    fn current(&self) -> Option<&GreenSymbol> {
        self.symbols.get(self.pos)
    }

    fn current_kind(&self) -> Option<SymbolKind> {
        self.current().map(GreenSymbol::kind)
    }

    /// Length of the symbol that ends the current slot, 0 at the end of input
    fn current_length(&self) -> usize {
        self.current().map_or(0, GreenSymbol::length)
    }

    fn bump(&mut self) -> GreenSymbol {
        let symbol = self.symbols[self.pos].clone();
        self.pos += 1;
        self.offset += symbol.length();
        symbol
    }

    fn error(&mut self, error_code: JsonErrorCode, start: usize, length: usize) {
        trace!(%error_code, start, length, "diagnostic");
        self.errors.push(JsonErrorInfo::new(error_code, start, length));
    }

    /// Report a missing value or key at the symbol that ends the slot
    fn error_at_current(&mut self, error_code: JsonErrorCode) {
        self.error(error_code, self.offset, self.current_length());
    }

    /// Whether a delimiter ends the current slot rather than being stray
    fn is_claimed(&self, kind: SymbolKind) -> bool {
        match kind {
            SymbolKind::SquareBracketClose | SymbolKind::CurlyClose => {
                self.open.iter().any(|structure| structure.accepts(kind))
            }
            _ => self.open.last().is_some_and(|structure| structure.accepts(kind)),
        }
    }

    fn parse_root(&mut self) -> Arc<GreenMultiValue> {
        let syntax = self.parse_multi_value();
        debug_assert_eq!(self.pos, self.symbols.len(), "root slot must consume all input");
        syntax
    }

    /// Background symbols and stray delimiters up to the next value or
    /// claimed delimiter
    fn parse_background(&mut self) -> Arc<GreenBackgroundList> {
        let mut background = Vec::new();

        while let Some(kind) = self.current_kind() {
            if kind.is_background() {
                if kind.is_comment() && !self.options.allow_comments {
                    self.error_at_current(JsonErrorCode::CommentNotAllowed);
                }
                background.push(self.bump());
            } else if kind.is_value_delimiter() && !self.is_claimed(kind) {
                let start = self.offset;
                let delimiter = self.bump();
                self.report_stray_delimiter(&delimiter, start);
                background.push(GreenSymbol::unexpected_value_delimiter(delimiter));
            } else {
                break;
            }
        }

        GreenBackgroundList::create(background)
    }

    fn report_stray_delimiter(&mut self, delimiter: &GreenSymbol, start: usize) {
        let error_code = match self.open.last() {
            None => JsonErrorCode::UnexpectedSymbol,
            Some(Structure::List) => JsonErrorCode::ControlSymbolInArray,
            Some(Structure::Map) => JsonErrorCode::ControlSymbolInObject,
        };
        trace!(%error_code, start, "keeping stray delimiter as background");

        let mut error = JsonErrorInfo::new(error_code, start, delimiter.length());
        if let Some(character) = punctuation_character(delimiter) {
            error = error.with_parameters([character]);
        }
        self.errors.push(error);
    }

    /// One value slot: values with their leading background, then the
    /// background in front of the delimiter that ends the slot
    fn parse_multi_value(&mut self) -> Arc<GreenMultiValue> {
        let mut value_nodes = Vec::new();

        loop {
            let background = self.parse_background();

            if !self.current_kind().is_some_and(SymbolKind::is_value_starter) {
                let slot = if value_nodes.is_empty() {
                    GreenMultiValue::missing(background)
                } else {
                    GreenMultiValue::new(value_nodes, background)
                };
                return Arc::new(slot);
            }

            let start = self.offset;
            let content = self.parse_value();
            if !value_nodes.is_empty() {
                let error_code = if self.open.is_empty() {
                    JsonErrorCode::ExpectedEof
                } else {
                    JsonErrorCode::MultipleValues
                };
                self.error(error_code, start, self.offset - start);
            }
            value_nodes.push(Arc::new(GreenValueWithBackground::new(background, content)));
        }
    }

    fn parse_value(&mut self) -> GreenValue {
        let at_max_depth = self.open.len() >= self.options.max_depth;
        let start = self.offset;

        match self.bump() {
            GreenSymbol::SquareBracketOpen(_) if !at_max_depth => {
                GreenValue::List(Arc::new(self.parse_list()))
            }
            GreenSymbol::CurlyOpen(_) if !at_max_depth => {
                GreenValue::Map(Arc::new(self.parse_map()))
            }
            GreenSymbol::SquareBracketOpen(node) | GreenSymbol::CurlyOpen(node) => {
                trace!(start, depth = self.open.len(), "nesting limit reached");
                let demoted = GreenSymbol::unknown_symbol(node.character());
                match GreenValue::from_symbol(&demoted) {
                    Some(value) => value,
                    None => unreachable!("unknown symbols are values"),
                }
            }
            symbol => match GreenValue::from_symbol(&symbol) {
                Some(value) => value,
                None => unreachable!("{} does not start a value", symbol.kind()),
            },
        }
    }

    /// Whether an empty item or key-value slot goes unreported
    fn is_exempt_empty_slot(&self, is_first: bool) -> bool {
        if self.current_kind() == Some(SymbolKind::Comma) {
            return false;
        }
        // `[]` and `{}`, or a trailing comma when those are allowed
        is_first || self.options.allow_trailing_commas
    }

    /// List content after `[`
    fn parse_list(&mut self) -> GreenList {
        self.open.push(Structure::List);
        let mut list_items = Vec::new();

        let missing_close = loop {
            let item = self.parse_multi_value();
            if item.is_missing() && !self.is_exempt_empty_slot(list_items.is_empty()) {
                self.error_at_current(JsonErrorCode::MissingValue);
            }
            list_items.push(item);

            match self.current_kind() {
                Some(SymbolKind::Comma) => {
                    self.bump();
                }
                Some(SymbolKind::SquareBracketClose) => {
                    self.bump();
                    break false;
                }
                Some(_) => {
                    self.error_at_current(JsonErrorCode::MissingSquareBracketClose);
                    break true;
                }
                None => {
                    self.error(JsonErrorCode::UnexpectedEofInArray, self.offset, 0);
                    break true;
                }
            }
        };

        self.open.pop();
        GreenList::new(list_items, missing_close)
    }

    /// Map content after `{`
    fn parse_map(&mut self) -> GreenMap {
        self.open.push(Structure::Map);
        let mut key_value_nodes = Vec::new();

        let missing_close = loop {
            let key_value = self.parse_key_value(key_value_nodes.is_empty());
            key_value_nodes.push(Arc::new(key_value));

            match self.current_kind() {
                Some(SymbolKind::Comma) => {
                    self.bump();
                }
                Some(SymbolKind::CurlyClose) => {
                    self.bump();
                    break false;
                }
                Some(_) => {
                    self.error_at_current(JsonErrorCode::MissingCurlyClose);
                    break true;
                }
                None => {
                    self.error(JsonErrorCode::UnexpectedEofInObject, self.offset, 0);
                    break true;
                }
            }
        };

        self.open.pop();
        GreenMap::new(key_value_nodes, missing_close)
    }

    /// Colon separated sections up to the next `,` or closer
    fn parse_key_value(&mut self, is_first: bool) -> GreenKeyValue {
        let start = self.offset;
        let mut sections = Vec::new();
        let mut colons = Vec::new();

        loop {
            let section = self.parse_multi_value();
            if !sections.is_empty() && section.is_missing() {
                self.error_at_current(JsonErrorCode::MissingValue);
            }
            sections.push(section);

            if self.current_kind() != Some(SymbolKind::Colon) {
                break;
            }
            colons.push(self.offset);
            self.bump();
        }

        let key_section = &sections[0];
        if key_section.is_missing() {
            match colons.first() {
                Some(&colon) => self.error(JsonErrorCode::MissingPropertyKey, colon, 1),
                None if !self.is_exempt_empty_slot(is_first) => {
                    self.error_at_current(JsonErrorCode::MissingPropertyKey);
                }
                None => {}
            }
        } else if colons.is_empty() {
            self.error_at_current(JsonErrorCode::MissingValue);
        }

        let key_node = &key_section.value_nodes()[0];
        let valid_key = match key_node.content() {
            GreenValue::StringLiteral(key) => Some(Arc::clone(key)),
            // Error strings and missing keys are reported already
            GreenValue::ErrorString(_) | GreenValue::Missing(_) => None,
            other => {
                let key_start = start + key_node.content_offset();
                self.error(JsonErrorCode::InvalidPropertyKey, key_start, other.length());
                None
            }
        };

        if let Some(&second_colon) = colons.get(1) {
            self.error(JsonErrorCode::MultiplePropertyKeySections, second_colon, 1);
        }

        GreenKeyValue::new(valid_key, sections)
    }
}

fn punctuation_character(symbol: &GreenSymbol) -> Option<char> {
    match symbol {
        GreenSymbol::Colon(node)
        | GreenSymbol::Comma(node)
        | GreenSymbol::CurlyClose(node)
        | GreenSymbol::SquareBracketClose(node)
        | GreenSymbol::CurlyOpen(node)
        | GreenSymbol::SquareBracketOpen(node) => Some(node.character()),
        _ => None,
    }
}
