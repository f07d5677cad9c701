//! Runs of background symbols between content tokens

use super::symbol::GreenSymbol;
use crate::syntax::diagnostic::JsonErrorInfo;
use crate::syntax::span_list::{SpanList, Spanned};
use std::sync::{Arc, LazyLock};

static EMPTY: LazyLock<Arc<GreenBackgroundList>> = LazyLock::new(|| {
    Arc::new(GreenBackgroundList {
        background: SpanList::new(Vec::new()),
        contains_errors: false,
    })
});

/// All trivia between two content tokens, as one unit
#[derive(Debug, PartialEq, Eq)]
pub struct GreenBackgroundList {
    background: SpanList<GreenSymbol>,
    contains_errors: bool,
}

impl GreenBackgroundList {
    /// The shared empty run
    pub fn empty() -> Arc<Self> {
        Arc::clone(&EMPTY)
    }

    /// Panics if one of the symbols is not a background symbol.
    pub fn create(symbols: Vec<GreenSymbol>) -> Arc<Self> {
        if symbols.is_empty() {
            return Self::empty();
        }
        if let Some(symbol) = symbols.iter().find(|s| !s.is_background()) {
            panic!("{} is not a background symbol", symbol.kind());
        }
        let contains_errors = symbols.iter().any(GreenSymbol::has_errors);
        Arc::new(Self {
            background: SpanList::new(symbols),
            contains_errors,
        })
    }

    pub fn background(&self) -> &SpanList<GreenSymbol> {
        &self.background
    }

    pub fn is_empty(&self) -> bool {
        self.background.is_empty()
    }

    pub fn length(&self) -> usize {
        self.background.length()
    }

    pub fn has_errors(&self) -> bool {
        self.contains_errors
    }

    pub fn errors(&self, start: usize) -> Vec<JsonErrorInfo> {
        if !self.contains_errors {
            return Vec::new();
        }
        self.background
            .iter()
            .enumerate()
            .flat_map(|(i, symbol)| symbol.errors(start + self.background.element_offset(i)))
            .collect()
    }
}

impl Spanned for GreenBackgroundList {
    fn length(&self) -> usize {
        GreenBackgroundList::length(self)
    }
}
