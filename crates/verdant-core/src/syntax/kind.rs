//! The closed taxonomy of green symbol kinds
//!
//! Every terminal symbol is either background (trivia) or foreground, and
//! every foreground symbol either starts a value or delimits one. Error
//! recovery uses the second split to decide whether a dangling delimiter can
//! close a structure found higher up in the tree.

use std::fmt;

/// Kinds of terminal green symbols
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SymbolKind {
    // Background
    Whitespace,
    Comment,
    UnterminatedMultiLineComment,
    UnexpectedValueDelimiter,

    // Value delimiters
    Colon,
    Comma,
    CurlyClose,
    SquareBracketClose,

    // Value starters
    CurlyOpen,
    SquareBracketOpen,
    BooleanLiteral,
    IntegerLiteral,
    StringLiteral,
    ErrorString,
    UnknownSymbol,
    UndefinedValue,
}

/// Role of a foreground symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ForegroundRole {
    ValueStarter,
    ValueDelimiter,
}

/// Classification every terminal symbol carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolClass {
    Background,
    Foreground(ForegroundRole),
}

impl SymbolKind {
    /// All terminal kinds, in declaration order
    pub const ALL: [SymbolKind; 16] = [
        SymbolKind::Whitespace,
        SymbolKind::Comment,
        SymbolKind::UnterminatedMultiLineComment,
        SymbolKind::UnexpectedValueDelimiter,
        SymbolKind::Colon,
        SymbolKind::Comma,
        SymbolKind::CurlyClose,
        SymbolKind::SquareBracketClose,
        SymbolKind::CurlyOpen,
        SymbolKind::SquareBracketOpen,
        SymbolKind::BooleanLiteral,
        SymbolKind::IntegerLiteral,
        SymbolKind::StringLiteral,
        SymbolKind::ErrorString,
        SymbolKind::UnknownSymbol,
        SymbolKind::UndefinedValue,
    ];

    pub fn class(self) -> SymbolClass {
        match self {
            SymbolKind::Whitespace
            | SymbolKind::Comment
            | SymbolKind::UnterminatedMultiLineComment
            | SymbolKind::UnexpectedValueDelimiter => SymbolClass::Background,

            SymbolKind::Colon
            | SymbolKind::Comma
            | SymbolKind::CurlyClose
            | SymbolKind::SquareBracketClose => {
                SymbolClass::Foreground(ForegroundRole::ValueDelimiter)
            }

            SymbolKind::CurlyOpen
            | SymbolKind::SquareBracketOpen
            | SymbolKind::BooleanLiteral
            | SymbolKind::IntegerLiteral
            | SymbolKind::StringLiteral
            | SymbolKind::ErrorString
            | SymbolKind::UnknownSymbol
            | SymbolKind::UndefinedValue => SymbolClass::Foreground(ForegroundRole::ValueStarter),
        }
    }

    pub fn is_background(self) -> bool {
        self.class() == SymbolClass::Background
    }

    pub fn is_foreground(self) -> bool {
        !self.is_background()
    }

    pub fn is_value_starter(self) -> bool {
        self.class() == SymbolClass::Foreground(ForegroundRole::ValueStarter)
    }

    pub fn is_value_delimiter(self) -> bool {
        self.class() == SymbolClass::Foreground(ForegroundRole::ValueDelimiter)
    }

    /// Check if this is a comment, terminated or not
    pub fn is_comment(self) -> bool {
        matches!(
            self,
            SymbolKind::Comment | SymbolKind::UnterminatedMultiLineComment
        )
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Kinds of composite green nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    BackgroundList,
    ValueWithBackground,
    MultiValue,
    List,
    Map,
    KeyValue,
    MissingValue,
}

/// Kind of any node in the tree, terminal or composite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxKind {
    Symbol(SymbolKind),
    Node(NodeKind),
}

impl From<SymbolKind> for SyntaxKind {
    fn from(kind: SymbolKind) -> Self {
        SyntaxKind::Symbol(kind)
    }
}

impl From<NodeKind> for SyntaxKind {
    fn from(kind: NodeKind) -> Self {
        SyntaxKind::Node(kind)
    }
}

impl fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxKind::Symbol(kind) => write!(f, "{kind:?}"),
            SyntaxKind::Node(kind) => write!(f, "{kind:?}"),
        }
    }
}
