//! Verdant Core
//!
//! Lossless, error-tolerant syntax trees for JSON with comments.
//! This crate provides an immutable green tree that owns the parsed
//! structure, a red projection adding parents and absolute positions, a
//! reference tokenizer and parser, and structured diagnostics.

pub mod config;
pub mod error;
pub mod result;
pub mod syntax;

// Re-export commonly used types
pub use config::{ConfigLoader, ParseOptions};
pub use error::{ErrorKind, VerdantError};
pub use result::Result;
pub use syntax::{
    GreenRoot, GreenSymbol, JsonErrorCode, JsonErrorInfo, JsonErrorLevel, JsonRootSyntax,
    JsonSyntax, JsonSyntaxNode, NodeKind, SymbolKind, SyntaxKind, dump_tree, parse,
    parse_symbols, parse_with_options, tokenize,
};

/// Initialize the tracing subscriber for logging
pub fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("verdant_core=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
