use miette::Diagnostic;
use thiserror::Error;

use crate::codec::location::Location;

/// Main error type for scena operations.
///
/// Every parse failure carries the [`Location`] (byte offset, line, column)
/// where the input stopped matching the grammar. `VariantMismatch` is the
/// one print-side error: a conversion rule asked to unapply a value into a
/// variant it does not represent. For well-formed values the printer
/// dispatches on the variant tag first, so it never surfaces in normal use.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("malformed {expected} at {location}")]
    #[diagnostic(code(scena::parse::literal))]
    MalformedLiteral {
        expected: &'static str,
        location: Location,
    },

    #[error("unknown {expected} `{found}` at {location}")]
    #[diagnostic(code(scena::parse::symbol))]
    UnknownSymbol {
        expected: &'static str,
        found: String,
        location: Location,
        #[help]
        help: Option<String>,
    },

    #[error("unexpected end of input while parsing {expected} at {location}")]
    #[diagnostic(code(scena::parse::eof))]
    UnexpectedEndOfInput {
        expected: &'static str,
        location: Location,
    },

    #[error("trailing input at {location}")]
    #[diagnostic(code(scena::parse::trailing))]
    TrailingInput { location: Location },

    #[error("cannot print a {found} value through the {expected} conversion rule")]
    #[diagnostic(code(scena::print::variant))]
    VariantMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, SceneError>;
