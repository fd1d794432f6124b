use std::error::Error;
use std::fmt;

/// Errors raised while constructing a [`Grammar`](super::Grammar).
///
/// LL(1) conflicts are deliberately not represented here: a non-LL(1)
/// grammar is a normal analysis outcome and is reported as data by the
/// table builder, not as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrammarError {
    InvalidGrammar(String),
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GrammarError::InvalidGrammar(msg) => write!(f, "invalid grammar: {}", msg),
        }
    }
}

impl Error for GrammarError {}
