pub mod error;
pub mod first;
pub mod follow;
pub mod grammar;
pub mod ll1_table;
pub mod parse;
pub mod pretty_print;

pub use error::GrammarError;
pub use first::FirstSets;
pub use follow::FollowSets;
pub use grammar::{Grammar, Production, Symbol, SymbolId, END_MARK_ID, EPSILON_ID};
pub use ll1_table::{ConflictReport, LL1Table};

pub const EPSILON: &str = "ε";
pub const END_MARK: &str = "$";
