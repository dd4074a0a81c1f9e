mod fuzzy;
mod resolver;

pub use fuzzy::FuzzyRanker;
pub use resolver::{resolve, MatchOutcome};
