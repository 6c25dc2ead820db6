pub mod checker;
pub mod error;
pub mod model;
pub mod ruleset;
