pub mod error;
pub mod jsonstore;
