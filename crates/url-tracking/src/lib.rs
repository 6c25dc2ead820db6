pub mod error;
pub mod normalize;
pub mod store;
