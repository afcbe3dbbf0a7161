pub mod domain;
pub mod error;
pub mod retrieve;
pub mod stats;
pub mod store;
