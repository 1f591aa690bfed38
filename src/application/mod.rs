//! Application services layer.

pub mod error;
pub mod registry;
pub mod repos;
pub mod summary;
