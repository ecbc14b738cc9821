pub mod errors;
pub mod summary;
pub mod table;
pub mod types;

pub use errors::*;
