pub mod error;
pub mod header;

pub use error::*;
pub use header::*;
