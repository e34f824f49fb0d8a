pub mod config;
pub mod error;
pub mod pipeline;
pub mod summary;

pub use config::*;
pub use error::*;
pub use pipeline::*;
pub use summary::*;
