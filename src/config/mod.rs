//! Configuration: environment loading, validation, and the resolved gateway routing table.

pub mod types;
pub mod loader;
pub mod validator;
pub mod resolved;

pub use types::*;
pub use validator::*;
pub use resolved::*;
