// Shared helpers

pub mod constants;
pub mod storage;
pub mod format;

pub use constants::*;
pub use storage::*;
pub use format::*;
