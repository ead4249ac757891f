mod cache;
mod error_code;
mod launch;

pub use cache::*;
pub use error_code::*;
pub use launch::*;
