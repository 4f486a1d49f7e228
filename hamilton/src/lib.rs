pub mod error;
pub mod math;
pub mod rotation;

pub use error::{Error, Result};
