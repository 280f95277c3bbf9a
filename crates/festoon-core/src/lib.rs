pub mod error;
pub mod types;

pub use error::{FestoonError, FestoonResult};
pub use types::{DecorationReport, Environment};
