pub mod classify;
pub mod title;

pub use classify::{classify, CLASS_RULES};
pub use title::extract_title;
