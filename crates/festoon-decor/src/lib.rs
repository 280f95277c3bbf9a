pub mod banner;
pub mod decorate;
pub mod inject;
pub mod stylesheet;

pub use banner::{production_banner, PRODUCTION_WARNING};
pub use decorate::{decorate, Decorated};
pub use stylesheet::environment_stylesheet;
