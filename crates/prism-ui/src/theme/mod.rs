//! Design tokens and component stylesheet.

mod styles;
pub mod tokens;

pub use styles::STYLESHEET;
