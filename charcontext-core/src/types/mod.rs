pub mod position;
pub mod pattern;

pub use position::*;
pub use pattern::*;
