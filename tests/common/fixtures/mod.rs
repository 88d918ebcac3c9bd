mod bodies;
mod configs;

pub use bodies::*;
pub use configs::*;
