pub mod env;
pub mod health;

pub use env::*;
pub use health::*;
