pub mod formula;
pub mod util;

pub use formula::*;
pub use util::*;
