mod format;
mod pin;
mod region;
mod stats;

pub use format::*;
pub use pin::*;
pub use region::*;
pub use stats::*;
