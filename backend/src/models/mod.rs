pub mod chart;
pub mod time;

pub use chart::*;
pub use time::*;
