pub mod entry_stats;
pub mod image;
pub mod odds;
pub mod race_time;

pub use entry_stats::*;
pub use image::*;
pub use odds::*;
pub use race_time::*;
