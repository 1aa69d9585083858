// Page fit estimation: content box geometry and static font metrics.

pub mod font_metrics;
pub mod page_fit;

pub use page_fit::{estimate_fit, FitEstimate};
