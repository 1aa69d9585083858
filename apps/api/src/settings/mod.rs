// Settings Model and the controls catalog that edits it.

pub mod controls;
pub mod handlers;
pub mod model;

pub use model::{FontFamily, PaperSize, SettingUpdate, Settings, Theme};
