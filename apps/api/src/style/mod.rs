// Style Mapper: resolves Settings into concrete presentation variables.

pub mod handlers;
pub mod mapper;

pub use mapper::{map, StyleDescriptor};
