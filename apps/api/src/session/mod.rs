// Document Session: per-tab markdown + settings, and the in-memory store holding them.

pub mod defaults;
pub mod document;
pub mod handlers;
pub mod store;

pub use document::{DocumentSession, ImportError};
pub use store::SessionStore;
