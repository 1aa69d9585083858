// Preview Composer: applies a StyleDescriptor to a rendered document, plus the
// printable HTML form of the result.

pub mod composer;
pub mod handlers;
pub mod print;

pub use composer::{compose, ComposedPreview};
