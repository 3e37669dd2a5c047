//! Page collection stage: fetch one webpage and reduce it to visible text.
//!
//! The output is a plain-text blob written wholesale to a configurable path,
//! ready for the structurer to read. One GET, no retry; a failed fetch fails
//! the whole invocation.

pub mod blob;
pub mod client;
pub mod error;
pub mod text;

pub use blob::{collect, write_blob};
pub use client::PageClient;
pub use error::CollectorError;
pub use text::visible_text;
