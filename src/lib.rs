//! Gemini-backed content studio for Korean blog publishing
//!
//! Builds structured prompts for the Gemini API, sends them, and parses the
//! structured JSON responses into typed blog posts, images, social posts,
//! and keyword/SEO research artifacts.

pub mod ai;
pub mod content;
pub mod credentials;
pub mod error;
pub mod extract;
pub mod images;
pub mod models;
pub mod prompts;
pub mod research;
pub mod schema;

pub use error::{Error, Result};
