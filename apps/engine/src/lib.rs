//! Place curation engine.
//!
//! Takes candidate places (open-ended JSON records) and a ranked list of user
//! preferences, asks a hosted text-generation model to keep the places worth
//! visiting on an exploration trip, then asks it to tag each survivor with a
//! `priority` of high/medium/low. Callers own retry policy and any outer
//! HTTP/CLI surface; this crate is the pipeline only.

pub mod config;
pub mod curation;
pub mod errors;
pub mod llm_client;
pub mod models;

pub use crate::config::Config;
pub use crate::curation::filter_and_prioritize_places;
pub use crate::errors::{CurationError, Stage};
pub use crate::llm_client::{GeminiClient, LlmError, TextCompletion};
pub use crate::models::{Place, PrioritizedPlace, Priority};
