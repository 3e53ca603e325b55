use std::fmt;

use thiserror::Error;

use crate::llm_client::LlmError;

/// Which pipeline stage a failure occurred in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Filter,
    Prioritize,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Filter => f.write_str("filter"),
            Stage::Prioritize => f.write_str("prioritize"),
        }
    }
}

/// Caller-visible failures of the curation pipeline.
///
/// Malformed model output is NOT in this list: a response that fails to decode
/// is logged and degraded to an empty result at the stage where it happened,
/// so callers always see one of the "no results" kinds instead of a raw
/// parser error. There is no partial-success return path.
#[derive(Debug, Error)]
pub enum CurationError {
    #[error("completion service returned an empty response at the {0} stage")]
    EmptyResponse(Stage),

    #[error("no places survived the filter stage")]
    NoFilteredResults,

    #[error("no places carried a valid priority tag")]
    NoPrioritizedResults,

    #[error(transparent)]
    Llm(#[from] LlmError),
}
