//! The curation pipeline — two sequential completion round trips.
//!
//! Flow: rank preferences → filter prompt → completion call → extract →
//!       gate on empty → priority prompt → completion call → extract →
//!       validate → return.
//!
//! Decode failures never raise. They degrade to an empty stage result, so
//! callers only ever see the small error set in `errors.rs`. There are no
//! retries or timeouts at this layer — those belong to the completion
//! collaborator and to callers.

use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::curation::extract::{extract_json, ParseOutcome};
use crate::curation::prompts::{build_filter_prompt, build_priority_prompt};
use crate::errors::{CurationError, Stage};
use crate::llm_client::TextCompletion;
use crate::models::{Place, PrioritizedPlace};

/// Preferences arrive most-preferred first and the prompts consume them in
/// that order. Ranking is a stable identity reordering, kept as an explicit
/// step so the ordering contract has one home.
fn rank_preferences(user_preferences: &[String]) -> Vec<String> {
    user_preferences.to_vec()
}

/// Filters `places` down to the ones worth visiting given the ranked
/// `user_preferences`, then tags each survivor with a `priority`.
///
/// Steps:
/// 1. rank_preferences() — identity ordering
/// 2. filter prompt → completion call #1 → extract
/// 3. empty filter result → `NoFilteredResults` (stage 2 never runs)
/// 4. priority prompt → completion call #2 → extract
/// 5. empty priority result → `NoPrioritizedResults`
/// 6. return the prioritized list — the sole success path
pub async fn filter_and_prioritize_places(
    llm: &dyn TextCompletion,
    places: &[Place],
    user_preferences: &[String],
) -> Result<Vec<PrioritizedPlace>, CurationError> {
    let ranked = rank_preferences(user_preferences);

    // Stage 1: filter
    let filter_prompt = build_filter_prompt(places, &ranked);
    debug!(prompt = %filter_prompt, "constructed filter prompt");

    let raw = llm.generate(&filter_prompt).await?;
    debug!(response = %raw, "filter response text");
    if raw.trim().is_empty() {
        return Err(CurationError::EmptyResponse(Stage::Filter));
    }

    let filtered: Vec<Place> = decode_stage(Stage::Filter, &raw);
    if filtered.is_empty() {
        return Err(CurationError::NoFilteredResults);
    }
    let kept: Vec<&str> = filtered.iter().filter_map(Place::name).collect();
    info!(count = filtered.len(), names = ?kept, "filter stage kept places");

    // Stage 2: prioritize
    let priority_prompt = build_priority_prompt(&filtered, &ranked);
    debug!(prompt = %priority_prompt, "constructed priority prompt");

    let raw = llm.generate(&priority_prompt).await?;
    debug!(response = %raw, "priority response text");
    if raw.trim().is_empty() {
        return Err(CurationError::EmptyResponse(Stage::Prioritize));
    }

    let prioritized: Vec<PrioritizedPlace> = decode_stage(Stage::Prioritize, &raw);
    if prioritized.is_empty() {
        return Err(CurationError::NoPrioritizedResults);
    }
    info!(count = prioritized.len(), "priority stage tagged places");

    Ok(prioritized)
}

/// Decodes one stage's raw completion text into the stage's expected shape.
///
/// Both extraction failure and a shape mismatch collapse to the empty list —
/// "no good matches" and "the completion was garbage" are indistinguishable
/// to callers, and that ambiguity is kept on purpose. The offending text is
/// logged here, at the point of occurrence.
fn decode_stage<T: DeserializeOwned>(stage: Stage, raw: &str) -> Vec<T> {
    match extract_json(raw) {
        ParseOutcome::Parsed(value) => match serde_json::from_value(value) {
            Ok(decoded) => decoded,
            Err(e) => {
                warn!(%stage, error = %e, response = %raw, "response shape mismatch, treating as empty");
                Vec::new()
            }
        },
        ParseOutcome::Failed { raw } => {
            warn!(%stage, response = %raw, "failed to decode response, treating as empty");
            Vec::new()
        }
    }
}
