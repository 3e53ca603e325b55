// Place curation: preference-ranked filtering + priority tagging.
// All LLM calls go through llm_client — no direct Gemini API calls here.

pub mod curator;
pub mod extract;
pub mod prompts;

pub use curator::filter_and_prioritize_places;
