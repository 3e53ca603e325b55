// All LLM prompt constants for the curation module.
// Templates use {placeholder} substitution; builders fill them below.

use serde_json::json;

use crate::models::Place;

/// Filter prompt template. Replace `{places_json}` and `{preferences}` before sending.
pub const FILTER_PROMPT_TEMPLATE: &str = r#"You are an AI assistant that filters and prioritizes places based on user preferences but skips the preference if no places match it. Here is a list of places in JSON format:

{places_json}

The user preferences are ranked in the following order (highest to lowest priority): {preferences}.

Please filter and prioritize the places based on these preferences and return the filtered list in JSON format. Ensure that the places are not too standard, as you are an assistant designed to help a user organize a fun trip of exploration. For example, do not return a grocery store, even though food was one of the tags.

IMPORTANT: You are an assistant that does NOT need to fulfill every single user preference if unable to. If none exist within a certain preference, don't filter it. Just do your best to get most of them."#;

/// Priority-tagging prompt template. Replace `{places_json}` and `{preferences}` before sending.
pub const PRIORITY_PROMPT_TEMPLATE: &str = r#"You are an AI assistant that enhances a list of filtered places by adding a "priority" tag. Here is a list of places in JSON format:

{places_json}

The user preferences are ranked in the following order (highest to lowest priority): {preferences}.

Please add a "priority" tag with values "high", "medium", or "low" to each place based on how well it matches the preferences."#;

/// Builds the stage-1 filter prompt from the caller's places and ranked preferences.
pub fn build_filter_prompt(places: &[Place], preferences: &[String]) -> String {
    fill(FILTER_PROMPT_TEMPLATE, places, preferences)
}

/// Builds the stage-2 priority prompt from the filtered places and the same ranking.
pub fn build_priority_prompt(filtered: &[Place], preferences: &[String]) -> String {
    fill(PRIORITY_PROMPT_TEMPLATE, filtered, preferences)
}

fn fill(template: &str, places: &[Place], preferences: &[String]) -> String {
    let places_json =
        serde_json::to_string_pretty(places).expect("places are already valid JSON values");
    let preferences_json = json!(preferences).to_string();
    template
        .replace("{places_json}", &places_json)
        .replace("{preferences}", &preferences_json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn place(value: serde_json::Value) -> Place {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_filter_prompt_embeds_places_and_preferences() {
        let places = vec![
            place(json!({"name": "Old Town Market", "category": "grocery"})),
            place(json!({"name": "Hidden Falls Trail", "category": "hiking"})),
        ];
        let preferences = vec!["nature".to_string(), "food".to_string()];

        let prompt = build_filter_prompt(&places, &preferences);

        assert!(prompt.contains(r#""name": "Old Town Market""#));
        assert!(prompt.contains(r#""name": "Hidden Falls Trail""#));
        assert!(prompt.contains(r#"["nature","food"]"#));
        assert!(!prompt.contains("{places_json}"));
        assert!(!prompt.contains("{preferences}"));
    }

    #[test]
    fn test_filter_prompt_keeps_exploration_guardrails() {
        let prompt = build_filter_prompt(&[], &[]);
        assert!(prompt.contains("do not return a grocery store"));
        assert!(prompt.contains("does NOT need to fulfill every single user preference"));
    }

    #[test]
    fn test_priority_prompt_embeds_tag_instruction() {
        let filtered = vec![place(json!({"name": "Hidden Falls Trail"}))];
        let preferences = vec!["nature".to_string()];

        let prompt = build_priority_prompt(&filtered, &preferences);

        assert!(prompt.contains(r#""priority" tag with values "high", "medium", or "low""#));
        assert!(prompt.contains(r#""name": "Hidden Falls Trail""#));
        assert!(prompt.contains(r#"["nature"]"#));
    }

    #[test]
    fn test_preference_order_is_preserved_verbatim() {
        let preferences = vec!["food".to_string(), "nature".to_string()];
        let prompt = build_filter_prompt(&[], &preferences);
        assert!(prompt.contains(r#"["food","nature"]"#));
    }
}
