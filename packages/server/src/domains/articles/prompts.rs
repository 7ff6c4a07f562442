//! Prompts for article generation.

use crate::common::{LocationReference, RestaurantRecord};

/// Cap on the record JSON embedded in the prompt.
const MAX_RECORD_CHARS: usize = 24_000;

pub fn system_prompt(article_count: u32, language: &str) -> String {
    format!(
        r#"You are a food writer for a local restaurant blog.

Write exactly {article_count} distinct articles about the restaurant described by the user.
Each article takes a different angle (for example: signature dishes, atmosphere and service,
a visit guide with hours and location, what reviewers love).

Rules:
- Write in the language with ISO code "{language}".
- Use only facts present in the restaurant data. Do not invent dishes, prices, awards or quotes.
- Reviews may be paraphrased; attribute them to "a reviewer", never by full name.
- body_markdown is 400-700 words of Markdown with an H1 title and H2 sections.
- meta_description is at most 160 characters.
- Mention the Google Maps link once, near the end, as a Markdown link."#
    )
}

pub fn user_prompt(restaurant: &RestaurantRecord, reference: &LocationReference) -> String {
    let record = serde_json::to_string_pretty(restaurant.as_value())
        .unwrap_or_else(|_| restaurant.as_value().to_string());

    format!(
        "Google Maps link: {}\n\nRestaurant data (JSON):\n{}",
        reference,
        truncate_chars(&record, MAX_RECORD_CHARS)
    )
}

fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn system_prompt_states_count_and_language() {
        let prompt = system_prompt(3, "es");

        assert!(prompt.contains("exactly 3 distinct articles"));
        assert!(prompt.contains("\"es\""));
    }

    #[test]
    fn user_prompt_embeds_record_and_link() {
        let record = RestaurantRecord::from(json!({"name": "Cafe Luna", "address": "12 Elm St"}));
        let reference = LocationReference::parse(Some("https://maps.example/place/123")).unwrap();

        let prompt = user_prompt(&record, &reference);

        assert!(prompt.starts_with("Google Maps link: https://maps.example/place/123"));
        assert!(prompt.contains("\"name\": \"Cafe Luna\""));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        assert_eq!(truncate_chars("caféé", 4), "café");
        assert_eq!(truncate_chars("short", 10), "short");
    }
}
