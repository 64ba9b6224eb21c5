//! Deterministic prompt construction from creator input.
//!
//! Content references are partitioned: plain URLs are embedded into the
//! instruction text, well-formed `data:image/...;base64,` payloads become
//! inline attachments, and anything image-like but malformed is dropped
//! from both sets. No network access, no randomness.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::entities::UserInput;

/// Compiled matcher for inline image payloads. Capture 1 is the mime
/// type, capture 2 the base64 data; a `data:image` string that does not
/// match in full is considered malformed.
static DATA_IMAGE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^data:(image/[a-zA-Z]+);base64,(.+)$").unwrap());

/// An inline image extracted from the content references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineImage {
    pub mime_type: String,
    /// Base64 payload, passed through to the model untouched.
    pub data: String,
}

/// The fully rendered model request: one instruction plus attachments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptParts {
    pub instruction: String,
    pub attachments: Vec<InlineImage>,
}

/// Renders a [`UserInput`] into the instruction payload for the model.
///
/// Deterministic: the same input always yields the same parts. Image
/// bytes never appear in the instruction text, only in `attachments`.
pub fn build_prompt(input: &UserInput) -> PromptParts {
    let mut text_links: Vec<&str> = Vec::new();
    let mut attachments: Vec<InlineImage> = Vec::new();

    for link in &input.content_links {
        if link.starts_with("data:image") {
            if let Some(captures) = DATA_IMAGE_REGEX.captures(link) {
                attachments.push(InlineImage {
                    mime_type: captures[1].to_string(),
                    data: captures[2].to_string(),
                });
            }
            // Malformed image payloads are dropped entirely; they are
            // not followable links either.
        } else if !link.trim().is_empty() {
            text_links.push(link);
        }
    }

    let visual_context = if attachments.is_empty() {
        "No visual context provided."
    } else {
        "The user has provided screenshot(s) of their content/profile. Use these images to infer their niche, aesthetic, and engagement style."
    };

    let instruction = format!(
        r#"You are an expert AI business consultant specializing in the Creator Economy.
Your goal is to analyze a creator's profile and generate the PERFECT monetization offer for them.

Creator Context:
- Bio: "{bio}"
- Content Links: {links}
- Target Audience: {audience}
- Monetization Goal: {goal}

[Visual Context]: {visual_context}

Task:
1. Analyze their niche and audience pain points.
2. Brainstorm 3 distinct offer ideas (Digital Product, Service, Subscription).
3. Select the ONE best offer that yields the highest probability of success.
4. Generate a high-converting Landing Page copy for that BEST offer.

Return ONLY valid JSON matching this structure (strict adherence required):
{{
  "analysis": {{
    "creator_niche": "...",
    "audience_pain_points": ["...", "...", "..."],
    "monetization_readiness": "low" | "medium" | "high"
  }},
  "generated_offers": [
    {{
      "offer_type": "digital_product",
      "title": "...",
      "description": "...",
      "target_audience": "...",
      "suggested_price": number,
      "currency": "USD",
      "reasoning": "..."
    }}
  ],
  "selected_best_offer_index": 0,
  "best_offer_landing_page": {{
    "headline": "...",
    "subheadline": "...",
    "value_bullets": ["...", "...", "...", "..."],
    "call_to_action": "...",
    "faqs": [
      {{ "question": "...", "answer": "..." }},
      {{ "question": "...", "answer": "..." }},
      {{ "question": "...", "answer": "..." }}
    ]
  }}
}}
The "offer_type" must be exactly one of: digital_product, service, subscription.
"generated_offers" must contain 3 offers and "selected_best_offer_index" is the 0-based index of the best one."#,
        bio = input.creator_bio,
        links = text_links.join(", "),
        audience = input.audience_type.as_str(),
        goal = input.monetization_goal.as_str(),
    );

    PromptParts {
        instruction,
        attachments,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{AudienceType, MonetizationGoal};

    fn input_with_links(links: Vec<&str>) -> UserInput {
        UserInput::new(
            "I teach Notion productivity systems".to_string(),
            links.into_iter().map(String::from).collect(),
            AudienceType::Students,
            MonetizationGoal::RecurringRevenue,
        )
    }

    #[test]
    fn test_urls_go_into_instruction_text() {
        let parts = build_prompt(&input_with_links(vec!["https://youtube.com/@sarah"]));

        assert!(parts.instruction.contains("https://youtube.com/@sarah"));
        assert!(parts.attachments.is_empty());
    }

    #[test]
    fn test_image_goes_into_attachments_not_text() {
        let parts = build_prompt(&input_with_links(vec![
            "https://youtube.com/@sarah",
            "data:image/png;base64,iVBORw0KGgo=",
        ]));

        assert!(parts.instruction.contains("https://youtube.com/@sarah"));
        assert_eq!(parts.attachments.len(), 1);
        assert_eq!(parts.attachments[0].mime_type, "image/png");
        assert_eq!(parts.attachments[0].data, "iVBORw0KGgo=");
        assert!(!parts.instruction.contains("iVBORw0KGgo="));
    }

    #[test]
    fn test_malformed_image_dropped_from_both_sets() {
        // Missing the base64 payload segment entirely.
        let parts = build_prompt(&input_with_links(vec!["data:image/png;base64,"]));

        assert!(parts.attachments.is_empty());
        assert!(!parts.instruction.contains("data:image"));
    }

    #[test]
    fn test_non_base64_image_scheme_dropped() {
        let parts = build_prompt(&input_with_links(vec!["data:image/png,rawbytes"]));

        assert!(parts.attachments.is_empty());
        assert!(!parts.instruction.contains("rawbytes"));
    }

    #[test]
    fn test_blank_links_dropped() {
        let parts = build_prompt(&input_with_links(vec!["   ", "https://a.example"]));

        assert!(!parts.instruction.contains("   ,"));
        assert!(parts.instruction.contains("https://a.example"));
    }

    #[test]
    fn test_visual_context_flips_with_attachments() {
        let without = build_prompt(&input_with_links(vec![]));
        assert!(without.instruction.contains("No visual context provided."));

        let with = build_prompt(&input_with_links(vec!["data:image/jpeg;base64,AAAA"]));
        assert!(with.instruction.contains("provided screenshot(s)"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let input = input_with_links(vec!["https://a.example", "data:image/png;base64,AAAA"]);

        assert_eq!(build_prompt(&input), build_prompt(&input));
    }

    #[test]
    fn test_enums_rendered_as_wire_names() {
        let parts = build_prompt(&input_with_links(vec![]));

        assert!(parts.instruction.contains("Target Audience: students"));
        assert!(parts.instruction.contains("Monetization Goal: recurring_revenue"));
    }
}
