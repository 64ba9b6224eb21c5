//! DTOs for the offer generation endpoint.

use serde::Deserialize;
use validator::Validate;

use crate::domain::entities::{AudienceType, MonetizationGoal, UserInput};

/// Request to generate monetization offers for a creator.
///
/// The response body is the validated
/// [`crate::domain::entities::AiResponse`] serialized as-is; it needs no
/// separate DTO because the aggregate is itself the wire contract.
#[derive(Debug, Deserialize, Validate)]
pub struct GenerateRequest {
    /// The creator's biography. Required and non-blank.
    #[validate(length(min = 1, message = "creator_bio is required"))]
    pub creator_bio: String,

    /// URLs or inline `data:image/...;base64,` payloads. May be empty.
    #[serde(default)]
    pub content_links: Vec<String>,

    pub audience_type: AudienceType,
    pub monetization_goal: MonetizationGoal,
}

impl GenerateRequest {
    /// Converts the request into the domain input value.
    pub fn into_user_input(self) -> UserInput {
        UserInput::new(
            self.creator_bio,
            self.content_links,
            self.audience_type,
            self.monetization_goal,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_links_default_to_empty() {
        let request: GenerateRequest = serde_json::from_str(
            r#"{
                "creator_bio": "I teach Notion systems",
                "audience_type": "students",
                "monetization_goal": "authority"
            }"#,
        )
        .unwrap();

        assert!(request.validate().is_ok());
        assert!(request.content_links.is_empty());
    }

    #[test]
    fn test_empty_bio_fails_validation() {
        let request: GenerateRequest = serde_json::from_str(
            r#"{
                "creator_bio": "",
                "audience_type": "students",
                "monetization_goal": "authority"
            }"#,
        )
        .unwrap();

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_missing_goal_fails_deserialization() {
        let result: Result<GenerateRequest, _> = serde_json::from_str(
            r#"{
                "creator_bio": "I teach Notion systems",
                "audience_type": "students"
            }"#,
        );

        assert!(result.is_err());
    }
}
