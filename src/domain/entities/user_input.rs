//! Creator-supplied input driving offer generation.

use serde::{Deserialize, Serialize};

/// Audience category a creator primarily speaks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudienceType {
    Creators,
    Founders,
    Students,
    Professionals,
    General,
}

impl AudienceType {
    /// Wire/prompt representation of the audience category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Creators => "creators",
            Self::Founders => "founders",
            Self::Students => "students",
            Self::Professionals => "professionals",
            Self::General => "general",
        }
    }
}

/// What the creator wants out of monetization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonetizationGoal {
    QuickCash,
    RecurringRevenue,
    Authority,
}

impl MonetizationGoal {
    /// Wire/prompt representation of the goal.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::QuickCash => "quick_cash",
            Self::RecurringRevenue => "recurring_revenue",
            Self::Authority => "authority",
        }
    }
}

/// Everything the creator tells us about themselves.
///
/// `content_links` entries are either plain URLs or inline
/// `data:image/...;base64,` payloads; the prompt builder partitions them.
/// Biography and goal are mandatory and enforced at the HTTP boundary
/// before the pipeline runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInput {
    pub creator_bio: String,
    pub content_links: Vec<String>,
    pub audience_type: AudienceType,
    pub monetization_goal: MonetizationGoal,
}

impl UserInput {
    /// Creates a new UserInput.
    pub fn new(
        creator_bio: String,
        content_links: Vec<String>,
        audience_type: AudienceType,
        monetization_goal: MonetizationGoal,
    ) -> Self {
        Self {
            creator_bio,
            content_links,
            audience_type,
            monetization_goal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audience_type_serde_round_trip() {
        let json = serde_json::to_string(&AudienceType::Professionals).unwrap();
        assert_eq!(json, "\"professionals\"");

        let parsed: AudienceType = serde_json::from_str("\"creators\"").unwrap();
        assert_eq!(parsed, AudienceType::Creators);
    }

    #[test]
    fn test_monetization_goal_uses_snake_case() {
        let json = serde_json::to_string(&MonetizationGoal::RecurringRevenue).unwrap();
        assert_eq!(json, "\"recurring_revenue\"");

        let parsed: MonetizationGoal = serde_json::from_str("\"quick_cash\"").unwrap();
        assert_eq!(parsed, MonetizationGoal::QuickCash);
    }

    #[test]
    fn test_unknown_goal_rejected() {
        let result: Result<MonetizationGoal, _> = serde_json::from_str("\"get_famous\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_user_input_deserializes_from_request_shape() {
        let input: UserInput = serde_json::from_str(
            r#"{
                "creator_bio": "I teach Notion productivity systems",
                "content_links": ["https://youtube.com/@sarah"],
                "audience_type": "students",
                "monetization_goal": "recurring_revenue"
            }"#,
        )
        .unwrap();

        assert_eq!(input.creator_bio, "I teach Notion productivity systems");
        assert_eq!(input.content_links.len(), 1);
        assert_eq!(input.audience_type, AudienceType::Students);
        assert_eq!(input.monetization_goal, MonetizationGoal::RecurringRevenue);
    }
}
