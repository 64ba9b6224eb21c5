//! Creator account record.

use serde::Serialize;

/// A content creator with a published profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Creator {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub email: String,
}

impl Creator {
    /// Creates a new Creator record.
    pub fn new(id: String, slug: String, name: String, email: String) -> Self {
        Self {
            id,
            slug,
            name,
            email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creator_creation() {
        let creator = Creator::new(
            "creator-demo-1".to_string(),
            "demo-creator".to_string(),
            "Sarah (Productivity Expert)".to_string(),
            "sarah@example.com".to_string(),
        );

        assert_eq!(creator.id, "creator-demo-1");
        assert_eq!(creator.slug, "demo-creator");
    }
}
