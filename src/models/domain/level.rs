use async_graphql::Enum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize, Enum, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ProficiencyLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl ProficiencyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProficiencyLevel::Beginner => "beginner",
            ProficiencyLevel::Intermediate => "intermediate",
            ProficiencyLevel::Advanced => "advanced",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_uses_lowercase_names() {
        let parsed: ProficiencyLevel = serde_json::from_str("\"intermediate\"").unwrap();
        assert_eq!(parsed, ProficiencyLevel::Intermediate);
        assert_eq!(ProficiencyLevel::Advanced.as_str(), "advanced");
    }

    #[test]
    fn level_rejects_unknown_variant() {
        assert!(serde_json::from_str::<ProficiencyLevel>("\"expert\"").is_err());
    }
}
