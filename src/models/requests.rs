use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;
use crate::models::domain::CandidateProfile;

/// Request body for `POST /api/recommendations`
///
/// Every field is optional at the serde level so that missing fields are
/// reported together through validation instead of as a JSON parse error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RecommendationRequest {
    #[validate(required, length(min = 1))]
    pub education: Option<String>,
    #[validate(required)]
    pub skills: Option<SkillsInput>,
    #[validate(required, length(min = 1))]
    pub location_preference: Option<String>,
    #[serde(default, deserialize_with = "deserialize_stipend")]
    #[validate(range(min = 0.0))]
    pub min_stipend: Option<f64>,
}

impl RecommendationRequest {
    /// Names of required fields that are absent or blank
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if is_blank(self.education.as_deref()) {
            missing.push("education");
        }
        if self.skills.as_ref().map_or(true, SkillsInput::is_empty) {
            missing.push("skills");
        }
        if is_blank(self.location_preference.as_deref()) {
            missing.push("location_preference");
        }
        missing
    }

    /// `skills` must arrive as a list on this endpoint
    pub fn has_skill_list(&self) -> bool {
        matches!(self.skills, Some(SkillsInput::Many(_)))
    }

    pub fn into_profile(self) -> CandidateProfile {
        CandidateProfile {
            education: self.education.unwrap_or_default(),
            skills: self.skills.map(SkillsInput::into_vec).unwrap_or_default(),
            location_preference: self.location_preference.unwrap_or_default(),
            min_stipend: self.min_stipend.unwrap_or(0.0),
        }
    }
}

/// Request body for the legacy `POST /recommend` endpoint
///
/// `skills` may be a single string or a list, and `min_stipend` may arrive as
/// a number or a numeric string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LegacyRecommendRequest {
    pub name: Option<String>,
    pub education: Option<String>,
    pub skills: Option<SkillsInput>,
    pub location_preference: Option<String>,
    #[serde(default, deserialize_with = "deserialize_stipend")]
    pub min_stipend: Option<f64>,
}

impl LegacyRecommendRequest {
    /// First required field that is absent, in declaration order
    pub fn first_missing_field(&self) -> Option<&'static str> {
        if self.name.is_none() {
            Some("name")
        } else if self.education.is_none() {
            Some("education")
        } else if self.skills.is_none() {
            Some("skills")
        } else if self.location_preference.is_none() {
            Some("location_preference")
        } else if self.min_stipend.is_none() {
            Some("min_stipend")
        } else {
            None
        }
    }

    pub fn into_profile(self) -> CandidateProfile {
        CandidateProfile {
            education: self.education.unwrap_or_default(),
            skills: self.skills.map(SkillsInput::into_vec).unwrap_or_default(),
            location_preference: self.location_preference.unwrap_or_default(),
            min_stipend: self.min_stipend.unwrap_or(0.0),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SkillsInput {
    One(String),
    Many(Vec<String>),
}

impl SkillsInput {
    pub fn is_empty(&self) -> bool {
        match self {
            SkillsInput::One(skill) => skill.trim().is_empty(),
            SkillsInput::Many(skills) => skills.is_empty(),
        }
    }

    pub fn into_vec(self) -> Vec<String> {
        match self {
            SkillsInput::One(skill) => vec![skill],
            SkillsInput::Many(skills) => skills,
        }
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

/// Accepts `min_stipend` as a JSON number, a numeric string or null
fn deserialize_stipend<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(f64),
        Text(String),
    }

    match Option::<NumberOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrString::Number(n)) => Ok(Some(n)),
        Some(NumberOrString::Text(s)) if s.trim().is_empty() => Ok(Some(0.0)),
        Some(NumberOrString::Text(s)) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("min_stipend is not a number: {}", s))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_reported_together() {
        let req: RecommendationRequest =
            serde_json::from_str(r#"{"skills": [], "location_preference": "  "}"#).unwrap();

        assert_eq!(req.missing_fields(), vec!["education", "skills", "location_preference"]);
    }

    #[test]
    fn test_min_stipend_defaults_to_zero() {
        let req: RecommendationRequest = serde_json::from_str(
            r#"{"education": "B.Tech", "skills": ["python"], "location_preference": "Pune"}"#,
        )
        .unwrap();

        assert!(req.validate().is_ok());
        assert_eq!(req.into_profile().min_stipend, 0.0);
    }

    #[test]
    fn test_negative_stipend_fails_validation() {
        let req: RecommendationRequest = serde_json::from_str(
            r#"{"education": "B.Tech", "skills": ["python"], "location_preference": "Pune", "min_stipend": -5}"#,
        )
        .unwrap();

        assert!(req.validate().is_err());
    }

    #[test]
    fn test_legacy_accepts_single_skill_and_string_stipend() {
        let req: LegacyRecommendRequest = serde_json::from_str(
            r#"{"name": "Asha", "education": "BCA", "skills": "java", "location_preference": "Noida", "min_stipend": "5000"}"#,
        )
        .unwrap();

        assert_eq!(req.first_missing_field(), None);
        let profile = req.into_profile();
        assert_eq!(profile.skills, vec!["java"]);
        assert_eq!(profile.min_stipend, 5000.0);
    }

    #[test]
    fn test_single_string_skills_is_not_a_list() {
        let req: RecommendationRequest = serde_json::from_str(
            r#"{"education": "B.Tech", "skills": "python", "location_preference": "Pune"}"#,
        )
        .unwrap();

        assert!(req.missing_fields().is_empty());
        assert!(!req.has_skill_list());
    }

    #[test]
    fn test_legacy_reports_missing_name() {
        let req: LegacyRecommendRequest = serde_json::from_str(
            r#"{"education": "BCA", "skills": ["java"], "location_preference": "Noida", "min_stipend": 0}"#,
        )
        .unwrap();

        assert_eq!(req.first_missing_field(), Some("name"));
    }
}
