use serde::Deserialize;

use crate::errors::AppError;
use crate::models::profile::NewProfile;

const MISSING_FIELDS_HINT: &str = "Please fill in all fields to get personalized recommendations.";

/// Raw form payload. Missing keys deserialize as empty strings so they are
/// reported by `validate` rather than as a JSON rejection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub interests: String,
    #[serde(default)]
    pub academic_background: String,
}

impl ProfileSubmission {
    /// Trims every field and rejects the submission if any is blank.
    pub fn validate(self) -> Result<NewProfile, AppError> {
        let name = self.name.trim();
        let interests = self.interests.trim();
        let academic_background = self.academic_background.trim();

        let missing: Vec<&str> = [
            ("name", name),
            ("interests", interests),
            ("academicBackground", academic_background),
        ]
        .iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| *field)
        .collect();

        if !missing.is_empty() {
            return Err(AppError::Validation(format!(
                "Missing information: {}. {MISSING_FIELDS_HINT}",
                missing.join(", ")
            )));
        }

        Ok(NewProfile {
            name: name.to_string(),
            interests: interests.to_string(),
            academic_background: academic_background.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(name: &str, interests: &str, academic: &str) -> ProfileSubmission {
        ProfileSubmission {
            name: name.to_string(),
            interests: interests.to_string(),
            academic_background: academic.to_string(),
        }
    }

    #[test]
    fn test_valid_submission_is_trimmed() {
        let profile = submission("  Ada  ", " tech ", "\tMathematics\n")
            .validate()
            .unwrap();
        assert_eq!(profile.name, "Ada");
        assert_eq!(profile.interests, "tech");
        assert_eq!(profile.academic_background, "Mathematics");
    }

    #[test]
    fn test_blank_fields_are_listed() {
        let err = submission("Ada", "   ", "").validate().unwrap_err();
        match err {
            AppError::Validation(msg) => {
                assert!(msg.contains("interests, academicBackground"), "{msg}");
                assert!(!msg.contains("name,"));
                assert!(msg.contains("Please fill in all fields"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_keys_deserialize_as_blank() {
        let parsed: ProfileSubmission = serde_json::from_str(r#"{"name": "Ada"}"#).unwrap();
        assert!(parsed.interests.is_empty());
        assert!(parsed.validate().is_err());
    }

    #[test]
    fn test_camel_case_keys() {
        let parsed: ProfileSubmission = serde_json::from_str(
            r#"{"name": "Ada", "interests": "tech", "academicBackground": "CS"}"#,
        )
        .unwrap();
        assert_eq!(parsed.validate().unwrap().academic_background, "CS");
    }
}
