//! Candidate-resume extractions built on the structured extractor

use crate::error::ExtractorError;
use crate::extractor::StructuredExtractor;
use crate::normalize::normalize_name;
use crate::schema::{ExtractionSchema, Field};
use plinth_llm::{CompletionProvider, EmbeddingProvider};
use serde::{Deserialize, Serialize};

/// Question for the candidate's full name
pub const FULL_NAME_QUERY: &str = "\
What is the first name and last name of the candidate?
Do not take the value from an email address.";

/// Question for the candidate's professional experiences
pub const PROFESSIONAL_EXPERIENCES_QUERY: &str = "\
List the professional experiences of the candidate.
Each professional experience has a job title, a period of time, and a company.
Return a flat JSON array of objects, NOT nested.";

/// The candidate's name as the model reports it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullName {
    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,
}

/// One professional experience entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfessionalExperience {
    /// Job title
    pub job_title: String,

    /// Period of time the position was held
    pub period: String,

    /// Company name
    pub company: String,
}

/// Schema for the full-name answer
pub fn full_name_schema() -> ExtractionSchema {
    ExtractionSchema::object(vec![Field::string("firstName"), Field::string("lastName")])
}

/// Schema for the professional-experiences answer
pub fn professional_experiences_schema() -> ExtractionSchema {
    ExtractionSchema::array_of_objects(vec![
        Field::string("jobTitle"),
        Field::string("period"),
        Field::string("company"),
    ])
}

/// Extract the candidate's full name, normalized to title case
///
/// Returns `None` when the model's answer was unparseable; that field is
/// degraded, the run continues.
///
/// # Errors
///
/// Propagates completion/retrieval failures for this field.
pub async fn extract_full_name<E, C>(
    extractor: &StructuredExtractor<E, C>,
) -> Result<Option<String>, ExtractorError>
where
    E: EmbeddingProvider,
    C: CompletionProvider,
{
    let name: Option<FullName> = extractor
        .extract_as(FULL_NAME_QUERY, &full_name_schema())
        .await?;

    Ok(name.map(|n| normalize_name(&format!("{} {}", n.first_name, n.last_name))))
}

/// Extract the candidate's professional experiences
///
/// Returns `None` when the model's answer was unparseable.
///
/// # Errors
///
/// Propagates completion/retrieval failures for this field.
pub async fn extract_professional_experiences<E, C>(
    extractor: &StructuredExtractor<E, C>,
) -> Result<Option<Vec<ProfessionalExperience>>, ExtractorError>
where
    E: EmbeddingProvider,
    C: CompletionProvider,
{
    extractor
        .extract_as(
            PROFESSIONAL_EXPERIENCES_QUERY,
            &professional_experiences_schema(),
        )
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_name_schema_accepts_conforming_answer() {
        let value = json!({"firstName": "jane", "lastName": "doe"});
        assert!(full_name_schema().validate(&value).is_ok());
    }

    #[test]
    fn test_experiences_schema_rejects_nesting() {
        let nested = json!([[{"jobTitle": "a", "period": "b", "company": "c"}]]);
        assert!(professional_experiences_schema().validate(&nested).is_err());
    }

    #[test]
    fn test_experience_deserializes_from_camel_case() {
        let value = json!({"jobTitle": "Software Engineer", "period": "2019-2022", "company": "Acme Corp"});
        let exp: ProfessionalExperience = serde_json::from_value(value).unwrap();
        assert_eq!(exp.job_title, "Software Engineer");
        assert_eq!(exp.company, "Acme Corp");
    }
}
