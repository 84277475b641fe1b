//! Prompt engineering for schema-bound answers

use crate::schema::ExtractionSchema;

const FORMAT_INSTRUCTIONS: &str = "\
Return ONLY JSON.
DO NOT use Markdown notation.
Do not justify your answer.";

const HONESTY_INSTRUCTIONS: &str = "\
If you don't know the answer, return null.
If it is not specified in the context, return null.
Never invent a value.";

/// Builds prompts that state the expected answer shape explicitly
///
/// The resulting prompt is sent through the query engine, which wraps it
/// with the retrieved context and the grounding directives.
pub struct PromptBuilder {
    question: String,
    shape: String,
}

impl PromptBuilder {
    /// Create a prompt builder for a question and its expected schema
    pub fn new(question: impl Into<String>, schema: &ExtractionSchema) -> Self {
        Self {
            question: question.into(),
            shape: schema.describe(),
        }
    }

    /// Build the complete extraction prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        // 1. The question itself
        prompt.push_str(self.question.trim());
        prompt.push_str("\n\n");

        // 2. The exact shape the answer must have
        prompt.push_str("Answer in JSON matching exactly this shape:\n");
        prompt.push_str(&self.shape);
        prompt.push_str("\n\n");

        // 3. Format and honesty rules
        prompt.push_str(FORMAT_INSTRUCTIONS);
        prompt.push('\n');
        prompt.push_str(HONESTY_INSTRUCTIONS);

        prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Field;

    fn schema() -> ExtractionSchema {
        ExtractionSchema::object(vec![Field::string("firstName"), Field::string("lastName")])
    }

    #[test]
    fn test_prompt_includes_question() {
        let prompt = PromptBuilder::new("What is the candidate's name?", &schema()).build();
        assert!(prompt.starts_with("What is the candidate's name?"));
    }

    #[test]
    fn test_prompt_states_schema_keys() {
        let prompt = PromptBuilder::new("Name?", &schema()).build();
        assert!(prompt.contains(r#""firstName": string"#));
        assert!(prompt.contains(r#""lastName": string"#));
    }

    #[test]
    fn test_prompt_forbids_markdown_and_requires_json() {
        let prompt = PromptBuilder::new("Name?", &schema()).build();
        assert!(prompt.contains("Return ONLY JSON."));
        assert!(prompt.contains("DO NOT use Markdown notation."));
    }

    #[test]
    fn test_prompt_prefers_null_over_fabrication() {
        let prompt = PromptBuilder::new("Name?", &schema()).build();
        assert!(prompt.contains("return null"));
        assert!(prompt.contains("Never invent a value."));
    }
}
