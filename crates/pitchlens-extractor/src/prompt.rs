//! Instruction prompt construction for field extraction

/// Builds the single-turn instruction prompt for a document
pub struct PromptBuilder<'a> {
    text: &'a str,
    fields: &'a [String],
}

impl<'a> PromptBuilder<'a> {
    /// Create a new prompt builder over already-truncated document text
    pub fn new(text: &'a str, fields: &'a [String]) -> Self {
        Self { text, fields }
    }

    /// Build the complete extraction prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        // 1. Instruction
        prompt.push_str(EXTRACTION_INSTRUCTIONS);
        prompt.push_str("\n\n");

        // 2. The requested fields
        for field in self.fields {
            prompt.push_str("- ");
            prompt.push_str(field);
            prompt.push('\n');
        }
        prompt.push('\n');

        prompt.push_str(NOT_FOUND_RULE);
        prompt.push_str("\n\n");

        // 3. The document text
        prompt.push_str("Business Document:\n");
        prompt.push_str(self.text);
        prompt.push_str("\n\n");

        // 4. Output format reminder
        prompt.push_str(OUTPUT_FORMAT_REMINDER);

        prompt
    }
}

const EXTRACTION_INSTRUCTIONS: &str = "You are an AI assistant for a crowdfunding platform. \
Extract the following structured fields from this business document text:";

const NOT_FOUND_RULE: &str = r#"If a field is not found, return "N/A"."#;

const OUTPUT_FORMAT_REMINDER: &str = "Return the result as a JSON dictionary.";
