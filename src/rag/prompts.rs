//! Prompt templates for the support agent

/// System instruction prefixed to every generation.
///
/// The fallback sentence is quoted verbatim so the model can repeat it
/// exactly when the retrieved context does not answer the question.
pub const SYSTEM_PROMPT: &str = r#"You are a professional customer support AI. Your job is to provide **accurate and helpful** responses using the provided knowledge base.
**DO NOT make up information**. If the answer is unclear, say: "I'm sorry, I don't have that information."
If the user greets you, respond politely with a friendly greeting. If the question is irrelevant or off-topic, kindly inform the user that you can only assist with general queries related to the products.
Ensure all responses are clear, friendly, and professional."#;

/// Build the support prompt for one question and its retrieved context
#[must_use]
pub fn build_support_prompt(question: &str, context: &str) -> String {
    format!(
        r#"{}

**Context from knowledge base:**
{}

**User Question:** {}

**Response:**"#,
        SYSTEM_PROMPT, context, question
    )
}
