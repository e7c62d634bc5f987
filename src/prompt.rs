// ============================================================================
// File: src/prompt.rs
// Prompt templates and synthesis
// ============================================================================

use crate::models::Style;

const TOPIC_PLACEHOLDER: &str = "{topic}";
const WORD_COUNT_PLACEHOLDER: &str = "{word_count}";

const INFORMATIVE_TEMPLATE: &str = "Write a comprehensive blog post about {topic}. \
The blog should be informative, engaging, and well-structured with an introduction, main points, and conclusion. \
It should be approximately {word_count} words and avoid repetition.";

const CREATIVE_TEMPLATE: &str = "Write a creative and engaging blog post about {topic}. \
Use vivid language, interesting analogies, and a conversational tone. \
Include a catchy introduction, 3-5 main sections, and a thoughtful conclusion. \
The blog should be about {word_count} words.";

const TECHNICAL_TEMPLATE: &str = "Write an in-depth technical blog post about {topic}. \
Include factual information, current trends, technical details, and practical applications. \
Structure it with an introduction, technical sections, practical implications, and a conclusion. \
The blog should be approximately {word_count} words.";

const PERSUASIVE_TEMPLATE: &str = "Write a persuasive blog post about {topic}. \
Present a clear argument, supporting evidence, and address potential counterpoints. \
Use a confident tone and end with a strong call to action. \
The blog should be about {word_count} words.";

/// Template text for a style. Every `Style` has exactly one entry.
pub fn template(style: Style) -> &'static str {
    match style {
        Style::Informative => INFORMATIVE_TEMPLATE,
        Style::Creative => CREATIVE_TEMPLATE,
        Style::Technical => TECHNICAL_TEMPLATE,
        Style::Persuasive => PERSUASIVE_TEMPLATE,
    }
}

/// Fill the selected template with topic and word count.
///
/// The word count is substituted first so a topic that happens to contain
/// `{word_count}` is left as the user typed it.
pub fn synthesize(topic: &str, word_count: u32, style: Style) -> String {
    template(style)
        .replace(WORD_COUNT_PLACEHOLDER, &word_count.to_string())
        .replace(TOPIC_PLACEHOLDER, topic)
}
