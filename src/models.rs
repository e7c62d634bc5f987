// ============================================================================
// File: src/models.rs
// Request, response and domain models
// ============================================================================

use clap::ValueEnum;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Smallest word count the input layer accepts
pub const MIN_WORD_COUNT: u32 = 100;

/// Largest word count the input layer accepts
pub const MAX_WORD_COUNT: u32 = 1000;

/// Upper bound on `max_new_tokens` regardless of the requested length
pub const MAX_NEW_TOKENS_CAP: u32 = 2048;

/// Tokens budgeted per requested word
const TOKENS_PER_WORD: u32 = 6;

/// Tone/structure preset selecting one of the prompt templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Style {
    #[value(name = "Informative", alias = "informative")]
    Informative,
    #[value(name = "Creative", alias = "creative")]
    Creative,
    #[value(name = "Technical", alias = "technical")]
    Technical,
    #[value(name = "Persuasive", alias = "persuasive")]
    Persuasive,
}

impl Style {
    pub const ALL: [Style; 4] = [
        Style::Informative,
        Style::Creative,
        Style::Technical,
        Style::Persuasive,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Style::Informative => "Informative",
            Style::Creative => "Creative",
            Style::Technical => "Technical",
            Style::Persuasive => "Persuasive",
        }
    }

    /// Case-insensitive lookup by display name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|style| style.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Hosted model identifiers offered by the model selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum ModelId {
    #[value(name = "meta-llama/Llama-2-7b-chat-hf", alias = "llama-2-7b-chat")]
    Llama2Chat,
    #[value(name = "tiiuae/falcon-7b-instruct", alias = "falcon-7b-instruct")]
    Falcon7bInstruct,
    #[value(
        name = "togethercomputer/RedPajama-INCITE-7B-Instruct",
        alias = "redpajama-7b-instruct"
    )]
    RedPajama7bInstruct,
    #[value(name = "facebook/opt-2.7b", alias = "opt-2.7b")]
    Opt2_7b,
    #[value(name = "EleutherAI/gpt-j-6b", alias = "gpt-j-6b")]
    GptJ6b,
}

impl ModelId {
    pub const ALL: [ModelId; 5] = [
        ModelId::Llama2Chat,
        ModelId::Falcon7bInstruct,
        ModelId::RedPajama7bInstruct,
        ModelId::Opt2_7b,
        ModelId::GptJ6b,
    ];

    /// Path segment used in the inference URL
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelId::Llama2Chat => "meta-llama/Llama-2-7b-chat-hf",
            ModelId::Falcon7bInstruct => "tiiuae/falcon-7b-instruct",
            ModelId::RedPajama7bInstruct => "togethercomputer/RedPajama-INCITE-7B-Instruct",
            ModelId::Opt2_7b => "facebook/opt-2.7b",
            ModelId::GptJ6b => "EleutherAI/gpt-j-6b",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ModelId::Llama2Chat => "Requires approval but produces better content",
            ModelId::Falcon7bInstruct => "More capable model",
            ModelId::RedPajama7bInstruct => "Decent for text generation",
            ModelId::Opt2_7b => "Larger OPT model",
            ModelId::GptJ6b => "Larger model with better generation",
        }
    }

    /// Lookup by full identifier (case-insensitive)
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|model| model.as_str().eq_ignore_ascii_case(id.trim()))
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the user chose for one generation action
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub topic: String,

    /// Bounded to [MIN_WORD_COUNT, MAX_WORD_COUNT] by the input layer
    pub word_count: u32,

    pub model: ModelId,
    pub style: Style,
}

/// Sampling parameters sent with every request
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GenerationParameters {
    pub max_new_tokens: u32,
    pub temperature: f64,
    pub top_p: f64,
    pub do_sample: bool,
    pub repetition_penalty: f64,
}

impl GenerationParameters {
    pub fn for_word_count(word_count: u32) -> Self {
        Self {
            max_new_tokens: max_new_tokens(word_count),
            temperature: 0.7,
            top_p: 0.9,
            do_sample: true,
            repetition_penalty: 1.2,
        }
    }
}

/// `min(word_count * 6, 2048)`
pub fn max_new_tokens(word_count: u32) -> u32 {
    word_count
        .saturating_mul(TOKENS_PER_WORD)
        .min(MAX_NEW_TOKENS_CAP)
}

/// JSON body for the inference endpoint
#[derive(Debug, Serialize)]
pub struct InferenceRequest<'a> {
    pub inputs: &'a str,
    pub parameters: GenerationParameters,
}

/// Classified form of the loosely-typed inference response
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseShape {
    /// `[{"generated_text": ...}, ...]`
    GeneratedList(Value),
    /// `[x, ...]` where the first element carries no `generated_text`
    OtherList(Value),
    /// `{"generated_text": ...}`
    GeneratedObject(Value),
    /// Anything else, including an empty list
    Unrecognized(Value),
}

impl ResponseShape {
    pub fn classify(value: Value) -> Self {
        match value {
            Value::Array(mut items) if !items.is_empty() => {
                let first = items.swap_remove(0);
                match first {
                    Value::Object(mut map) if map.contains_key("generated_text") => {
                        ResponseShape::GeneratedList(
                            map.remove("generated_text").unwrap_or(Value::Null),
                        )
                    }
                    other => ResponseShape::OtherList(other),
                }
            }
            Value::Object(mut map) if map.contains_key("generated_text") => {
                ResponseShape::GeneratedObject(map.remove("generated_text").unwrap_or(Value::Null))
            }
            other => ResponseShape::Unrecognized(other),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ResponseShape::GeneratedList(_) => "generated-list",
            ResponseShape::OtherList(_) => "other-list",
            ResponseShape::GeneratedObject(_) => "generated-object",
            ResponseShape::Unrecognized(_) => "unrecognized",
        }
    }

    /// Normalizes every shape to plain text without failing
    pub fn into_text(self) -> String {
        match self {
            ResponseShape::GeneratedList(value)
            | ResponseShape::OtherList(value)
            | ResponseShape::GeneratedObject(value)
            | ResponseShape::Unrecognized(value) => value_to_text(value),
        }
    }
}

fn value_to_text(value: Value) -> String {
    match value {
        Value::String(text) => text,
        other => other.to_string(),
    }
}

/// Final content of one generation action
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationResult {
    pub content: String,
    pub source_prompt: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn max_new_tokens_scales_then_clamps() {
        assert_eq!(max_new_tokens(100), 600);
        assert_eq!(max_new_tokens(300), 1800);
        assert_eq!(max_new_tokens(500), 2048);
        assert_eq!(max_new_tokens(1000), 2048);
    }

    #[test]
    fn parameters_serialize_to_wire_format() {
        let request = InferenceRequest {
            inputs: "hello",
            parameters: GenerationParameters::for_word_count(100),
        };
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            json!({
                "inputs": "hello",
                "parameters": {
                    "max_new_tokens": 600,
                    "temperature": 0.7,
                    "top_p": 0.9,
                    "do_sample": true,
                    "repetition_penalty": 1.2
                }
            })
        );
    }

    #[test]
    fn classifies_list_with_generated_text() {
        let shape = ResponseShape::classify(json!([{"generated_text": "X Y Z"}, {"generated_text": "other"}]));
        assert_eq!(shape.kind(), "generated-list");
        assert_eq!(shape.into_text(), "X Y Z");
    }

    #[test]
    fn classifies_list_without_generated_text() {
        let shape = ResponseShape::classify(json!([{"summary_text": "short"}]));
        assert_eq!(shape.kind(), "other-list");
        assert_eq!(shape.into_text(), r#"{"summary_text":"short"}"#);

        let shape = ResponseShape::classify(json!(["plain"]));
        assert_eq!(shape.into_text(), "plain");
    }

    #[test]
    fn classifies_object_with_generated_text() {
        let shape = ResponseShape::classify(json!({"generated_text": "direct"}));
        assert_eq!(shape.kind(), "generated-object");
        assert_eq!(shape.into_text(), "direct");
    }

    #[test]
    fn falls_back_for_unrecognized_values() {
        let shape = ResponseShape::classify(json!([]));
        assert_eq!(shape.kind(), "unrecognized");
        assert_eq!(shape.into_text(), "[]");

        let shape = ResponseShape::classify(json!({"error": "loading"}));
        assert_eq!(shape.kind(), "unrecognized");
        assert_eq!(shape.into_text(), r#"{"error":"loading"}"#);
    }

    #[test]
    fn non_string_generated_text_is_stringified() {
        let shape = ResponseShape::classify(json!({"generated_text": 42}));
        assert_eq!(shape.into_text(), "42");
    }

    #[test]
    fn names_round_trip_through_lookup() {
        for style in Style::ALL {
            assert_eq!(Style::from_name(&style.name().to_lowercase()), Some(style));
        }
        for model in ModelId::ALL {
            assert_eq!(ModelId::from_id(model.as_str()), Some(model));
        }
        assert_eq!(Style::from_name("Poetic"), None);
        assert_eq!(ModelId::from_id("gpt2"), None);
    }
}
