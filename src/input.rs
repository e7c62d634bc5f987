// ============================================================================
// File: src/input.rs
// Interactive collection of generation settings
// ============================================================================

use anyhow::{Context, Result};
use colored::*;
use std::io::{BufRead, Write};

use crate::models::{GenerationRequest, ModelId, Style, MAX_WORD_COUNT, MIN_WORD_COUNT};

/// Keep a word count inside the accepted range
pub fn clamp_word_count(word_count: u32) -> u32 {
    word_count.clamp(MIN_WORD_COUNT, MAX_WORD_COUNT)
}

/// Ask for each setting in turn, falling back to `defaults` on empty input
/// or end of input.
pub fn prompt_request<R, W>(
    input: &mut R,
    output: &mut W,
    defaults: GenerationRequest,
) -> Result<GenerationRequest>
where
    R: BufRead,
    W: Write,
{
    let topic = match ask(input, output, &format!("Blog Topic [{}]: ", defaults.topic))? {
        Some(topic) => topic,
        None => defaults.topic,
    };

    let word_count = loop {
        let question = format!(
            "Approximate Word Count ({}-{}) [{}]: ",
            MIN_WORD_COUNT, MAX_WORD_COUNT, defaults.word_count
        );
        match ask(input, output, &question)? {
            None => break defaults.word_count,
            Some(answer) => match answer.parse::<u32>() {
                Ok(count) => break clamp_word_count(count),
                Err(_) => writeln!(output, "{} '{}' is not a number", "✗".red(), answer)?,
            },
        }
    };

    writeln!(output, "Select Model:")?;
    for (i, model) in ModelId::ALL.iter().enumerate() {
        writeln!(output, "  {}. {} ({})", i + 1, model, model.description().bright_black())?;
    }
    let model = loop {
        match ask(input, output, &format!("Model [{}]: ", defaults.model))? {
            None => break defaults.model,
            Some(answer) => match pick(&answer, &ModelId::ALL, ModelId::from_id) {
                Some(model) => break model,
                None => writeln!(output, "{} unknown model '{}'", "✗".red(), answer)?,
            },
        }
    };

    writeln!(output, "Content Style:")?;
    for (i, style) in Style::ALL.iter().enumerate() {
        writeln!(output, "  {}. {}", i + 1, style)?;
    }
    let style = loop {
        match ask(input, output, &format!("Style [{}]: ", defaults.style))? {
            None => break defaults.style,
            Some(answer) => match pick(&answer, &Style::ALL, Style::from_name) {
                Some(style) => break style,
                None => writeln!(output, "{} unknown style '{}'", "✗".red(), answer)?,
            },
        }
    };

    Ok(GenerationRequest {
        topic,
        word_count,
        model,
        style,
    })
}

/// Print `question` and read one trimmed line. `None` for blank or EOF.
fn ask<R, W>(input: &mut R, output: &mut W, question: &str) -> Result<Option<String>>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{}", question.cyan())?;
    output.flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read from stdin")?;

    let trimmed = line.trim();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        Ok(Some(trimmed.to_string()))
    }
}

/// Accept either a 1-based menu number or a name
fn pick<T, F>(answer: &str, options: &[T], by_name: F) -> Option<T>
where
    T: Copy,
    F: Fn(&str) -> Option<T>,
{
    match answer.parse::<usize>() {
        Ok(n) if n >= 1 => options.get(n - 1).copied(),
        Ok(_) => None,
        Err(_) => by_name(answer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn defaults() -> GenerationRequest {
        GenerationRequest {
            topic: "The Future of Technology".to_string(),
            word_count: 500,
            model: ModelId::Llama2Chat,
            style: Style::Informative,
        }
    }

    fn run(script: &str) -> (GenerationRequest, String) {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        let request = prompt_request(&mut input, &mut output, defaults()).unwrap();
        (request, String::from_utf8(output).unwrap())
    }

    #[test]
    fn blank_answers_keep_defaults() {
        let (request, _) = run("\n\n\n\n");
        assert_eq!(request, defaults());
    }

    #[test]
    fn end_of_input_keeps_defaults() {
        let (request, _) = run("");
        assert_eq!(request, defaults());
    }

    #[test]
    fn accepts_numbers_and_names() {
        let (request, _) = run("Rust Async\n750\n4\ncreative\n");
        assert_eq!(request.topic, "Rust Async");
        assert_eq!(request.word_count, 750);
        assert_eq!(request.model, ModelId::Opt2_7b);
        assert_eq!(request.style, Style::Creative);

        let (request, _) = run("x\n\nEleutherAI/gpt-j-6b\n3\n");
        assert_eq!(request.model, ModelId::GptJ6b);
        assert_eq!(request.style, Style::Technical);
    }

    #[test]
    fn word_count_is_clamped_into_range() {
        let (request, _) = run("t\n50\n\n\n");
        assert_eq!(request.word_count, 100);

        let (request, _) = run("t\n5000\n\n\n");
        assert_eq!(request.word_count, 1000);
    }

    #[test]
    fn invalid_answers_are_asked_again() {
        let (request, transcript) = run("t\nmany\n300\n9\n2\nPoetic\nPersuasive\n");
        assert_eq!(request.word_count, 300);
        assert_eq!(request.model, ModelId::Falcon7bInstruct);
        assert_eq!(request.style, Style::Persuasive);
        assert!(transcript.contains("'many' is not a number"));
        assert!(transcript.contains("unknown model '9'"));
        assert!(transcript.contains("unknown style 'Poetic'"));
    }
}
