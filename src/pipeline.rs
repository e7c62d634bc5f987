// ============================================================================
// File: src/pipeline.rs
// Content request pipeline: prompt synthesis, generation call, rendering
// ============================================================================

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use std::time::{Duration, Instant};

use crate::error::Result;
use crate::hf_client::GenerationClient;
use crate::models::{GenerationParameters, GenerationRequest, GenerationResult, ModelId};
use crate::prompt;

const SPINNER_MESSAGE: &str = "Generating blog content (this may take 30-60 seconds)...";
const TITLE: &str = "AI Blog Generator";
const TAGLINE: &str = "Generate high-quality blog content with AI";

pub struct ContentPipeline {
    client: GenerationClient,
    verbose: bool,
}

impl ContentPipeline {
    pub fn new(client: GenerationClient, verbose: bool) -> Self {
        Self { client, verbose }
    }

    /// Run one request end to end. Holds no state between calls.
    pub async fn run(&self, request: &GenerationRequest) -> Result<GenerationResult> {
        // Fail before the spinner appears or anything is sent.
        self.client.config().credential()?;

        let source_prompt = prompt::synthesize(&request.topic, request.word_count, request.style);
        let parameters = GenerationParameters::for_word_count(request.word_count);

        if self.verbose {
            println!(
                "  {} Calling model: {} (style: {}, max_new_tokens: {})",
                "→".yellow(),
                request.model.as_str().cyan(),
                request.style,
                parameters.max_new_tokens
            );
        }

        let spinner = self.create_spinner();
        let start = Instant::now();
        let outcome = self
            .client
            .generate(&source_prompt, request.model, parameters)
            .await;
        spinner.finish_and_clear();

        let content = outcome?;
        info!("{}", generation_summary(&content, request.model, start.elapsed()));

        Ok(GenerationResult {
            content,
            source_prompt,
        })
    }

    pub fn print_header(&self) {
        println!("{}", "\n═══════════════════════════════════════".bright_blue());
        println!("{}", format!("{:^39}", TITLE).bright_white().bold());
        println!("{}", "═══════════════════════════════════════".bright_blue());
        println!("{}\n", TAGLINE.bright_black());
    }

    pub fn print_request(&self, request: &GenerationRequest) {
        println!("{}: {}", "Topic".green().bold(), request.topic);
        println!("{}: ~{}", "Word Count".green().bold(), request.word_count);
        println!("{}: {}", "Model".green().bold(), request.model);
        println!("{}: {}\n", "Style".green().bold(), request.style);
    }

    pub fn display_result(&self, result: &GenerationResult) {
        println!("\n{} {}", "●".bright_cyan(), "Generated Blog".bright_white().bold());
        println!("{}", "─".repeat(40).bright_black());

        if self.verbose {
            println!("{}", format!("[Prompt: {}]", result.source_prompt).bright_black().italic());
            println!();
        }

        println!("{}", result.content);
    }

    fn create_spinner(&self) -> ProgressBar {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg} [{elapsed}]")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ "),
        );
        spinner.set_message(SPINNER_MESSAGE);
        spinner.enable_steady_tick(Duration::from_millis(120));
        spinner
    }
}

fn generation_summary(content: &str, model: ModelId, elapsed: Duration) -> String {
    format!(
        "Generated {} characters with {} in {:.1}s",
        content.chars().count(),
        model,
        elapsed.as_secs_f32()
    )
}
