// ============================================================================
// File: src/main.rs
// Entry point and CLI handling
// ============================================================================

mod config;
mod error;
mod export;
mod hf_client;
mod input;
mod models;
mod pipeline;
mod prompt;

use anyhow::Result;
use clap::Parser;
use colored::*;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::config::Config;
use crate::export::BlogExporter;
use crate::hf_client::GenerationClient;
use crate::models::{GenerationRequest, ModelId, Style, MAX_WORD_COUNT, MIN_WORD_COUNT};
use crate::pipeline::ContentPipeline;

/// Command-line arguments for the blog generator
#[derive(Parser, Debug)]
#[command(name = "blog-gen")]
#[command(about = "Generate blog content with hosted text-generation models", long_about = None)]
struct Args {
    /// Blog topic
    #[arg(short, long, default_value = "The Future of Technology")]
    topic: String,

    /// Approximate word count
    #[arg(
        short,
        long,
        default_value_t = 500,
        value_parser = clap::value_parser!(u32).range(MIN_WORD_COUNT as i64..=MAX_WORD_COUNT as i64)
    )]
    word_count: u32,

    /// Model used for generation
    #[arg(short, long, value_enum, default_value_t = ModelId::Llama2Chat)]
    model: ModelId,

    /// Content style
    #[arg(short, long, value_enum, default_value_t = Style::Informative)]
    style: Style,

    /// Directory where the generated blog file is saved
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Print the blog without saving it to a file
    #[arg(long)]
    no_save: bool,

    /// Prompt for each setting instead of reading flags
    #[arg(short, long)]
    interactive: bool,

    /// List available models and styles, then exit
    #[arg(long)]
    list_models: bool,

    /// Enable verbose output (shows the prompt and debug logs)
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // A missing .env file is fine; the environment may already be set.
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_logging(args.verbose);

    if args.list_models {
        print_catalog();
        return Ok(ExitCode::SUCCESS);
    }

    let config = Config::from_env();
    config.validate()?;
    log::debug!("Loaded configuration: {:?}", config);

    run(args, config).await
}

/// Everything after argument parsing: collect the request, generate, render,
/// save. Generation failures are reported and turned into a failing exit code.
async fn run(args: Args, config: Config) -> Result<ExitCode> {
    let pipeline = ContentPipeline::new(GenerationClient::new(config), args.verbose);
    pipeline.print_header();

    let defaults = GenerationRequest {
        topic: args.topic,
        word_count: args.word_count,
        model: args.model,
        style: args.style,
    };
    let request = if args.interactive {
        let stdin = io::stdin();
        input::prompt_request(&mut stdin.lock(), &mut io::stdout(), defaults)?
    } else {
        defaults
    };
    pipeline.print_request(&request);

    let result = match pipeline.run(&request).await {
        Ok(result) => result,
        Err(err) => {
            for line in err.to_string().lines() {
                eprintln!("{} {}", "✗".red().bold(), line.red());
            }
            return Ok(ExitCode::FAILURE);
        }
    };

    pipeline.display_result(&result);

    if !args.no_save {
        let path = BlogExporter::new(&request.topic, &result).export(&args.output_dir)?;
        println!("\n{} Blog saved to: {}",
            "✓".green().bold(),
            path.display().to_string().bright_cyan());
    }

    Ok(ExitCode::SUCCESS)
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "blog_gen=debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn print_catalog() {
    println!("{}", "Models".green().bold());
    for model in ModelId::ALL {
        println!("  {} {}", model.as_str().bright_white(), format!("({})", model.description()).bright_black());
    }

    println!("\n{}", "Styles".green().bold());
    for style in Style::ALL {
        println!("  {}", style);
    }
}
