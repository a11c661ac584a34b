//! Document structuring CLI.
//!
//! Reads a JSON dump of extracted pages, runs the structuring pipeline,
//! and writes the resulting model as Markdown or JSON.
//!
//! Usage:
//!   docstruct <pages.json>
//!   docstruct <pages.json> --format json
//!   docstruct <pages.json> --format markdown --output out.md

use std::env;
use std::fs;
use std::process;

use docstruct::export::{render_json, render_markdown};
use docstruct::pipeline::DocumentPipeline;
use docstruct::providers::StaticDocument;
use docstruct::Result;

const USAGE: &str = "usage: docstruct <pages.json> [--format markdown|json] [--output PATH]";

#[derive(Debug)]
enum OutputFormat {
    Markdown,
    Json,
}

struct Args {
    input: String,
    format: OutputFormat,
    output: Option<String>,
}

fn parse_args() -> Args {
    let mut input = None;
    let mut format = OutputFormat::Markdown;
    let mut output = None;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--format" | "-f" => match args.next().as_deref() {
                Some("markdown") | Some("md") => format = OutputFormat::Markdown,
                Some("json") => format = OutputFormat::Json,
                other => {
                    eprintln!(
                        "docstruct: unknown output format: {}",
                        other.unwrap_or("<missing>")
                    );
                    eprintln!("{USAGE}");
                    process::exit(2);
                },
            },
            "--output" | "-o" => {
                output = args.next();
            },
            "--help" | "-h" => {
                println!("{USAGE}");
                process::exit(0);
            },
            _ => {
                input = Some(arg);
            },
        }
    }

    let input = match input {
        Some(input) => input,
        None => {
            eprintln!("{USAGE}");
            process::exit(2);
        },
    };

    Args {
        input,
        format,
        output,
    }
}

fn run(args: &Args) -> Result<()> {
    let contents = fs::read_to_string(&args.input)?;
    let document = StaticDocument::from_json(&contents)?;

    let pipeline = DocumentPipeline::new();
    let model = pipeline.process(&document, &document)?;

    let rendered = match args.format {
        OutputFormat::Markdown => render_markdown(&model),
        OutputFormat::Json => render_json(&model)?,
    };

    match &args.output {
        Some(path) => fs::write(path, rendered)?,
        None => println!("{rendered}"),
    }

    Ok(())
}

fn main() {
    env_logger::init();

    let args = parse_args();
    if let Err(err) = run(&args) {
        eprintln!("docstruct: {err}");
        process::exit(1);
    }
}
