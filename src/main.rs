//! CLI for faqsplit - FAQ DOCX to Q&A chunk splitter

use clap::Parser;
use faqsplit::loader::DEFAULT_QNA_TAG;
use faqsplit::{
    load_qna_file, sorted_contents, write_contents_json, Chunk, FaqSplitter, Result, SourceInfo,
    SplitterOptions,
};
use log::{error, info};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input DOCX file paths
    #[arg(required_unless_present = "qna_json")]
    inputs: Vec<PathBuf>,

    /// Output JSON file path (optional, prints to stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// TOML file with splitter options
    #[arg(long)]
    config: Option<PathBuf>,

    /// Tag attached to every chunk
    #[arg(long)]
    tag: Option<String>,

    /// Source URL attached to every chunk
    #[arg(long)]
    source_url: Option<String>,

    /// Write only the sorted chunk contents
    #[arg(long)]
    contents_only: bool,

    /// Lowest heading level treated as a question
    #[arg(long)]
    min_level: Option<u32>,

    /// Highest heading level treated as a question
    #[arg(long)]
    max_level: Option<u32>,

    /// Load structured Q&A from a JSON file instead of DOCX inputs
    #[arg(long, conflicts_with = "inputs")]
    qna_json: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if let Err(e) = run(args) {
        error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let chunks = if let Some(qna_path) = &args.qna_json {
        let tag = args.tag.as_deref().unwrap_or(DEFAULT_QNA_TAG);
        load_qna_file(qna_path, tag)?
    } else {
        split_inputs(&args)?
    };

    match &args.output {
        Some(output) if args.contents_only => {
            write_contents_json(&chunks, output)?;
        }
        Some(output) => {
            std::fs::write(output, serde_json::to_string_pretty(&chunks)?)?;
            info!("Wrote {} chunks to {}", chunks.len(), output.display());
        }
        None => println!("{}", render_stdout(&chunks, args.contents_only)?),
    }
    Ok(())
}

fn split_inputs(args: &Args) -> Result<Vec<Chunk>> {
    let mut options = match &args.config {
        Some(path) => SplitterOptions::from_toml_file(path)?,
        None => SplitterOptions::default(),
    };
    if let Some(level) = args.min_level {
        options.min_heading_level = level;
    }
    if let Some(level) = args.max_level {
        options.max_heading_level = level;
    }

    let splitter = FaqSplitter::new(options)?;
    let sources: Vec<SourceInfo> = args
        .inputs
        .iter()
        .map(|path| {
            let mut source = SourceInfo::new(path.clone());
            if let Some(tag) = &args.tag {
                source = source.with_tag(tag.clone());
            }
            if let Some(url) = &args.source_url {
                source = source.with_source_url(url.clone());
            }
            source
        })
        .collect();

    // A single input keeps its error; batches skip bad files.
    if let [source] = sources.as_slice() {
        return splitter.chunk_file(source);
    }
    Ok(splitter.chunk_files(&sources))
}

fn render_stdout(chunks: &[Chunk], contents_only: bool) -> Result<String> {
    let json = if contents_only {
        serde_json::to_string_pretty(&sorted_contents(chunks))?
    } else {
        serde_json::to_string_pretty(chunks)?
    };
    Ok(json)
}
