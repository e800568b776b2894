//! cvparse CLI - structured text extraction from PDF résumés

use std::io;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use colored::Colorize;

use cvparse::render::{self, FileSink, StreamSink};
use cvparse::{
    parse_file_with_options, Document, OutputFormat, PageSelection, ParseOptions, RenderOptions,
    StructureConfig,
};

#[derive(Parser)]
#[command(name = "cvparse")]
#[command(version)]
#[command(about = "Extract headings, bullets, and text from PDF résumés", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Input PDF file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    #[command(flatten)]
    common: CommonArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args, Clone, Default)]
struct CommonArgs {
    /// Output file (stdout if not specified)
    #[arg(short, long, value_name = "FILE", global = true)]
    output: Option<PathBuf>,

    /// Page range (e.g., "1-3", "1,3,5")
    #[arg(long, global = true)]
    pages: Option<String>,

    /// Structure configuration (JSON)
    #[arg(long, value_name = "FILE", env = "CVPARSE_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Additional heading keyword (repeatable)
    #[arg(long = "heading", value_name = "KEYWORD", global = true)]
    headings: Vec<String>,

    /// Apply Unicode NFC normalization to decoded text
    #[arg(long, global = true)]
    normalize: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the structured text
    Text {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Convert to Markdown
    #[command(alias = "md")]
    Markdown {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Heading level (1-6)
        #[arg(long, default_value = "2")]
        heading_level: u8,
    },

    /// Convert to JSON
    Json {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show document information
    Info {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let common = cli.common;

    let result = match cli.command {
        Some(Commands::Text { input }) => {
            cmd_render(&input, &common, OutputFormat::Text, RenderOptions::new())
        }
        Some(Commands::Markdown {
            input,
            heading_level,
        }) => cmd_render(
            &input,
            &common,
            OutputFormat::Markdown,
            RenderOptions::new().with_heading_level(heading_level),
        ),
        Some(Commands::Json { input, compact }) => {
            let format = if compact {
                OutputFormat::JsonCompact
            } else {
                OutputFormat::Json
            };
            cmd_render(&input, &common, format, RenderOptions::new())
        }
        Some(Commands::Info { input }) => cmd_info(&input, &common),
        None => {
            if let Some(input) = cli.input {
                cmd_render(&input, &common, OutputFormat::Text, RenderOptions::new())
            } else {
                println!("{}", "Usage: cvparse <FILE>".yellow());
                println!("       cvparse --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn parse_options(common: &CommonArgs) -> CliResult<ParseOptions> {
    let pages = match common.pages.as_deref() {
        Some(p) => PageSelection::parse(p).map_err(|e| format!("Invalid page range: {}", e))?,
        None => PageSelection::All,
    };

    let mut structure = match &common.config {
        Some(path) => StructureConfig::from_json_file(path)?,
        None => StructureConfig::default(),
    };
    for keyword in &common.headings {
        structure = structure.with_heading_keyword(keyword.clone());
    }
    structure.validate()?;

    Ok(ParseOptions::new()
        .with_pages(pages)
        .with_normalization(common.normalize)
        .with_structure(structure))
}

fn load(input: &Path, common: &CommonArgs) -> CliResult<Document> {
    let doc = parse_file_with_options(input, parse_options(common)?)?;
    for warning in &doc.warnings {
        eprintln!("{}: {}", "warning".yellow().bold(), warning);
    }
    Ok(doc)
}

fn cmd_render(
    input: &Path,
    common: &CommonArgs,
    format: OutputFormat,
    options: RenderOptions,
) -> CliResult<()> {
    let doc = load(input, common)?;

    match &common.output {
        Some(path) => {
            let mut sink = FileSink::create(path)?;
            let written = render::write_to_sink(&doc, format, &options, &mut sink)?;
            log::info!("wrote {} bytes to {}", written, path.display());
            println!("{} {}", "Saved to".green(), path.display());
        }
        None => {
            let mut sink = StreamSink::new(io::stdout().lock());
            render::write_to_sink(&doc, format, &options, &mut sink)?;
        }
    }

    Ok(())
}

fn cmd_info(input: &Path, common: &CommonArgs) -> CliResult<()> {
    let doc = load(input, common)?;
    let stats = &doc.stats;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    if let Some(ref version) = doc.metadata.pdf_version {
        println!("{}: PDF {}", "Format".bold(), version);
    }
    println!("{}: {}", "Pages".bold(), doc.metadata.page_count);
    println!("{}: {}", "Pages processed".bold(), doc.metadata.pages_processed);

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Fragments".bold(), stats.fragments);
    println!("{}: {}", "Words".bold(), stats.words);
    println!("{}: {}", "Headings".bold(), stats.headings);
    println!("{}: {}", "Bullets".bold(), stats.bullets);
    println!("{}: {}", "Text lines".bold(), stats.text_lines);
    println!("{}: {}", "Warnings".bold(), doc.warnings.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_invocation_takes_file() {
        let cli = Cli::try_parse_from(["cvparse", "resume.pdf"]).unwrap();
        assert_eq!(cli.input, Some(PathBuf::from("resume.pdf")));
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_markdown_alias_and_flags() {
        let cli = Cli::try_parse_from([
            "cvparse",
            "md",
            "resume.pdf",
            "--pages",
            "1-2",
            "--heading",
            "SKILLS",
            "--heading",
            "PROJECTS",
        ])
        .unwrap();
        assert!(matches!(cli.command, Some(Commands::Markdown { .. })));
        assert_eq!(cli.common.pages.as_deref(), Some("1-2"));
        assert_eq!(cli.common.headings, vec!["SKILLS", "PROJECTS"]);
    }

    #[test]
    fn test_parse_options_adds_headings() {
        let common = CommonArgs {
            headings: vec!["SKILLS".to_string()],
            normalize: true,
            ..CommonArgs::default()
        };
        let options = parse_options(&common).unwrap();
        assert!(options.normalize_unicode);
        assert!(options.structure.is_heading("SKILLS"));
        assert!(options.structure.is_heading("EDUCATION"));
    }

    #[test]
    fn test_parse_options_rejects_bad_range() {
        let common = CommonArgs {
            pages: Some("3-1".to_string()),
            ..CommonArgs::default()
        };
        assert!(parse_options(&common).is_err());
    }
}
