//! sezi CLI - prepare PDFs for speed reading

use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use sezi::reading::dwell_time;
use sezi::render::{report_to_json, to_bionic_markdown, to_json};
use sezi::{
    bionic_words, split, Document, DocumentProcessor, JsonFormat, LopdfSource, PageSelection,
    PageTextSource, ProcessOptions, ReadingCursor, ReadingMode, ReadingProgress, ReadingSettings,
    SettingsUpdate,
};

#[derive(Parser)]
#[command(name = "sezi")]
#[command(version)]
#[command(about = "Turn PDFs into words and sentences for speed reading", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process a PDF and print the document with its statistics as JSON
    Process {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Leave pages whose text cannot be extracted empty instead of failing
        #[arg(long)]
        lenient: bool,

        /// Process pages on a single thread
        #[arg(long)]
        sequential: bool,

        /// Page range (e.g., "1-10", "1,3,5")
        #[arg(long)]
        pages: Option<String>,
    },

    /// Show document information and reading statistics
    Info {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Split text for bionic reading
    Bionic {
        /// Text to split
        #[arg(value_name = "TEXT", required = true)]
        text: Vec<String>,

        /// Output format
        #[arg(long, value_enum, default_value = "terminal")]
        format: BionicFormat,
    },

    /// Read a PDF word by word or sentence by sentence
    Read {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Start at this page
        #[arg(long)]
        page: Option<u32>,

        /// Reading unit
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,

        /// Reading speed in words per minute
        #[arg(long, env = "SEZI_WPM", default_value = "250")]
        wpm: u32,

        /// Maximum number of units to show
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Pace output at the reading speed
        #[arg(long)]
        live: bool,

        /// Progress file to resume from and save to
        #[arg(long, value_name = "FILE")]
        progress: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    /// One word at a time
    Word,
    /// One sentence at a time
    Sentence,
}

impl From<ModeArg> for ReadingMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Word => ReadingMode::Word,
            ModeArg::Sentence => ReadingMode::Sentence,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum BionicFormat {
    /// Bold prefixes in the terminal
    Terminal,
    /// Markdown with bold prefixes
    Markdown,
    /// JSON array of split words
    Json,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Process {
            input,
            output,
            compact,
            lenient,
            sequential,
            pages,
        } => cmd_process(
            &input,
            output.as_deref(),
            compact,
            lenient,
            sequential,
            pages.as_deref(),
        ),
        Commands::Info { input, json } => cmd_info(&input, json),
        Commands::Bionic { text, format } => cmd_bionic(&text.join(" "), format),
        Commands::Read {
            input,
            page,
            mode,
            wpm,
            count,
            live,
            progress,
        } => cmd_read(&input, page, mode, wpm, count, live, progress.as_deref()),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

fn cmd_process(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    lenient: bool,
    sequential: bool,
    pages: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let page_selection = if let Some(p) = pages {
        PageSelection::parse(p).map_err(|e| format!("Invalid page range: {}", e))?
    } else {
        PageSelection::All
    };

    let mut options = ProcessOptions::new()
        .with_pages(page_selection)
        .with_parallel(!sequential);
    if lenient {
        options = options.lenient();
    }

    let pb = spinner("Processing PDF...");
    let doc = DocumentProcessor::with_options(options).process(input);
    pb.finish_and_clear();
    let doc = doc?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let json = report_to_json(&doc, format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_info(input: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let file_path = input.to_string_lossy().into_owned();
    let source =
        LopdfSource::open(input).map_err(|e| sezi::Error::document_read(&*file_path, e))?;

    let pb = spinner("Reading pages...");
    let doc = DocumentProcessor::new().process_source(&file_path, &source);
    pb.finish_and_clear();
    let doc = doc?;
    let stats = doc.stats();

    if json {
        let info = serde_json::json!({
            "file_name": doc.file_name(),
            "pdf_version": source.version(),
            "encrypted": source.is_encrypted(),
            "stats": stats,
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), doc.file_name());
    println!("{}: PDF {}", "Format".bold(), source.version());
    println!("{}: {}", "Pages".bold(), source.page_count());
    println!(
        "{}: {}",
        "Encrypted".bold(),
        if source.is_encrypted() { "Yes" } else { "No" }
    );

    println!();
    println!("{}", "Reading Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Words".bold(), stats.total_words);
    println!("{}: {}", "Sentences".bold(), stats.total_sentences);
    println!("{}: {}", "Characters".bold(), stats.total_characters);
    println!(
        "{}: {} min",
        "Reading time".bold(),
        stats.estimated_reading_time_minutes
    );

    let empty_pages = doc.pages().iter().filter(|p| p.is_empty()).count();
    if empty_pages > 0 {
        println!(
            "{}: {}",
            "Pages without text".yellow().bold(),
            empty_pages
        );
    }

    Ok(())
}

fn cmd_bionic(text: &str, format: BionicFormat) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        BionicFormat::Terminal => println!("{}", bionic_line(text)),
        BionicFormat::Markdown => println!("{}", to_bionic_markdown(text)),
        BionicFormat::Json => println!("{}", to_json(&bionic_words(text), JsonFormat::Pretty)?),
    }
    Ok(())
}

/// Render `text` with the emphasized prefix of each word in bold.
fn bionic_line(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let parts = split(word);
            format!("{}{}", parts.highlighted.bold(), parts.rest.dimmed())
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn load_progress(path: &Path) -> Result<Option<ReadingProgress>, Box<dyn std::error::Error>> {
    if !path.exists() {
        return Ok(None);
    }
    let data = fs::read_to_string(path)?;
    Ok(Some(serde_json::from_str(&data)?))
}

fn start_cursor<'a>(
    doc: &'a Document,
    saved: Option<ReadingProgress>,
    mode: Option<ModeArg>,
) -> ReadingCursor<'a> {
    match (saved, mode) {
        (Some(mut progress), Some(mode)) => {
            let mode = ReadingMode::from(mode);
            if progress.reading_mode != mode {
                log::info!(
                    "Switching from {} to {} mode; restarting page {}",
                    progress.reading_mode,
                    mode,
                    progress.current_page
                );
                progress.reading_mode = mode;
                progress.current_position = 0;
            }
            ReadingCursor::from_progress(doc, &progress)
        }
        (Some(progress), None) => ReadingCursor::from_progress(doc, &progress),
        (None, mode) => ReadingCursor::new(doc, mode.map(ReadingMode::from).unwrap_or_default()),
    }
}

fn cmd_read(
    input: &Path,
    page: Option<u32>,
    mode: Option<ModeArg>,
    wpm: u32,
    count: Option<usize>,
    live: bool,
    progress_path: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut settings = ReadingSettings::default();
    settings.apply(SettingsUpdate::new().with_reading_speed(wpm))?;

    let pb = spinner("Processing PDF...");
    let doc = DocumentProcessor::new().process(input);
    pb.finish_and_clear();
    let doc = doc?;

    let saved = match progress_path {
        Some(path) => load_progress(path)?,
        None => None,
    };
    let mut cursor = start_cursor(&doc, saved, mode);
    if let Some(page) = page {
        cursor.seek(page, 0)?;
    }

    if cursor.is_finished() {
        println!("{}", "Nothing left to read.".yellow());
        return Ok(());
    }

    let mode = cursor.mode();
    let limit = count.unwrap_or(usize::MAX);

    present(
        cursor.by_ref().take(limit),
        mode,
        settings.reading_speed,
        |unit| println!("{}", bionic_line(unit)),
        |pause| {
            if live {
                thread::sleep(pause);
            }
        },
    );

    let progress = cursor.to_progress();
    println!();
    println!(
        "{} page {}, {:.0}% read",
        "Stopped at".green(),
        progress.current_page,
        cursor.fraction_read() * 100.0
    );

    if let Some(path) = progress_path {
        fs::write(path, serde_json::to_string_pretty(&progress)?)?;
        log::debug!("Saved progress to {}", path.display());
    }

    Ok(())
}

/// Show each unit, then hold it for its dwell time.
fn present<'a, I>(
    units: I,
    mode: ReadingMode,
    wpm: u32,
    mut show: impl FnMut(&'a str),
    mut wait: impl FnMut(Duration),
) where
    I: Iterator<Item = &'a str>,
{
    for unit in units {
        show(unit);
        wait(dwell_time(unit, mode, wpm));
    }
}

fn cmd_version() {
    println!("{} {}", "sezi".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("PDF text pipeline for speed reading");
    println!();
    println!("License: MIT");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_present_shows_before_waiting() {
        let events = RefCell::new(Vec::new());
        present(
            ["one", "two words"].into_iter(),
            ReadingMode::Sentence,
            600,
            |unit| events.borrow_mut().push(format!("show {}", unit)),
            |pause| events.borrow_mut().push(format!("wait {}", pause.as_millis())),
        );

        assert_eq!(
            events.into_inner(),
            vec!["show one", "wait 100", "show two words", "wait 200"]
        );
    }

    #[test]
    fn test_mode_arg_maps_to_reading_mode() {
        assert_eq!(ReadingMode::from(ModeArg::Word), ReadingMode::Word);
        assert_eq!(ReadingMode::from(ModeArg::Sentence), ReadingMode::Sentence);
    }
}
