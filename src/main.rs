//! ficpress - press fan-fiction HTML exports into print-ready PDFs

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

use ficpress::dom::parse_fic;
use ficpress::util::decode_html_bytes;
use ficpress::{Options, Renderer, WeasyPrint, extract_metadata, press};

#[derive(Parser)]
#[command(name = "ficpress")]
#[command(version, about = "Press fan-fiction HTML exports into print-ready PDFs", long_about = None)]
#[command(after_help = "EXAMPLES:
    ficpress fic.html               Press to \"{title}.pdf\"
    ficpress fic.html -o book.pdf   Press to a chosen path
    ficpress --no-notes fic.html    Drop author notes from the output
    ficpress -i fic.html            Show work metadata")]
struct Cli {
    /// Input HTML export
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output PDF path (defaults to "{title}.pdf")
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Remove author notes from the output
    #[arg(long)]
    no_notes: bool,

    /// Show work metadata without rendering
    #[arg(short, long)]
    info: bool,

    /// Print metadata as JSON (with --info)
    #[arg(long, requires = "info")]
    json: bool,

    /// Suppress output messages
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let bytes = std::fs::read(&cli.input)
        .map_err(|e| format!("{}: {e}", cli.input.display()))?;
    let html = decode_html_bytes(&bytes);

    if cli.info {
        return show_info(&html, cli.json);
    }

    let options = Options {
        remove_notes: cli.no_notes,
        ..Options::default()
    };
    let work = press(&html, &options).map_err(|e| e.to_string())?;

    if !cli.quiet {
        println!("Pressing {} by {}", work.metadata.title, work.metadata.author);
    }

    let output = match &cli.output {
        Some(path) => ensure_pdf_extension(path),
        None => PathBuf::from(work.default_filename()),
    };

    let renderer = WeasyPrint::default();
    let saved = renderer
        .render(&work.document, work.stylesheet, &output)
        .map_err(|e| e.to_string())?;

    if !cli.quiet {
        println!("File saved at: {}", saved.display());
    }
    Ok(())
}

fn show_info(html: &str, json: bool) -> Result<(), String> {
    let dom = parse_fic(html);
    let metadata = extract_metadata(&dom).map_err(|e| e.to_string())?;

    if json {
        let out = serde_json::to_string_pretty(&metadata).map_err(|e| e.to_string())?;
        println!("{out}");
    } else {
        println!("Title: {}", metadata.title);
        println!("Author: {}", metadata.author);
    }
    Ok(())
}

fn ensure_pdf_extension(path: &Path) -> PathBuf {
    if path.extension().is_some_and(|e| e.eq_ignore_ascii_case("pdf")) {
        path.to_path_buf()
    } else {
        let mut name = path.as_os_str().to_os_string();
        name.push(".pdf");
        PathBuf::from(name)
    }
}
