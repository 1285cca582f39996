use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::Parser;

use richtmpl::ParserResult;

#[derive(Parser)]
#[command(name = "richtmpl")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Extracts translation templates from rich-text markup")]
struct Cli {
    /// Input file to read (stdin if not provided)
    file: Option<PathBuf>,

    /// Path to config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Treat each input line as an independent string
    #[arg(long)]
    lines: bool,

    /// Print one JSON object per result instead of pretty-printing
    #[arg(long)]
    compact: bool,
}

fn read_all(path: Option<&PathBuf>) -> io::Result<String> {
    match path {
        Some(p) => fs::read_to_string(p),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn start_dir_for(input_path: &Option<PathBuf>) -> io::Result<PathBuf> {
    if let Some(p) = input_path {
        Ok(p.parent().unwrap_or(Path::new(".")).to_path_buf())
    } else {
        std::env::current_dir()
    }
}

fn render(result: &ParserResult, compact: bool) -> io::Result<String> {
    let rendered = if compact {
        serde_json::to_string(result)?
    } else {
        serde_json::to_string_pretty(result)?
    };
    Ok(rendered)
}

fn main() -> io::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let start_dir = start_dir_for(&cli.file)?;
    let (cfg, _cfg_path) = richtmpl::config::load(cli.config.as_deref(), &start_dir)?;

    let input = read_all(cli.file.as_ref())?;

    if cli.lines {
        for line in input.lines() {
            match richtmpl::parse(line, &cfg) {
                Some(result) => println!("{}", serde_json::to_string(&result)?),
                None => log::debug!("No template extracted from {line:?}"),
            }
        }
        return Ok(());
    }

    // A trailing newline belongs to the file, not the string under
    // translation.
    let text = input.strip_suffix('\n').unwrap_or(&input);
    let text = text.strip_suffix('\r').unwrap_or(text);

    match richtmpl::parse(text, &cfg) {
        Some(result) => {
            println!("{}", render(&result, cli.compact)?);
        }
        None => {
            eprintln!("Input did not produce a usable template");
            std::process::exit(1);
        }
    }

    Ok(())
}
