//! The `markstroke` binary: replays text as keystrokes and prints the
//! resulting tree.

use std::error::Error;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use markstroke::{html, xml, DocumentTree, Options};

const EXIT_SUCCESS: i32 = 0;
const EXIT_PARSE_CONFIG: i32 = 2;
const EXIT_READ_INPUT: i32 = 3;

#[derive(Debug, Parser)]
#[command(
    about,
    author,
    version,
    after_help = "By default, markstroke will attempt to read command-line options from a config file specified by --config-file.  This behaviour can be disabled by passing --config-file none.  It is not an error if the config file does not exist."
)]
struct Cli {
    /// Files to type; or standard input if none passed
    #[arg(value_name = "FILE")]
    files: Option<Vec<PathBuf>>,

    /// Path to config file containing command-line arguments, or 'none'
    #[arg(short, long, value_name = "PATH", default_value = get_default_config_path())]
    config_file: String,

    /// Output format
    #[arg(short = 't', long = "to", value_enum, default_value_t = Format::Xml)]
    format: Format,

    /// Write output to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Feed the input a line at a time instead of a character at a time
    #[arg(long)]
    chunked: bool,

    /// Treat newlines as hard line breaks
    #[arg(long)]
    hardbreaks: bool,

    /// Read doubled delimiters as two single ones
    #[arg(long)]
    no_strong_runs: bool,

    /// Do not recognise delimiters; everything is plain text
    #[arg(long)]
    literal: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Xml,
    Html,
    Text,
}

fn get_default_config_path() -> String {
    #[cfg(all(not(windows), not(target_arch = "wasm32")))]
    {
        if let Ok(xdg_dirs) = xdg::BaseDirectories::with_prefix("markstroke") {
            let path = xdg_dirs.get_config_file("config");
            if let Some(path_str) = path.to_str() {
                return path_str.into();
            }
        }
    }

    "none".into()
}

fn parse_cli() -> Cli {
    let mut cli = Cli::parse();

    if cli.config_file == "none" {
        return cli;
    }

    let Ok(config) = fs::read_to_string(&cli.config_file) else {
        return cli;
    };

    let config_args = match shell_words::split(&config) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("failed to parse {}: {}", cli.config_file, e);
            process::exit(EXIT_PARSE_CONFIG);
        }
    };
    log::debug!("{} arguments from {}", config_args.len(), cli.config_file);

    let mut args = std::env::args().collect::<Vec<_>>();
    for (i, arg) in config_args.into_iter().enumerate() {
        args.insert(i + 1, arg);
    }
    cli = Cli::parse_from(args);
    cli
}

fn read_input(cli: &Cli) -> io::Result<String> {
    let mut s = String::with_capacity(2048);
    match cli.files {
        None => {
            io::stdin().read_to_string(&mut s)?;
        }
        Some(ref paths) => {
            for path in paths {
                match fs::File::open(path) {
                    Ok(mut f) => {
                        f.read_to_string(&mut s)?;
                    }
                    Err(e) => {
                        eprintln!("failed to read {}: {}", path.display(), e);
                        process::exit(EXIT_READ_INPUT);
                    }
                }
            }
        }
    }
    Ok(s)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("MARKSTROKE_LOG", "warn"))
        .init();

    let cli = parse_cli();

    let options = Options {
        recognize_delimiters: !cli.literal,
        strong_runs: !cli.no_strong_runs,
        hardbreaks: cli.hardbreaks,
    };

    let input = read_input(&cli)?;

    let mut tree = DocumentTree::with_options(options);
    if cli.chunked {
        for line in input.split_inclusive('\n') {
            tree.add_content(line);
        }
    } else {
        let mut buf = [0; 4];
        for c in input.chars() {
            tree.add_content(c.encode_utf8(&mut buf));
        }
    }

    let mut out = String::new();
    match cli.format {
        Format::Xml => xml::format_document(&tree, &mut out)?,
        Format::Html => html::format_document(&tree, &mut out)?,
        Format::Text => out = tree.plain_text(),
    }

    match cli.output {
        Some(ref path) => fs::write(path, out)?,
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            lock.write_all(out.as_bytes())?;
            lock.flush()?;
        }
    }

    process::exit(EXIT_SUCCESS);
}
