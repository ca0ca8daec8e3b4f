use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;
use charctx::report::{render, OutputFormat};
use charctx::{load_options, scan_files, Normalization, ScanMode, ScanOptions};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Characters,
    Punctuation,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum NormalizeArg {
    None,
    Nfc,
    Nfd,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Show characters and punctuation in context", long_about = None)]
struct Args {
    /// Input text files
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// JSON file with scan options
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// What to look for (overrides the config file)
    #[arg(short, long, value_enum)]
    mode: Option<ModeArg>,

    /// Only report these characters in character mode
    #[arg(long)]
    chars: Option<String>,

    /// Characters of context on each side
    #[arg(short, long)]
    width: Option<usize>,

    /// Normalize text before scanning
    #[arg(long, value_enum)]
    normalize: Option<NormalizeArg>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Rows)]
    format: OutputFormat,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn apply_overrides(&self, mut options: ScanOptions) -> ScanOptions {
        if let Some(mode) = self.mode {
            options.mode = match mode {
                ModeArg::Characters => ScanMode::Characters,
                ModeArg::Punctuation => ScanMode::Punctuation,
            };
        }
        if let Some(chars) = &self.chars {
            options.characters = chars.clone();
        }
        if let Some(width) = self.width {
            options.context_width = width;
        }
        if let Some(normalize) = self.normalize {
            options.normalization = match normalize {
                NormalizeArg::None => Normalization::None,
                NormalizeArg::Nfc => Normalization::Nfc,
                NormalizeArg::Nfd => Normalization::Nfd,
            };
        }
        options
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(args: &Args) -> anyhow::Result<()> {
    let options = args.apply_overrides(load_options(args.config.as_deref())?);
    log::info!("Scanning {} file(s) in {:?} mode", args.inputs.len(), options.mode);

    let contexts = scan_files(options, &args.inputs)?;
    log::info!("Found {} matches", contexts.len());

    print!("{}", render(contexts, args.format)?);
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
