use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser;
use clap::error::ErrorKind;
use tracing::level_filters::LevelFilter;

const USAGE: &str = "Usage:\n  zip2cubemap <input.zip> <output.png>";

#[derive(Parser, Debug)]
#[command(name = "zip2cubemap", version)]
#[command(about = "Build a horizontal-cross cubemap from a zip of six face images")]
struct Cli {
    /// Zip archive holding front.png, back.png, left.png, right.png, top.png and bottom.png.
    input: PathBuf,

    /// Output image path. The extension picks the format (PNG when absent).
    output: PathBuf,

    /// Log progress to stderr (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => {
                println!("{USAGE}");
                return ExitCode::from(1);
            }
        },
    };

    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(1)
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let report = zip2cubemap::convert(
        &cli.input,
        &cli.output,
        &zip2cubemap::ConvertOpts::default(),
    )
    .with_context(|| format!("convert '{}'", cli.input.display()))?;

    println!("{report}");
    Ok(())
}
