use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use rtl_pro::core::{print_error_message, process_document, RtlProResult};
use rtl_pro::env::{ConfigPath, EnvVar, LogFilter, NoColor};
use rtl_pro::postcode::lookup_postcode;
use rtl_pro::StorefrontConfig;

#[derive(Parser, Debug)]
#[command(name = "rtl-pro", version, about = "Apply Hebrew RTL storefront transformations to HTML pages")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Transform an HTML page with a storefront configuration
    Apply {
        /// HTML file to read, `-` for stdin
        input: PathBuf,

        /// Storefront configuration (.json or .toml), defaults to $RTL_PRO_CONFIG
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Write the result here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Override the document charset
        #[arg(short, long)]
        encoding: Option<String>,
    },
    /// Print the city for an Israeli postcode
    Postcode {
        code: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_new(LogFilter::get_or_default(LogFilter::DEFAULT.to_string()))
                .unwrap_or_else(|_| EnvFilter::new(LogFilter::DEFAULT)),
        )
        .init();

    let cli = Cli::parse();
    let use_color = atty::is(atty::Stream::Stderr) && !NoColor::get_or_default(false);

    let code = match run(cli.command) {
        Ok(code) => code,
        Err(err) => {
            print_error_message(&format!("Error: {}", err), use_color);
            1
        }
    };
    process::exit(code);
}

fn run(command: Command) -> RtlProResult<i32> {
    match command {
        Command::Apply {
            input,
            config,
            output,
            encoding,
        } => {
            let config = match config.or_else(|| ConfigPath::get().ok()) {
                Some(path) => StorefrontConfig::from_path(&path)?,
                None => StorefrontConfig::default(),
            };
            let data = read_input(&input)?;
            let result = process_document(&data, encoding.as_deref(), &config)?;
            write_output(output.as_deref(), &result)?;
            Ok(0)
        }
        Command::Postcode { code } => match lookup_postcode(&code) {
            Some(city) => {
                println!("{}", city);
                Ok(0)
            }
            None => {
                debug!(%code, "postcode not mapped");
                Ok(1)
            }
        },
    }
}

fn read_input(path: &Path) -> io::Result<Vec<u8>> {
    if path == Path::new("-") {
        let mut data = Vec::new();
        io::stdin().read_to_end(&mut data)?;
        Ok(data)
    } else {
        fs::read(path)
    }
}

fn write_output(path: Option<&Path>, data: &[u8]) -> io::Result<()> {
    match path {
        Some(path) => fs::write(path, data),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(data)?;
            stdout.flush()
        }
    }
}
