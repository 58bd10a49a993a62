use clap::Parser;
use log::info;

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::errors::{Error, Result};
use crate::{polyline_path_data, transform_file, RenderConfig};
#[cfg(feature = "json")]
use crate::{emit_path, parse_points, AbsoluteLength, CommandRecorder};

/// Command line arguments
#[derive(Parser)]
#[command(author, version, about, long_about=None)] // Read from Cargo.toml
struct Arguments {
    /// File to process ('-' for stdin)
    #[arg(default_value = "-", conflicts_with = "points")]
    file: String,

    /// Target output file ('-' for stdout)
    #[arg(short, long, default_value = "-")]
    output: String,

    /// Convert a single points list (e.g. "0,0 10,0 10,10") rather than a document
    #[arg(short, long, allow_hyphen_values = true)]
    points: Option<String>,

    /// Print drawing commands for `--points` as JSON rather than path data
    #[cfg(feature = "json")]
    #[arg(long, requires = "points")]
    json: bool,

    /// Remove polylines with fewer than two points rather than emitting an empty path
    #[arg(long)]
    drop_degenerate: bool,

    /// Keep each source points list in a `data-src-points` attribute
    #[arg(long)]
    debug: bool,
}

/// What the `svgpoly` program has been asked to convert.
#[derive(Clone, Debug, PartialEq)]
pub enum Mode {
    /// Convert a whole document read from the given path
    Document(String),
    /// Convert a single raw points list
    Points(String),
    /// Convert a single raw points list, printing JSON drawing commands
    #[cfg(feature = "json")]
    PointsJson(String),
}

/// Top-level configuration used by the `svgpoly` command-line process.
///
/// This is typically derived from command line arguments and passed to `run()`.
#[derive(Clone, Debug)]
pub struct Config {
    pub mode: Mode,
    /// Path to output file, or '-' for stdout
    pub output_path: String,
    /// render config options
    pub render: RenderConfig,
}

impl Config {
    fn from_args(args: Arguments) -> Result<Self> {
        let mode = match args.points {
            #[cfg(feature = "json")]
            Some(points) if args.json => Mode::PointsJson(points),
            Some(points) => Mode::Points(points),
            None => {
                if args.file != "-" && args.output != "-" {
                    let in_path = Path::new(&args.file);
                    let out_path = Path::new(&args.output);
                    if out_path.exists() && out_path.canonicalize()? == in_path.canonicalize()? {
                        return Err(Error::Cli(
                            "Output path must not refer to the same file as the input file.".into(),
                        ));
                    }
                }
                Mode::Document(args.file)
            }
        };
        Ok(Self {
            mode,
            output_path: args.output,
            render: RenderConfig {
                keep_degenerate: !args.drop_degenerate,
                debug: args.debug,
            },
        })
    }

    /// Create a `Config` object set up given a command line string.
    ///
    /// The string is parsed using `shlex::split()`, so values containing
    /// spaces or quotes should be quoted or escaped appropriately.
    pub fn from_cmdline(args: &str) -> Result<Self> {
        let args = shlex::split(args).unwrap_or_default();
        let args = Arguments::try_parse_from(args.iter()).map_err(Error::from_err)?;
        Self::from_args(args)
    }
}

/// Create a `Config` object from process arguments.
pub fn get_config() -> Result<Config> {
    let args = Arguments::parse();
    Config::from_args(args)
}

fn write_output(output_path: &str, content: &str) -> Result<()> {
    if output_path == "-" {
        let mut stdout = std::io::stdout();
        writeln!(stdout, "{content}")?;
    } else {
        fs::write(output_path, format!("{content}\n"))?;
    }
    Ok(())
}

/// Run the `svgpoly` program with a given `Config`.
pub fn run(config: Config) -> Result<()> {
    match &config.mode {
        Mode::Document(input) => {
            info!("converting document {input}");
            transform_file(input, &config.output_path, &config.render)
        }
        Mode::Points(points) => write_output(&config.output_path, &polyline_path_data(points)?),
        #[cfg(feature = "json")]
        Mode::PointsJson(points) => {
            let points = parse_points(Some(points), &AbsoluteLength)?;
            let mut rec = CommandRecorder::new();
            emit_path(&points, &mut rec);
            write_output(&config.output_path, &rec.to_json()?)
        }
    }
}
