#![deny(unsafe_code)]
#![warn(
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,
    clippy::unneeded_field_pattern,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unnecessary_self_imports,
    clippy::str_to_string,
    clippy::string_to_string,
    clippy::string_slice
)]

use std::{
    fmt::Display,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process::ExitCode,
    time::Instant,
};

use anyhow::{Context, Result};
use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, ValueEnum};
use termquant::{ColorSpace, Pipeline, ThreadCount, DEFAULT_RATIO, DEFAULT_WIDTH};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

/// Logs how long the expression took to evaluate.
macro_rules! timed {
    ($name: literal, $val: expr) => {{
        let time = Instant::now();
        let value = $val;
        debug!("{} took {}ms", $name, time.elapsed().as_millis());
        value
    }};
}

const EXAMPLE: &str = "\
Example:
    $ termquant -w 16 image1.png -s rgb -w 32 image2.png -w 720 -r 0.625 -t 4 image3.png
    Print image1.png with width 16 and HSL search space, then
    print image2.png with width 32 and RGB search space, then
    print image3.png with width 720, height reduced to 0.625x, using 4 threads.
    Each option applies to all of the following files until it is given again.";

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum CliColorSpace {
    Rgb,
    Hsl,
}

impl From<CliColorSpace> for ColorSpace {
    fn from(value: CliColorSpace) -> Self {
        match value {
            CliColorSpace::Rgb => ColorSpace::Rgb,
            CliColorSpace::Hsl => ColorSpace::Hsl,
        }
    }
}

impl Display for CliColorSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                CliColorSpace::Rgb => "rgb",
                CliColorSpace::Hsl => "hsl",
            }
        )
    }
}

/// Print images in the terminal using the 256-color palette.
#[derive(Parser)]
#[command(version, about, after_help = EXAMPLE)]
struct Options {
    /// Width of the printed image in cells [default: 48]
    #[arg(short, long, value_name = "CELLS")]
    width: Vec<u32>,

    /// Color space to search the nearest palette color in [default: hsl]
    #[arg(short, long, value_name = "SPACE")]
    space: Vec<CliColorSpace>,

    /// Factor applied to the height to account for the font ratio [default: 1.0]
    #[arg(short, long, value_parser = parse_ratio)]
    ratio: Vec<f32>,

    /// Maximum number of threads used to compute the result [default: 1]
    #[arg(short, long, value_name = "N")]
    threads: Vec<ThreadCount>,

    /// Log the time taken by each step
    #[arg(short, long)]
    verbose: bool,

    /// Wait for "return" after printing all files
    #[arg(long)]
    pause: bool,

    /// The images to print
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

fn parse_ratio(s: &str) -> Result<f32, String> {
    let ratio: f32 = s.parse().map_err(|e| format!("{e}"))?;
    if ratio.is_finite() && ratio >= 0.0 {
        Ok(ratio)
    } else {
        Err(format!("{s} is not a non-negative number"))
    }
}

/// The options in effect for one file.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Settings {
    width: u32,
    space: ColorSpace,
    ratio: f32,
    threads: ThreadCount,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            space: ColorSpace::default(),
            ratio: DEFAULT_RATIO,
            threads: ThreadCount::default(),
        }
    }
}

enum Arg<'a> {
    Width(u32),
    Space(ColorSpace),
    Ratio(f32),
    Threads(ThreadCount),
    File(&'a Path),
}

/// Pairs each file with the last value of every option given before it on the command line.
fn jobs(options: &Options, matches: &ArgMatches) -> Vec<(PathBuf, Settings)> {
    fn indices<'a>(matches: &'a ArgMatches, id: &str) -> impl Iterator<Item = usize> + 'a {
        matches.indices_of(id).into_iter().flatten()
    }

    let mut args = Vec::new();
    args.extend(indices(matches, "width").zip(&options.width).map(|(i, &w)| (i, Arg::Width(w))));
    args.extend(
        indices(matches, "space")
            .zip(&options.space)
            .map(|(i, &s)| (i, Arg::Space(s.into()))),
    );
    args.extend(indices(matches, "ratio").zip(&options.ratio).map(|(i, &r)| (i, Arg::Ratio(r))));
    args.extend(
        indices(matches, "threads")
            .zip(&options.threads)
            .map(|(i, &t)| (i, Arg::Threads(t))),
    );
    args.extend(
        indices(matches, "files")
            .zip(&options.files)
            .map(|(i, f)| (i, Arg::File(f.as_path()))),
    );
    args.sort_by_key(|&(i, _)| i);

    let mut settings = Settings::default();
    let mut jobs = Vec::new();
    for (_, arg) in args {
        match arg {
            Arg::Width(width) => settings.width = width,
            Arg::Space(space) => settings.space = space,
            Arg::Ratio(ratio) => settings.ratio = ratio,
            Arg::Threads(threads) => settings.threads = threads,
            Arg::File(path) => jobs.push((path.to_path_buf(), settings)),
        }
    }

    jobs
}

fn print_image(path: &Path, settings: Settings, out: &mut impl Write) -> Result<()> {
    let image = timed!("decode", image::open(path))
        .with_context(|| format!("could not read file {}", path.display()))?
        .into_rgba8();

    let pipeline = Pipeline::new(&image)
        .width(settings.width)
        .ratio(settings.ratio)
        .colorspace(settings.space)
        .threads(settings.threads);

    let grid = timed!("resize", pipeline.grid());
    debug!(
        path = %path.display(),
        width = grid.width,
        height = grid.height,
        threads = settings.threads.get(),
        "quantizing"
    );

    let indexed = timed!("quantize", pipeline.indexed_grid(&grid))
        .with_context(|| format!("could not quantize {}", path.display()))?;

    let rendered = timed!("render", indexed.render(out));
    rendered.context("could not write the image")
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("termquant=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn pause() {
    println!("press \"return\" to exit...");
    if let Err(err) = io::stdin().lock().read_line(&mut String::new()) {
        error!("could not read from stdin: {err}");
    }
}

fn main() -> ExitCode {
    let matches = Options::command().get_matches();
    let options = Options::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    init_logging(options.verbose);

    let mut failed = false;
    let mut stdout = io::stdout().lock();
    for (path, settings) in jobs(&options, &matches) {
        if let Err(err) = print_image(&path, settings, &mut stdout) {
            error!("{err:#}");
            failed = true;
        }
    }
    drop(stdout);

    if options.pause {
        pause();
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
