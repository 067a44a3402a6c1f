//! Palette randomizer binary.
//!
//! Reads a ROM, randomizes the selected palette subsets and writes the
//! result next to the input (or to `--output`). Options can come from a
//! JSON config file; command-line flags override it.

use std::path::{Path, PathBuf};
use std::process;

use tracing_subscriber::EnvFilter;
use z3pr::{Options, Subset, randomize_from_options};

/// Config file read when the binary is started without arguments.
const DEFAULT_CONFIG: &str = "args.config";

// ---------------------------------------------------------------------------
// CLI argument parsing
// ---------------------------------------------------------------------------

#[derive(Default)]
struct CliArgs {
    config: Option<PathBuf>,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    json_dir: Option<PathBuf>,
    mode: Option<String>,
    seed: Option<u64>,
    subsets: Vec<Subset>,
}

fn print_usage() {
    eprintln!("Usage: z3pr [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --input <file>       ROM to randomize");
    eprintln!("  --output <file>      Output ROM [default: <input>-rand-pal.<ext>]");
    eprintln!("  --json-dir <dir>     Directory holding the offset tables [default: data]");
    eprintln!("  --mode <name>        none, default, grayscale, negative, blackout,");
    eprintln!("                       classic, dizzy, sick, puke [default: default]");
    eprintln!("  --seed <n>           Seed for reproducible output");
    eprintln!("  --config <file>      JSON options file [default: {DEFAULT_CONFIG} when no");
    eprintln!("                       arguments are given]");
    eprintln!("  --<subset>           Randomize a subset: dungeon, hud, link-sprite,");
    eprintln!("                       sword, shield, overworld");
    eprintln!("  --all                Randomize every subset");
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs::default();

    let value = |i: usize, flag: &str| -> String {
        if let Some(v) = args.get(i) {
            v.clone()
        } else {
            eprintln!("Missing value for {flag}");
            process::exit(1);
        }
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--input" | "-i" => {
                i += 1;
                cli.input = Some(PathBuf::from(value(i, "--input")));
            }
            "--output" | "-o" => {
                i += 1;
                cli.output = Some(PathBuf::from(value(i, "--output")));
            }
            "--json-dir" => {
                i += 1;
                cli.json_dir = Some(PathBuf::from(value(i, "--json-dir")));
            }
            "--mode" | "-m" => {
                i += 1;
                cli.mode = Some(value(i, "--mode"));
            }
            "--seed" => {
                i += 1;
                let text = value(i, "--seed");
                match text.parse() {
                    Ok(seed) => cli.seed = Some(seed),
                    Err(e) => {
                        eprintln!("Invalid seed {text:?}: {e}");
                        process::exit(1);
                    }
                }
            }
            "--config" => {
                i += 1;
                cli.config = Some(PathBuf::from(value(i, "--config")));
            }
            "--all" => {
                cli.subsets.extend(Subset::ALL);
            }
            "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            other => match other.strip_prefix("--").map(str::parse::<Subset>) {
                Some(Ok(subset)) => cli.subsets.push(subset),
                _ => {
                    eprintln!("Unknown argument: {other}");
                    process::exit(1);
                }
            },
        }
        i += 1;
    }

    if args.len() == 1 && Path::new(DEFAULT_CONFIG).exists() {
        cli.config = Some(PathBuf::from(DEFAULT_CONFIG));
    }

    cli
}

/// Layer command-line flags over the config file (if any).
fn build_options(cli: CliArgs) -> Result<Options, z3pr::Error> {
    let mut options = match cli.config {
        Some(ref path) => Options::from_config_file(path)?,
        None => Options::default(),
    };

    if cli.input.is_some() {
        options.input_file = cli.input;
    }
    if cli.output.is_some() {
        options.output_file = cli.output;
    }
    if cli.json_dir.is_some() {
        options.json_dir = cli.json_dir;
    }
    if let Some(mode) = cli.mode {
        options.mode = mode;
    }
    if cli.seed.is_some() {
        options.seed = cli.seed;
    }
    for subset in cli.subsets {
        options.set_enabled(subset, true);
    }
    Ok(options)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let cli = parse_args();

    let options = match build_options(cli) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Config error: {e}");
            process::exit(1);
        }
    };

    if options.input_file.is_none() {
        print_usage();
        process::exit(1);
    }

    match randomize_from_options(&options) {
        Ok(path) => println!("{}", path.display()),
        Err(e) => {
            eprintln!("Randomize error: {e}");
            process::exit(1);
        }
    }
}
