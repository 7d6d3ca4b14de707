#[macro_use]
extern crate log;

use std::env;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use fzr::prelude::*;

/// fzr - fzf-style fuzzy filter
///
/// Reads candidates line by line from stdin (or --input) and prints the ones
/// matching QUERY, best first.
///
/// Exits with 0 when something matched, 1 when nothing did and 2 on error.
#[derive(Parser, Debug)]
#[command(name = "fzr", args_override_self = true, verbatim_doc_comment, version, about)]
struct Cli {
    /// Query to match against every line
    query: String,

    /// Matching algorithm
    #[arg(long, value_enum, help_heading = "Search")]
    algo: Option<Algorithm>,

    /// Case sensitivity
    #[arg(long, value_enum, help_heading = "Search")]
    case: Option<CaseMatching>,

    /// Maximum number of results
    #[arg(long, help_heading = "Search")]
    limit: Option<usize>,

    /// Print every match
    #[arg(long, help_heading = "Search")]
    no_limit: bool,

    /// Keep the input order instead of sorting by score
    #[arg(long, help_heading = "Search")]
    no_sort: bool,

    /// Comma-separated list of criteria applied when scores are tied.
    ///
    /// Each criterion can be negated, e.g. -length
    #[arg(
        short,
        long,
        value_enum,
        value_delimiter = ',',
        allow_hyphen_values = true,
        help_heading = "Search",
        verbatim_doc_comment
    )]
    tiebreak: Vec<RankCriteria>,

    /// Print the score before each line
    #[arg(long, help_heading = "Output")]
    print_score: bool,

    /// Print the matched character indices after each line
    #[arg(long, help_heading = "Output")]
    positions: bool,

    /// Load search options from a RON file. Flags override it.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Read candidates from FILE instead of stdin
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,
}

//------------------------------------------------------------------------------
fn main() {
    env_logger::builder().format_timestamp_nanos().init();

    match real_main() {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(err) => {
            // if downstream pipe is closed, exit silently
            if let Some(io_err) = err.downcast_ref::<std::io::Error>()
                && io_err.kind() == std::io::ErrorKind::BrokenPipe
            {
                std::process::exit(0)
            }
            eprintln!("fzr: {err:?}");
            std::process::exit(2)
        }
    }
}

fn parse_args() -> Cli {
    let mut args: Vec<String> = env::args().take(1).collect();
    args.extend(
        env::var("FZR_DEFAULT_OPTIONS")
            .ok()
            .and_then(|val| shlex::split(&val))
            .unwrap_or_default(),
    );
    args.extend(env::args().skip(1));

    Cli::parse_from(args)
}

fn finder_options(cli: &Cli) -> Result<FinderOptions> {
    let mut options = match &cli.config {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .wrap_err_with(|| format!("Failed to read config {}", path.display()))?;
            FinderOptions::from_ron(&content)
                .wrap_err_with(|| format!("Invalid config {}", path.display()))?
        }
        None => FinderOptions::default(),
    };

    if let Some(algo) = cli.algo {
        options.algorithm = algo;
    }
    if let Some(case) = cli.case {
        options.casing = case;
    }
    if cli.no_limit {
        options.limit = None;
    } else if let Some(limit) = cli.limit {
        options.limit = Some(limit);
    }
    if cli.no_sort {
        options.sort = false;
    }
    if !cli.tiebreak.is_empty() {
        options.tiebreak = cli.tiebreak.clone();
    }
    if cli.positions {
        options.with_positions = true;
    }
    Ok(options)
}

fn read_lines(input: Option<&Path>) -> Result<Vec<String>> {
    let reader: Box<dyn BufRead> = match input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).wrap_err_with(|| format!("Failed to open {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(std::io::stdin())),
    };
    Ok(reader.lines().collect::<Result<_, _>>()?)
}

fn real_main() -> Result<i32> {
    color_eyre::install()?;
    let cli = parse_args();
    let options = finder_options(&cli)?;
    debug!("options: {options:?}");

    let lines = read_lines(cli.input.as_deref())?;
    let finder = Finder::with_options(lines, options);
    let results = finder.find(&cli.query);

    let mut stdout = BufWriter::new(std::io::stdout().lock());
    for entry in &results {
        if cli.print_score {
            write!(stdout, "{}\t", entry.score)?;
        }
        write!(stdout, "{}", entry.item)?;
        if let Some(positions) = &entry.positions {
            let positions: Vec<String> = positions.iter().map(ToString::to_string).collect();
            write!(stdout, "\t{}", positions.join(","))?;
        }
        writeln!(stdout)?;
    }
    stdout.flush()?;

    Ok(if results.is_empty() { 1 } else { 0 })
}
