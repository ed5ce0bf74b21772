use std::error::Error;
use std::fs;
use std::io::{self, stdout, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use log::{info, LevelFilter};

use libaho::aho::builder::build_automaton_from_file;
use libaho::aho::Automaton;

#[derive(clap::Parser, Debug)]
#[command(
    name = "acscan",
    about = "Reports every occurrence of a set of patterns in a text"
)]
struct Cli {
    /// File with one pattern per line; blank lines and lines starting with '#' are ignored
    patterns: PathBuf,

    /// File with the text to scan
    text: PathBuf,

    #[arg(short, long, help = "Only print the number of matches")]
    count: bool,

    #[arg(long, help = "Print the states of the automaton before scanning")]
    dump: bool,

    #[arg(long, help = "Print the time spent building and scanning")]
    timings: bool,

    #[arg(short, long, action = clap::ArgAction::Count, help = "Increase logging verbosity")]
    verbose: u8,
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Writes one `<index>\t<start>\t<end>\t<pattern>` line per match, or only
/// the number of matches when `count` is set.
fn write_matches(
    ac: &Automaton<char>,
    text: &str,
    count: bool,
    out: &mut impl Write,
) -> io::Result<()> {
    if count {
        return writeln!(out, "{}", ac.count_matches(text.chars()));
    }
    for m in ac.find_iter(text.chars()) {
        let pattern: String = ac.pattern(m.pattern()).iter().collect();
        writeln!(out, "{}\t{}\t{}\t{}", m.pattern(), m.start(), m.end(), pattern)?;
    }
    Ok(())
}

fn main() -> Result<ExitCode, Box<dyn Error>> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(log_level(cli.verbose))
        .parse_default_env()
        .init();

    let start = Instant::now();
    let ac = build_automaton_from_file(&cli.patterns)?;
    let build_time = start.elapsed();
    info!(
        "{} patterns, {} states",
        ac.pattern_count(),
        ac.state_count()
    );

    let text = fs::read_to_string(&cli.text)
        .map_err(|e| format!("cannot read text file {}: {e}", cli.text.display()))?;

    let mut out = BufWriter::new(stdout().lock());
    if cli.dump {
        write!(out, "{ac}")?;
    }

    let start = Instant::now();
    write_matches(&ac, &text, cli.count, &mut out)?;
    let scan_time = start.elapsed();
    out.flush()?;

    if cli.timings {
        eprintln!("build: {:.3}s", build_time.as_secs_f32());
        eprintln!("scan: {:.3}s", scan_time.as_secs_f32());
    }

    Ok(ExitCode::SUCCESS)
}
