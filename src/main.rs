//! mdsplice - replace `#import "path"` directives in doc.md with file contents
//!
//! Usage:
//!   mdsplice            # doc.md -> doc_gen.md in the current directory
//!   mdsplice -vv        # also trace each directive found
//!   mdsplice -d run.log # also write the log to run.log

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use clap_verbosity_flag::{InfoLevel, Verbosity};

use mdsplice::config;
use mdsplice::driver::{self, INPUT_FILE, OUTPUT_FILE};

#[derive(ClapParser)]
#[command(
    version,
    about = "Splice #import directives in doc.md into doc_gen.md",
    long_about = None
)]
struct Cli {
    /// debug log file
    #[arg(short, long, value_name = "FILE")]
    debuglogfile: Option<PathBuf>,
    #[command(flatten)]
    verbose: Verbosity<InfoLevel>,
}

fn init_logger(filter_level: log::LevelFilter, logfile: Option<PathBuf>) -> Result<()> {
    let mut loggers = vec![simplelog::TermLogger::new(
        filter_level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    ) as Box<dyn simplelog::SharedLogger>];
    if let Some(filename) = logfile {
        let file = File::create(&filename)
            .with_context(|| format!("cannot create log file {}", filename.display()))?;
        loggers.push(simplelog::WriteLogger::new(
            filter_level,
            simplelog::Config::default(),
            file,
        ));
    }
    simplelog::CombinedLogger::init(loggers)?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_logger(args.verbose.log_level_filter(), args.debuglogfile)?;

    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    let config = match config::load_config(&cwd)? {
        Some(loaded) => {
            log::debug!("loaded config from {}", loaded.path.display());
            loaded.config
        }
        None => Default::default(),
    };

    let report = driver::run_in(&cwd, &config)?;
    log::info!(
        "Spliced {} import(s) from {} into {}",
        report.statistics.directive_count,
        INPUT_FILE,
        OUTPUT_FILE
    );
    Ok(())
}
