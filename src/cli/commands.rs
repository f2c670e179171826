//! Command execution for the CSV normalizer

use crate::cli::args::Args;
use crate::config::TimezoneConfig;
use crate::constants::LOG_TARGET;
use crate::error::Result;
use crate::pipeline::{InputSpec, RowPipeline, RunStats};
use colored::Colorize;
use std::io;
use std::time::Instant;
use tracing::{debug, info};

/// Main command entry point
pub fn run(args: Args) -> Result<RunStats> {
    setup_logging(&args);

    let specs = args.input_specs();
    info!("Normalizing {} input(s)", specs.len());

    let start_time = Instant::now();
    let pipeline = RowPipeline::new(TimezoneConfig::default());

    let stdout = io::stdout();
    let stderr = io::stderr();
    let stats = pipeline.run_inputs(
        specs.iter().map(InputSpec::open),
        stdout.lock(),
        stderr.lock(),
    )?;

    if args.summary {
        print_summary(&stats, start_time.elapsed().as_secs_f64());
    }

    Ok(stats)
}

/// Set up structured logging on stderr based on CLI arguments
fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

    // try_init: a subscriber may already be installed when embedded or under test
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(io::stderr),
        )
        .try_init();

    debug!("Logging initialized at level: {}", log_level);
}

/// Human-readable run report on stderr
fn print_summary(stats: &RunStats, elapsed_secs: f64) {
    eprintln!();
    eprintln!("{}", "Normalization complete".bright_green().bold());
    eprintln!("  {} {}", "Rows read:".bright_cyan(), stats.rows_read);
    eprintln!("  {} {}", "Rows written:".bright_cyan(), stats.rows_written);

    let dropped = stats.rows_dropped.to_string();
    if stats.rows_dropped > 0 {
        eprintln!("  {} {}", "Rows dropped:".bright_cyan(), dropped.bright_yellow());
    } else {
        eprintln!("  {} {}", "Rows dropped:".bright_cyan(), dropped);
    }

    let rate = format!("{:.1}%", stats.success_rate());
    if stats.is_successful() {
        eprintln!("  {} {}", "Success rate:".bright_cyan(), rate.bright_green());
    } else {
        eprintln!("  {} {}", "Success rate:".bright_cyan(), rate.bright_red());
    }
    eprintln!("  {} {:.3}s", "Elapsed:".bright_cyan(), elapsed_secs);
}
