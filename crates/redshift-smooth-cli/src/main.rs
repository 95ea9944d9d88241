//! Thin CLI over redshift-smooth-core.
//!
//! One run computes one temperature for the current (or given) time of
//! day and hands it to redshift. Everything interesting happens in the
//! core library; this binary only wires arguments to the pipeline and
//! maps errors to exit codes.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use redshift_smooth_core::{
    config, temperature_at, time, ConfigError, ConsoleReporter, CoreError, NoopSetter,
    RedshiftSetter, Reporter, Schedule, Setter, SilentReporter,
};

/// Exit status for configuration problems (EX_CONFIG).
const EXIT_CONFIG: u8 = 78;

#[derive(Parser)]
#[command(
    name = "redshift-smooth",
    version,
    about = "Smoothly scheduled color temperature for redshift",
    long_about = "Computes a display color temperature for the time of day from a \
                  schedule of rules and applies it via `redshift -P -O`. Rules live in \
                  ~/.config/redshift-scheduler/rules.conf, one per line:\n\n    \
                  06:30 -> 08:00 | 6500K   # ramp up over the morning\n    \
                  20:00 -- 23:00 | 3500K   # jump at dusk, hold all evening"
)]
struct Cli {
    /// Path to the rules file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Show extra detail about the chosen rule and command
    #[arg(short, long)]
    verbose: bool,

    /// Do not show any output messages (redshift's included)
    #[arg(short, long, conflicts_with = "verbose")]
    silent: bool,

    /// Compute for this time of day instead of now
    #[arg(long, value_name = "HH:MM")]
    time: Option<String>,

    /// Compute and report without invoking redshift
    #[arg(long)]
    dry_run: bool,

    /// Print the selected rule and computed temperature as JSON
    #[arg(long)]
    json: bool,
}

fn run(cli: &Cli, reporter: &dyn Reporter) -> Result<(), CoreError> {
    let path = cli.config.clone().unwrap_or_else(config::default_path);
    let rules = config::load_rules(&path)?;
    reporter.verbose(&format!("Config file found at: {}", path.display()));

    if rules.is_empty() {
        reporter.info("No rules in the config file. Nothing to do.");
        return Ok(());
    }
    let schedule = Schedule::new(rules)?;

    let minute = match &cli.time {
        Some(value) => time::parse_time_of_day(value)?,
        None => time::current_minute(),
    };
    reporter.verbose(&format!("Current time in minutes: {minute}"));

    let selection = schedule.select(minute);
    reporter.verbose(&format!("Rule to be used: {:?}", selection.rule));
    reporter.verbose(&format!(
        "Previous rule temperature: {}",
        selection.previous
    ));

    let temperature = temperature_at(&selection, minute);

    if cli.json {
        let payload = serde_json::json!({
            "time": minute,
            "rule": selection.rule,
            "previous": selection.previous,
            "temperature": temperature,
        });
        println!("{payload}");
    }

    let setter: Box<dyn Setter> = if cli.dry_run {
        Box::new(NoopSetter)
    } else {
        Box::new(RedshiftSetter { quiet: cli.silent })
    };
    setter.apply(temperature, reporter)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let reporter: Box<dyn Reporter> = if cli.silent {
        Box::new(SilentReporter)
    } else {
        Box::new(ConsoleReporter::new(cli.verbose))
    };

    match run(&cli, reporter.as_ref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if !cli.silent {
                eprintln!("error: {e}");
            }
            match e {
                CoreError::Config(ConfigError::NotFound { .. })
                | CoreError::Config(ConfigError::Format { .. })
                | CoreError::Config(ConfigError::BadTime { .. })
                | CoreError::Config(ConfigError::BadTemperature { .. }) => {
                    ExitCode::from(EXIT_CONFIG)
                }
                _ => ExitCode::FAILURE,
            }
        }
    }
}
