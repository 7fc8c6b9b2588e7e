// hrk entry point.
//
// Startup sequence:
// 1. Parse the command line
// 2. Initialize tracing (stderr; stdout carries the report)
// 3. Load config, copying defaults on first run
// 4. Run the command and render its output

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use hrk_cli::commands;
use hrk_cli::config;
use hrk_cli::pitching::RateColumn;
use hrk_cli::report::{self, OutputFormat};

/// Fantasy HR/K roster scoring and K-BB%+ pitching reports.
#[derive(Debug, Parser)]
#[command(name = "hrk", version)]
struct Cli {
    /// Directory holding `config/` and `defaults/`; data paths resolve from here.
    #[arg(long, default_value = ".")]
    base_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score each team: capped SP/RP strikeouts and total batter home runs.
    Totals {
        /// League from the roster book (overrides `run.league`).
        #[arg(long)]
        league: Option<String>,

        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// List pitchers with K%, BB%, K-BB% and K-BB%+ against the league average.
    KbbPlus {
        /// Club abbreviation to list, e.g. MIN (overrides `plus.team`).
        #[arg(long)]
        team: Option<String>,

        /// Column to sort by, descending (overrides `plus.order_by`).
        #[arg(long)]
        order_by: Option<RateColumn>,

        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing()?;

    let config = config::load_config(&cli.base_dir).context("failed to load configuration")?;
    info!(
        "Config loaded: season {}, league '{}'",
        config.season, config.league
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Totals { league, format } => {
            let run = commands::totals(&cli.base_dir, &config, league.as_deref())?;
            match format {
                OutputFormat::Text => report::render_run(&run, &mut out)?,
                OutputFormat::Json => report::write_json(&run, &mut out)?,
            }
        }
        Command::KbbPlus {
            team,
            order_by,
            format,
        } => {
            let kbb = commands::kbb_plus(&cli.base_dir, &config, team.as_deref(), order_by)?;
            match format {
                OutputFormat::Text => report::render_kbb(&kbb, &mut out)?,
                OutputFormat::Json => report::write_json(&kbb, &mut out)?,
            }
        }
    }

    out.flush()?;
    Ok(())
}

/// Initialize tracing to stderr so report output on stdout stays clean.
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("hrk=info,hrk_cli=info,hrk_core=info,warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
