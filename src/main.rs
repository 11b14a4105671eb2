use anyhow::Result;
use clap::Parser;

use eco_track::config::settings::{Settings, LOG_ENV_VAR};
use eco_track::console::ConsoleSession;

#[derive(Parser)]
#[command(
    name = "eco-track",
    version,
    about = "Interactive emissions tracker",
    long_about = "Eco-Track helps small and medium-sized businesses record their \
                  emissions by category, see their total carbon footprint and get \
                  a reduction suggestion for their largest source."
)]
struct Cli {
    /// Log filter for the diagnostic stream on stderr (e.g. "info", "warn")
    #[arg(long, env = LOG_ENV_VAR)]
    log_level: Option<String>,

    /// Disable coloured log output (also honours NO_COLOR)
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = Settings::load(cli.log_level.as_deref(), cli.no_color)?;
    eco_track::logging::init(&settings)?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = ConsoleSession::new(stdin.lock(), stdout.lock());
    session.run();

    Ok(())
}
