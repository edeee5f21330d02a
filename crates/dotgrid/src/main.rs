use clap::Parser;
use dotgrid_config::AppConfig;

mod app;
mod cli;
mod logging;
mod panel;
mod resize;

use app::App;
use cli::Cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    logging::init(cli.log.as_deref())?;

    let config_path = match cli.config.clone() {
        Some(path) => Some(path),
        None => AppConfig::default_path()
            .inspect_err(|err| tracing::warn!(error = %err, "no default config path"))
            .ok(),
    };

    let mut config = match config_path.as_deref().map(AppConfig::load_from) {
        Some(Ok(config)) => config,
        Some(Err(err)) => {
            tracing::warn!(error = %err, "ignoring unreadable config, using defaults");
            AppConfig::default()
        }
        None => AppConfig::default(),
    };
    cli.apply(&mut config);

    let terminal = ratatui::init();
    let result = App::new(config, config_path, cli.seed).run(terminal);
    ratatui::restore();
    result
}
