use super::args::{Cli, Commands};
use super::handlers::{self, HandlerContext};
use crate::config::{self, Config};
use crate::logging::{self, LogSink};
use anyhow::Result;
use is_terminal::IsTerminal;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = config::resolve_workspace_path(cli.data_dir.as_deref())?;
    let command = cli.command.unwrap_or(Commands::Browse {
        path: "/".to_string(),
    });

    // The browser owns the terminal, so its logs go to a file
    let sink = match &command {
        Commands::Browse { .. } if std::io::stdout().is_terminal() => {
            LogSink::File(data_dir.join(logging::LOG_FILE_NAME))
        }
        _ => LogSink::Stderr,
    };
    logging::init(cli.log_level, &sink);

    let config_path = data_dir.join(Config::FILE_NAME);
    let config = Config::load_from(&config_path)?;
    let catalog = config.load_catalog()?;
    tracing::debug!(
        data_dir = %data_dir.display(),
        tracks = catalog.len(),
        custom_catalog = config.catalog.is_some(),
        "Workspace loaded"
    );

    let ctx = HandlerContext::new(catalog, config.timing(), cli.format);

    match command {
        Commands::Browse { path } => handlers::browse::handle(ctx, &path),
        Commands::List { difficulty } => {
            handlers::list::handle(&ctx, difficulty.map(Into::into))
        }
        Commands::Show { track_id } => handlers::show::handle(&ctx, &track_id),
        Commands::Search { query } => handlers::search::handle(&ctx, &query),
        Commands::Route { path } => handlers::route::handle(&ctx, &path),
    }
}
