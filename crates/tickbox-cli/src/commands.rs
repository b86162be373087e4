use crate::args::{Cli, Commands};
use crate::config::Settings;
use crate::handlers;
use anyhow::Result;

pub async fn run(cli: Cli) -> Result<()> {
    let settings = Settings::resolve(&cli)?;
    let format = cli.format;

    match cli.command {
        Commands::List { filter } => handlers::list::handle(&settings, filter.into(), format).await,
        Commands::Add { title } => handlers::add::handle(&settings, &title.join(" "), format).await,
        Commands::Done { id } => handlers::toggle::handle(&settings, id, true, format).await,
        Commands::Undone { id } => handlers::toggle::handle(&settings, id, false, format).await,
        Commands::Edit { id, title } => {
            handlers::edit::handle(&settings, id, &title.join(" "), format).await
        }
        Commands::Rm { id } => handlers::remove::handle(&settings, id, format).await,
        Commands::ToggleAll => handlers::toggle_all::handle(&settings, format).await,
        Commands::ClearCompleted => handlers::clear::handle(&settings, format).await,
    }
}
