use anyhow::Result;

use crate::config::Settings;
use crate::output;
use crate::types::OutputFormat;

pub async fn handle(settings: &Settings, format: OutputFormat) -> Result<()> {
    let controller = super::open_session(settings).await?;
    controller.clear_completed().await?;
    output::print_snapshot(&controller.snapshot(), format)
}
