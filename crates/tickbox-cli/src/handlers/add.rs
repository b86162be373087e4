use anyhow::Result;

use crate::config::Settings;
use crate::output;
use crate::types::OutputFormat;

pub async fn handle(settings: &Settings, title: &str, format: OutputFormat) -> Result<()> {
    let controller = super::open_session(settings).await?;
    controller.add(title).await?;
    output::print_snapshot(&controller.snapshot(), format)
}
