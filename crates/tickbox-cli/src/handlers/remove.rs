use anyhow::Result;
use tickbox_types::TodoId;

use crate::config::Settings;
use crate::output;
use crate::types::OutputFormat;

pub async fn handle(settings: &Settings, id: TodoId, format: OutputFormat) -> Result<()> {
    let controller = super::open_session(settings).await?;
    controller.delete(id).await?;
    output::print_snapshot(&controller.snapshot(), format)
}
