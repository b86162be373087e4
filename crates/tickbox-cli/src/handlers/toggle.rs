use anyhow::Result;
use tickbox_types::{TodoId, TodoPatch};

use crate::config::Settings;
use crate::output;
use crate::types::OutputFormat;

pub async fn handle(
    settings: &Settings,
    id: TodoId,
    completed: bool,
    format: OutputFormat,
) -> Result<()> {
    let controller = super::open_session(settings).await?;
    controller.update(id, TodoPatch::completed(completed)).await?;
    output::print_snapshot(&controller.snapshot(), format)
}
