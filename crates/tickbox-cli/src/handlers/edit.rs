use anyhow::{bail, Result};
use tickbox_types::TodoId;

use crate::config::Settings;
use crate::output;
use crate::types::OutputFormat;

/// Runs the full edit-commit policy: an unchanged title is a no-op, an
/// emptied title deletes the item, anything else renames it.
pub async fn handle(
    settings: &Settings,
    id: TodoId,
    title: &str,
    format: OutputFormat,
) -> Result<()> {
    let controller = super::open_session(settings).await?;

    controller.begin_edit(id);
    if controller.editing_id().is_none() {
        bail!("no todo with id {}", id);
    }

    controller.set_edit_buffer(title);
    controller.commit_edit().await?;
    output::print_snapshot(&controller.snapshot(), format)
}
