use anyhow::Result;
use tickbox_types::StatusFilter;

use crate::config::Settings;
use crate::output;
use crate::types::OutputFormat;

pub async fn handle(settings: &Settings, filter: StatusFilter, format: OutputFormat) -> Result<()> {
    let controller = super::open_session(settings).await?;
    controller.set_filter(filter);
    output::print_snapshot(&controller.snapshot(), format)
}
