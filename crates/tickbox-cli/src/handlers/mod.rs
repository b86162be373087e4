pub mod add;
pub mod clear;
pub mod edit;
pub mod list;
pub mod remove;
pub mod toggle;
pub mod toggle_all;

use std::sync::Arc;

use anyhow::Result;
use tickbox_client::TodoController;
use tickbox_store::HttpStore;

use crate::config::Settings;

/// Build a controller over the HTTP store and run the initial fetch.
pub async fn open_session(settings: &Settings) -> Result<TodoController> {
    let store = Arc::new(HttpStore::new(&settings.api_url));
    let controller = TodoController::new(store, settings.user_id);
    controller.load().await?;
    Ok(controller)
}
