use shipbox_common::config::Config;

use crate::SessionStore;
use crate::interactive;
use crate::terminal::logging;

pub async fn ui(store: SessionStore, cfg: &Config) -> anyhow::Result<()> {
    logging::suspend(true);
    let result = interactive::run(store, cfg).await;
    logging::suspend(false);
    result
}
