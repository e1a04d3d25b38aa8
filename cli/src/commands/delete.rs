use shipbox_common::config::Config;
use tracing::warn;

use crate::SessionStore;
use crate::terminal::print;

pub fn delete(mut store: SessionStore, id: &str, cfg: &Config) -> anyhow::Result<()> {
    let receiver = store.get(id).map(|parcel| parcel.receiver_name.clone());

    if !store.delete_box(id) {
        warn!("No box with id {id}, nothing removed");
        return Ok(());
    }

    if cfg.quiet < 2 {
        print::print_status(format!(
            "Removed box {id} for {}",
            receiver.unwrap_or_default()
        ));
    }
    if let Some(err) = store.last_persist_error() {
        print::print_error(format!("removal not saved: {err}"));
    }
    Ok(())
}
