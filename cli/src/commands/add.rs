use colored::*;
use shipbox_common::config::Config;
use shipbox_common::shipping::country::Country;
use shipbox_core::form::BoxForm;

use crate::SessionStore;
use crate::terminal::{colors, format, print};

pub fn add(
    mut store: SessionStore,
    receiver: String,
    weight: String,
    color: Option<String>,
    country: Country,
    cfg: &Config,
) -> anyhow::Result<()> {
    let mut form = BoxForm::new();
    form.set_receiver_name(receiver);
    form.set_weight(weight);
    if let Some(color) = color {
        form.set_box_color(color);
    }
    form.set_destination_country(country);

    let parcel = match form.submit(&mut store) {
        Ok(parcel) => parcel,
        Err(errors) => {
            for error in &errors {
                print::print_error(error.to_string());
            }
            anyhow::bail!("box not added, {} problem(s) with the input", errors.len());
        }
    };

    if cfg.quiet > 1 {
        print::print(&parcel.id);
        return Ok(());
    }

    print::tree_head(store.len(), &parcel.receiver_name);
    print::as_tree_one_level(format::parcel_to_details(&parcel));
    if let Some(err) = store.last_persist_error() {
        print::print_error(format!("box kept for this run only: {err}"));
    }
    let total: ColoredString = format::money(store.total_cost()).color(colors::COST).bold();
    print::print_status(format!("{} boxes on record, {} in total", store.len(), total));
    Ok(())
}
