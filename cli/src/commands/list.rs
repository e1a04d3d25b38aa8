use colored::*;
use shipbox_common::config::Config;
use shipbox_common::shipping::parcel::ShippingBox;
use shipbox_core::listing::{self, CountryFilter, ListQuery, SortField, SortOrder, SortState};

use crate::SessionStore;
use crate::sprint;
use crate::terminal::{colors, format, print};

pub fn list(
    store: &SessionStore,
    search: String,
    country: CountryFilter,
    sort: SortField,
    desc: bool,
    cfg: &Config,
) -> anyhow::Result<()> {
    let order = if desc { SortOrder::Desc } else { SortOrder::Asc };
    let query = ListQuery {
        search,
        country,
        sort: SortState::new(sort, order),
    };

    print::header("Shipping Box List", cfg.quiet);

    if store.is_empty() {
        print::no_results("No boxes added yet. Add your first box to get started!");
        return Ok(());
    }

    let projection = listing::project(store.boxes(), &query);
    if projection.is_empty() {
        print::no_results("No boxes match your search.");
    } else {
        print_table(&projection.rows, cfg);
    }

    if cfg.quiet == 0 {
        print::fat_separator();
    } else if cfg.quiet == 1 {
        sprint!();
    }
    if cfg.quiet < 2 {
        let total: ColoredString = format::money(projection.total_cost).color(colors::COST).bold();
        print::print_status(format!(
            "Showing {} of {} boxes, total shipping cost {}",
            projection.rows.len(),
            store.len(),
            total
        ));
    }
    Ok(())
}

fn print_table(rows: &[&ShippingBox], cfg: &Config) {
    let cells: Vec<[String; 5]> = rows.iter().map(|parcel| format::row_cells(parcel)).collect();
    let widths = column_widths_with_swatch(&cells);

    if cfg.quiet < 2 {
        let header: Vec<String> = format::TABLE_HEADERS
            .iter()
            .zip(widths)
            .map(|(title, width)| format::pad(title, width))
            .collect();
        print::print(&format!("{}", header.join("  ").color(colors::PRIMARY).bold()));
        let rule: usize = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
        print::print(&format!("{}", "─".repeat(rule).color(colors::SEPARATOR)));
    }

    for (parcel, row) in rows.iter().zip(&cells) {
        let color_cell = format!("{} {}", format::swatch(&parcel.box_color), row[2]);
        let line = [
            format::pad(&row[0], widths[0]).color(colors::TEXT_DEFAULT).to_string(),
            format::pad(&row[1], widths[1]).color(colors::WEIGHT).to_string(),
            // the swatch adds three visible columns in front of the triplet
            format!("{}{}", color_cell, " ".repeat(widths[2].saturating_sub(row[2].len() + 3))),
            format::pad(&row[3], widths[3]).color(colors::COUNTRY).to_string(),
            format::pad(&row[4], widths[4]).color(colors::COST).to_string(),
        ];
        print::print(&line.join("  "));
    }
}

fn column_widths_with_swatch(cells: &[[String; 5]]) -> [usize; 5] {
    let mut widths = format::column_widths(cells);
    let longest_color = cells.iter().map(|row| row[2].len() + 3).max().unwrap_or(0);
    widths[2] = widths[2].max(longest_color);
    widths
}
