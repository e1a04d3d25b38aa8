use colored::*;
use shipbox_common::shipping::color::parse_rgb_triplet;
use shipbox_common::shipping::parcel::ShippingBox;
use unicode_width::UnicodeWidthStr;

use crate::terminal::colors;

type Detail = (String, ColoredString);

pub const TABLE_HEADERS: [&str; 5] = [
    "Receiver Name",
    "Weight (kg)",
    "Box Color",
    "Destination",
    "Cost (INR)",
];

pub fn money(amount: f64) -> String {
    format!("₹{amount:.2}")
}

/// A small block painted in the box color, or `?` for an unreadable triplet.
pub fn swatch(rgb: &str) -> ColoredString {
    match parse_rgb_triplet(rgb) {
        Some((r, g, b)) => "██".truecolor(r, g, b),
        None => "??".color(colors::SEPARATOR),
    }
}

pub fn parcel_to_details(parcel: &ShippingBox) -> Vec<Detail> {
    vec![
        ("Id".to_string(), parcel.id.as_str().color(colors::SEPARATOR)),
        ("Weight".to_string(), format!("{} kg", parcel.weight).color(colors::WEIGHT)),
        (
            "Color".to_string(),
            format!("{} {}", swatch(&parcel.box_color), parcel.box_color).normal(),
        ),
        (
            "Destination".to_string(),
            parcel.destination_country.name().color(colors::COUNTRY),
        ),
        ("Cost".to_string(), money(parcel.shipping_cost).color(colors::COST).bold()),
    ]
}

/// Plain cells of one table row, in [`TABLE_HEADERS`] order.
pub fn row_cells(parcel: &ShippingBox) -> [String; 5] {
    [
        parcel.receiver_name.clone(),
        parcel.weight.to_string(),
        parcel.box_color.clone(),
        parcel.destination_country.name().to_string(),
        money(parcel.shipping_cost),
    ]
}

/// Width of each column, wide enough for the header and every cell.
pub fn column_widths(rows: &[[String; 5]]) -> [usize; 5] {
    let mut widths = TABLE_HEADERS.map(|header| header.width());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }
    widths
}

/// Left-aligns `text` in `width` terminal columns.
pub fn pad(text: &str, width: usize) -> String {
    format!("{}{}", text, " ".repeat(width.saturating_sub(text.width())))
}
