use colored::*;
use shipbox_common::config::Config;
use shipbox_common::shipping::country::Country;
use shipbox_core::pricing::calculate_shipping_cost;

use crate::terminal::{colors, format, print};

pub fn rates(cfg: &Config) {
    print::header("Rates per kilogram", cfg.quiet);
    let key_width: usize = Country::ALL.iter().map(|c| c.name().len()).max().unwrap_or(0);
    for country in Country::ALL {
        let rate: ColoredString = format!("{}/kg", format::money(country.rate_per_kg())).color(colors::COST);
        print::aligned_line(country.name(), rate, key_width);
    }
}

pub fn quote(weight: f64, country: Country, cfg: &Config) {
    let cost: f64 = calculate_shipping_cost(weight, country);
    if cfg.quiet > 1 {
        print::print(&format!("{cost:.2}"));
        return;
    }
    print::header("Quote", cfg.quiet);
    let value: ColoredString = format::money(cost).color(colors::COST).bold();
    print::print_status(format!(
        "{weight} kg to {} at {}/kg costs {}",
        country.name().color(colors::COUNTRY),
        format::money(country.rate_per_kg()),
        value
    ));
}
