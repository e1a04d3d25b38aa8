use colored::Color;

pub const PRIMARY: Color = Color::BrightBlue;
pub const ACCENT: Color = Color::BrightCyan;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const COST: Color = Color::BrightGreen;
pub const WEIGHT: Color = Color::Yellow;
pub const COUNTRY: Color = Color::Magenta;
pub const ERROR: Color = Color::Red;
