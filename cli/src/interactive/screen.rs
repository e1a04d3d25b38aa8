use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::{Color, PrintStyledContent, StyledContent, Stylize};
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use shipbox_common::shipping::color::{hex_to_rgb, parse_rgb_triplet};
use shipbox_common::storage::BoxStorage;
use shipbox_core::app::App;
use shipbox_core::form::BoxForm;
use shipbox_core::listing::{SortField, SortOrder};
use shipbox_core::pricing::calculate_shipping_cost;
use shipbox_core::router::{Route, Router};

use super::{Field, Status, UiState};
use crate::terminal::format;

const ACTIVE_TAB: Color = Color::Blue;
const TITLE: Color = Color::Blue;
const MUTED: Color = Color::DarkGrey;

/// Raw mode and the alternate screen, restored on drop.
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen, Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(e);
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Writes one line per call; raw mode needs explicit cursor moves.
struct Canvas<'w, W: Write> {
    out: &'w mut W,
    row: u16,
}

impl<'w, W: Write> Canvas<'w, W> {
    fn new(out: &'w mut W) -> Self {
        Self { out, row: 0 }
    }

    fn put<D: std::fmt::Display>(&mut self, content: StyledContent<D>) -> io::Result<()> {
        queue!(self.out, PrintStyledContent(content))
    }

    fn newline(&mut self) -> io::Result<()> {
        self.row += 1;
        queue!(self.out, MoveTo(0, self.row))
    }

    fn line<D: std::fmt::Display>(&mut self, content: StyledContent<D>) -> io::Result<()> {
        self.put(content)?;
        self.newline()
    }
}

pub fn draw<S: BoxStorage, W: Write>(out: &mut W, app: &App<S>, ui: &UiState) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    let mut canvas = Canvas::new(out);

    draw_header(&mut canvas, &app.router)?;
    match app.router.current() {
        Route::AddBox => draw_form(&mut canvas, &app.form, ui)?,
        Route::BoxList => draw_list(&mut canvas, app, ui)?,
    }

    if let Some(status) = &ui.status {
        canvas.newline()?;
        match status {
            Status::Info(message) => canvas.line(message.as_str().green())?,
            Status::Error(message) => canvas.line(message.as_str().red())?,
        }
    }
    canvas.newline()?;
    draw_help(&mut canvas, app.router.current())?;
    canvas.out.flush()
}

fn draw_header<W: Write>(canvas: &mut Canvas<'_, W>, router: &Router) -> io::Result<()> {
    canvas.put(" 📦 Shipping Box ".bold().with(TITLE))?;
    canvas.put("   ".stylize())?;
    for route in Route::ALL {
        let label = format!(" {} ", route.title());
        if router.is_active(route) {
            canvas.put(label.bold().with(ACTIVE_TAB).on(Color::White))?;
        } else {
            canvas.put(label.with(Color::White).on(Color::DarkBlue))?;
        }
        canvas.put(" ".stylize())?;
    }
    canvas.newline()?;
    canvas.line("─".repeat(72).with(MUTED))?;
    canvas.newline()
}

fn draw_form<W: Write>(canvas: &mut Canvas<'_, W>, form: &BoxForm, ui: &UiState) -> io::Result<()> {
    canvas.line("Add a New Box".bold())?;
    canvas.newline()?;

    for field in Field::ALL {
        let marker = if ui.focus == field { "› " } else { "  " };
        canvas.put(marker.with(Color::Cyan))?;
        canvas.put(format::pad(field.label(), 16).with(Color::White))?;
        match field {
            Field::Receiver => canvas.put(input_box(form.receiver_name(), ui.focus == field))?,
            Field::Weight => canvas.put(input_box(form.weight(), ui.focus == field))?,
            Field::Color => {
                canvas.put(input_box(form.box_color(), ui.focus == field))?;
                let rgb = hex_to_rgb(form.box_color());
                if let Some((r, g, b)) = parse_rgb_triplet(&rgb) {
                    canvas.put("  ██ ".with(Color::Rgb { r, g, b }))?;
                }
                canvas.put(format!("({rgb})").with(MUTED))?;
            }
            Field::Country => {
                let country = form.destination_country();
                canvas.put(format!("< {country} >").with(Color::Magenta))?;
                let rate = format!("  {}/kg", format::money(country.rate_per_kg()));
                canvas.put(rate.with(MUTED))?;
            }
        }
        canvas.newline()?;
    }

    canvas.newline()?;
    if let Some(cost) = estimate(form) {
        canvas.put("Shipping cost: ".stylize())?;
        canvas.line(format::money(cost).bold().with(Color::Green))?;
    }

    for error in form.errors() {
        canvas.line(format!("• {error}").with(Color::Red))?;
    }
    Ok(())
}

fn input_box(value: &str, focused: bool) -> StyledContent<String> {
    let cursor = if focused { "▏" } else { "" };
    let text = format!("[{value}{cursor}]");
    if focused { text.bold() } else { text.stylize() }
}

/// Cost preview while typing, shown only for a usable weight.
fn estimate(form: &BoxForm) -> Option<f64> {
    let weight: f64 = form.weight().trim().parse().ok()?;
    (weight.is_finite() && weight > 0.0)
        .then(|| calculate_shipping_cost(weight, form.destination_country()))
}

fn draw_list<S: BoxStorage, W: Write>(
    canvas: &mut Canvas<'_, W>,
    app: &App<S>,
    ui: &UiState,
) -> io::Result<()> {
    let query = app.list.query();
    canvas.line("Shipping Box List".bold())?;
    canvas.newline()?;

    canvas.put("Search: ".stylize())?;
    canvas.put(input_box(app.list.search_input(), true))?;
    if app.list.search_input() != query.search {
        canvas.put(" …".with(MUTED))?;
    }
    canvas.put("   Country: ".stylize())?;
    canvas.put(query.country.to_string().with(Color::Magenta))?;
    canvas.newline()?;
    canvas.newline()?;

    if app.store().is_empty() {
        canvas.line("No boxes added yet. Add your first box to get started!".with(MUTED))?;
        return Ok(());
    }

    let projection = app.projection();
    let cells: Vec<[String; 5]> = projection.rows.iter().map(|p| format::row_cells(p)).collect();
    let mut widths = format::column_widths(&cells);
    // room for the swatch in front of the color and a sort arrow after each title
    widths[2] += 3;
    for width in widths.iter_mut() {
        *width += 2;
    }

    for (idx, title) in format::TABLE_HEADERS.iter().enumerate() {
        let title = format!("{title}{}", sort_arrow(idx, query.sort.field, query.sort.order));
        canvas.put(format::pad(&title, widths[idx]).bold().with(Color::White).on(Color::DarkBlue))?;
    }
    canvas.newline()?;

    if projection.is_empty() {
        canvas.line("No boxes match your search.".with(MUTED))?;
    }

    for (idx, (parcel, row)) in projection.rows.iter().zip(&cells).enumerate() {
        let selected = idx == ui.selected;
        for (col, cell) in row.iter().enumerate() {
            if col == 2 {
                if let Some((r, g, b)) = parse_rgb_triplet(&parcel.box_color) {
                    canvas.put("██ ".with(Color::Rgb { r, g, b }))?;
                } else {
                    canvas.put("   ".stylize())?;
                }
                let styled = format::pad(cell, widths[col] - 3).stylize();
                canvas.put(if selected { styled.reverse() } else { styled })?;
                continue;
            }
            let styled = format::pad(cell, widths[col]).stylize();
            canvas.put(if selected { styled.reverse() } else { styled })?;
        }
        canvas.newline()?;
    }

    canvas.newline()?;
    canvas.put(format!("Showing {} of {} boxes. ", projection.rows.len(), app.store().len()).stylize())?;
    canvas.put("Total shipping cost: ".stylize())?;
    canvas.line(format::money(projection.total_cost).bold().with(Color::Green))
}

fn sort_arrow(column: usize, field: SortField, order: SortOrder) -> &'static str {
    let sorted_column = match field {
        SortField::None => None,
        SortField::Name => Some(0),
        SortField::Weight => Some(1),
        SortField::Cost => Some(4),
    };
    match (sorted_column == Some(column), order) {
        (false, _) => "",
        (true, SortOrder::Asc) => " ↑",
        (true, SortOrder::Desc) => " ↓",
    }
}

fn draw_help<W: Write>(canvas: &mut Canvas<'_, W>, route: Route) -> io::Result<()> {
    let help = match route {
        Route::AddBox => "F1 add · F2 list · ↑/↓ field · ←/→ country · Enter save · Esc quit",
        Route::BoxList => {
            "F1 add · F2 list · type to search · Tab country · F5 name · F6 weight · F7 cost · Del remove · Esc quit"
        }
    };
    canvas.line(help.with(MUTED))
}
