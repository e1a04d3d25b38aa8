//! # Interactive Screens
//!
//! The add-box form and the box list, with a header to switch between them.
//!
//! Everything runs on one task: key presses arrive from the reader thread
//! through a channel and the loop also wakes when the search debounce is due.
//! The screen is redrawn from the [`App`] state after every event.

mod input;
mod screen;

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use shipbox_common::config::Config;
use shipbox_common::storage::BoxStorage;
use shipbox_core::app::App;
use shipbox_core::form::BoxForm;
use shipbox_core::listing::SortField;
use shipbox_core::router::Route;
use tokio::time;
use tracing::debug;

use crate::SessionStore;
use crate::terminal::format;
use input::InputHandle;
use screen::TerminalGuard;

/// How long the loop sleeps when no debounce is pending.
const IDLE_WAKE: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Field {
    #[default]
    Receiver,
    Weight,
    Color,
    Country,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Receiver, Field::Weight, Field::Color, Field::Country];

    pub fn label(self) -> &'static str {
        match self {
            Field::Receiver => "Receiver Name",
            Field::Weight => "Weight (kg)",
            Field::Color => "Box Color",
            Field::Country => "Destination",
        }
    }

    fn next(self) -> Field {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    fn previous(self) -> Field {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// One-line message shown under the active screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Info(String),
    Error(String),
}

/// Screen state that is not part of the application itself.
#[derive(Debug, Default)]
pub struct UiState {
    pub focus: Field,
    /// Highlighted row of the list projection.
    pub selected: usize,
    pub status: Option<Status>,
}

impl UiState {
    fn clamp_selection(&mut self, rows: usize) {
        self.selected = self.selected.min(rows.saturating_sub(1));
    }

    /// Shows `done` unless the store could not save the change, in which case
    /// the save failure wins.
    fn report<S: BoxStorage>(&mut self, app: &App<S>, done: String) {
        self.status = Some(match app.store().last_persist_error() {
            Some(e) => Status::Error(format!("{done}, but it was not saved: {e}")),
            None => Status::Info(done),
        });
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub async fn run(store: SessionStore, cfg: &Config) -> anyhow::Result<()> {
    let mut app = App::new(store, cfg.debounce);
    let mut ui = UiState::default();

    let _guard = TerminalGuard::enter()?;
    let mut input = InputHandle::new();
    let Some(mut keys) = input.start() else {
        anyhow::bail!("key reader already started");
    };
    let mut stdout = io::stdout();

    loop {
        screen::draw(&mut stdout, &app, &ui)?;

        let wake = app.list.next_deadline();
        let sleep = time::sleep_until(time::Instant::from_std(
            wake.unwrap_or_else(|| Instant::now() + IDLE_WAKE),
        ));

        tokio::select! {
            key = keys.recv() => {
                let Some(key) = key else { break };
                if handle_key(&mut app, &mut ui, key, Instant::now()) == Flow::Quit {
                    break;
                }
            }
            _ = sleep, if wake.is_some() => {
                if app.list.tick(Instant::now()) {
                    ui.selected = 0;
                }
            }
        }
    }

    debug!("leaving interactive mode");
    Ok(())
}

pub fn handle_key<S: BoxStorage>(
    app: &mut App<S>,
    ui: &mut UiState,
    key: KeyEvent,
    now: Instant,
) -> Flow {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => return Flow::Quit,
        KeyCode::Char('c') if ctrl => return Flow::Quit,
        KeyCode::F(1) => {
            app.router.navigate(Route::AddBox);
            return Flow::Continue;
        }
        KeyCode::F(2) => {
            app.router.navigate(Route::BoxList);
            return Flow::Continue;
        }
        _ => {}
    }

    match app.router.current() {
        Route::AddBox => handle_form_key(app, ui, key, ctrl),
        Route::BoxList => handle_list_key(app, ui, key, ctrl, now),
    }
    Flow::Continue
}

fn handle_form_key<S: BoxStorage>(app: &mut App<S>, ui: &mut UiState, key: KeyEvent, ctrl: bool) {
    match key.code {
        KeyCode::Tab | KeyCode::Down => ui.focus = ui.focus.next(),
        KeyCode::BackTab | KeyCode::Up => ui.focus = ui.focus.previous(),
        KeyCode::Left if ui.focus == Field::Country => {
            let country = app.form.destination_country().previous();
            app.form.set_destination_country(country);
        }
        KeyCode::Right if ui.focus == Field::Country => {
            let country = app.form.destination_country().next();
            app.form.set_destination_country(country);
        }
        KeyCode::Backspace => edit_field(&mut app.form, ui.focus, |text| {
            text.pop();
        }),
        KeyCode::Char(c) if !ctrl => edit_field(&mut app.form, ui.focus, |text| text.push(c)),
        KeyCode::Enter => match app.submit_form() {
            Ok(parcel) => {
                ui.focus = Field::default();
                ui.selected = 0;
                let done = format!(
                    "Added box for {} to {} costing {}",
                    parcel.receiver_name,
                    parcel.destination_country,
                    format::money(parcel.shipping_cost)
                );
                ui.report(app, done);
            }
            Err(_) => ui.status = None,
        },
        _ => {}
    }
}

fn edit_field(form: &mut BoxForm, field: Field, edit: impl FnOnce(&mut String)) {
    let mut text = match field {
        Field::Receiver => form.receiver_name().to_string(),
        Field::Weight => form.weight().to_string(),
        Field::Color => form.box_color().to_string(),
        Field::Country => return,
    };
    edit(&mut text);
    match field {
        Field::Receiver => form.set_receiver_name(text),
        Field::Weight => form.set_weight(text),
        Field::Color => form.set_box_color(text),
        Field::Country => {}
    }
}

fn handle_list_key<S: BoxStorage>(
    app: &mut App<S>,
    ui: &mut UiState,
    key: KeyEvent,
    ctrl: bool,
    now: Instant,
) {
    match key.code {
        KeyCode::Char(c) if !ctrl => {
            let text = format!("{}{}", app.list.search_input(), c);
            app.list.type_search(text, now);
        }
        KeyCode::Backspace => {
            let mut text = app.list.search_input().to_string();
            text.pop();
            app.list.type_search(text, now);
        }
        KeyCode::Tab => {
            let next = app.list.query().country.next();
            app.list.set_country_filter(next);
            ui.selected = 0;
        }
        KeyCode::F(5) => app.list.activate_sort(SortField::Name),
        KeyCode::F(6) => app.list.activate_sort(SortField::Weight),
        KeyCode::F(7) => app.list.activate_sort(SortField::Cost),
        KeyCode::Up => ui.selected = ui.selected.saturating_sub(1),
        KeyCode::Down => ui.selected += 1,
        KeyCode::Delete => {
            let target = app
                .projection()
                .rows
                .get(ui.selected)
                .map(|parcel| (parcel.id.clone(), parcel.receiver_name.clone()));
            if let Some((id, receiver)) = target {
                app.delete_box(&id);
                ui.report(app, format!("Deleted box for {receiver}"));
            }
        }
        _ => {}
    }
    ui.clamp_selection(app.projection().rows.len());
}
