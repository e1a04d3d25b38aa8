use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::debug;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Reads key presses on a dedicated thread and hands them to the event loop.
pub struct InputHandle {
    rx: Option<UnboundedReceiver<KeyEvent>>,
    tx: Option<UnboundedSender<KeyEvent>>,
}

impl InputHandle {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            rx: Some(rx),
            tx: Some(tx),
        }
    }

    /// Starts the reader thread. It stops once the returned receiver is dropped.
    pub fn start(&mut self) -> Option<UnboundedReceiver<KeyEvent>> {
        let tx = self.tx.take()?;
        thread::spawn(move || forward_keys(tx));
        self.rx.take()
    }
}

fn forward_keys(tx: UnboundedSender<KeyEvent>) {
    while !tx.is_closed() {
        match event::poll(POLL_INTERVAL) {
            Ok(true) => {}
            Ok(false) => continue,
            Err(e) => {
                debug!("stopped reading keys: {e}");
                break;
            }
        }
        match event::read() {
            Ok(Event::Key(key_event)) if key_event.kind == KeyEventKind::Press => {
                if tx.send(key_event).is_err() {
                    break;
                }
            }
            Ok(_) => {}
            Err(e) => {
                debug!("stopped reading keys: {e}");
                break;
            }
        }
    }
}
