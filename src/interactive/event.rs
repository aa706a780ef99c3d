use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

pub enum Event {
    Key(KeyEvent),
    Tick,
}

/// Polls crossterm on a background thread and forwards key presses, with a
/// tick after every poll window. The thread exits once the handler is dropped.
pub struct EventHandler {
    receiver: mpsc::Receiver<Event>,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        let (sender, receiver) = mpsc::channel();
        let tick_rate = Duration::from_millis(tick_rate_ms);

        thread::spawn(move || loop {
            if let Ok(true) = event::poll(tick_rate) {
                if let Ok(CrosstermEvent::Key(key)) = event::read() {
                    if key.kind == KeyEventKind::Press && sender.send(Event::Key(key)).is_err() {
                        break;
                    }
                }
            }
            if sender.send(Event::Tick).is_err() {
                break;
            }
        });

        Self { receiver }
    }

    pub fn recv(&self) -> Result<Event, mpsc::RecvError> {
        self.receiver.recv()
    }
}
