use crossterm::event::KeyCode;

use crate::access::{Capabilities, RouteDecision};
use crate::auth::Authenticator;
use crate::error::{LeadHubError, LeadHubResult};
use crate::models::{NavItem, Route, User};
use crate::session::SessionGate;
use crate::storage::KeyValueStore;

/// Sidebar navigator over a signed-in session.
pub struct NavigatorApp<'a, S, A> {
    gate: &'a mut SessionGate<S, A>,
    pub selected_index: usize,
    pub active: Route,
    pub should_quit: bool,
    pub signed_out: bool,
    pub notice: Option<String>,
}

impl<'a, S: KeyValueStore, A: Authenticator> NavigatorApp<'a, S, A> {
    pub fn new(gate: &'a mut SessionGate<S, A>) -> LeadHubResult<Self> {
        if !gate.is_authenticated() {
            return Err(LeadHubError::NotSignedIn);
        }

        let active = gate.guard(Route::Home).destination();
        let mut app = Self {
            gate,
            selected_index: 0,
            active,
            should_quit: false,
            signed_out: false,
            notice: None,
        };
        app.selected_index = app.index_of(active).unwrap_or(0);
        Ok(app)
    }

    pub fn items(&self) -> Vec<NavItem> {
        self.gate.menu().items().copied().collect()
    }

    pub fn main_len(&self) -> usize {
        self.gate.menu().main.len()
    }

    pub fn user(&self) -> Option<&User> {
        self.gate.current_user()
    }

    pub fn capabilities(&self) -> Capabilities {
        self.gate.capabilities()
    }

    fn index_of(&self, route: Route) -> Option<usize> {
        self.items().iter().position(|item| item.route == route)
    }

    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('j') | KeyCode::Down => self.move_selection_down(),
            KeyCode::Char('k') | KeyCode::Up => self.move_selection_up(),
            KeyCode::Enter => self.open_selected(),
            _ => {}
        }
    }

    fn move_selection_down(&mut self) {
        let len = self.items().len();
        if len > 0 {
            self.selected_index = (self.selected_index + 1) % len;
        }
    }

    fn move_selection_up(&mut self) {
        let len = self.items().len();
        if len > 0 {
            if self.selected_index == 0 {
                self.selected_index = len - 1;
            } else {
                self.selected_index -= 1;
            }
        }
    }

    pub fn open_selected(&mut self) {
        if let Some(item) = self.items().get(self.selected_index).copied() {
            self.open(item.route);
        }
    }

    /// Navigate through the route guard.
    pub fn open(&mut self, route: Route) {
        self.notice = None;
        match self.gate.guard(route) {
            RouteDecision::Render(Route::Logout) => {
                self.gate.logout();
                self.signed_out = true;
                self.should_quit = true;
            }
            RouteDecision::Render(target) => self.active = target,
            RouteDecision::Redirect(target) => {
                self.notice = Some(format!(
                    "{} is not available, showing {}",
                    route.path(),
                    target.path()
                ));
                self.active = target;
            }
        }
    }
}
