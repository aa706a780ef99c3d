//! What the current user may see.
//!
//! Everything here is a pure function of `Option<&User>`: no state, no I/O.

use crate::models::{NavItem, Role, Route, User};

const ADMIN_NAV: &[NavItem] = &[
    NavItem::new(Route::Dashboard, "Dashboard"),
    NavItem::new(Route::Leads, "Leads"),
    NavItem::new(Route::Team, "Team"),
    NavItem::new(Route::Members, "Members"),
    NavItem::new(Route::Analytics, "Analytics"),
];

const TEAM_LEAD_NAV: &[NavItem] = &[
    NavItem::new(Route::Dashboard, "Dashboard"),
    NavItem::new(Route::Leads, "Leads"),
    NavItem::new(Route::Analytics, "Analytics"),
];

const SALES_ASSOCIATE_NAV: &[NavItem] = &[
    NavItem::new(Route::Dashboard, "Dashboard"),
    NavItem::new(Route::Analytics, "Analytics"),
];

const FOOTER_NAV: &[NavItem] = &[
    NavItem::new(Route::Settings, "Settings"),
    NavItem::new(Route::Logout, "Logout"),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub is_authenticated: bool,
    pub is_admin: bool,
    pub is_team_lead: bool,
    pub is_sales_associate: bool,
}

impl Capabilities {
    pub fn of(user: Option<&User>) -> Self {
        let role = user.map(|u| u.role);
        Self {
            is_authenticated: user.is_some(),
            is_admin: role == Some(Role::Admin),
            is_team_lead: role == Some(Role::TeamLead),
            is_sales_associate: role == Some(Role::SalesAssociate),
        }
    }
}

/// Main navigation for a role, in display order.
pub fn navigation(role: Role) -> &'static [NavItem] {
    match role {
        Role::Admin => ADMIN_NAV,
        Role::TeamLead => TEAM_LEAD_NAV,
        Role::SalesAssociate => SALES_ASSOCIATE_NAV,
    }
}

/// Entries shown below the main navigation for every signed-in role.
pub fn footer_navigation() -> &'static [NavItem] {
    FOOTER_NAV
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Menu {
    pub main: &'static [NavItem],
    pub footer: &'static [NavItem],
}

impl Menu {
    pub fn is_empty(&self) -> bool {
        self.main.is_empty() && self.footer.is_empty()
    }

    /// Main entries followed by footer entries.
    pub fn items(&self) -> impl Iterator<Item = &'static NavItem> {
        self.main.iter().chain(self.footer.iter())
    }

    pub fn len(&self) -> usize {
        self.main.len() + self.footer.len()
    }
}

/// Anonymous users get an empty menu.
pub fn menu(user: Option<&User>) -> Menu {
    match user {
        Some(user) => Menu {
            main: navigation(user.role),
            footer: footer_navigation(),
        },
        None => Menu::default(),
    }
}

/// Team leads and sales associates are greeted by role; admins by name.
pub fn role_display_name(user: &User) -> &str {
    match user.role {
        Role::TeamLead | Role::SalesAssociate => user.role.label(),
        Role::Admin => &user.name,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Render(Route),
    Redirect(Route),
}

impl RouteDecision {
    /// Where the user ends up either way.
    pub fn destination(&self) -> Route {
        match self {
            RouteDecision::Render(route) | RouteDecision::Redirect(route) => *route,
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, RouteDecision::Redirect(_))
    }
}

pub fn guard(route: Route, user: Option<&User>) -> RouteDecision {
    if route == Route::Home {
        return RouteDecision::Redirect(Route::Dashboard);
    }

    let Some(user) = user else {
        return match route {
            Route::Login => RouteDecision::Render(Route::Login),
            _ => RouteDecision::Redirect(Route::Login),
        };
    };

    match route {
        Route::Login => RouteDecision::Redirect(Route::Dashboard),
        Route::Logout | Route::Settings => RouteDecision::Render(route),
        _ if navigation(user.role).iter().any(|item| item.route == route) => {
            RouteDecision::Render(route)
        }
        _ => RouteDecision::Redirect(Route::Dashboard),
    }
}

/// True when `route` would render without a redirect.
pub fn can_open(route: Route, user: Option<&User>) -> bool {
    guard(route, user) == RouteDecision::Render(route)
}
