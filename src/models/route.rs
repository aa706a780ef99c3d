use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LeadHubError;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    Home,
    Login,
    Logout,
    Dashboard,
    Leads,
    Team,
    Members,
    Analytics,
    Settings,
}

impl Route {
    pub const ALL: [Route; 9] = [
        Route::Home,
        Route::Login,
        Route::Logout,
        Route::Dashboard,
        Route::Leads,
        Route::Team,
        Route::Members,
        Route::Analytics,
        Route::Settings,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::Logout => "/logout",
            Route::Dashboard => "/dashboard",
            Route::Leads => "/leads",
            Route::Team => "/team",
            Route::Members => "/members",
            Route::Analytics => "/analytics",
            Route::Settings => "/settings",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Login => "Login",
            Route::Logout => "Logout",
            Route::Dashboard => "Dashboard",
            Route::Leads => "Leads",
            Route::Team => "Team",
            Route::Members => "Members",
            Route::Analytics => "Analytics",
            Route::Settings => "Settings",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Route::Home => "Start page.",
            Route::Login => "Sign in to your account.",
            Route::Logout => "End the current session.",
            Route::Dashboard => "Performance overview of leads, revenue, and team metrics.",
            Route::Leads => "Track, assign, and follow up on leads.",
            Route::Team => "Teams, their leads, and their targets.",
            Route::Members => "Manage team members, roles, and assignments.",
            Route::Analytics => "Conversion, sources, and activity trends.",
            Route::Settings => "Configure your account and preferences.",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Route {
    type Err = LeadHubError;

    /// Accepts `/leads`, `leads`, and a trailing slash.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let normalized = trimmed.trim_matches('/').to_lowercase();
        if normalized.is_empty() {
            return Ok(Route::Home);
        }
        Route::ALL
            .into_iter()
            .find(|route| route.path().trim_start_matches('/') == normalized)
            .ok_or_else(|| LeadHubError::InvalidInput(format!("unknown route '{}'", trimmed)))
    }
}

/// One entry of a navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub route: Route,
    pub label: &'static str,
}

impl NavItem {
    pub const fn new(route: Route, label: &'static str) -> Self {
        Self { route, label }
    }
}
