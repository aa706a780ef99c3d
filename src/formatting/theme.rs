use colored::{Color, Colorize};
use lazy_static::lazy_static;
use std::collections::HashMap;

use crate::models::Role;

/// Semantic color definitions for consistent theming
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticColor {
    // Role colors
    RoleAdmin,
    RoleTeamLead,
    RoleSalesAssociate,

    // Navigation
    Redirect,

    // Navigator chrome
    Header,
    Border,
    Selection,

    // Status colors
    Error,
    Success,

    // Text colors
    Muted,
}

/// Theme configuration for the CLI
#[derive(Debug, Clone)]
pub struct ColorTheme {
    colors: HashMap<SemanticColor, Color>,
}

impl ColorTheme {
    pub fn standard() -> Self {
        let mut colors = HashMap::new();

        colors.insert(SemanticColor::RoleAdmin, Color::Magenta);
        colors.insert(SemanticColor::RoleTeamLead, Color::Cyan);
        colors.insert(SemanticColor::RoleSalesAssociate, Color::Green);

        colors.insert(SemanticColor::Redirect, Color::Yellow);

        // Lead Hub navy
        colors.insert(SemanticColor::Header, Color::TrueColor { r: 21, g: 45, b: 96 });
        colors.insert(SemanticColor::Border, Color::TrueColor { r: 44, g: 78, b: 150 });
        colors.insert(SemanticColor::Selection, Color::TrueColor { r: 44, g: 78, b: 150 });

        colors.insert(SemanticColor::Error, Color::Red);
        colors.insert(SemanticColor::Success, Color::Green);

        colors.insert(SemanticColor::Muted, Color::TrueColor { r: 90, g: 90, b: 90 });

        Self { colors }
    }

    /// Get a color for a semantic meaning
    pub fn get(&self, semantic: SemanticColor) -> Color {
        self.colors.get(&semantic).copied().unwrap_or(Color::White)
    }

    pub fn set(&mut self, semantic: SemanticColor, color: Color) {
        self.colors.insert(semantic, color);
    }
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self::standard()
    }
}

lazy_static! {
    static ref THEME: ColorTheme = ColorTheme::standard();
}

/// Get a color from the shared theme
pub fn theme_color(semantic: SemanticColor) -> Color {
    THEME.get(semantic)
}

/// Extension trait for colorizing strings with semantic colors
pub trait ThemedColorize {
    fn with_theme(&self, semantic: SemanticColor) -> colored::ColoredString;
}

impl ThemedColorize for &str {
    fn with_theme(&self, semantic: SemanticColor) -> colored::ColoredString {
        self.color(theme_color(semantic))
    }
}

impl ThemedColorize for String {
    fn with_theme(&self, semantic: SemanticColor) -> colored::ColoredString {
        self.color(theme_color(semantic))
    }
}

pub mod helpers {
    use super::*;

    pub fn role_color(role: Role) -> SemanticColor {
        match role {
            Role::Admin => SemanticColor::RoleAdmin,
            Role::TeamLead => SemanticColor::RoleTeamLead,
            Role::SalesAssociate => SemanticColor::RoleSalesAssociate,
        }
    }

    pub fn allowed_symbol(allowed: bool) -> &'static str {
        if allowed { "✓" } else { "✗" }
    }
}
