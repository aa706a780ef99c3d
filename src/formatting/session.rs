use colored::*;

use crate::access::{self, Capabilities, Menu, RouteDecision};
use crate::models::{Role, Route, User};

use super::theme::helpers::{allowed_symbol, role_color};
use super::theme::{SemanticColor, ThemedColorize};

pub fn format_role(role: Role) -> ColoredString {
    role.label().with_theme(role_color(role)).bold()
}

pub fn print_user(user: &User) {
    println!(
        "Signed in as {} ({}) - {}",
        user.name.bold(),
        user.email,
        format_role(user.role)
    );
    println!("Welcome back, {}!", access::role_display_name(user));
}

pub fn print_capabilities(capabilities: &Capabilities) {
    let rows = [
        ("isAuthenticated", capabilities.is_authenticated),
        ("isAdmin", capabilities.is_admin),
        ("isTeamLead", capabilities.is_team_lead),
        ("isSalesAssociate", capabilities.is_sales_associate),
    ];
    for (name, on) in rows {
        let value = if on {
            "true".with_theme(SemanticColor::Success)
        } else {
            "false".with_theme(SemanticColor::Muted)
        };
        println!("  {:<18} {}", name, value);
    }
}

pub fn print_menu(menu: &Menu) {
    if menu.is_empty() {
        println!(
            "{}",
            "No navigation available. Sign in first.".with_theme(SemanticColor::Muted)
        );
        return;
    }

    println!("{}", "Main".with_theme(SemanticColor::Muted));
    for item in menu.main {
        println!(
            "  {} {:<12} {}",
            "•".bright_green(),
            item.label.bold(),
            item.route.path().bright_black()
        );
    }
    println!("{}", "Settings".with_theme(SemanticColor::Muted));
    for item in menu.footer {
        println!(
            "  {} {:<12} {}",
            "•".bright_black(),
            item.label,
            item.route.path().bright_black()
        );
    }
}

pub fn print_decision(requested: Route, decision: RouteDecision) {
    match decision {
        RouteDecision::Render(route) => {
            println!("{} {}", "→".with_theme(SemanticColor::Success), route.title().bold());
            println!("  {}", route.description());
        }
        RouteDecision::Redirect(route) => {
            println!(
                "{} {} redirects to {}",
                "↪".with_theme(SemanticColor::Redirect),
                requested.path(),
                route.path().bold()
            );
        }
    }
}

pub fn print_routes(user: Option<&User>) {
    println!("{:<3} {:<12} {:<12} {}", "", "Path".bold(), "Page".bold(), "Outcome".bold());
    println!("{}", "-".repeat(48));
    for route in Route::ALL {
        let decision = access::guard(route, user);
        let allowed = !decision.is_redirect();
        let symbol = if allowed {
            allowed_symbol(true).with_theme(SemanticColor::Success)
        } else {
            allowed_symbol(false).with_theme(SemanticColor::Error)
        };
        let outcome = match decision {
            RouteDecision::Render(_) => "renders".to_string(),
            RouteDecision::Redirect(to) => format!("→ {}", to.path()),
        };
        println!("{:<3} {:<12} {:<12} {}", symbol, route.path(), route.title(), outcome);
    }
}
