use crate::access::{
    can_open, footer_navigation, guard, menu, navigation, role_display_name, Capabilities,
    RouteDecision,
};
use crate::models::{Role, Route, User};

fn user(role: Role) -> User {
    User::new("someone@holidaypanda.com", "Someone", role)
}

fn routes(role: Role) -> Vec<Route> {
    navigation(role).iter().map(|item| item.route).collect()
}

#[test]
fn test_navigation_per_role() {
    assert_eq!(
        routes(Role::Admin),
        vec![Route::Dashboard, Route::Leads, Route::Team, Route::Members, Route::Analytics]
    );
    assert_eq!(routes(Role::TeamLead), vec![Route::Dashboard, Route::Leads, Route::Analytics]);
    assert_eq!(routes(Role::SalesAssociate), vec![Route::Dashboard, Route::Analytics]);
}

#[test]
fn test_footer_has_settings_then_logout() {
    let footer: Vec<Route> = footer_navigation().iter().map(|item| item.route).collect();
    assert_eq!(footer, vec![Route::Settings, Route::Logout]);
}

#[test]
fn test_capabilities_for_each_role() {
    let admin = Capabilities::of(Some(&user(Role::Admin)));
    assert!(admin.is_authenticated && admin.is_admin);
    assert!(!admin.is_team_lead && !admin.is_sales_associate);

    let lead = Capabilities::of(Some(&user(Role::TeamLead)));
    assert!(lead.is_team_lead && !lead.is_admin && !lead.is_sales_associate);

    let sales = Capabilities::of(Some(&user(Role::SalesAssociate)));
    assert!(sales.is_sales_associate && !sales.is_admin && !sales.is_team_lead);
}

#[test]
fn test_anonymous_has_no_capabilities_or_menu() {
    assert_eq!(Capabilities::of(None), Capabilities::default());
    assert!(menu(None).is_empty());
    assert_eq!(menu(None).len(), 0);
}

#[test]
fn test_derivation_is_deterministic() {
    let u = user(Role::TeamLead);
    assert_eq!(Capabilities::of(Some(&u)), Capabilities::of(Some(&u.clone())));
    assert_eq!(menu(Some(&u)), menu(Some(&u)));
}

#[test]
fn test_role_display_name() {
    assert_eq!(role_display_name(&user(Role::TeamLead)), "Team Lead");
    assert_eq!(role_display_name(&user(Role::SalesAssociate)), "Sales Associate");
    assert_eq!(role_display_name(&user(Role::Admin)), "Someone");
}

#[test]
fn test_guard_for_anonymous() {
    assert_eq!(guard(Route::Login, None), RouteDecision::Render(Route::Login));
    assert_eq!(guard(Route::Leads, None), RouteDecision::Redirect(Route::Login));
    assert_eq!(guard(Route::Settings, None), RouteDecision::Redirect(Route::Login));
    assert_eq!(guard(Route::Logout, None), RouteDecision::Redirect(Route::Login));
}

#[test]
fn test_home_redirects_to_dashboard() {
    assert_eq!(guard(Route::Home, None), RouteDecision::Redirect(Route::Dashboard));
    assert_eq!(
        guard(Route::Home, Some(&user(Role::Admin))),
        RouteDecision::Redirect(Route::Dashboard)
    );
}

#[test]
fn test_guard_for_signed_in_users() {
    let sales = user(Role::SalesAssociate);
    assert_eq!(guard(Route::Login, Some(&sales)), RouteDecision::Redirect(Route::Dashboard));
    assert_eq!(guard(Route::Analytics, Some(&sales)), RouteDecision::Render(Route::Analytics));
    assert_eq!(guard(Route::Leads, Some(&sales)), RouteDecision::Redirect(Route::Dashboard));
    assert_eq!(guard(Route::Settings, Some(&sales)), RouteDecision::Render(Route::Settings));
    assert_eq!(guard(Route::Logout, Some(&sales)), RouteDecision::Render(Route::Logout));
}

#[test]
fn test_guard_agrees_with_menu() {
    for role in Role::ALL {
        let u = user(role);
        for item in menu(Some(&u)).items() {
            assert!(can_open(item.route, Some(&u)), "{} should open {}", role, item.route);
        }
    }
    assert!(!can_open(Route::Members, Some(&user(Role::TeamLead))));
    assert!(can_open(Route::Members, Some(&user(Role::Admin))));
}

#[test]
fn test_decision_destination() {
    assert_eq!(RouteDecision::Redirect(Route::Login).destination(), Route::Login);
    assert!(!RouteDecision::Render(Route::Leads).is_redirect());
}
