use clap::ArgMatches;

use crate::access::RouteDecision;
use crate::cli_context::CliContext;
use crate::error::{LeadHubError, LeadHubResult};
use crate::formatting::{print_decision, print_routes};
use crate::models::Route;

/// Run `path` through the route guard. Opening `/logout` signs out.
pub async fn handle_open(
    ctx: &mut CliContext,
    matches: &ArgMatches,
) -> LeadHubResult<RouteDecision> {
    let path = matches
        .get_one::<String>("path")
        .ok_or_else(|| LeadHubError::InvalidInput("No path provided".to_string()))?;
    let route: Route = path.parse()?;

    let decision = ctx.gate().guard(route);
    print_decision(route, decision);

    if decision == RouteDecision::Render(Route::Logout) {
        ctx.gate_mut().logout();
        let landing = ctx.gate().guard(Route::Login);
        print_decision(Route::Login, landing);
    }

    Ok(decision)
}

pub async fn handle_routes(ctx: &mut CliContext, _matches: &ArgMatches) -> LeadHubResult<()> {
    print_routes(ctx.gate().current_user());
    Ok(())
}
