use clap::ArgMatches;
use colored::*;

use crate::cli_context::CliContext;
use crate::config::password_from_env;
use crate::error::{LeadHubError, LeadHubResult};
use crate::formatting::{print_menu, print_user};
use crate::models::User;

pub async fn handle_login(ctx: &mut CliContext, matches: &ArgMatches) -> LeadHubResult<User> {
    let email = matches
        .get_one::<String>("email")
        .ok_or_else(|| LeadHubError::InvalidInput("No email provided".to_string()))?;

    let password = matches
        .get_one::<String>("password")
        .cloned()
        .or_else(password_from_env)
        .ok_or_else(|| {
            LeadHubError::InvalidInput(
                "No password provided. Pass --password or set LEADHUB_PASSWORD".to_string(),
            )
        })?;

    let user = ctx.gate_mut().login(email, &password).await?;

    println!("{}", "✅ Signed in".green());
    print_user(&user);
    println!();
    print_menu(&ctx.gate().menu());

    Ok(user)
}

pub async fn handle_logout(ctx: &mut CliContext, _matches: &ArgMatches) -> LeadHubResult<()> {
    let was_signed_in = ctx.gate().is_authenticated();
    ctx.gate_mut().logout();

    if was_signed_in {
        println!("Signed out.");
    } else {
        println!("No active session.");
    }
    Ok(())
}
