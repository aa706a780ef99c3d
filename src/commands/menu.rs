use clap::ArgMatches;

use crate::cli_context::CliContext;
use crate::error::LeadHubResult;
use crate::formatting::{format_role, print_menu};

pub async fn handle_menu(ctx: &mut CliContext, _matches: &ArgMatches) -> LeadHubResult<()> {
    let user = ctx.require_user()?;
    println!("Navigation for {}", format_role(user.role));
    print_menu(&ctx.gate().menu());
    Ok(())
}
