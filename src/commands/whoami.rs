use clap::ArgMatches;

use crate::cli_context::CliContext;
use crate::error::LeadHubResult;
use crate::formatting::{print_capabilities, print_user};

pub async fn handle_whoami(ctx: &mut CliContext, _matches: &ArgMatches) -> LeadHubResult<()> {
    match ctx.gate().current_user() {
        Some(user) => print_user(user),
        None => println!("Not signed in"),
    }
    print_capabilities(&ctx.gate().capabilities());

    Ok(())
}
