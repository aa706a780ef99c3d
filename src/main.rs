use std::process;

use leadhub_cli::cli::build_cli;
use leadhub_cli::cli_context::CliContext;
use leadhub_cli::commands::{
    handle_login, handle_logout, handle_menu, handle_open, handle_routes, handle_whoami,
};
use leadhub_cli::interactive::run_navigator;
use leadhub_cli::logging::{init_logging, log_error};

#[tokio::main]
async fn main() {
    let matches = build_cli().get_matches();

    let skip_log = matches
        .subcommand_matches("interactive")
        .map(|m| m.get_flag("no-log"))
        .unwrap_or(false);
    if !skip_log {
        // A missing log directory is not worth failing the command over.
        let _ = init_logging();
    }

    let mut ctx = match CliContext::load() {
        Ok(ctx) => ctx,
        Err(e) => {
            log_error(&e.to_string());
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let result = match matches.subcommand() {
        Some(("login", sub_matches)) => handle_login(&mut ctx, sub_matches).await.map(|_| ()),
        Some(("logout", sub_matches)) => handle_logout(&mut ctx, sub_matches).await,
        Some(("whoami", sub_matches)) => handle_whoami(&mut ctx, sub_matches).await,
        Some(("menu", sub_matches)) => handle_menu(&mut ctx, sub_matches).await,
        Some(("open", sub_matches)) => handle_open(&mut ctx, sub_matches).await.map(|_| ()),
        Some(("routes", sub_matches)) => handle_routes(&mut ctx, sub_matches).await,
        Some(("interactive", _)) => run_navigator(ctx.gate_mut()).await.map(|signed_out| {
            if signed_out {
                println!("Signed out.");
            }
        }),
        _ => {
            eprintln!("Unknown command. Use 'leadhub --help' for available commands.");
            process::exit(1);
        }
    };

    if let Err(e) = result {
        log_error(&e.to_string());
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
