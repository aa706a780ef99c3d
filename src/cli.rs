use clap::{Arg, ArgAction, Command};

use crate::constants::APP_TITLE;

pub fn build_cli() -> Command {
    Command::new("leadhub")
        .about(format!(
            "{} - sign in and browse role-gated navigation from the terminal",
            APP_TITLE
        ))
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("login")
                .about("Sign in and remember the session")
                .arg(
                    Arg::new("email")
                        .long("email")
                        .short('e')
                        .value_name("EMAIL")
                        .help("Account email (matched case-insensitively)")
                        .required(true),
                )
                .arg(
                    Arg::new("password")
                        .long("password")
                        .short('p')
                        .value_name("PASSWORD")
                        .help("Account password; falls back to LEADHUB_PASSWORD")
                        .required(false),
                ),
        )
        .subcommand(Command::new("logout").about("Forget the stored session"))
        .subcommand(
            Command::new("whoami").about("Show the signed-in user and their capabilities"),
        )
        .subcommand(Command::new("menu").about("Show the navigation menu for your role"))
        .subcommand(
            Command::new("open")
                .about("Open a page through the route guard")
                .arg(
                    Arg::new("path")
                        .value_name("PATH")
                        .help("Page path, e.g. /leads or analytics")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("routes").about("List every page and whether you can open it"),
        )
        .subcommand(
            Command::new("interactive")
                .visible_alias("ui")
                .about("Browse the lead hub in a full-screen navigator")
                .arg(
                    Arg::new("no-log")
                        .long("no-log")
                        .help("Do not write a log file for this session")
                        .action(ArgAction::SetTrue),
                ),
        )
}
