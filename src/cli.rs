// src/cli.rs
use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::{env, path::PathBuf};

use crate::{infra::t, resolve_locale};

pub mod commands;

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It looks for a `--lang <VALUE>` or `--lang=<VALUE>` argument.
fn pre_parse_language() -> Option<String> {
    let args: Vec<String> = env::args().collect();
    if let Some(pos) = args.iter().position(|arg| arg == "--lang") {
        return args.get(pos + 1).cloned();
    }
    args.iter()
        .find_map(|arg| arg.strip_prefix("--lang="))
        .map(str::to_string)
}

pub fn build_cli(locale: &str) -> Command {
    Command::new("result-printer")
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli_about", locale = locale).to_string())
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli_lang", locale = locale).to_string())
                .value_name("LANGUAGE")
                .global(true)
                .action(ArgAction::Set),
        )
        .subcommand(
            Command::new("replay")
                .about(t!("cmd_replay_about", locale = locale).to_string())
                .arg(
                    Arg::new("script")
                        .short('s')
                        .long("script")
                        .help(t!("arg_script", locale = locale).to_string())
                        .value_name("SCRIPT")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("summary")
                        .long("summary")
                        .help(t!("arg_summary", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                ),
        )
}

/// Parses the command line, localizing the help text first.
pub fn parse_args() -> ArgMatches {
    // Detect the system locale, then let an explicit --lang win.
    let language = match pre_parse_language() {
        Some(lang) => resolve_locale(&lang).to_string(),
        None => crate::init(),
    };
    rust_i18n::set_locale(&language);

    build_cli(&language).get_matches()
}

/// Dispatches the parsed command.
///
/// # Returns
/// `Ok(true)` when the command completed and nothing it reported failed
pub fn process_command(matches: ArgMatches) -> Result<bool> {
    match matches.subcommand() {
        Some(("replay", replay_matches)) => {
            let script = replay_matches
                .get_one::<PathBuf>("script")
                .unwrap() // Required
                .clone();
            let summary = replay_matches.get_flag("summary");
            let lang = replay_matches
                .get_one::<String>("lang")
                .or_else(|| matches.get_one::<String>("lang"));

            commands::replay::execute(&script, summary, lang.map(String::as_str))
        }
        _ => {
            // `subcommand_required` makes clap print help and exit before this.
            Ok(true)
        }
    }
}
