//! # Replay Command Module / 回放命令模块
//!
//! This module implements the `replay` command for the Result Printer CLI,
//! which feeds a recorded script of lifecycle events through a
//! `ResultPrinter` writing to standard output.
//!
//! 此模块实现了 Result Printer CLI 的 `replay` 命令，
//! 它把已记录的生命周期事件脚本交给写入标准输出的 `ResultPrinter`。

use anyhow::{bail, Result};
use colored::*;
use std::path::Path;

use crate::{
    core::{config::ReplayScript, listener::ErrorReport, replay::replay},
    infra::{fs, t},
    reporting::console::{print_summary, ResultPrinter},
    resolve_locale,
};

/// Executes the replay command with the provided arguments.
///
/// # Arguments
/// * `script` - Path to the replay script
/// * `summary` - Whether to print a run summary to stderr
/// * `lang` - Language given on the command line; overrides the script's `language`
///
/// # Returns
/// `Ok(true)` if no error or failure was replayed, `Ok(false)` otherwise
pub fn execute(script: &Path, summary: bool, lang: Option<&str>) -> Result<bool> {
    let script_path = fs::absolute_path(script)?;
    let replay_script = ReplayScript::load(&script_path)?;

    let locale = resolve_locale(lang.unwrap_or(&replay_script.language)).to_string();
    rust_i18n::set_locale(&locale);

    eprintln!(
        "{}",
        t!("loading_replay_script", locale = locale, path = script_path.display()).cyan()
    );
    if replay_script.events.is_empty() {
        eprintln!("{}", t!("no_events", locale = locale).yellow());
    }

    let mut printer = ResultPrinter::stdout();
    let mut outcome = replay(&replay_script.events, &mut printer);

    // Scripts without an explicit report still get the digest once at the end.
    if !replay_script.has_report() {
        printer.report_errors();
        outcome.reports += 1;
    }

    if summary {
        print_summary(&outcome, &locale);
    }

    if printer.check_error() {
        bail!("{}", t!("stdout_write_failed", locale = locale));
    }

    Ok(outcome.is_successful())
}
