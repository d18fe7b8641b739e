//! # Result Printer Library / Result Printer 库
//!
//! This library provides a minimal xUnit-style test result listener. It counts
//! tests, prints a one-line progress indicator per test, and accumulates
//! failure and error diagnostics into a single report printed at the end of a
//! test run.
//!
//! 此库提供一个最小的 xUnit 风格测试结果监听器。它统计测试数量，
//! 为每个测试打印一行进度指示，并把失败和错误的诊断信息累积到
//! 一份在测试运行结束时打印的报告中。
//!
//! ## Modules / 模块
//!
//! - `core` - Listener contract, data models, replay scripts and the replay driver
//! - `infra` - Infrastructure services like file system access and i18n
//! - `reporting` - The console result printer and run summaries
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 监听器契约、数据模型、回放脚本和回放驱动
//! - `infra` - 基础设施服务，如文件系统访问和国际化
//! - `reporting` - 控制台结果打印器和运行摘要
//! - `cli` - 命令行接口和命令

pub mod cli;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use crate::core::listener::{ErrorReport, TestListener};
pub use crate::core::models::{AssertionFailure, Test};
pub use crate::reporting::console::ResultPrinter;

/// Initializes the application's internationalization (i18n) based on the system locale.
///
/// This function detects the user's system locale and sets the appropriate
/// language for the application's user interface. It attempts to match the full
/// locale (e.g., "zh-CN"), then just the language code (e.g., "en"), and
/// finally falls back to the default language ("en").
///
/// # Returns
/// The locale that was selected
pub fn init() -> String {
    let locale = sys_locale::get_locale().unwrap_or_else(|| "en".to_string());
    let lang = resolve_locale(&locale).to_string();
    rust_i18n::set_locale(&lang);
    lang
}

/// Maps a requested locale onto one of the bundled locales.
///
/// 将请求的语言区域映射到内置的语言区域之一。
pub fn resolve_locale(requested: &str) -> &str {
    let available_locales = rust_i18n::available_locales!();

    // Try the full locale first (e.g., "zh-CN"), then the language part only
    // (e.g., "en" from "en-US"), finally fall back to "en".
    if available_locales.contains(&requested) {
        requested
    } else {
        requested
            .split('-')
            .next()
            .filter(|lang_code| available_locales.contains(lang_code))
            .unwrap_or("en")
    }
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
