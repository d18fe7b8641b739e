//! # Reporting Module / 报告模块
//!
//! This module handles console output: the result printer that renders test
//! progress and the end-of-run failure report, and a colored run summary.
//!
//! 此模块处理控制台输出：渲染测试进度和运行结束失败报告的结果打印器，
//! 以及彩色运行摘要。

pub mod console;

// Re-export common reporting items
pub use console::{print_summary, ResultPrinter};
