//! # Console Reporting Module / 控制台报告模块
//!
//! This module holds `ResultPrinter`, the listener that writes per-test
//! progress to a console-like sink and collects error and failure narratives
//! into a report printed at the end of the run, plus the colored run summary
//! used by the command line.
//!
//! 此模块包含 `ResultPrinter`：它把每个测试的进度写入类控制台输出，
//! 并把错误和失败的描述收集到运行结束时打印的报告中；
//! 还包含命令行使用的彩色运行摘要。
//!
//! # Output Format / 输出格式
//! ```text
//! 1: parse_header running...
//! 2: parse_body running...FAILURE...
//! There were test failures:
//!
//! 2: parse_body FAILED:
//! expected 1 but was 2
//!
//! ```

use colored::*;
use std::fmt::Write as _;
use std::io::{self, Write};

use crate::core::listener::{ErrorReport, TestListener};
use crate::core::models::{AssertionFailure, Test};
use crate::core::replay::ReplayOutcome;
use crate::infra::t;

const REPORT_HEADER: &str = "There were test failures:\n";

/// Monitors the execution of tests and tracks errors and failures.
///
/// Progress text is written to the sink as soon as each notification arrives.
/// Error and failure details are collected in a message buffer that
/// `report_errors` prints; the buffer is never cleared, so repeated reports
/// are identical.
///
/// 监视测试的执行并跟踪错误和失败。
/// 每个通知到达时立即把进度文本写入输出；错误和失败的详情被收集到
/// 消息缓冲区中，由 `report_errors` 打印。缓冲区从不清空，因此重复报告的内容相同。
#[derive(Debug)]
pub struct ResultPrinter<W: Write> {
    /// The test number / 测试编号
    test_number: usize,
    /// The printer / 输出目标
    sink: W,
    /// The message buffer / 消息缓冲区
    messages: String,
    /// Latched once any write to the sink has failed.
    sink_failed: bool,
}

impl ResultPrinter<io::Stdout> {
    /// Creates a printer on the process's standard output.
    /// 创建一个写入进程标准输出的打印器。
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ResultPrinter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            test_number: 0,
            sink,
            messages: String::new(),
            sink_failed: false,
        }
    }

    /// The number of tests started so far.
    pub fn test_number(&self) -> usize {
        self.test_number
    }

    /// The error and failure narratives collected so far.
    pub fn messages(&self) -> &str {
        &self.messages
    }

    pub fn sink(&self) -> &W {
        &self.sink
    }

    pub fn into_inner(self) -> W {
        self.sink
    }

    /// Returns `true` if any write to the sink has failed.
    ///
    /// Notifications never surface sink faults themselves; callers that care
    /// check this once the run is over.
    ///
    /// 如果对输出的任何写入失败过，则返回 `true`。
    /// 通知本身从不暴露输出故障；关心的调用方在运行结束后检查此标志。
    pub fn check_error(&self) -> bool {
        self.sink_failed
    }

    /// Writes `text` and flushes right away, so fragments without a line
    /// break still show up on a line-buffered console.
    fn emit(&mut self, text: &str) {
        let written = self
            .sink
            .write_all(text.as_bytes())
            .and_then(|()| self.sink.flush());
        if written.is_err() {
            self.sink_failed = true;
        }
    }

    /// Appends the `"<N>: <test> FAILED:\n"` heading of a buffer entry.
    fn append_heading(&mut self, test: &dyn Test) {
        // Writing into a String cannot fail.
        let _ = writeln!(self.messages, "{}: {} FAILED:", self.test_number, test);
    }
}

impl<W: Write> TestListener for ResultPrinter<W> {
    fn add_error(&mut self, test: &dyn Test, error: &anyhow::Error) {
        self.emit("ERROR...");
        self.append_heading(test);
        let _ = write!(self.messages, "{:?}", error);
        self.messages.push('\n');
    }

    fn add_failure(&mut self, test: &dyn Test, failure: &AssertionFailure) {
        self.emit("FAILURE...");
        self.append_heading(test);
        self.messages.push_str(failure.message());
        self.messages.push('\n');
    }

    fn end_test(&mut self, _test: &dyn Test) {
        self.emit("\n");
    }

    fn start_test(&mut self, test: &dyn Test) {
        self.test_number += 1;
        let progress = format!("{}: {} running...", self.test_number, test);
        self.emit(&progress);
    }
}

impl<W: Write> ErrorReport for ResultPrinter<W> {
    fn report_errors(&mut self) {
        if self.messages.is_empty() {
            return;
        }
        let report = format!("{REPORT_HEADER}\n{}\n", self.messages);
        self.emit(&report);
    }
}

/// Prints a colored tally of a replayed run to standard error.
///
/// Standard output is left untouched so the printer's text stays byte-exact.
///
/// 把回放运行的彩色统计打印到标准错误。
/// 标准输出保持不变，以便打印器的文本逐字节一致。
///
/// # Arguments / 参数
/// * `outcome` - The tally returned by the replay driver / 回放驱动返回的统计
/// * `locale` - The language locale to use for messages / 用于消息的语言区域设置
pub fn print_summary(outcome: &ReplayOutcome, locale: &str) {
    eprintln!("\n{}", t!("summary_banner", locale = locale).bold());

    let errors = t!("summary_errors", locale = locale, count = outcome.errors);
    let failures = t!("summary_failures", locale = locale, count = outcome.failures);

    eprintln!(
        "  - {}",
        t!("summary_started", locale = locale, count = outcome.started)
    );
    eprintln!(
        "  - {}",
        if outcome.errors > 0 { errors.red() } else { errors.green() }
    );
    eprintln!(
        "  - {}",
        if outcome.failures > 0 { failures.red() } else { failures.green() }
    );

    if outcome.is_successful() {
        eprintln!("\n{}", t!("summary_passed", locale = locale).green().bold());
    } else {
        eprintln!("\n{}", t!("summary_failed", locale = locale).red().bold());
    }
}
