//! # Replay Driver Module / 回放驱动模块
//!
//! Re-issues a recorded list of lifecycle events against a listener, strictly
//! in order. The driver neither schedules nor discovers tests: it only plays
//! back what a real driver already reported.
//!
//! 严格按顺序把已记录的生命周期事件重新发送给监听器。
//! 此驱动既不调度也不发现测试：它只回放真实驱动已经报告过的内容。

use crate::core::config::ReplayEvent;
use crate::core::listener::{ErrorReport, TestListener};
use crate::core::models::{error_with_causes, AssertionFailure};

/// Tally of the notifications issued during one replay.
/// 一次回放中发出的通知的统计。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayOutcome {
    pub started: usize,
    pub ended: usize,
    pub errors: usize,
    pub failures: usize,
    pub reports: usize,
}

impl ReplayOutcome {
    /// `true` when no error or failure was replayed.
    /// 当没有回放任何错误或失败时为 `true`。
    pub fn is_successful(&self) -> bool {
        self.errors == 0 && self.failures == 0
    }
}

/// Replays `events` against `listener` and returns what was issued.
///
/// # Arguments / 参数
/// * `events` - The recorded events, in order / 按顺序排列的已记录事件
/// * `listener` - The listener receiving the notifications / 接收通知的监听器
///
/// # Returns / 返回值
/// A `ReplayOutcome` counting each kind of notification
/// 统计每种通知数量的 `ReplayOutcome`
pub fn replay<L>(events: &[ReplayEvent], listener: &mut L) -> ReplayOutcome
where
    L: TestListener + ErrorReport,
{
    let mut outcome = ReplayOutcome::default();

    for event in events {
        match event {
            ReplayEvent::Start { test } => {
                listener.start_test(test);
                outcome.started += 1;
            }
            ReplayEvent::End { test } => {
                listener.end_test(test);
                outcome.ended += 1;
            }
            ReplayEvent::Error {
                test,
                message,
                causes,
            } => {
                let error = error_with_causes(message, causes);
                listener.add_error(test, &error);
                outcome.errors += 1;
            }
            ReplayEvent::Failure { test, message } => {
                let failure = AssertionFailure {
                    message: message.clone(),
                };
                listener.add_failure(test, &failure);
                outcome.failures += 1;
            }
            ReplayEvent::Report => {
                listener.report_errors();
                outcome.reports += 1;
            }
        }
    }

    outcome
}
