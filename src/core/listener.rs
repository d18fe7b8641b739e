//! # Listener Contract Module / 监听器契约模块
//!
//! Defines the notification contract a test-execution driver uses to report
//! the lifecycle of each test case, and the end-of-run report capability.
//!
//! 定义测试执行驱动用于报告每个测试用例生命周期的通知契约，
//! 以及运行结束时的报告能力。

use crate::core::models::{AssertionFailure, Test};

/// Receives lifecycle notifications for the tests of a single run.
///
/// Notifications arrive sequentially from one driver. Implementations must
/// not fail or panic, whatever order the calls arrive in.
///
/// 接收单次运行中各个测试的生命周期通知。
/// 通知由一个驱动按顺序发出。无论调用顺序如何，实现都不得失败或 panic。
pub trait TestListener {
    /// An error (unexpected fault) occurred during the execution of the test.
    /// 测试执行期间发生了错误（意外故障）。
    fn add_error(&mut self, test: &dyn Test, error: &anyhow::Error);

    /// A failure (assertion violation) occurred during the execution of the test.
    /// 测试执行期间发生了失败（断言违反）。
    fn add_failure(&mut self, test: &dyn Test, failure: &AssertionFailure);

    /// A test ended.
    /// 测试结束。
    fn end_test(&mut self, test: &dyn Test);

    /// A test started.
    /// 测试开始。
    fn start_test(&mut self, test: &dyn Test);
}

/// Produces the accumulated failure digest once the run is over.
///
/// 在运行结束后输出累积的失败摘要。
pub trait ErrorReport {
    fn report_errors(&mut self);
}
