//! # Data Models Module / 数据模型模块
//!
//! This module defines the values that flow through the listener contract:
//! test handles, assertion failures and helpers for building error values
//! that carry a chain of causes.
//!
//! 此模块定义在监听器契约中传递的值：
//! 测试句柄、断言失败以及用于构建带有原因链的错误值的辅助函数。

use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque handle to the test under execution.
///
/// The listener only ever needs its textual description, so every
/// displayable value is a test handle.
///
/// 正在执行的测试的不透明句柄。
/// 监听器只需要它的文本描述，因此任何可显示的值都是测试句柄。
pub trait Test: fmt::Display {}

impl<T: fmt::Display + ?Sized> Test for T {}

/// A named test case, as recorded by a driver.
/// 由驱动记录的具名测试用例。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct TestCase {
    pub name: String,
}

impl TestCase {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// An assertion-style violation of an expected condition.
///
/// Unlike an error, a failure carries no trace: only its message is ever
/// rendered. A missing message renders as the empty string.
///
/// 断言式的预期条件违反。
/// 与错误不同，失败不携带调用栈：只渲染其消息。缺失的消息渲染为空字符串。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AssertionFailure {
    pub message: Option<String>,
}

impl AssertionFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    /// A failure raised without any message.
    pub fn without_message() -> Self {
        Self::default()
    }

    /// Gets the message of the failure, or an empty string if there is none.
    /// 获取失败的消息；如果没有消息，则返回空字符串。
    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or_default()
    }
}

impl fmt::Display for AssertionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for AssertionFailure {}

/// Builds an error whose outermost message is `message` and whose cause chain
/// is `causes`, the first entry being the direct cause.
///
/// 构建一个错误：最外层消息为 `message`，原因链为 `causes`，
/// 其中第一项是直接原因。
pub fn error_with_causes<S: AsRef<str>>(message: &str, causes: &[S]) -> anyhow::Error {
    let mut chain = causes.iter().rev();
    let Some(root) = chain.next() else {
        return anyhow!("{}", message);
    };

    let mut error = anyhow!("{}", root.as_ref());
    for cause in chain {
        error = error.context(cause.as_ref().to_string());
    }
    error.context(message.to_string())
}
