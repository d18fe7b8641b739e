//! # Replay Script Configuration / 回放脚本配置
//!
//! A replay script is a recorded, ordered list of lifecycle events that the
//! replay driver re-issues against a listener. Scripts are stored as TOML
//! (default) or JSON files.
//!
//! 回放脚本是一份按顺序记录的生命周期事件列表，回放驱动会把它们
//! 重新发送给监听器。脚本以 TOML（默认）或 JSON 文件形式存储。

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::models::TestCase;
use crate::infra::fs;

/// A single recorded lifecycle event.
/// 单个已记录的生命周期事件。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReplayEvent {
    /// The test started. / 测试开始。
    Start { test: TestCase },
    /// The test ended. / 测试结束。
    End { test: TestCase },
    /// An unexpected error occurred in the test.
    /// 测试中发生了意外错误。
    Error {
        test: TestCase,
        message: String,
        /// Causes of the error, the direct cause first.
        /// 错误的原因，直接原因在前。
        #[serde(default)]
        causes: Vec<String>,
    },
    /// An assertion failed in the test.
    /// 测试中的断言失败。
    Failure {
        test: TestCase,
        #[serde(default)]
        message: Option<String>,
    },
    /// The report consumer asked for the failure digest.
    /// 报告使用方请求输出失败摘要。
    Report,
}

/// Represents an entire replay script, loaded from a TOML or JSON file.
///
/// 代表从 TOML 或 JSON 文件加载的整个回放脚本。
#[derive(Debug, Deserialize, Serialize)]
pub struct ReplayScript {
    /// The language for the runner's status messages (e.g., "en", "zh-CN").
    /// Defaults to "en" if not specified.
    ///
    /// 运行器状态消息的语言（例如 "en", "zh-CN"）。
    /// 如果未指定，则默认为 "en"。
    #[serde(default = "default_language")]
    pub language: String,

    /// The recorded events, in the order they are replayed.
    /// 已记录的事件，按回放顺序排列。
    #[serde(default)]
    pub events: Vec<ReplayEvent>,
}

fn default_language() -> String {
    "en".to_string()
}

impl ReplayScript {
    /// Loads a replay script, choosing the format from the file extension.
    /// Files ending in `.json` are parsed as JSON, anything else as TOML.
    ///
    /// 加载回放脚本，根据文件扩展名选择格式。
    /// 以 `.json` 结尾的文件按 JSON 解析，其余按 TOML 解析。
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_script(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json_str(&content)
                .with_context(|| format!("Failed to parse JSON replay script: {}", path.display()))
        } else {
            Self::from_toml_str(&content)
                .with_context(|| format!("Failed to parse TOML replay script: {}", path.display()))
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Checks whether the script asks for the report itself.
    pub fn has_report(&self) -> bool {
        self.events.iter().any(|e| matches!(e, ReplayEvent::Report))
    }
}
