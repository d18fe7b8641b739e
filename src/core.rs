//! # Core Module / 核心模块
//!
//! This module contains the core functionality of Result Printer,
//! including the listener contract, data models, replay scripts and the
//! sequential replay driver.
//!
//! 此模块包含 Result Printer 的核心功能，
//! 包括监听器契约、数据模型、回放脚本和顺序回放驱动。

pub mod config;
pub mod listener;
pub mod models;
pub mod replay;

// Re-exports
pub use config::ReplayScript;
pub use listener::{ErrorReport, TestListener};
pub use replay::{replay, ReplayOutcome};
