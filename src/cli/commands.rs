//! # Commands Module / 命令模块
//!
//! Implementations of the subcommands of the `result-printer` CLI.
//!
//! `result-printer` CLI 各子命令的实现。

pub mod replay;
