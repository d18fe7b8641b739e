//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for Result Printer,
//! including file system access and i18n support.
//!
//! 此模块为 Result Printer 提供基础设施服务，
//! 包括文件系统访问和国际化支持。

pub mod fs;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
