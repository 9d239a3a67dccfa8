//! 日志初始化
//!
//! 终端被 TUI 占用，日志只能写文件。

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE_NAME: &str = "student-portal.log";

/// 默认日志位置：<data_local_dir>/student-portal/student-portal.log
pub fn default_log_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("student-portal").join(LOG_FILE_NAME))
}

/// 初始化日志，返回的 guard 需要保持到程序退出，否则缓冲的日志会丢失
pub fn init(path: Option<PathBuf>) -> Result<WorkerGuard> {
    let path = path
        .or_else(default_log_path)
        .unwrap_or_else(|| PathBuf::from(LOG_FILE_NAME));

    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let file_name = path
        .file_name()
        .with_context(|| format!("Invalid log file path {}", path.display()))?;

    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(&dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    // try_init 同时安装 log → tracing 的桥接
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init()
        .context("Failed to install log subscriber")?;

    log::info!("Logging to {}", path.display());
    Ok(guard)
}
