//!
//! Student Portal 终端客户端
//!
//! 采用 Elm 架构：
//!     Event（按键）→ Message → Update（修改 Model，返回 Command）→ View（重绘）
//!                                         ↓
//!                              Backend（tokio 上执行 HTTP 请求）
//!                                         ↓
//!                              BackendEvent → Message → Update ...
//!
//! 启动顺序：
//!     1. 解析命令行参数，读取配置文件
//!     2. 初始化文件日志
//!     3. 构建 RestStudentApi / StudentService / Backend
//!     4. 初始化终端并进入主循环
//!     5. 恢复终端
//!

mod app;
mod backend;
mod cli;
mod event;
mod logging;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use student_portal_core::{RestStudentApi, StudentService};

use backend::{Backend, ConfigService, FileConfigService};
use cli::Cli;
use util::{init_terminal, install_panic_hook, restore_terminal};

fn main() -> Result<()> {
    // 1. 参数与配置
    let cli = Cli::parse();
    let mut config = FileConfigService::new(cli.config.clone()).load()?;
    cli.apply(&mut config);

    // 2. 日志（guard 必须活到 main 结束）
    let _log_guard = logging::init(cli.log_file.clone())?;
    log::info!("Starting Student Portal against {}", config.api_url);

    view::theme::set_theme(config.theme);

    // 3. 服务与后台执行器
    let api = RestStudentApi::new(config.api_url)?;
    let service = StudentService::new(Arc::new(api));
    let mut backend = Backend::new(service)?;

    // 4. 终端与主循环
    install_panic_hook();
    let mut terminal = init_terminal()?;
    let mut app = model::App::new();
    let result = app::run(&mut terminal, &mut app, &mut backend);

    // 5. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    if let Err(ref e) = result {
        log::error!("Exited with error: {e:#}");
    } else {
        log::info!("Bye");
    }
    result
}
