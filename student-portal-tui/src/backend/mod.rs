//!
//! src/backend/mod.rs
//! Backend 层：执行远程请求
//!
//! Backend 层与 UI 完全解耦。Update 层只返回一个描述请求的 Command，
//! 由 Backend 在 tokio 运行时上异步执行，结果以 BackendEvent 的形式
//! 通过 mpsc 通道送回主循环。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod command;            // Command 定义
//!         mod config_service;     // 配置文件读取
//!         mod runner;             // Backend：运行时 + 通道 + StudentService
//!
//!
//! 数据流：
//!     用户在表单中按 Enter
//!         ↓
//!     update 返回 Some(Command::CreateStudent { name })
//!         ↓
//!     app.rs 调用 backend.dispatch(cmd)，在运行时上 spawn
//!         ↓
//!     StudentService::create → RestStudentApi → POST /notes
//!         ↓
//!     BackendEvent::StudentCreated(result) 送入通道
//!         ↓
//!     主循环下一次 tick 时取出，交给 update 处理
//!         ↓
//!     成功则再返回 Command::FetchStudents（整表重新拉取）
//!
//!
//! 请求没有取消、去重或超时：切换页面后到达的结果仍会写入状态。
//!

mod command;
mod config_service;
mod runner;

pub use command::Command;
pub use config_service::{AppConfig, ConfigService, FileConfigService};
pub use runner::{execute, Backend};
