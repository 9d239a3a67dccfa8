//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         pub mod keymap;     // 快捷键映射（帮助弹窗也会读取）
//!
//!         pub use handler::{handle_event, poll_event};
//!
//!
//!     按键的分发顺序：
//!         1. 弹窗打开时，所有按键交给弹窗
//!         2. 全局快捷键（退出、Tab、刷新、帮助）
//!         3. 学生页面的文本输入模式（搜索框或表单获得焦点）
//!         4. 按焦点面板分发到导航栏或内容区
//!
//!     文本输入模式优先于 `?` 和 j/k 等单字符快捷键，
//!     否则名字里就打不出这些字符。
//!

mod handler;
pub mod keymap;

pub use handler::{handle_event, poll_event};
