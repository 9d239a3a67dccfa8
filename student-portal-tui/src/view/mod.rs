//!
//! src/view/mod.rs
//! View 层：界面渲染
//!
//! View 层只读取 Model，不修改任何状态。
//! 每一帧都根据当前 App 完整重绘。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;         // 主布局：标题栏 + 导航 + 内容 + 状态栏
//!         mod components;     // 导航栏、状态栏、弹窗
//!         mod pages;          // Home、Students 页面
//!         pub mod theme;      // 颜色方案
//!
//!         pub use layout::render;
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
