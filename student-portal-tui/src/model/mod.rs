//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 这一层只包含数据结构和简单的 setter，不发起任何网络请求。
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 焦点状态（Navigation / Content）
//!         mod navigation;     // 导航栏状态
//!         mod page;           // 页面状态（Home / Students）
//!
//!         pub mod state;      // 页面数据状态（学生列表、弹窗）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 学生页面状态（StudentsState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     StudentsState {
//!         students: Vec<Student>,         // 本地缓存，每次成功拉取后整体替换
//!         input: String,                  // 表单输入框
//!         editing_id: Option<StudentId>,  // 正在编辑的记录
//!         search: String,                 // 搜索文本
//!         show_form: bool,                // 表单是否展开
//!         selected: usize,                // 过滤后列表中的选中行
//!         focus: StudentsFocus,           // Table / Search / Form
//!     }
//!
//!     过滤结果从不保存，每次渲染时由 filtered() 重新计算。
//!     id 和 created_at 只来自服务器，客户端从不修改。
//!

mod app;
mod focus;
mod navigation;
mod page;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use navigation::{NavItem, NavItemId, NavigationState};
pub use page::Page;
pub use state::{AlertKind, Modal, ModalState, StudentsFocus, StudentsState};
