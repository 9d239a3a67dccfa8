//! 页面状态模块
//!
//! 定义各个页面的状态数据结构

mod modal;
mod students;

pub use modal::{AlertKind, Modal, ModalState};
pub use students::{StudentsFocus, StudentsState};
