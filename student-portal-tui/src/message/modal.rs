//! 弹窗消息类型

/// 弹窗相关消息
#[derive(Debug, Clone)]
pub enum ModalMessage {
    /// 关闭弹窗（删除确认中等同于拒绝）
    Close,

    /// 确认：提示弹窗关闭，删除确认按焦点执行
    Confirm,

    /// 在确认删除弹窗中切换焦点
    ToggleDeleteFocus,

    /// 直接确认删除（y）
    Accept,
}
