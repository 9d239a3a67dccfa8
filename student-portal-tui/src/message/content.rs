//! 内容面板消息
//!
//! 处理内容面板中的操作，如列表选择、表单输入、增删改

/// 内容面板消息
#[derive(Debug, Clone)]
pub enum ContentMessage {
    // ========== 列表导航 ==========
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 跳转到第一项
    SelectFirst,
    /// 跳转到最后一项
    SelectLast,
    /// 确认（首页：Get Started；学生表格：编辑选中项）
    Confirm,

    // ========== CRUD 操作 ==========
    /// 展开/收起添加表单
    ToggleForm,
    /// 编辑当前选中项
    Edit,
    /// 删除当前选中项（先弹出确认）
    Delete,

    // ========== 文本输入 ==========
    /// 聚焦搜索框
    FocusSearch,
    /// 输入字符（搜索框或表单，取决于焦点）
    Input(char),
    /// 删除最后一个字符
    Backspace,
    /// 提交（表单：添加/更新；搜索框：返回表格）
    Submit,
    /// 取消（表单：取消编辑；搜索框：返回表格）
    Cancel,
}
