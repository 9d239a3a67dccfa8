//! 页面状态定义

/// 页面枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// 首页（静态介绍）
    #[default]
    Home,
    /// 学生记录
    Students,
}

impl Page {
    /// 获取页面标题
    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Students => "Student Records",
        }
    }
}
