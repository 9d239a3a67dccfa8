//! 导航状态定义

use super::Page;

/// 导航项 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItemId {
    Home,
    Students,
}

impl NavItemId {
    /// 导航项对应的页面
    pub fn page(self) -> Page {
        match self {
            NavItemId::Home => Page::Home,
            NavItemId::Students => Page::Students,
        }
    }
}

/// 导航项
#[derive(Debug, Clone)]
pub struct NavItem {
    pub id: NavItemId,
    pub label: &'static str,
    pub icon: &'static str,
}

/// 导航状态
pub struct NavigationState {
    /// 导航项列表
    pub items: Vec<NavItem>,
    /// 当前选中的索引
    pub selected: usize,
}

impl NavigationState {
    /// 创建默认导航状态
    pub fn new() -> Self {
        Self {
            items: vec![
                NavItem {
                    id: NavItemId::Home,
                    label: "Home",
                    icon: "⌂",
                },
                NavItem {
                    id: NavItemId::Students,
                    label: "Students",
                    icon: "@",
                },
            ],
            selected: 0,
        }
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if self.selected < self.items.len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.items.len().saturating_sub(1);
    }

    /// 高亮指定页面对应的导航项（页面不是从导航栏切换时使用）
    pub fn select_page(&mut self, page: Page) {
        if let Some(index) = self.items.iter().position(|item| item.id.page() == page) {
            self.selected = index;
        }
    }

    /// 获取当前选中的导航项 ID
    pub fn current_id(&self) -> Option<NavItemId> {
        self.items.get(self.selected).map(|item| item.id)
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_stays_in_bounds() {
        let mut nav = NavigationState::new();
        nav.select_previous();
        assert_eq!(nav.current_id(), Some(NavItemId::Home));

        nav.select_next();
        nav.select_next();
        assert_eq!(nav.current_id(), Some(NavItemId::Students));
    }

    #[test]
    fn select_page_follows_page_switch() {
        let mut nav = NavigationState::new();
        nav.select_page(Page::Students);
        assert_eq!(nav.current_id(), Some(NavItemId::Students));
        nav.select_page(Page::Home);
        assert_eq!(nav.selected, 0);
    }
}
