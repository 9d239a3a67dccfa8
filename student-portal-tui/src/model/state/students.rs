//! 学生页面状态

use student_portal_core::{Student, StudentId};

/// 学生页面内的输入焦点
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StudentsFocus {
    /// 记录表格
    #[default]
    Table,
    /// 搜索框
    Search,
    /// 添加/编辑表单
    Form,
}

/// 学生页面状态
#[derive(Debug, Default)]
pub struct StudentsState {
    /// 本地缓存（每次成功拉取后整体替换）
    pub students: Vec<Student>,
    /// 表单输入
    pub input: String,
    /// 正在编辑的记录 ID
    pub editing_id: Option<StudentId>,
    /// 搜索文本
    pub search: String,
    /// 表单是否展开（不含编辑模式）
    pub show_form: bool,
    /// 过滤后列表中的选中索引
    pub selected: usize,
    /// 当前输入焦点
    pub focus: StudentsFocus,
    /// 是否有未完成的列表请求
    pub loading: bool,
}

impl StudentsState {
    pub fn new() -> Self {
        Self::default()
    }

    // ========== 派生视图 ==========

    /// 按名称过滤（不区分大小写的子串匹配），保持原顺序
    pub fn filtered(&self) -> Vec<&Student> {
        let needle = self.search.to_lowercase();
        self.students
            .iter()
            .filter(|s| s.name_contains(&needle))
            .collect()
    }

    /// 过滤后的记录数
    pub fn filtered_len(&self) -> usize {
        let needle = self.search.to_lowercase();
        self.students
            .iter()
            .filter(|s| s.name_contains(&needle))
            .count()
    }

    /// 当前选中的记录（基于过滤结果）
    pub fn selected_student(&self) -> Option<&Student> {
        self.filtered().get(self.selected).copied()
    }

    /// 表单是否可见：手动展开或处于编辑模式
    pub fn is_form_visible(&self) -> bool {
        self.show_form || self.editing_id.is_some()
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    /// 该记录是否正在被编辑
    pub fn is_being_edited(&self, id: &StudentId) -> bool {
        self.editing_id.as_ref() == Some(id)
    }

    // ========== 列表 ==========

    /// 用服务器返回的列表替换缓存
    pub fn set_students(&mut self, students: Vec<Student>) {
        self.students = students;
        self.loading = false;
        self.clamp_selection();
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        let len = self.filtered_len();
        if len > 0 && self.selected < len - 1 {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.filtered_len().saturating_sub(1);
    }

    /// 列表或搜索变化后，把选中行限制在过滤结果范围内
    pub fn clamp_selection(&mut self) {
        let len = self.filtered_len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    // ========== 搜索 ==========

    pub fn focus_search(&mut self) {
        self.focus = StudentsFocus::Search;
    }

    pub fn focus_table(&mut self) {
        self.focus = StudentsFocus::Table;
    }

    pub fn push_search(&mut self, ch: char) {
        self.search.push(ch);
        self.clamp_selection();
    }

    pub fn pop_search(&mut self) {
        self.search.pop();
        self.clamp_selection();
    }

    // ========== 表单 ==========

    pub fn push_input(&mut self, ch: char) {
        self.input.push(ch);
    }

    pub fn pop_input(&mut self) {
        self.input.pop();
    }

    /// “Add New Student” 按钮：切换表单；编辑中按下等同取消编辑
    pub fn toggle_form(&mut self) {
        if self.is_editing() {
            self.cancel_edit();
            return;
        }
        self.show_form = !self.show_form;
        self.focus = if self.show_form {
            StudentsFocus::Form
        } else {
            StudentsFocus::Table
        };
    }

    /// 开始编辑：输入框填入记录当前名称
    pub fn start_edit(&mut self, student: &Student) {
        self.editing_id = Some(student.id.clone());
        self.input.clone_from(&student.name);
        self.show_form = true;
        self.focus = StudentsFocus::Form;
    }

    /// 取消编辑：清空输入、编辑标记并收起表单
    pub fn cancel_edit(&mut self) {
        self.editing_id = None;
        self.input.clear();
        self.show_form = false;
        self.focus = StudentsFocus::Table;
    }

    /// 添加成功：清空输入并收起表单
    pub fn finish_create(&mut self) {
        self.input.clear();
        self.show_form = false;
        if self.focus == StudentsFocus::Form {
            self.focus = StudentsFocus::Table;
        }
    }

    /// 更新成功：与取消编辑相同
    pub fn finish_update(&mut self) {
        self.cancel_edit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(id: i64, name: &str) -> Student {
        Student {
            id: StudentId::Number(id),
            name: name.to_string(),
            created_at: None,
        }
    }

    fn state_with(names: &[&str]) -> StudentsState {
        let mut state = StudentsState::new();
        let students = names
            .iter()
            .zip(1..)
            .map(|(name, id)| student(id, name))
            .collect();
        state.set_students(students);
        state
    }

    fn names(state: &StudentsState) -> Vec<&str> {
        state.filtered().iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let mut state = state_with(&["Alice", "bob"]);
        state.search = "A".to_string();
        assert_eq!(names(&state), vec!["Alice"]);

        state.search = "B".to_string();
        assert_eq!(names(&state), vec!["bob"]);
    }

    #[test]
    fn empty_search_keeps_everything_in_order() {
        let state = state_with(&["Zed", "alice", "Bob"]);
        assert_eq!(names(&state), vec!["Zed", "alice", "Bob"]);
    }

    #[test]
    fn filter_does_not_touch_cache() {
        let mut state = state_with(&["Alice", "bob", "Alina"]);
        state.search = "ali".to_string();
        assert_eq!(names(&state), vec!["Alice", "Alina"]);
        assert_eq!(state.students.len(), 3);
    }

    #[test]
    fn start_edit_copies_exact_name() {
        let mut state = state_with(&["Alice", "  bob  "]);
        let target = state.students[1].clone();

        state.start_edit(&target);

        assert_eq!(state.input, "  bob  ");
        assert!(state.is_being_edited(&StudentId::Number(2)));
        assert!(!state.is_being_edited(&StudentId::Number(1)));
        assert!(state.is_form_visible());
        assert_eq!(state.focus, StudentsFocus::Form);
    }

    #[test]
    fn cancel_edit_resets_form() {
        let mut state = state_with(&["Alice"]);
        let target = state.students[0].clone();
        state.start_edit(&target);
        state.push_input('!');

        state.cancel_edit();

        assert!(state.input.is_empty());
        assert!(state.editing_id.is_none());
        assert!(!state.is_form_visible());
        assert_eq!(state.focus, StudentsFocus::Table);
        assert_eq!(state.students.len(), 1);
    }

    #[test]
    fn toggle_form_while_editing_cancels() {
        let mut state = state_with(&["Alice"]);
        let target = state.students[0].clone();
        state.start_edit(&target);

        state.toggle_form();

        assert!(!state.is_editing());
        assert!(!state.is_form_visible());
        assert!(state.input.is_empty());
    }

    #[test]
    fn toggle_form_flips_visibility() {
        let mut state = StudentsState::new();
        state.toggle_form();
        assert!(state.is_form_visible());
        assert_eq!(state.focus, StudentsFocus::Form);

        state.toggle_form();
        assert!(!state.is_form_visible());
        assert_eq!(state.focus, StudentsFocus::Table);
    }

    #[test]
    fn selection_walks_filtered_list() {
        let mut state = state_with(&["Alice", "bob", "Alina"]);
        state.search = "al".to_string();

        state.select_last();
        assert_eq!(state.selected_student().map(|s| s.name.as_str()), Some("Alina"));

        state.select_next();
        assert_eq!(state.selected, 1);

        state.select_first();
        assert_eq!(state.selected_student().map(|s| s.name.as_str()), Some("Alice"));
    }

    #[test]
    fn narrowing_search_clamps_selection() {
        let mut state = state_with(&["Alice", "bob", "carl"]);
        state.select_last();

        state.push_search('b');

        assert_eq!(state.selected, 0);
        assert_eq!(state.selected_student().map(|s| s.name.as_str()), Some("bob"));
    }

    #[test]
    fn refetch_replaces_cache_and_clamps() {
        let mut state = state_with(&["a", "b", "c"]);
        state.select_last();
        state.loading = true;

        state.set_students(vec![student(9, "only")]);

        assert_eq!(state.selected, 0);
        assert!(!state.loading);
        assert_eq!(state.students[0].id, StudentId::Number(9));
    }

    #[test]
    fn empty_list_has_no_selection() {
        let mut state = StudentsState::new();
        state.select_next();
        state.select_last();
        assert_eq!(state.selected, 0);
        assert!(state.selected_student().is_none());
    }
}
