//! Navigation-shell chrome state (user menu, search box).

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub user_menu_open: bool,
    pub sidebar_open: bool,
    pub search_query: String,
}

impl UiState {
    pub fn toggle_user_menu(&mut self) {
        self.user_menu_open = !self.user_menu_open;
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// Close transient menus after a navigation.
    pub fn after_navigate(&mut self) {
        self.user_menu_open = false;
        self.search_query.clear();
    }
}
