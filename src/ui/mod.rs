pub mod desktop;
pub mod panels;

use crate::chemistry::{Category, ElementRecord};

/// Pending side effect of a selection change, consumed once by the app.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionChange {
    Selected(u8),
    Cleared,
}

/// Selection and filter state shared by every panel.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    selected: Option<u8>,
    active_category: Option<Category>,
    search_term: String,
    chat_open: bool,
    chat_input: String,
    selection_change: Option<SelectionChange>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<u8> {
        self.selected
    }

    pub fn selected_element(&self) -> Option<&'static ElementRecord> {
        self.selected.and_then(ElementRecord::by_atomic_number)
    }

    pub fn active_category(&self) -> Option<Category> {
        self.active_category
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn is_chat_open(&self) -> bool {
        self.chat_open
    }

    /// Re-selecting the current element still counts as a new selection.
    pub fn select_element(&mut self, z: u8) {
        self.selected = Some(z);
        self.selection_change = Some(SelectionChange::Selected(z));
    }

    /// Filters and chat are left alone.
    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.selection_change = Some(SelectionChange::Cleared);
    }

    pub fn take_selection_change(&mut self) -> Option<SelectionChange> {
        self.selection_change.take()
    }

    pub fn toggle_category(&mut self, category: Category) {
        if self.active_category == Some(category) {
            self.active_category = None;
        } else {
            self.active_category = Some(category);
        }
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn search_term_mut(&mut self) -> &mut String {
        &mut self.search_term
    }

    /// Matches name or symbol case-insensitively, or the atomic number as
    /// decimal text. An empty term shows nothing.
    pub fn search_results(&self) -> Vec<&'static ElementRecord> {
        search_elements(&self.search_term)
    }

    pub fn pick_search_result(&mut self, z: u8) {
        self.select_element(z);
        self.search_term.clear();
    }

    pub fn open_chat(&mut self) {
        self.chat_open = true;
    }

    pub fn close_chat(&mut self) {
        self.chat_open = false;
    }

    pub fn chat_input(&self) -> &str {
        &self.chat_input
    }

    pub fn chat_input_mut(&mut self) -> &mut String {
        &mut self.chat_input
    }

    pub fn take_chat_input(&mut self) -> String {
        std::mem::take(&mut self.chat_input)
    }
}

pub fn search_elements(term: &str) -> Vec<&'static ElementRecord> {
    if term.is_empty() {
        return Vec::new();
    }
    let needle = term.to_lowercase();
    ElementRecord::all()
        .iter()
        .filter(|element| {
            element.name.to_lowercase().contains(&needle)
                || element.symbol.to_lowercase().contains(&needle)
                || element.atomic_number.to_string().contains(term)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(results: &[&ElementRecord]) -> Vec<u8> {
        results.iter().map(|element| element.atomic_number).collect()
    }

    #[test]
    fn toggling_the_same_category_twice_clears_it() {
        let mut ui_state = UiState::new();
        ui_state.toggle_category(Category::Halogen);
        assert_eq!(ui_state.active_category(), Some(Category::Halogen));
        ui_state.toggle_category(Category::Halogen);
        assert_eq!(ui_state.active_category(), None);
    }

    #[test]
    fn toggling_another_category_replaces_it() {
        let mut ui_state = UiState::new();
        ui_state.toggle_category(Category::Halogen);
        ui_state.toggle_category(Category::NobleGas);
        assert_eq!(ui_state.active_category(), Some(Category::NobleGas));
    }

    #[test]
    fn selection_records_a_change_once() {
        let mut ui_state = UiState::new();
        ui_state.select_element(8);
        assert_eq!(ui_state.selected_element().map(|e| e.name), Some("Oxygen"));
        assert_eq!(ui_state.take_selection_change(), Some(SelectionChange::Selected(8)));
        assert_eq!(ui_state.take_selection_change(), None);

        ui_state.select_element(8);
        assert_eq!(ui_state.take_selection_change(), Some(SelectionChange::Selected(8)));
    }

    #[test]
    fn clearing_selection_keeps_filters_and_chat() {
        let mut ui_state = UiState::new();
        ui_state.toggle_category(Category::Metalloid);
        ui_state.open_chat();
        ui_state.select_element(14);
        ui_state.clear_selection();
        assert_eq!(ui_state.selected(), None);
        assert_eq!(ui_state.active_category(), Some(Category::Metalloid));
        assert!(ui_state.is_chat_open());
        assert_eq!(ui_state.take_selection_change(), Some(SelectionChange::Cleared));
    }

    #[test]
    fn empty_search_shows_nothing() {
        let ui_state = UiState::new();
        assert!(ui_state.search_results().is_empty());
    }

    #[test]
    fn search_matches_names_and_symbols_case_insensitively() {
        let results = search_elements("he");
        let found = numbers(&results);
        assert!(found.contains(&2), "Helium by name and symbol");
        assert!(results.iter().any(|e| e.symbol == "He"));

        let upper = numbers(&search_elements("HE"));
        assert_eq!(upper, found);

        let by_symbol = numbers(&search_elements("h"));
        assert!(by_symbol.contains(&1));
        assert!(by_symbol.contains(&2));
    }

    #[test]
    fn search_matches_atomic_number_substrings() {
        let found = numbers(&search_elements("1"));
        for z in [1, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 21, 31, 100, 118] {
            assert!(found.contains(&z), "missing {z}");
        }
        assert!(!found.contains(&2));
        assert!(!found.contains(&20));
    }

    #[test]
    fn picking_a_result_selects_and_clears_the_term() {
        let mut ui_state = UiState::new();
        ui_state.set_search_term("gold");
        let gold = ui_state.search_results()[0].atomic_number;
        ui_state.pick_search_result(gold);
        assert_eq!(ui_state.selected(), Some(79));
        assert!(ui_state.search_term().is_empty());
        assert!(ui_state.search_results().is_empty());
    }

    #[test]
    fn chat_visibility_toggles() {
        let mut ui_state = UiState::new();
        assert!(!ui_state.is_chat_open());
        ui_state.open_chat();
        assert!(ui_state.is_chat_open());
        ui_state.close_chat();
        assert!(!ui_state.is_chat_open());
    }
}
