use crate::chemistry::{Category, ElementRecord};
use crate::ui::UiState;

/// How a single cell is drawn for the current UI state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderState {
    Selected,
    Dimmed,
    Normal,
}

impl RenderState {
    /// Dimmed cells ignore clicks.
    pub fn is_interactive(self) -> bool {
        !matches!(self, RenderState::Dimmed)
    }
}

/// Selection takes precedence: a selected element outside the active
/// category is still drawn as selected.
pub fn render_state(element: &ElementRecord, ui_state: &UiState) -> RenderState {
    if ui_state.selected() == Some(element.atomic_number) {
        RenderState::Selected
    } else if is_filtered_out(element.category, ui_state.active_category()) {
        RenderState::Dimmed
    } else {
        RenderState::Normal
    }
}

pub fn is_filtered_out(category: Category, active: Option<Category>) -> bool {
    active.is_some_and(|active| active != category)
}

/// Legend buttons fade when another category is active.
pub fn legend_is_faded(category: Category, active: Option<Category>) -> bool {
    is_filtered_out(category, active)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(z: u8) -> &'static ElementRecord {
        ElementRecord::by_atomic_number(z).unwrap()
    }

    #[test]
    fn nothing_active_is_normal() {
        let ui_state = UiState::default();
        for element in ElementRecord::all() {
            assert_eq!(render_state(element, &ui_state), RenderState::Normal);
        }
    }

    #[test]
    fn selection_marks_only_that_element() {
        let mut ui_state = UiState::default();
        ui_state.select_element(26);
        assert_eq!(render_state(element(26), &ui_state), RenderState::Selected);
        assert_eq!(render_state(element(27), &ui_state), RenderState::Normal);
    }

    #[test]
    fn category_filter_dims_other_categories() {
        let mut ui_state = UiState::default();
        ui_state.toggle_category(Category::NobleGas);
        assert_eq!(render_state(element(2), &ui_state), RenderState::Normal);
        assert_eq!(render_state(element(1), &ui_state), RenderState::Dimmed);
        assert!(!RenderState::Dimmed.is_interactive());
        assert!(RenderState::Normal.is_interactive());
    }

    #[test]
    fn selection_wins_over_dimming() {
        let mut ui_state = UiState::default();
        ui_state.select_element(1);
        ui_state.toggle_category(Category::NobleGas);
        assert_eq!(render_state(element(1), &ui_state), RenderState::Selected);
        assert!(RenderState::Selected.is_interactive());
    }

    #[test]
    fn legend_fades_non_active_entries() {
        assert!(!legend_is_faded(Category::Halogen, None));
        assert!(!legend_is_faded(Category::Halogen, Some(Category::Halogen)));
        assert!(legend_is_faded(Category::Metalloid, Some(Category::Halogen)));
    }
}
