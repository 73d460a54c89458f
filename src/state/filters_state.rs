// ============================================================================
// FILTERS STATE - categoría, orden y búsqueda del catálogo
// ============================================================================
// Transiciones puras: cada una devuelve un estado nuevo, nunca muta el actual.
// ============================================================================

use std::rc::Rc;

use yew::functional::Reducible;

use crate::models::SortOrder;
use crate::models::category::is_all;
use crate::utils::constants::CATEGORY_ALL;

#[derive(Clone, Debug, PartialEq)]
pub struct FiltersState {
    pub category: String,
    pub sort: SortOrder,
    pub search: String,
}

/// Campo reseteable individualmente
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterField {
    Category,
    Sort,
    Search,
}

#[derive(Clone, Debug, PartialEq)]
pub enum FilterAction {
    CategorySelected(String),
    Sorted(SortOrder),
    SearchChanged(String),
    ResetFields(Vec<FilterField>),
    ResetAll,
}

impl Default for FiltersState {
    fn default() -> Self {
        Self {
            category: CATEGORY_ALL.to_string(),
            sort: SortOrder::Default,
            search: String::new(),
        }
    }
}

impl FiltersState {
    /// Cualquier string es válido, no se valida contra las pestañas
    pub fn select_category(&self, value: impl Into<String>) -> Self {
        Self {
            category: value.into(),
            ..self.clone()
        }
    }

    pub fn set_sort(&self, value: SortOrder) -> Self {
        Self {
            sort: value,
            ..self.clone()
        }
    }

    /// Se guarda tal cual: sin trim ni normalización
    pub fn set_search(&self, value: impl Into<String>) -> Self {
        Self {
            search: value.into(),
            ..self.clone()
        }
    }

    pub fn reset_fields(&self, fields: &[FilterField]) -> Self {
        let defaults = Self::default();
        let mut next = self.clone();
        for field in fields {
            match field {
                FilterField::Category => next.category = defaults.category.clone(),
                FilterField::Sort => next.sort = defaults.sort,
                FilterField::Search => next.search = defaults.search.clone(),
            }
        }
        next
    }

    pub fn reset_all(&self) -> Self {
        Self::default()
    }

    pub fn has_active_filters(&self) -> bool {
        !is_all(&self.category) || !self.search.is_empty() || !self.sort.is_default()
    }

    pub fn apply(&self, action: FilterAction) -> Self {
        match action {
            FilterAction::CategorySelected(value) => self.select_category(value),
            FilterAction::Sorted(value) => self.set_sort(value),
            FilterAction::SearchChanged(value) => self.set_search(value),
            FilterAction::ResetFields(fields) => self.reset_fields(&fields),
            FilterAction::ResetAll => self.reset_all(),
        }
    }
}

impl Reducible for FiltersState {
    type Action = FilterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn changed() -> FiltersState {
        FiltersState::default()
            .select_category("electronics")
            .set_sort(SortOrder::PriceAscending)
            .set_search("phone")
    }

    #[test]
    fn defaults_are_all_none_and_empty() {
        let state = FiltersState::default();
        assert_eq!(state.category, "all");
        assert_eq!(state.sort, SortOrder::Default);
        assert_eq!(state.search, "");
        assert!(!state.has_active_filters());
    }

    #[test]
    fn select_category_accepts_any_string() {
        let state = FiltersState::default().select_category("not-a-tab");
        assert_eq!(state.category, "not-a-tab");
        assert!(state.has_active_filters());
    }

    #[test]
    fn search_is_stored_verbatim() {
        let state = FiltersState::default().set_search("  Men's, (XL)!  ");
        assert_eq!(state.search, "  Men's, (XL)!  ");

        let cleared = state.set_search("");
        assert_eq!(cleared.search, "");
    }

    #[test]
    fn each_setter_leaves_other_fields_alone() {
        let state = changed();
        assert_eq!(state.category, "electronics");
        assert_eq!(state.sort, SortOrder::PriceAscending);
        assert_eq!(state.search, "phone");
    }

    #[test]
    fn reset_search_only_restores_search() {
        let state = changed().reset_fields(&[FilterField::Search]);
        assert_eq!(state.category, "electronics");
        assert_eq!(state.sort, SortOrder::PriceAscending);
        assert_eq!(state.search, "");
    }

    #[test]
    fn reset_several_fields() {
        let state = changed().reset_fields(&[FilterField::Category, FilterField::Sort]);
        assert_eq!(state.category, "all");
        assert_eq!(state.sort, SortOrder::Default);
        assert_eq!(state.search, "phone");
    }

    #[test]
    fn reset_with_no_fields_is_a_no_op() {
        assert_eq!(changed().reset_fields(&[]), changed());
    }

    #[test]
    fn reset_all_restores_defaults() {
        assert_eq!(changed().reset_all(), FiltersState::default());
    }

    #[test]
    fn sort_alone_counts_as_active_filter() {
        let state = FiltersState::default().set_sort(SortOrder::PriceDescending);
        assert!(state.has_active_filters());
    }

    #[test]
    fn reducer_returns_a_new_snapshot() {
        let before = Rc::new(FiltersState::default());
        let after = before
            .clone()
            .reduce(FilterAction::SearchChanged("jacket".to_string()));

        assert!(!Rc::ptr_eq(&before, &after));
        assert_eq!(before.search, "");
        assert_eq!(after.search, "jacket");
    }

    #[test]
    fn reducer_handles_every_action() {
        let state = Rc::new(FiltersState::default())
            .reduce(FilterAction::CategorySelected("clothing".to_string()))
            .reduce(FilterAction::Sorted(SortOrder::PriceDescending))
            .reduce(FilterAction::SearchChanged("dress".to_string()))
            .reduce(FilterAction::ResetFields(vec![FilterField::Sort]));

        assert_eq!(state.category, "clothing");
        assert_eq!(state.sort, SortOrder::Default);
        assert_eq!(state.search, "dress");

        let state = state.reduce(FilterAction::ResetAll);
        assert_eq!(*state, FiltersState::default());
    }
}
