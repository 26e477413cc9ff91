use std::rc::Rc;

use crate::color::ColorMap;
use crate::config::DashboardConfig;
use crate::data::filter::{FilteredView, SpeciesSelection};
use crate::data::model::{Measurement, PenguinDataset};
use crate::data::table::SortSpec;
use crate::reactive::{Input, Memo};

// ---------------------------------------------------------------------------
// Cards that can be expanded to fill the central panel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Card {
    DataTable,
    DataGrid,
    AttributeHistogram,
    MassHistogram,
    Scatterplot,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// The loaded table. Replaced wholesale, never edited.
    dataset: PenguinDataset,

    /// Species ticked in the checkbox group.
    selected_species: Input<SpeciesSelection>,

    /// Rows passing the species filter, shared by every table and chart.
    filtered: Memo<FilteredView>,

    /// Measurement on the x axis of the attribute histogram.
    pub selected_attribute: Measurement,

    /// Bin count of the attribute histogram (numeric input).
    pub plotly_bin_count: u32,

    /// Bin count of the body-mass histogram (slider).
    pub seaborn_bin_count: u32,

    /// Column sort of the data grid.
    pub grid_sort: Option<SortSpec>,

    /// Card currently shown full screen.
    pub expanded_card: Option<Card>,

    /// Species colours, stable across filter changes.
    pub color_map: ColorMap,

    /// Link shown at the bottom of the sidebar.
    pub repo_url: String,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(dataset: PenguinDataset, config: &DashboardConfig) -> Self {
        Self {
            color_map: ColorMap::new(dataset.species()),
            selected_species: Input::new(config.selected_species.iter().cloned().collect()),
            filtered: Memo::new(),
            selected_attribute: config.selected_attribute,
            plotly_bin_count: config.plotly_bin_count,
            seaborn_bin_count: config.seaborn_bin_count,
            grid_sort: None,
            expanded_card: None,
            repo_url: config.repo_url.clone(),
            status_message: None,
            dataset,
        }
    }

    pub fn dataset(&self) -> &PenguinDataset {
        &self.dataset
    }

    pub fn selected_species(&self) -> &SpeciesSelection {
        self.selected_species.get()
    }

    /// Rows matching the current species selection.
    ///
    /// Recomputed only after the selection changed; every caller within one
    /// frame gets the same `Rc`.
    pub fn filtered_data(&mut self) -> Rc<FilteredView> {
        let dataset = &self.dataset;
        let selection = self.selected_species.get();
        self.filtered.get(self.selected_species.revision(), || {
            let view = FilteredView::compute(dataset, selection);
            log::debug!(
                "filtered {} of {} rows for species {:?}",
                view.len(),
                dataset.len(),
                selection
            );
            view
        })
    }

    /// How often the filter has actually run.
    pub fn filter_recomputations(&self) -> usize {
        self.filtered.recomputations()
    }

    /// Tick or untick one species checkbox.
    pub fn set_species_selected(&mut self, species: &str, selected: bool) {
        self.selected_species.update(|set| {
            if selected {
                set.insert(species.to_string());
            } else {
                set.remove(species);
            }
        });
    }

    /// Select every species of the dataset.
    pub fn select_all(&mut self) {
        let all = self.dataset.species().iter().cloned().collect();
        self.selected_species.set(all);
    }

    /// Deselect every species.
    pub fn select_none(&mut self) {
        self.selected_species.set(SpeciesSelection::new());
    }

    /// Swap in a newly loaded dataset. The selection is kept as is.
    pub fn set_dataset(&mut self, dataset: PenguinDataset) {
        self.color_map = ColorMap::new(dataset.species());
        self.dataset = dataset;
        self.filtered.invalidate();
        self.grid_sort = None;
        self.status_message = None;
    }

    pub fn set_bin_counts(&mut self, plotly: u32, seaborn: u32) {
        self.plotly_bin_count = plotly.clamp(1, crate::config::MAX_PLOTLY_BINS);
        self.seaborn_bin_count = seaborn.clamp(
            *crate::config::SEABORN_BIN_RANGE.start(),
            *crate::config::SEABORN_BIN_RANGE.end(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_embedded;

    fn state() -> AppState {
        AppState::new(load_embedded().unwrap(), &DashboardConfig::default())
    }

    #[test]
    fn default_selection_is_gentoo() {
        let mut st = state();
        let view = st.filtered_data();
        assert!(!view.is_empty());
        assert!(view.rows(st.dataset()).all(|p| p.species == "Gentoo"));
    }

    #[test]
    fn consumers_in_one_cycle_share_one_computation() {
        let mut st = state();
        let table = st.filtered_data();
        let grid = st.filtered_data();
        let chart = st.filtered_data();
        assert!(Rc::ptr_eq(&table, &grid));
        assert!(Rc::ptr_eq(&grid, &chart));
        assert_eq!(st.filter_recomputations(), 1);
    }

    #[test]
    fn selection_change_recomputes_exactly_once() {
        let mut st = state();
        let before = st.filtered_data();

        st.set_species_selected("Adelie", true);
        let after = st.filtered_data();
        st.filtered_data();
        assert_eq!(st.filter_recomputations(), 2);
        assert!(after.len() > before.len());

        // ticking an already-ticked box does not invalidate
        st.set_species_selected("Adelie", true);
        st.filtered_data();
        assert_eq!(st.filter_recomputations(), 2);
    }

    #[test]
    fn select_all_and_none() {
        let mut st = state();
        st.select_all();
        assert_eq!(st.filtered_data().len(), st.dataset().len());

        st.select_none();
        assert!(st.filtered_data().is_empty());
    }

    #[test]
    fn replacing_dataset_invalidates_view() {
        let mut st = state();
        st.select_all();
        let full = st.filtered_data().len();

        let smaller = crate::data::loader::parse_csv("species\nGentoo\nAdelie\n".as_bytes()).unwrap();
        st.set_dataset(smaller);
        assert_eq!(st.filtered_data().len(), 2);
        assert_ne!(full, 2);
        assert_eq!(st.filter_recomputations(), 2);
    }

    #[test]
    fn bin_counts_are_clamped() {
        let mut st = state();
        st.set_bin_counts(0, 99);
        assert_eq!((st.plotly_bin_count, st.seaborn_bin_count), (1, 50));
    }
}
