use std::collections::BTreeSet;

use super::model::{Penguin, PenguinDataset};

// ---------------------------------------------------------------------------
// Species filter
// ---------------------------------------------------------------------------

/// The species currently ticked in the checkbox group.
/// An empty set selects nothing. Values absent from the dataset match nothing.
pub type SpeciesSelection = BTreeSet<String>;

/// Return indices of rows whose species is selected, in original row order.
pub fn filtered_indices(rows: &[Penguin], selected: &SpeciesSelection) -> Vec<usize> {
    if selected.is_empty() {
        return Vec::new();
    }
    rows.iter()
        .enumerate()
        .filter(|(_, p)| selected.contains(&p.species))
        .map(|(i, _)| i)
        .collect()
}

/// Owned variant of [`filtered_indices`]: the matching rows themselves.
pub fn filter(rows: &[Penguin], selected: &SpeciesSelection) -> Vec<Penguin> {
    filtered_indices(rows, selected)
        .into_iter()
        .map(|i| rows[i].clone())
        .collect()
}

// ---------------------------------------------------------------------------
// FilteredView – the derived subset shared by every table and chart
// ---------------------------------------------------------------------------

/// Row indices into a [`PenguinDataset`] that pass the species filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilteredView {
    indices: Vec<usize>,
}

impl FilteredView {
    pub fn compute(dataset: &PenguinDataset, selected: &SpeciesSelection) -> Self {
        FilteredView {
            indices: filtered_indices(dataset.rows(), selected),
        }
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Iterate the selected rows of `dataset` in original order.
    pub fn rows<'a>(&'a self, dataset: &'a PenguinDataset) -> impl Iterator<Item = &'a Penguin> + 'a {
        self.indices.iter().filter_map(move |&i| dataset.row(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::penguin;

    fn three_species() -> Vec<Penguin> {
        vec![
            penguin("Adelie", Some(39.1), Some(3750.0)),
            penguin("Gentoo", Some(46.1), Some(4500.0)),
            penguin("Chinstrap", Some(46.5), Some(3500.0)),
        ]
    }

    fn selection(values: &[&str]) -> SpeciesSelection {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn single_species_selects_single_row() {
        let rows = three_species();
        let out = filter(&rows, &selection(&["Gentoo"]));
        assert_eq!(out, vec![rows[1].clone()]);
    }

    #[test]
    fn all_species_keeps_every_row_in_order() {
        let rows = three_species();
        let out = filter(&rows, &selection(&["Adelie", "Gentoo", "Chinstrap"]));
        assert_eq!(out, rows);
        assert_eq!(filtered_indices(&rows, &selection(&["Chinstrap", "Adelie", "Gentoo"])), vec![0, 1, 2]);
    }

    #[test]
    fn empty_selection_yields_nothing() {
        let rows = three_species();
        assert!(filter(&rows, &SpeciesSelection::new()).is_empty());
    }

    #[test]
    fn unknown_species_matches_nothing() {
        let rows = three_species();
        assert!(filter(&rows, &selection(&["Emperor"])).is_empty());
        assert_eq!(filter(&rows, &selection(&["Emperor", "Adelie"])).len(), 1);
    }

    #[test]
    fn filtering_is_idempotent_and_only_keeps_selected() {
        let mut rows = three_species();
        rows.extend(three_species());
        let s = selection(&["Adelie", "Chinstrap"]);
        let once = filter(&rows, &s);
        assert!(once.iter().all(|p| s.contains(&p.species)));
        assert_eq!(filter(&once, &s), once);
        assert_eq!(once.len(), 4);
    }

    #[test]
    fn view_iterates_dataset_rows() {
        let ds = PenguinDataset::from_rows(three_species()).unwrap();
        let view = FilteredView::compute(&ds, &selection(&["Gentoo", "Chinstrap"]));
        assert_eq!(view.indices(), [1, 2]);
        let species: Vec<&str> = view.rows(&ds).map(|p| p.species.as_str()).collect();
        assert_eq!(species, ["Gentoo", "Chinstrap"]);
    }
}
