use std::cmp::Ordering;

use super::model::{Measurement, Penguin, PenguinDataset};

// ---------------------------------------------------------------------------
// Table columns
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Species,
    Island,
    Measurement(Measurement),
    Sex,
    Year,
}

impl Column {
    pub const ALL: [Column; 8] = [
        Column::Species,
        Column::Island,
        Column::Measurement(Measurement::BillLength),
        Column::Measurement(Measurement::BillDepth),
        Column::Measurement(Measurement::FlipperLength),
        Column::Measurement(Measurement::BodyMass),
        Column::Sex,
        Column::Year,
    ];

    pub fn header(self) -> &'static str {
        match self {
            Column::Species => "species",
            Column::Island => "island",
            Column::Measurement(m) => m.column(),
            Column::Sex => "sex",
            Column::Year => "year",
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, Column::Measurement(_) | Column::Year)
    }

    /// Display text for a cell; missing values render as `NA`.
    pub fn cell(self, p: &Penguin) -> String {
        const NA: &str = "NA";
        match self {
            Column::Species => p.species.clone(),
            Column::Island => p.island.clone(),
            Column::Measurement(m) => p
                .measurement(m)
                .map(|v| v.to_string())
                .unwrap_or_else(|| NA.to_string()),
            Column::Sex => p.sex.clone().unwrap_or_else(|| NA.to_string()),
            Column::Year => p.year.map(|y| y.to_string()).unwrap_or_else(|| NA.to_string()),
        }
    }

    /// Compare two rows on this column. Missing values are not handled here.
    fn compare_present(self, a: &Penguin, b: &Penguin) -> Option<Ordering> {
        match self {
            Column::Species => Some(a.species.cmp(&b.species)),
            Column::Island => Some(a.island.cmp(&b.island)),
            Column::Measurement(m) => Some(a.measurement(m)?.total_cmp(&b.measurement(m)?)),
            Column::Sex => Some(a.sex.as_ref()?.cmp(b.sex.as_ref()?)),
            Column::Year => Some(a.year?.cmp(&b.year?)),
        }
    }

    fn is_missing(self, p: &Penguin) -> bool {
        match self {
            Column::Species | Column::Island => false,
            Column::Measurement(m) => p.measurement(m).is_none(),
            Column::Sex => p.sex.is_none(),
            Column::Year => p.year.is_none(),
        }
    }
}

// ---------------------------------------------------------------------------
// Sorting (DataGrid header clicks)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub column: Column,
    pub ascending: bool,
}

impl SortSpec {
    /// Next sort after a click on `column`: ascending first, then flip.
    pub fn after_click(current: Option<SortSpec>, column: Column) -> SortSpec {
        match current {
            Some(s) if s.column == column => SortSpec {
                column,
                ascending: !s.ascending,
            },
            _ => SortSpec {
                column,
                ascending: true,
            },
        }
    }
}

/// Order `indices` by `sort`. Stable; missing values always go last.
pub fn sorted_indices(dataset: &PenguinDataset, indices: &[usize], sort: Option<SortSpec>) -> Vec<usize> {
    let mut out = indices.to_vec();
    let Some(SortSpec { column, ascending }) = sort else {
        return out;
    };

    out.sort_by(|&ia, &ib| {
        let (Some(a), Some(b)) = (dataset.row(ia), dataset.row(ib)) else {
            return Ordering::Equal;
        };
        match (column.is_missing(a), column.is_missing(b)) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => {
                let ord = column.compare_present(a, b).unwrap_or(Ordering::Equal);
                if ascending {
                    ord
                } else {
                    ord.reverse()
                }
            }
        }
    });
    out
}
