/// Data layer: core types, loading, filtering and chart/table preparation.
///
/// Architecture:
/// ```text
///  embedded .csv / .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → PenguinDataset
///   └──────────┘
///        │
///        ▼
///   ┌────────────────┐
///   │ PenguinDataset │  Vec<Penguin>, species order
///   └────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  species selection → FilteredView (row indices)
///   └──────────┘
///        │
///        ├──► table      column cells, grid sorting
///        ├──► histogram  shared bins per species
///        └──► scatter    (x, y) series per species
/// ```

pub mod export;
pub mod filter;
pub mod histogram;
pub mod loader;
pub mod model;
pub mod scatter;
pub mod table;
