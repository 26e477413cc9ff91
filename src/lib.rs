//! Interactive explorer for the Palmer Penguins dataset.
//!
//! The sidebar picks plot parameters and filters species; two tables and
//! three charts read one shared, memoised [`data::filter::FilteredView`].

pub mod app;
pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod reactive;
pub mod state;
pub mod ui;

pub use app::PenguinDashApp;
pub use config::DashboardConfig;
pub use error::DataError;
