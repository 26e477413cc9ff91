use eframe::egui::{Align, Layout, RichText, Ui};
use egui_extras::{Column as TableColumn, TableBuilder};

use crate::data::filter::FilteredView;
use crate::data::model::PenguinDataset;
use crate::data::table::{sorted_indices, Column, SortSpec};
use crate::state::AppState;

const ROW_HEIGHT: f32 = 18.0;
const HEADER_HEIGHT: f32 = 22.0;

// ---------------------------------------------------------------------------
// DataTable – plain read-only listing
// ---------------------------------------------------------------------------

pub fn data_table(ui: &mut Ui, state: &mut AppState) {
    let view = state.filtered_data();
    let dataset = state.dataset();

    ui.push_id("penguins_data_table", |ui: &mut Ui| {
        render(ui, dataset, view.indices(), true, |header: &mut Ui, column| {
            header.strong(column.header());
        });
    });
    empty_hint(ui, &view);
}

// ---------------------------------------------------------------------------
// DataGrid – sortable by clicking a column header
// ---------------------------------------------------------------------------

pub fn data_grid(ui: &mut Ui, state: &mut AppState) {
    let view = state.filtered_data();
    let order = sorted_indices(state.dataset(), view.indices(), state.grid_sort);
    let current = state.grid_sort;
    let mut clicked = None;

    ui.push_id("penguins_data_grid", |ui: &mut Ui| {
        render(ui, state.dataset(), &order, false, |header: &mut Ui, column| {
            let arrow = match current {
                Some(s) if s.column == column && s.ascending => " ⏶",
                Some(s) if s.column == column => " ⏷",
                _ => "",
            };
            let text = RichText::new(format!("{}{arrow}", column.header())).strong();
            if header.button(text).clicked() {
                clicked = Some(column);
            }
        });
    });

    if let Some(column) = clicked {
        state.grid_sort = Some(SortSpec::after_click(current, column));
    }
    empty_hint(ui, &view);
}

// ---------------------------------------------------------------------------
// Shared rendering
// ---------------------------------------------------------------------------

fn render(
    ui: &mut Ui,
    dataset: &PenguinDataset,
    indices: &[usize],
    striped: bool,
    mut header_cell: impl FnMut(&mut Ui, Column),
) {
    let mut table = TableBuilder::new(ui)
        .striped(striped)
        .resizable(true)
        .auto_shrink([false, true])
        .cell_layout(Layout::left_to_right(Align::Center))
        .max_scroll_height(320.0);
    for column in Column::ALL {
        let width = if column.is_numeric() { 110.0 } else { 80.0 };
        table = table.column(TableColumn::initial(width).at_least(40.0).clip(true));
    }

    table
        .header(HEADER_HEIGHT, |mut header| {
            for column in Column::ALL {
                header.col(|ui: &mut Ui| header_cell(ui, column));
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, indices.len(), |mut row| {
                let Some(p) = dataset.row(indices[row.index()]) else {
                    return;
                };
                for column in Column::ALL {
                    row.col(|ui: &mut Ui| {
                        if column.is_numeric() {
                            ui.with_layout(Layout::right_to_left(Align::Center), |ui: &mut Ui| {
                                ui.label(column.cell(p));
                            });
                        } else {
                            ui.label(column.cell(p));
                        }
                    });
                }
            });
        });
}

fn empty_hint(ui: &mut Ui, view: &FilteredView) {
    if view.is_empty() {
        ui.add_space(4.0);
        ui.label(RichText::new("No rows match the current selection").italics());
    }
}
