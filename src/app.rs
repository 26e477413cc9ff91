use eframe::egui::{self, ScrollArea, Ui};

use crate::state::{AppState, Card};
use crate::ui::{card, panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PenguinDashApp {
    pub state: AppState,
}

impl PenguinDashApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for PenguinDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: form controls ----
        egui::SidePanel::left("sidebar")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: tables and charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            match self.state.expanded_card {
                Some(which) => show_card(ui, &mut self.state, which),
                None => dashboard(ui, &mut self.state),
            }
        });
    }
}

fn dashboard(ui: &mut Ui, state: &mut AppState) {
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.columns(2, |cols: &mut [Ui]| {
                show_card(&mut cols[0], state, Card::DataTable);
                show_card(&mut cols[1], state, Card::DataGrid);
            });

            ui.separator();

            ui.columns(3, |cols: &mut [Ui]| {
                show_card(&mut cols[0], state, Card::AttributeHistogram);
                show_card(&mut cols[1], state, Card::MassHistogram);
                show_card(&mut cols[2], state, Card::Scatterplot);
            });
        });
}

fn show_card(ui: &mut Ui, state: &mut AppState, which: Card) {
    match which {
        Card::DataTable => card(ui, state, which, "Penguins DataTable", table::data_table),
        Card::DataGrid => card(ui, state, which, "Penguins DataGrid", table::data_grid),
        Card::AttributeHistogram => card(ui, state, which, "Plotly Histogram", plot::attribute_histogram),
        Card::MassHistogram => card(ui, state, which, "Seaborn Histogram", plot::mass_histogram),
        Card::Scatterplot => card(ui, state, which, "Species Scatterplot", plot::species_scatterplot),
    }
}
