use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::config::{MAX_PLOTLY_BINS, SEABORN_BIN_RANGE};
use crate::data::model::Measurement;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – form controls
// ---------------------------------------------------------------------------

/// Render the sidebar with the plot parameters and the species filter.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Sidebar");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Attribute dropdown ----
            ui.strong("Select Plotly Attribute");
            egui::ComboBox::from_id_salt("selected_attribute")
                .selected_text(state.selected_attribute.to_string())
                .width(ui.available_width())
                .show_ui(ui, |ui: &mut Ui| {
                    for m in Measurement::ALL {
                        ui.selectable_value(&mut state.selected_attribute, m, m.to_string());
                    }
                });
            ui.add_space(6.0);

            // ---- Bin counts ----
            ui.strong("Plotly Bin Count");
            let mut plotly_bins = state.plotly_bin_count;
            ui.add(egui::DragValue::new(&mut plotly_bins).range(1..=MAX_PLOTLY_BINS));
            ui.add_space(6.0);

            ui.strong("Number of Seaborn Bins");
            let mut seaborn_bins = state.seaborn_bin_count;
            ui.add(egui::Slider::new(&mut seaborn_bins, SEABORN_BIN_RANGE));
            state.set_bin_counts(plotly_bins, seaborn_bins);
            ui.add_space(6.0);

            // ---- Species checkbox group (inline) ----
            ui.horizontal(|ui: &mut Ui| {
                ui.strong("Species");
                if ui.small_button("All").clicked() {
                    state.select_all();
                }
                if ui.small_button("None").clicked() {
                    state.select_none();
                }
            });
            let legend = state.color_map.legend_entries();
            ui.horizontal_wrapped(|ui: &mut Ui| {
                for (species, color) in legend {
                    let mut checked = state.selected_species().contains(&species);
                    if ui
                        .checkbox(&mut checked, RichText::new(&species).color(color))
                        .changed()
                    {
                        state.set_species_selected(&species, checked);
                    }
                }
            });

            ui.separator();
            ui.hyperlink_to("GitHub", &state.repo_url);
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();
        ui.strong("Penguin Data");
        ui.separator();

        let visible = state.filtered_data().len();
        ui.label(format!(
            "{} penguins loaded, {} visible",
            state.dataset().len(),
            visible
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open penguin data")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} penguins from {} with species {:?}",
                    dataset.len(),
                    path.display(),
                    dataset.species()
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
