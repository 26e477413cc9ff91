use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Legend, Plot, Points};

use crate::color::ColorMap;
use crate::data::histogram::{bar_layout, species_histogram, BarMode, SpeciesHistogram};
use crate::data::model::Measurement;
use crate::data::scatter::species_scatter;
use crate::state::AppState;

const CHART_HEIGHT: f32 = 300.0;

// ---------------------------------------------------------------------------
// Attribute histogram – selected measurement, stacked by species
// ---------------------------------------------------------------------------

pub fn attribute_histogram(ui: &mut Ui, state: &mut AppState) {
    let view = state.filtered_data();
    let m = state.selected_attribute;
    let hist = species_histogram(
        view.rows(state.dataset()),
        state.dataset().species(),
        m,
        state.plotly_bin_count as usize,
    );

    histogram_plot(ui, "attribute_histogram", &hist, BarMode::Stack, &state.color_map, m.column(), "count");
}

// ---------------------------------------------------------------------------
// Body-mass histogram – dodged bars per species
// ---------------------------------------------------------------------------

pub fn mass_histogram(ui: &mut Ui, state: &mut AppState) {
    let view = state.filtered_data();
    let hist = species_histogram(
        view.rows(state.dataset()),
        state.dataset().species(),
        Measurement::BodyMass,
        state.seaborn_bin_count as usize,
    );

    ui.vertical_centered(|ui: &mut Ui| ui.strong("Palmer Penguins"));
    histogram_plot(ui, "mass_histogram", &hist, BarMode::Dodge, &state.color_map, "Mass", "Count");
}

fn histogram_plot(
    ui: &mut Ui,
    id: &str,
    hist: &SpeciesHistogram,
    mode: BarMode,
    colors: &ColorMap,
    x_label: &str,
    y_label: &str,
) {
    let mut charts: Vec<BarChart> = Vec::with_capacity(hist.series.len());
    for (species, specs) in bar_layout(hist, mode) {
        let color = colors.color_for(&species);
        let bars: Vec<Bar> = specs
            .iter()
            .map(|b| Bar::new(b.center, b.height).width(b.width))
            .collect();
        let mut chart = BarChart::new(bars).name(&species).color(color);
        if mode == BarMode::Stack {
            let below: Vec<&BarChart> = charts.iter().collect();
            chart = chart.stack_on(&below);
        }
        charts.push(chart);
    }

    Plot::new(id)
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .x_axis_label(x_label)
        .y_axis_label(y_label)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for chart in charts {
                plot_ui.bar_chart(chart);
            }
        });
}

// ---------------------------------------------------------------------------
// Species scatterplot – bill length vs body mass
// ---------------------------------------------------------------------------

pub fn species_scatterplot(ui: &mut Ui, state: &mut AppState) {
    let view = state.filtered_data();
    let x = Measurement::BillLength;
    let y = Measurement::BodyMass;
    let series = species_scatter(view.rows(state.dataset()), state.dataset().species(), x, y);

    ui.vertical_centered(|ui: &mut Ui| ui.strong("Penguins Plot"));
    Plot::new("species_scatterplot")
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .x_axis_label(x.label())
        .y_axis_label(y.label())
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for s in series {
                let color = state.color_map.color_for(&s.species);
                plot_ui.points(
                    Points::new(s.points)
                        .name(&s.species)
                        .color(color)
                        .radius(3.0)
                        .shape(egui_plot::MarkerShape::Circle)
                        .filled(true),
                );
            }
        });
}
