use super::model::{Measurement, Penguin};

// ---------------------------------------------------------------------------
// Species histogram – shared bin edges, one count vector per species
// ---------------------------------------------------------------------------

/// Counts for one species over the shared bins.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramSeries {
    pub species: String,
    pub counts: Vec<usize>,
}

/// Equal-width histogram of one measurement, split by species.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpeciesHistogram {
    /// `bins + 1` ascending edges; empty when there was no data.
    pub edges: Vec<f64>,
    pub series: Vec<HistogramSeries>,
}

impl SpeciesHistogram {
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn bin_count(&self) -> usize {
        self.edges.len().saturating_sub(1)
    }

    pub fn bin_width(&self) -> f64 {
        match self.edges.as_slice() {
            [first, second, ..] => second - first,
            _ => 0.0,
        }
    }

    /// Total number of values binned across every species.
    pub fn total(&self) -> usize {
        self.series.iter().flat_map(|s| s.counts.iter()).sum()
    }
}

/// Bin `measurement` of `rows` into `bins` equal-width bins over the shared range.
///
/// * Missing and non-finite values are skipped.
/// * The maximum lands in the last bin.
/// * A degenerate range (all values equal) becomes one unit-wide bin.
/// * Series follow `species_order`; species without values are omitted.
pub fn species_histogram<'a>(
    rows: impl IntoIterator<Item = &'a Penguin>,
    species_order: &[String],
    measurement: Measurement,
    bins: usize,
) -> SpeciesHistogram {
    let mut grouped: Vec<(String, Vec<f64>)> = species_order
        .iter()
        .map(|s| (s.clone(), Vec::new()))
        .collect();

    for p in rows {
        let Some(v) = p.measurement(measurement).filter(|v| v.is_finite()) else {
            continue;
        };
        match grouped.iter_mut().find(|(s, _)| *s == p.species) {
            Some((_, values)) => values.push(v),
            None => grouped.push((p.species.clone(), vec![v])),
        }
    }
    grouped.retain(|(_, values)| !values.is_empty());

    let all = grouped.iter().flat_map(|(_, values)| values.iter().copied());
    let (min, max) = all.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if grouped.is_empty() || !min.is_finite() {
        return SpeciesHistogram::default();
    }

    let (lo, bins, width) = if (max - min).abs() < f64::EPSILON {
        (min - 0.5, 1, 1.0)
    } else {
        let bins = bins.max(1);
        (min, bins, (max - min) / bins as f64)
    };

    let edges: Vec<f64> = (0..=bins).map(|i| lo + i as f64 * width).collect();
    let series = grouped
        .into_iter()
        .map(|(species, values)| {
            let mut counts = vec![0usize; bins];
            for v in values {
                let idx = (((v - lo) / width).floor() as usize).min(bins - 1);
                counts[idx] += 1;
            }
            HistogramSeries { species, counts }
        })
        .collect();

    SpeciesHistogram { edges, series }
}

// ---------------------------------------------------------------------------
// Bar layout – how the species bars share one bin
// ---------------------------------------------------------------------------

/// How multiple species are arranged within a bin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarMode {
    /// Bars sit on top of each other, full bin width.
    Stack,
    /// Bars sit side by side, each taking an equal share of the bin.
    Dodge,
}

/// Geometry of one bar, ready for the plotting layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarSpec {
    pub center: f64,
    pub width: f64,
    pub height: f64,
}

/// Lay out every series of `hist` as bars. Stacking offsets are left to the
/// plotting layer; only centres and widths differ between the modes.
pub fn bar_layout(hist: &SpeciesHistogram, mode: BarMode) -> Vec<(String, Vec<BarSpec>)> {
    let bin_width = hist.bin_width();
    let n_series = hist.series.len().max(1) as f64;

    hist.series
        .iter()
        .enumerate()
        .map(|(k, series)| {
            let bars = series
                .counts
                .iter()
                .enumerate()
                .map(|(i, &count)| {
                    let start = hist.edges[i];
                    let (center, width) = match mode {
                        BarMode::Stack => (start + bin_width / 2.0, bin_width),
                        BarMode::Dodge => {
                            let w = bin_width / n_series;
                            (start + (k as f64 + 0.5) * w, w)
                        }
                    };
                    BarSpec {
                        center,
                        width,
                        height: count as f64,
                    }
                })
                .collect();
            (series.species.clone(), bars)
        })
        .collect()
}
