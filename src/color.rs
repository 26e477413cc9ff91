use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: species → Color32
// ---------------------------------------------------------------------------

/// Maps every species of the dataset to a fixed colour, so a species keeps
/// its colour across charts and when other species are filtered out.
#[derive(Debug, Clone, Default)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
    order: Vec<String>,
}

impl ColorMap {
    pub fn new(species: &[String]) -> Self {
        let palette = generate_palette(species.len());
        let mapping = species.iter().cloned().zip(palette).collect();
        ColorMap {
            mapping,
            order: species.to_vec(),
        }
    }

    /// Look up the colour for a species; unknown species are grey.
    pub fn color_for(&self, species: &str) -> Color32 {
        self.mapping.get(species).copied().unwrap_or(Color32::GRAY)
    }

    /// Legend entries in dataset order.
    pub fn legend_entries(&self) -> Vec<(String, Color32)> {
        self.order
            .iter()
            .map(|s| (s.clone(), self.color_for(s)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_colours_are_distinct() {
        let colors = generate_palette(3);
        assert_eq!(colors.len(), 3);
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn unknown_species_falls_back_to_grey() {
        let map = ColorMap::new(&["Adelie".to_string(), "Gentoo".to_string()]);
        assert_eq!(map.color_for("Emperor"), Color32::GRAY);
        assert_ne!(map.color_for("Adelie"), Color32::GRAY);
        let legend: Vec<String> = map.legend_entries().into_iter().map(|(s, _)| s).collect();
        assert_eq!(legend, ["Adelie", "Gentoo"]);
    }
}
