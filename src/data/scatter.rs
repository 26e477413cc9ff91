use super::model::{Measurement, Penguin};

/// Points of one species for a two-measurement scatter plot.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    pub species: String,
    pub points: Vec<[f64; 2]>,
}

/// Group `(x, y)` pairs by species, following `species_order`.
/// Rows missing either coordinate are skipped; species with no points are omitted.
pub fn species_scatter<'a>(
    rows: impl IntoIterator<Item = &'a Penguin>,
    species_order: &[String],
    x: Measurement,
    y: Measurement,
) -> Vec<ScatterSeries> {
    let mut series: Vec<ScatterSeries> = species_order
        .iter()
        .map(|s| ScatterSeries {
            species: s.clone(),
            points: Vec::new(),
        })
        .collect();

    for p in rows {
        let (Some(px), Some(py)) = (p.measurement(x), p.measurement(y)) else {
            continue;
        };
        match series.iter_mut().find(|s| s.species == p.species) {
            Some(s) => s.points.push([px, py]),
            None => series.push(ScatterSeries {
                species: p.species.clone(),
                points: vec![[px, py]],
            }),
        }
    }

    series.retain(|s| !s.points.is_empty());
    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::penguin;

    #[test]
    fn rows_with_missing_coordinates_are_skipped() {
        let rows = vec![
            penguin("Adelie", Some(39.1), Some(3750.0)),
            penguin("Adelie", None, Some(3800.0)),
            penguin("Gentoo", Some(46.1), None),
            penguin("Chinstrap", Some(46.5), Some(3500.0)),
        ];
        let order: Vec<String> = vec!["Adelie".into(), "Gentoo".into(), "Chinstrap".into()];
        let series = species_scatter(&rows, &order, Measurement::BillLength, Measurement::BodyMass);

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].species, "Adelie");
        assert_eq!(series[0].points, vec![[39.1, 3750.0]]);
        assert_eq!(series[1].species, "Chinstrap");
    }

    #[test]
    fn species_outside_the_order_are_appended() {
        let rows = vec![penguin("Emperor", Some(50.0), Some(30000.0))];
        let series = species_scatter(&rows, &[], Measurement::BillLength, Measurement::BodyMass);
        assert_eq!(series[0].species, "Emperor");
    }
}
