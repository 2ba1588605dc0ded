//! Chart Composer Module
//! Pure construction of figure descriptions from the climate tables and the
//! user's current selection. Nothing here touches the UI or the filesystem.

use std::collections::BTreeSet;

use crate::charts::figure::{Connector, Element, Figure, Rgb, Series};
use crate::data::{HwDaysTable, HwiTable, Scenario, Source, WarningLevel};

const BLACK: Rgb = Rgb::new(0, 0, 0);
const GRAY: Rgb = Rgb::new(128, 128, 128);
const NAVY: Rgb = Rgb::new(0, 0, 128);
const ORANGE: Rgb = Rgb::new(255, 165, 0);
const RED: Rgb = Rgb::new(255, 0, 0);
const GOLD: Rgb = Rgb::new(255, 215, 0);
const DARK_ORANGE: Rgb = Rgb::new(255, 140, 0);
const FIREBRICK: Rgb = Rgb::new(178, 34, 34);

const HWI_CONNECTOR_WIDTH: f32 = 1.4;
const HW_DAYS_CONNECTOR_WIDTH: f32 = 1.3;

fn source_color(source: Source) -> Rgb {
    match source {
        Source::Observations => BLACK,
        Source::Historical => GRAY,
        Source::Ssp126 => NAVY,
        Source::Ssp245 => ORANGE,
        Source::Ssp370 => RED,
    }
}

fn level_color(level: WarningLevel) -> Rgb {
    match level {
        WarningLevel::Yellow => GOLD,
        WarningLevel::Orange => DARK_ORANGE,
        WarningLevel::Red => FIREBRICK,
    }
}

fn scenario_color(scenario: Scenario) -> Rgb {
    match scenario {
        Scenario::Obs => BLACK,
        Scenario::Historical => GRAY,
        Scenario::Ssp126 => NAVY,
        Scenario::Ssp245 => ORANGE,
        Scenario::Ssp370 => RED,
    }
}

/// Endpoint where a connector leaves a base series: the first row carrying
/// the series' final year. Requires year-sorted points.
fn last_point(points: &[(i32, f64)]) -> Option<(i32, f64)> {
    let &(last_year, _) = points.last()?;
    points.iter().copied().find(|&(year, _)| year == last_year)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// HWI tab, scenario view: one series per present source at the selected
/// warning level, plus continuity connectors from each base series into
/// each present projection.
pub fn hwi_by_scenario(table: &HwiTable, level: WarningLevel) -> Figure {
    let mut figure = Figure::new(
        format!("HWI — {}", capitalize(level.as_str())),
        "Gads",
        "HWI",
    );

    for base in Source::BASES {
        let points = table.series(base, level);
        if points.is_empty() {
            continue;
        }
        figure.elements.push(Element::Series(Series {
            name: base.as_str().to_string(),
            color: source_color(base),
            points,
        }));
    }

    for ssp in Source::PROJECTIONS {
        let points = table.series(ssp, level);
        if points.is_empty() {
            continue;
        }
        let to = points[0];
        figure.elements.push(Element::Series(Series {
            name: ssp.as_str().to_string(),
            color: source_color(ssp),
            points,
        }));

        // A connector only exists when its base end exists; it disappears
        // with either endpoint series via the links tags.
        for base in Source::BASES {
            let Some(from) = last_point(&table.series(base, level)) else {
                continue;
            };
            figure.elements.push(Element::Connector(Connector {
                color: source_color(ssp),
                width: HWI_CONNECTOR_WIDTH,
                from,
                to,
                links: (ssp.as_str().to_string(), base.as_str().to_string()),
            }));
        }
    }

    figure
}

/// HWI tab, warning-level view: one series per present level for the
/// selected source. Warning levels are not scenario-continuous, so this
/// view has no connectors.
pub fn hwi_by_warning(table: &HwiTable, source: Source) -> Figure {
    let mut figure = Figure::new(
        format!("HWI — scenārijs: {}", source.as_str()),
        "Gads",
        "HWI",
    );

    for level in WarningLevel::ALL {
        let points = table.series(source, level);
        if points.is_empty() {
            continue;
        }
        figure.elements.push(Element::Series(Series {
            name: level.as_str().to_string(),
            color: level_color(level),
            points,
        }));
    }

    figure
}

/// Heatwave-days tab: one series per selected scenario, then connectors
/// into each selected projection from historical and obs, when those are
/// selected and present. An empty selection draws nothing.
pub fn heatwave_days(table: &HwDaysTable, selected: &BTreeSet<Scenario>) -> Figure {
    let mut figure = Figure::new("Karstuma viļņu dienas", "Gads", "Dienas");

    for scenario in Scenario::ALL {
        if !selected.contains(&scenario) {
            continue;
        }
        let points = table.series(scenario);
        if points.is_empty() {
            continue;
        }
        figure.elements.push(Element::Series(Series {
            name: scenario.as_str().to_string(),
            color: scenario_color(scenario),
            points,
        }));
    }

    for ssp in Scenario::PROJECTIONS {
        if !selected.contains(&ssp) {
            continue;
        }
        let projection = table.series(ssp);
        let Some(&to) = projection.first() else {
            continue;
        };
        for base in [Scenario::Historical, Scenario::Obs] {
            if !selected.contains(&base) {
                continue;
            }
            let Some(from) = last_point(&table.series(base)) else {
                continue;
            };
            figure.elements.push(Element::Connector(Connector {
                color: scenario_color(ssp),
                width: HW_DAYS_CONNECTOR_WIDTH,
                from,
                to,
                links: (ssp.as_str().to_string(), base.as_str().to_string()),
            }));
        }
    }

    figure
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{HwDaysRow, HwiRow};

    fn hwi_table(rows: &[(i32, Source, WarningLevel, f64)]) -> HwiTable {
        HwiTable::new(
            rows.iter()
                .map(|&(year, source, level, hwi)| HwiRow {
                    year,
                    source,
                    level,
                    hwi,
                })
                .collect(),
        )
    }

    fn hw_days_table(rows: &[(i32, Scenario, f64)]) -> HwDaysTable {
        HwDaysTable::new(
            rows.iter()
                .map(|&(year, scenario, days)| HwDaysRow {
                    year,
                    scenario,
                    days,
                })
                .collect(),
        )
    }

    fn selection(scenarios: &[Scenario]) -> BTreeSet<Scenario> {
        scenarios.iter().copied().collect()
    }

    #[test]
    fn scenario_view_keeps_only_the_selected_level() {
        // Yellow rows carry small values, red rows large ones.
        let table = hwi_table(&[
            (2000, Source::Observations, WarningLevel::Yellow, 1.0),
            (2001, Source::Observations, WarningLevel::Yellow, 1.2),
            (2000, Source::Observations, WarningLevel::Red, 9.0),
            (2001, Source::Historical, WarningLevel::Red, 9.5),
        ]);

        let figure = hwi_by_scenario(&table, WarningLevel::Yellow);
        for series in figure.series() {
            for &(_, value) in &series.points {
                assert!(value < 2.0, "red-level row leaked into yellow view");
            }
        }
        assert_eq!(figure.series().count(), 1);
    }

    #[test]
    fn scenario_view_bridges_observations_into_projection() {
        let mut rows = Vec::new();
        for year in 2000..=2020 {
            rows.push((year, Source::Observations, WarningLevel::Yellow, 1.0 + year as f64 / 100.0));
        }
        for year in 2021..=2100 {
            rows.push((year, Source::Ssp126, WarningLevel::Yellow, 2.0 + year as f64 / 100.0));
        }
        let table = hwi_table(&rows);

        let figure = hwi_by_scenario(&table, WarningLevel::Yellow);
        let names: Vec<&str> = figure.series().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["observations", "ssp126"]);

        let connectors: Vec<_> = figure.connectors().collect();
        assert_eq!(connectors.len(), 1);
        assert_eq!(connectors[0].from, (2020, 1.0 + 2020.0 / 100.0));
        assert_eq!(connectors[0].to, (2021, 2.0 + 2021.0 / 100.0));
        assert_eq!(
            connectors[0].links,
            ("ssp126".to_string(), "observations".to_string())
        );
    }

    #[test]
    fn scenario_view_draws_two_connectors_when_both_bases_present() {
        let table = hwi_table(&[
            (2010, Source::Observations, WarningLevel::Orange, 1.0),
            (2014, Source::Historical, WarningLevel::Orange, 1.1),
            (2015, Source::Ssp370, WarningLevel::Orange, 2.0),
            (2020, Source::Ssp370, WarningLevel::Orange, 2.4),
        ]);

        let figure = hwi_by_scenario(&table, WarningLevel::Orange);
        let connectors: Vec<_> = figure.connectors().collect();
        assert_eq!(connectors.len(), 2);
        assert_eq!(connectors[0].links.1, "observations");
        assert_eq!(connectors[1].links.1, "historical");
        // Both connectors terminate at the projection's first point.
        assert_eq!(connectors[0].to, (2015, 2.0));
        assert_eq!(connectors[1].to, (2015, 2.0));
    }

    #[test]
    fn scenario_view_omits_connectors_without_base_series() {
        let table = hwi_table(&[
            (2030, Source::Ssp245, WarningLevel::Yellow, 2.0),
            (2040, Source::Ssp245, WarningLevel::Yellow, 2.5),
        ]);

        let figure = hwi_by_scenario(&table, WarningLevel::Yellow);
        assert_eq!(figure.series().count(), 1);
        assert_eq!(figure.connectors().count(), 0);
    }

    #[test]
    fn scenario_view_endpoint_uses_first_row_at_boundary_year() {
        // Two rows share the base series' final year; the first one in
        // year-sorted order supplies the connector endpoint.
        let table = hwi_table(&[
            (2019, Source::Observations, WarningLevel::Yellow, 1.0),
            (2020, Source::Observations, WarningLevel::Yellow, 2.0),
            (2020, Source::Observations, WarningLevel::Yellow, 3.0),
            (2021, Source::Ssp126, WarningLevel::Yellow, 4.0),
        ]);

        let figure = hwi_by_scenario(&table, WarningLevel::Yellow);
        let connectors: Vec<_> = figure.connectors().collect();
        assert_eq!(connectors.len(), 1);
        assert_eq!(connectors[0].from, (2020, 2.0));
    }

    #[test]
    fn scenario_view_orders_points_by_year() {
        let table = hwi_table(&[
            (2015, Source::Historical, WarningLevel::Yellow, 1.5),
            (2001, Source::Historical, WarningLevel::Yellow, 1.1),
            (2008, Source::Historical, WarningLevel::Yellow, 1.3),
        ]);

        let figure = hwi_by_scenario(&table, WarningLevel::Yellow);
        for series in figure.series() {
            for pair in series.points.windows(2) {
                assert!(pair[0].0 <= pair[1].0, "series not year-ordered");
            }
        }
    }

    #[test]
    fn warning_view_keeps_only_the_selected_source() {
        let table = hwi_table(&[
            (2000, Source::Observations, WarningLevel::Yellow, 1.0),
            (2050, Source::Ssp370, WarningLevel::Yellow, 3.0),
            (2050, Source::Ssp370, WarningLevel::Orange, 2.0),
        ]);

        let figure = hwi_by_warning(&table, Source::Ssp370);
        let names: Vec<&str> = figure.series().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["yellow", "orange"]);
        for series in figure.series() {
            for &(year, _) in &series.points {
                assert_eq!(year, 2050, "observations row leaked into ssp370 view");
            }
        }
    }

    #[test]
    fn warning_view_omits_absent_levels_without_error() {
        let table = hwi_table(&[
            (2050, Source::Ssp370, WarningLevel::Yellow, 3.0),
            (2051, Source::Ssp370, WarningLevel::Orange, 2.0),
        ]);

        let figure = hwi_by_warning(&table, Source::Ssp370);
        assert!(figure.series().all(|s| s.name != "red"));
        assert_eq!(figure.series().count(), 2);
    }

    #[test]
    fn warning_view_never_draws_connectors() {
        let table = hwi_table(&[
            (2000, Source::Observations, WarningLevel::Yellow, 1.0),
            (2000, Source::Observations, WarningLevel::Orange, 1.5),
            (2000, Source::Observations, WarningLevel::Red, 2.0),
        ]);

        let figure = hwi_by_warning(&table, Source::Observations);
        assert_eq!(figure.connectors().count(), 0);
    }

    #[test]
    fn unknown_selection_yields_empty_figure() {
        let table = hwi_table(&[(2000, Source::Observations, WarningLevel::Yellow, 1.0)]);
        let figure = hwi_by_scenario(&table, WarningLevel::Red);
        assert!(figure.elements.is_empty());
        assert_eq!(figure.title, "HWI — Red");
    }

    #[test]
    fn hw_days_single_projection_has_no_connectors() {
        let table = hw_days_table(&[
            (2000, Scenario::Obs, 2.0),
            (2014, Scenario::Historical, 3.0),
            (2015, Scenario::Ssp245, 5.0),
            (2050, Scenario::Ssp245, 9.0),
        ]);

        let figure = heatwave_days(&table, &selection(&[Scenario::Ssp245]));
        assert_eq!(figure.series().count(), 1);
        assert_eq!(figure.connectors().count(), 0);
    }

    #[test]
    fn hw_days_connects_selected_bases_to_selected_projections() {
        let table = hw_days_table(&[
            (2000, Scenario::Obs, 2.0),
            (2014, Scenario::Historical, 3.0),
            (2015, Scenario::Ssp126, 5.0),
            (2050, Scenario::Ssp126, 9.0),
        ]);

        let figure = heatwave_days(
            &table,
            &selection(&[Scenario::Obs, Scenario::Historical, Scenario::Ssp126]),
        );
        assert_eq!(figure.series().count(), 3);

        let connectors: Vec<_> = figure.connectors().collect();
        assert_eq!(connectors.len(), 2);
        assert_eq!(
            connectors[0].links,
            ("ssp126".to_string(), "historical".to_string())
        );
        assert_eq!(connectors[0].from, (2014, 3.0));
        assert_eq!(
            connectors[1].links,
            ("ssp126".to_string(), "obs".to_string())
        );
        assert_eq!(connectors[1].from, (2000, 2.0));
        assert_eq!(connectors[1].to, (2015, 5.0));
    }

    #[test]
    fn hw_days_deselected_base_drops_its_connector() {
        let table = hw_days_table(&[
            (2000, Scenario::Obs, 2.0),
            (2014, Scenario::Historical, 3.0),
            (2015, Scenario::Ssp370, 5.0),
        ]);

        let figure = heatwave_days(&table, &selection(&[Scenario::Obs, Scenario::Ssp370]));
        let connectors: Vec<_> = figure.connectors().collect();
        assert_eq!(connectors.len(), 1);
        assert_eq!(connectors[0].links.1, "obs");
    }

    #[test]
    fn hw_days_empty_selection_draws_nothing() {
        let table = hw_days_table(&[(2000, Scenario::Obs, 2.0)]);
        let figure = heatwave_days(&table, &BTreeSet::new());
        assert!(figure.elements.is_empty());
        assert_eq!(figure.title, "Karstuma viļņu dienas");
    }

    #[test]
    fn connector_count_bounded_by_projections() {
        // Full data, full selection: at most two connectors per projection.
        let mut rows = Vec::new();
        for scenario in Scenario::ALL {
            rows.push((2000, scenario, 1.0));
            rows.push((2010, scenario, 2.0));
        }
        let table = hw_days_table(&rows);

        let figure = heatwave_days(&table, &selection(&Scenario::ALL));
        assert_eq!(figure.series().count(), 5);
        assert_eq!(figure.connectors().count(), 2 * Scenario::PROJECTIONS.len());
    }
}
