//! Domain Model Module
//! Typed climate tables shared read-only by the whole application.

use serde::Serialize;

/// Provenance of an HWI record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Observations,
    Historical,
    Ssp126,
    Ssp245,
    Ssp370,
}

impl Source {
    /// Fixed draw order for the scenario view.
    pub const ALL: [Source; 5] = [
        Source::Observations,
        Source::Historical,
        Source::Ssp126,
        Source::Ssp245,
        Source::Ssp370,
    ];

    /// Series a connector can originate from.
    pub const BASES: [Source; 2] = [Source::Observations, Source::Historical];

    /// Series a connector can terminate at.
    pub const PROJECTIONS: [Source; 3] = [Source::Ssp126, Source::Ssp245, Source::Ssp370];

    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Observations => "observations",
            Source::Historical => "historical",
            Source::Ssp126 => "ssp126",
            Source::Ssp245 => "ssp245",
            Source::Ssp370 => "ssp370",
        }
    }

    pub fn parse(s: &str) -> Option<Source> {
        match s {
            "observations" => Some(Source::Observations),
            "historical" => Some(Source::Historical),
            "ssp126" => Some(Source::Ssp126),
            "ssp245" => Some(Source::Ssp245),
            "ssp370" => Some(Source::Ssp370),
            _ => None,
        }
    }
}

/// Heat-event severity bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WarningLevel {
    Yellow,
    Orange,
    Red,
}

impl WarningLevel {
    /// Fixed draw order for the warning-level view.
    pub const ALL: [WarningLevel; 3] = [
        WarningLevel::Yellow,
        WarningLevel::Orange,
        WarningLevel::Red,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WarningLevel::Yellow => "yellow",
            WarningLevel::Orange => "orange",
            WarningLevel::Red => "red",
        }
    }

    pub fn parse(s: &str) -> Option<WarningLevel> {
        match s {
            "yellow" => Some(WarningLevel::Yellow),
            "orange" => Some(WarningLevel::Orange),
            "red" => Some(WarningLevel::Red),
            _ => None,
        }
    }
}

/// Provenance of a heatwave-days record. The heatwave-days dataset spells its
/// categories differently from the HWI one ("obs" vs "observations"), so the
/// two namespaces stay separate types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    Obs,
    Historical,
    Ssp126,
    Ssp245,
    Ssp370,
}

impl Scenario {
    /// Fixed draw order for the heatwave-days view.
    pub const ALL: [Scenario; 5] = [
        Scenario::Obs,
        Scenario::Historical,
        Scenario::Ssp126,
        Scenario::Ssp245,
        Scenario::Ssp370,
    ];

    pub const PROJECTIONS: [Scenario; 3] = [Scenario::Ssp126, Scenario::Ssp245, Scenario::Ssp370];

    pub fn as_str(&self) -> &'static str {
        match self {
            Scenario::Obs => "obs",
            Scenario::Historical => "historical",
            Scenario::Ssp126 => "ssp126",
            Scenario::Ssp245 => "ssp245",
            Scenario::Ssp370 => "ssp370",
        }
    }

    pub fn parse(s: &str) -> Option<Scenario> {
        match s {
            "obs" => Some(Scenario::Obs),
            "historical" => Some(Scenario::Historical),
            "ssp126" => Some(Scenario::Ssp126),
            "ssp245" => Some(Scenario::Ssp245),
            "ssp370" => Some(Scenario::Ssp370),
            _ => None,
        }
    }

    /// Checklist label ("SSP126" for projections, plain name otherwise).
    pub fn label(&self) -> String {
        let s = self.as_str();
        if s.starts_with("ssp") {
            s.to_uppercase()
        } else {
            s.to_string()
        }
    }
}

/// One cleaned HWI record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HwiRow {
    pub year: i32,
    pub source: Source,
    pub level: WarningLevel,
    pub hwi: f64,
}

/// One cleaned heatwave-days record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HwDaysRow {
    pub year: i32,
    pub scenario: Scenario,
    pub days: f64,
}

/// Immutable HWI table.
#[derive(Debug, Clone, Default)]
pub struct HwiTable {
    rows: Vec<HwiRow>,
}

impl HwiTable {
    pub fn new(rows: Vec<HwiRow>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Points for one (source, level) pair, sorted ascending by year.
    pub fn series(&self, source: Source, level: WarningLevel) -> Vec<(i32, f64)> {
        let mut points: Vec<(i32, f64)> = self
            .rows
            .iter()
            .filter(|r| r.source == source && r.level == level)
            .map(|r| (r.year, r.hwi))
            .collect();
        points.sort_by_key(|p| p.0);
        points
    }
}

/// Immutable heatwave-days table.
#[derive(Debug, Clone, Default)]
pub struct HwDaysTable {
    rows: Vec<HwDaysRow>,
}

impl HwDaysTable {
    pub fn new(rows: Vec<HwDaysRow>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Points for one scenario, sorted ascending by year.
    pub fn series(&self, scenario: Scenario) -> Vec<(i32, f64)> {
        let mut points: Vec<(i32, f64)> = self
            .rows
            .iter()
            .filter(|r| r.scenario == scenario)
            .map(|r| (r.year, r.days))
            .collect();
        points.sort_by_key(|p| p.0);
        points
    }
}

/// The two loaded datasets. Built once at startup, read-only afterwards.
/// `hw_days` is `None` when the optional file could not be loaded; the
/// heatwave-days tab is disabled in that case.
#[derive(Debug, Clone)]
pub struct ClimateData {
    pub hwi: HwiTable,
    pub hw_days: Option<HwDaysTable>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hwi_row(year: i32, source: Source, level: WarningLevel, hwi: f64) -> HwiRow {
        HwiRow {
            year,
            source,
            level,
            hwi,
        }
    }

    #[test]
    fn series_filters_on_both_source_and_level() {
        let table = HwiTable::new(vec![
            hwi_row(2000, Source::Observations, WarningLevel::Yellow, 1.0),
            hwi_row(2000, Source::Observations, WarningLevel::Red, 9.0),
            hwi_row(2000, Source::Historical, WarningLevel::Yellow, 5.0),
        ]);

        let points = table.series(Source::Observations, WarningLevel::Yellow);
        assert_eq!(points, vec![(2000, 1.0)]);
    }

    #[test]
    fn series_sorts_by_year() {
        let table = HwiTable::new(vec![
            hwi_row(2010, Source::Historical, WarningLevel::Orange, 3.0),
            hwi_row(1995, Source::Historical, WarningLevel::Orange, 1.0),
            hwi_row(2003, Source::Historical, WarningLevel::Orange, 2.0),
        ]);

        let points = table.series(Source::Historical, WarningLevel::Orange);
        assert_eq!(points, vec![(1995, 1.0), (2003, 2.0), (2010, 3.0)]);
    }

    #[test]
    fn unknown_category_gives_empty_series() {
        let table = HwiTable::new(vec![hwi_row(
            2000,
            Source::Observations,
            WarningLevel::Yellow,
            1.0,
        )]);
        assert!(table.series(Source::Ssp370, WarningLevel::Red).is_empty());
    }

    #[test]
    fn scenario_parse_round_trips() {
        for scen in Scenario::ALL {
            assert_eq!(Scenario::parse(scen.as_str()), Some(scen));
        }
        assert_eq!(Scenario::parse("rcp85"), None);
    }

    #[test]
    fn scenario_labels_uppercase_projections() {
        assert_eq!(Scenario::Ssp126.label(), "SSP126");
        assert_eq!(Scenario::Obs.label(), "obs");
    }
}
