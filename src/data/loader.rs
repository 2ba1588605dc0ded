//! CSV Data Loader Module
//! Loads the two climate datasets at startup using Polars and materializes
//! them into typed tables.

use polars::prelude::*;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

use super::model::{
    ClimateData, HwDaysRow, HwDaysTable, HwiRow, HwiTable, Scenario, Source, WarningLevel,
};

/// HWI dataset file name, resolved against the data directory.
pub const HWI_FILE: &str = "LV_average_HWI.csv";
/// Heatwave-days dataset file name. This dataset is optional.
pub const HW_DAYS_FILE: &str = "LV_average_HWdays.csv";

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
}

/// Load both datasets from `dir`. The HWI table is required; a missing or
/// unreadable heatwave-days file degrades to `hw_days = None`.
pub fn load_climate_data(dir: &Path) -> Result<ClimateData, LoaderError> {
    let hwi = load_hwi(&dir.join(HWI_FILE))?;
    info!(rows = hwi.len(), "HWI table loaded");

    let hw_path = dir.join(HW_DAYS_FILE);
    let hw_days = match load_hw_days(&hw_path) {
        Ok(table) => {
            info!(rows = table.len(), "heatwave-days table loaded");
            Some(table)
        }
        Err(e) => {
            warn!(
                path = %hw_path.display(),
                error = %e,
                "heatwave-days dataset unavailable, tab disabled"
            );
            None
        }
    };

    Ok(ClimateData { hwi, hw_days })
}

/// Load the HWI table: parse the `time` column as a date, derive `year`,
/// and drop rows without an `hwi` value.
pub fn load_hwi(path: &Path) -> Result<HwiTable, LoaderError> {
    let path_str = path.to_string_lossy().to_string();

    let df = LazyCsvReader::new(&path_str)
        .with_infer_schema_length(Some(10000))
        .with_ignore_errors(true)
        .with_try_parse_dates(true)
        .finish()?
        .with_columns([col("time").dt().year().alias("year")])
        .filter(col("hwi").is_not_null())
        .select([
            col("year").cast(DataType::Int32),
            col("source"),
            col("warning_level"),
            col("hwi").cast(DataType::Float64),
        ])
        .collect()?;

    let years = df.column("year")?.i32()?;
    let sources = df.column("source")?;
    let levels = df.column("warning_level")?;
    let hwis = df.column("hwi")?.f64()?;

    let mut rows = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        let (Some(year), Some(hwi)) = (years.get(i), hwis.get(i)) else {
            continue;
        };
        if hwi.is_nan() {
            continue;
        }
        let (Ok(src), Ok(lvl)) = (sources.get(i), levels.get(i)) else {
            continue;
        };
        let src = src.to_string();
        let lvl = lvl.to_string();
        let src = src.trim_matches('"');
        let lvl = lvl.trim_matches('"');

        match (Source::parse(src), WarningLevel::parse(lvl)) {
            (Some(source), Some(level)) => rows.push(HwiRow {
                year,
                source,
                level,
                hwi,
            }),
            _ => warn!(source = src, warning_level = lvl, "skipping unknown HWI category"),
        }
    }

    Ok(HwiTable::new(rows))
}

/// Load the heatwave-days table: coerce `year` to integer and drop rows
/// without a `heatwave_days` value.
pub fn load_hw_days(path: &Path) -> Result<HwDaysTable, LoaderError> {
    let path_str = path.to_string_lossy().to_string();

    let df = LazyCsvReader::new(&path_str)
        .with_infer_schema_length(Some(10000))
        .with_ignore_errors(true)
        .finish()?
        .filter(col("heatwave_days").is_not_null())
        .select([
            col("year").cast(DataType::Int32),
            col("scenario"),
            col("heatwave_days").cast(DataType::Float64),
        ])
        .collect()?;

    let years = df.column("year")?.i32()?;
    let scenarios = df.column("scenario")?;
    let days_col = df.column("heatwave_days")?.f64()?;

    let mut rows = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        let (Some(year), Some(days)) = (years.get(i), days_col.get(i)) else {
            continue;
        };
        if days.is_nan() {
            continue;
        }
        let Ok(scen) = scenarios.get(i) else {
            continue;
        };
        let scen = scen.to_string();
        let scen = scen.trim_matches('"');

        match Scenario::parse(scen) {
            Some(scenario) => rows.push(HwDaysRow {
                year,
                scenario,
                days,
            }),
            None => warn!(scenario = scen, "skipping unknown heatwave-days scenario"),
        }
    }

    Ok(HwDaysTable::new(rows))
}
