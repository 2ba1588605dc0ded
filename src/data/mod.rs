//! Data module - CSV loading and the typed climate tables

mod loader;
mod model;

pub use loader::{load_climate_data, LoaderError, HWI_FILE, HW_DAYS_FILE};
pub use model::{ClimateData, HwDaysRow, HwDaysTable, HwiRow, HwiTable, Scenario, Source, WarningLevel};
