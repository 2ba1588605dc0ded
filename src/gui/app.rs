//! Heatwave Viewer Main Application
//! Main window wiring the control panel, the chart composer, and the
//! chart viewer.

use egui::SidePanel;
use tracing::{error, info, warn};

use crate::charts::{self, composer, Figure};
use crate::data::ClimateData;
use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction, HwiView, Selection, Tab};

/// Main application window.
pub struct HeatwaveApp {
    data: ClimateData,
    control_panel: ControlPanel,
    chart_viewer: ChartViewer,
    figure: Figure,
}

impl HeatwaveApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, data: ClimateData) -> Self {
        let mut control_panel = ControlPanel::new(data.hw_days.is_some());
        control_panel.set_status(&format!("{} HWI rows loaded", data.hwi.len()));
        let figure = Self::compose(&data, &control_panel.selection);
        Self {
            data,
            control_panel,
            chart_viewer: ChartViewer::new(),
            figure,
        }
    }

    /// One synchronous recomputation of the figure for the current selection.
    fn compose(data: &ClimateData, selection: &Selection) -> Figure {
        match selection.tab {
            Tab::Hwi => match selection.hwi_view {
                HwiView::Scenario => composer::hwi_by_scenario(&data.hwi, selection.hwi_level),
                HwiView::Warning => composer::hwi_by_warning(&data.hwi, selection.hwi_source),
            },
            Tab::HwDays => match &data.hw_days {
                Some(table) => composer::heatwave_days(table, &selection.hw_scenarios),
                // The tab is disabled while the dataset is absent; this arm
                // is an unreachable fallback, not an error path.
                None => Figure::new("Karstuma viļņu dienas", "Gads", "Dienas"),
            },
        }
    }

    fn recompose(&mut self) {
        self.figure = Self::compose(&self.data, &self.control_panel.selection);
    }

    fn handle_export_png(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG image", &["png"])
            .set_file_name("heatwave_chart.png")
            .save_file()
        else {
            return;
        };

        match charts::render_png(&self.figure, &path) {
            Ok(()) => {
                info!(path = %path.display(), "chart exported");
                self.control_panel
                    .set_status(&format!("Exported {}", path.display()));
                if let Err(e) = open::that(&path) {
                    warn!(error = %e, "could not open exported chart");
                }
            }
            Err(e) => {
                error!(error = %e, "chart export failed");
                self.control_panel.set_status(&format!("Error: {e}"));
            }
        }
    }

    fn handle_export_json(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name("heatwave_chart.json")
            .save_file()
        else {
            return;
        };

        let result = serde_json::to_string_pretty(&self.figure)
            .map_err(anyhow::Error::from)
            .and_then(|json| std::fs::write(&path, json).map_err(anyhow::Error::from));

        match result {
            Ok(()) => {
                info!(path = %path.display(), "figure exported");
                self.control_panel
                    .set_status(&format!("Exported {}", path.display()));
            }
            Err(e) => {
                error!(error = %e, "figure export failed");
                self.control_panel.set_status(&format!("Error: {e}"));
            }
        }
    }
}

impl eframe::App for HeatwaveApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Left panel - controls
        SidePanel::left("control_panel")
            .min_width(300.0)
            .max_width(350.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let action = self.control_panel.show(ui);

                    match action {
                        ControlPanelAction::SelectionChanged => self.recompose(),
                        ControlPanelAction::ExportPng => self.handle_export_png(),
                        ControlPanelAction::ExportJson => self.handle_export_json(),
                        ControlPanelAction::None => {}
                    }
                });
            });

        // Central panel - chart
        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer.show(ui, &self.figure);
        });
    }
}
