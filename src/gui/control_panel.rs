//! Control Panel Widget
//! Left side panel with the tab selector, per-tab filter controls, export
//! actions, and the status line.

use std::collections::BTreeSet;

use egui::{Color32, ComboBox, RichText};

use crate::data::{Scenario, Source, WarningLevel};

/// Which dataset tab is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Hwi,
    HwDays,
}

/// HWI presentation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwiView {
    Scenario,
    Warning,
}

/// Current user selection; the composer's input.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub tab: Tab,
    pub hwi_view: HwiView,
    pub hwi_level: WarningLevel,
    pub hwi_source: Source,
    pub hw_scenarios: BTreeSet<Scenario>,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            tab: Tab::Hwi,
            hwi_view: HwiView::Scenario,
            hwi_level: WarningLevel::Yellow,
            hwi_source: Source::Observations,
            hw_scenarios: Scenario::ALL.into_iter().collect(),
        }
    }
}

/// Left side control panel.
pub struct ControlPanel {
    pub selection: Selection,
    pub hw_available: bool,
    pub status: String,
}

impl ControlPanel {
    pub fn new(hw_available: bool) -> Self {
        Self {
            selection: Selection::default(),
            hw_available,
            status: "Ready".to_string(),
        }
    }

    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }

    /// Draw the control panel. Returns what the app should do this frame.
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;
        let before = self.selection.clone();

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("Latvija — ekstremālo karstuma rādītāji")
                    .size(15.0)
                    .strong()
                    .color(Color32::from_rgb(100, 149, 237)),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Tabs =====
        ui.horizontal(|ui| {
            ui.selectable_value(&mut self.selection.tab, Tab::Hwi, "HWI (gads)");
            ui.add_enabled_ui(self.hw_available, |ui| {
                ui.selectable_value(
                    &mut self.selection.tab,
                    Tab::HwDays,
                    "Karstuma viļņu dienas",
                );
            });
        });
        if !self.hw_available {
            ui.label(
                RichText::new("Heatwave-days dataset not available")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        }

        ui.add_space(10.0);
        ui.separator();
        ui.add_space(10.0);

        match self.selection.tab {
            Tab::Hwi => self.show_hwi_controls(ui),
            Tab::HwDays => self.show_hw_days_controls(ui),
        }

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Export =====
        ui.vertical_centered(|ui| {
            let png_button = egui::Button::new(RichText::new("Export PNG").size(14.0))
                .min_size(egui::vec2(170.0, 30.0));
            if ui.add(png_button).clicked() {
                action = ControlPanelAction::ExportPng;
            }

            ui.add_space(6.0);

            let json_button = egui::Button::new(RichText::new("Export JSON").size(14.0))
                .min_size(egui::vec2(170.0, 30.0));
            if ui.add(json_button).clicked() {
                action = ControlPanelAction::ExportJson;
            }
        });

        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Status =====
        let status_color = if self.status.contains("Error") {
            Color32::from_rgb(220, 53, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        if self.selection != before {
            action = ControlPanelAction::SelectionChanged;
        }
        action
    }

    fn show_hwi_controls(&mut self, ui: &mut egui::Ui) {
        ui.label(RichText::new("Skats:").size(13.0).strong());
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.radio_value(&mut self.selection.hwi_view, HwiView::Scenario, "Scenario");
            ui.radio_value(
                &mut self.selection.hwi_view,
                HwiView::Warning,
                "Warning Level",
            );
        });

        ui.add_space(8.0);

        match self.selection.hwi_view {
            HwiView::Scenario => {
                ComboBox::from_id_salt("hwi_level")
                    .width(180.0)
                    .selected_text(capitalized(self.selection.hwi_level.as_str()))
                    .show_ui(ui, |ui| {
                        for level in WarningLevel::ALL {
                            if ui
                                .selectable_label(
                                    self.selection.hwi_level == level,
                                    capitalized(level.as_str()),
                                )
                                .clicked()
                            {
                                self.selection.hwi_level = level;
                            }
                        }
                    });
            }
            HwiView::Warning => {
                ComboBox::from_id_salt("hwi_source")
                    .width(180.0)
                    .selected_text(capitalized(self.selection.hwi_source.as_str()))
                    .show_ui(ui, |ui| {
                        for source in Source::ALL {
                            if ui
                                .selectable_label(
                                    self.selection.hwi_source == source,
                                    capitalized(source.as_str()),
                                )
                                .clicked()
                            {
                                self.selection.hwi_source = source;
                            }
                        }
                    });
            }
        }
    }

    fn show_hw_days_controls(&mut self, ui: &mut egui::Ui) {
        ui.label(RichText::new("Scenāriji:").size(13.0).strong());
        ui.add_space(4.0);

        for scenario in Scenario::ALL {
            let mut checked = self.selection.hw_scenarios.contains(&scenario);
            if ui.checkbox(&mut checked, scenario.label()).changed() {
                if checked {
                    self.selection.hw_scenarios.insert(scenario);
                } else {
                    self.selection.hw_scenarios.remove(&scenario);
                }
            }
        }

        ui.add_space(5.0);
        ui.horizontal(|ui| {
            if ui.small_button("Select All").clicked() {
                self.selection.hw_scenarios = Scenario::ALL.into_iter().collect();
            }
            if ui.small_button("Clear All").clicked() {
                self.selection.hw_scenarios.clear();
            }
        });
    }
}

fn capitalized(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Actions triggered by the control panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlPanelAction {
    None,
    SelectionChanged,
    ExportPng,
    ExportJson,
}
