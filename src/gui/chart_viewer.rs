//! Chart Viewer Widget
//! Central panel: a custom legend implementing shared visibility groups,
//! and the interactive chart drawn with egui_plot.
//!
//! The legend is drawn by hand instead of using the plot's own legend so
//! that hiding a series also hides every connector linked to it.

use std::collections::HashSet;

use egui::{Color32, RichText};
use egui_plot::{Line, Plot, PlotPoints, Points};

use crate::charts::{Connector, Element, Figure, Rgb};

fn color32(c: Rgb) -> Color32 {
    Color32::from_rgb(c.r, c.g, c.b)
}

/// Chart display area with per-series visibility state.
pub struct ChartViewer {
    /// Visibility tags toggled off via the legend.
    hidden: HashSet<String>,
}

impl Default for ChartViewer {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartViewer {
    pub fn new() -> Self {
        Self {
            hidden: HashSet::new(),
        }
    }

    fn is_hidden(&self, tag: &str) -> bool {
        self.hidden.contains(tag)
    }

    /// A connector disappears as soon as either linked series is hidden.
    fn connector_hidden(&self, connector: &Connector) -> bool {
        self.is_hidden(&connector.links.0) || self.is_hidden(&connector.links.1)
    }

    fn toggle(&mut self, tag: &str) {
        if !self.hidden.remove(tag) {
            self.hidden.insert(tag.to_string());
        }
    }

    /// Draw the title, the legend, and the chart for the current figure.
    /// Empty figures still render title and axes.
    pub fn show(&mut self, ui: &mut egui::Ui, figure: &Figure) {
        ui.vertical_centered(|ui| {
            ui.add_space(4.0);
            ui.label(RichText::new(&figure.title).size(18.0).strong());
        });
        ui.add_space(6.0);

        self.draw_legend(ui, figure);
        ui.add_space(6.0);

        Plot::new("main_chart")
            .height(ui.available_height() - 8.0)
            .x_axis_label(figure.x_label.clone())
            .y_axis_label(figure.y_label.clone())
            .allow_scroll(false)
            .x_axis_formatter(|mark, _range| format!("{:.0}", mark.value))
            .show(ui, |plot_ui| {
                for element in &figure.elements {
                    match element {
                        Element::Series(series) => {
                            if self.is_hidden(&series.name) {
                                continue;
                            }
                            let color = color32(series.color);
                            let line: PlotPoints = series
                                .points
                                .iter()
                                .map(|&(year, value)| [year as f64, value])
                                .collect();
                            plot_ui.line(
                                Line::new(line)
                                    .color(color)
                                    .width(2.0)
                                    .name(&series.name),
                            );

                            let markers: PlotPoints = series
                                .points
                                .iter()
                                .map(|&(year, value)| [year as f64, value])
                                .collect();
                            plot_ui.points(
                                Points::new(markers)
                                    .radius(3.0)
                                    .color(color)
                                    .name(&series.name),
                            );
                        }
                        Element::Connector(connector) => {
                            if self.connector_hidden(connector) {
                                continue;
                            }
                            let color = color32(connector.color);
                            let segment: PlotPoints = vec![
                                [connector.from.0 as f64, connector.from.1],
                                [connector.to.0 as f64, connector.to.1],
                            ]
                            .into();
                            // No name: connectors never appear in a legend.
                            plot_ui.line(
                                Line::new(segment).color(color).width(connector.width),
                            );
                        }
                    }
                }
            });
    }

    fn draw_legend(&mut self, ui: &mut egui::Ui, figure: &Figure) {
        let entries: Vec<(String, Rgb)> = figure
            .series()
            .map(|s| (s.name.clone(), s.color))
            .collect();
        if entries.is_empty() {
            return;
        }

        ui.horizontal_wrapped(|ui| {
            for (name, color) in entries {
                let visible = !self.is_hidden(&name);
                let color = color32(color);

                let (rect, swatch) =
                    ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::click());
                let fill = if visible {
                    color
                } else {
                    color.gamma_multiply(0.25)
                };
                ui.painter().rect_filled(rect, 3.0, fill);

                let text = if visible {
                    RichText::new(&name).size(13.0)
                } else {
                    RichText::new(&name).size(13.0).strikethrough().weak()
                };
                let label = ui.add(egui::Label::new(text).sense(egui::Sense::click()));

                if swatch.clicked() || label.clicked() {
                    self.toggle(&name);
                }
                ui.add_space(12.0);
            }
        });
    }
}
