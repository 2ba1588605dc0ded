//! Figure Description Module
//! Declarative output of the chart composer: an ordered list of drawable
//! elements plus layout metadata. Both the interactive viewer and the static
//! renderer consume this without knowing how it was produced.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A named data series, drawn as markers + line with one legend entry.
/// The name doubles as the visibility tag that connectors link against.
#[derive(Debug, Clone, Serialize)]
pub struct Series {
    pub name: String,
    pub color: Rgb,
    /// (year, value), ascending by year.
    pub points: Vec<(i32, f64)>,
}

/// A two-point bridge from the end of a base series to the start of a
/// projected series. No legend entry, no hover. Shown only while both
/// linked series are visible.
#[derive(Debug, Clone, Serialize)]
pub struct Connector {
    pub color: Rgb,
    pub width: f32,
    pub from: (i32, f64),
    pub to: (i32, f64),
    /// (projection tag, base tag)
    pub links: (String, String),
}

#[derive(Debug, Clone, Serialize)]
pub enum Element {
    Series(Series),
    Connector(Connector),
}

/// A complete chart description in draw order.
#[derive(Debug, Clone, Serialize)]
pub struct Figure {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub elements: Vec<Element>,
}

impl Figure {
    pub fn new(
        title: impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            elements: Vec::new(),
        }
    }

    pub fn series(&self) -> impl Iterator<Item = &Series> {
        self.elements.iter().filter_map(|e| match e {
            Element::Series(s) => Some(s),
            _ => None,
        })
    }

    pub fn connectors(&self) -> impl Iterator<Item = &Connector> {
        self.elements.iter().filter_map(|e| match e {
            Element::Connector(c) => Some(c),
            _ => None,
        })
    }

    /// ((x_min, x_max), (y_min, y_max)) over every drawn point, or `None`
    /// for an empty figure.
    pub fn bounds(&self) -> Option<((f64, f64), (f64, f64))> {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        let mut any = false;

        let mut visit = |(year, value): (i32, f64)| {
            let x = year as f64;
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(value);
            y_max = y_max.max(value);
            any = true;
        };

        for element in &self.elements {
            match element {
                Element::Series(s) => s.points.iter().copied().for_each(&mut visit),
                Element::Connector(c) => {
                    visit(c.from);
                    visit(c.to);
                }
            }
        }

        if any {
            Some(((x_min, x_max), (y_min, y_max)))
        } else {
            None
        }
    }
}
