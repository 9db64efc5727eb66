use std::hash::Hash;

use crate::render::format::number;
use crate::render::Element;
use crate::scales::{BandScale, LinearScale};
use crate::utils::constants::{TICK_PADDING, TICK_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Bottom,
    Left,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

/// Axis line with labelled ticks, positioned along one scale's range
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    orientation: Orientation,
    range: (f64, f64),
    ticks: Vec<Tick>,
}

impl Axis {
    /// Ticks at band centres for the given values, skipping values outside the domain
    pub fn band<T, F>(
        orientation: Orientation,
        scale: &BandScale<T>,
        values: impl IntoIterator<Item = T>,
        format: F,
    ) -> Self
    where
        T: Copy + Eq + Hash,
        F: Fn(T) -> String,
    {
        let ticks = values
            .into_iter()
            .filter_map(|value| {
                scale.center(value).map(|position| Tick {
                    position,
                    label: format(value),
                })
            })
            .collect();

        Self {
            orientation,
            range: scale.range(),
            ticks,
        }
    }

    pub fn linear<F>(
        orientation: Orientation,
        scale: &LinearScale,
        values: impl IntoIterator<Item = f64>,
        format: F,
    ) -> Self
    where
        F: Fn(f64) -> String,
    {
        let ticks = values
            .into_iter()
            .map(|value| Tick {
                position: scale.scale(value),
                label: format(value),
            })
            .collect();

        Self {
            orientation,
            range: scale.range(),
            ticks,
        }
    }

    pub fn ticks(&self) -> &[Tick] {
        &self.ticks
    }

    /// Render into an existing axis group, appending the domain path and one group per tick
    pub fn render_into(&self, group: Element) -> Element {
        let anchor = match self.orientation {
            Orientation::Bottom => "middle",
            Orientation::Left => "end",
        };

        let group = group
            .attr("fill", "none")
            .attr("font-size", 10)
            .attr("font-family", "sans-serif")
            .attr("text-anchor", anchor)
            .child(
                Element::new("path")
                    .attr("class", "domain")
                    .attr("stroke", "currentColor")
                    .attr("d", self.domain_path()),
            );

        group.children(self.ticks.iter().map(|tick| self.render_tick(tick)))
    }

    // Whole-pixel geometry, without a half-pixel crisp-edge shift
    fn domain_path(&self) -> String {
        let (r0, r1) = (number(self.range.0), number(self.range.1));
        match self.orientation {
            Orientation::Bottom => format!("M{},{}V0H{}V{}", r0, TICK_SIZE, r1, TICK_SIZE),
            Orientation::Left => format!("M-{},{}H0V{}H-{}", TICK_SIZE, r0, r1, TICK_SIZE),
        }
    }

    fn render_tick(&self, tick: &Tick) -> Element {
        let offset = TICK_SIZE + TICK_PADDING;
        let position = number(tick.position);

        let (transform, line, text) = match self.orientation {
            Orientation::Bottom => (
                format!("translate({},0)", position),
                Element::new("line").attr("stroke", "currentColor").attr("y2", TICK_SIZE),
                Element::new("text")
                    .attr("fill", "currentColor")
                    .attr("y", offset)
                    .attr("dy", "0.71em"),
            ),
            Orientation::Left => (
                format!("translate(0,{})", position),
                Element::new("line")
                    .attr("stroke", "currentColor")
                    .attr("x2", -TICK_SIZE),
                Element::new("text")
                    .attr("fill", "currentColor")
                    .attr("x", -offset)
                    .attr("dy", "0.32em"),
            ),
        };

        Element::new("g")
            .attr("class", "tick")
            .attr("opacity", 1)
            .attr("transform", transform)
            .child(line)
            .child(text.text(tick.label.clone()))
    }
}
