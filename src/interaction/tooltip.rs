use std::time::Duration;

use quick_xml::escape::escape;

use crate::models::TemperatureRecord;
use crate::render::format::{fixed1, month_name, number};
use crate::render::Element;
use crate::settings::TooltipSettings;

/// Opacity of a hidden tooltip
pub const HIDDEN_OPACITY: f64 = 0.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipState {
    Hidden,
    Visible,
}

/// Pointer position in page coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

/// Opacity transition with cubic in-out easing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fade {
    pub from: f64,
    pub to: f64,
    pub duration: Duration,
    pub elapsed: Duration,
}

impl Fade {
    pub fn new(from: f64, to: f64, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn opacity(&self) -> f64 {
        if self.is_finished() {
            return self.to;
        }
        let t = self.elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.from + (self.to - self.from) * ease_cubic_in_out(t)
    }
}

fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t * 2.0;
    if t <= 1.0 {
        t * t * t / 2.0
    } else {
        let t = t - 2.0;
        (t * t * t + 2.0) / 2.0
    }
}

/// Details shown for the hovered cell
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipContent {
    pub year: i32,
    pub month: String,
    pub temperature: String,
    pub variance: String,
    pub color: String,
}

impl TooltipContent {
    pub fn new(record: &TemperatureRecord, color: &str) -> Self {
        Self {
            year: record.year,
            month: month_name(record.month).unwrap_or_else(|| record.month.to_string()),
            temperature: format!("{}ºC", fixed1(record.temperature)),
            variance: format!("{}ºC", fixed1(record.variance)),
            color: color.to_string(),
        }
    }

    /// Markup placed inside the tooltip element
    pub fn to_html(&self) -> String {
        format!(
            "<span class=\"tt-year\">{}</span> - <span class=\"tt-month\">{}</span><br/>\
             <span class=\"tt-temperature\">{}</span><br/>\
             <span class=\"tt-variance\">{}</span>\
             <hr class=\"tt-color\" style=\"border-color: {}\"/>",
            self.year,
            escape(&self.month),
            escape(&self.temperature),
            escape(&self.variance),
            escape(&self.color),
        )
    }
}

/// Hover tooltip: hidden until a cell is entered, faded out again on leave
#[derive(Debug, Clone)]
pub struct Tooltip {
    settings: TooltipSettings,
    state: TooltipState,
    opacity: f64,
    fade: Option<Fade>,
    left: f64,
    top: f64,
    data_year: Option<i32>,
    content: Option<TooltipContent>,
}

impl Tooltip {
    pub fn new(settings: TooltipSettings) -> Self {
        Self {
            settings,
            state: TooltipState::Hidden,
            opacity: HIDDEN_OPACITY,
            fade: None,
            left: 0.0,
            top: 0.0,
            data_year: None,
            content: None,
        }
    }

    /// Show transition: fade in and describe `record` next to the pointer
    pub fn on_pointer_enter(&mut self, record: &TemperatureRecord, color: &str, pointer: Pointer) {
        self.start_fade(self.visible_opacity());
        self.state = TooltipState::Visible;
        self.left = pointer.x + self.settings.offset_x;
        self.top = pointer.y + self.settings.offset_y;
        self.data_year = Some(record.year);
        self.content = Some(TooltipContent::new(record, color));
    }

    /// Hide transition: fade out from wherever the opacity currently is
    pub fn on_pointer_leave(&mut self) {
        self.start_fade(HIDDEN_OPACITY);
    }

    /// Move the active fade forward by `elapsed`
    pub fn advance(&mut self, elapsed: Duration) {
        if let Some(fade) = self.fade.as_mut() {
            fade.elapsed += elapsed;
            self.opacity = fade.opacity();
            if fade.is_finished() {
                self.fade = None;
            }
        }
        if self.opacity <= HIDDEN_OPACITY && !self.is_fading() {
            self.state = TooltipState::Hidden;
        }
    }

    // A new transition interrupts the running one and starts from the current opacity
    fn start_fade(&mut self, target: f64) {
        let duration = Duration::from_millis(self.settings.fade_ms);
        self.fade = Some(Fade::new(self.opacity, target, duration));
        self.advance(Duration::ZERO);
    }

    /// Opacity a shown tooltip fades to
    pub fn visible_opacity(&self) -> f64 {
        self.settings.opacity
    }

    pub fn state(&self) -> TooltipState {
        self.state
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    pub fn is_fading(&self) -> bool {
        self.fade.is_some()
    }

    pub fn position(&self) -> (f64, f64) {
        (self.left, self.top)
    }

    pub fn data_year(&self) -> Option<i32> {
        self.data_year
    }

    pub fn content(&self) -> Option<&TooltipContent> {
        self.content.as_ref()
    }

    /// Current tooltip as a positioned `div#tooltip`
    pub fn to_element(&self) -> Element {
        let (left, top) = self.position();
        let mut element = Element::new("div")
            .attr("id", "tooltip")
            .attr("class", "tooltip")
            .style("opacity", number(self.opacity()))
            .style("left", format!("{}px", number(left)))
            .style("top", format!("{}px", number(top)));

        if let Some(year) = self.data_year() {
            element.set_attr("data-year", year);
        }
        if let Some(content) = self.content() {
            element = element.html(content.to_html());
        }
        element
    }
}
