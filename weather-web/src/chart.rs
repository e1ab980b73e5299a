//! Inline SVG line chart for the 24-hour temperature series.

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 360.0;
const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 60.0;
const LINE_COLOR: &str = "#1E88E5";
const AXIS_COLOR: &str = "#1E4B88";

/// One chart sample: x-axis label and temperature in °C.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

/// Render the series as a standalone `<svg>` element.
///
/// Labels are expected to be plain time labels ("03 PM"); they are written
/// into the markup unescaped.
pub fn temperature_chart(points: &[ChartPoint]) -> String {
    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<svg class="temperature-chart" viewBox="0 0 {WIDTH} {HEIGHT}" role="img" aria-label="24-hour temperature forecast" xmlns="http://www.w3.org/2000/svg">"#
    ));

    if points.is_empty() {
        svg.push_str(&format!(
            r#"<text x="{}" y="{}" text-anchor="middle" fill="{AXIS_COLOR}">No forecast data</text></svg>"#,
            WIDTH / 2.0,
            HEIGHT / 2.0
        ));
        return svg;
    }

    let (min, max) = value_range(points);
    let plot_w = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let bottom = MARGIN_TOP + plot_h;

    let x_at = |i: usize| {
        if points.len() == 1 {
            MARGIN_LEFT + plot_w / 2.0
        } else {
            MARGIN_LEFT + plot_w * i as f64 / (points.len() - 1) as f64
        }
    };
    let y_at = |v: f64| MARGIN_TOP + plot_h * (max - v) / (max - min);

    // Axes
    svg.push_str(&format!(
        r#"<g stroke="{AXIS_COLOR}" stroke-width="1"><line x1="{MARGIN_LEFT}" y1="{MARGIN_TOP}" x2="{MARGIN_LEFT}" y2="{bottom}"/><line x1="{MARGIN_LEFT}" y1="{bottom}" x2="{}" y2="{bottom}"/></g>"#,
        WIDTH - MARGIN_RIGHT
    ));

    // Y ticks: min, mid, max
    for v in [min, (min + max) / 2.0, max] {
        svg.push_str(&format!(
            r##"<text x="{}" y="{:.1}" text-anchor="end" font-size="14" fill="#333333">{v:.1}</text>"##,
            MARGIN_LEFT - 8.0,
            y_at(v) + 5.0
        ));
    }

    // X labels
    for (i, p) in points.iter().enumerate() {
        svg.push_str(&format!(
            r##"<text x="{:.1}" y="{}" text-anchor="middle" font-size="14" fill="#333333">{}</text>"##,
            x_at(i),
            bottom + 22.0,
            p.label
        ));
    }

    // Axis titles
    svg.push_str(&format!(
        r#"<text x="{}" y="{}" text-anchor="middle" font-size="18" fill="{AXIS_COLOR}">Time</text>"#,
        MARGIN_LEFT + plot_w / 2.0,
        HEIGHT - 8.0
    ));
    svg.push_str(&format!(
        r#"<text x="18" y="{0}" transform="rotate(-90 18 {0})" text-anchor="middle" font-size="18" fill="{AXIS_COLOR}">Temperature (°C)</text>"#,
        MARGIN_TOP + plot_h / 2.0
    ));

    let coords: Vec<String> = points
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{:.1},{:.1}", x_at(i), y_at(p.value)))
        .collect();
    svg.push_str(&format!(
        r#"<polyline fill="none" stroke="{LINE_COLOR}" stroke-width="4" points="{}"/>"#,
        coords.join(" ")
    ));

    for (i, p) in points.iter().enumerate() {
        svg.push_str(&format!(
            r#"<circle cx="{:.1}" cy="{:.1}" r="5" fill="{LINE_COLOR}"><title>{}: {:.1}°C</title></circle>"#,
            x_at(i),
            y_at(p.value),
            p.label,
            p.value
        ));
    }

    svg.push_str("</svg>");
    svg
}

/// Min/max of the series, padded so a flat series still has height.
fn value_range(points: &[ChartPoint]) -> (f64, f64) {
    let (min, max) = points.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
        (lo.min(p.value), hi.max(p.value))
    });
    (min.floor() - 1.0, max.ceil() + 1.0)
}
