//! Rendering seam and a standalone SVG renderer.

use crate::scheme::Color;

/// Turns aggregated bars into a visual artifact.
pub trait ChartRenderer {
    type Artifact;

    /// Render one bar per category. All slices are parallel.
    fn render_bar_chart(
        &self,
        categories: &[String],
        values: &[f64],
        colors: &[Color],
        y_axis_label: &str,
        x_axis_label: &str,
    ) -> Self::Artifact;
}

/// Layout for [`SvgRenderer`].
#[derive(Debug, Clone)]
pub struct SvgConfig {
    pub width: u32,
    pub height: u32,
    pub margin: u32,
    /// Optional chart title.
    pub title: Option<String>,
    /// Decimal places for value labels.
    pub precision: usize,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 400,
            margin: 60,
            title: None,
            precision: 1,
        }
    }
}

/// Renders bar charts as SVG documents.
#[derive(Debug, Clone, Default)]
pub struct SvgRenderer {
    config: SvgConfig,
}

impl SvgRenderer {
    /// Create a renderer with default layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom layout.
    pub fn with_config(config: SvgConfig) -> Self {
        Self { config }
    }

    fn value_label(&self, value: f64) -> String {
        if value.fract() == 0.0 {
            format!("{}", value as i64)
        } else {
            format!("{:.*}", self.config.precision, value)
        }
    }
}

impl ChartRenderer for SvgRenderer {
    type Artifact = String;

    fn render_bar_chart(
        &self,
        categories: &[String],
        values: &[f64],
        colors: &[Color],
        y_axis_label: &str,
        x_axis_label: &str,
    ) -> String {
        let width = self.config.width;
        let height = self.config.height;
        let margin = self.config.margin;
        let chart_width = width.saturating_sub(2 * margin).max(1) as f64;
        let chart_height = height.saturating_sub(2 * margin).max(1) as f64;
        let baseline = height.saturating_sub(margin) as f64;

        let max_value = values.iter().copied().fold(0.0_f64, f64::max);
        let scale = if max_value > 0.0 { chart_height / max_value } else { 0.0 };
        let slot = chart_width / categories.len().max(1) as f64;

        let mut bars = String::new();
        for (i, category) in categories.iter().enumerate() {
            let value = values.get(i).copied().unwrap_or(0.0);
            let color = colors.get(i).map(Color::hex).unwrap_or_else(|| "#999999".to_string());
            let x = margin as f64 + i as f64 * slot + slot * 0.1;
            let bar_height = value * scale;
            let y = baseline - bar_height;
            let center = x + slot * 0.4;

            bars.push_str(&format!(
                r##"  <rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"/>
"##,
                x,
                y,
                slot * 0.8,
                bar_height,
                color
            ));
            bars.push_str(&format!(
                r##"  <text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="11" fill="#374151">{}</text>
"##,
                center,
                y - 4.0,
                self.value_label(value)
            ));
            bars.push_str(&format!(
                r##"  <text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="11" fill="#6b7280">{}</text>
"##,
                center,
                baseline + 16.0,
                escape(category)
            ));
        }

        let title = self
            .config
            .title
            .as_deref()
            .map(|t| {
                format!(
                    r##"  <text x="{}" y="24" text-anchor="middle" font-size="14" font-weight="600" fill="#374151">{}</text>
"##,
                    width / 2,
                    escape(t)
                )
            })
            .unwrap_or_default();

        format!(
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" style="background:white">
{title}  <line x1="{m}" y1="{base}" x2="{right}" y2="{base}" stroke="#9ca3af" stroke-width="1"/>
  <line x1="{m}" y1="{m}" x2="{m}" y2="{base}" stroke="#9ca3af" stroke-width="1"/>
{bars}  <text x="{cx}" y="{xl}" text-anchor="middle" font-size="12" fill="#374151">{xlabel}</text>
  <text x="18" y="{cy}" text-anchor="middle" font-size="12" fill="#374151" transform="rotate(-90, 18, {cy})">{ylabel}</text>
</svg>
"##,
            w = width,
            h = height,
            title = title,
            m = margin,
            base = baseline,
            right = width.saturating_sub(margin),
            bars = bars,
            cx = width / 2,
            xl = height.saturating_sub(margin / 3),
            xlabel = escape(x_axis_label),
            cy = height / 2,
            ylabel = escape(y_axis_label),
        )
    }
}

/// Escape text for inclusion in SVG markup.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
