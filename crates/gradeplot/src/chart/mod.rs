//! Chart aggregation and rendering.

mod bar;
mod chart_type;
mod render;

pub use bar::BarChart;
pub use chart_type::ChartType;
pub use render::{ChartRenderer, SvgConfig, SvgRenderer};
