//! Visualization utilities for kinematic_models
//!
//! Scatter plots of canonical velocity sets using gnuplot. Every set added
//! to a `Visualizer` is drawn on one shared pair of v / ω axes.

use gnuplot::{AutoOption, AxesCommon, Caption, Color, Figure, PointSize, PointSymbol};

use crate::common::{CanonicalVelocity, KinematicsError, KinematicsResult};
use crate::sampling::VelocityBounds;

/// Color palette for consistent styling
pub mod colors {
    pub const BLACK: &str = "#000000";
    pub const RED: &str = "#FF0000";

    pub const DIFF_DRIVE: &str = "#35C788";
    pub const CAR_LIKE: &str = "#DD3355";
}

/// Style for point rendering
#[derive(Debug, Clone)]
pub struct PointStyle {
    pub color: String,
    pub size: f64,
    pub symbol: char,
    pub caption: String,
}

impl PointStyle {
    pub fn new(color: &str, caption: &str) -> Self {
        Self {
            color: color.to_string(),
            size: 0.5,
            symbol: 'O',
            caption: caption.to_string(),
        }
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    pub fn with_symbol(mut self, symbol: char) -> Self {
        self.symbol = symbol;
        self
    }
}

impl Default for PointStyle {
    fn default() -> Self {
        Self::new(colors::BLACK, "Reachable set")
    }
}

#[derive(Debug, Clone)]
struct Series {
    v: Vec<f64>,
    omega: Vec<f64>,
    style: PointStyle,
}

/// Velocity space scatter plot
///
/// Series are collected first and written to a single gnuplot axes when
/// the plot is rendered.
#[derive(Debug, Clone)]
pub struct Visualizer {
    series: Vec<Series>,
    title: String,
    x_label: String,
    y_label: String,
    x_range: Option<(f64, f64)>,
    y_range: Option<(f64, f64)>,
}

impl Visualizer {
    /// Create a visualizer with `v` on the x axis and `ω` on the y axis
    pub fn velocity_space() -> Self {
        Self {
            series: Vec::new(),
            title: String::new(),
            x_label: "v".to_string(),
            y_label: "ω".to_string(),
            x_range: None,
            y_range: None,
        }
    }

    /// Set the plot title
    pub fn set_title(&mut self, title: &str) -> &mut Self {
        self.title = title.to_string();
        self
    }

    /// Set X (v) axis range
    pub fn set_x_range(&mut self, min: f64, max: f64) -> &mut Self {
        self.x_range = Some((min, max));
        self
    }

    /// Set Y (ω) axis range
    pub fn set_y_range(&mut self, min: f64, max: f64) -> &mut Self {
        self.y_range = Some((min, max));
        self
    }

    /// Fix both ranges to `bounds`, widened by `margin` of each span
    pub fn fit_to(&mut self, bounds: &VelocityBounds, margin: f64) -> &mut Self {
        let (v_min, v_max) = widen(bounds.v_min, bounds.v_max, margin);
        let (w_min, w_max) = widen(bounds.omega_min, bounds.omega_max, margin);
        self.set_x_range(v_min, v_max).set_y_range(w_min, w_max)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn labels(&self) -> (&str, &str) {
        (&self.x_label, &self.y_label)
    }

    pub fn ranges(&self) -> (Option<(f64, f64)>, Option<(f64, f64)>) {
        (self.x_range, self.y_range)
    }

    /// Number of sets added so far
    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    /// Add a set of canonical velocities, v horizontally and ω vertically
    pub fn plot_reachable_set(&mut self, points: &[CanonicalVelocity], style: &PointStyle) -> &mut Self {
        let (v, omega) = split_axes(points);
        self.series.push(Series { v, omega, style: style.clone() });
        self
    }

    /// Build a gnuplot figure holding one axes with every series
    pub fn figure(&self) -> Figure {
        let mut figure = Figure::new();
        {
            let axes = figure.axes2d();

            if !self.title.is_empty() {
                axes.set_title(&self.title, &[]);
            }
            axes.set_x_label(&self.x_label, &[]);
            axes.set_y_label(&self.y_label, &[]);

            if let Some((min, max)) = self.x_range {
                axes.set_x_range(AutoOption::Fix(min), AutoOption::Fix(max));
            }
            if let Some((min, max)) = self.y_range {
                axes.set_y_range(AutoOption::Fix(min), AutoOption::Fix(max));
            }

            for s in &self.series {
                axes.points(&s.v, &s.omega, &[
                    Caption(&s.style.caption),
                    Color(&s.style.color),
                    PointSymbol(s.style.symbol),
                    PointSize(s.style.size),
                ]);
            }
        }
        figure
    }

    /// Save plot to PNG file
    pub fn save_png(&self, path: &str, width: u32, height: u32) -> KinematicsResult<()> {
        self.figure()
            .save_to_png(path, width, height)
            .map_err(|e| KinematicsError::VisualizationError(e.to_string()))
    }
}

impl Default for Visualizer {
    fn default() -> Self {
        Self::velocity_space()
    }
}

fn widen(min: f64, max: f64, margin: f64) -> (f64, f64) {
    let pad = ((max - min) * margin).max(1e-3);
    (min - pad, max + pad)
}

/// Split velocities into the (v, ω) coordinate columns of a scatter plot
pub fn split_axes(points: &[CanonicalVelocity]) -> (Vec<f64>, Vec<f64>) {
    points.iter().map(|p| (p.v, p.omega)).unzip()
}

/// Quick scatter plot of a single reachable set
pub fn quick_plot_reachable_set(points: &[CanonicalVelocity], title: &str, color: &str) -> Visualizer {
    let mut vis = Visualizer::velocity_space();
    vis.set_title(title);
    vis.plot_reachable_set(points, &PointStyle::new(color, title));
    vis
}

#[cfg(test)]
mod tests {
    use super::*;

    fn echo_script(vis: &Visualizer) -> String {
        let mut buf: Vec<u8> = Vec::new();
        vis.figure().echo(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }

    #[test]
    fn test_visualizer_labels() {
        let vis = Visualizer::velocity_space();
        assert_eq!(vis.labels(), ("v", "ω"));
    }

    #[test]
    fn test_split_axes_puts_v_first() {
        let points = [CanonicalVelocity::new(2.0, 0.5), CanonicalVelocity::new(-1.0, 0.25)];
        let (v, omega) = split_axes(&points);
        assert_eq!(v, vec![0.5, 0.25]);
        assert_eq!(omega, vec![2.0, -1.0]);
    }

    #[test]
    fn test_point_style() {
        let style = PointStyle::new(colors::RED, "Car").with_size(1.0).with_symbol('x');
        assert_eq!(style.size, 1.0);
        assert_eq!(style.symbol, 'x');
        assert_eq!(style.color, colors::RED);
    }

    #[test]
    fn test_quick_plot_sets_title() {
        let vis = quick_plot_reachable_set(&[CanonicalVelocity::zero()], "Diff drive", colors::DIFF_DRIVE);
        assert_eq!(vis.title(), "Diff drive");
        assert_eq!(vis.series_count(), 1);
    }

    #[test]
    fn test_sets_share_one_labelled_axes() {
        let mut vis = Visualizer::velocity_space();
        vis.set_title("Reachable velocities")
            .plot_reachable_set(
                &[CanonicalVelocity::new(10.0, 1.0), CanonicalVelocity::new(-10.0, -1.0)],
                &PointStyle::new(colors::DIFF_DRIVE, "Differential drive"),
            )
            .plot_reachable_set(
                &[CanonicalVelocity::new(2.0, 1.0), CanonicalVelocity::new(-2.0, 1.0)],
                &PointStyle::new(colors::CAR_LIKE, "Car-like"),
            );

        let script = echo_script(&vis);
        assert!(!script.contains("set multiplot"));

        let plots: Vec<&str> = script.lines().filter(|l| l.starts_with("plot")).collect();
        assert_eq!(plots.len(), 1);
        assert!(plots[0].contains("t \"Differential drive\""));
        assert!(plots[0].contains("t \"Car-like\""));

        assert!(script.contains("set title \"Reachable velocities\""));
        assert!(script.contains("set xlabel \"v\""));
        assert!(script.contains("set ylabel \"ω\""));
    }

    #[test]
    fn test_fit_to_fixes_both_ranges() {
        let bounds = VelocityBounds { v_min: -1.0, v_max: 1.0, omega_min: -10.0, omega_max: 10.0 };
        let mut vis = Visualizer::velocity_space();
        vis.fit_to(&bounds, 0.05);

        let (x, y) = vis.ranges();
        let (x_min, x_max) = x.unwrap();
        let (y_min, y_max) = y.unwrap();
        assert!((x_min + 1.1).abs() < 1e-10);
        assert!((x_max - 1.1).abs() < 1e-10);
        assert!((y_min + 11.0).abs() < 1e-10);
        assert!((y_max - 11.0).abs() < 1e-10);

        vis.plot_reachable_set(&[CanonicalVelocity::zero()], &PointStyle::default());
        let script = echo_script(&vis);
        assert!(script.contains("set xrange [-1.100000000000e0:1.100000000000e0]"));
        assert!(script.contains("set yrange [-1.100000000000e1:1.100000000000e1]"));
    }

    #[test]
    fn test_fit_to_degenerate_bounds_keeps_nonzero_span() {
        let bounds = VelocityBounds { v_min: 0.5, v_max: 0.5, omega_min: 0.0, omega_max: 0.0 };
        let mut vis = Visualizer::velocity_space();
        vis.fit_to(&bounds, 0.1);
        let (x, _) = vis.ranges();
        let (x_min, x_max) = x.unwrap();
        assert!(x_max > x_min);
    }
}
