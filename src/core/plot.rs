//! Trajectory chart export.

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::{info, warn};

use crate::core::controller::TrajectorySample;
use crate::core::error::SimError;
use crate::core::window::trajectory_window;

pub const CHART_SIZE: (u32, u32) = (1024, 576);

fn plot_err<E: std::fmt::Display>(err: E) -> SimError {
    SimError::Plot(err.to_string())
}

/// Splits samples into one polyline per launch, preserving order.
pub fn group_by_flight<'a, I>(samples: I) -> Vec<(u32, Vec<(f64, f64)>)>
where
    I: IntoIterator<Item = &'a TrajectorySample>,
{
    let mut flights: Vec<(u32, Vec<(f64, f64)>)> = Vec::new();
    for sample in samples {
        match flights.last_mut() {
            Some((flight, points)) if *flight == sample.flight => {
                points.push((sample.x_m, sample.y_m));
            }
            _ => flights.push((sample.flight, vec![(sample.x_m, sample.y_m)])),
        }
    }
    flights
}

/// Writes the chart as SVG when `path` ends in `.svg`, as a bitmap otherwise.
pub fn write_trajectory_chart<'a, I>(path: &Path, samples: I) -> Result<(), SimError>
where
    I: IntoIterator<Item = &'a TrajectorySample>,
{
    let flights = group_by_flight(samples);
    if flights.is_empty() {
        return Err(SimError::Plot("no trajectory samples to plot".to_string()));
    }

    let is_svg = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));

    // Text needs a system font; without one the curves are still written.
    if let Err(err) = render_chart(path, is_svg, &flights, true) {
        warn!(error = %err, "chart text unavailable, drawing curves only");
        render_chart(path, is_svg, &flights, false)?;
    }

    info!(path = %path.display(), flights = flights.len(), "trajectory chart written");
    Ok(())
}

fn render_chart(
    path: &Path,
    is_svg: bool,
    flights: &[(u32, Vec<(f64, f64)>)],
    labelled: bool,
) -> Result<(), SimError> {
    if is_svg {
        let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
        draw_chart(&root, flights, labelled)
    } else {
        let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
        draw_chart(&root, flights, labelled)
    }
}

fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    flights: &[(u32, Vec<(f64, f64)>)],
    labelled: bool,
) -> Result<(), SimError> {
    root.fill(&WHITE).map_err(plot_err)?;

    let (x_range, y_range) =
        trajectory_window(flights.iter().flat_map(|(_, points)| points.iter().copied()));

    let mut builder = ChartBuilder::on(root);
    builder.margin(12);
    if labelled {
        builder
            .caption("Projectile trajectory", ("sans-serif", 28))
            .x_label_area_size(40)
            .y_label_area_size(48);
    }
    let mut chart = builder
        .build_cartesian_2d(x_range, y_range)
        .map_err(plot_err)?;

    if labelled {
        chart
            .configure_mesh()
            .x_desc("Distance (m)")
            .y_desc("Height (m)")
            .draw()
            .map_err(plot_err)?;
    }

    for (idx, (flight, points)) in flights.iter().enumerate() {
        let series = chart
            .draw_series(LineSeries::new(
                points.iter().copied(),
                Palette99::pick(idx).stroke_width(3),
            ))
            .map_err(plot_err)?;
        if labelled {
            series.label(format!("Flight {flight}")).legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], Palette99::pick(idx).stroke_width(3))
            });
        }
    }

    if labelled {
        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .map_err(plot_err)?;
    }

    root.present().map_err(plot_err)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(x_m: f64, y_m: f64, flight: u32) -> TrajectorySample {
        TrajectorySample { x_m, y_m, flight }
    }

    #[test]
    fn groups_consecutive_samples_by_flight() {
        let samples = [
            sample(0.0, 0.0, 1),
            sample(1.0, 1.0, 1),
            sample(0.0, 0.0, 2),
            sample(2.0, 1.0, 2),
            sample(3.0, 0.0, 2),
        ];
        let flights = group_by_flight(&samples);

        assert_eq!(flights.len(), 2);
        assert_eq!(flights[0].0, 1);
        assert_eq!(flights[0].1.len(), 2);
        assert_eq!(flights[1].1, vec![(0.0, 0.0), (2.0, 1.0), (3.0, 0.0)]);
    }

    #[test]
    fn refuses_empty_chart() {
        let path = std::env::temp_dir().join("trajectory_sim_empty_chart.svg");
        let empty: [TrajectorySample; 0] = [];
        let err = write_trajectory_chart(&path, &empty).expect_err("nothing to draw");
        assert!(matches!(err, SimError::Plot(_)));
    }

    fn temp_chart(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("trajectory_sim_{}_{name}", std::process::id()))
    }

    #[test]
    fn writes_svg_chart() {
        let path = temp_chart("flights.svg");
        let samples = [
            sample(0.0, 0.0, 1),
            sample(2.5, 1.3, 1),
            sample(5.1, 0.0, 1),
            sample(0.0, 0.0, 2),
            sample(4.0, 2.0, 2),
            sample(8.0, 0.0, 2),
        ];
        write_trajectory_chart(&path, &samples).expect("chart should be written");

        let text = std::fs::read_to_string(&path).expect("chart file should exist");
        let _ = std::fs::remove_file(&path);
        assert!(!text.is_empty());
        assert!(text.contains("<svg"));
    }

    #[test]
    fn unlabelled_chart_still_draws_curves() {
        let path = temp_chart("curves.svg");
        let samples = [sample(0.0, 0.0, 1), sample(1.0, 1.0, 1), sample(2.0, 0.0, 1)];
        let flights = group_by_flight(&samples);
        render_chart(&path, true, &flights, false).expect("curves need no font");

        let text = std::fs::read_to_string(&path).expect("chart file should exist");
        let _ = std::fs::remove_file(&path);
        assert!(text.contains("<svg"));
        assert!(text.contains("polyline"));
    }
}
