//! Expense pie chart
//!
//! Renders `by_category` totals to an SVG file for `stats --plot`.

use crate::config::CHART_SIZE;
use crate::error::{AppError, Result};
use crate::services::statistics::CategoryTotal;
use plotters::prelude::*;
use std::f64::consts::{FRAC_PI_2, TAU};
use std::path::Path;

/// Arc resolution per full turn
const ARC_STEPS: f64 = 180.0;

fn chart_err<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Chart(e.to_string())
}

/// Polygon approximating one wedge, starting at `start` radians and
/// sweeping clockwise on screen by `sweep` radians.
fn wedge_points(center: (i32, i32), radius: f64, start: f64, sweep: f64) -> Vec<(i32, i32)> {
    let steps = ((sweep / TAU) * ARC_STEPS).ceil().max(1.0) as usize;
    let mut points = Vec::with_capacity(steps + 2);
    points.push(center);

    for i in 0..=steps {
        let angle = start + sweep * (i as f64 / steps as f64);
        points.push((
            center.0 + (radius * angle.cos()).round() as i32,
            center.1 + (radius * angle.sin()).round() as i32,
        ));
    }

    points
}

/// Draw one wedge per category with a `name pct%` label.
/// Fails when there is nothing positive to plot.
pub fn render_category_pie(path: &Path, title: &str, totals: &[CategoryTotal]) -> Result<()> {
    let total: f64 = totals.iter().map(|t| t.amount).filter(|a| *a > 0.0).sum();
    if total <= 0.0 {
        return Err(AppError::Chart("no expenses to plot".to_string()));
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;
    let area = root.titled(title, ("sans-serif", 22)).map_err(chart_err)?;

    let (width, height) = area.dim_in_pixel();
    let center = (width as i32 / 2, height as i32 / 2);
    let radius = f64::from(width.min(height)) * 0.35;

    let mut start = -FRAC_PI_2;
    for (i, category) in totals.iter().filter(|t| t.amount > 0.0).enumerate() {
        let share = category.amount / total;
        let sweep = share * TAU;

        area.draw(&Polygon::new(
            wedge_points(center, radius, start, sweep),
            Palette99::pick(i).filled(),
        ))
        .map_err(chart_err)?;

        let mid = start + sweep / 2.0;
        let label_at = (
            center.0 + (radius * 1.15 * mid.cos()) as i32,
            center.1 + (radius * 1.15 * mid.sin()) as i32,
        );
        area.draw(&Text::new(
            format!("{} {:.1}%", category.category, share * 100.0),
            label_at,
            ("sans-serif", 14).into_font(),
        ))
        .map_err(chart_err)?;

        start += sweep;
    }

    root.present().map_err(chart_err)?;

    tracing::info!("Saved chart to {:?}", path);
    Ok(())
}
