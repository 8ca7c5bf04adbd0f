use std::collections::BTreeMap;
use std::f64::consts::{FRAC_PI_2, PI};
use std::fs::create_dir_all;
use std::ops::Range;
use std::path::{Path, PathBuf};

use gridworld_environment_grid::{GridWorld, Position};
use plotters::prelude::*;
use rand::Rng;
use tracing::info;

use crate::average::average;
use crate::error::{drawing, ReportError};
use crate::policy::PolicyLabel;

const FIGURE_SIZE: (u32, u32) = (1500, 2000);
const LAYOUT_SIZE: (u32, u32) = (800, 800);
const STAR_OUTER: f64 = 0.4;
const STAR_INNER: f64 = 0.16;

/// Draws every trial of one policy as a thin line and their average in black.
///
/// The figure lands in `destination`, which is created if missing, as
/// `Reward pattern using <label> Policy.jpeg`. Returns the written path.
pub fn plot_results<P: AsRef<Path>>(
    histories: &[Vec<f64>],
    label: &str,
    destination: P,
) -> Result<PathBuf, ReportError> {
    let mean = average(histories)?;
    let path = figure_path(
        destination.as_ref(),
        &format!("Reward pattern using {} Policy", label),
    )?;

    // the backend keeps borrowing its file until `root` drops
    let file = path.clone();
    let root = BitMapBackend::new(&file, FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(drawing)?;

    let (x_range, y_range) = bounds(histories.iter().chain(std::iter::once(&mean)));
    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Reward pattern using {} Policy", label),
            ("sans-serif", 40),
        )
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(80)
        .build_cartesian_2d(x_range, y_range)
        .map_err(drawing)?;

    chart
        .configure_mesh()
        .x_desc("Steps")
        .y_desc("Cumulative Reward")
        .draw()
        .map_err(drawing)?;

    for (trial, history) in histories.iter().enumerate() {
        chart
            .draw_series(LineSeries::new(
                points(history),
                Palette99::pick(trial).mix(0.6).stroke_width(2),
            ))
            .map_err(drawing)?;
    }

    chart
        .draw_series(LineSeries::new(points(&mean), BLACK.stroke_width(2)))
        .map_err(drawing)?;

    root.present().map_err(drawing)?;
    info!("Saved {} results to {}", label, path.display());

    Ok(path)
}

/// Overlays the average curve of every policy, in its fixed colour, on top
/// of the raw trials. Written as `Reward pattern using different Policies.jpeg`.
pub fn plot_summary<P: AsRef<Path>>(
    histories: &BTreeMap<PolicyLabel, Vec<Vec<f64>>>,
    destination: P,
) -> Result<PathBuf, ReportError> {
    if histories.is_empty() {
        return Err(ReportError::NoHistories);
    }

    let means = histories
        .iter()
        .map(|(label, trials)| Ok((*label, average(trials)?)))
        .collect::<Result<Vec<(PolicyLabel, Vec<f64>)>, ReportError>>()?;
    let path = figure_path(
        destination.as_ref(),
        "Reward pattern using different Policies",
    )?;

    // the backend keeps borrowing its file until `root` drops
    let file = path.clone();
    let root = BitMapBackend::new(&file, FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(drawing)?;

    let (x_range, y_range) = bounds(histories.values().flatten());
    let mut chart = ChartBuilder::on(&root)
        .caption("Reward pattern using different Policies", ("sans-serif", 40))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(80)
        .build_cartesian_2d(x_range, y_range)
        .map_err(drawing)?;

    chart
        .configure_mesh()
        .x_desc("Steps")
        .y_desc("Cumulative Reward")
        .draw()
        .map_err(drawing)?;

    for (trial, history) in histories.values().flatten().enumerate() {
        chart
            .draw_series(LineSeries::new(
                points(history),
                Palette99::pick(trial).mix(0.4).stroke_width(2),
            ))
            .map_err(drawing)?;
    }

    for (label, mean) in &means {
        let color = label.color();

        chart
            .draw_series(LineSeries::new(points(mean), color.stroke_width(3)))
            .map_err(drawing)?
            .label(label.name())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(drawing)?;

    root.present().map_err(drawing)?;
    info!(
        "Saved summary of {} policies to {}",
        means.len(),
        path.display()
    );

    Ok(path)
}

/// Draws the grid with walls in grey, the agent as a triangle and the goal as
/// a star. The agent defaults to the world's current position.
pub fn plot_layout<R: Rng, P: AsRef<Path>>(
    world: &GridWorld<R>,
    agent: Option<Position>,
    destination: P,
) -> Result<PathBuf, ReportError> {
    let agent = agent.unwrap_or_else(|| world.current_position());
    let goal = world.goal_location();
    let side = f64::from(world.size() + 1);
    let path = figure_path(destination.as_ref(), "Grid world layout")?;

    // the backend keeps borrowing its file until `root` drops
    let file = path.clone();
    let root = BitMapBackend::new(&file, LAYOUT_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(drawing)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .build_cartesian_2d(0f64..side, 0f64..side)
        .map_err(drawing)?;

    chart
        .draw_series(world.grid().walls().map(|(x, y)| {
            let (x, y) = (f64::from(*x), f64::from(*y));
            Rectangle::new([(x, y), (x + 1., y + 1.)], RGBColor(128, 128, 128).filled())
        }))
        .map_err(drawing)?;

    for line in 0..=world.size() + 1 {
        let at = f64::from(line);

        chart
            .draw_series(vec![
                PathElement::new(vec![(at, 0.), (at, side)], BLACK.stroke_width(2)),
                PathElement::new(vec![(0., at), (side, at)], BLACK.stroke_width(2)),
            ])
            .map_err(drawing)?;
    }

    chart
        .draw_series(std::iter::once(TriangleMarker::new(
            center(agent),
            20,
            BLUE.filled(),
        )))
        .map_err(drawing)?;
    chart
        .draw_series(std::iter::once(Polygon::new(star(center(goal)), RED.filled())))
        .map_err(drawing)?;

    root.present().map_err(drawing)?;
    info!(
        "Saved layout with agent at ({}, {}) to {}",
        agent.0,
        agent.1,
        path.display()
    );

    Ok(path)
}

fn figure_path(destination: &Path, title: &str) -> Result<PathBuf, ReportError> {
    create_dir_all(destination)?;

    Ok(destination.join(format!("{}.jpeg", title)))
}

fn center((x, y): Position) -> (f64, f64) {
    (f64::from(x) + 0.5, f64::from(y) + 0.5)
}

/// Five-pointed star around `(x, y)`, alternating outer and inner vertices.
fn star((x, y): (f64, f64)) -> Vec<(f64, f64)> {
    (0i32..10)
        .map(|vertex| {
            let radius = if vertex % 2 == 0 { STAR_OUTER } else { STAR_INNER };
            let angle = FRAC_PI_2 + f64::from(vertex) * PI / 5.;

            (x + radius * angle.cos(), y + radius * angle.sin())
        })
        .collect()
}

fn points(history: &[f64]) -> Vec<(f64, f64)> {
    history
        .iter()
        .enumerate()
        .map(|(step, reward)| (step as f64, *reward))
        .collect()
}

fn bounds<'a, I>(histories: I) -> (Range<f64>, Range<f64>)
where
    I: IntoIterator<Item = &'a Vec<f64>>,
{
    let (steps, low, high) = histories.into_iter().fold(
        (0usize, f64::INFINITY, f64::NEG_INFINITY),
        |(steps, low, high), history| {
            let low = history.iter().copied().fold(low, f64::min);
            let high = history.iter().copied().fold(high, f64::max);

            (steps.max(history.len()), low, high)
        },
    );

    let (low, high) = if low.is_finite() && high > low {
        (low, high)
    } else if low.is_finite() {
        (low - 1., high + 1.)
    } else {
        (0., 1.)
    };
    let padding = (high - low) * 0.05;

    (
        0f64..steps.saturating_sub(1).max(1) as f64,
        low - padding..high + padding,
    )
}
