// src/render/figures.rs

//! 軌跡の SVG 描画
//!
//! フォントに依存しないよう SVG バックエンドのみを使う。

use std::error::Error;
use std::ops::Range;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters_svg::SVGBackend;

use crate::models::{Point2, Point3, Trajectory};
use crate::simulation::RecordedTrajectory;

pub type DrawResult<DB> = Result<(), DrawingAreaErrorKind<<DB as DrawingBackend>::ErrorType>>;

const PLANAR_SIZE: (u32, u32) = (800, 800);
const SPATIAL_SIZE: (u32, u32) = (1000, 800);
const PLANAR_LABEL_AREA: u32 = 50;

/// 2D 軌跡の描画（縦横比 1:1）
pub fn draw_planar<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    trajectory: &Trajectory<Point2>,
) -> DrawResult<DB> {
    root.fill(&WHITE)?;
    if trajectory.is_empty() {
        return draw_placeholder(root);
    }

    let extent = planar_extent(trajectory);
    let titled = root.titled("Particle Accelerator Simulation", ("sans-serif", 24))?;
    let (width, height) = titled.dim_in_pixel();
    let (top, bottom, left, right) = centered_square_margins(width, height);
    let square = titled.margin(top, bottom, left, right);

    // 目盛り領域を縦横同じ幅にして描画領域を正方形に保つ
    let mut chart = ChartBuilder::on(&square)
        .margin(20)
        .x_label_area_size(PLANAR_LABEL_AREA)
        .y_label_area_size(PLANAR_LABEL_AREA)
        .build_cartesian_2d(-extent..extent, -extent..extent)?;

    chart
        .configure_mesh()
        .x_desc("x position")
        .y_desc("y position")
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            trajectory.iter().map(|p| (p[0], p[1])),
            &BLUE,
        ))?
        .label("Particle Path")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// 3D 軌跡の描画
///
/// plotters の 3D 座標は y 軸が鉛直なので、データの z を鉛直軸に割り当てる。
pub fn draw_spatial<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    trajectory: &Trajectory<Point3>,
) -> DrawResult<DB> {
    root.fill(&WHITE)?;
    let (start, end) = match (trajectory.first(), trajectory.last()) {
        (Some(start), Some(end)) => (start, end),
        _ => return draw_placeholder(root),
    };

    let x_range = axis_range(trajectory.iter().map(|p| p[0]));
    let y_range = axis_range(trajectory.iter().map(|p| p[1]));
    let z_range = axis_range(trajectory.iter().map(|p| p[2]));

    let mut chart = ChartBuilder::on(root)
        .caption("3D Particle Accelerator Simulation", ("sans-serif", 24))
        .margin(20)
        .build_cartesian_3d(x_range.clone(), z_range.clone(), y_range.clone())?;

    chart.with_projection(|mut pb| {
        pb.yaw = 0.5;
        pb.pitch = 0.3;
        pb.scale = 0.9;
        pb.into_matrix()
    });

    chart
        .configure_axes()
        .light_grid_style(&BLACK.mix(0.15))
        .max_light_lines(3)
        .draw()?;

    chart.draw_series([
        Text::new(
            "X-axis",
            (x_range.end, z_range.start, y_range.start),
            ("sans-serif", 16).into_font(),
        ),
        Text::new(
            "Y-axis",
            (x_range.start, z_range.start, y_range.end),
            ("sans-serif", 16).into_font(),
        ),
        Text::new(
            "Z-axis",
            (x_range.start, z_range.end, y_range.start),
            ("sans-serif", 16).into_font(),
        ),
    ])?;

    chart
        .draw_series(LineSeries::new(
            trajectory.iter().map(|p| (p[0], p[2], p[1])),
            &BLUE,
        ))?
        .label("Particle Path")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));

    chart
        .draw_series(std::iter::once(Circle::new(
            (start[0], start[2], start[1]),
            5,
            RED.filled(),
        )))?
        .label("Start Point")
        .legend(|(x, y)| Circle::new((x + 10, y), 5, RED.filled()));

    chart
        .draw_series(std::iter::once(Circle::new(
            (end[0], end[2], end[1]),
            5,
            GREEN.filled(),
        )))?
        .label("End Point")
        .legend(|(x, y)| Circle::new((x + 10, y), 5, GREEN.filled()));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

fn draw_placeholder<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>) -> DrawResult<DB> {
    let (width, height) = root.dim_in_pixel();
    root.draw(&Text::new(
        "No trajectory data",
        (width as i32 / 2 - 80, height as i32 / 2),
        ("sans-serif", 20).into_font().color(&BLACK),
    ))?;
    root.present()?;
    Ok(())
}

/// 幅 `width`、高さ `height` の領域の中央に正方形を残す余白 (上, 下, 左, 右)
fn centered_square_margins(width: u32, height: u32) -> (u32, u32, u32, u32) {
    if width > height {
        let excess = width - height;
        (0, 0, excess / 2, excess - excess / 2)
    } else {
        let excess = height - width;
        (excess / 2, excess - excess / 2, 0, 0)
    }
}

/// 原点を中心とした正方形の描画範囲の半幅
fn planar_extent(trajectory: &Trajectory<Point2>) -> f64 {
    let max_abs = trajectory
        .iter()
        .flat_map(|p| p.iter())
        .filter(|c| c.is_finite())
        .fold(0.0_f64, |acc, c| acc.max(c.abs()));
    if max_abs > 0.0 {
        max_abs * 1.1
    } else {
        1.0
    }
}

/// 有限値だけから求めた、余白付きの軸範囲
fn axis_range<I: Iterator<Item = f64>>(values: I) -> Range<f64> {
    let (min, max) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
            (min.min(v), max.max(v))
        });
    if !min.is_finite() || !max.is_finite() {
        return -1.0..1.0;
    }
    let span = max - min;
    if span < 1e-9 {
        return (min - 1.0)..(max + 1.0);
    }
    let pad = span * 0.05;
    (min - pad)..(max + pad)
}

/// 2D 軌跡を SVG ファイルへ描画
pub fn render_planar_svg<P: AsRef<Path>>(
    path: P,
    trajectory: &Trajectory<Point2>,
) -> Result<(), Box<dyn Error>> {
    let root = SVGBackend::new(path.as_ref(), PLANAR_SIZE).into_drawing_area();
    draw_planar(&root, trajectory)?;
    Ok(())
}

/// 3D 軌跡を SVG ファイルへ描画
pub fn render_spatial_svg<P: AsRef<Path>>(
    path: P,
    trajectory: &Trajectory<Point3>,
) -> Result<(), Box<dyn Error>> {
    let root = SVGBackend::new(path.as_ref(), SPATIAL_SIZE).into_drawing_area();
    draw_spatial(&root, trajectory)?;
    Ok(())
}

pub fn render_trajectory_svg<P: AsRef<Path>>(
    path: P,
    trajectory: &RecordedTrajectory,
) -> Result<(), Box<dyn Error>> {
    match trajectory {
        RecordedTrajectory::Planar(t) => render_planar_svg(path, t),
        RecordedTrajectory::Spatial(t) => render_spatial_svg(path, t),
    }
}
