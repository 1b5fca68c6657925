//! Wall-polyline rasterization.
//!
//! Scenario files describe the warehouse as an axis-aligned polyline of
//! corner points: consecutive points are connected by horizontal or vertical
//! wall segments and the outline is closed back to the first point.  This is
//! a one-time preprocessing step that turns that description into a [`Grid`]
//! of barricade tiles; the simulation itself only ever sees the grid.
//!
//! Origin normalization is deterministic: every coordinate is shifted so the
//! minimum x and y of the outline become 0.  Extra obstacles are shifted by
//! the same offset, so a scenario file can keep all geometry in one frame.

use ant_core::Point;

use crate::{Grid, GridBuilder, GridError, GridResult};

/// An additional obstacle inside the outline: a single cell, or an
/// axis-aligned polyline rasterized segment by segment (not closed).
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Obstacle {
    Cell(Point),
    Polyline(Vec<Point>),
}

/// Rasterize `outline` (closed) plus `extras` into a barricade grid.
///
/// # Errors
///
/// - [`GridError::DegenerateOutline`] if the outline has fewer than 2 points.
/// - [`GridError::SkewedWall`] if any segment is neither horizontal nor
///   vertical.
pub fn rasterize(outline: &[Point], extras: &[Obstacle]) -> GridResult<Grid> {
    if outline.len() < 2 {
        return Err(GridError::DegenerateOutline(outline.len()));
    }

    let min_x = outline.iter().map(|p| p.x).min().unwrap_or(0);
    let min_y = outline.iter().map(|p| p.y).min().unwrap_or(0);
    let max_x = outline.iter().map(|p| p.x).max().unwrap_or(0);
    let max_y = outline.iter().map(|p| p.y).max().unwrap_or(0);
    let shift = Point::new(-min_x, -min_y);

    let width = (max_x - min_x + 1) as u32;
    let height = (max_y - min_y + 1) as u32;

    let mut cells: Vec<Point> = Vec::new();
    closed_segments(outline, &mut cells)?;

    for extra in extras {
        match extra {
            Obstacle::Cell(p) => cells.push(*p),
            Obstacle::Polyline(points) => open_segments(points, &mut cells)?,
        }
    }

    Ok(GridBuilder::new(width, height)
        .barricades(cells.into_iter().map(|p| p + shift))
        .build())
}

/// Append the cells of every segment of a closed polyline (last point joins
/// back to the first).
fn closed_segments(points: &[Point], out: &mut Vec<Point>) -> GridResult<()> {
    for window in points.windows(2) {
        segment_cells(window[0], window[1], out)?;
    }
    if points.len() > 2 {
        segment_cells(points[points.len() - 1], points[0], out)?;
    }
    Ok(())
}

/// Append the cells of every segment of an open polyline.
fn open_segments(points: &[Point], out: &mut Vec<Point>) -> GridResult<()> {
    if points.len() == 1 {
        out.push(points[0]);
        return Ok(());
    }
    for window in points.windows(2) {
        segment_cells(window[0], window[1], out)?;
    }
    Ok(())
}

/// Append every cell on the axis-aligned segment `start`–`end`, inclusive.
fn segment_cells(start: Point, end: Point, out: &mut Vec<Point>) -> GridResult<()> {
    if start.x == end.x {
        let (lo, hi) = (start.y.min(end.y), start.y.max(end.y));
        out.extend((lo..=hi).map(|y| Point::new(start.x, y)));
        Ok(())
    } else if start.y == end.y {
        let (lo, hi) = (start.x.min(end.x), start.x.max(end.x));
        out.extend((lo..=hi).map(|x| Point::new(x, start.y)));
        Ok(())
    } else {
        Err(GridError::SkewedWall { start, end })
    }
}
