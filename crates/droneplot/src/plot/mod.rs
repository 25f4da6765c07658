#[cfg(test)]
mod tests;

use tracing::{debug, trace};

use crate::error::RouteError;
use crate::route::{Cell, Direction, GRID_SIZE, Position, Route};

/// What a grid cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Marker {
    #[default]
    Empty,
    Start,
    Path,
    End,
}

/// The fixed 12x12 plotting surface, indexed by internal [`Cell`] coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    cells: [[Marker; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, cell: Cell) -> Marker {
        self.cells[cell.row][cell.col]
    }

    pub fn set(&mut self, cell: Cell, marker: Marker) {
        self.cells[cell.row][cell.col] = marker;
    }

    /// Rows from the top of the plot (y = 12) to the bottom (y = 1).
    pub fn rows(&self) -> impl Iterator<Item = &[Marker; GRID_SIZE]> {
        self.cells.iter()
    }

    /// All non-empty cells in row-major order.
    pub fn occupied(&self) -> Vec<(Cell, Marker)> {
        let mut out = Vec::new();
        for (row, markers) in self.cells.iter().enumerate() {
            for (col, &marker) in markers.iter().enumerate() {
                if marker != Marker::Empty {
                    out.push((Cell { row, col }, marker));
                }
            }
        }
        out
    }
}

/// A route that stayed on the grid from start to finish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlottedRoute {
    pub grid: Grid,
    /// Every visited position in external coordinates, starting with the start.
    pub path: Vec<Position>,
}

/// Validate a route against the grid and plot it.
///
/// The start cell gets the start marker. Each move appends the new position to the
/// path and turns the cell the drone just left into a path marker, except for the
/// start cell on the first move. After the last move the current cell gets the end
/// marker. A route with no moves therefore shows only its start marker.
///
/// Nothing is returned for a route that leaves the grid or contains an unknown
/// direction, no matter how many moves were valid before it.
pub fn plot_route(route: &Route) -> Result<PlottedRoute, RouteError> {
    let start = route.start;
    let start_cell = start
        .to_cell()
        .ok_or(RouteError::StartOutsideGrid { position: start })?;

    let mut grid = Grid::new();
    grid.set(start_cell, Marker::Start);
    let mut path = Vec::with_capacity(route.instructions.len() + 1);
    path.push(start);

    let mut current = start;
    let mut last: Option<Cell> = None;

    for (i, token) in route.instructions.iter().enumerate() {
        let step = i + 1;
        let dir = Direction::from_symbol(token).ok_or_else(|| RouteError::UnknownDirection {
            step,
            token: token.clone(),
        })?;

        let next = current.step(dir);
        let cell = next
            .to_cell()
            .ok_or(RouteError::MoveOutsideGrid { step, position: next })?;
        trace!(step, %dir, position = %next, "move");

        path.push(next);
        if let Some(prev) = last {
            grid.set(prev, Marker::Path);
        }
        last = Some(cell);
        current = next;
    }

    if let Some(end) = last {
        grid.set(end, Marker::End);
    }

    debug!(
        start = %start,
        end = %current,
        moves = path.len() - 1,
        cells = grid.occupied().len(),
        "route plotted"
    );
    Ok(PlottedRoute { grid, path })
}
