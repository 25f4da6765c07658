use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::plot::{Grid, Marker};
use crate::route::{GRID_SIZE, Position};

/// Characters used to draw each kind of cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Markers {
    pub empty: char,
    pub start: char,
    pub path: char,
    pub end: char,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            empty: '.',
            start: 'S',
            path: '+',
            end: 'E',
        }
    }
}

impl Markers {
    pub fn symbol(&self, marker: Marker) -> char {
        match marker {
            Marker::Empty => self.empty,
            Marker::Start => self.start,
            Marker::Path => self.path,
            Marker::End => self.end,
        }
    }

    fn paint(&self, marker: Marker, colorize: bool) -> String {
        let s = self.symbol(marker).to_string();
        if !colorize {
            return s;
        }
        match marker {
            Marker::Empty => s.dimmed().to_string(),
            Marker::Start => s.green().bold().to_string(),
            Marker::Path => s.yellow().to_string(),
            Marker::End => s.red().bold().to_string(),
        }
    }
}

/// Render the grid with column numbers across the top and y labels down the side.
///
/// Every column number is followed by a space, including the last one.
///
/// ```text
///     1  2  3  4  5  6  7  8  9 10 11 12
///    ------------------------------------
/// 12| . . . . . . . . . . . .
/// ```
pub fn render_grid(grid: &Grid, markers: &Markers, colorize: bool) -> String {
    let mut out = String::from("   ");
    for col in 1..=GRID_SIZE {
        out.push_str(&format!("{col:2} "));
    }
    out.push('\n');
    out.push_str("   ");
    out.push_str(&"-".repeat(GRID_SIZE * 3));
    out.push('\n');

    for (i, row) in grid.rows().enumerate() {
        let label = GRID_SIZE - i;
        let cells: Vec<String> = row.iter().map(|&m| markers.paint(m, colorize)).collect();
        out.push_str(&format!("{label:2}| {}\n", cells.join(" ")));
    }
    out
}

/// One `(x,y)` line per path entry, in order.
pub fn render_path(path: &[Position]) -> String {
    let mut out = String::new();
    for pos in path {
        out.push_str(&format!("{pos}\n"));
    }
    out
}

/// Serialize a path to a single line.
///
/// Format: `(3,3)-(3,4)-(3,5)-(4,5)`
pub fn path_to_string(path: &[Position]) -> String {
    path.iter()
        .map(Position::to_string)
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::Cell;

    #[test]
    fn test_empty_grid_layout() {
        let text = render_grid(&Grid::new(), &Markers::default(), false);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 14);
        assert_eq!(lines[0], "    1  2  3  4  5  6  7  8  9 10 11 12 ");
        assert_eq!(lines[1], format!("   {}", "-".repeat(36)));
        assert_eq!(lines[2], "12| . . . . . . . . . . . .");
        assert_eq!(lines[13], " 1| . . . . . . . . . . . .");
    }

    #[test]
    fn test_row_labels_count_down() {
        let text = render_grid(&Grid::new(), &Markers::default(), false);
        let labels: Vec<String> = text
            .lines()
            .skip(2)
            .map(|l| l[..2].trim().to_string())
            .collect();
        let expected: Vec<String> = (1..=12).rev().map(|n: usize| n.to_string()).collect();
        assert_eq!(labels, expected);
    }

    #[test]
    fn test_markers_in_position() {
        let mut grid = Grid::new();
        grid.set(Position::new(3, 3).to_cell().unwrap(), Marker::Start);
        grid.set(Position::new(3, 4).to_cell().unwrap(), Marker::Path);
        grid.set(Position::new(4, 5).to_cell().unwrap(), Marker::End);
        let text = render_grid(&grid, &Markers::default(), false);
        let lines: Vec<&str> = text.lines().collect();
        // y = 5 is the eighth grid row, printed after the two header lines.
        assert_eq!(lines[2 + 7], " 5| . . . E . . . . . . . .");
        assert_eq!(lines[2 + 8], " 4| . . + . . . . . . . . .");
        assert_eq!(lines[2 + 9], " 3| . . S . . . . . . . . .");
    }

    #[test]
    fn test_custom_markers() {
        let markers = Markers {
            empty: ' ',
            start: 'A',
            path: '#',
            end: 'Z',
        };
        let mut grid = Grid::new();
        grid.set(Cell { row: 0, col: 0 }, Marker::Start);
        grid.set(Cell { row: 0, col: 1 }, Marker::Path);
        grid.set(Cell { row: 0, col: 2 }, Marker::End);
        let text = render_grid(&grid, &markers, false);
        assert!(text.lines().nth(2).unwrap().starts_with("12| A # Z  "));
    }

    #[test]
    fn test_render_path() {
        let path = vec![Position::new(3, 3), Position::new(3, 4)];
        assert_eq!(render_path(&path), "(3,3)\n(3,4)\n");
        assert_eq!(render_path(&[]), "");
    }

    #[test]
    fn test_path_to_string() {
        let path = vec![Position::new(3, 3), Position::new(3, 4), Position::new(4, 5)];
        assert_eq!(path_to_string(&path), "(3,3)-(3,4)-(4,5)");
        assert_eq!(path_to_string(&path[..1]), "(3,3)");
    }
}
