use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use super::types::{Position, Route};
use crate::error::RouteFileError;

/// Read and parse a route instructions file.
///
/// Any failure to read the file is reported as [`RouteFileError::FileMissing`],
/// except for content that is not valid UTF-8, which is malformed content.
pub fn read_route_file(path: &Path) -> Result<Route, RouteFileError> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == ErrorKind::InvalidData {
            RouteFileError::malformed(format!("{} is not valid UTF-8", path.display()))
        } else {
            RouteFileError::FileMissing {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    debug!(path = %path.display(), bytes = contents.len(), "read route file");
    parse_route(&contents)
}

/// Parse the contents of a route file.
///
/// Lines are trimmed and blank lines dropped. The first two remaining lines are
/// the starting x and y, every line after that is one move token.
pub fn parse_route(contents: &str) -> Result<Route, RouteFileError> {
    let mut lines = contents.lines().map(str::trim).filter(|l| !l.is_empty());

    let x = parse_coordinate(lines.next(), "x")?;
    let y = parse_coordinate(lines.next(), "y")?;
    let instructions: Vec<String> = lines.map(String::from).collect();

    Ok(Route::new(Position::new(x, y), instructions))
}

fn parse_coordinate(line: Option<&str>, axis: &str) -> Result<i64, RouteFileError> {
    let line =
        line.ok_or_else(|| RouteFileError::malformed(format!("missing start {axis} coordinate")))?;
    line.parse().map_err(|e| {
        RouteFileError::malformed(format!("start {axis} coordinate {line:?} is not an integer: {e}"))
    })
}
