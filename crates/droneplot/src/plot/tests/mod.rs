mod invalid;

use super::{Marker, PlottedRoute, plot_route};
use crate::error::RouteError;
use crate::route::{Position, Route};

/// Helper to build a route from a start and a string of move symbols.
fn route(x: i64, y: i64, moves: &str) -> Route {
    Route::new(
        Position::new(x, y),
        moves.chars().map(|c| c.to_string()).collect(),
    )
}

/// Helper to build a route from arbitrary tokens.
fn route_tokens(x: i64, y: i64, tokens: &[&str]) -> Route {
    Route::new(
        Position::new(x, y),
        tokens.iter().map(|t| t.to_string()).collect(),
    )
}

fn pos(x: i64, y: i64) -> Position {
    Position::new(x, y)
}

/// Plot and panic with the rejection reason on failure.
fn plot_ok(route: &Route) -> PlottedRoute {
    match plot_route(route) {
        Ok(plotted) => plotted,
        Err(e) => panic!("route {route:?} rejected: {e}"),
    }
}

/// Plot and panic if the route was accepted.
fn plot_err(route: &Route) -> RouteError {
    match plot_route(route) {
        Ok(plotted) => panic!(
            "route {route:?} should have been rejected but produced path {:?}",
            plotted.path
        ),
        Err(e) => e,
    }
}

/// Marker at an external position.
fn marker_at(plotted: &PlottedRoute, x: i64, y: i64) -> Marker {
    let cell = pos(x, y).to_cell().expect("position on grid");
    plotted.grid.get(cell)
}
