use super::*;

#[test]
fn move_off_the_left_edge() {
    assert_eq!(
        plot_err(&route(1, 1, "W")),
        RouteError::MoveOutsideGrid {
            step: 1,
            position: pos(0, 1)
        }
    );
}

#[test]
fn start_outside_grid() {
    assert_eq!(
        plot_err(&route(13, 1, "")),
        RouteError::StartOutsideGrid { position: pos(13, 1) }
    );
}

#[test]
fn start_outside_on_every_side() {
    for (x, y) in [(0, 5), (13, 5), (5, 0), (5, 13), (-1, -1), (100, 100)] {
        assert!(matches!(
            plot_err(&route(x, y, "N")),
            RouteError::StartOutsideGrid { .. }
        ));
    }
}

#[test]
fn late_out_of_bounds_move_rejects_whole_route() {
    // Eleven valid moves north, the twelfth leaves the grid.
    let moves = "N".repeat(12);
    assert_eq!(
        plot_err(&route(4, 1, &moves)),
        RouteError::MoveOutsideGrid {
            step: 12,
            position: pos(4, 13)
        }
    );
}

#[test]
fn each_edge_is_a_wall() {
    assert!(plot_ok(&route(12, 6, "")).path.len() == 1);
    for (x, y, moves) in [(12, 6, "E"), (1, 6, "W"), (6, 12, "N"), (6, 1, "S")] {
        assert!(matches!(
            plot_err(&route(x, y, moves)),
            RouteError::MoveOutsideGrid { step: 1, .. }
        ));
    }
}

#[test]
fn unknown_direction_rejects_route() {
    assert_eq!(
        plot_err(&route_tokens(5, 5, &["N", "E", "X", "S"])),
        RouteError::UnknownDirection {
            step: 3,
            token: "X".to_string()
        }
    );
}

#[test]
fn directions_are_case_sensitive() {
    for token in ["n", "s", "e", "w", "North", "NN", "N E"] {
        assert!(matches!(
            plot_err(&route_tokens(5, 5, &[token])),
            RouteError::UnknownDirection { step: 1, .. }
        ));
    }
}

#[test]
fn unknown_direction_checked_before_later_moves() {
    // The bad token comes first, so it is reported even though a later move
    // would also leave the grid.
    assert!(matches!(
        plot_err(&route_tokens(1, 1, &["?", "W"])),
        RouteError::UnknownDirection { step: 1, .. }
    ));
}

#[test]
fn out_of_bounds_reported_before_later_unknown_token() {
    assert!(matches!(
        plot_err(&route_tokens(1, 1, &["S", "?"])),
        RouteError::MoveOutsideGrid { step: 1, .. }
    ));
}
