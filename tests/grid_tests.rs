//! Geometry checks across the whole accepted size range.
#![allow(clippy::float_cmp, clippy::cast_lossless)]

use pixelpad::app::parse_size;
use pixelpad::grid::{GridConfig, DEFAULT_SQUARE_COLOR, MAX_SQUARES_PER_SIDE};

#[test]
fn every_accepted_size_derives_consistent_geometry() {
    for canvas in [1180.0, 333.0, 1.0] {
        let mut grid = GridConfig::new(canvas, DEFAULT_SQUARE_COLOR);
        for side in 1..=MAX_SQUARES_PER_SIDE {
            grid.configure(Some(side));
            assert_eq!(grid.total_squares(), side * side);
            assert_eq!(grid.square_width_px(), canvas / side as f64);
        }
    }
}

#[test]
fn every_accepted_size_parses_back() {
    for side in 1..=MAX_SQUARES_PER_SIDE {
        assert_eq!(parse_size(&side.to_string(), MAX_SQUARES_PER_SIDE), Ok(side));
    }
    assert!(parse_size("101", MAX_SQUARES_PER_SIDE).is_err());
}

#[test]
fn mode_and_color_do_not_touch_geometry() {
    let mut grid = GridConfig::new(500.0, DEFAULT_SQUARE_COLOR);
    grid.configure(Some(10));
    let before = (grid.total_squares(), grid.square_width_px());

    grid.set_mode(pixelpad::PaintMode::Random);
    grid.set_color("red");

    assert_eq!((grid.total_squares(), grid.square_width_px()), before);
    assert_eq!(grid.geometry().square_color, "red");
}
