//! Tests for the constraint propagation sweep

#[cfg(test)]
mod tests {
    use ndarray::Array2;
    use pipetile::algorithm::propagation::{PropagationReport, propagate, propagate_with};
    use pipetile::spatial::{Direction, Grid, Point, Tile};

    fn grid_from_row(tiles: Vec<Tile>) -> Grid {
        let width = tiles.len();
        Grid::from_array(Array2::from_shape_vec((1, width), tiles).unwrap()).unwrap()
    }

    // Tests border-facing connections are closed on a fresh grid
    // Verified by treating out-of-bounds neighbors as fully open
    #[test]
    fn test_fresh_grid_closes_border_connections() {
        let mut grid = Grid::new(3, 3).unwrap();
        let report = propagate(&mut grid);

        assert_eq!(grid.get(Point::new(1, 1)), Some(Tile::INITIAL));
        assert_eq!(
            grid.get(Point::new(0, 0)),
            Some(Tile::RIGHT | Tile::DOWN),
            "top-left corner keeps only inward connections"
        );
        assert_eq!(
            grid.get(Point::new(2, 1)),
            Some(Tile::LEFT | Tile::RIGHT | Tile::UP)
        );
        // 4 corners lose 2 bits, 4 edge cells lose 1
        assert_eq!(report.cleared_connections, 12);
        assert_eq!(report.walled_off, 0);
        assert_eq!(grid.fixed_count(), 0);
    }

    // Tests a single isolated cell is walled off and fixed
    // Verified by removing the empty-pattern fixing
    #[test]
    fn test_single_cell_walls_off() {
        let mut grid = Grid::new(1, 1).unwrap();
        let report = propagate(&mut grid);

        assert_eq!(grid.get(Point::new(0, 0)), Some(Tile::EMPTY.fixed()));
        assert_eq!(
            report,
            PropagationReport {
                cleared_connections: 4,
                walled_off: 1
            }
        );
        assert!(grid.is_fixed());
    }

    // Tests an unfixed cell keeps a connection only if the fixed neighbor offers it back
    // Verified by checking the neighbor's same-side bit instead of the opposite
    #[test]
    fn test_two_by_one_follows_fixed_neighbor() {
        let mut connected = grid_from_row(vec![Tile::RIGHT.fixed(), Tile::INITIAL]);
        propagate(&mut connected);
        assert_eq!(connected.get(Point::new(0, 1)), Some(Tile::LEFT));

        let mut closed = grid_from_row(vec![Tile::UP.fixed(), Tile::INITIAL]);
        propagate(&mut closed);
        assert_eq!(
            closed.get(Point::new(0, 1)),
            Some(Tile::EMPTY.fixed()),
            "no connection remains, so the cell is walled off"
        );
    }

    // Tests fixed cells are never modified
    // Verified by dropping the fixed check at the start of the sweep
    #[test]
    fn test_fixed_cells_untouched() {
        let dangling = (Tile::LEFT | Tile::UP).fixed();
        let mut grid = grid_from_row(vec![dangling, Tile::INITIAL]);
        propagate(&mut grid);
        assert_eq!(grid.get(Point::new(0, 0)), Some(dangling));
    }

    // Tests a row next to a closed fixed cell keeps only its inward link
    // Verified by keeping bits that face a neighbor without the opposite bit
    #[test]
    fn test_row_prunes_against_closed_fixed_cell() {
        let mut grid = grid_from_row(vec![Tile::UP.fixed(), Tile::INITIAL, Tile::INITIAL]);
        propagate(&mut grid);

        assert_eq!(grid.get(Point::new(0, 1)), Some(Tile::RIGHT));
        assert_eq!(grid.get(Point::new(0, 2)), Some(Tile::LEFT));
    }

    // Tests a second sweep over a freshly propagated grid changes nothing
    // Verified by skipping the neighbor check for the Down direction
    #[test]
    fn test_second_sweep_is_stable() {
        let mut grid = Grid::new(4, 3).unwrap();
        grid.set(Point::new(1, 1), (Tile::LEFT | Tile::UP).fixed());
        grid.set(Point::new(2, 3), Tile::EMPTY.fixed());

        let first = propagate(&mut grid);
        assert!(!first.is_unchanged());

        let snapshot = grid.clone();
        let second = propagate(&mut grid);
        assert!(second.is_unchanged());
        assert_eq!(grid, snapshot);
    }

    // Tests every empty-pattern cell is fixed after a sweep
    // Verified by only fixing cells that lost a bit in this sweep
    #[test]
    fn test_empty_cells_fixed_after_sweep() {
        let tiles = Array2::from_shape_vec(
            (2, 2),
            vec![Tile::EMPTY, Tile::DOWN, Tile::RIGHT.fixed(), Tile::UP],
        )
        .unwrap();
        let mut grid = Grid::from_array(tiles).unwrap();
        propagate(&mut grid);

        for point in grid.points() {
            let tile = grid.get(point).unwrap();
            if tile.is_empty_pattern() {
                assert!(tile.is_fixed(), "{point:?} is empty but not fixed");
            }
        }
        assert_eq!(grid.get(Point::new(0, 1)), Some(Tile::DOWN));
        assert_eq!(grid.get(Point::new(1, 1)), Some(Tile::UP));
    }

    // Tests a stable grid reports no change
    // Verified by counting every inspected bit as cleared
    #[test]
    fn test_unchanged_report() {
        let mut grid = grid_from_row(vec![Tile::RIGHT, Tile::LEFT]);
        let report = propagate(&mut grid);
        assert!(report.is_unchanged());
        assert!(grid.get(Point::new(0, 0)).unwrap().has(Direction::Right));
    }

    // Tests the change callback sees each rewritten cell once with its new tile
    // Verified by calling back for unchanged cells too
    #[test]
    fn test_propagate_with_reports_changes() {
        let mut grid = Grid::new(3, 3).unwrap();
        let mut changes = Vec::new();
        propagate_with(&mut grid, |point, tile| changes.push((point, tile)));

        let points: Vec<Point> = changes.iter().map(|&(point, _)| point).collect();
        let expected: Vec<Point> = grid
            .points()
            .filter(|&point| point != Point::new(1, 1))
            .collect();
        assert_eq!(points, expected);

        for (point, tile) in changes {
            assert_eq!(grid.get(point), Some(tile));
        }
    }
}
