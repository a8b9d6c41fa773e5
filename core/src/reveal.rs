//! Automatic reveal of the area around a zero cell.

use std::collections::VecDeque;

use crate::*;

/// Opens every hidden or flagged neighbour of the zero cell at `coords`, and
/// keeps going through each newly opened zero cell until the region has no
/// zero cells left on its border. Returns the coordinates opened, in order.
///
/// Does nothing unless `coords` is an open zero cell. Every cell goes through
/// [`Game::apply_move`], so counters and flags follow the same rules as a
/// manual open.
pub fn open_neighbors(game: &mut Game, coords: Coord2) -> Vec<Coord2> {
    let mut opened = Vec::new();
    if !game.cell_at(coords).is_some_and(|cell| cell.is_zero()) {
        return opened;
    }

    let mut to_visit = VecDeque::from([coords]);
    while let Some(center) = to_visit.pop_front() {
        for (row, col) in game.iter_neighbors(center) {
            let Some(neighbor) = game.cell_at((row, col)) else {
                continue;
            };
            if neighbor.is_open() {
                continue;
            }

            let Some(neighbor) = game.apply_move(row, col, Action::Open) else {
                continue;
            };
            log::trace!("({}, {}) auto-opened", row, col);
            opened.push((row, col));

            if neighbor.is_zero() {
                to_visit.push_back((row, col));
            }
        }
    }

    opened
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(size: Coord2, mines: &[Coord2]) -> Game {
        Game::from_layout(MineLayout::from_mine_coords(size, mines).unwrap())
    }

    /// Expected cells after opening `start`: the 8-connected zero region
    /// around it plus every cell touching that region, found by brute force.
    fn expected_region(game: &Game, start: Coord2) -> Vec<Coord2> {
        let (rows, cols) = game.size();
        let is_zero = |coords: Coord2| {
            let cell = game.cell_at(coords).unwrap();
            !cell.is_mine() && cell.adjacent_mines() == 0
        };
        let mut region = vec![start];
        let mut changed = true;
        while changed {
            changed = false;
            for row in 0..rows {
                for col in 0..cols {
                    let coords = (row, col);
                    if region.contains(&coords) {
                        continue;
                    }
                    let touches_zero = region.iter().any(|&member| {
                        is_zero(member) && game.iter_neighbors(member).any(|n| n == coords)
                    });
                    if touches_zero {
                        region.push(coords);
                        changed = true;
                    }
                }
            }
        }
        region.sort();
        region
    }

    fn open_cells(game: &Game) -> Vec<Coord2> {
        let mut open: Vec<_> = game
            .cells()
            .filter(|cell| cell.is_open())
            .map(|cell| cell.coords())
            .collect();
        open.sort();
        open
    }

    #[test]
    fn opens_zero_region_and_its_border() {
        // . . . . .
        // . . . . .
        // . . 1 1 1
        // . . 1 * 1
        let mut game = game((4, 5), &[(3, 3)]);

        game.play(0, 0, Action::Open);

        assert_eq!(open_cells(&game), expected_region(&game, (0, 0)));
        assert!(!game.cell_at((3, 3)).unwrap().is_open());
        assert_eq!(game.cell_at((3, 4)).unwrap().adjacent_mines(), 1);
        assert!(!game.cell_at((3, 4)).unwrap().is_open());
    }

    #[test]
    fn does_nothing_from_non_zero_cell() {
        let mut game = game((3, 3), &[(0, 0)]);
        game.apply_move(1, 1, Action::Open);

        assert!(open_neighbors(&mut game, (1, 1)).is_empty());
        assert_eq!(game.safe_cells_remaining(), 7);
    }

    #[test]
    fn does_nothing_from_hidden_cell() {
        let mut game = game((3, 3), &[]);

        assert!(open_neighbors(&mut game, (1, 1)).is_empty());
        assert!(open_neighbors(&mut game, (9, 9)).is_empty());
        assert_eq!(game.safe_cells_remaining(), 9);
    }

    #[test]
    fn each_cell_opens_once() {
        let mut game = game((6, 6), &[]);
        game.apply_move(0, 0, Action::Open);

        let mut opened = open_neighbors(&mut game, (0, 0));

        assert_eq!(opened.len(), 35);
        opened.sort();
        opened.dedup();
        assert_eq!(opened.len(), 35);
        assert!(game.is_won());
    }

    #[test]
    fn flagged_neighbors_are_opened_and_flag_returned() {
        let mut game = game((3, 4), &[(2, 3)]);
        game.apply_move(0, 2, Action::ToggleFlag);
        assert_eq!(game.flags_remaining(), 0);

        game.play(0, 0, Action::Open);

        let cell = game.cell_at((0, 2)).unwrap();
        assert!(cell.is_open());
        assert!(!cell.is_flagged());
        assert_eq!(game.flags_remaining(), 1);
    }

    #[test]
    fn wall_of_mines_stops_the_fill() {
        // . . * . .
        // . . * . .
        // . . * . .
        let mut game = game((3, 5), &[(0, 2), (1, 2), (2, 2)]);

        game.play(1, 0, Action::Open);

        for row in 0..3 {
            assert!(game.cell_at((row, 0)).unwrap().is_open());
            assert!(game.cell_at((row, 1)).unwrap().is_open());
            assert!(!game.cell_at((row, 3)).unwrap().is_open());
            assert!(!game.cell_at((row, 4)).unwrap().is_open());
        }
        assert!(!game.is_over());
        assert_eq!(game.safe_cells_remaining(), 6);
    }

    #[test]
    fn matches_brute_force_on_random_boards() {
        for seed in 0..60 {
            let config = GameConfig::new(12, 9, 10).unwrap();
            let mut game = Game::new(config, RandomMinefieldGenerator::new(seed));
            let Some(start) = game
                .cells()
                .find(|cell| !cell.is_mine() && cell.adjacent_mines() == 0)
                .map(|cell| cell.coords())
            else {
                continue;
            };
            let expected = expected_region(&game, start);

            game.play(start.0, start.1, Action::Open);

            assert_eq!(open_cells(&game), expected, "seed {}", seed);
            assert!(!game.is_over());
        }
    }
}
