use ndarray::Array2;

/// Single coordinate axis used for board rows, columns, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

pub(crate) trait NeighborIterExt {
    fn iter_neighbors(&self, center: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, center: Coord2) -> NeighborIter {
        let (rows, cols) = self.dim();
        // boards are built from `Coord` dimensions, so this never truncates
        NeighborIter::new(center, (rows as Coord, cols as Coord))
    }
}

/// Row and column offsets of the surrounding cells, in reading order.
const OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The up to 8 cells around `center` that lie on a `bounds`-sized board.
#[derive(Debug)]
pub(crate) struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    offsets: core::slice::Iter<'static, (i8, i8)>,
}

impl NeighborIter {
    fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            offsets: OFFSETS.iter(),
        }
    }

    fn shifted(&self, (dr, dc): (i8, i8)) -> Option<Coord2> {
        let (rows, cols) = self.bounds;
        let row = self.center.0.checked_add_signed(dr).filter(|&row| row < rows)?;
        let col = self.center.1.checked_add_signed(dc).filter(|&col| col < cols)?;
        Some((row, col))
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&offset) = self.offsets.next() {
            if let Some(coords) = self.shifted(offset) {
                return Some(coords);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interior_cell_has_eight_neighbors() {
        let neighbors: Vec<_> = NeighborIter::new((1, 1), (3, 3)).collect();

        assert_eq!(neighbors.len(), 8);
        assert!(!neighbors.contains(&(1, 1)));
    }

    #[test]
    fn corner_cells_are_clipped() {
        let top_left: Vec<_> = NeighborIter::new((0, 0), (3, 3)).collect();
        let bottom_right: Vec<_> = NeighborIter::new((2, 2), (3, 3)).collect();

        assert_eq!(top_left, vec![(0, 1), (1, 0), (1, 1)]);
        assert_eq!(bottom_right, vec![(1, 1), (1, 2), (2, 1)]);
    }

    #[test]
    fn single_cell_board_has_no_neighbors() {
        assert_eq!(NeighborIter::new((0, 0), (1, 1)).count(), 0);
    }

    #[test]
    fn edge_row_on_wide_board() {
        let neighbors: Vec<_> = NeighborIter::new((0, 4), (1, 10)).collect();

        assert_eq!(neighbors, vec![(0, 3), (0, 5)]);
    }

    #[test]
    fn array_neighbors_use_its_shape() {
        let board: Array2<bool> = Array2::default([2, 4]);
        let neighbors: Vec<_> = board.iter_neighbors((1, 3)).collect();

        assert_eq!(neighbors, vec![(0, 2), (0, 3), (1, 2)]);
        assert_eq!(board.iter_neighbors((0, 1)).count(), 5);
    }

    #[test]
    fn mult_saturates() {
        assert_eq!(mult(10, 10), 100);
        assert_eq!(mult(255, 255), 65025);
    }
}
