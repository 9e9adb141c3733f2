use crate::grid::{Digit, DigitSet, Grid, Pos};

/// The three ways of partitioning the 81 cells into 9 groups of 9.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Row,
    Col,
    Block,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::Row, Axis::Col, Axis::Block];

    /// Coordinate of member `slot` (0..9) of group `index` (0..9) on this axis.
    pub fn coord(self, index: usize, slot: usize) -> Pos {
        match self {
            Axis::Row => Pos::new(index, slot),
            Axis::Col => Pos::new(slot, index),
            Axis::Block => Pos::new(index / 3 * 3 + slot / 3, index % 3 * 3 + slot % 3),
        }
    }

    /// Index of the group on this axis containing `p`. Inverse of `coord`.
    pub fn index_of(self, p: Pos) -> usize {
        match self {
            Axis::Row => p.row,
            Axis::Col => p.col,
            Axis::Block => p.row / 3 * 3 + p.col / 3,
        }
    }
}

/// Read-through view of one row, column, or block.
///
/// A view borrows the grid and is rebuilt every scan pass; it is never kept
/// across a mutation.
#[derive(Clone, Copy)]
pub struct Group<'g> {
    grid: &'g Grid,
    axis: Axis,
    index: usize,
}

impl<'g> Group<'g> {
    pub fn new(grid: &'g Grid, axis: Axis, index: usize) -> Self {
        Self { grid, axis, index }
    }

    /// The group on `axis` containing `p`.
    pub fn containing(grid: &'g Grid, axis: Axis, p: Pos) -> Self {
        Self::new(grid, axis, axis.index_of(p))
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn coords(&self) -> impl Iterator<Item = Pos> {
        let (axis, index) = (self.axis, self.index);
        (0..9).map(move |slot| axis.coord(index, slot))
    }

    /// Filled values along the 9 member cells. Duplicates are preserved; a
    /// duplicate means the grid is inconsistent, which is the search engine's
    /// business to notice, not ours to hide.
    pub fn values(&self) -> impl Iterator<Item = Digit> + 'g {
        let grid = self.grid;
        self.coords().map(move |p| grid.get(p)).filter(|&d| d != 0)
    }

    /// Digits 1..=9 not yet present in the group.
    pub fn missing_values(&self) -> DigitSet {
        DigitSet::ALL.minus(self.values().collect())
    }

    pub fn empty_coordinates(&self) -> impl Iterator<Item = Pos> + 'g {
        let grid = self.grid;
        self.coords().filter(move |&p| grid.is_empty(p))
    }

    /// Same digit filled twice among the members.
    pub fn has_duplicates(&self) -> bool {
        let mut seen = DigitSet::EMPTY;
        for d in self.values() {
            if seen.contains(d) {
                return true;
            }
            seen.insert(d);
        }
        false
    }

    /// The groups on the two other axes that contain `p`, computed straight
    /// from the coordinate.
    pub fn siblings(&self, p: Pos) -> [Group<'g>; 2] {
        let [a, b] = match self.axis {
            Axis::Row => [Axis::Col, Axis::Block],
            Axis::Col => [Axis::Row, Axis::Block],
            Axis::Block => [Axis::Row, Axis::Col],
        };
        [
            Group::containing(self.grid, a, p),
            Group::containing(self.grid, b, p),
        ]
    }
}

/// All 27 views, in the fixed order Row(i), Col(i), Block(i) for i in 0..9.
pub fn all_groups(grid: &Grid) -> Vec<Group<'_>> {
    let mut out = Vec::with_capacity(27);
    for i in 0..9 {
        for axis in Axis::ALL {
            out.push(Group::new(grid, axis, i));
        }
    }
    out
}

/// Legal values for the empty cell at `p`: the digits missing from all three
/// of its groups. This intersection is the only constraint propagation the
/// solver does; everything else is left to backtracking.
pub fn candidates(grid: &Grid, p: Pos) -> DigitSet {
    let row = Group::containing(grid, Axis::Row, p);
    row.siblings(p)
        .iter()
        .fold(row.missing_values(), |set, g| {
            set.intersect(g.missing_values())
        })
}

impl Grid {
    /// No duplicate non-zero value in any row, column, or block.
    pub fn is_valid(&self) -> bool {
        all_groups(self).iter().all(|g| !g.has_duplicates())
    }

    pub fn is_solved(&self) -> bool {
        self.is_filled() && self.is_valid()
    }
}
