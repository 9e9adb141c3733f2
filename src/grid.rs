use anyhow::{bail, Result};
use std::fmt::{self, Display, Formatter};

pub type Digit = u8; // 0 = blank; 1..=9 filled

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Set of digits 1..=9 backed by a bitmask; bit d means digit d is present.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct DigitSet(u16);

impl DigitSet {
    pub const EMPTY: Self = Self(0);
    pub const ALL: Self = Self(0b11_1111_1110); // bits 1..=9 set

    pub fn contains(self, d: Digit) -> bool {
        self.0 & (1 << d) != 0
    }

    pub fn insert(&mut self, d: Digit) {
        self.0 |= 1 << d;
    }

    pub fn remove(&mut self, d: Digit) {
        self.0 &= !(1 << d);
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn intersect(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    pub fn minus(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Smallest digit in the set, if any.
    pub fn first(self) -> Option<Digit> {
        if self.0 == 0 {
            None
        } else {
            Some(self.0.trailing_zeros() as Digit)
        }
    }

    /// Digits in ascending order.
    pub fn iter(self) -> impl Iterator<Item = Digit> {
        (1..=9).filter(move |&d| self.contains(d))
    }

    pub fn to_vec(self) -> Vec<Digit> {
        self.iter().collect()
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<I: IntoIterator<Item = Digit>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for d in iter {
            set.insert(d);
        }
        set
    }
}

/// The 9x9 board. `Clone` is the snapshot primitive: cells are plain bytes,
/// so a clone is a genuine deep copy with no shared state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: [[Digit; 9]; 9],
}

impl Grid {
    pub fn empty() -> Self {
        Self { cells: [[0; 9]; 9] }
    }

    pub fn get(&self, p: Pos) -> Digit {
        self.cells[p.row][p.col]
    }

    pub fn set(&mut self, p: Pos, d: Digit) {
        self.cells[p.row][p.col] = d;
    }

    pub fn is_empty(&self, p: Pos) -> bool {
        self.cells[p.row][p.col] == 0
    }

    pub fn is_filled(&self) -> bool {
        self.cells.iter().all(|row| row.iter().all(|&d| d != 0))
    }

    /// Build from nested rows, rejecting anything that is not a 9x9 board of
    /// values 0..=9. This is the validation gate the boundary runs before the
    /// solver ever sees the board.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self> {
        if rows.len() != 9 {
            bail!("expected 9 rows, got {}", rows.len());
        }
        let mut g = Grid::empty();
        for (r, row) in rows.iter().enumerate() {
            if row.len() != 9 {
                bail!("row {} has {} cells, expected 9", r, row.len());
            }
            for (c, &v) in row.iter().enumerate() {
                if v > 9 {
                    bail!("cell ({}, {}) holds {}, expected 0..=9", r, c, v);
                }
                g.cells[r][c] = v;
            }
        }
        Ok(g)
    }

    pub fn rows(&self) -> Vec<Vec<u8>> {
        self.cells.iter().map(|row| row.to_vec()).collect()
    }

    /// Parse 81 digits/dots, ignoring whitespace and separators.
    pub fn from_compact(s: &str) -> Result<Self> {
        let digits: Vec<Digit> = s
            .chars()
            .filter_map(|ch| match ch {
                '1'..='9' => Some(ch as u8 - b'0'),
                '0' | '.' | '_' => Some(0),
                _ => None,
            })
            .collect();
        if digits.len() != 81 {
            bail!("expected 81 digits/dots, got {}", digits.len());
        }
        let mut g = Grid::empty();
        for (i, &d) in digits.iter().enumerate() {
            g.cells[i / 9][i % 9] = d;
        }
        Ok(g)
    }

    pub fn to_compact(&self) -> String {
        self.cells
            .iter()
            .flatten()
            .map(|&d| if d == 0 { '.' } else { (b'0' + d) as char })
            .collect()
    }

    pub fn to_pretty_string(&self) -> String {
        let mut s = String::new();
        for r in 0..9 {
            if r % 3 == 0 {
                s.push_str("+-------+-------+-------+\n");
            }
            for c in 0..9 {
                if c % 3 == 0 {
                    s.push_str("| ");
                }
                let d = self.cells[r][c];
                s.push(if d == 0 { '.' } else { (b'0' + d) as char });
                s.push(' ');
            }
            s.push_str("|\n");
        }
        s.push_str("+-------+-------+-------+\n");
        s
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_pretty_string())
    }
}
