use kudoku::{candidates, Axis, DigitSet, Grid, Group, Pos};
use pretty_assertions::assert_eq;

const EASY: &str =
    "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";

fn grid(s: &str) -> Grid {
    Grid::from_compact(s).expect("parse test board")
}

#[test]
fn axis_mappings_are_inverses() {
    for axis in Axis::ALL {
        for index in 0..9 {
            for slot in 0..9 {
                let p = axis.coord(index, slot);
                assert_eq!(axis.index_of(p), index);
            }
        }
    }
}

#[test]
fn block_mapping_matches_layout() {
    // Block 4 is the centre block, rows 3..6 x cols 3..6.
    let coords: Vec<Pos> = (0..9).map(|slot| Axis::Block.coord(4, slot)).collect();
    assert_eq!(coords[0], Pos::new(3, 3));
    assert_eq!(coords[8], Pos::new(5, 5));
    assert!(coords.iter().all(|p| (3..6).contains(&p.row) && (3..6).contains(&p.col)));
}

#[test]
fn row_values_and_missing() {
    let g = grid(EASY);
    let row0 = Group::new(&g, Axis::Row, 0);
    assert_eq!(row0.values().collect::<Vec<_>>(), vec![5, 3, 7]);
    assert_eq!(row0.missing_values().to_vec(), vec![1, 2, 4, 6, 8, 9]);
    assert_eq!(row0.empty_coordinates().count(), 6);
}

#[test]
fn sibling_groups_cover_the_other_axes() {
    let g = grid(EASY);
    let p = Pos::new(4, 7);
    let row = Group::containing(&g, Axis::Row, p);
    let [a, b] = row.siblings(p);
    assert_eq!(a.axis(), Axis::Col);
    assert_eq!(a.index(), 7);
    assert_eq!(b.axis(), Axis::Block);
    assert_eq!(b.index(), 5);
}

#[test]
fn candidate_set_is_the_three_way_intersection() {
    // Cell (0,2): row 0 holds {5,3,7}, column 2 holds {8}, and the top-left
    // block holds {5,3,6,9,8}, leaving 1, 2, and 4.
    let g = grid(EASY);
    assert_eq!(candidates(&g, Pos::new(0, 2)).to_vec(), vec![1, 2, 4]);
}

#[test]
fn duplicates_are_reported_not_deduplicated() {
    let mut g = grid(EASY);
    g.set(Pos::new(0, 3), 5); // row 0 already holds a 5
    let row0 = Group::new(&g, Axis::Row, 0);
    assert_eq!(row0.values().filter(|&d| d == 5).count(), 2);
    assert!(row0.has_duplicates());
    assert!(!g.is_valid());
}

#[test]
fn digit_set_basics() {
    let mut set = DigitSet::EMPTY;
    assert!(set.is_empty());
    set.insert(4);
    set.insert(9);
    set.insert(4);
    assert_eq!(set.len(), 2);
    assert_eq!(set.first(), Some(4));
    assert_eq!(set.to_vec(), vec![4, 9]);
    set.remove(4);
    assert_eq!(set.to_vec(), vec![9]);
    assert_eq!(DigitSet::ALL.len(), 9);
    assert_eq!(
        DigitSet::ALL.minus(set).intersect(DigitSet::ALL).len(),
        8
    );
}

#[test]
fn grid_parsing_round_trips() {
    let g = grid(EASY);
    assert_eq!(g.to_compact(), EASY);
    let rows = g.rows();
    assert_eq!(rows[0], vec![5, 3, 0, 0, 7, 0, 0, 0, 0]);
    assert_eq!(Grid::from_rows(&rows).expect("valid shape"), g);
}
