pub mod boundary;
pub mod grid;
pub mod group;
pub mod solver;

pub use grid::{Digit, DigitSet, Grid, Pos};
pub use group::{all_groups, candidates, Axis, Group};
pub use solver::{solve, SolveError, SolveStats, Solver};
