use crate::grid::{Digit, Grid, Pos};
use crate::group::{all_groups, candidates};
use itertools::Itertools;
use log::{debug, info};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The clues admit no valid completion.
    #[error("puzzle is unsolvable")]
    Unsolvable,
    /// A caller-imposed pass budget ran out before the search finished. Not
    /// the same thing as unsolvable; the search was cut short.
    #[error("solve aborted after {passes} scan passes")]
    Aborted { passes: usize },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SolveStats {
    /// Full scans over the 27 groups.
    pub passes: usize,
    /// Snapshots pushed (ambiguous cells where a value was tried speculatively).
    pub guesses: usize,
    /// Restores from a snapshot after a contradiction.
    pub backtracks: usize,
}

/// One recorded decision: the grid as it was before the guess, the guessed
/// cell, and the values not yet tried there. Owns its own grid copy, so no
/// two stack entries share state. Only ever pushed with a non-empty
/// `remaining` list.
struct Snapshot {
    grid: Grid,
    pos: Pos,
    remaining: Vec<Digit>,
}

/// What one full scan over the groups concluded. Restarting the scan after a
/// forced move or a guess is an ordinary loop iteration, not a thrown signal.
enum ScanOutcome {
    /// Every group is complete.
    Solved,
    /// Some empty cell has exactly one legal value.
    Forced { pos: Pos, digit: Digit },
    /// No forced move anywhere; this cell had the fewest candidates
    /// (ties keep the first one seen). `moves` is ascending and has at
    /// least two entries.
    Ambiguous { pos: Pos, moves: Vec<Digit> },
    /// Some cell has no legal value, or the board is full yet invalid.
    Contradiction,
}

pub struct Solver {
    max_passes: Option<usize>,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    pub fn new() -> Self {
        Self { max_passes: None }
    }

    /// Abort with `SolveError::Aborted` once `max` scan passes have run.
    pub fn with_max_passes(max: usize) -> Self {
        Self {
            max_passes: Some(max),
        }
    }

    pub fn solve(&self, input: &Grid) -> Result<Grid, SolveError> {
        self.solve_with_stats(input).map(|(grid, _)| grid)
    }

    /// Solve and report how much work it took.
    pub fn solve_with_stats(&self, input: &Grid) -> Result<(Grid, SolveStats), SolveError> {
        let mut grid = input.clone();
        let mut snapshots: Vec<Snapshot> = Vec::new();
        let mut stats = SolveStats::default();
        info!("solving board:\n{}", grid.to_pretty_string());

        loop {
            if let Some(max) = self.max_passes {
                if stats.passes >= max {
                    info!("pass budget of {} exhausted, aborting", max);
                    return Err(SolveError::Aborted {
                        passes: stats.passes,
                    });
                }
            }
            stats.passes += 1;

            match scan(&grid) {
                ScanOutcome::Solved => {
                    info!(
                        "board solved after {} passes ({} guesses, {} backtracks)",
                        stats.passes, stats.guesses, stats.backtracks
                    );
                    return Ok((grid, stats));
                }
                ScanOutcome::Forced { pos, digit } => {
                    debug!("forced {} at r{}c{}", digit, pos.row, pos.col);
                    grid.set(pos, digit);
                }
                ScanOutcome::Ambiguous { pos, mut moves } => {
                    let Some(digit) = moves.pop() else {
                        return Err(SolveError::Unsolvable);
                    };
                    debug!(
                        "guessing {} at r{}c{}, banking {:?}",
                        digit, pos.row, pos.col, moves
                    );
                    stats.guesses += 1;
                    let before = grid.clone();
                    grid.set(pos, digit);
                    if !moves.is_empty() {
                        snapshots.push(Snapshot {
                            grid: before,
                            pos,
                            remaining: moves,
                        });
                    }
                }
                ScanOutcome::Contradiction => {
                    let Some(mut snap) = snapshots.pop() else {
                        info!("contradiction with no snapshots left; unsolvable");
                        return Err(SolveError::Unsolvable);
                    };
                    let pos = snap.pos;
                    let Some(digit) = snap.remaining.pop() else {
                        // snapshots are only pushed with alternatives left
                        return Err(SolveError::Unsolvable);
                    };
                    debug!(
                        "restoring snapshot, retrying {} at r{}c{}",
                        digit, pos.row, pos.col
                    );
                    stats.backtracks += 1;
                    grid = if snap.remaining.is_empty() {
                        // that decision point is spent; drop it for good
                        snap.grid
                    } else {
                        let copy = snap.grid.clone();
                        snapshots.push(snap);
                        copy
                    };
                    grid.set(pos, digit);
                }
            }
        }
    }
}

/// One full pass: walk the groups most-constrained-first, looking for a
/// forced move or a contradiction; failing both, report the empty cell with
/// the fewest candidates.
fn scan(grid: &Grid) -> ScanOutcome {
    let groups = all_groups(grid)
        .into_iter()
        .sorted_by_key(|g| g.missing_values().len())
        .collect_vec();

    // Ascending by missing count: if even the last group is complete, all are.
    if groups.last().is_some_and(|g| g.missing_values().is_empty()) {
        return ScanOutcome::Solved;
    }

    // A cell sits in three groups; only price it once per pass.
    let mut visited = [[false; 9]; 9];
    let mut best: Option<(Pos, Vec<Digit>)> = None;

    for group in &groups {
        for pos in group.empty_coordinates() {
            if visited[pos.row][pos.col] {
                continue;
            }
            visited[pos.row][pos.col] = true;

            let set = candidates(grid, pos);
            if set.is_empty() {
                return ScanOutcome::Contradiction;
            }
            if set.len() == 1 {
                if let Some(digit) = set.first() {
                    return ScanOutcome::Forced { pos, digit };
                }
            }
            if best.as_ref().map_or(true, |(_, moves)| set.len() < moves.len()) {
                best = Some((pos, set.to_vec()));
            }
        }
    }

    match best {
        Some((pos, moves)) => ScanOutcome::Ambiguous { pos, moves },
        // Not solved, yet no empty cell anywhere: some group is full but
        // holds a duplicate. The clues were inconsistent to begin with.
        None => ScanOutcome::Contradiction,
    }
}

/// Solve with no pass budget.
pub fn solve(grid: &Grid) -> Result<Grid, SolveError> {
    Solver::new().solve(grid)
}
