//! The shape a transport exchanges with the core, and nothing else: the
//! request/response schema, the validation that keeps malformed boards out of
//! the solver, and the status a transport should answer with on failure.

use crate::grid::Grid;
use crate::solver::{SolveError, Solver};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Request body: the 9x9 board, 0 for blanks.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PuzzleRequest {
    pub puzzle: Vec<Vec<u8>>,
}

/// Response body: the solved 9x9 board.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SolutionResponse {
    pub solution: Vec<Vec<u8>>,
}

#[derive(Debug, Error)]
pub enum BoundaryError {
    /// Rejected before the solver ran: wrong shape or out-of-range value.
    #[error("malformed board: {0}")]
    Malformed(String),
    #[error(transparent)]
    Solve(#[from] SolveError),
}

impl BoundaryError {
    /// Status code a transport should answer with.
    pub fn status(&self) -> u16 {
        match self {
            BoundaryError::Malformed(_) => 400,
            BoundaryError::Solve(SolveError::Unsolvable) => 406,
            BoundaryError::Solve(SolveError::Aborted { .. }) => 503,
        }
    }
}

/// Validate the request, run the solver, wrap the result.
pub fn solve_request(
    solver: &Solver,
    req: &PuzzleRequest,
) -> Result<SolutionResponse, BoundaryError> {
    let grid =
        Grid::from_rows(&req.puzzle).map_err(|e| BoundaryError::Malformed(e.to_string()))?;
    let solved = solver.solve(&grid)?;
    Ok(SolutionResponse {
        solution: solved.rows(),
    })
}
