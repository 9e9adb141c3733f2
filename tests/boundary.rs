use kudoku::boundary::{solve_request, BoundaryError, PuzzleRequest, SolutionResponse};
use kudoku::Solver;
use pretty_assertions::assert_eq;

const EASY: &str =
    "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";
const EASY_SOLUTION: &str =
    "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

fn rows_of(s: &str) -> Vec<Vec<u8>> {
    let digits: Vec<u8> = s
        .chars()
        .map(|ch| if ch == '.' { 0 } else { ch as u8 - b'0' })
        .collect();
    digits.chunks(9).map(|row| row.to_vec()).collect()
}

#[test]
fn request_solves_to_expected_solution() {
    let req = PuzzleRequest {
        puzzle: rows_of(EASY),
    };
    let resp = solve_request(&Solver::new(), &req).expect("solvable puzzle");
    assert_eq!(resp.solution, rows_of(EASY_SOLUTION));
}

#[test]
fn schema_survives_json() {
    let req = PuzzleRequest {
        puzzle: rows_of(EASY),
    };
    let body = serde_json::to_string(&req).expect("serialize request");
    let back: PuzzleRequest = serde_json::from_str(&body).expect("deserialize request");
    assert_eq!(back.puzzle, req.puzzle);

    let resp = SolutionResponse {
        solution: rows_of(EASY_SOLUTION),
    };
    let body = serde_json::to_string(&resp).expect("serialize response");
    assert!(body.starts_with(r#"{"solution":"#));
}

#[test]
fn wrong_row_count_is_malformed() {
    let mut puzzle = rows_of(EASY);
    puzzle.pop();
    let err = solve_request(&Solver::new(), &PuzzleRequest { puzzle })
        .expect_err("eight rows must be rejected");
    assert!(matches!(err, BoundaryError::Malformed(_)));
    assert_eq!(err.status(), 400);
}

#[test]
fn wrong_row_length_is_malformed() {
    let mut puzzle = rows_of(EASY);
    puzzle[3].push(0);
    let err = solve_request(&Solver::new(), &PuzzleRequest { puzzle })
        .expect_err("ten cells in a row must be rejected");
    assert!(matches!(err, BoundaryError::Malformed(_)));
    assert_eq!(err.status(), 400);
}

#[test]
fn out_of_range_value_is_malformed() {
    let mut puzzle = rows_of(EASY);
    puzzle[0][2] = 10;
    let err = solve_request(&Solver::new(), &PuzzleRequest { puzzle })
        .expect_err("value 10 must be rejected");
    assert!(matches!(err, BoundaryError::Malformed(_)));
    assert_eq!(err.status(), 400);
}

#[test]
fn unsolvable_puzzle_maps_to_406() {
    let mut puzzle = rows_of(EASY);
    puzzle[0][1] = 5; // second 5 in row 0
    let err = solve_request(&Solver::new(), &PuzzleRequest { puzzle })
        .expect_err("contradictory clues");
    assert!(matches!(err, BoundaryError::Solve(_)));
    assert_eq!(err.status(), 406);
}
