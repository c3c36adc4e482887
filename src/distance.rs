// distance.rs - weighted minimum edit distance (Levenshtein dynamic program)
// Standalone scoring utility; the suggestion path does not depend on it.

/// Per-operation costs for the edit distance dynamic program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditCosts {
    pub insert: u32,
    pub delete: u32,
    pub replace: u32,
}

impl Default for EditCosts {
    fn default() -> Self {
        Self {
            insert: 1,
            delete: 1,
            replace: 2,
        }
    }
}

/// The filled (m+1) x (n+1) dynamic-programming grid for one distance query,
/// where m is the source length and n the target length in characters.
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    cells: Vec<Vec<u32>>,
}

impl DistanceMatrix {
    /// Number of rows (source length + 1).
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    /// Number of columns (target length + 1).
    pub fn cols(&self) -> usize {
        self.cells[0].len()
    }

    /// Cost cell at (row, col).
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.cells[row][col]
    }

    /// The minimum edit distance: the bottom-right cell.
    pub fn distance(&self) -> u32 {
        self.cells[self.rows() - 1][self.cols() - 1]
    }

    /// Borrow the raw grid, row-major.
    pub fn cells(&self) -> &[Vec<u32>] {
        &self.cells
    }
}

/// Compute the minimum weighted edit distance from `source` to `target`.
///
/// Row 0 accumulates insert costs across the target; column 0 accumulates
/// delete costs down the source. Each axis is sized and filled by its own
/// string's length. The recurrence takes the cheapest of a delete, an
/// insert, or a diagonal step that charges `costs.replace` only when the
/// characters differ.
pub fn min_edit_distance(source: &str, target: &str, costs: EditCosts) -> DistanceMatrix {
    let source_chars: Vec<char> = source.chars().collect();
    let target_chars: Vec<char> = target.chars().collect();
    let m = source_chars.len();
    let n = target_chars.len();

    let mut cells = vec![vec![0u32; n + 1]; m + 1];
    for row in 1..=m {
        cells[row][0] = cells[row - 1][0] + costs.delete;
    }
    for col in 1..=n {
        cells[0][col] = cells[0][col - 1] + costs.insert;
    }

    for i in 1..=m {
        for j in 1..=n {
            let diagonal_cost = if source_chars[i - 1] == target_chars[j - 1] {
                0
            } else {
                costs.replace
            };

            let deletion = cells[i - 1][j] + costs.delete;
            let insertion = cells[i][j - 1] + costs.insert;
            let substitution = cells[i - 1][j - 1] + diagonal_cost;

            cells[i][j] = deletion.min(insertion).min(substitution);
        }
    }

    DistanceMatrix { cells }
}

/// Minimum edit distance with the default (1, 1, 2) costs.
pub fn edit_distance(source: &str, target: &str) -> u32 {
    min_edit_distance(source, target, EditCosts::default()).distance()
}
