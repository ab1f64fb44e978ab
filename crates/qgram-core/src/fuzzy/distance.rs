//! Prefix edit distance
//!
//! Decides whether a query word is within `delta` Levenshtein edits of some
//! prefix of a candidate word. This lets a partially typed or misspelled
//! word match a longer indexed word.

/// Dynamic-programming table on the heap, addressed by row stride.
struct Matrix {
    cells: Vec<usize>,
    stride: usize,
}

impl Matrix {
    fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: vec![0; rows * cols],
            stride: cols,
        }
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> usize {
        self.cells[row * self.stride + col]
    }

    #[inline]
    fn set(&mut self, row: usize, col: usize, value: usize) {
        self.cells[row * self.stride + col] = value;
    }

    fn row(&self, row: usize) -> &[usize] {
        &self.cells[row * self.stride..(row + 1) * self.stride]
    }
}

/// True iff some prefix of `candidate` is within `delta` edits of `query`.
///
/// Only the first `len(query) + delta` characters of `candidate` can take
/// part in a qualifying prefix, so columns beyond that are never computed.
pub fn is_prefix_match(query: &str, candidate: &str, delta: usize) -> bool {
    let query: Vec<char> = query.chars().collect();
    let candidate: Vec<char> = candidate.chars().collect();

    let rows = query.len() + 1;
    let cols = query.len().saturating_add(delta).min(candidate.len()) + 1;
    let mut matrix = Matrix::new(rows, cols);

    for i in 0..rows {
        matrix.set(i, 0, i);
    }
    for j in 0..cols {
        matrix.set(0, j, j);
    }

    for i in 1..rows {
        for j in 1..cols {
            let substitution = usize::from(query[i - 1] != candidate[j - 1]);
            let value = (matrix.get(i - 1, j - 1) + substitution)
                .min(matrix.get(i, j - 1) + 1)
                .min(matrix.get(i - 1, j) + 1);
            matrix.set(i, j, value);
        }
    }

    matrix.row(rows - 1).iter().any(|&d| d <= delta)
}
