/// Square matrix of pairwise travel distances in meters. Row/column
/// indices follow the point order the matrix was requested for.
#[derive(Clone, Debug)]
pub struct DistanceMatrix {
    rows: Vec<Vec<f64>>,
}

impl DistanceMatrix {
    /// Rejects matrices that are not square over `expected` points or
    /// contain non-finite or negative entries.
    pub fn from_rows(rows: Vec<Vec<f64>>, expected: usize) -> Option<Self> {
        if rows.len() != expected || rows.iter().any(|row| row.len() != expected) {
            return None;
        }

        if rows
            .iter()
            .flatten()
            .any(|distance| !distance.is_finite() || *distance < 0.0)
        {
            return None;
        }

        Some(Self { rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn distance(&self, from: usize, to: usize) -> f64 {
        self.rows[from][to]
    }
}
