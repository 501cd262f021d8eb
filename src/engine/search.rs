use crate::entities::DistanceMatrix;
use crate::error::{insufficient_stops_error, too_many_stops_error, Error};

/// Exhaustive enumeration is factorial in the remaining-stop count, so
/// the search refuses anything past this bound.
pub const MAX_REMAINING_STOPS: usize = 8;

/// Lazily yields every permutation of `0..n` in lexicographic order.
pub struct Permutations {
    next: Option<Vec<usize>>,
}

impl Permutations {
    pub fn new(n: usize) -> Self {
        Self {
            next: Some((0..n).collect()),
        }
    }
}

impl Iterator for Permutations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = next_permutation(&current);
        Some(current)
    }
}

// Standard lexicographic successor: find the rightmost ascent, swap it
// with the smallest larger element to its right, reverse the suffix.
fn next_permutation(perm: &[usize]) -> Option<Vec<usize>> {
    if perm.len() < 2 {
        return None;
    }

    let mut next = perm.to_vec();

    let mut i = next.len() - 1;
    while i > 0 && next[i - 1] >= next[i] {
        i -= 1;
    }

    if i == 0 {
        return None;
    }

    let pivot = i - 1;
    let mut j = next.len() - 1;
    while next[j] <= next[pivot] {
        j -= 1;
    }

    next.swap(pivot, j);
    next[i..].reverse();

    Some(next)
}

/// Finds the visiting order of the remaining stops that minimizes total
/// distance from the fixed start. `matrix` covers the start at index 0
/// followed by the remaining stops in input order; the returned order
/// indexes into the remaining stops. Equal-cost orders resolve to the
/// first one encountered in enumeration order.
pub fn best_order(matrix: &DistanceMatrix) -> Result<(Vec<usize>, f64), Error> {
    if matrix.len() < 2 {
        return Err(insufficient_stops_error());
    }

    let remaining = matrix.len() - 1;

    if remaining > MAX_REMAINING_STOPS {
        return Err(too_many_stops_error());
    }

    // A single remaining stop needs no enumeration.
    if remaining == 1 {
        return Ok((vec![0], matrix.distance(0, 1)));
    }

    let mut best_order = Vec::new();
    let mut best_cost = f64::INFINITY;

    for perm in Permutations::new(remaining) {
        let mut cost = matrix.distance(0, perm[0] + 1);
        for pair in perm.windows(2) {
            cost += matrix.distance(pair[0] + 1, pair[1] + 1);
        }

        if cost < best_cost {
            best_cost = cost;
            best_order = perm;
        }
    }

    Ok((best_order, best_cost))
}
