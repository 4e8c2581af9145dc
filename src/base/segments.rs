/// Splits a fixed render width across weighted entries.
///
/// Entries are allocated in the given order: each takes
/// `round(weight/total * width)` clipped to the budget that remains, and the
/// final entry absorbs whatever is left. Per-entry rounding can otherwise
/// under- or over-shoot by a few columns; the absorption step guarantees the
/// result sums to exactly `width` for any non-empty input.
pub fn allocate(weights: &[f64], total: f64, width: usize) -> Vec<usize> {
    let mut lengths = Vec::with_capacity(weights.len());
    let mut remaining = width;
    for (i, &weight) in weights.iter().enumerate() {
        let length = if i == weights.len() - 1 {
            remaining
        } else {
            let share = if total > 0.0 { weight / total } else { 0.0 };
            remaining.min((share * width as f64).round() as usize)
        };
        lengths.push(length);
        remaining -= length;
    }
    lengths
}
