//! Shannon entropy of hostname labels.

/// Shannon entropy (bits per symbol) of `text`, computed over bytes.
///
/// Returns `0.0` for empty input. A string of one repeated character has
/// entropy `0.0`.
pub fn shannon_entropy(text: &str) -> f64 {
    if text.is_empty() {
        return 0.0;
    }

    let mut frequencies = [0u32; 256];
    for &b in text.as_bytes() {
        frequencies[b as usize] += 1;
    }

    let len = text.len() as f64;
    frequencies
        .iter()
        .filter(|&&n| n > 0)
        .map(|&n| {
            let p = n as f64 / len;
            -p * p.log2()
        })
        .sum()
}
