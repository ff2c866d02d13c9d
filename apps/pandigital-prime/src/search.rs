use math::{digit_count, is_pandigital, primes};

/// Pandigital lengths that can contain a prime.
///
/// A k-digit pandigital has digit sum 1 + 2 + ... + k = k(k+1)/2, which is
/// a multiple of 3 for k in {2, 3, 5, 6, 8, 9}, so every pandigital of
/// those lengths is divisible by 3 and composite. k = 1 admits only the
/// non-prime 1. That leaves 4 and 7.
pub const POSSIBLE_DIGIT_COUNTS: &[u32] = &[4, 7];

/// Exclusive upper bound for the search: one past the largest pandigital
/// of the longest allowed length, whose digits are k, k-1, ..., 1.
///
/// For the allowed lengths {4, 7} this is 7654321 + 1 = 7654322.
pub fn search_bound(allowed: &[u32]) -> u64 {
    let k = allowed.iter().copied().max().unwrap_or(0) as u64;
    (1..=k).rev().fold(0, |acc, d| acc * 10 + d) + 1
}

/// Walk the primes below `bound` in ascending order and keep the most
/// recent one whose digit count is in `allowed` and whose digits are
/// pandigital. Ascending order makes the last one kept the largest.
///
/// Returns 0 if no prime below the bound qualifies.
pub fn search_below(bound: u64, allowed: &[u32], verbose: bool) -> u64 {
    let mut best = 0;
    for p in primes().take_while(|&p| p < bound) {
        if allowed.contains(&digit_count(p)) && is_pandigital(p) {
            if verbose {
                println!("Found {}-digit pandigital prime: {}", digit_count(p), p);
            }
            best = p;
        }
    }
    best
}

/// The largest prime whose decimal digits are a permutation of 1..k for
/// some k.
pub fn largest_pandigital_prime(verbose: bool) -> u64 {
    search_below(
        search_bound(POSSIBLE_DIGIT_COUNTS),
        POSSIBLE_DIGIT_COUNTS,
        verbose,
    )
}
