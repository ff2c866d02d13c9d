pub mod search;

pub use search::{largest_pandigital_prime, search_below, search_bound, POSSIBLE_DIGIT_COUNTS};
