pub mod digits;
pub mod prime;

pub use digits::{digit_count, is_pandigital};
pub use prime::{is_prime, primes, primes_below, Primes};
