use clap::Parser;
use pandigital_prime::largest_pandigital_prime;

#[derive(Parser)]
#[command(name = "pandigital-prime")]
#[command(about = "Find the largest prime whose digits are a permutation of 1..n")]
struct Cli {
    /// Print each qualifying prime as the search finds it
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let answer = largest_pandigital_prime(cli.verbose);
    println!("Largest pandigital prime:");
    println!("  {}", answer);
}
