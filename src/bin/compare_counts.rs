//! Sorts identical random input with each algorithm and prints the measured
//! comparison counts plus a post-hoc sortedness check.

use sort_count::{combsort, heapsort, mergesort, patterns, quicksort, treesort, verify, CountingSort};

const INPUT_LEN: usize = 20_000;

fn run_one<S: CountingSort>(input: &[i32]) {
    let mut data = input.to_vec();
    let comp_count = S::sort(&mut data);

    println!(
        "{:<10} comparisons: {:>10}  sorted: {}",
        S::name(),
        comp_count,
        verify::is_sorted(&data)
    );
}

fn main() {
    let input = patterns::random_uniform(INPUT_LEN, 0..1_000_000);

    run_one::<quicksort::SortImpl>(&input);
    run_one::<heapsort::SortImpl>(&input);
    run_one::<mergesort::SortImpl>(&input);
    run_one::<treesort::SortImpl>(&input);
    run_one::<combsort::SortImpl>(&input);
}
