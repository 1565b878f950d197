use std::cell::Cell;
use std::fmt::Debug;
use std::io::{self, Write};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Mutex;

use sort_count::{patterns, verify, CountingSort};

const TEST_SIZES: [usize; 26] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 15, 16, 17, 20, 24, 30, 32, 33, 35, 50, 100, 200, 500,
    1_000, 2_048,
];

// Only for patterns that don't degenerate quicksort and treesort into O(n)
// recursion or tree depth.
const TEST_SIZES_LARGE: [usize; 2] = [10_000, 100_000];

fn get_or_init_random_seed<S: CountingSort>() -> u64 {
    static SEED_WRITTEN: Mutex<bool> = Mutex::new(false);
    let seed = patterns::random_init_seed();

    let mut seed_writer = SEED_WRITTEN.lock().unwrap();
    if !*seed_writer {
        // Always write the seed before doing anything to ensure reproducibility of crashes.
        io::stdout()
            .write_all(format!("\nSeed: {seed}\nTesting: {}\n\n", S::name()).as_bytes())
            .unwrap();
        io::stdout().flush().unwrap();

        *seed_writer = true;
    }

    seed
}

/// Sorts `v` with `S`, checks the outcome against the stdlib sort, and checks
/// the count contract for trivial inputs.
fn sort_comp<T: Ord + Clone + Debug, S: CountingSort>(v: &mut [T]) {
    let seed = get_or_init_random_seed::<S>();

    let original = v.to_vec();

    let mut expected = v.to_vec();
    expected.sort();

    let comp_count = S::sort(v);

    assert!(
        verify::is_sorted(v),
        "not sorted, seed: {seed}, original: {original:?}"
    );
    assert_eq!(&*v, expected.as_slice(), "seed: {seed}");

    if original.len() < 2 {
        assert_eq!(comp_count, 0, "trivial input must cost zero comparisons");
    }
}

fn test_pattern<S: CountingSort>(pattern_fn: impl Fn(usize) -> Vec<i32>, large: bool) {
    for test_size in TEST_SIZES {
        let mut test_data = pattern_fn(test_size);
        sort_comp::<i32, S>(test_data.as_mut_slice());
    }

    if large {
        for test_size in TEST_SIZES_LARGE {
            let mut test_data = pattern_fn(test_size);
            sort_comp::<i32, S>(test_data.as_mut_slice());
        }
    }
}

// --- TESTS ---

pub fn basic<S: CountingSort>() {
    sort_comp::<i32, S>(&mut []);
    sort_comp::<(), S>(&mut []);
    sort_comp::<(), S>(&mut [()]);
    sort_comp::<(), S>(&mut [(), ()]);
    sort_comp::<(), S>(&mut [(), (), ()]);
    sort_comp::<i32, S>(&mut [77]);
    sort_comp::<i32, S>(&mut [2, 3]);
    sort_comp::<i32, S>(&mut [3, 2]);
    sort_comp::<i32, S>(&mut [2, 3, 6]);
    sort_comp::<i32, S>(&mut [2, 3, 99, 6]);
    sort_comp::<i32, S>(&mut [2, 7709, 400, 90932]);
    sort_comp::<i32, S>(&mut [15, -1, 3, -1, -3, -1, 7]);
}

pub fn int_edge<S: CountingSort>() {
    sort_comp::<i32, S>(&mut [i32::MAX, i32::MIN]);
    sort_comp::<i32, S>(&mut [0, i32::MAX, 0, i32::MIN, 1, -1]);

    let mut large = patterns::random(500);
    large.push(i32::MAX);
    large.push(i32::MIN);
    large.push(i32::MAX);
    sort_comp::<i32, S>(&mut large);
}

pub fn random<S: CountingSort>() {
    test_pattern::<S>(patterns::random, true);
}

pub fn random_narrow<S: CountingSort>() {
    // Lots of duplicates.
    test_pattern::<S>(|size| patterns::random_uniform(size, 0..=10), false);
}

pub fn random_binary<S: CountingSort>() {
    test_pattern::<S>(|size| patterns::random_uniform(size, 0..=1), false);
}

pub fn ascending<S: CountingSort>() {
    test_pattern::<S>(patterns::ascending, false);
}

pub fn descending<S: CountingSort>() {
    test_pattern::<S>(patterns::descending, false);
}

pub fn all_equal<S: CountingSort>() {
    test_pattern::<S>(patterns::all_equal, false);
}

pub fn saw_mixed<S: CountingSort>() {
    // The sorted runs inside the saws degenerate treesort's depth, so this
    // pattern skips the large sizes.
    test_pattern::<S>(
        |size| patterns::saw_mixed(size, ((size as f64).log2().round()) as usize),
        false,
    );
}

pub fn pipe_organ<S: CountingSort>() {
    test_pattern::<S>(patterns::pipe_organ, false);
}

pub fn random_str<S: CountingSort>() {
    for test_size in TEST_SIZES {
        let mut test_data: Vec<String> = patterns::random(test_size)
            .into_iter()
            .map(|val| format!("{val:020}"))
            .collect();
        sort_comp::<String, S>(test_data.as_mut_slice());
    }
}

pub fn observable_comp_count<S: CountingSort>() {
    // The returned count must equal the number of times the comparator was
    // actually invoked, for every input shape.
    let pattern_fns: [fn(usize) -> Vec<i32>; 4] = [
        patterns::random,
        patterns::ascending,
        patterns::descending,
        patterns::all_equal,
    ];

    for pattern_fn in pattern_fns {
        for test_size in TEST_SIZES {
            let mut test_data = pattern_fn(test_size);
            let mut test_data_clone = test_data.clone();

            let invocations = Cell::new(0u64);
            let reported = S::sort_by(test_data.as_mut_slice(), |a, b| {
                invocations.set(invocations.get() + 1);
                a.cmp(b)
            });

            assert_eq!(reported, invocations.get());

            // `sort` must cost exactly what `sort_by` with `Ord::cmp` costs.
            assert_eq!(S::sort(test_data_clone.as_mut_slice()), reported);
        }
    }
}

pub fn panic_retain_original_set<S: CountingSort>() {
    // A panicking comparator is a contract violation and aborts the sort, but
    // it must not lose or duplicate elements on the way out.
    for test_size in [8, 24, 100, 500] {
        let mut test_data = patterns::random(test_size);
        let mut original = test_data.clone();

        let comps_before_panic = test_size as u64 / 2;
        let invocations = Cell::new(0u64);

        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            S::sort_by(test_data.as_mut_slice(), |a, b| {
                invocations.set(invocations.get() + 1);
                if invocations.get() > comps_before_panic {
                    panic!("deliberate comparator panic");
                }
                a.cmp(b)
            })
        }));
        assert!(result.is_err());

        // Multiset equality, checked by comparing sorted contents.
        test_data.sort_unstable();
        original.sort_unstable();
        assert_eq!(test_data, original);
    }
}

macro_rules! instantiate_counting_sort_tests {
    ($sort_impl:ty) => {
        #[test]
        fn basic() {
            crate::basic::<$sort_impl>();
        }

        #[test]
        fn int_edge() {
            crate::int_edge::<$sort_impl>();
        }

        #[test]
        fn random() {
            crate::random::<$sort_impl>();
        }

        #[test]
        fn random_narrow() {
            crate::random_narrow::<$sort_impl>();
        }

        #[test]
        fn random_binary() {
            crate::random_binary::<$sort_impl>();
        }

        #[test]
        fn ascending() {
            crate::ascending::<$sort_impl>();
        }

        #[test]
        fn descending() {
            crate::descending::<$sort_impl>();
        }

        #[test]
        fn all_equal() {
            crate::all_equal::<$sort_impl>();
        }

        #[test]
        fn saw_mixed() {
            crate::saw_mixed::<$sort_impl>();
        }

        #[test]
        fn pipe_organ() {
            crate::pipe_organ::<$sort_impl>();
        }

        #[test]
        fn random_str() {
            crate::random_str::<$sort_impl>();
        }

        #[test]
        fn observable_comp_count() {
            crate::observable_comp_count::<$sort_impl>();
        }

        #[test]
        fn panic_retain_original_set() {
            crate::panic_retain_original_set::<$sort_impl>();
        }
    };
}

mod quicksort {
    instantiate_counting_sort_tests!(sort_count::quicksort::SortImpl);
}

mod heapsort {
    instantiate_counting_sort_tests!(sort_count::heapsort::SortImpl);
}

mod mergesort {
    instantiate_counting_sort_tests!(sort_count::mergesort::SortImpl);
}

mod treesort {
    instantiate_counting_sort_tests!(sort_count::treesort::SortImpl);
}

mod combsort {
    instantiate_counting_sort_tests!(sort_count::combsort::SortImpl);
}

// --- Shared utilities ---

#[test]
fn is_sorted_basic() {
    assert!(verify::is_sorted::<i32>(&[]));
    assert!(verify::is_sorted(&[1]));
    assert!(verify::is_sorted(&[1, 1, 2, 3]));
    assert!(!verify::is_sorted(&[2, 1]));
    assert!(!verify::is_sorted(&[1, 3, 2]));

    assert!(verify::is_sorted_by(&[3, 2, 1], |a, b| b.cmp(a)));
    assert!(!verify::is_sorted_by(&[1, 2, 3], |a, b| b.cmp(a)));
}

#[test]
fn mergesort_stable() {
    // Sort (key, tag) pairs by key only; equal keys must keep input order.
    let mut test_data: Vec<(i32, usize)> = patterns::random_uniform(2_000, 0..=20)
        .into_iter()
        .enumerate()
        .map(|(i, key)| (key, i))
        .collect();

    sort_count::mergesort::sort_by(test_data.as_mut_slice(), |a, b| a.0.cmp(&b.0));

    for pair in test_data.windows(2) {
        assert!(pair[0].0 <= pair[1].0);
        if pair[0].0 == pair[1].0 {
            assert!(pair[0].1 < pair[1].1, "equal keys out of input order");
        }
    }
}
