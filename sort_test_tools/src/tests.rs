use std::cmp::Ordering;
use std::env;
use std::fmt::Debug;
use std::fs;
use std::io::{self, Write};
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;
use std::sync::Mutex;

use crate::patterns;
use crate::Sort;

// Several strategies are quadratic, the sizes stay below what they finish quickly.

#[cfg(miri)]
const TEST_SIZES: [usize; 18] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 10, 15, 20, 24, 33, 50, 100, 280, 400,
];

#[cfg(feature = "large_test_sizes")]
#[cfg(not(miri))]
const TEST_SIZES: [usize; 28] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 15, 16, 17, 20, 24, 30, 32, 33, 35, 50, 100, 200, 500, 1_000,
    2_048, 5_000, 10_000,
];

#[cfg(not(feature = "large_test_sizes"))]
#[cfg(not(miri))]
const TEST_SIZES: [usize; 26] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 15, 16, 17, 20, 24, 30, 32, 33, 35, 50, 100, 200, 500, 1_000,
    2_048,
];

fn get_or_init_random_seed<S: Sort>() -> u64 {
    static SEED_WRITTEN: Mutex<bool> = Mutex::new(false);
    let seed = patterns::random_init_seed();

    let mut seed_writer = SEED_WRITTEN.lock().unwrap();
    if !*seed_writer {
        // Always write the seed before doing anything to ensure reproducibility of crashes.
        io::stdout()
            .write_all(format!("\nSeed: {seed}\nTesting: {}\n\n", <S as Sort>::name()).as_bytes())
            .unwrap();
        io::stdout().flush().unwrap();

        *seed_writer = true;
    }

    seed
}

fn check_against_std<T: Ord + Clone + Debug, S: Sort>(v: &mut [T]) {
    let seed = get_or_init_random_seed::<S>();

    let is_small_test = v.len() <= 100;
    let original_clone = v.to_vec();

    let mut stdlib_sorted = v.to_vec();
    stdlib_sorted.sort();

    let testsort_sorted = v;
    <S as Sort>::sort(testsort_sorted);

    assert_eq!(stdlib_sorted.len(), testsort_sorted.len());

    if stdlib_sorted.as_slice() == &*testsort_sorted {
        return;
    }

    if is_small_test {
        eprintln!("Original: {:?}", original_clone);
        eprintln!("Expected: {:?}", stdlib_sorted);
        eprintln!("Got:      {:?}", testsort_sorted);
    } else if env::var("WRITE_LARGE_FAILURE").is_ok() {
        // Large inputs go to files.
        let original_name = format!("original_{}.txt", seed);
        let std_name = format!("stdlib_sorted_{}.txt", seed);
        let test_name = format!("testsort_sorted_{}.txt", seed);

        fs::write(&original_name, format!("{:?}", original_clone)).unwrap();
        fs::write(&std_name, format!("{:?}", stdlib_sorted)).unwrap();
        fs::write(&test_name, format!("{:?}", testsort_sorted)).unwrap();

        eprintln!("Failed comparison, see files {original_name}, {std_name}, and {test_name}");
    } else {
        eprintln!("Failed comparison, re-run with WRITE_LARGE_FAILURE env var set, to get output.");
    }

    panic!("Test assertion failed!")
}

fn test_impl<T: Ord + Clone + Debug, S: Sort>(pattern_fn: impl Fn(usize) -> Vec<T>) {
    for test_size in TEST_SIZES {
        let mut test_data = pattern_fn(test_size);
        check_against_std::<T, S>(test_data.as_mut_slice());
    }
}

fn test_impl_custom(mut test_fn: impl FnMut(usize, fn(usize) -> Vec<i32>)) {
    let test_pattern_fns: Vec<fn(usize) -> Vec<i32>> = vec![
        patterns::random,
        |size| patterns::random_uniform(size, 0..=(((size as f64).log2().round()) as i32)),
        |size| patterns::random_uniform(size, 0..=1),
        patterns::ascending,
        patterns::descending,
        |size| patterns::saw_mixed(size, ((size as f64).log2().round()) as usize),
        |size| patterns::saw_mixed(size, (size as f64 / 22.0).round() as usize),
    ];

    for test_pattern_fn in test_pattern_fns {
        for test_size in &TEST_SIZES[..TEST_SIZES.len() - 2] {
            if *test_size < 2 {
                continue;
            }

            test_fn(*test_size, test_pattern_fn);
        }
    }
}

// Checks that elements equal by `.0` stay ordered by their occurrence count `.1`.
fn assert_stable(orig: &[(i32, i32)], sort_fn: impl FnOnce(&mut Vec<(i32, i32)>)) {
    let mut v = orig.to_vec();
    sort_fn(&mut v);

    assert!(v.windows(2).all(|w| w[0] <= w[1]));
}

trait DynTrait: Debug {
    fn get_val(&self) -> i32;
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct DynValA {
    value: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct DynValB {
    value: i32,
}

impl DynTrait for DynValA {
    fn get_val(&self) -> i32 {
        self.value
    }
}
impl DynTrait for DynValB {
    fn get_val(&self) -> i32 {
        self.value
    }
}

impl PartialOrd for dyn DynTrait {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for dyn DynTrait {
    fn cmp(&self, other: &Self) -> Ordering {
        self.get_val().cmp(&other.get_val())
    }
}

impl PartialEq for dyn DynTrait {
    fn eq(&self, other: &Self) -> bool {
        self.get_val() == other.get_val()
    }
}

impl Eq for dyn DynTrait {}

// --- TESTS ---

pub fn basic<S: Sort>() {
    check_against_std::<i32, S>(&mut []);
    check_against_std::<(), S>(&mut []);
    check_against_std::<(), S>(&mut [()]);
    check_against_std::<(), S>(&mut [(), ()]);
    check_against_std::<(), S>(&mut [(), (), ()]);
    check_against_std::<i32, S>(&mut [2, 3]);
    check_against_std::<i32, S>(&mut [2, 3, 6]);
    check_against_std::<i32, S>(&mut [2, 3, 99, 6]);
    check_against_std::<i32, S>(&mut [2, 7709, 400, 90932]);
    check_against_std::<i32, S>(&mut [15, -1, 3, -1, -3, -1, 7]);
    check_against_std::<i32, S>(&mut [5, 3, 4, 1, 2]);
}

pub fn fixed_seed<S: Sort>() {
    let fixed_seed_a = patterns::random_init_seed();
    let fixed_seed_b = patterns::random_init_seed();

    assert_eq!(fixed_seed_a, fixed_seed_b);
}

pub fn random<S: Sort>() {
    test_impl::<i32, S>(patterns::random);
}

pub fn random_type_u64<S: Sort>() {
    test_impl::<u64, S>(|size| {
        patterns::random(size)
            .iter()
            .map(|val| -> u64 {
                // Extends the value into the 64 bit range,
                // while preserving input order.
                let x = ((*val as i64) + (i32::MAX as i64) + 1) as u64;
                x.checked_mul(i32::MAX as u64).unwrap()
            })
            .collect()
    });
}

pub fn random_d4<S: Sort>() {
    test_impl::<i32, S>(|size| {
        if size > 3 {
            patterns::random_uniform(size, 0..4)
        } else {
            Vec::new()
        }
    });
}

pub fn random_d256<S: Sort>() {
    test_impl::<i32, S>(|size| {
        if size > 3 {
            patterns::random_uniform(size, 0..256)
        } else {
            Vec::new()
        }
    });
}

pub fn random_z1<S: Sort>() {
    // Great for debugging.
    test_impl::<i32, S>(|size| {
        if size > 3 {
            patterns::random_zipf(size, 1.0)
        } else {
            Vec::new()
        }
    });
}

pub fn random_s95<S: Sort>() {
    test_impl::<i32, S>(|size| {
        if size > 3 {
            patterns::random_sorted(size, 95.0)
        } else {
            Vec::new()
        }
    });
}

pub fn random_binary<S: Sort>() {
    test_impl::<i32, S>(|size| patterns::random_uniform(size, 0..=1));
}

pub fn random_nullable<S: Sort>() {
    test_impl::<Option<i32>, S>(|size| patterns::random_nullable(size, 5));
}

pub fn all_equal<S: Sort>() {
    test_impl::<i32, S>(patterns::all_equal);
}

pub fn ascending<S: Sort>() {
    test_impl::<i32, S>(patterns::ascending);
}

pub fn descending<S: Sort>() {
    test_impl::<i32, S>(patterns::descending);
}

pub fn saw_ascending<S: Sort>() {
    test_impl::<i32, S>(|test_size| {
        patterns::saw_ascending(test_size, ((test_size as f64).log2().round()) as usize)
    });
}

pub fn saw_descending<S: Sort>() {
    test_impl::<i32, S>(|test_size| {
        patterns::saw_descending(test_size, ((test_size as f64).log2().round()) as usize)
    });
}

pub fn saw_mixed<S: Sort>() {
    test_impl::<i32, S>(|test_size| {
        patterns::saw_mixed(test_size, ((test_size as f64).log2().round()) as usize)
    });
}

pub fn pipe_organ<S: Sort>() {
    test_impl::<i32, S>(patterns::pipe_organ);
}

pub fn stability<S: Sort>() {
    let _seed = get_or_init_random_seed::<S>();

    if <S as Sort>::name().contains("unstable") {
        // It would be great to mark the test as skipped, but that isn't possible as of now.
        return;
    }

    let large_range = if cfg!(miri) { 100..102 } else { 500..505 };
    let rounds = if cfg!(miri) { 1 } else { 4 };

    let rand_vals = patterns::random_uniform(5_000, 0..=9);
    let mut rand_idx = 0;

    for len in (2..55).chain(large_range) {
        for _ in 0..rounds {
            let mut counts = [0; 10];

            // Like [(6, 1), (5, 1), (6, 2), ...], the second item counts the occurrences of the
            // first, so sorting by the first item alone must leave the counts ascending.
            let orig: Vec<_> = (0..len)
                .map(|_| {
                    let n = rand_vals[rand_idx];
                    rand_idx = (rand_idx + 1) % rand_vals.len();

                    counts[n as usize] += 1;
                    (n, counts[n as usize])
                })
                .collect();

            assert_stable(&orig, |v| <S as Sort>::sort_by(v, |a, b| a.0.cmp(&b.0)));
        }
    }
}

pub fn stability_with_patterns<S: Sort>() {
    let _seed = get_or_init_random_seed::<S>();

    if <S as Sort>::name().contains("unstable") {
        return;
    }

    let test_fn = |test_size: usize, pattern_fn: fn(usize) -> Vec<i32>| {
        let mut counts = [0i32; 128];

        let orig: Vec<_> = pattern_fn(test_size)
            .iter()
            .map(|val| {
                let n = val.saturating_abs() % counts.len() as i32;
                counts[n as usize] += 1;
                (n, counts[n as usize])
            })
            .collect();

        assert_stable(&orig, |v| <S as Sort>::sort_by(v, |a, b| a.0.cmp(&b.0)));
    };

    test_impl_custom(test_fn);
}

pub fn random_str<S: Sort>() {
    test_impl::<String, S>(|test_size| {
        patterns::random(test_size)
            .into_iter()
            .map(|val| format!("{}", val))
            .collect::<Vec<_>>()
    });
}

pub fn dyn_val<S: Sort>() {
    // Dyn values are fat pointers, something the implementation might have overlooked.
    test_impl::<Rc<dyn DynTrait>, S>(|test_size| {
        patterns::random(test_size)
            .into_iter()
            .map(|val| -> Rc<dyn DynTrait> {
                if val < (i32::MAX / 2) {
                    Rc::new(DynValA { value: val })
                } else {
                    Rc::new(DynValB { value: val })
                }
            })
            .collect::<Vec<Rc<dyn DynTrait>>>()
    });
}

pub fn comp_panic<S: Sort>() {
    // A panicking comparison must leave no duplicated or lost elements behind.

    let seed = get_or_init_random_seed::<S>();

    let test_fn = |test_size: usize, pattern_fn: fn(usize) -> Vec<i32>| {
        // Needs to be non trivial dtor.
        let mut pattern = pattern_fn(test_size)
            .into_iter()
            .map(|val| vec![val, val, val])
            .collect::<Vec<Vec<i32>>>();

        let val = panic::catch_unwind(AssertUnwindSafe(|| {
            <S as Sort>::sort_by(&mut pattern, |a, b| {
                if a[0].abs() < (i32::MAX / test_size as i32) {
                    panic!(
                        "Explicit panic. Seed: {}. test_size: {}. a: {} b: {}",
                        seed, test_size, a[0], b[0]
                    );
                }

                a[0].cmp(&b[0])
            });

            pattern
                .get(pattern.len().saturating_sub(1))
                .map(|val| val[0])
                .unwrap_or(66)
        }));
        if let Err(err) = val {
            // Side effect.
            println!("{:?}", err);
        }
    };

    test_impl_custom(test_fn);
}

fn calc_comps_required<T: Clone, S: Sort>(
    test_data: &[T],
    mut cmp_fn: impl FnMut(&T, &T) -> Ordering,
) -> u32 {
    let mut comp_counter = 0u32;

    let mut test_data_clone = test_data.to_vec();
    <S as Sort>::sort_by(&mut test_data_clone, |a, b| {
        comp_counter += 1;

        cmp_fn(a, b)
    });

    comp_counter
}

pub fn panic_retain_original_set<S: Sort>() {
    let _seed = get_or_init_random_seed::<S>();

    let test_fn = |test_size: usize, pattern_fn: fn(usize) -> Vec<i32>| {
        let mut test_data = pattern_fn(test_size);

        let sum_before: i64 = test_data.iter().map(|x| *x as i64).sum();

        // Panic on any one of the comparisons the sort needs.
        let required_comps = calc_comps_required::<i32, S>(&test_data, |a, b| a.cmp(b));
        if required_comps == 0 {
            return;
        }
        let panic_threshold =
            patterns::random_uniform(1, 1..=required_comps as i32)[0] as usize - 1;

        let mut comp_counter = 0;

        let res = panic::catch_unwind(AssertUnwindSafe(|| {
            <S as Sort>::sort_by(&mut test_data, |a, b| {
                if comp_counter == panic_threshold {
                    panic!();
                }
                comp_counter += 1;

                a.cmp(b)
            });
        }));

        assert!(res.is_err());

        // A different sum means the set of elements changed.
        let sum_after: i64 = test_data.iter().map(|x| *x as i64).sum();
        assert_eq!(sum_before, sum_after);
    };

    test_impl_custom(test_fn);
}

pub fn violate_ord_retain_original_set<S: Sort>() {
    let _seed = get_or_init_random_seed::<S>();

    // A comparison function that violates Ord may leave any order behind, but never a different
    // set of elements.

    let random_orderings = patterns::random_uniform(5_000, 0..3);

    let get_random_0_1_or_2 = |random_idx: &mut usize| {
        let ridx = *random_idx;
        *random_idx = (ridx + 1) % random_orderings.len();

        random_orderings[ridx] as usize
    };

    let mut random_idx_a = 0;
    let mut random_idx_b = 0;

    let mut last_element_a = -1;
    let mut last_element_b = -1;

    let mut rand_counter_b = 0;
    let mut streak_counter_a = 0;

    let mut invalid_ord_comp_functions: Vec<Box<dyn FnMut(&i32, &i32) -> Ordering>> = vec![
        Box::new(|_a, _b| -> Ordering {
            // random
            let idx = get_random_0_1_or_2(&mut random_idx_a);
            [Ordering::Less, Ordering::Equal, Ordering::Greater][idx]
        }),
        Box::new(|_a, _b| -> Ordering {
            // everything is less
            Ordering::Less
        }),
        Box::new(|_a, _b| -> Ordering {
            // everything is equal
            Ordering::Equal
        }),
        Box::new(|_a, _b| -> Ordering {
            // everything is greater
            Ordering::Greater
        }),
        Box::new(|a, b| -> Ordering {
            // equal means less else greater
            if a == b {
                Ordering::Less
            } else {
                Ordering::Greater
            }
        }),
        Box::new(|a, b| -> Ordering {
            // Transitive breaker, remembers the last pair.
            let lea = last_element_a;
            let leb = last_element_b;

            last_element_a = *a;
            last_element_b = *b;

            if *a == lea && *b != leb {
                b.cmp(a)
            } else {
                a.cmp(b)
            }
        }),
        Box::new(|a, b| -> Ordering {
            // Sampled random 1% of comparisons are reversed.
            rand_counter_b += get_random_0_1_or_2(&mut random_idx_b);
            if rand_counter_b >= 100 {
                rand_counter_b = 0;
                b.cmp(a)
            } else {
                a.cmp(b)
            }
        }),
        Box::new(|a, b| -> Ordering {
            // STREAK_LEN comparisons yield a.cmp(b) then STREAK_LEN comparisons less.
            const STREAK_LEN: usize = 50;

            streak_counter_a += 1;
            if streak_counter_a <= STREAK_LEN {
                a.cmp(b)
            } else {
                if streak_counter_a == STREAK_LEN * 2 {
                    streak_counter_a = 0;
                }
                Ordering::Less
            }
        }),
    ];

    for comp_func in &mut invalid_ord_comp_functions {
        let test_fn = |test_size: usize, pattern_fn: fn(usize) -> Vec<i32>| {
            let mut test_data = pattern_fn(test_size);
            let sum_before: i64 = test_data.iter().map(|x| *x as i64).sum();

            // It's ok to panic on Ord violation or to complete.
            let _ = panic::catch_unwind(AssertUnwindSafe(|| {
                <S as Sort>::sort_by(&mut test_data, &mut *comp_func);
            }));

            let sum_after: i64 = test_data.iter().map(|x| *x as i64).sum();
            assert_eq!(sum_before, sum_after);
        };

        test_impl_custom(test_fn);

        if cfg!(miri) {
            break;
        }
    }
}

pub fn sort_vs_sort_by<S: Sort>() {
    let _seed = get_or_init_random_seed::<S>();

    // Ensure that sort and sort_by produce the same result.
    let mut input_normal = [800, 3, -801, 5, -801, -3, 60, 200, 50, 7, 10];
    let expected = [-801, -801, -3, 3, 5, 7, 10, 50, 60, 200, 800];

    let mut input_sort_by = input_normal.to_vec();

    <S as Sort>::sort(&mut input_normal);
    <S as Sort>::sort_by(&mut input_sort_by, |a, b| a.cmp(b));

    assert_eq!(input_normal, expected);
    assert_eq!(input_sort_by, expected);
}

pub fn reverse_by<S: Sort>() {
    let _seed = get_or_init_random_seed::<S>();

    let mut v = patterns::random(TEST_SIZES[TEST_SIZES.len() - 3]);
    let mut expected = v.clone();
    expected.sort_by(|a, b| b.cmp(a));

    <S as Sort>::sort_by(&mut v, |a, b| b.cmp(a));

    assert_eq!(v, expected);
}

pub fn int_edge<S: Sort>() {
    let _seed = get_or_init_random_seed::<S>();

    // Ensure that the sort can handle integer edge cases.
    check_against_std::<i32, S>(&mut [i32::MIN, i32::MAX]);
    check_against_std::<i32, S>(&mut [i32::MAX, i32::MIN]);
    check_against_std::<i32, S>(&mut [i32::MIN, 3]);
    check_against_std::<i32, S>(&mut [i32::MIN, -3]);
    check_against_std::<i32, S>(&mut [i32::MIN, -3, i32::MAX]);
    check_against_std::<i32, S>(&mut [i32::MIN, -3, i32::MAX, i32::MIN, 5]);
    check_against_std::<i32, S>(&mut [i32::MAX, 3, i32::MIN, 5, i32::MIN, -3, 60, 200, 50, 7, 10]);

    check_against_std::<u64, S>(&mut [u64::MIN, u64::MAX]);
    check_against_std::<u64, S>(&mut [u64::MAX, u64::MIN]);
    check_against_std::<u64, S>(&mut [u64::MIN, u64::MAX - 3, u64::MAX, u64::MIN, 5]);

    let mut large = patterns::random(TEST_SIZES[TEST_SIZES.len() - 2]);
    large.push(i32::MAX);
    large.push(i32::MIN);
    large.push(i32::MAX);
    check_against_std::<i32, S>(&mut large);
}

#[doc(hidden)]
#[macro_export]
macro_rules! instantiate_sort_test_impl_inner {
    ($sort_impl:ty, miri_yes, $sort_name:ident) => {
        #[test]
        fn $sort_name() {
            sort_test_tools::tests::$sort_name::<$sort_impl>();
        }
    };
    ($sort_impl:ty, miri_no, $sort_name:ident) => {
        #[test]
        #[cfg(not(miri))]
        fn $sort_name() {
            sort_test_tools::tests::$sort_name::<$sort_impl>();
        }

        #[test]
        #[cfg(miri)]
        #[ignore]
        fn $sort_name() {}
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! instantiate_sort_test_impl {
    ($sort_impl:ty, $([$miri_use:ident, $sort_name:ident]),*) => {
        $(
            sort_test_tools::instantiate_sort_test_impl_inner!($sort_impl, $miri_use, $sort_name);
        )*
    };
}

#[macro_export]
macro_rules! instantiate_sort_tests {
    ($sort_impl:ty) => {
        sort_test_tools::instantiate_sort_test_impl!(
            $sort_impl,
            [miri_no, all_equal],
            [miri_yes, ascending],
            [miri_no, saw_ascending],
            [miri_yes, basic],
            [miri_yes, comp_panic],
            [miri_yes, descending],
            [miri_no, saw_descending],
            [miri_yes, dyn_val],
            [miri_yes, fixed_seed],
            [miri_yes, int_edge],
            [miri_yes, panic_retain_original_set],
            [miri_yes, pipe_organ],
            [miri_yes, random],
            [miri_no, random_binary],
            [miri_yes, random_d256],
            [miri_yes, random_d4],
            [miri_yes, random_nullable],
            [miri_yes, random_s95],
            [miri_no, random_str],
            [miri_yes, random_type_u64],
            [miri_yes, random_z1],
            [miri_yes, reverse_by],
            [miri_yes, saw_mixed],
            [miri_yes, sort_vs_sort_by],
            [miri_yes, stability],
            [miri_no, stability_with_patterns],
            [miri_yes, violate_ord_retain_original_set]
        );
    };
}
