use radixsorter::prelude::*;
use rand::Rng;
use std::time::Instant;

#[test]
fn test_sort_1m() {
    let count = 1_000_000;
    println!("Generating {} random elements...", count);

    let mut rng = rand::rng();
    let input: Vec<i64> = (0..count)
        .map(|_| rng.random_range(-1_000_000_000..1_000_000_000))
        .collect();

    println!("Sorting {} elements...", count);
    let start = Instant::now();
    let sorted = radix_sort(&input);
    let duration = start.elapsed();
    println!("Sorted 1M elements in {:?}", duration);

    assert_eq!(sorted.len(), count);

    for i in 0..count - 1 {
        assert!(sorted[i] <= sorted[i + 1], "Sort failed at index {}", i);
    }
}

#[test]
fn test_sort_1m_wide_keys_stable() {
    let count = 1_000_000;
    let mut rng = rand::rng();

    // Few distinct wide keys, many ties.
    let keys: Vec<u128> = (0..64).map(|_| rng.random::<u128>()).collect();
    let input: Vec<(u128, u32)> = (0..count as u32)
        .map(|tag| (keys[rng.random_range(0..keys.len())], tag))
        .collect();

    let sorted = radix_sort_by_key(input, |&(key, _)| key);

    assert_eq!(sorted.len(), count);
    for (i, pair) in sorted.windows(2).enumerate() {
        let (a, b) = (pair[0], pair[1]);
        assert!(a.0 < b.0 || (a.0 == b.0 && a.1 < b.1), "Order broken at index {}", i);
    }
}

#[test]
#[ignore]
fn test_sort_100m() {
    // WARNING: This test requires significant RAM (~16GB).
    // 100M elements * 32 bytes per keyed pair, plus input, output and 2^27 buckets.
    let count = 100_000_000;
    println!("Generating {} random elements... (Expect high RAM usage)", count);

    let mut rng = rand::rng();
    let input: Vec<u64> = (0..count).map(|_| rng.random()).collect();

    println!("Sorting 100M elements...");
    let start = Instant::now();
    let sorted = radix_sort(&input);
    let duration = start.elapsed();
    println!("Sorted 100M elements in {:?}", duration);

    assert_eq!(sorted.len(), count);

    // Verify sample
    for i in (0..count - 1).step_by(10_000) {
        assert!(sorted[i] <= sorted[i + 1], "Sort failed at index {}", i);
    }
}
