use lifestep_lib::{clamp_workers, partition, rounded_division, RowRange};

#[test]
fn rounded_division_ties() {
    assert_eq!(rounded_division(5, 2), 3);
    assert_eq!(rounded_division(4, 2), 2);
    assert_eq!(rounded_division(7, 1), 7);
    assert_eq!(rounded_division(10, 4), 3);
    assert_eq!(rounded_division(9, 4), 2);
    assert_eq!(rounded_division(13, 5), 3);
    assert_eq!(rounded_division(11, 5), 2);
}

#[test]
fn covers_all_rows() {
    for size in 1..=64 {
        for workers in 1..=size {
            let ranges = partition(size, workers);
            assert_eq!(ranges.len(), workers);
            assert_eq!(ranges[0].start, 0);
            assert_eq!(ranges[workers - 1].end, size);
            for pair in ranges.windows(2) {
                assert_eq!(pair[0].end, pair[1].start, "size {}, {} workers", size, workers);
            }
            for range in &ranges {
                assert!(!range.is_empty(), "size {}, {} workers", size, workers);
            }
            let total: usize = ranges.iter().map(RowRange::len).sum();
            assert_eq!(total, size);
        }
    }
}

#[test]
fn last_worker_takes_the_rest() {
    assert_eq!(
        partition(10, 3),
        vec![RowRange::new(0, 4), RowRange::new(4, 8), RowRange::new(8, 10)]
    );
    assert_eq!(
        partition(10, 4),
        vec![
            RowRange::new(0, 3),
            RowRange::new(3, 6),
            RowRange::new(6, 9),
            RowRange::new(9, 10),
        ]
    );
    assert_eq!(partition(5, 5), (0..5).map(|i| RowRange::new(i, i + 1)).collect::<Vec<_>>());
}

#[test]
fn falls_back_to_floor() {
    // Rounding gives 2 rows each, which would leave -1 rows for the last worker.
    let ranges = partition(9, 6);
    assert_eq!(ranges.iter().map(RowRange::len).collect::<Vec<_>>(), vec![1, 1, 1, 1, 1, 4]);
}

#[test]
fn clamps_workers() {
    assert_eq!(clamp_workers(4, 0), 1);
    assert_eq!(clamp_workers(4, 9), 4);
    assert_eq!(partition(3, 10).len(), 3);
    assert_eq!(partition(3, 0), vec![RowRange::new(0, 3)]);
}
