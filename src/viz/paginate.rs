//! Dataset pagination: split a row range into chart pages.

use std::ops::Range;

/// Split `n` dataset rows into consecutive pages of at most `max_per_plot`
/// rows each.
///
/// The result partitions `0..n` in order: page sizes sum to `n`, every page
/// except possibly the last holds exactly `max_per_plot` rows, and
/// concatenating the pages reproduces the original row order. Pure function
/// of `(n, max_per_plot)`.
///
/// `max_per_plot` must be non-zero; callers validate it before reaching
/// this point.
pub fn pages(n: usize, max_per_plot: usize) -> Vec<Range<usize>> {
    debug_assert!(max_per_plot > 0);
    if n <= max_per_plot {
        return if n == 0 { Vec::new() } else { vec![0..n] };
    }
    let mut out = Vec::with_capacity(n.div_ceil(max_per_plot));
    let mut start = 0;
    while start < n {
        let end = (start + max_per_plot).min(n);
        out.push(start..end);
        start = end;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::pages;

    #[test]
    fn single_page_when_under_threshold() {
        assert_eq!(pages(10, 25), vec![0..10]);
        assert_eq!(pages(25, 25), vec![0..25]);
    }

    #[test]
    fn remainder_goes_on_last_page() {
        assert_eq!(pages(30, 25), vec![0..25, 25..30]);
        assert_eq!(pages(75, 25), vec![0..25, 25..50, 50..75]);
    }

    #[test]
    fn zero_rows_means_no_pages() {
        assert!(pages(0, 25).is_empty());
    }

    #[test]
    fn partition_laws_hold() {
        for n in [1usize, 7, 24, 25, 26, 49, 50, 51, 200] {
            for max in [1usize, 2, 5, 25, 100] {
                let ps = pages(n, max);
                let total: usize = ps.iter().map(|p| p.len()).sum();
                assert_eq!(total, n, "sizes must sum to n for n={n} max={max}");
                assert!(ps.iter().all(|p| p.len() <= max));
                let flat: Vec<usize> = ps.iter().flat_map(|p| p.clone()).collect();
                assert_eq!(flat, (0..n).collect::<Vec<_>>());
            }
        }
    }
}
