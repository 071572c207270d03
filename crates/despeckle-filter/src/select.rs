//! Order-statistic selection
//!
//! Partition-based selection (quickselect) over a mutable buffer. Finds the
//! k-th smallest element in expected linear time without fully sorting,
//! which keeps the median reducer cheap for large windows.

/// Select the `k`-th smallest value of `a` (0-based rank).
///
/// The slice is partially reordered in place: after the call, `a[k]` would
/// hold a valid `k`-th order statistic, with at least `k` elements `<=` the
/// result and at least `len - k` elements `>=` it. Ties are broken
/// arbitrarily.
///
/// Each round picks a median-of-three pivot from the low, middle and high
/// elements, partitions with bidirectional swap-based scanning, then
/// narrows to the side containing rank `k`. Ranges of one or two elements
/// terminate directly.
///
/// # Panics
///
/// Panics if `a` is empty or `k >= a.len()`.
pub fn select_kth(a: &mut [f64], k: usize) -> f64 {
    assert!(k < a.len(), "rank {} out of range for {} elements", k, a.len());

    let mut low = 0usize;
    let mut high = a.len() - 1;
    loop {
        if high <= low {
            return a[k];
        }
        if high == low + 1 {
            if a[low] > a[high] {
                a.swap(low, high);
            }
            return a[k];
        }

        // Median-of-three: order low/middle/high, leave the pivot at a[low]
        // and a known lower bound at a[low + 1] as the left scan sentinel.
        let middle = low + (high - low) / 2;
        if a[middle] > a[high] {
            a.swap(middle, high);
        }
        if a[low] > a[high] {
            a.swap(low, high);
        }
        if a[middle] > a[low] {
            a.swap(middle, low);
        }
        a.swap(middle, low + 1);

        // Bidirectional scan; a[low] (pivot) and a[high] bound both loops.
        let mut ll = low + 1;
        let mut hh = high;
        loop {
            ll += 1;
            while a[low] > a[ll] {
                ll += 1;
            }
            hh -= 1;
            while a[hh] > a[low] {
                hh -= 1;
            }
            if hh < ll {
                break;
            }
            a.swap(ll, hh);
        }

        // Put the pivot into its final position.
        a.swap(low, hh);

        if hh <= k {
            low = ll;
        }
        if hh >= k {
            if hh == 0 {
                // Pivot settled at the far left edge; rank 0 is resolved.
                return a[k];
            }
            high = hh - 1;
        }
    }
}
