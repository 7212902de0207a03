// Tournament arg-best over a small slice.
//
// Used to pick the best child among the A children of a heap node. Pairs are
// compared level by level so neighbouring comparisons don't depend on each
// other.
//
// 0   1 2   3 4   5
// *   * *   * *   *
//  \ /   \ /   \ /
//   *     *     *
//    \   /     /
//      *      /
//       \    /
//         *

/// Core comparison and index selection. The left side wins ties.
#[inline(always)]
#[must_use]
fn fight<T, F>(a: &[T], l: usize, r: usize, better_or_equal: &F) -> usize
where
    F: Fn(&T, &T) -> bool,
{
    if better_or_equal(&a[l], &a[r]) { l } else { r }
}

/// Finds the index of the best element, by a "better or equal" relation.
///
/// On ties the left-most element wins.
///
/// ```
/// use reach::derank::derank_by;
/// let a = [5, 3, 8, 3, 9];
/// assert_eq!(derank_by(&a, |x, y| x <= y), 1);
/// assert_eq!(derank_by(&a, |x, y| x >= y), 4);
/// assert_eq!(derank_by(&[42], |x: &i32, y: &i32| x <= y), 0);
/// ```
#[inline(always)]
#[must_use]
pub fn derank_by<T, F>(a: &[T], better_or_equal: F) -> usize
where
    F: Fn(&T, &T) -> bool,
{
    debug_assert!(!a.is_empty(), "Can't rank an empty slice");
    tournament(a, 0, a.len(), &better_or_equal)
}

/// Winner within `a[from..to]`.
fn tournament<T, F>(a: &[T], from: usize, to: usize, better_or_equal: &F) -> usize
where
    F: Fn(&T, &T) -> bool,
{
    match to - from {
        1 => from,
        2 => fight(a, from, from + 1, better_or_equal),
        len => {
            let mid = from + len.div_ceil(2);
            fight(
                a,
                tournament(a, from, mid, better_or_equal),
                tournament(a, mid, to, better_or_equal),
                better_or_equal,
            )
        }
    }
}

/// Finds the index of the smallest element.
///
/// ```
/// use reach::derank::derank;
/// assert_eq!(derank(&[4, 2, 7, 1, 1, 9, 3, 8]), 3);
/// ```
#[inline(always)]
#[must_use]
pub fn derank<T: PartialOrd>(a: &[T]) -> usize {
    derank_by(a, |l, r| l <= r)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_linear_scan() {
        let data = [9u32, 4, 4, 7, 1, 8, 1, 3, 6, 2, 0, 5, 0];
        for len in 1..=data.len() {
            let a = &data[..len];
            let min = *a.iter().min().unwrap();
            let first_min = a.iter().position(|&x| x == min).unwrap();
            assert_eq!(derank(a), first_min, "len={len}");

            let max = *a.iter().max().unwrap();
            let first_max = a.iter().position(|&x| x == max).unwrap();
            assert_eq!(derank_by(a, |l, r| l >= r), first_max, "len={len}");
        }
    }
}
