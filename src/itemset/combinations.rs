/// Calls `callback` once for every size-`k` combination of `items`, in
/// lexicographic order of positions. Nothing is emitted when `k` is 0 or
/// exceeds `items.len()`.
pub fn for_each_combination<T, F>(items: &[T], k: usize, mut callback: F)
where
    T: Clone,
    F: FnMut(&[T]),
{
    if k == 0 || k > items.len() {
        return;
    }
    let mut current = Vec::with_capacity(k);
    combinations_recursive(items, k, 0, &mut current, &mut callback);
}

fn combinations_recursive<T, F>(
    items: &[T],
    k: usize,
    start: usize,
    current: &mut Vec<T>,
    callback: &mut F,
) where
    T: Clone,
    F: FnMut(&[T]),
{
    if current.len() == k {
        callback(current);
        return;
    }

    // Leave room for the items still needed to reach size k.
    let last_start = items.len() - (k - current.len());
    for i in start..=last_start {
        current.push(items[i].clone());
        combinations_recursive(items, k, i + 1, current, callback);
        current.pop();
    }
}

/// Number of size-`k` combinations of `n` items, saturating on overflow.
pub fn combination_count(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut count: usize = 1;
    for i in 0..k {
        count = match count.checked_mul(n - i) {
            Some(product) => product / (i + 1),
            None => return usize::MAX,
        };
    }
    count
}
