use super::utils::FrequentItemsets;
use super::Item;
use crate::error::Result;

/// Records every `k`-subset of a single-path tree, each extended by `alpha`.
///
/// The support of a subset is the smallest count among its nodes.
pub fn generate_combinations_from_path<I: Item>(
    path: &[(I, usize)],
    k: usize,
    alpha: &[I],
    result: &mut FrequentItemsets<I>,
) -> Result<()> {
    if k == 0 || k > path.len() {
        return Ok(());
    }

    let indices: Vec<usize> = (0..path.len()).collect();
    let mut callback = |combination: &[usize]| {
        let mut pattern = alpha.to_vec();
        let mut support = usize::MAX;
        for &idx in combination {
            let (item, count) = &path[idx];
            pattern.push(item.clone());
            support = support.min(*count);
        }
        result.record(pattern, support)
    };
    generate_combinations_recursive(&indices, k, 0, &mut Vec::with_capacity(k), &mut callback)
}

/// Records all non-empty subsets of `path`.
pub fn generate_all_combinations<I: Item>(
    path: &[(I, usize)],
    alpha: &[I],
    result: &mut FrequentItemsets<I>,
) -> Result<()> {
    for k in 1..=path.len() {
        generate_combinations_from_path(path, k, alpha, result)?;
    }
    Ok(())
}

pub fn generate_combinations_recursive<F>(
    items: &[usize],
    k: usize,
    start: usize,
    current: &mut Vec<usize>,
    callback: &mut F,
) -> Result<()>
where
    F: FnMut(&[usize]) -> Result<()>,
{
    if current.len() == k {
        return callback(current);
    }

    for i in start..items.len() {
        current.push(items[i]);
        generate_combinations_recursive(items, k, i + 1, current, callback)?;
        current.pop();
    }
    Ok(())
}
