use crate::dataset::transactions_from_dense;
use crate::{fp_growth_algorithm, MinSupport};
use numpy::ndarray::Array2;
use numpy::{IntoPyArray, PyArray1, PyArray2, PyReadonlyArray2};
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

type LevelArrays<'py> = (Bound<'py, PyArray2<usize>>, Bound<'py, PyArray1<usize>>);

/// Mines a 0/1 transaction matrix; returns one `(itemsets, supports)` pair
/// per itemset size.
#[pyfunction]
#[pyo3(name = "fp_growth")]
fn fp_growth_py<'py>(
    py: Python<'py>,
    transactions: PyReadonlyArray2<'py, i32>,
    min_support: f64,
) -> PyResult<Vec<LevelArrays<'py>>> {
    let min_support =
        MinSupport::from_fraction(min_support).map_err(|e| PyValueError::new_err(e.to_string()))?;
    let transactions = transactions_from_dense(transactions.as_array());
    let frequent = fp_growth_algorithm(&transactions, min_support)
        .map_err(|e| PyRuntimeError::new_err(e.to_string()))?;

    let mut result = Vec::new();

    for level in frequent.levels() {
        if level.is_empty() {
            continue;
        }

        let itemset_size = level.itemset_size;
        let num_itemsets = level.len();
        let mut data = Vec::with_capacity(num_itemsets * itemset_size);
        let mut supports = Vec::with_capacity(num_itemsets);

        for (itemset, support) in level.iter() {
            data.extend_from_slice(itemset);
            supports.push(support);
        }

        let array = Array2::from_shape_vec((num_itemsets, itemset_size), data)
            .map_err(|_| PyValueError::new_err("Failed to create array"))?;

        result.push((array.into_pyarray(py), supports.into_pyarray(py)));
    }

    Ok(result)
}

#[pymodule]
fn fpminer(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(fp_growth_py, m)?)?;
    Ok(())
}
