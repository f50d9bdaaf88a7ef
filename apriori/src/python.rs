use crate::levelwise::{AprioriMiner, MiningError, TransactionStore};
use numpy::ndarray::Array2;
use numpy::{IntoPyArray, PyArray2, PyReadonlyArray2};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

impl From<MiningError> for PyErr {
    fn from(err: MiningError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// Largest frequent itemsets of token transactions.
#[pyfunction]
#[pyo3(name = "apriori")]
fn apriori_py(transactions: Vec<Vec<String>>, min_support: f64) -> PyResult<Vec<Vec<String>>> {
    Ok(crate::levelwise::mine(transactions, min_support)?)
}

/// Largest frequent itemsets of a binary transaction matrix, one row of column
/// indices per itemset.
#[pyfunction]
#[pyo3(name = "apriori_matrix")]
fn apriori_matrix_py<'py>(
    py: Python<'py>,
    transactions: PyReadonlyArray2<'py, i32>,
    min_support: f64,
) -> PyResult<Bound<'py, PyArray2<usize>>> {
    let store = TransactionStore::from_matrix(transactions.as_array());
    let level = AprioriMiner::default().mine(&store, min_support)?;

    let itemset_size = level.itemset_size;
    let mut data = Vec::with_capacity(level.len() * itemset_size);
    for itemset in level.itemsets() {
        data.extend_from_slice(itemset.items());
    }

    let array = Array2::from_shape_vec((level.len(), itemset_size), data)
        .map_err(|_| PyValueError::new_err("Failed to create array"))?;

    Ok(array.into_pyarray_bound(py))
}

#[pymodule]
fn apriori(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(apriori_py, m)?)?;
    m.add_function(wrap_pyfunction!(apriori_matrix_py, m)?)?;
    Ok(())
}
