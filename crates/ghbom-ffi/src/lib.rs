//! # Greenhouse BOM FFI
//!
//! Python 綁定層（PyO3）

use pyo3::prelude::*;

pub mod python;

/// Python 模組註冊
#[pymodule]
fn ghbom_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(python::calculate_clamps, m)?)?;
    m.add_class::<python::PyClampCalculator>()?;
    m.add_class::<python::PyEngineConfig>()?;
    Ok(())
}
