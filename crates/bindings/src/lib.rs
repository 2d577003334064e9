//! Python bindings for the cache simulator.
//!
//! Built as the `_core` extension module. Exposes the cache model as the
//! `Cache` class so traces can be replayed and geometries swept from Python.

use pyo3::prelude::*;

mod cache;

pub use crate::cache::PyCache;

/// Registers the simulator classes and functions on `m`.
pub fn register_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCache>()?;
    m.add_function(wrap_pyfunction!(cache::simulate, m)?)?;
    Ok(())
}

#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    register_module(m)
}
