//! Cache Python binding.
//!
//! Wraps an owned `CacheModel`: construct from `(s, E, b)`, issue single
//! accesses, replay whole trace files, and read the counters.

use std::path::PathBuf;

use cachesim::cache::CacheModel;
use cachesim::trace;
use pyo3::exceptions::{PyOSError, PyValueError};
use pyo3::prelude::*;

/// Python-exposed cache: wraps the core `CacheModel`.
#[pyclass(name = "Cache")]
pub struct PyCache {
    pub inner: CacheModel,
}

#[pymethods]
impl PyCache {
    /// Creates an empty cache with `2^s` sets of `e` lines and `2^b`-byte blocks.
    ///
    /// # Errors
    /// Raises `ValueError` if the geometry is invalid.
    #[new]
    #[pyo3(signature = (s, e, b))]
    fn new(s: u32, e: usize, b: u32) -> PyResult<Self> {
        let inner = CacheModel::from_parts(s, e, b)
            .map_err(|err| PyValueError::new_err(err.to_string()))?;
        Ok(PyCache { inner })
    }

    /// Simulates one access and returns `"hit"`, `"miss"` or `"miss eviction"`.
    fn access(&mut self, address: u64) -> String {
        self.inner.access(address).to_string()
    }

    /// Whether the block holding `address` is resident.
    fn contains(&self, address: u64) -> bool {
        self.inner.contains(address)
    }

    /// Replays a trace file and returns the cumulative `(hits, misses, evictions)`.
    ///
    /// # Errors
    /// Raises `OSError` if the trace cannot be opened or read.
    fn replay(&mut self, path: PathBuf) -> PyResult<(u64, u64, u64)> {
        trace::replay_file(&mut self.inner, &path, |_, _| {})
            .map_err(|err| PyOSError::new_err(err.to_string()))?;
        Ok(self.counts())
    }

    #[getter]
    fn hits(&self) -> u64 {
        self.inner.hits()
    }

    #[getter]
    fn misses(&self) -> u64 {
        self.inner.misses()
    }

    #[getter]
    fn evictions(&self) -> u64 {
        self.inner.evictions()
    }

    fn __repr__(&self) -> String {
        let g = self.inner.geometry();
        format!(
            "Cache(s={}, E={}, b={}, hits={}, misses={}, evictions={})",
            g.set_bits(),
            g.lines_per_set(),
            g.block_bits(),
            self.inner.hits(),
            self.inner.misses(),
            self.inner.evictions()
        )
    }
}

impl PyCache {
    fn counts(&self) -> (u64, u64, u64) {
        (self.inner.hits(), self.inner.misses(), self.inner.evictions())
    }
}

/// Builds a fresh cache, replays `path` through it, and returns
/// `(hits, misses, evictions)`.
#[pyfunction]
#[pyo3(signature = (path, s, e, b))]
pub fn simulate(path: PathBuf, s: u32, e: usize, b: u32) -> PyResult<(u64, u64, u64)> {
    let mut cache = PyCache::new(s, e, b)?;
    cache.replay(path)
}
