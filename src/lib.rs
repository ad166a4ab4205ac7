use pyo3::prelude::*;

pub mod api;
pub mod db;
pub mod parsing;
pub mod services;

/// Antaran Rust Backend - delivery history analytics for the courier dashboard
#[pymodule]
fn antaran_rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    api::register_api_functions(m)?;
    Ok(())
}
