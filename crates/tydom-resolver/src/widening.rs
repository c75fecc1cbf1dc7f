//! Implicit numeric widening.
//!
//! The host language's full implicit-widening table as a pure function over
//! well-known qualified names. Identity is not widening; `widens_to` is
//! strict.

use tydom_model::well_known as wk;

/// True when a value of numeric type `source` implicitly widens to
/// `target`. Both are qualified names; anything outside the table answers
/// false.
pub fn widens_to(source: &str, target: &str) -> bool {
    let targets: &[&str] = match source {
        wk::INT8 => &[wk::INT16, wk::INT32, wk::INT64, wk::FLOAT32, wk::FLOAT64, wk::DECIMAL],
        wk::UINT8 => &[
            wk::INT16,
            wk::UINT16,
            wk::INT32,
            wk::UINT32,
            wk::INT64,
            wk::UINT64,
            wk::FLOAT32,
            wk::FLOAT64,
            wk::DECIMAL,
        ],
        wk::INT16 => &[wk::INT32, wk::INT64, wk::FLOAT32, wk::FLOAT64, wk::DECIMAL],
        wk::UINT16 => &[
            wk::INT32,
            wk::UINT32,
            wk::INT64,
            wk::UINT64,
            wk::FLOAT32,
            wk::FLOAT64,
            wk::DECIMAL,
        ],
        wk::INT32 => &[wk::INT64, wk::FLOAT32, wk::FLOAT64, wk::DECIMAL],
        wk::UINT32 => &[wk::INT64, wk::UINT64, wk::FLOAT32, wk::FLOAT64, wk::DECIMAL],
        wk::INT64 | wk::UINT64 => &[wk::FLOAT32, wk::FLOAT64, wk::DECIMAL],
        wk::CHAR => &[
            wk::UINT16,
            wk::INT32,
            wk::UINT32,
            wk::INT64,
            wk::UINT64,
            wk::FLOAT32,
            wk::FLOAT64,
            wk::DECIMAL,
        ],
        wk::FLOAT32 => &[wk::FLOAT64],
        _ => return false,
    };
    targets.contains(&target)
}

#[cfg(test)]
#[path = "tests/widening_tests.rs"]
mod widening_tests;
