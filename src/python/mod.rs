//! Python bindings for the snooker scorer.
//!
//! # Quick Start
//!
//! ```python
//! import snooker_scorer as snooker
//!
//! frame = snooker.Frame("ronnie", "judd")
//! frame.pot(1)   # red
//! frame.pot(7)   # black
//! assert frame.current_break() == 8
//! assert frame.points_remaining() == 14 + 14 * 7 + 27
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::error::FrameError;

mod py_frame;

pub use py_frame::*;

impl From<FrameError> for PyErr {
    fn from(err: FrameError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// snooker_scorer: scoring and turn tracking for a snooker frame.
#[pymodule]
fn snooker_scorer(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyFrame>()?;
    m.add_class::<PyRefereedFrame>()?;

    m.add("FOUL_VALUE", crate::core::FOUL_VALUE)?;
    m.add("RED_COUNT", crate::core::RED_COUNT)?;
    m.add("TOTAL_COLOURED_VALUES", crate::core::TOTAL_COLOURED_VALUES)?;

    Ok(())
}
