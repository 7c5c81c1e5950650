//! Pure table geometry: the 4:3 frame, crisp stroke widths and the corner-target solve.

pub(crate) mod frame;
pub(crate) mod table;
