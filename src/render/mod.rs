//! Drawing surfaces: the capability trait, the `vello_cpu` raster backend and a recorder.

pub(crate) mod cpu;
pub(crate) mod frame;
pub(crate) mod recording;
pub(crate) mod surface;
