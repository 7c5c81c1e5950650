//! Hand-off of rendered pixels to image files.

pub(crate) mod png;
