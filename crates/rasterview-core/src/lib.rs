pub mod error;
pub mod consts;
pub mod raster;
pub mod adjust;
pub mod io;
pub mod preset;
