pub mod adjust;
pub mod convert;
pub mod info;
