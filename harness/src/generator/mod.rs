pub mod catalog;
pub mod cursor;
pub mod kernels;
pub mod profile;
