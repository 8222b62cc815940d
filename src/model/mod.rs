pub mod matrix;
pub mod profile;
pub mod summary;
