pub mod field;
pub mod traits;
