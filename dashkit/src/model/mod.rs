//! Dynamic values, rows and file metadata shared by forms and tables.

mod file;
mod row;
mod value;

pub use file::*;
pub use row::*;
pub use value::*;
