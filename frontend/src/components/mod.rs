pub mod expenses;
pub mod forms;
pub mod header;

pub use header::Header;
