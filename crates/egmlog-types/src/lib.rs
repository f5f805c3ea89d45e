pub mod entry;
pub mod record;
pub mod row;

pub use entry::*;
pub use record::*;
pub use row::*;
