mod repository;

pub use repository::*;

/// Field separator of the data file.
pub const FIELD_SEPARATOR: u8 = b'\t';

/// Number of fields in a data file line. Extra separators fold into the last field.
pub const FIELD_COUNT: usize = 4;
