//! Loading uploaded data files into [`nlg_model::RawTable`]s.

pub mod csv_table;
pub mod error;

pub use csv_table::{
    DEFAULT_MAX_FILE_SIZE_BYTES, IngestOptions, SUPPORTED_FORMATS, check_upload, parse_csv_str,
    parse_delimited, read_csv_table, read_csv_table_with_options, write_csv_table,
};
pub use error::{IngestError, Result};
