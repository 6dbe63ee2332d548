//! Input boundary. Record sources implementing RecordSource.

pub mod csv_source;
pub mod json_source;
pub mod sample;

pub use csv_source::CsvDirSource;
pub use json_source::JsonFileSource;
pub use sample::SampleSource;
