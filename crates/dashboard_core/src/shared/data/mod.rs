pub mod source;

pub use source::{JsonFileSource, RecordSource, StaticSource};
