mod extractor;
pub mod normalize;

pub use extractor::{ProbeStrategy, RecordExtractor};
