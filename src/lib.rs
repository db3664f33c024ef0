// Studypack: study material from extracted document text.
//
// This is the library root. Each module corresponds to a stage of the
// text-to-study-pack pipeline.

pub mod config;
pub mod output;
pub mod pipeline;
pub mod source;
pub mod study;
pub mod text;

pub use pipeline::{Document, Pipeline};
pub use study::pack::StudyPack;
