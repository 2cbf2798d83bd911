pub mod etl;
pub mod extractor;
pub mod pipeline;

pub use crate::domain::model::{Harvest, SourceText};
pub use crate::domain::ports::{ConfigProvider, OutputSink, Pipeline, Storage};
pub use crate::utils::error::Result;
