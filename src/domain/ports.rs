use crate::domain::model::{Harvest, OutputFormat, Profile, SourceText};
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
}

pub trait OutputSink {
    fn write_output(&self, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn profile(&self) -> Profile;
    fn output_format(&self) -> OutputFormat;
}

pub trait Pipeline {
    fn extract(&self) -> Result<SourceText>;
    fn transform(&self, source: SourceText) -> Result<Harvest>;
    fn load(&self, harvest: Harvest) -> Result<usize>;
}
