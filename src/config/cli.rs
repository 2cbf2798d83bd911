use crate::core::{OutputSink, Storage};
use crate::utils::error::Result;
use std::fs;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct LocalStorage {
    base_path: Option<String>,
}

impl LocalStorage {
    pub fn new() -> Self {
        Self { base_path: None }
    }

    /// Resolves relative input paths against `base_path`.
    pub fn with_base(base_path: String) -> Self {
        Self {
            base_path: Some(base_path),
        }
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let data = match &self.base_path {
            Some(base) => fs::read(Path::new(base).join(path))?,
            None => fs::read(path)?,
        };
        Ok(data)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn write_output(&self, data: &[u8]) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(data)?;
        stdout.flush()?;
        Ok(())
    }
}
