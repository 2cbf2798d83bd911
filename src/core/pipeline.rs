use crate::core::extractor::Extractor;
use crate::core::{ConfigProvider, Harvest, OutputSink, Pipeline, SourceText, Storage};
use crate::domain::model::OutputFormat;
use crate::utils::error::{Result, ScanError};

pub struct ImagePipeline<S: Storage, O: OutputSink, C: ConfigProvider> {
    storage: S,
    sink: O,
    config: C,
    extractor: Extractor,
}

impl<S: Storage, O: OutputSink, C: ConfigProvider> ImagePipeline<S, O, C> {
    pub fn new(storage: S, sink: O, config: C) -> Result<Self> {
        let extractor = Extractor::new(config.profile())?;
        Ok(Self {
            storage,
            sink,
            config,
            extractor,
        })
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn extractor(&self) -> &Extractor {
        &self.extractor
    }
}

/// Renders accepted URLs in the requested output format.
pub fn render(urls: &[String], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Lines => Ok(urls.iter().map(|url| format!("{}\n", url)).collect()),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(urls)?;
            json.push('\n');
            Ok(json)
        }
    }
}

impl<S: Storage, O: OutputSink, C: ConfigProvider> Pipeline for ImagePipeline<S, O, C> {
    fn extract(&self) -> Result<SourceText> {
        let path = self.config.input_path();
        tracing::debug!("Reading input file: {}", path);

        let bytes = self.storage.read_file(path).map_err(|e| match e {
            ScanError::IoError(source) => ScanError::InputUnavailable {
                path: path.to_string(),
                source,
            },
            other => other,
        })?;

        let source = SourceText::from_bytes(path, &bytes);
        if source.lossy {
            tracing::debug!("Input contained invalid UTF-8, replaced undecodable bytes");
        }
        tracing::debug!("Loaded {} bytes from {}", bytes.len(), path);

        Ok(source)
    }

    fn transform(&self, source: SourceText) -> Result<Harvest> {
        let harvest = self.extractor.harvest(&source.text);
        tracing::debug!(
            "Examined {} candidates, kept {} URLs ({:?})",
            harvest.candidates_examined,
            harvest.urls.len(),
            harvest.origin
        );
        Ok(harvest)
    }

    fn load(&self, harvest: Harvest) -> Result<usize> {
        if harvest.urls.is_empty() && self.config.output_format() == OutputFormat::Lines {
            return Ok(0);
        }

        let rendered = render(&harvest.urls, self.config.output_format())?;
        self.sink.write_output(rendered.as_bytes())?;
        Ok(harvest.urls.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{HarvestOrigin, Profile};
    use std::cell::RefCell;
    use std::collections::HashMap;

    struct MockStorage {
        files: HashMap<String, Vec<u8>>,
    }

    impl MockStorage {
        fn with_file(path: &str, data: &[u8]) -> Self {
            let mut files = HashMap::new();
            files.insert(path.to_string(), data.to_vec());
            Self { files }
        }
    }

    impl Storage for MockStorage {
        fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            self.files.get(path).cloned().ok_or_else(|| {
                ScanError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }
    }

    #[derive(Default)]
    struct MockSink {
        written: RefCell<Vec<u8>>,
    }

    impl MockSink {
        fn contents(&self) -> String {
            String::from_utf8(self.written.borrow().clone()).unwrap()
        }
    }

    impl OutputSink for &MockSink {
        fn write_output(&self, data: &[u8]) -> Result<()> {
            self.written.borrow_mut().extend_from_slice(data);
            Ok(())
        }
    }

    struct MockConfig {
        input_path: String,
        profile: Profile,
        output_format: OutputFormat,
    }

    impl MockConfig {
        fn new(input_path: &str) -> Self {
            Self {
                input_path: input_path.to_string(),
                profile: Profile::Standard,
                output_format: OutputFormat::Lines,
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn input_path(&self) -> &str {
            &self.input_path
        }

        fn profile(&self) -> Profile {
            self.profile
        }

        fn output_format(&self) -> OutputFormat {
            self.output_format
        }
    }

    #[test]
    fn test_extract_missing_file_is_input_unavailable() {
        let storage = MockStorage::with_file("other.html", b"");
        let sink = MockSink::default();
        let pipeline = ImagePipeline::new(storage, &sink, MockConfig::new("prado.html")).unwrap();

        match pipeline.extract() {
            Err(ScanError::InputUnavailable { path, source }) => {
                assert_eq!(path, "prado.html");
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected InputUnavailable, got {:?}", other),
        }
    }

    #[test]
    fn test_extract_tolerates_invalid_utf8() {
        let storage = MockStorage::with_file("prado.html", b"\xc3(https://a.carwow.co.uk/a.jpg");
        let sink = MockSink::default();
        let pipeline = ImagePipeline::new(storage, &sink, MockConfig::new("prado.html")).unwrap();

        let source = pipeline.extract().unwrap();
        assert!(source.lossy);

        let harvest = pipeline.transform(source).unwrap();
        assert_eq!(harvest.urls, vec!["https://a.carwow.co.uk/a.jpg"]);
    }

    #[test]
    fn test_load_writes_one_url_per_line() {
        let storage = MockStorage::with_file("prado.html", b"");
        let sink = MockSink::default();
        let pipeline = ImagePipeline::new(storage, &sink, MockConfig::new("prado.html")).unwrap();

        let harvest = Harvest {
            urls: vec![
                "https://a.carwow.co.uk/a.jpg".to_string(),
                "https://hips.hearstapps.com/b.png".to_string(),
            ],
            origin: HarvestOrigin::Filtered,
            candidates_examined: 2,
        };

        assert_eq!(pipeline.load(harvest).unwrap(), 2);
        assert_eq!(
            sink.contents(),
            "https://a.carwow.co.uk/a.jpg\nhttps://hips.hearstapps.com/b.png\n"
        );
    }

    #[test]
    fn test_load_empty_harvest_writes_nothing() {
        let storage = MockStorage::with_file("prado.html", b"");
        let sink = MockSink::default();
        let pipeline = ImagePipeline::new(storage, &sink, MockConfig::new("prado.html")).unwrap();

        let harvest = Harvest {
            urls: vec![],
            origin: HarvestOrigin::Filtered,
            candidates_examined: 0,
        };

        assert_eq!(pipeline.load(harvest).unwrap(), 0);
        assert!(sink.contents().is_empty());
    }

    #[test]
    fn test_load_json_format() {
        let storage = MockStorage::with_file("prado.html", b"");
        let sink = MockSink::default();
        let mut config = MockConfig::new("prado.html");
        config.output_format = OutputFormat::Json;
        let pipeline = ImagePipeline::new(storage, &sink, config).unwrap();

        let harvest = Harvest {
            urls: vec!["https://a.carwow.co.uk/a.jpg".to_string()],
            origin: HarvestOrigin::Filtered,
            candidates_examined: 1,
        };
        pipeline.load(harvest).unwrap();

        let parsed: Vec<String> = serde_json::from_str(&sink.contents()).unwrap();
        assert_eq!(parsed, vec!["https://a.carwow.co.uk/a.jpg"]);
    }

    #[test]
    fn test_render_json_empty_array() {
        assert_eq!(render(&[], OutputFormat::Json).unwrap(), "[]\n");
    }

    #[test]
    fn test_strict_profile_comes_from_config() {
        let storage = MockStorage::with_file("prado.html", b"");
        let sink = MockSink::default();
        let mut config = MockConfig::new("prado.html");
        config.profile = Profile::Strict;
        let pipeline = ImagePipeline::new(storage, &sink, config).unwrap();

        assert_eq!(pipeline.extractor().rules().limit, 5);
    }
}
