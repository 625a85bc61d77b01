use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::SirError;
use crate::parameters::Parameters;

/// A full run description: model parameters plus where the artifacts go.
///
/// Every field defaults, so an empty config file (or empty sections) is a
/// valid run with the stock parameters.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub parameters: Parameters,
    pub output: OutputConfig,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory for output artifacts; stdout when absent.
    pub dir: Option<PathBuf>,
}

impl RunConfig {
    /// Loads a config file, picking the parser from the extension
    /// (`.toml` or `.json`).
    pub fn from_file(path: &Path) -> Result<RunConfig, SirError> {
        let raw = fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Ok(toml::from_str(&raw)?),
            Some("json") => Ok(serde_json::from_str(&raw)?),
            other => Err(SirError::UnsupportedConfig(
                other.unwrap_or("<no extension>").to_string(),
            )),
        }
    }

    /// Reads a JSON run description from stdin.
    pub fn from_stdin() -> Result<RunConfig, SirError> {
        Self::from_json_reader(io::stdin())
    }

    /// Reads a JSON run description from any reader; empty input is an error.
    pub fn from_json_reader<R: Read>(mut reader: R) -> Result<RunConfig, SirError> {
        let mut raw = String::new();
        reader.read_to_string(&mut raw)?;
        if raw.trim().is_empty() {
            return Err(SirError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "no config input",
            )));
        }
        Ok(serde_json::from_str(&raw)?)
    }
}

/// Output sink for run artifacts: a directory when one is configured,
/// stdout otherwise.
pub struct Environment {
    output_dir: Option<PathBuf>,
}

impl Environment {
    pub fn new(output_dir: Option<PathBuf>) -> Environment {
        Environment { output_dir }
    }

    pub fn output_dir(&self) -> Option<&Path> {
        self.output_dir.as_deref()
    }

    pub fn write(&self, filename: &str, data: &[u8]) -> Result<(), SirError> {
        if let Some(dir) = &self.output_dir {
            fs::create_dir_all(dir)?;
            fs::write(dir.join(filename), data)?;
        } else {
            io::stdout().write_all(data)?;
        }
        Ok(())
    }

    pub fn write_csv(
        &self,
        filename: &str,
        headers: &[&str],
        rows: &[Vec<String>],
    ) -> Result<(), SirError> {
        if let Some(dir) = &self.output_dir {
            fs::create_dir_all(dir)?;
            let file = fs::File::create(dir.join(filename))?;
            let mut wtr = csv::Writer::from_writer(file);
            Self::write_records(&mut wtr, headers, rows)
        } else {
            let mut wtr = csv::Writer::from_writer(io::stdout());
            Self::write_records(&mut wtr, headers, rows)
        }
    }

    fn write_records<W: Write>(
        wtr: &mut csv::Writer<W>,
        headers: &[&str],
        rows: &[Vec<String>],
    ) -> Result<(), SirError> {
        wtr.write_record(headers)?;
        for row in rows {
            wtr.write_record(row)?;
        }
        wtr.flush()?;
        Ok(())
    }
}
