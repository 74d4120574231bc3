use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};

use crate::{grammar::Grammar, Error, InternalResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverConfig {
    #[serde(default = "default_cases")]
    pub cases: Vec<DemoCase>,

    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            cases: default_cases(),
            format: OutputFormat::default(),
        }
    }
}

impl DriverConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> InternalResult<Self> {
        from_file(path)
    }

    pub fn from_str(s: &str) -> InternalResult<Self> {
        from_str(s)
    }

    /// Applies command-line overrides on top of a loaded config.
    ///
    /// A `source` together with a JSON `grammar` replaces every case with a
    /// single case named `input`. Either one alone leaves the cases as they are.
    pub fn apply_overrides(
        &mut self,
        source: Option<&str>,
        grammar: Option<&str>,
        format: Option<OutputFormat>,
    ) -> InternalResult<()> {
        if let (Some(source), Some(grammar)) = (source, grammar) {
            let grammar: Grammar = serde_json::from_str(grammar)
                .map_err(|e| Error::config(format!("Failed to parse grammar: {}", e)))?;
            self.cases = vec![DemoCase {
                name: "input".to_string(),
                source: source.to_string(),
                grammar,
            }];
        }

        if let Some(format) = format {
            self.format = format;
        }
        Ok(())
    }
}

/// One source text and the grammar to run over it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoCase {
    #[serde(default = "default_case_name")]
    pub name: String,
    pub source: String,
    pub grammar: Grammar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn from_file<T: for<'de> Deserialize<'de>, P: AsRef<Path>>(path: P) -> InternalResult<T> {
    let file = File::open(path.as_ref()).map_err(|e| {
        Error::config(format!(
            "Failed to open config file {}: {}",
            path.as_ref().display(),
            e
        ))
    })?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .map_err(|e| Error::config(format!("Failed to parse config file: {}", e)))?;
    Ok(config)
}

pub fn from_str<T: for<'de> Deserialize<'de>>(s: &str) -> InternalResult<T> {
    let config = serde_json::from_str(s)
        .map_err(|e| Error::config(format!("Failed to parse config: {}", e)))?;
    Ok(config)
}

// デフォルト値の定義
fn default_cases() -> Vec<DemoCase> {
    vec![
        DemoCase {
            name: "tag then character".to_string(),
            source: "it works!".to_string(),
            grammar: Grammar::sequence(Grammar::tag("it"), Grammar::character()),
        },
        DemoCase {
            name: "repeated tag then character".to_string(),
            source: "itititititworks!".to_string(),
            grammar: Grammar::sequence(Grammar::repeat(Grammar::tag("it")), Grammar::character()),
        },
    ]
}

fn default_case_name() -> String {
    "case".to_string()
}
