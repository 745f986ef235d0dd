// WHY: gold files grew several shapes over time (bare lists, single documents, dataset
// collections); all of them reduce to a list of datasets before evaluation

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One named text with its reference segmentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default = "default_dataset_id")]
    pub id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub sentences: Vec<String>,
}

fn default_dataset_id() -> String {
    "unknown".to_string()
}

/// Any of the accepted gold-standard layouts
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum GoldData {
    /// `["First.", "Second."]`
    Sentences(Vec<String>),
    /// `{"datasets": [{...}, ...]}`
    Collection { datasets: Vec<Dataset> },
    /// `{"sentences": [...], "text": "..."}`
    Document {
        sentences: Vec<String>,
        #[serde(default)]
        text: Option<String>,
    },
    /// `[{"id": ..., "text": ..., "sentences": [...]}, ...]`
    Datasets(Vec<Dataset>),
}

impl GoldData {
    pub fn parse(json: &str) -> Result<Self> {
        serde_json::from_str(json).context(
            "Gold data must be a sentence list, an object with \"sentences\", or a list/object of datasets",
        )
    }

    /// Sentence list of a single-document layout; `None` for dataset collections
    pub fn sentences(&self) -> Option<&[String]> {
        match self {
            GoldData::Sentences(sentences) | GoldData::Document { sentences, .. } => Some(sentences.as_slice()),
            GoldData::Collection { .. } | GoldData::Datasets(_) => None,
        }
    }

    /// Text embedded in a single-document layout
    pub fn text(&self) -> Option<&str> {
        match self {
            GoldData::Document { text, .. } => text.as_deref(),
            _ => None,
        }
    }

    /// Flatten into datasets. Single-document layouts become one dataset named `default_id`,
    /// taking `fallback_text` when the file carries no text of its own.
    pub fn into_datasets(self, default_id: &str, fallback_text: Option<&str>) -> Vec<Dataset> {
        let single = |sentences: Vec<String>, text: Option<String>| Dataset {
            id: default_id.to_string(),
            description: String::new(),
            text: text
                .or_else(|| fallback_text.map(str::to_string))
                .unwrap_or_default(),
            sentences,
        };

        match self {
            GoldData::Sentences(sentences) => vec![single(sentences, None)],
            GoldData::Document { sentences, text } => vec![single(sentences, text)],
            GoldData::Collection { datasets } | GoldData::Datasets(datasets) => datasets,
        }
    }
}

/// Read and parse a gold-standard JSON file
pub async fn load_gold_file(path: impl AsRef<Path>) -> Result<GoldData> {
    let path = path.as_ref();
    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read gold file {}", path.display()))?;
    let gold = GoldData::parse(&contents).with_context(|| format!("Invalid gold file {}", path.display()))?;
    debug!(path = %path.display(), "Loaded gold file");
    Ok(gold)
}
