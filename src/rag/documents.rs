//! Recipe records and their flat-text rendering
//!
//! Each recipe becomes one [`Document`]: a newline-separated block of
//! `label: value` lines that is embedded as a whole.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// One entry of the cocktail dataset.
///
/// Required fields are optional here so that a missing one can be reported
/// by record index instead of failing the whole parse.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecipeRecord {
    /// Required
    pub name: Option<String>,
    /// Required
    pub category: Option<String>,
    /// `1` (or `true`) means alcoholic; any other value does not
    pub alcoholic: Option<serde_json::Value>,
    /// Required
    pub glass: Option<String>,
    /// Rendered only when non-empty
    pub tags: Option<Vec<String>>,
    /// Rendered in order; unnamed entries are skipped
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    /// Required
    pub instructions: Option<String>,
}

/// One ingredient line of a recipe.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ingredient {
    /// Ingredient name, e.g. `White rum`
    pub name: Option<String>,
    /// Free-form amount, e.g. `2 oz`
    pub measure: Option<String>,
}

/// Flattened text of one recipe, the unit of retrieval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    text: String,
}

impl Document {
    /// Wrap already rendered text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Full text, as embedded and placed in prompts.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// First line of the document, `Name: ...` for rendered recipes.
    pub fn title(&self) -> &str {
        self.text.lines().next().unwrap_or_default()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Why the dataset could not be turned into documents.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// The file could not be read
    #[error("Failed to read dataset {path}: {source}")]
    Read {
        /// Dataset path as configured
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The file is not a JSON array of records
    #[error("Failed to parse dataset {path}: {source}")]
    Parse {
        /// Dataset path as configured
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// A record lacks a required field
    #[error("Recipe #{index} is missing required field '{field}'")]
    MissingField {
        /// Position of the record in the dataset
        index: usize,
        /// Name of the missing field
        field: &'static str,
    },
}

/// Read the dataset file, a JSON array of recipe records.
pub fn load_recipes<P: AsRef<Path>>(path: P) -> Result<Vec<RecipeRecord>, DatasetError> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|source| DatasetError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let recipes: Vec<RecipeRecord> =
        serde_json::from_str(&content).map_err(|source| DatasetError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    info!(path = %path.display(), recipes = recipes.len(), "Loaded cocktail dataset");
    Ok(recipes)
}

/// One document per record, in input order.
pub fn build_documents(records: &[RecipeRecord]) -> Result<Vec<Document>, DatasetError> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| render_record(index, record).map(Document::new))
        .collect()
}

/// Render a single record. Errors name record index 0.
pub fn render_recipe(record: &RecipeRecord) -> Result<String, DatasetError> {
    render_record(0, record)
}

fn render_record(index: usize, record: &RecipeRecord) -> Result<String, DatasetError> {
    let required = |value: &Option<String>, field: &'static str| {
        value
            .clone()
            .ok_or(DatasetError::MissingField { index, field })
    };

    let name = required(&record.name, "name")?;
    let category = required(&record.category, "category")?;
    let glass = required(&record.glass, "glass")?;
    let instructions = required(&record.instructions, "instructions")?;

    let mut lines = vec![
        format!("Name: {}", name),
        format!("Category: {}", category),
        alcohol_line(record.alcoholic.as_ref()).to_string(),
        format!("glass: {}", glass),
    ];

    let tags = record.tags.as_deref().unwrap_or_default().join(", ");
    if !tags.is_empty() {
        lines.push(format!("tags: {}", tags));
    }

    lines.push(format!("ingredients: {}", render_ingredients(&record.ingredients)));
    lines.push(format!("instructions: {}", instructions));

    Ok(lines.join("\n"))
}

fn alcohol_line(flag: Option<&serde_json::Value>) -> &'static str {
    let alcoholic = match flag {
        Some(serde_json::Value::Bool(value)) => *value,
        Some(value) => value.as_f64() == Some(1.0),
        None => false,
    };
    if alcoholic {
        "contains alcohol"
    } else {
        "non-alcoholic"
    }
}

fn render_ingredients(ingredients: &[Ingredient]) -> String {
    ingredients
        .iter()
        .filter_map(|ingredient| {
            let name = ingredient.name.as_deref().filter(|n| !n.is_empty())?;
            match ingredient.measure.as_deref().filter(|m| !m.is_empty()) {
                Some(measure) => Some(format!("{} ({})", name, measure.trim())),
                None => Some(name.to_string()),
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}
