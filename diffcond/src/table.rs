use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use indexmap::IndexMap;
use miette::Diagnostic;
use serde::Deserialize;

/// Source of the built-in MD5 table.
const MD5_TABLE: &str = include_str!("../tables/md5.toml");

// CONDITION TABLE
// ================================================================================================

/// An ordered list of labelled blocks of condition text.
///
/// Labels are used to report errors only; a label such as `"a6 - b6"` may cover the conditions of
/// several variables. Block order determines the order of the generated constants.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConditionTable {
    blocks: IndexMap<Arc<str>, String>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TableFile {
    #[serde(default)]
    blocks: IndexMap<String, String>,
}

impl ConditionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the conditions on the first block of the MD5 differential path of Wang et al.
    pub fn md5() -> Self {
        Self::from_toml(MD5_TABLE).expect("the built-in md5 table is well-formed")
    }

    /// Parses a table from TOML, where each entry of the `[blocks]` table maps a label to the
    /// text of its block:
    ///
    /// ```toml
    /// [blocks]
    /// a1 = "a1,6 = 0, a1,12 = 0"
    /// "a6 - b6" = """
    /// a6,18 = b5,18, b6,32 = c6,32 + 1
    /// """
    /// ```
    pub fn from_toml(source: &str) -> Result<Self, TableError> {
        let file: TableFile = toml::from_str(source)?;
        Ok(file.blocks.into_iter().collect())
    }

    /// Reads and parses the TOML table at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)
            .map_err(|error| TableError::Read { path: path.to_path_buf(), error })?;
        let table = Self::from_toml(&source)?;
        tracing::debug!(path = %path.display(), blocks = table.len(), "loaded condition table");
        Ok(table)
    }

    /// Appends a block, replacing the text of an existing block with the same label in place.
    pub fn insert(
        &mut self,
        label: impl Into<Arc<str>>,
        text: impl Into<String>,
    ) -> Option<String> {
        self.blocks.insert(label.into(), text.into())
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.blocks.get(label).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Returns the `(label, text)` pairs of the table, in order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &str)> {
        self.blocks.iter().map(|(label, text)| (label.as_ref(), text.as_str()))
    }
}

impl<L, T> FromIterator<(L, T)> for ConditionTable
where
    L: Into<Arc<str>>,
    T: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (L, T)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (label, text) in iter {
            table.insert(label, text);
        }
        table
    }
}

// TABLE ERROR
// ================================================================================================

#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum TableError {
    #[error("failed to read condition table '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },
    #[error("invalid condition table")]
    #[diagnostic(help("tables are TOML documents with a `[blocks]` table of `label = \"text\"`"))]
    Parse(#[from] toml::de::Error),
}
