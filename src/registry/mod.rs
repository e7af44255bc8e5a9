//! Element registry
//!
//! Holds the ionic and transition elements compounds are generated from.
//! A registry is built once (from a dataset or programmatically) and then
//! shared read-only with the generator.

pub mod loader;

use crate::models::{ChemicalElement, IonicElement, TransitionElement};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur while loading a registry
#[derive(Error, Debug)]
pub enum RegistryError {
    /// IO error
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML or JSON dataset error
    #[error("Invalid structured dataset: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Element row appears before any `Element-Type:` header
    #[error("Line {line}: element listed before any Element-Type header")]
    MissingSection { line: usize },

    /// Unrecognised `Element-Type:` header
    #[error("Line {line}: unknown element type '{section}'")]
    UnknownSection { line: usize, section: String },

    /// A field could not be parsed
    #[error("Line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// The row parsed but does not describe a usable element
    #[error("Line {line}: invalid element: {reason}")]
    InvalidElement { line: usize, reason: String },

    /// An entry of a YAML or JSON list does not describe a usable element
    #[error("Entry {entry}: invalid element: {reason}")]
    InvalidEntry { entry: usize, reason: String },
}

impl RegistryError {
    /// Get a user-friendly error message for CLI output
    pub fn user_message(&self) -> String {
        match self {
            RegistryError::MissingSection { .. } | RegistryError::UnknownSection { .. } => format!(
                "{self}\n\nHint: Start each block with 'Element-Type:Ionic' or 'Element-Type:Transition'."
            ),
            RegistryError::Parse { .. } => format!(
                "{self}\n\nHint: Ionic rows are 'name|symbol|charge|electronegativity[|metal]', \
                transition rows are 'name|symbol|charge,charge,...'."
            ),
            _ => self.to_string(),
        }
    }
}

/// Ordered collections of ionic and transition elements
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementRegistry {
    ionic: Vec<IonicElement>,
    transition: Vec<TransitionElement>,
}

impl ElementRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry of the dataset bundled with the crate
    pub fn builtin() -> Result<Self, RegistryError> {
        loader::parse_flat(loader::BUILTIN_DATASET)
    }

    /// Load a registry from a dataset file.
    ///
    /// `.yaml`, `.yml` and `.json` files are read as tagged element lists;
    /// anything else is read in the flat `Element-Type:` format.
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let structured = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| matches!(ext.to_ascii_lowercase().as_str(), "yaml" | "yml" | "json"));

        let registry = if structured {
            loader::parse_structured(&content)?
        } else {
            loader::parse_flat(&content)?
        };

        info!(
            "Loaded {} ionic and {} transition elements from {}",
            registry.ionic.len(),
            registry.transition.len(),
            path.display()
        );
        Ok(registry)
    }

    /// Load every dataset file in a directory into one registry.
    ///
    /// Files are read in file-name order and their elements appended in turn,
    /// so the result matches loading each file and merging them in sequence.
    /// Hidden files and subdirectories are skipped.
    pub fn load_dir(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let path = path.as_ref();
        let io_error = |source| RegistryError::Io {
            path: path.to_path_buf(),
            source,
        };

        let mut files = Vec::new();
        for entry in std::fs::read_dir(path).map_err(io_error)? {
            let entry = entry.map_err(io_error)?;
            let hidden = entry.file_name().to_string_lossy().starts_with('.');
            if !hidden && entry.file_type().map_err(io_error)?.is_file() {
                files.push(entry.path());
            }
        }
        files.sort();

        if files.is_empty() {
            warn!("No dataset files in {}", path.display());
        }

        let mut registry = Self::new();
        for file in &files {
            registry.merge(Self::load_file(file)?);
        }
        Ok(registry)
    }

    /// Load a dataset file, or every dataset file when `path` is a directory
    pub fn load_path(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let path = path.as_ref();
        if path.is_dir() {
            Self::load_dir(path)
        } else {
            Self::load_file(path)
        }
    }

    /// Append every element of `other`, ionic and transition lists in order
    pub fn merge(&mut self, other: ElementRegistry) {
        for element in other.ionic {
            self.add_ionic(element);
        }
        for element in other.transition {
            self.add_transition(element);
        }
    }

    /// Append an ionic element
    pub fn add_ionic(&mut self, element: IonicElement) {
        self.warn_if_duplicate(element.symbol());
        self.ionic.push(element);
    }

    /// Append a transition element
    pub fn add_transition(&mut self, element: TransitionElement) {
        self.warn_if_duplicate(element.symbol());
        self.transition.push(element);
    }

    /// Append an element of either kind
    pub fn add(&mut self, element: ChemicalElement) {
        match element {
            ChemicalElement::Ionic(element) => self.add_ionic(element),
            ChemicalElement::Transition(element) => self.add_transition(element),
        }
    }

    pub fn ionic(&self) -> &[IonicElement] {
        &self.ionic
    }

    pub fn transition(&self) -> &[TransitionElement] {
        &self.transition
    }

    pub fn len(&self) -> usize {
        self.ionic.len() + self.transition.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ionic.is_empty() && self.transition.is_empty()
    }

    /// Find an element of either kind by symbol
    pub fn find(&self, symbol: &str) -> Option<ChemicalElement> {
        self.ionic
            .iter()
            .find(|element| element.symbol() == symbol)
            .cloned()
            .map(ChemicalElement::Ionic)
            .or_else(|| {
                self.transition
                    .iter()
                    .find(|element| element.symbol() == symbol)
                    .cloned()
                    .map(ChemicalElement::Transition)
            })
    }

    fn warn_if_duplicate(&self, symbol: &str) {
        let taken = self.ionic.iter().any(|element| element.symbol() == symbol)
            || self.transition.iter().any(|element| element.symbol() == symbol);
        if taken {
            warn!("Duplicate element symbol {} in registry", symbol);
        }
    }
}

impl FromIterator<ChemicalElement> for ElementRegistry {
    fn from_iter<I: IntoIterator<Item = ChemicalElement>>(iter: I) -> Self {
        let mut registry = Self::new();
        for element in iter {
            registry.add(element);
        }
        registry
    }
}
