//! Edit plans: ordered splice/rewrite edits loaded from a config file.
//!
//! ```toml
//! [[edit]]
//! kind = "splice"
//! path = "app/add-inventory.tsx"
//! start_marker = "// Builtup effects"
//! payload_file = "builtup.tsx.part"
//!
//! [edit.boundary]
//! kind = "contains_followed_by"
//! marker = "useEffect(() => {"
//! next_contains = "fetchSystemData"
//!
//! [[edit]]
//! kind = "rewrite"
//! path = "app/settings.tsx"
//! content_file = "settings.tsx"
//! ```
//!
//! Relative paths resolve against the directory holding the plan file.

use crate::boundary::Boundary;
use crate::error::{Error, Result};
use crate::file::{RewriteReport, SpliceReport, rewrite_file, splice_file};
use serde::{Deserialize, Serialize};
use splice_fs::{ConfigStore, TargetPath, io};
use std::path::{Path, PathBuf};
use tracing::debug;

/// An ordered list of edits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    #[serde(rename = "edit", default)]
    pub edits: Vec<Edit>,

    /// Directory relative paths resolve against. Set by [`Plan::load`].
    #[serde(skip)]
    pub base_dir: Option<TargetPath>,
}

/// One edit of a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Edit {
    Splice {
        path: PathBuf,
        start_marker: String,
        boundary: BoundaryConfig,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        payload: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        payload_file: Option<PathBuf>,
    },
    Rewrite {
        path: PathBuf,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        content: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        content_file: Option<PathBuf>,
    },
}

/// Serialized form of a [`Boundary`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BoundaryConfig {
    Contains { marker: String },
    ContainsFollowedBy { marker: String, next_contains: String },
    Regex { pattern: String },
    EndOfDocument,
}

impl TryFrom<&BoundaryConfig> for Boundary {
    type Error = Error;

    fn try_from(config: &BoundaryConfig) -> Result<Self> {
        match config {
            BoundaryConfig::Contains { marker } => Boundary::contains(marker.as_str()),
            BoundaryConfig::ContainsFollowedBy {
                marker,
                next_contains,
            } => Boundary::contains_followed_by(marker.as_str(), next_contains.as_str()),
            BoundaryConfig::Regex { pattern } => Boundary::regex(pattern),
            BoundaryConfig::EndOfDocument => Ok(Boundary::EndOfDocument),
        }
    }
}

/// Result of one applied edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditReport {
    Splice(SpliceReport),
    Rewrite(RewriteReport),
}

impl Plan {
    /// Load a plan from a `.toml`, `.json`, `.yaml` or `.yml` file.
    pub fn load(path: &TargetPath) -> Result<Self> {
        let mut plan: Plan = ConfigStore::new().load(path)?;
        plan.base_dir = path.parent();
        debug!(path = %path, edits = plan.edits.len(), "loaded plan");
        Ok(plan)
    }

    /// Check every edit without touching the filesystem.
    pub fn validate(&self) -> Result<()> {
        self.edits
            .iter()
            .enumerate()
            .try_for_each(|(index, edit)| edit.validate(index))
    }

    /// Apply all edits in order, stopping at the first error.
    ///
    /// Edits whose start marker is missing are reported, not treated as
    /// errors, and the run continues.
    pub fn apply(&self) -> Result<Vec<EditReport>> {
        self.apply_with(|_, _| {})
    }

    /// Like [`Plan::apply`], calling `on_edit` with each report as soon as
    /// its edit has been applied.
    ///
    /// The whole plan is validated before the first write.
    pub fn apply_with<F>(&self, mut on_edit: F) -> Result<Vec<EditReport>>
    where
        F: FnMut(usize, &EditReport),
    {
        self.validate()?;

        let mut reports = Vec::with_capacity(self.edits.len());
        for (index, edit) in self.edits.iter().enumerate() {
            let report = self.run_edit(index, edit)?;
            on_edit(index, &report);
            reports.push(report);
        }
        Ok(reports)
    }

    fn run_edit(&self, index: usize, edit: &Edit) -> Result<EditReport> {
        match edit {
            Edit::Splice {
                path,
                start_marker,
                boundary,
                payload,
                payload_file,
            } => {
                let target = self.resolve(path);
                let boundary = Boundary::try_from(boundary)?;
                let payload = self.source_text(payload.as_deref(), payload_file.as_deref())?;
                debug!(index, path = %target, boundary = %boundary, "applying splice");
                splice_file(&target, start_marker, &boundary, &payload).map(EditReport::Splice)
            }
            Edit::Rewrite {
                path,
                content,
                content_file,
            } => {
                let target = self.resolve(path);
                let content = self.source_text(content.as_deref(), content_file.as_deref())?;
                debug!(index, path = %target, "applying rewrite");
                rewrite_file(&target, &content).map(EditReport::Rewrite)
            }
        }
    }

    fn resolve(&self, path: &Path) -> TargetPath {
        match &self.base_dir {
            Some(base) => base.join(path),
            None => TargetPath::new(path),
        }
    }

    fn source_text(&self, inline: Option<&str>, file: Option<&Path>) -> Result<String> {
        match (inline, file) {
            (Some(text), _) => Ok(text.to_string()),
            (None, Some(file)) => Ok(io::read_text(&self.resolve(file))?),
            (None, None) => Ok(String::new()),
        }
    }
}

impl Edit {
    fn validate(&self, index: usize) -> Result<()> {
        let invalid = |message: &str| Error::InvalidEdit {
            index,
            message: message.to_string(),
        };

        match self {
            Self::Splice {
                start_marker,
                boundary,
                payload,
                payload_file,
                ..
            } => {
                if start_marker.is_empty() {
                    return Err(invalid("start_marker must not be empty"));
                }
                if payload.is_some() && payload_file.is_some() {
                    return Err(invalid("set either payload or payload_file, not both"));
                }
                if payload.is_none() && payload_file.is_none() {
                    return Err(invalid("one of payload or payload_file is required"));
                }
                Boundary::try_from(boundary).map_err(|e| invalid(&e.to_string()))?;
            }
            Self::Rewrite {
                content,
                content_file,
                ..
            } => {
                if content.is_some() == content_file.is_some() {
                    return Err(invalid("set exactly one of content or content_file"));
                }
            }
        }
        Ok(())
    }
}
