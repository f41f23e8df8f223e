//! Directory-backed persistence of named moral contexts.
//!
//! The core exposes contexts only through their structured
//! representation; this crate maps that representation to JSON files
//! under a data directory, keyed by a context name. The core keeps no
//! file-path or format knowledge, and the store keeps no knowledge of
//! what the fields mean.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use ethos::{ContextError, MoralContext};

/// Error raised by store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No stored context under that name
    #[error("context {0:?} not found")]
    NotFound(String),

    /// Context names map to file stems, so path separators are rejected
    #[error("invalid context name: {0:?}")]
    InvalidName(String),

    /// Filesystem failure
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The stored file did not describe a well-formed context
    #[error("stored context is malformed: {0}")]
    Malformed(#[from] ContextError),

    /// The stored file was not valid JSON
    #[error("stored context is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Stores moral contexts as pretty-printed JSON files, one per name.
pub struct ContextStore {
    data_dir: PathBuf,
}

impl ContextStore {
    /// Open a store rooted at `data_dir`, creating the directory if
    /// missing.
    pub fn new(data_dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir })
    }

    /// The directory this store reads and writes.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Save a context under a name, overwriting any previous version.
    ///
    /// Returns the path written.
    pub fn save(&self, context: &MoralContext, name: &str) -> Result<PathBuf, StoreError> {
        let path = self.path_for(name)?;
        let value = context.to_structured()?;
        let text = serde_json::to_string_pretty(&value)?;
        fs::write(&path, text)?;
        debug!(name, path = %path.display(), "saved moral context");
        Ok(path)
    }

    /// Load the context saved under a name.
    pub fn load(&self, name: &str) -> Result<MoralContext, StoreError> {
        let path = self.path_for(name)?;
        let text = fs::read_to_string(&path).map_err(|err| {
            if err.kind() == io::ErrorKind::NotFound {
                StoreError::NotFound(name.to_string())
            } else {
                StoreError::Io(err)
            }
        })?;
        let value: serde_json::Value = serde_json::from_str(&text)?;
        let context = MoralContext::from_structured(value)?;
        debug!(name, "loaded moral context");
        Ok(context)
    }

    /// Whether a context is saved under a name.
    pub fn exists(&self, name: &str) -> bool {
        self.path_for(name)
            .map(|path| path.is_file())
            .unwrap_or(false)
    }

    /// Names of all saved contexts, sorted.
    pub fn list(&self) -> Result<Vec<String>, StoreError> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.data_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) == Some("json") {
                if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                    names.push(stem.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    fn path_for(&self, name: &str) -> Result<PathBuf, StoreError> {
        if name.is_empty() || name.contains('/') || name.contains('\\') || name.contains("..") {
            return Err(StoreError::InvalidName(name.to_string()));
        }
        Ok(self.data_dir.join(format!("{}.json", name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethos::{
        Agent, AgentType, Consequences, DutyAssessment, DutyType, TimeHorizon, UniversalizedResult,
        Vice,
    };

    fn sample_context() -> MoralContext {
        MoralContext {
            action_description: "Engaged in sexual relations with someone else's spouse."
                .to_string(),
            universalized_result: UniversalizedResult {
                self_collapse: true,
                contradiction_in_will: true,
            },
            consequences: Consequences {
                net_flourishing: -15,
                net_utility: -20,
                power_expression: -5,
                time_horizon: TimeHorizon::Long,
                ..Default::default()
            },
            agent: Agent {
                agent_type: AgentType::Stranger,
                vices: vec![Vice::Dishonesty, Vice::Betrayal, Vice::Indulgence],
                ..Default::default()
            },
            duty_assessment: DutyAssessment {
                duties_violated: vec![DutyType::Fidelity, DutyType::NonMaleficence],
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = ContextStore::new(dir.path()).unwrap();

        let context = sample_context();
        let path = store.save(&context, "adultery").unwrap();
        assert!(path.ends_with("adultery.json"));

        let loaded = store.load("adultery").unwrap();
        assert_eq!(loaded, context);
    }

    #[test]
    fn test_exists_and_list() {
        let dir = tempfile::tempdir().unwrap();
        let store = ContextStore::new(dir.path()).unwrap();

        assert!(!store.exists("adultery"));
        store.save(&sample_context(), "adultery").unwrap();
        store.save(&MoralContext::default(), "noop").unwrap();
        assert!(store.exists("adultery"));

        assert_eq!(store.list().unwrap(), vec!["adultery", "noop"]);
    }

    #[test]
    fn test_load_missing_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = ContextStore::new(dir.path()).unwrap();

        match store.load("nothing") {
            Err(StoreError::NotFound(name)) => assert_eq!(name, "nothing"),
            other => panic!("expected NotFound, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_rejects_path_escaping_names() {
        let dir = tempfile::tempdir().unwrap();
        let store = ContextStore::new(dir.path()).unwrap();

        assert!(matches!(
            store.save(&MoralContext::default(), "../escape"),
            Err(StoreError::InvalidName(_))
        ));
        assert!(matches!(
            store.load("a/b"),
            Err(StoreError::InvalidName(_))
        ));
    }

    #[test]
    fn test_malformed_file_fails_loudly() {
        let dir = tempfile::tempdir().unwrap();
        let store = ContextStore::new(dir.path()).unwrap();

        fs::write(dir.path().join("broken.json"), "{ not json").unwrap();
        assert!(matches!(
            store.load("broken"),
            Err(StoreError::InvalidJson(_))
        ));

        fs::write(
            dir.path().join("unknown.json"),
            r#"{"agent": {"agent_type": "ACQUAINTANCE"}}"#,
        )
        .unwrap();
        assert!(matches!(
            store.load("unknown"),
            Err(StoreError::Malformed(_))
        ));
    }
}
