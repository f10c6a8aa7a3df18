use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::debug;
use uuid::Uuid;

/// One generated document held for download.
#[derive(Clone, Debug)]
pub struct Artifact {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
    expires_at: DateTime<Utc>,
}

/// In-memory store of generated report documents, keyed by a random token
/// that doubles as the download link. Tokens expire after the configured
/// TTL; expired entries are purged on the next access.
#[derive(Clone)]
pub struct ArtifactStore {
    artifacts: Arc<Mutex<HashMap<Uuid, Artifact>>>,
    ttl: Duration,
}

impl ArtifactStore {
    pub fn new(ttl: Duration) -> Self {
        ArtifactStore {
            artifacts: Arc::new(Mutex::new(HashMap::new())),
            ttl,
        }
    }

    /// Matches the original one-hour validity of issued download links.
    pub fn with_default_ttl() -> Self {
        Self::new(Duration::hours(1))
    }

    pub fn store(&self, filename: &str, content_type: &str, bytes: Vec<u8>) -> Uuid {
        let token = Uuid::new_v4();
        let artifact = Artifact {
            filename: filename.to_string(),
            content_type: content_type.to_string(),
            bytes,
            expires_at: Utc::now() + self.ttl,
        };

        let mut artifacts = self.artifacts.lock().expect("artifact store mutex poisoned");
        artifacts.insert(token, artifact);
        debug!(%token, count = artifacts.len(), "artifact stored");
        token
    }

    pub fn fetch(&self, token: &Uuid) -> Option<Artifact> {
        let now = Utc::now();
        let mut artifacts = self.artifacts.lock().expect("artifact store mutex poisoned");
        artifacts.retain(|_, artifact| artifact.expires_at > now);
        artifacts.get(token).cloned()
    }
}
