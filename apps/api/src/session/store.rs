//! In-memory session store, one `DocumentSession` per editing tab.
//!
//! Nothing here is persisted; a session lives until it is deleted or the
//! process exits.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::io::AsyncRead;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::session::document::{decode_import, DocumentSession, ImportError};

/// Outcome of an import against a session id.
#[derive(Debug)]
pub enum ImportOutcome {
    /// Snapshot of the session taken right after the new text was swapped in.
    Imported(DocumentSession),
    NoSuchSession,
}

#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, DocumentSession>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new session with default content and returns its id and initial state.
    pub async fn create(&self) -> (Uuid, DocumentSession) {
        let id = Uuid::new_v4();
        let session = DocumentSession::new();
        self.inner.write().await.insert(id, session.clone());
        info!("Created session {id}");
        (id, session)
    }

    /// Returns a snapshot of the session.
    pub async fn get(&self, id: Uuid) -> Option<DocumentSession> {
        self.inner.read().await.get(&id).cloned()
    }

    /// Runs `f` against the session under the write lock.
    pub async fn update<F, T>(&self, id: Uuid, f: F) -> Option<T>
    where
        F: FnOnce(&mut DocumentSession) -> T,
    {
        self.inner.write().await.get_mut(&id).map(f)
    }

    /// Imports a stream into the session.
    ///
    /// The stream is read and decoded with no lock held, so a slow upload never
    /// stalls other sessions. The write lock is taken only to swap in the fully
    /// decoded text; a failed read or decode leaves the session untouched.
    pub async fn import<R>(&self, id: Uuid, reader: R) -> Result<ImportOutcome, ImportError>
    where
        R: AsyncRead + Unpin,
    {
        let text = decode_import(reader).await?;
        let len = text.len();

        let mut sessions = self.inner.write().await;
        let Some(session) = sessions.get_mut(&id) else {
            return Ok(ImportOutcome::NoSuchSession);
        };
        session.set_markdown(text);
        info!("Imported {len} bytes into session {id}");
        Ok(ImportOutcome::Imported(session.clone()))
    }

    /// Ends a session. Returns false if it did not exist.
    pub async fn remove(&self, id: Uuid) -> bool {
        let removed = self.inner.write().await.remove(&id).is_some();
        if removed {
            info!("Ended session {id}");
        }
        removed
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::io::AsyncWriteExt;

    use super::*;
    use crate::settings::SettingUpdate;

    #[tokio::test]
    async fn test_create_get_remove() {
        let store = SessionStore::new();
        let (id, created) = store.create().await;

        let fetched = store.get(id).await.expect("session exists");
        assert_eq!(fetched.markdown_text(), created.markdown_text());
        assert_eq!(store.len().await, 1);

        assert!(store.remove(id).await);
        assert!(store.get(id).await.is_none());
        assert!(!store.remove(id).await);
    }

    #[tokio::test]
    async fn test_sessions_are_independent() {
        let store = SessionStore::new();
        let (a, _) = store.create().await;
        let (b, _) = store.create().await;

        store
            .update(a, |s| s.update_setting(SettingUpdate::FontSize(20.0)))
            .await
            .unwrap();

        assert_eq!(store.get(a).await.unwrap().settings().font_size, 20.0);
        assert_eq!(store.get(b).await.unwrap().settings().font_size, 16.0);
    }

    #[tokio::test]
    async fn test_update_unknown_session_returns_none() {
        let store = SessionStore::new();
        let result = store.update(Uuid::new_v4(), |s| s.set_markdown("x".into())).await;
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_failed_import_keeps_stored_text() {
        let store = SessionStore::new();
        let (id, _) = store.create().await;
        store.update(id, |s| s.set_markdown("A".into())).await.unwrap();

        let bad: &[u8] = &[0xc3, 0x28];
        assert!(store.import(id, bad).await.is_err());
        assert_eq!(store.get(id).await.unwrap().markdown_text(), "A");
    }

    #[tokio::test]
    async fn test_import_unknown_session() {
        let store = SessionStore::new();
        let outcome = store.import(Uuid::new_v4(), "# x".as_bytes()).await.unwrap();
        assert!(matches!(outcome, ImportOutcome::NoSuchSession));
    }

    #[tokio::test]
    async fn test_import_returns_imported_snapshot() {
        let store = SessionStore::new();
        let (id, _) = store.create().await;

        let outcome = store.import(id, "# Fresh\n".as_bytes()).await.unwrap();
        let ImportOutcome::Imported(snapshot) = outcome else {
            panic!("expected Imported, got {outcome:?}");
        };
        assert_eq!(snapshot.markdown_text(), "# Fresh\n");
    }

    #[tokio::test]
    async fn test_pending_import_does_not_block_other_sessions() {
        let store = SessionStore::new();
        let (a, _) = store.create().await;
        let (b, _) = store.create().await;
        store.update(b, |s| s.set_markdown("B".into())).await.unwrap();

        let (mut writer, reader) = tokio::io::duplex(64);
        let importer = {
            let store = store.clone();
            tokio::spawn(async move { store.import(a, reader).await })
        };
        writer.write_all(b"# Half").await.unwrap();
        tokio::task::yield_now().await;

        let other = tokio::time::timeout(Duration::from_millis(500), store.get(b))
            .await
            .expect("other session must stay readable while an import is pending");
        assert_eq!(other.unwrap().markdown_text(), "B");

        let mid = tokio::time::timeout(Duration::from_millis(500), store.get(a))
            .await
            .expect("importing session must stay readable too")
            .unwrap();
        assert_ne!(mid.markdown_text(), "# Half", "partial import must not be visible");

        writer.write_all(b" done\n").await.unwrap();
        drop(writer);
        let outcome = importer.await.unwrap().unwrap();
        assert!(matches!(outcome, ImportOutcome::Imported(_)));
        assert_eq!(store.get(a).await.unwrap().markdown_text(), "# Half done\n");
    }
}
