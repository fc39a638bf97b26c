//! REST backend note store.
//!
//! Talks JSON to a backend exposing:
//!
//! | Operation | Request              |
//! |-----------|----------------------|
//! | list      | `GET    /notes`      |
//! | get       | `GET    /notes/{id}` |
//! | create    | `POST   /notes`      |
//! | update    | `PATCH  /notes/{id}` |
//! | delete    | `DELETE /notes/{id}` |
//!
//! Transport failures surface as [`NotesError::Network`], non-2xx responses as
//! [`NotesError::Request`] carrying the body text. A backend URL that cannot
//! be parsed is reported as a network error on each request, so it behaves
//! like an unreachable backend. Only `list` recovers: on a network error it
//! returns the notes from the on-device store instead.

use futures_util::future::BoxFuture;
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use tracing::Instrument;

use crate::domain::error::{NotesError, Result};
use crate::domain::{Note, NotePatch};
use crate::storage::backend::{NoteStore, StorageMode};
use crate::storage::local::LocalNoteStore;

/// Note store backed by a REST API, with a local store to fall back on.
pub struct RemoteNoteStore {
    client: Client,
    /// Parsed base URL, or why the configured one is unusable.
    base: std::result::Result<Url, String>,
    fallback: LocalNoteStore,
}

impl RemoteNoteStore {
    /// Creates a store for `base_url`.
    ///
    /// Surrounding whitespace and trailing slashes are ignored. An unusable
    /// URL is not rejected here; requests fail with [`NotesError::Network`].
    ///
    /// # Errors
    ///
    /// Returns [`NotesError::Config`] if the HTTP client cannot be built.
    pub fn new(base_url: &str, fallback: LocalNoteStore) -> Result<Self> {
        let base = parse_base(base_url);
        match &base {
            Ok(url) => tracing::debug!(base = %url, "remote note store configured"),
            Err(reason) => tracing::warn!(reason = %reason, "backend URL unusable, requests will fail"),
        }

        let client = Client::builder()
            .build()
            .map_err(|e| NotesError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base,
            fallback,
        })
    }

    /// The parsed backend URL, if the configured one is usable.
    #[must_use]
    pub fn base_url(&self) -> Option<&Url> {
        self.base.as_ref().ok()
    }

    /// `<base>/notes` or `<base>/notes/<id>` with `id` percent-encoded as a
    /// single path segment.
    fn endpoint(&self, id: Option<&str>) -> Result<Url> {
        let mut url = self.base.clone().map_err(NotesError::Network)?;
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("notes");
            if let Some(id) = id {
                segments.push(id);
            }
        }
        Ok(url)
    }

    async fn send(request: RequestBuilder) -> Result<Response> {
        let response = request
            .send()
            .await
            .map_err(|e| NotesError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = if body.trim().is_empty() {
            format!("Request failed ({})", status.as_u16())
        } else {
            body
        };

        tracing::debug!(status = status.as_u16(), message = %message, "backend rejected request");
        Err(NotesError::Request {
            status: status.as_u16(),
            message,
        })
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
        let bytes = response
            .bytes()
            .await
            .map_err(|e| NotesError::Network(e.to_string()))?;
        serde_json::from_slice(&bytes).map_err(|e| NotesError::Decode(e.to_string()))
    }

    async fn fetch_list(&self) -> Result<Vec<Note>> {
        let response = Self::send(self.client.get(self.endpoint(None)?)).await?;
        Self::read_json(response).await
    }

    async fn list_with_fallback(&mut self) -> Result<Vec<Note>> {
        match self.fetch_list().await {
            Err(e) if e.is_network() => {
                tracing::warn!(error = %e, "backend unreachable, listing local notes");
                self.fallback.list_notes()
            }
            other => other,
        }
    }
}

impl NoteStore for RemoteNoteStore {
    fn mode(&self) -> StorageMode {
        StorageMode::Remote
    }

    fn list(&mut self) -> BoxFuture<'_, Result<Vec<Note>>> {
        let base = self.base_url().map_or_else(String::new, ToString::to_string);
        let span = tracing::debug_span!("remote_list", base = %base);
        Box::pin(self.list_with_fallback().instrument(span))
    }

    fn get<'a>(&'a mut self, id: &'a str) -> BoxFuture<'a, Result<Option<Note>>> {
        Box::pin(async move {
            tracing::debug!(id = %id, "remote get");
            let response = Self::send(self.client.get(self.endpoint(Some(id))?)).await?;
            Self::read_json::<Note>(response).await.map(Some)
        })
    }

    fn create(&mut self, partial: NotePatch) -> BoxFuture<'_, Result<Note>> {
        Box::pin(async move {
            tracing::debug!("remote create");
            let request = self.client.post(self.endpoint(None)?).json(&partial);
            let response = Self::send(request).await?;
            Self::read_json(response).await
        })
    }

    fn update<'a>(&'a mut self, id: &'a str, patch: NotePatch) -> BoxFuture<'a, Result<Note>> {
        Box::pin(async move {
            tracing::debug!(id = %id, "remote update");
            let request = self.client.patch(self.endpoint(Some(id))?).json(&patch);
            let response = Self::send(request).await?;
            Self::read_json(response).await
        })
    }

    fn delete<'a>(&'a mut self, id: &'a str) -> BoxFuture<'a, Result<()>> {
        Box::pin(async move {
            tracing::debug!(id = %id, "remote delete");
            Self::send(self.client.delete(self.endpoint(Some(id))?)).await?;
            Ok(())
        })
    }
}

fn parse_base(base_url: &str) -> std::result::Result<Url, String> {
    let trimmed = base_url.trim().trim_end_matches('/');
    let base = Url::parse(trimmed).map_err(|e| format!("invalid backend URL '{trimmed}': {e}"))?;
    if base.cannot_be_a_base() {
        return Err(format!("invalid backend URL '{trimmed}': cannot have paths"));
    }
    Ok(base)
}
