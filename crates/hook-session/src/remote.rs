//! Session service backend over HTTP.

use crate::schema::{NewSession, SessionRecord};
use crate::store::{SessionStore, StoreError};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use std::time::Duration;

/// Sessions exposed by a remote service at `{base_url}/api/sessions`.
pub struct RemoteStore {
    base_url: String,
    client: Client,
}

impl RemoteStore {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, StoreError> {
        let client = Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn sessions_url(&self) -> String {
        format!("{}/api/sessions", self.base_url)
    }

    fn session_url(&self, session_id: &str) -> String {
        format!("{}/{}", self.sessions_url(), urlencoding::encode(session_id))
    }
}

impl SessionStore for RemoteStore {
    fn backend(&self) -> &'static str {
        "remote"
    }

    fn fetch(&self, session_id: &str) -> Result<Option<SessionRecord>, StoreError> {
        let url = self.session_url(session_id);
        let response = self.client.get(&url).send()?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => Ok(Some(response.json::<SessionRecord>()?)),
            status => Err(StoreError::Status {
                status: status.as_u16(),
                url,
            }),
        }
    }

    fn insert(&self, session: &NewSession) -> Result<(), StoreError> {
        let url = self.sessions_url();
        let response = self.client.post(&url).json(session).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Status {
                status: status.as_u16(),
                url,
            });
        }
        Ok(())
    }
}
