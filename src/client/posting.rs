//! Multipart message posting.

use crate::error::{Error, Result};
use crate::types::{BearerToken, GroupId, PostBlock};
use reqwest::multipart::Form;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use url::Url;

use super::cancellable;

const MESSAGES_PATH: &str = "api/v1/messages.json";

/// URL messages are posted to
pub(super) fn messages_url(base_url: &Url) -> Result<Url> {
    Ok(base_url.join(MESSAGES_PATH)?)
}

/// Form fields of one announcement post, in submission order
pub(super) fn form_fields(
    group_id: GroupId,
    title: &str,
    body: &str,
) -> [(&'static str, String); 5] {
    [
        ("group_id", group_id.to_string()),
        ("is_rich_text", "false".to_string()),
        ("message_type", "announcement".to_string()),
        ("title", title.to_string()),
        ("body", body.to_string()),
    ]
}

pub(super) struct Poster<'a> {
    pub(super) http: &'a reqwest::Client,
    pub(super) base_url: &'a Url,
    pub(super) group_id: GroupId,
    pub(super) token: &'a BearerToken,
}

impl Poster<'_> {
    /// Submit one block; any non-2xx response becomes [`Error::RemotePost`]
    pub(super) async fn post(
        &self,
        title: &str,
        block: &PostBlock,
        cancel: &CancellationToken,
    ) -> Result<()> {
        let url = messages_url(self.base_url)?;
        let form = form_fields(self.group_id, title, &block.body)
            .into_iter()
            .fold(Form::new(), |form, (name, value)| form.text(name, value));

        let request = self
            .http
            .post(url)
            .bearer_auth(self.token.expose())
            .multipart(form)
            .send();
        let response = cancellable(cancel, request).await??;

        let status = response.status();
        if status.is_success() {
            debug!(
                group_id = self.group_id.0,
                block = block.sequence_index,
                total = block.total_blocks,
                bytes = block.body.len(),
                "posted announcement block"
            );
            return Ok(());
        }

        let body = cancellable(cancel, response.text())
            .await?
            .unwrap_or_else(|e| format!("<failed to read response body: {}>", e));
        warn!(
            group_id = self.group_id.0,
            block = block.sequence_index,
            total = block.total_blocks,
            status = status.as_u16(),
            "platform rejected announcement block"
        );

        Err(Error::RemotePost {
            status: status.as_u16(),
            block: block.sequence_index,
            body,
        })
    }
}
