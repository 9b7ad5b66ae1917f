//! The spreadsheet persistence collaborator.
//!
//! Completed questionnaires are appended as rows to a Google Sheets
//! spreadsheet. The bot only needs an append-only store with a lazily
//! written header, so that is the whole [`AnswerSink`] surface; handlers and
//! tests talk to the trait, production talks to [`SheetsClient`].

pub mod export;

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use crate::utils::logging::log_sheet_operation;

/// Range covering the whole answer table.
const TABLE_RANGE: &str = "Sheet1!A:Z";
/// Range probed to decide whether the header row exists yet.
const HEADER_RANGE: &str = "Sheet1!A1:Z1";

/// Append-only row store for completed questionnaires.
#[async_trait]
pub trait AnswerSink: Send + Sync {
    /// Write the header row, but only when the store is currently empty.
    async fn ensure_header(&self, columns: &[String]) -> Result<()>;

    /// Append one row after the current contents.
    async fn append_row(&self, values: &[String]) -> Result<()>;

    /// Cheap reachability check for the health endpoints.
    async fn probe(&self) -> Result<()> {
        Ok(())
    }
}

/// Google Sheets v4 REST client authenticated with a bearer token.
///
/// Credential acquisition is outside this crate; the token arrives ready to
/// use from the environment.
pub struct SheetsClient {
    http: reqwest::Client,
    spreadsheet_id: String,
    api_token: String,
}

impl SheetsClient {
    /// Build a client for one spreadsheet.
    pub fn new(spreadsheet_id: String, api_token: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            spreadsheet_id,
            api_token,
        }
    }

    fn values_url(&self, range: &str) -> String {
        format!(
            "https://sheets.googleapis.com/v4/spreadsheets/{}/values/{}",
            self.spreadsheet_id, range
        )
    }

    async fn range_is_empty(&self, range: &str) -> Result<bool> {
        let response = self
            .http
            .get(self.values_url(range))
            .bearer_auth(&self.api_token)
            .send()
            .await?
            .error_for_status()?;

        let body: serde_json::Value = response.json().await?;
        let has_values = body
            .get("values")
            .and_then(|values| values.as_array())
            .map(|rows| !rows.is_empty())
            .unwrap_or(false);
        Ok(!has_values)
    }

    async fn append(&self, range: &str, values: &[String]) -> Result<()> {
        let url = format!("{}:append", self.values_url(range));
        let body = serde_json::json!({ "values": [values] });

        let response = self
            .http
            .post(url)
            .query(&[("valueInputOption", "USER_ENTERED")])
            .bearer_auth(&self.api_token)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(anyhow!("sheets append returned {}: {}", status, detail));
        }
        Ok(())
    }
}

#[async_trait]
impl AnswerSink for SheetsClient {
    async fn ensure_header(&self, columns: &[String]) -> Result<()> {
        if self.range_is_empty(HEADER_RANGE).await? {
            log_sheet_operation("write_header", Some(&columns.join(", ")));
            self.append(TABLE_RANGE, columns).await?;
        }
        Ok(())
    }

    async fn append_row(&self, values: &[String]) -> Result<()> {
        log_sheet_operation("append_row", None);
        self.append(TABLE_RANGE, values).await
    }

    async fn probe(&self) -> Result<()> {
        self.http
            .get(format!(
                "https://sheets.googleapis.com/v4/spreadsheets/{}?fields=spreadsheetId",
                self.spreadsheet_id
            ))
            .bearer_auth(&self.api_token)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
