//! Thin async client for the Microsoft Graph workbook table endpoints.
//!
//! Each method maps to one Graph call; failures pass through unchanged.
//! Transport errors surface as [`DaybookError::Http`], non-2xx responses as
//! [`DaybookError::Graph`] with the status and body.

use std::sync::Arc;

use serde::Deserialize;
use tracing::debug;

use crate::entry::DataEntry;
use crate::error::{DaybookError, DaybookResult};
use crate::roster::WorkbookRef;
use crate::types::{CellValue, TableRow, UserInfo};

use super::auth::TokenProvider;

const DEFAULT_BASE_URL: &str = "https://graph.microsoft.com/v1.0";

pub struct GraphClient {
    http: reqwest::Client,
    base_url: String,
    workbook: WorkbookRef,
    tokens: Arc<dyn TokenProvider>,
}

/// Envelope of `GET .../rows`.
#[derive(Deserialize)]
struct RowsEnvelope {
    value: Vec<TableRow>,
}

/// Envelope of `GET .../rows/itemAt(index=N)`.
#[derive(Deserialize)]
struct RowEnvelope {
    values: Vec<Vec<CellValue>>,
}

/// One item of `GET .../root/children`.
#[derive(Deserialize)]
struct DriveItem {
    id: String,
}

/// Envelope of `GET .../root/children`.
#[derive(Deserialize)]
struct DriveItemsEnvelope {
    value: Vec<DriveItem>,
}

impl GraphClient {
    pub fn new(workbook: WorkbookRef, tokens: Arc<dyn TokenProvider>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            workbook,
            tokens,
        }
    }

    /// Point the client at a different Graph endpoint (test servers).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Profile of the signed-in user.
    pub async fn current_user(&self) -> DaybookResult<UserInfo> {
        let url = format!("{}/me", self.base_url);
        debug!(%url, "fetching current user");
        let response = self
            .http
            .get(&url)
            .bearer_auth(self.tokens.bearer_token().await?)
            .send()
            .await?;
        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    /// All rows of an employee table, materialized in remote order.
    pub async fn table_rows(&self, table: &str) -> DaybookResult<Vec<TableRow>> {
        let url = self.rows_url(table);
        debug!(%url, "fetching table rows");
        let response = self
            .http
            .get(&url)
            .bearer_auth(self.tokens.bearer_token().await?)
            .send()
            .await?;
        let response = Self::check(response).await?;
        let envelope: RowsEnvelope = response.json().await?;
        Ok(envelope.value)
    }

    /// Cell values of a single row, addressed by its remote index.
    pub async fn row_values(&self, table: &str, index: usize) -> DaybookResult<Vec<CellValue>> {
        let url = self.row_at_url(table, index);
        debug!(%url, "fetching row");
        let response = self
            .http
            .get(&url)
            .bearer_auth(self.tokens.bearer_token().await?)
            .send()
            .await?;
        let response = Self::check(response).await?;
        let envelope: RowEnvelope = response.json().await?;
        envelope.values.into_iter().next().ok_or_else(|| {
            DaybookError::Graph {
                status: 200,
                message: format!("row {index} of table '{table}' came back empty"),
            }
        })
    }

    /// Rewrite a row wholesale with an entry's values and number formats.
    pub async fn update_row(
        &self,
        table: &str,
        index: usize,
        entry: &DataEntry,
    ) -> DaybookResult<()> {
        let url = self.row_at_url(table, index);
        let body = update_payload(entry)?;
        debug!(%url, "updating row");

        let response = self
            .http
            .patch(&url)
            .bearer_auth(self.tokens.bearer_token().await?)
            .json(&body)
            .send()
            .await?;

        Self::check(response).await?;
        Ok(())
    }

    /// Download the text content of a drive file, looked up by name in the
    /// drive root.
    pub async fn file_content(&self, file_name: &str) -> DaybookResult<String> {
        let item_id = self.find_file_id(file_name).await?;

        let url = format!("{}/items/{}/content", self.drive_url(), item_id);
        debug!(%url, "downloading file content");
        let response = self
            .http
            .get(&url)
            .bearer_auth(self.tokens.bearer_token().await?)
            .send()
            .await?;
        let response = Self::check(response).await?;
        Ok(response.text().await?)
    }

    /// Resolve a file name in the drive root to its item id.
    async fn find_file_id(&self, file_name: &str) -> DaybookResult<String> {
        let url = format!("{}/root/children", self.drive_url());
        debug!(%url, file_name, "looking up file");
        let response = self
            .http
            .get(&url)
            .bearer_auth(self.tokens.bearer_token().await?)
            .query(&[("$filter", format!("name eq '{file_name}'"))])
            .send()
            .await?;
        let response = Self::check(response).await?;
        let envelope: DriveItemsEnvelope = response.json().await?;
        envelope
            .value
            .into_iter()
            .next()
            .map(|item| item.id)
            .ok_or_else(|| DaybookError::FileNotFound(file_name.to_string()))
    }

    fn drive_url(&self) -> String {
        format!(
            "{}/sites/{}/drives/{}",
            self.base_url, self.workbook.site_id, self.workbook.drive_id
        )
    }

    fn workbook_url(&self) -> String {
        format!("{}/items/{}/workbook", self.drive_url(), self.workbook.file_id)
    }

    fn rows_url(&self, table: &str) -> String {
        format!("{}/tables('{}')/rows", self.workbook_url(), table)
    }

    fn row_at_url(&self, table: &str, index: usize) -> String {
        format!(
            "{}/tables('{}')/rows/itemAt(index={})",
            self.workbook_url(),
            table,
            index
        )
    }

    /// Map a non-2xx response to a Graph error carrying status and body.
    async fn check(response: reqwest::Response) -> DaybookResult<reqwest::Response> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status().as_u16();
        let message = response.text().await.unwrap_or_default();
        Err(DaybookError::Graph { status, message })
    }
}

/// PATCH body for a row update: the value row plus its number-format row.
pub fn update_payload(entry: &DataEntry) -> DaybookResult<serde_json::Value> {
    Ok(serde_json::json!({
        "values": [entry.to_row_values()?],
        "numberFormat": [DataEntry::number_formats()],
    }))
}
