//! [Notion](https://developers.notion.com/) client for the report database.

mod page;
mod schema;

use std::time::Duration;

use reqwest::{
    Client,
    StatusCode,
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
};

use self::{page::CreatePageRequest, schema::UpdateDatabaseRequest};
use crate::{
    battery::{BatteryRecord, DerivedMetrics},
    prelude::*,
};

const API_BASE_URL: &str = "https://api.notion.com/v1";
const API_VERSION: &str = "2022-06-28";

pub struct Api {
    client: Client,
    database_id: String,
}

impl Api {
    pub fn try_new(token: &str, database_id: String) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert("Notion-Version", HeaderValue::from_static(API_VERSION));
        let mut authorization = HeaderValue::from_str(&format!("Bearer {token}"))?;
        authorization.set_sensitive(true);
        headers.insert(AUTHORIZATION, authorization);
        let client = Client::builder()
            .user_agent("coulomb")
            .default_headers(headers)
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self { client, database_id })
    }

    /// Ensure the database has all the report columns.
    ///
    /// A missing permission is tolerated: page creation may still succeed
    /// against a manually provisioned schema.
    #[instrument(skip_all)]
    pub async fn ensure_database_schema(&self) -> Result {
        let response = self
            .client
            .patch(format!("{API_BASE_URL}/databases/{}", self.database_id))
            .json(&UpdateDatabaseRequest::new())
            .send()
            .await
            .context("failed to call the Notion API")?;
        match response.status() {
            StatusCode::OK => {
                info!("the database schema is up to date");
                Ok(())
            }
            StatusCode::FORBIDDEN => {
                warn!("the integration is not allowed to update the schema, continuing");
                Ok(())
            }
            status => {
                bail!("schema update failed ({status}): {}", response.text().await.unwrap_or_default())
            }
        }
    }

    /// Create one report page: typed columns plus the engineering report body.
    #[instrument(skip_all, fields(serial = %record.serial))]
    pub async fn create_report_page(
        &self,
        record: &BatteryRecord,
        metrics: &DerivedMetrics,
    ) -> Result {
        let request = CreatePageRequest::try_new(&self.database_id, record, metrics)?;
        let response = self
            .client
            .post(format!("{API_BASE_URL}/pages"))
            .json(&request)
            .send()
            .await
            .context("failed to call the Notion API")?;
        match response.status() {
            StatusCode::OK => {
                info!("created the report page");
                Ok(())
            }
            StatusCode::UNAUTHORIZED => bail!("unauthorized, check the Notion API key"),
            StatusCode::NOT_FOUND => bail!("database not found, check the database identifier"),
            status => {
                bail!("page creation failed ({status}): {}", response.text().await.unwrap_or_default())
            }
        }
    }
}
