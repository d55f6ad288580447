//! Platform status: maintenances and incidents for the selected region.
//!
//! Unlike the other endpoints this API speaks snake_case on the wire, so the
//! field names map directly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::Result;

pub struct StatusService<'c> {
    client: &'c Client,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceStatus {
    Scheduled,
    InProgress,
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncidentSeverity {
    Info,
    Warning,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublishLocation {
    Riotclient,
    Riotstatus,
    Game,
}

/// Service status for a region's platform.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformData {
    pub id: String,
    pub name: String,
    pub locales: Vec<String>,
    pub maintenances: Vec<Status>,
    pub incidents: Vec<Status>,
}

/// A single maintenance or incident entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Status {
    pub id: i64,
    pub maintenance_status: Option<MaintenanceStatus>,
    pub incident_severity: Option<IncidentSeverity>,
    #[serde(default)]
    pub titles: Vec<StatusContent>,
    #[serde(default)]
    pub updates: Vec<Update>,
    pub created_at: DateTime<Utc>,
    pub archive_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub platforms: Vec<String>,
}

/// Localized text attached to a status entry or update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusContent {
    pub locale: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Update {
    pub id: i64,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub publish: bool,
    #[serde(default)]
    pub publish_locations: Vec<PublishLocation>,
    #[serde(default)]
    pub translations: Vec<StatusContent>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl<'c> StatusService<'c> {
    pub(crate) fn new(client: &'c Client) -> Self {
        StatusService { client }
    }

    /// Gets the platform status for the client's region.
    ///
    /// Valorant API docs: <https://developer.riotgames.com/apis#val-status-v1/GET_getPlatformData>
    pub fn platform_data(&self) -> Result<Option<PlatformData>> {
        let request = self.client.get("status/v1/platform-data")?;
        self.client.send(request)
    }
}
