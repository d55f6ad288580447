//! Ranked leaderboards, scoped to a competitive act.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::Result;

pub struct RankedService<'c> {
    client: &'c Client,
}

/// Competitive tier appearing in leaderboard tier details. The wire values
/// are the numeric tier ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RankTier {
    #[serde(rename = "21")]
    Immortal1,
    #[serde(rename = "22")]
    Immortal2,
    #[serde(rename = "23")]
    Immortal3,
    #[serde(rename = "24")]
    Radiant,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Leaderboard {
    pub shard: String,
    pub act_id: String,
    pub total_players: i64,
    pub players: Vec<Player>,
    pub immortal_starting_index: i64,
    pub immortal_starting_page: i64,
    pub start_index: i64,
    pub tier_details: HashMap<RankTier, TierDetails>,
    #[serde(rename = "topTierRRThreshold")]
    pub top_tier_rr_threshold: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Player {
    /// Omitted for players who have hidden their identity on the board.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub puuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_line: Option<String>,
    pub leaderboard_rank: i64,
    pub ranked_rating: i64,
    pub number_of_wins: i64,
    pub competitive_tier: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TierDetails {
    pub ranked_rating_threshold: i64,
    pub starting_index: i64,
    pub starting_page: i64,
}

/// Pagination for the leaderboard. Only explicitly set fields become query
/// parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LeaderboardListOptions {
    pub size: Option<u32>,
    pub start_index: Option<u32>,
}

impl LeaderboardListOptions {
    pub(crate) fn query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(size) = self.size {
            pairs.push(("size", size.to_string()));
        }
        if let Some(start_index) = self.start_index {
            pairs.push(("startIndex", start_index.to_string()));
        }
        pairs
    }
}

impl<'c> RankedService<'c> {
    pub(crate) fn new(client: &'c Client) -> Self {
        RankedService { client }
    }

    /// Gets the leaderboard for a specific act.
    ///
    /// Valorant API docs: <https://developer.riotgames.com/apis#val-ranked-v1/GET_getLeaderboard>
    pub fn leaderboard_by_act(
        &self,
        act_id: &str,
        opts: Option<&LeaderboardListOptions>,
    ) -> Result<Option<Leaderboard>> {
        let path = format!("ranked/v1/leaderboards/by-act/{}", act_id);
        let request = self
            .client
            .get(&path)?
            .query(opts.map(|o| o.query()).unwrap_or_default());
        self.client.send(request)
    }
}
