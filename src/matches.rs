//! Match history: single matches, per-player match lists and recent match
//! ids by queue.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::Result;

pub struct MatchService<'c> {
    client: &'c Client,
}

/// Queue identifier used to scope recent-match queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Queue {
    Competitive,
    Unrated,
    Spikerush,
}

impl Queue {
    pub fn as_str(&self) -> &'static str {
        match self {
            Queue::Competitive => "competitive",
            Queue::Unrated => "unrated",
            Queue::Spikerush => "spikerush",
        }
    }
}

impl fmt::Display for Queue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Match {
    pub match_info: MatchInfo,
    pub players: Vec<MatchPlayer>,
    pub teams: Vec<Team>,
    pub round_results: Vec<RoundResult>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchInfo {
    pub match_id: String,
    pub map_id: String,
    pub game_length_millis: i64,
    pub game_start_millis: i64,
    pub provisioning_flow_id: String,
    pub is_completed: bool,
    pub custom_game_name: String,
    pub queue_id: String,
    pub game_mode: String,
    pub is_ranked: bool,
    pub season_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchPlayer {
    pub puuid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_line: Option<String>,
    pub team_id: String,
    pub party_id: String,
    pub character_id: String,
    pub stats: PlayerStats,
    pub competitive_tier: i64,
    pub player_card: String,
    pub player_title: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerStats {
    pub score: i64,
    pub rounds_played: i64,
    pub kills: i64,
    pub deaths: i64,
    pub assists: i64,
    pub playtime_millis: i64,
    pub ability_casts: AbilityCasts,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AbilityCasts {
    pub grenade_casts: i64,
    pub ability1_casts: i64,
    pub ability2_casts: i64,
    pub ultimate_casts: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Team {
    pub team_id: String,
    pub won: bool,
    pub rounds_played: i64,
    pub rounds_won: i64,
    pub num_points: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoundResult {
    pub round_num: i64,
    pub round_result: String,
    pub round_ceremony: String,
    pub winning_team: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bomb_planter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bomb_defuser: Option<String>,
    pub plant_round_time: i64,
    pub defuse_round_time: i64,
    pub round_result_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Matchlist {
    pub puuid: String,
    pub history: Vec<MatchlistEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchlistEntry {
    pub match_id: String,
    pub game_start_time_millis: i64,
    pub queue_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecentMatches {
    pub current_time: i64,
    pub match_ids: Vec<String>,
}

impl<'c> MatchService<'c> {
    pub(crate) fn new(client: &'c Client) -> Self {
        MatchService { client }
    }

    /// Gets match details by match id.
    ///
    /// Valorant API docs: <https://developer.riotgames.com/apis#val-match-v1/GET_getMatch>
    pub fn get(&self, match_id: &str) -> Result<Option<Match>> {
        let path = format!("match/v1/matches/{}", match_id);
        let request = self.client.get(&path)?;
        self.client.send(request)
    }

    /// Lists a player's match history, most recent first.
    ///
    /// Valorant API docs: <https://developer.riotgames.com/apis#val-match-v1/GET_getMatchlist>
    pub fn list_by_puuid(&self, puuid: &str) -> Result<Option<Matchlist>> {
        let path = format!("match/v1/matchlists/by-puuid/{}", puuid);
        let request = self.client.get(&path)?;
        self.client.send(request)
    }

    /// Lists ids of recently completed matches for a queue.
    ///
    /// Valorant API docs: <https://developer.riotgames.com/apis#val-match-v1/GET_getRecent>
    pub fn recent_by_queue(&self, queue: Queue) -> Result<Option<RecentMatches>> {
        let path = format!("match/v1/recent-matches/by-queue/{}", queue.as_str());
        let request = self.client.get(&path)?;
        self.client.send(request)
    }
}
