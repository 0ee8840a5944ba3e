//! Frontend Models
//!
//! Records supplied by the hosting page. Lists arrive already ranked.

use serde::{Deserialize, Deserializer, Serialize};

/// Campaign with its validation progress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub validation_count: u64,
    #[serde(default)]
    pub validation_goal: u64,
}

/// Voter search result (validation page)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoterResult {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    /// Sent as "true"/"false" by the page template; real booleans are accepted too
    #[serde(default, deserialize_with = "flag")]
    pub is_validated: bool,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub party: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub curr_reg_date: String,
}

/// Person search result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResult {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub calls_made: u64,
    #[serde(default, deserialize_with = "string_or_number")]
    pub rank: String,
    #[serde(default)]
    pub description: String,
}

/// Team search result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamResult {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub total_calls_made: u64,
    #[serde(default)]
    pub member_count: u64,
    #[serde(default)]
    pub description: String,
}

/// A displayable record, tagged by `type`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Record {
    Voter(VoterResult),
    User(UserResult),
    Team(TeamResult),
}

impl Record {
    /// Row key, unique within one table
    pub fn key(&self) -> String {
        match self {
            Record::Voter(voter) => voter.id.clone(),
            Record::User(user) => format!("user-{}", user.id),
            Record::Team(team) => format!("team-{}", team.id),
        }
    }
}

impl From<VoterResult> for Record {
    fn from(voter: VoterResult) -> Self {
        Record::Voter(voter)
    }
}

fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(value) => value,
        Flag::Text(text) => text == "true",
    })
}

fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Text {
        Int(i64),
        Float(f64),
        Text(String),
    }

    Ok(match Text::deserialize(deserializer)? {
        Text::Int(n) => n.to_string(),
        Text::Float(n) => n.to_string(),
        Text::Text(s) => s,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_voter_flag_from_string() {
        let voter: VoterResult = serde_json::from_value(json!({
            "id": "A-17",
            "is_validated": "true",
            "name": "Ada Lovelace",
            "address": "1 Main St",
            "party": "DEM",
            "gender": "F",
            "curr_reg_date": "01/02/2016"
        }))
        .unwrap();
        assert!(voter.is_validated);

        let voter: VoterResult = serde_json::from_value(json!({
            "id": 7,
            "is_validated": "false",
            "name": "Grace Hopper"
        }))
        .unwrap();
        assert_eq!(voter.id, "7");
        assert!(!voter.is_validated);
        assert_eq!(voter.party, "");
    }

    #[test]
    fn test_voter_flag_from_bool() {
        let voter: VoterResult =
            serde_json::from_value(json!({"id": "9", "is_validated": true, "name": "X"})).unwrap();
        assert!(voter.is_validated);
    }

    #[test]
    fn test_record_tagged_by_type() {
        let records: Vec<Record> = serde_json::from_value(json!([
            {"type": "Team", "id": 3, "name": "Phone Bank", "total_calls_made": 40, "member_count": 2, "description": "d"},
            {"type": "User", "id": 5, "name": "sam", "calls_made": 12, "rank": "Gold", "description": ""}
        ]))
        .unwrap();
        assert!(matches!(&records[0], Record::Team(team) if team.member_count == 2));
        assert!(matches!(&records[1], Record::User(user) if user.rank == "Gold"));
        assert_eq!(records[0].key(), "team-3");
        assert_eq!(records[1].key(), "user-5");
    }

    #[test]
    fn test_numeric_rank_is_text() {
        let user: UserResult =
            serde_json::from_value(json!({"id": 1, "name": "a", "rank": 4})).unwrap();
        assert_eq!(user.rank, "4");
    }
}
