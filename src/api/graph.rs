//! Subgraph Client
//!
//! GraphQL queries against the world indexing subgraph: the infection event
//! list and per-token character records. Queries are plain HTTP POSTs with a
//! `{query, variables}` JSON body; responses arrive wrapped in the standard
//! `{"data": ...}` envelope.

use gloo_net::http::Request;

/// Fixed subgraph endpoint
pub const SUBGRAPH_URL: &str =
    "https://api.thegraph.com/subgraphs/name/wagdie/wagdieworld-mainnet";

// Two token IDs are excluded at the query level, before any client-side
// filtering.
const INFECTIONS_QUERY: &str = r#"
query GetInfections {
  infections(
    orderBy: timestamp
    orderDirection: desc
    where: { infectedToken_not_in: ["1218", "375"] }
  ) {
    infectedToken
    sender {
      id
    }
    timestamp
  }
}
"#;

const CHARACTER_QUERY: &str = r#"
query GetCharacter($id: ID!) {
  character(id: $id) {
    burned
    location {
      name
    }
    owner {
      id
    }
  }
}
"#;

// ============ Record Types ============

/// A single infection event from the indexer. Immutable and read-only;
/// uniqueness by token ID is enforced client-side at display time.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct InfectionEvent {
    #[serde(rename = "infectedToken")]
    pub infected_token: String,
    pub sender: Wallet,
    /// Unix seconds. The subgraph serializes its BigInt as a string.
    #[serde(deserialize_with = "de_unix_seconds")]
    pub timestamp: i64,
}

/// A wallet address record
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct Wallet {
    pub id: String,
}

/// Character record from the subgraph, fetched per token on demand
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct CharacterDetail {
    #[serde(default)]
    pub burned: bool,
    #[serde(default)]
    pub location: Option<Location>,
    pub owner: Wallet,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct Location {
    #[serde(default)]
    pub name: Option<String>,
}

/// Subgraph BigInt fields arrive as JSON strings; plain ints are accepted too.
fn de_unix_seconds<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(serde::Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(i64),
        Text(String),
    }

    match <Raw as serde::Deserialize>::deserialize(deserializer)? {
        Raw::Num(n) => Ok(n),
        Raw::Text(s) => s.parse().map_err(serde::de::Error::custom),
    }
}

// ============ Response Envelopes ============

#[derive(Debug, serde::Deserialize)]
struct GraphResponse<T> {
    // "default" alone would put a Default bound on T; defaulting the Option
    // itself keeps the derive generic.
    #[serde(default = "Option::default")]
    data: Option<T>,
}

#[derive(Debug, serde::Deserialize)]
struct InfectionsData {
    infections: Vec<InfectionEvent>,
}

#[derive(Debug, serde::Deserialize)]
struct CharacterData {
    character: Option<CharacterDetail>,
}

// ============ Queries ============

/// Fetch the full infection list, newest first
pub async fn fetch_infections() -> Result<Vec<InfectionEvent>, String> {
    #[derive(serde::Serialize)]
    struct InfectionsRequest {
        query: &'static str,
    }

    let response = Request::post(SUBGRAPH_URL)
        .json(&InfectionsRequest {
            query: INFECTIONS_QUERY,
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Subgraph returned status {}", response.status()));
    }

    let result: GraphResponse<InfectionsData> = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    result
        .data
        .map(|d| d.infections)
        .ok_or_else(|| "Subgraph response had no data".to_string())
}

/// Fetch the character record for one token. `Ok(None)` means the subgraph
/// has no character under that ID, which is a normal answer for a token that
/// was never minted or indexed.
pub async fn fetch_character(token_id: &str) -> Result<Option<CharacterDetail>, String> {
    #[derive(serde::Serialize)]
    struct CharacterRequest {
        query: &'static str,
        variables: CharacterVars,
    }

    #[derive(serde::Serialize)]
    struct CharacterVars {
        id: String,
    }

    let response = Request::post(SUBGRAPH_URL)
        .json(&CharacterRequest {
            query: CHARACTER_QUERY,
            variables: CharacterVars {
                id: token_id.to_string(),
            },
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Subgraph returned status {}", response.status()));
    }

    let result: GraphResponse<CharacterData> = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    result
        .data
        .map(|d| d.character)
        .ok_or_else(|| "Subgraph response had no data".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_infections_envelope() {
        let body = r#"{
            "data": {
                "infections": [
                    {"infectedToken": "1043", "sender": {"id": "0xabc"}, "timestamp": "1679702400"},
                    {"infectedToken": "375", "sender": {"id": "0xdef"}, "timestamp": 1679702500}
                ]
            }
        }"#;

        let parsed: GraphResponse<InfectionsData> = serde_json::from_str(body).unwrap();
        let infections = parsed.data.unwrap().infections;
        assert_eq!(infections.len(), 2);
        assert_eq!(infections[0].infected_token, "1043");
        assert_eq!(infections[0].sender.id, "0xabc");
        assert_eq!(infections[0].timestamp, 1679702400);
        assert_eq!(infections[1].timestamp, 1679702500);
    }

    #[test]
    fn test_decode_character_present() {
        let body = r#"{
            "data": {
                "character": {
                    "burned": false,
                    "location": {"name": "The Crypt"},
                    "owner": {"id": "0x123"}
                }
            }
        }"#;

        let parsed: GraphResponse<CharacterData> = serde_json::from_str(body).unwrap();
        let character = parsed.data.unwrap().character.unwrap();
        assert!(!character.burned);
        assert_eq!(character.location.unwrap().name.as_deref(), Some("The Crypt"));
        assert_eq!(character.owner.id, "0x123");
    }

    #[test]
    fn test_decode_envelope_without_data_key() {
        // Error-only responses omit "data" entirely
        let parsed: GraphResponse<InfectionsData> =
            serde_json::from_str(r#"{"errors": [{"message": "boom"}]}"#).unwrap();
        assert!(parsed.data.is_none());
    }

    #[test]
    fn test_decode_character_missing() {
        let body = r#"{"data": {"character": null}}"#;
        let parsed: GraphResponse<CharacterData> = serde_json::from_str(body).unwrap();
        assert!(parsed.data.unwrap().character.is_none());
    }

    #[test]
    fn test_decode_character_null_location_name() {
        let body = r#"{
            "data": {
                "character": {
                    "burned": true,
                    "location": {"name": null},
                    "owner": {"id": "0x123"}
                }
            }
        }"#;

        let parsed: GraphResponse<CharacterData> = serde_json::from_str(body).unwrap();
        let character = parsed.data.unwrap().character.unwrap();
        assert!(character.burned);
        assert!(character.location.unwrap().name.is_none());
    }
}
