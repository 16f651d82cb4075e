//! Character Metadata API
//!
//! REST lookups against the character sheet API. Each visible row fetches its
//! own sheet independently; nothing is cached across components.

use gloo_net::http::Request;

/// Base URL of the character metadata API
pub const CHARACTERS_API_BASE: &str = "https://fateofwagdie.com/api/characters";

/// Sheet name the API hands out before a character has been named
const UNNAMED_SHEET: &str = "New Character";

/// Health trait values recognized on the character sheet
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Health {
    Alive,
    Dead,
}

impl Health {
    pub fn label(self) -> &'static str {
        match self {
            Health::Alive => "Alive",
            Health::Dead => "Dead",
        }
    }
}

/// The slice of the sheet document the dashboard displays
#[derive(Clone, Debug, PartialEq)]
pub struct CharacterSheet {
    /// Display name; "Unknown" when the sheet is still unnamed
    pub name: String,
    /// Present only when the Health trait is exactly "Alive" or "Dead"
    pub health: Option<Health>,
}

// ============ Raw Document ============

#[derive(Debug, serde::Deserialize)]
struct CharacterDocument {
    sheet: Sheet,
    #[serde(rename = "rawMetadata", default)]
    raw_metadata: RawMetadata,
}

#[derive(Debug, serde::Deserialize)]
struct Sheet {
    #[serde(default)]
    name: String,
}

#[derive(Debug, Default, serde::Deserialize)]
struct RawMetadata {
    #[serde(default)]
    attributes: Vec<Attribute>,
}

#[derive(Debug, serde::Deserialize)]
struct Attribute {
    #[serde(default)]
    trait_type: String,
    #[serde(default)]
    value: serde_json::Value,
}

fn sheet_from_document(doc: CharacterDocument) -> CharacterSheet {
    let name = if doc.sheet.name == UNNAMED_SHEET || doc.sheet.name.is_empty() {
        "Unknown".to_string()
    } else {
        doc.sheet.name
    };

    let health = doc
        .raw_metadata
        .attributes
        .iter()
        .find(|a| a.trait_type == "Health")
        .and_then(|a| match a.value.as_str() {
            Some("Alive") => Some(Health::Alive),
            Some("Dead") => Some(Health::Dead),
            _ => None,
        });

    CharacterSheet { name, health }
}

/// Fetch the character sheet for one token
pub async fn fetch_character_sheet(token_id: &str) -> Result<CharacterSheet, String> {
    let response = Request::get(&format!("{}/{}", CHARACTERS_API_BASE, token_id))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "Character API returned status {}",
            response.status()
        ));
    }

    let doc: CharacterDocument = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(sheet_from_document(doc))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(body: &str) -> CharacterSheet {
        sheet_from_document(serde_json::from_str(body).unwrap())
    }

    #[test]
    fn test_named_character_with_health() {
        let sheet = decode(
            r#"{
                "sheet": {"name": "Morderan the Pale"},
                "rawMetadata": {"attributes": [
                    {"trait_type": "Origin", "value": "The Forest"},
                    {"trait_type": "Health", "value": "Alive"}
                ]}
            }"#,
        );
        assert_eq!(sheet.name, "Morderan the Pale");
        assert_eq!(sheet.health, Some(Health::Alive));
    }

    #[test]
    fn test_unnamed_character_displays_unknown() {
        let sheet = decode(
            r#"{
                "sheet": {"name": "New Character"},
                "rawMetadata": {"attributes": [
                    {"trait_type": "Health", "value": "Dead"}
                ]}
            }"#,
        );
        assert_eq!(sheet.name, "Unknown");
        assert_eq!(sheet.health, Some(Health::Dead));
    }

    #[test]
    fn test_unrecognized_health_value_is_dropped() {
        let sheet = decode(
            r#"{
                "sheet": {"name": "Wanderer"},
                "rawMetadata": {"attributes": [
                    {"trait_type": "Health", "value": "Wounded"}
                ]}
            }"#,
        );
        assert_eq!(sheet.health, None);
    }

    #[test]
    fn test_missing_metadata_block() {
        let sheet = decode(r#"{"sheet": {"name": "Wanderer"}}"#);
        assert_eq!(sheet.name, "Wanderer");
        assert_eq!(sheet.health, None);
    }
}
