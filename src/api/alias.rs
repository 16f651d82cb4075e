//! Wallet Alias Resolution
//!
//! Optional reverse lookup of a wallet address to a human-readable name via a
//! third-party naming service. An API key, when one has been stored in local
//! storage, is sent along with the request; without a key the public endpoint
//! is used as-is. Any failure resolves to "no alias" and the caller falls
//! back to the raw address.

use gloo_net::http::Request;

/// Default address-to-name resolution endpoint
pub const DEFAULT_RESOLVER_BASE: &str = "https://api.ensideas.com/ens/resolve";

const RESOLVER_KEY_STORAGE: &str = "spore_tracker_resolver_key";

/// Read the optional naming service API key from local storage
pub fn get_resolver_key() -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    storage
        .get_item(RESOLVER_KEY_STORAGE)
        .ok()?
        .filter(|key| !key.is_empty())
}

/// Store a naming service API key in local storage
pub fn set_resolver_key(key: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(RESOLVER_KEY_STORAGE, key);
        }
    }
}

#[derive(Debug, serde::Deserialize)]
struct ResolveResponse {
    #[serde(default)]
    name: Option<String>,
}

/// Resolve a wallet address to its alias, if the service knows one
pub async fn resolve_alias(address: &str) -> Result<Option<String>, String> {
    let url = match get_resolver_key() {
        Some(key) => format!("{}/{}?api_key={}", DEFAULT_RESOLVER_BASE, address, key),
        None => format!("{}/{}", DEFAULT_RESOLVER_BASE, address),
    };

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Resolver returned status {}", response.status()));
    }

    let result: ResolveResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.name.filter(|name| !name.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_resolved_name() {
        let parsed: ResolveResponse =
            serde_json::from_str(r#"{"address": "0xabc", "name": "archivist.eth"}"#).unwrap();
        assert_eq!(parsed.name.as_deref(), Some("archivist.eth"));
    }

    #[test]
    fn test_decode_unresolved_address() {
        let parsed: ResolveResponse =
            serde_json::from_str(r#"{"address": "0xabc", "name": null}"#).unwrap();
        assert!(parsed.name.is_none());
    }
}
