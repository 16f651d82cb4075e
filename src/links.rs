//! External Link and Asset URLs
//!
//! Helpers for the fixed character page, marketplace, and image bucket URLs.

/// Character page for a token
pub fn character_page_url(token_id: &str) -> String {
    format!("http://fateofwagdie.com/characters/{}", token_id)
}

/// Marketplace profile for a wallet
pub fn marketplace_url(address: &str) -> String {
    format!("http://opensea.io/{}", address)
}

/// Portrait shown on infection list rows
pub fn infected_image_url(token_id: &str) -> String {
    format!(
        "https://storage.googleapis.com/infected-wagdie-images/{}.png",
        token_id
    )
}

/// First-choice portrait for a searched, uninfected token
pub fn seared_image_url(token_id: &str) -> String {
    format!(
        "https://storage.googleapis.com/seared-wagdie-images/{}.png",
        token_id
    )
}

/// Fallback portrait when the seared bucket has no image for the token
pub fn base_image_url(token_id: &str) -> String {
    format!(
        "https://storage.googleapis.com/wagdie-images/{}.png",
        token_id
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_page_url() {
        assert_eq!(
            character_page_url("104"),
            "http://fateofwagdie.com/characters/104"
        );
    }

    #[test]
    fn test_image_buckets_keyed_by_token() {
        assert_eq!(
            infected_image_url("104"),
            "https://storage.googleapis.com/infected-wagdie-images/104.png"
        );
        assert_eq!(
            seared_image_url("104"),
            "https://storage.googleapis.com/seared-wagdie-images/104.png"
        );
        assert_eq!(
            base_image_url("104"),
            "https://storage.googleapis.com/wagdie-images/104.png"
        );
    }
}
