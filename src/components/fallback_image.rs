//! Fallback Image Component
//!
//! Portrait for a searched, uninfected token. Tries the seared image bucket
//! first and swaps to the base bucket when the load fails. The swap happens
//! at most once: re-setting the same src on a failing fallback would retrigger
//! the load and spin on a token missing from both buckets.

use leptos::*;

use crate::links;

/// Character portrait with a two-tier bucket fallback
#[component]
pub fn FallbackImage(
    #[prop(into)]
    token_id: String,
) -> impl IntoView {
    let fallback = links::base_image_url(&token_id);
    let src = create_rw_signal(links::seared_image_url(&token_id));

    view! {
        <img
            src=move || src.get()
            alt="Not Infected"
            class="character-image"
            on:error=move |_| {
                if let Some(next) = fallback_src(&src.get_untracked(), &fallback) {
                    src.set(next);
                }
            }
        />
    }
}

/// Next src to try after a load failure; `None` once the fallback itself has
/// failed.
fn fallback_src(current: &str, fallback: &str) -> Option<String> {
    (current != fallback).then(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_failure_swaps_to_fallback() {
        let seared = links::seared_image_url("104");
        let base = links::base_image_url("104");
        assert_eq!(fallback_src(&seared, &base), Some(base));
    }

    #[test]
    fn test_failing_fallback_is_not_retried() {
        let base = links::base_image_url("104");
        assert_eq!(fallback_src(&base, &base), None);
    }
}
