//! Archivist Component
//!
//! Decorative clickable figure pinned to the corner of the page. A click
//! plays the breath sound and raises one random taunt line in a full-screen
//! overlay; clicks are ignored until the active taunt clears.

use leptos::*;

use crate::state::global::GlobalState;

const ARCHIVIST_IMAGE_SRC: &str = "assets/archivist.png";
const BREATH_SOUND_SRC: &str = "assets/breath.wav";

const TAUNT_LINES: &[&str] = &[
    "We will know who is responsible",
    "The spread grows",
    "There is no hope to quiet this infection",
    "Punishment for the guilty will be heavy",
    "This plague spreads like wildfire",
    "Judgment will be harsh for those who ignore our warning",
    "Fear of infection consumes",
    "The spread of disease is a silent killer",
    "The plague is the harbinger of our mortality",
    "Judgment for infecting others is deserved",
    "The spread is exponential",
    "Spores have exposed our weaknesses",
    "Guilt of not doing enough should overwhelm",
    "Spread of the disease deserves retribution",
    "Judgement is swift for those who contribute",
    "Infection has led to chaos",
    "This plague has brought to light our inequalities",
    "Etched in history as spreaders of the infection",
    "We will not forget those who put others at risk",
    "Their actions have consequences, and thy names will be known",
    "The guilty parties will be held accountable, by name",
    "Their names will be remembered as spreaders of disease",
    "The guilty will be named for their misdeeds",
    "Those who spread will be chronicled for all to see",
    "They will not escape judgement",
    "History will remember those who spread the plague",
    "Their names will forever be linked to death",
    "Those who spread the disease will not escape being named",
    "The guilty will be remembered by name",
    "Their names will be recorded in history",
    "The chronicles ensure their names are not forgotten",
    "Those who spread will be named and held accountable",
    "The names of the guilty will not be forgotten",
];

/// Clickable Archivist figure
#[component]
pub fn Archivist() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <img
            src=ARCHIVIST_IMAGE_SRC
            alt="Archivist"
            class="archivist-image"
            on:click=move |_| {
                if state.taunt.get_untracked().is_some() {
                    return;
                }
                play_breath_sound();
                state.show_taunt(random_taunt());
            }
        />
    }
}

/// Full-screen overlay showing the active taunt line
#[component]
pub fn TauntOverlay() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        {move || {
            state.taunt.get().map(|line| {
                view! { <div class="taunt-overlay">{line}</div> }
            })
        }}
    }
}

fn random_taunt() -> &'static str {
    let index = (js_sys::Math::random() * TAUNT_LINES.len() as f64) as usize;
    TAUNT_LINES[index.min(TAUNT_LINES.len() - 1)]
}

fn play_breath_sound() {
    if let Ok(audio) = web_sys::HtmlAudioElement::new_with_src(BREATH_SOUND_SRC) {
        let _ = audio.play();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_taunt_lines_present_and_nonempty() {
        assert_eq!(TAUNT_LINES.len(), 33);
        assert!(TAUNT_LINES.iter().all(|line| !line.is_empty()));
    }
}
