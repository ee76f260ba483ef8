use std::sync::Once;

use pretty_assertions::assert_eq;
use reader_core::{update, Effect, Msg, PageState, Response, NO_TEXT_MESSAGE};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(reader_logging::initialize_for_tests);
}

const PAGE: &str = "  Cats are great. Dogs are great. Cats and dogs are animals. I love my cat.\n";

fn loaded() -> PageState {
    let (state, effects) = update(
        PageState::new(),
        Msg::PageLoaded {
            text: PAGE.to_string(),
        },
    );
    assert!(effects.is_empty());
    state
}

#[test]
fn summarize_page_shows_summary() {
    init_logging();
    let (mut state, effects) = update(
        loaded(),
        Msg::SummarizePage {
            sentence_count: Some(2),
        },
    );
    assert!(effects.is_empty());
    assert_eq!(
        state.view().summary.as_deref(),
        Some("Cats are great. Cats and dogs are animals.")
    );
    assert!(state.consume_dirty());
}

#[test]
fn summarize_page_defaults_to_three_sentences() {
    init_logging();
    let (state, _) = update(loaded(), Msg::SummarizePage { sentence_count: None });
    assert_eq!(
        state.view().summary.as_deref(),
        Some("Cats are great. Dogs are great. Cats and dogs are animals.")
    );
}

#[test]
fn negative_sentence_count_selects_one() {
    init_logging();
    let (state, _) = update(
        loaded(),
        Msg::SummarizePage {
            sentence_count: Some(-3),
        },
    );
    assert_eq!(
        state.view().summary.as_deref(),
        Some("Cats and dogs are animals.")
    );
}

#[test]
fn empty_page_shows_fallback_message() {
    init_logging();
    let (state, _) = update(
        PageState::new(),
        Msg::SummarizePage {
            sentence_count: Some(3),
        },
    );
    assert_eq!(state.view().summary.as_deref(), Some(NO_TEXT_MESSAGE));
}

#[test]
fn loading_a_new_page_clears_summary() {
    init_logging();
    let (state, _) = update(loaded(), Msg::SummarizePage { sentence_count: None });
    let (mut state, _) = update(
        state,
        Msg::PageLoaded {
            text: "Fresh page.".to_string(),
        },
    );
    assert_eq!(state.view().summary, None);
    assert!(state.consume_dirty());
}

#[test]
fn page_text_request_returns_trimmed_text() {
    init_logging();
    let (_, effects) = update(loaded(), Msg::GetPageText);
    assert_eq!(
        effects,
        vec![Effect::Respond(Response::Text {
            text: PAGE.trim().to_string()
        })]
    );
}

#[test]
fn read_uses_rate_and_defaults_to_one() {
    init_logging();
    let (state, effects) = update(loaded(), Msg::Read { rate: Some(1.5) });
    assert_eq!(
        effects,
        vec![Effect::Speak {
            text: PAGE.to_string(),
            rate: 1.5
        }]
    );

    let (state, effects) = update(state, Msg::Read { rate: Some(0.0) });
    assert!(matches!(effects.as_slice(), [Effect::Speak { rate, .. }] if *rate == 1.0));

    let (_, effects) = update(state, Msg::StopReading);
    assert_eq!(effects, vec![Effect::CancelSpeech]);
}

#[test]
fn read_on_blank_page_does_nothing() {
    init_logging();
    let (_, effects) = update(PageState::new(), Msg::Read { rate: None });
    assert!(effects.is_empty());
}

#[test]
fn read_limit_is_configurable_per_page() {
    init_logging();
    let state = PageState::new().with_read_limit_chars(9);
    let (state, _) = update(
        state,
        Msg::PageLoaded {
            text: "Cats are great.".to_string(),
        },
    );
    let (_, effects) = update(state, Msg::Read { rate: None });
    assert_eq!(
        effects,
        vec![Effect::Speak {
            text: "Cats are ".to_string(),
            rate: 1.0
        }]
    );
}
