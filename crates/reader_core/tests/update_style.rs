use std::sync::Once;

use reader_core::{update, Msg, PageState, DEFAULT_FONT_SIZE_PX};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(reader_logging::initialize_for_tests);
}

fn apply(state: PageState, msgs: Vec<Msg>) -> PageState {
    msgs.into_iter().fold(state, |state, msg| {
        let (next, effects) = update(state, msg);
        assert!(effects.is_empty());
        next
    })
}

#[test]
fn style_messages_update_view_and_mark_dirty() {
    init_logging();
    let mut state = apply(
        PageState::new(),
        vec![
            Msg::FontSize { value: 22 },
            Msg::LineHeight { value: 1.8 },
            Msg::FontFamily {
                value: "Verdana".to_string(),
            },
        ],
    );

    let view = state.view();
    assert_eq!(view.font_size_px, Some(22));
    assert_eq!(view.line_height_hundredths, Some(180));
    assert_eq!(view.font_family.as_deref(), Some("Verdana"));
    assert!(view.dirty);
    assert!(state.consume_dirty());
    assert!(!state.consume_dirty());
}

#[test]
fn default_font_family_clears_override() {
    init_logging();
    let state = apply(
        PageState::new(),
        vec![
            Msg::FontFamily {
                value: "Georgia".to_string(),
            },
            Msg::FontFamily {
                value: "default".to_string(),
            },
        ],
    );
    assert_eq!(state.view().font_family, None);
}

#[test]
fn bold_and_italic_toggle() {
    init_logging();
    let state = apply(PageState::new(), vec![Msg::Bold, Msg::Italic]);
    assert!(state.view().bold);
    assert!(state.view().italic);

    let state = apply(state, vec![Msg::Bold]);
    assert!(!state.view().bold);
    assert!(state.view().italic);
}

#[test]
fn invalid_line_height_is_ignored() {
    init_logging();
    let mut state = apply(
        PageState::new(),
        vec![
            Msg::LineHeight { value: -1.0 },
            Msg::LineHeight { value: f32::NAN },
        ],
    );
    assert_eq!(state.view().line_height_hundredths, None);
    assert!(!state.consume_dirty());
}

#[test]
fn pages_do_not_share_style() {
    init_logging();
    let first = apply(PageState::new(), vec![Msg::Bold, Msg::FontSize { value: 30 }]);
    let second = PageState::new();

    assert!(first.view().bold);
    assert!(!second.view().bold);
    assert_eq!(second.style().effective_font_size_px(), DEFAULT_FONT_SIZE_PX);
}
