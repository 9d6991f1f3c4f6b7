//! Property-Based Tests for sway-setup
//!
//! Uses proptest for invariants over arbitrary key sequences:
//! - selection never leaves the menu
//! - only q / Ctrl-C quit, and only Enter asks for an action

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use proptest::prelude::*;
use swaysetup::{App, KeyOutcome, SetupAction, SetupConfig, Theme};

/// Keys other than Enter, q, and Ctrl-C
fn non_terminal_key_strategy() -> impl Strategy<Value = KeyEvent> {
    let code = prop_oneof![
        Just(KeyCode::Up),
        Just(KeyCode::Down),
        Just(KeyCode::PageUp),
        Just(KeyCode::PageDown),
        Just(KeyCode::Home),
        Just(KeyCode::End),
        Just(KeyCode::Esc),
        Just(KeyCode::Tab),
        Just(KeyCode::Left),
        Just(KeyCode::Right),
        prop::char::range('a', 'z')
            .prop_filter("q quits", |c| *c != 'q')
            .prop_map(KeyCode::Char),
        Just(KeyCode::Char('G')),
        Just(KeyCode::Char('?')),
    ];
    let modifiers = prop_oneof![Just(KeyModifiers::NONE), Just(KeyModifiers::SHIFT)];
    (code, modifiers).prop_map(|(code, modifiers)| KeyEvent::new(code, modifiers))
}

fn any_key_strategy() -> impl Strategy<Value = KeyEvent> {
    prop_oneof![
        4 => non_terminal_key_strategy(),
        1 => Just(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
    ]
}

fn app() -> App {
    let config = SetupConfig::default().with_dry_run(true);
    App::new(config, Theme::default())
}

proptest! {
    /// Selection stays within [0, len-1] for any non-terminal key sequence
    #[test]
    fn selection_stays_in_bounds(keys in prop::collection::vec(non_terminal_key_strategy(), 0..64)) {
        let mut app = app();
        let len = app.state().items.len();
        for key in keys {
            let outcome = app.handle_key_event(key);
            prop_assert_eq!(outcome, KeyOutcome::Continue);
            prop_assert!(app.state().selected < len);
            prop_assert!(!app.state().quitting);
        }
    }

    /// Enter always names the action under the cursor
    #[test]
    fn enter_runs_selected_action(keys in prop::collection::vec(any_key_strategy(), 0..64)) {
        let mut app = app();
        for key in keys {
            let selected = app.state().items[app.state().selected];
            let help_open = app.state().help_visible;
            match app.handle_key_event(key) {
                KeyOutcome::Run(action) => {
                    prop_assert_eq!(key.code, KeyCode::Enter);
                    prop_assert!(!help_open);
                    prop_assert_eq!(action, selected);
                }
                KeyOutcome::Quit => prop_assert!(false, "no quit key was generated"),
                KeyOutcome::Continue => {}
            }
        }
        prop_assert!(app.state().last_message.is_none());
    }

    /// Title lookup agrees with Display for every action
    #[test]
    fn title_lookup_round_trip(index in 0usize..4) {
        let action = SetupAction::all()[index];
        let parsed = SetupAction::from_title(&action.title()).unwrap();
        prop_assert_eq!(parsed, action);
    }
}
