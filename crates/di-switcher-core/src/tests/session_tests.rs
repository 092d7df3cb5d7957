use tracing_test::traced_test;

use super::fake_port::{Desk, VK_LEFT, VK_SPACE, char_down};
use crate::{
    engine::{
        HookDecision, KeyEvent, Modifiers, Replacement,
        event::{VK_BACK, VK_ESCAPE, VK_PAUSE, VK_Q},
    },
    policy::LAST_FIX_WINDOW_MS,
    text::{Language, Token},
};

const CTRL: Modifiers = Modifiers {
    ctrl: true,
    alt: false,
    shift: false,
};

#[test]
fn wrong_layout_word_is_retyped_on_space() {
    let mut desk = Desk::new();
    desk.type_text("руддщ ");

    assert_eq!(desk.port.screen, "hello ");
    assert_eq!(desk.port.layout_requests, vec![Language::English]);
    assert_eq!(
        desk.port.replacements,
        vec![Replacement {
            backspaces: 5,
            text: Token::from("hello"),
            boundary: Some(' '),
        }]
    );
    assert_eq!(desk.swallowed_ups, 1);
    assert_eq!(desk.session.pending_swallow(), None);
    assert!(desk.session.token().is_empty());
    assert!(desk.session.last_fix().is_active());
}

#[test]
fn boundary_keydown_is_swallowed_and_only_its_keyup_is_eaten() {
    let mut desk = Desk::new();
    desk.type_text("руддщ");

    let decision = desk
        .session
        .handle_event(&mut desk.port, &char_down(' '));
    assert_eq!(decision, HookDecision::Swallow);
    assert_eq!(desk.session.pending_swallow(), Some(VK_SPACE));

    let other_up = KeyEvent::up(0x41);
    assert_eq!(
        desk.session.handle_event(&mut desk.port, &other_up),
        HookDecision::Pass
    );

    let space_up = KeyEvent::up(VK_SPACE);
    assert_eq!(
        desk.session.handle_event(&mut desk.port, &space_up),
        HookDecision::Swallow
    );
    assert_eq!(
        desk.session.handle_event(&mut desk.port, &space_up),
        HookDecision::Pass
    );
}

#[test]
fn toggle_twice_round_trips_the_document() {
    let mut desk = Desk::new();
    desk.type_text("ghbdtn,");
    // "ghbdtn" ended at the comma, which is typed back after the fix.
    assert_eq!(desk.port.screen, "привет,");

    assert_eq!(desk.toggle(), HookDecision::Swallow);
    assert_eq!(desk.port.screen, "ghbdtn,");
    assert_eq!(desk.port.layout_requests.last(), Some(&Language::English));

    assert_eq!(desk.toggle(), HookDecision::Swallow);
    assert_eq!(desk.port.screen, "привет,");
    assert_eq!(desk.port.layout_requests.last(), Some(&Language::Russian));
}

#[test]
fn boundary_after_a_fix_ends_the_toggle_window() {
    let mut desk = Desk::new();
    desk.type_text("ghbdtn, ");
    assert_eq!(desk.port.screen, "привет, ");
    assert!(!desk.session.last_fix().is_active());
    assert_eq!(desk.toggle(), HookDecision::Pass);
}

#[test]
fn toggle_after_window_passes_through() {
    let mut desk = Desk::new();
    desk.type_text("руддщ ");
    let sent = desk.port.replacements.len();

    desk.advance(LAST_FIX_WINDOW_MS + 1);
    assert_eq!(desk.toggle(), HookDecision::Pass);
    assert_eq!(desk.port.screen, "hello ");
    assert_eq!(desk.port.replacements.len(), sent);
}

#[test]
fn toggling_keeps_the_window_alive() {
    let mut desk = Desk::new();
    desk.type_text("руддщ ");
    for _ in 0..3 {
        desk.advance(20_000);
        assert_eq!(desk.toggle(), HookDecision::Swallow);
    }
    assert_eq!(desk.port.screen, "руддщ ");
}

#[test]
fn typing_after_a_fix_forgets_it() {
    let mut desk = Desk::new();
    desk.type_text("руддщ ");
    desk.type_text("a");
    assert!(!desk.session.last_fix().is_active());
    assert_eq!(desk.toggle(), HookDecision::Pass);
}

#[test]
fn pause_without_fix_passes_through() {
    let mut desk = Desk::new();
    assert_eq!(desk.key(VK_PAUSE), HookDecision::Pass);
    desk.type_text("руд");
    assert_eq!(desk.key(VK_PAUSE), HookDecision::Pass);
    // Pause does not touch the pending word.
    assert_eq!(desk.session.token(), &Token::from("руд"));
}

#[test]
fn correctly_typed_words_are_untouched() {
    let mut desk = Desk::new();
    desk.type_text("test this hello привет ");
    assert_eq!(desk.port.screen, "test this hello привет ");
    assert!(desk.port.replacements.is_empty());
    assert!(desk.port.layout_requests.is_empty());
}

#[test]
fn identifiers_with_digits_are_untouched() {
    let mut desk = Desk::new();
    desk.type_text("C3PO ");
    assert_eq!(desk.port.screen, "C3PO ");
    assert!(desk.port.replacements.is_empty());
}

#[test]
fn two_char_tokens_never_trigger() {
    let mut desk = Desk::new();
    desk.type_text("yt ");
    assert!(desk.port.replacements.is_empty());
    desk.type_text("ytn ");
    assert_eq!(desk.port.screen, "yt нет ");
}

#[test]
fn backspace_edits_the_pending_word() {
    let mut desk = Desk::new();
    desk.type_text("руддщщ");
    assert_eq!(desk.key(VK_BACK), HookDecision::Pass);
    assert_eq!(desk.port.screen, "руддщ");
    desk.type_text(" ");
    assert_eq!(desk.port.screen, "hello ");
}

#[test]
fn backspace_on_empty_token_is_harmless() {
    let mut desk = Desk::new();
    assert_eq!(desk.key(VK_BACK), HookDecision::Pass);
    assert!(desk.session.token().is_empty());
}

#[test]
fn escape_resets_the_word() {
    let mut desk = Desk::new();
    desk.type_text("руд");
    assert_eq!(desk.key(VK_ESCAPE), HookDecision::Pass);
    desk.type_text("дщ ");
    assert!(desk.port.replacements.is_empty());
}

#[test]
fn shortcuts_forget_the_fix_and_pass_through() {
    let mut desk = Desk::new();
    desk.type_text("руддщ ");
    assert!(desk.session.last_fix().is_active());

    let copy = KeyEvent::down(0x43).with_mods(CTRL);
    assert_eq!(desk.press(copy, None), HookDecision::Pass);
    assert!(!desk.session.last_fix().is_active());
    assert_eq!(desk.toggle(), HookDecision::Pass);
    assert_eq!(desk.port.screen, "hello ");
}

#[test]
fn shortcuts_reset_the_pending_word() {
    let mut desk = Desk::new();
    desk.type_text("руд");
    let copy = KeyEvent::down(0x43).with_mods(CTRL);
    assert_eq!(desk.press(copy, None), HookDecision::Pass);
    assert!(desk.session.token().is_empty());

    desk.type_text("дщ ");
    assert!(desk.port.replacements.is_empty());
}

#[test]
fn shift_inside_a_word_does_not_split_it() {
    let mut desk = Desk::new();
    desk.type_with_shift("Руддщ ");
    assert_eq!(desk.port.screen, "Hello ");
}

#[test]
fn enter_ends_the_word_and_is_retyped_after_the_fix() {
    let mut desk = Desk::new();
    desk.type_text("руддщ");

    assert_eq!(desk.press(char_down('\r'), Some('\r')), HookDecision::Swallow);

    assert_eq!(desk.port.screen, "hello\r");
    assert_eq!(
        desk.port.replacements,
        vec![Replacement {
            backspaces: 5,
            text: Token::from("hello"),
            boundary: Some('\r'),
        }]
    );
    assert_eq!(desk.swallowed_ups, 1);
    assert!(desk.session.last_fix().is_active());
}

#[test]
fn tab_ends_the_word_like_a_space() {
    let mut desk = Desk::new();
    desk.type_text("ghbdtn\t");

    assert_eq!(desk.port.screen, "привет\t");
    assert_eq!(desk.port.replacements[0].boundary, Some('\t'));
    assert_eq!(desk.swallowed_ups, 1);

    assert_eq!(desk.toggle(), HookDecision::Swallow);
    assert_eq!(desk.port.screen, "ghbdtn\t");
}

#[test]
fn non_text_key_corrects_without_boundary_and_forgets_the_fix() {
    let mut desk = Desk::new();
    desk.type_text("ghbdtn");
    assert_eq!(desk.key(VK_LEFT), HookDecision::Pass);

    assert_eq!(
        desk.port.replacements,
        vec![Replacement {
            backspaces: 6,
            text: Token::from("привет"),
            boundary: None,
        }]
    );
    assert_eq!(desk.port.screen, "привет");
    assert_eq!(desk.swallowed_ups, 0);
    assert!(!desk.session.last_fix().is_active());
    assert_eq!(desk.toggle(), HookDecision::Pass);
}

#[test]
fn synthetic_events_are_ignored() {
    let mut desk = Desk::new();
    let injected = char_down('р').synthetic();
    assert_eq!(
        desk.session.handle_event(&mut desk.port, &injected),
        HookDecision::Pass
    );
    assert!(desk.session.token().is_empty());
    assert_eq!(desk.port.resolve_calls, 0);

    // Replaying our own replacement as injected input changes nothing.
    desk.type_text("руддщ ");
    let calls = desk.port.resolve_calls;
    for ch in "hello ".chars() {
        let ev = char_down(ch).synthetic();
        assert_eq!(desk.session.handle_event(&mut desk.port, &ev), HookDecision::Pass);
    }
    assert_eq!(desk.port.resolve_calls, calls);
    assert_eq!(desk.port.replacements.len(), 1);
}

#[test]
fn panic_chord_exits() {
    let mut desk = Desk::new();
    let mods = Modifiers {
        ctrl: true,
        alt: true,
        shift: true,
    };
    let ev = KeyEvent::down(VK_Q).with_mods(mods);
    assert_eq!(desk.session.handle_event(&mut desk.port, &ev), HookDecision::Exit);
    assert!(HookDecision::Exit.should_swallow());
}

#[test]
fn overflowed_word_is_not_corrected() {
    let mut desk = Desk::new();
    desk.type_text(&"руддщ".repeat(14));
    desk.type_text(" ");
    assert!(desk.port.replacements.is_empty());

    desk.type_text("руддщ ");
    assert_eq!(desk.port.replacements.len(), 1);
}

#[traced_test]
#[test]
fn layout_refusal_does_not_stop_the_replacement() {
    let mut desk = Desk::new();
    desk.port.fail_layout = true;
    desk.type_text("руддщ ");

    assert_eq!(desk.port.screen, "hello ");
    assert!(desk.session.last_fix().is_active());
    assert!(logs_contain("layout switch request failed"));
}

#[traced_test]
#[test]
fn skipped_tokens_log_the_reason() {
    let mut desk = Desk::new();
    desk.type_text("test ");
    assert!(logs_contain("autocorrect skip"));
    assert!(logs_contain("mapped_score_low"));
}

#[traced_test]
#[test]
fn applied_corrections_log_their_direction() {
    let mut desk = Desk::new();
    desk.type_text("ghbdtn ");
    assert!(logs_contain("autocorrect"));
    assert!(logs_contain("direction=EnToRu"));
}
