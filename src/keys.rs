//! Key bindings for the picker and editor panes.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;

/// What the main loop should do after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue,
    Quit,
}

/// Dispatch a key press to the focused pane
pub fn handle_key(app: &mut App, key: KeyEvent) -> KeyOutcome {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl && key.code == KeyCode::Char('c') {
        return KeyOutcome::Quit;
    }

    if app.is_editing() {
        handle_editor_key(app, key, ctrl);
        KeyOutcome::Continue
    } else {
        handle_picker_key(app, key)
    }
}

fn handle_picker_key(app: &mut App, key: KeyEvent) -> KeyOutcome {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return KeyOutcome::Quit,
        KeyCode::Char(' ') | KeyCode::Char('n') | KeyCode::Enter => app.draw_next(),
        KeyCode::Char('l') | KeyCode::Char('r') => app.load_from_input(),
        KeyCode::Char('e') | KeyCode::Tab => app.focus_editor(),
        KeyCode::Char('h') => app.toggle_history(),
        KeyCode::Char('p') => app.toggle_pool(),
        KeyCode::Char('j') | KeyCode::Down => app.scroll_history_down(),
        KeyCode::Char('k') | KeyCode::Up => app.scroll_history_up(),
        KeyCode::Char('J') | KeyCode::PageDown => app.scroll_pool_down(),
        KeyCode::Char('K') | KeyCode::PageUp => app.scroll_pool_up(),
        _ => {}
    }
    KeyOutcome::Continue
}

fn handle_editor_key(app: &mut App, key: KeyEvent, ctrl: bool) {
    if ctrl {
        match key.code {
            KeyCode::Char('l') | KeyCode::Char('s') => {
                app.load_from_input();
                app.focus_picker();
            }
            KeyCode::Char('u') => app.input_mut().clear(),
            _ => {}
        }
        return;
    }

    if let KeyCode::Esc | KeyCode::Tab = key.code {
        app.focus_picker();
        return;
    }

    let input = app.input_mut();
    match key.code {
        KeyCode::Char(c) => input.insert_char(c),
        KeyCode::Enter => input.insert_newline(),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Up => input.move_up(),
        KeyCode::Down => input.move_down(),
        KeyCode::Home => input.move_home(),
        KeyCode::End => input.move_end(),
        _ => {}
    }
}

/// Bracketed paste goes into the editor and focuses it
pub fn handle_paste(app: &mut App, text: &str) {
    app.focus_editor();
    app.input_mut().insert_str(text);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::drawer::Drawer;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn app() -> App {
        App::new(Drawer::seeded(9), Config::default())
    }

    #[test]
    fn test_type_load_and_draw() {
        let mut app = app();
        handle_key(&mut app, key(KeyCode::Char('e')));
        assert!(app.is_editing());

        for c in "Q1".chars() {
            handle_key(&mut app, key(KeyCode::Char(c)));
        }
        handle_key(&mut app, key(KeyCode::Enter));
        for c in "Q2".chars() {
            handle_key(&mut app, key(KeyCode::Char(c)));
        }
        assert_eq!(app.input().text(), "Q1\nQ2");

        handle_key(&mut app, ctrl('l'));
        assert!(!app.is_editing());
        assert_eq!(app.drawer().pool().len(), 2);

        handle_key(&mut app, key(KeyCode::Char(' ')));
        assert_eq!(app.drawer().history().len(), 1);
        assert_eq!(app.drawer().pool().len(), 1);
    }

    #[test]
    fn test_picker_letters_are_not_typed() {
        let mut app = app();
        handle_key(&mut app, key(KeyCode::Char('h')));
        handle_key(&mut app, key(KeyCode::Char('p')));
        assert!(app.input().is_empty());
        assert!(!app.history_expanded());
        assert!(app.pool_expanded());
    }

    #[test]
    fn test_editor_q_does_not_quit() {
        let mut app = app();
        app.focus_editor();
        assert_eq!(handle_key(&mut app, key(KeyCode::Char('q'))), KeyOutcome::Continue);
        assert_eq!(app.input().text(), "q");

        assert_eq!(handle_key(&mut app, key(KeyCode::Esc)), KeyOutcome::Continue);
        assert!(!app.is_editing());
        assert_eq!(handle_key(&mut app, key(KeyCode::Char('q'))), KeyOutcome::Quit);
    }

    #[test]
    fn test_ctrl_c_quits_from_both_panes() {
        let mut app = app();
        assert_eq!(handle_key(&mut app, ctrl('c')), KeyOutcome::Quit);
        app.focus_editor();
        assert_eq!(handle_key(&mut app, ctrl('c')), KeyOutcome::Quit);
    }

    #[test]
    fn test_paste_focuses_editor() {
        let mut app = app();
        handle_paste(&mut app, "A\r\nB\r\n");
        assert!(app.is_editing());
        assert_eq!(app.input().text(), "A\nB\n");

        handle_key(&mut app, ctrl('s'));
        assert_eq!(app.drawer().pool(), ["A", "B"]);
    }

    #[test]
    fn test_picker_scroll_keys() {
        let mut app = app();
        app.preload("a\nb\nc");
        app.draw_next();
        app.draw_next();

        handle_key(&mut app, key(KeyCode::Char('j')));
        assert_eq!(app.history_scroll(), 1);
        handle_key(&mut app, key(KeyCode::Char('k')));
        assert_eq!(app.history_scroll(), 0);

        app.preload("1\n2\n3");
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('J'), KeyModifiers::SHIFT));
        handle_key(&mut app, key(KeyCode::PageDown));
        assert_eq!(app.pool_scroll(), 2);
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('K'), KeyModifiers::SHIFT));
        assert_eq!(app.pool_scroll(), 1);
    }

    #[test]
    fn test_ctrl_u_clears_editor() {
        let mut app = app();
        handle_paste(&mut app, "one\ntwo");
        handle_key(&mut app, ctrl('u'));
        assert!(app.input().is_empty());
        assert!(app.is_editing());
    }

    #[test]
    fn test_draw_on_empty_pool_sets_notice() {
        let mut app = app();
        handle_key(&mut app, key(KeyCode::Char('n')));
        assert!(app.notice().is_some());
    }
}
