use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::App;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    None,
    Quit,
    /// "Get Forecast" for the current form contents
    SubmitForecast,
    /// Full render for the default location
    Reload,
}

pub(crate) fn handle_key_event(key: KeyEvent, app: &mut App) -> Action {
    use KeyCode::{BackTab, Backspace, Char, Down, Enter, Esc, F, Tab, Up};

    if key.kind == KeyEventKind::Release {
        return Action::None;
    }

    let control = key.modifiers.contains(KeyModifiers::CONTROL);

    // Global shortcuts
    if control && key.code == Char('c') {
        return Action::Quit;
    }
    if control && key.code == Char('r') {
        return Action::Reload;
    }

    match key.code {
        Esc => Action::Quit,
        F(5) => Action::Reload,
        Enter => Action::SubmitForecast,
        Tab => {
            app.focus = app.focus.next();
            Action::None
        }
        BackTab => {
            app.focus = app.focus.previous();
            Action::None
        }
        Up => {
            app.step_focused(1);
            Action::None
        }
        Down => {
            app.step_focused(-1);
            Action::None
        }
        Backspace => {
            app.focused_input_mut().pop();
            Action::None
        }
        Char(character) => {
            if !control && !key.modifiers.contains(KeyModifiers::ALT) {
                app.focused_input_mut().push(character);
            }
            Action::None
        }
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::app::Field;
    use crate::app::tests::test_app;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[rstest]
    #[case(press(KeyCode::Esc), Action::Quit)]
    #[case(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), Action::Quit)]
    #[case(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL), Action::Reload)]
    #[case(press(KeyCode::F(5)), Action::Reload)]
    #[case(press(KeyCode::Enter), Action::SubmitForecast)]
    #[case(press(KeyCode::Char('q')), Action::None)]
    fn maps_keys_to_actions(#[case] key: KeyEvent, #[case] expected: Action) {
        let mut app = test_app(1);
        assert_eq!(handle_key_event(key, &mut app), expected);
    }

    #[test]
    fn typing_edits_the_focused_field() {
        let mut app = test_app(1);
        handle_key_event(press(KeyCode::BackTab), &mut app);
        assert_eq!(app.focus, Field::Location);

        for _ in 0.."New York".len() {
            handle_key_event(press(KeyCode::Backspace), &mut app);
        }
        for character in "Paris".chars() {
            handle_key_event(press(KeyCode::Char(character)), &mut app);
        }
        assert_eq!(app.location_input, "Paris");
        assert_eq!(app.date_input, "2024-05-17", "other fields untouched");
    }

    #[test]
    fn arrows_step_the_focused_picker() {
        let mut app = test_app(1);
        handle_key_event(press(KeyCode::Down), &mut app);
        assert_eq!(app.date_input, "2024-05-16");

        handle_key_event(press(KeyCode::Tab), &mut app);
        handle_key_event(press(KeyCode::Up), &mut app);
        assert_eq!(app.time_input, "14:20");
    }

    #[test]
    fn releases_are_ignored() {
        let mut app = test_app(1);
        let mut key = press(KeyCode::Char('x'));
        key.kind = KeyEventKind::Release;
        assert_eq!(handle_key_event(key, &mut app), Action::None);
        assert_eq!(app.date_input, "2024-05-17");
    }
}
