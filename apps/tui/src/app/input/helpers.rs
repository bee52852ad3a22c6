use crossterm::event::KeyCode;

pub const fn wrap_decrement(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    if index == 0 {
        len - 1
    } else {
        index - 1
    }
}

pub const fn wrap_increment(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    (index + 1) % len
}

/// Applies a typing key to a single-line text field. Returns whether the key was consumed.
pub fn edit_text(input: &mut String, key: KeyCode) -> bool {
    match key {
        KeyCode::Char(ch) if !ch.is_control() => {
            input.push(ch);
            true
        }
        KeyCode::Backspace => {
            input.pop();
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexes_wrap_both_ways() {
        assert_eq!(wrap_increment(3, 4), 0);
        assert_eq!(wrap_decrement(0, 4), 3);
        assert_eq!(wrap_increment(0, 0), 0);
        assert_eq!(wrap_decrement(0, 0), 0);
    }

    #[test]
    fn text_fields_take_chars_and_backspace() {
        let mut input = String::from("12");
        assert!(edit_text(&mut input, KeyCode::Char('5')));
        assert!(edit_text(&mut input, KeyCode::Backspace));
        assert!(edit_text(&mut input, KeyCode::Char('.')));
        assert!(!edit_text(&mut input, KeyCode::Enter));
        assert_eq!(input, "12.");
    }
}
