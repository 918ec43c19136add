//! Top-level rendering coordinator.
//!
//! Rendering is two steps: compute a [`UIViewModel`] from the picker, then
//! let the components turn it into one ANSI frame.

use crate::picker::Picker;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the picker to stdout.
pub fn render(picker: &Picker, rows: usize, cols: usize) {
    print!("{}", render_to_string(picker, rows, cols));
}

/// Renders the picker into a string without printing it.
///
/// ```
/// use zelect::picker::{parse_options, Picker};
/// use zelect::select::SelectConfig;
/// use zelect::ui::{renderer::render_to_string, Theme};
///
/// let options = parse_options(r#"["apple", "banana"]"#)?;
/// let picker = Picker::new(SelectConfig::new(options).build(), Theme::default(), "Fruit");
///
/// let frame = render_to_string(&picker, 24, 80);
/// assert!(frame.contains("Select…"));
/// assert!(!frame.contains("banana"));
/// # Ok::<(), zelect::ZelectError>(())
/// ```
#[must_use]
pub fn render_to_string(picker: &Picker, rows: usize, cols: usize) -> String {
    let viewmodel = picker.compute_viewmodel(rows, cols);
    render_viewmodel(&viewmodel, &picker.theme, rows, cols)
}

fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) -> String {
    let mut frame = String::new();
    components::render_frame(&mut frame, vm, theme, rows, cols);
    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picker::parse_options;
    use crate::select::{handle_event, Event, Key, SelectConfig};

    fn picker() -> Picker {
        let options = parse_options(
            r#"["apple", {"value": "banana", "title": "yellow"}, "cherry"]"#,
        )
        .unwrap();
        Picker::new(SelectConfig::new(options).build(), Theme::default(), "Fruit")
    }

    #[test]
    fn closed_frame_hides_options() {
        let frame = render_to_string(&picker(), 24, 80);
        assert!(frame.contains("Fruit (3)"));
        assert!(frame.contains("Select…"));
        assert!(!frame.contains("cherry"));
    }

    #[test]
    fn open_frame_lists_options_and_search() {
        let mut picker = picker();
        handle_event(&mut picker.select, &Event::Activate).unwrap();
        handle_event(&mut picker.select, &Event::Key(Key::Char('b'))).unwrap();

        let frame = render_to_string(&picker, 24, 80);
        assert!(frame.contains("apple"));
        assert!(frame.contains("cherry"));
        assert!(frame.contains("yellow"));
        assert!(frame.contains("Search: "));
    }

    #[test]
    fn committed_value_shows_in_anchor() {
        let mut picker = picker();
        handle_event(&mut picker.select, &Event::Activate).unwrap();
        handle_event(&mut picker.select, &Event::Click(2)).unwrap();

        let frame = render_to_string(&picker, 24, 80);
        assert!(!frame.contains("Select…"));
        assert!(frame.contains("cherry"));
    }

    #[test]
    fn tiny_terminals_do_not_panic() {
        let mut picker = picker();
        handle_event(&mut picker.select, &Event::Activate).unwrap();
        for (rows, cols) in [(0, 0), (1, 1), (3, 5), (10, 2)] {
            let _ = render_to_string(&picker, rows, cols);
        }
    }
}
