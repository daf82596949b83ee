/*
 *   Copyright (c) 2024 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

use std::io::Write;

use crate::{choice_item::ChoiceItem,
            components::{DialogComponent, StyleSheet},
            dialog_style::DialogStyle,
            error::ChoicesDialogError,
            event_loop::{enter_event_loop, EventLoopResult},
            function_component::CalculateResizeHint,
            icon::{DisposeOnClose, Icon, ARROW_ICON},
            keypress::{CrosstermKeyPressReader, KeyPress, KeyPressReader},
            state::DialogState,
            term::{get_size, Rect, Window}};

/// A modal dialog that presents a vertical list of choice buttons over a
/// parent window and blocks until one is activated or the window is closed.
///
/// Configure with the setters, then call [`open`](Self::open). The dialog
/// holds its choices by reference; the caller keeps ownership and the dialog
/// can be reopened any number of times.
pub struct ChoicesDialog<'a> {
    parent: &'a Window,
    style: DialogStyle,
    title: String,
    message: String,
    image: Option<Icon>,
    choices: Option<&'a [ChoiceItem]>,
    show_arrows: bool,
    default_choice: Option<&'a ChoiceItem>,
    style_sheet: StyleSheet,
}

impl<'a> ChoicesDialog<'a> {
    /// Creates a dialog over the given parent window. The style must name
    /// exactly one recognized modality flag.
    pub fn new(
        parent: &'a Window,
        style: DialogStyle,
    ) -> Result<Self, ChoicesDialogError> {
        let style = style.check()?;
        Ok(Self {
            parent,
            style,
            title: String::new(),
            message: String::new(),
            image: None,
            choices: None,
            show_arrows: true,
            default_choice: None,
            style_sheet: StyleSheet::default(),
        })
    }

    pub fn style(&self) -> DialogStyle { self.style }

    pub fn title(&self) -> &str { &self.title }

    pub fn set_title(&mut self, title: impl Into<String>) { self.title = title.into(); }

    pub fn message(&self) -> &str { &self.message }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    pub fn image(&self) -> Option<&Icon> { self.image.as_ref() }

    /// Image shown beside the message. The caller keeps ownership; the dialog
    /// never disposes it.
    pub fn set_image(&mut self, image: Option<Icon>) { self.image = image; }

    pub fn choices(&self) -> Option<&'a [ChoiceItem]> { self.choices }

    /// The choices to offer, in the order they will be shown. At least one is
    /// required.
    pub fn set_choices(
        &mut self,
        choices: &'a [ChoiceItem],
    ) -> Result<(), ChoicesDialogError> {
        if choices.is_empty() {
            return Err(ChoicesDialogError::EmptyChoices);
        }
        self.choices = Some(choices);
        Ok(())
    }

    pub fn default_choice(&self) -> Option<&'a ChoiceItem> { self.default_choice }

    /// The choice that starts out focused. Matched by identity against the
    /// elements of the `set_choices` slice, not by value, so two choices with
    /// equal text stay distinguishable. A choice that is not in the slice is
    /// ignored and focus starts at the first button.
    pub fn set_default_choice(&mut self, default_choice: Option<&'a ChoiceItem>) {
        self.default_choice = default_choice;
    }

    pub fn show_arrows(&self) -> bool { self.show_arrows }

    /// Whether to paint the decorative arrow gutter next to each button.
    /// Defaults to on.
    pub fn set_show_arrows(&mut self, show_arrows: bool) {
        self.show_arrows = show_arrows;
    }

    pub fn style_sheet(&self) -> StyleSheet { self.style_sheet }

    pub fn set_style_sheet(&mut self, style_sheet: StyleSheet) {
        self.style_sheet = style_sheet;
    }

    /// Opens the dialog and blocks the calling thread, pumping terminal
    /// events, until a button is activated or the window is closed.
    ///
    /// Returns the index of the activated choice, or -1 when the window was
    /// closed without activating anything (Esc, Ctrl+C, the close
    /// affordance).
    pub fn open(&mut self) -> Result<isize, ChoicesDialogError> {
        let mut component = DialogComponent::new(std::io::stdout(), self.style_sheet);
        let mut reader = CrosstermKeyPressReader;
        self.open_with(&mut component, &mut reader)
    }

    /// Same as [`open`](Self::open), against a caller-supplied writer and
    /// keypress source.
    pub fn open_with<W: Write>(
        &mut self,
        component: &mut DialogComponent<W>,
        reader: &mut impl KeyPressReader,
    ) -> Result<isize, ChoicesDialogError> {
        let choices = self.choices.ok_or(ChoicesDialogError::ChoicesNotSet)?;

        // One arrow handle per open() call, disposed when the window closes.
        let arrow = match self.show_arrows {
            true => Some(Icon::load(ARROW_ICON)?),
            false => None,
        };

        let focused_index = self
            .default_choice
            .and_then(|default| choices.iter().position(|it| std::ptr::eq(it, default)))
            .unwrap_or(0);

        let mut state = DialogState {
            title: &self.title,
            message: &self.message,
            image: self.image.clone(),
            arrow: arrow.clone(),
            choices,
            show_arrows: self.show_arrows,
            focused_index,
            selected_index: -1,
            parent_bounds: self.parent.bounds(),
            dialog_bounds: Rect::default(),
            resize_hint: None,
            window_size: None,
        };
        if let Ok(size) = get_size() {
            state.set_size(size);
        }

        tracing::debug!(
            title = %self.title,
            choice_count = choices.len(),
            focused_index,
            "opening choices dialog"
        );

        run_session(&mut state, component, reader, arrow)
    }
}

/// Runs one dialog session to completion. The arrow handle is wrapped in a
/// dispose guard so it is released on every way out, including render errors.
fn run_session<W: Write>(
    state: &mut DialogState<'_>,
    component: &mut DialogComponent<W>,
    reader: &mut impl KeyPressReader,
    arrow: Option<Icon>,
) -> Result<isize, ChoicesDialogError> {
    let _dispose_on_close = arrow.map(DisposeOnClose);
    enter_event_loop(state, component, keypress_handler, reader)?;
    Ok(state.selected_index)
}

fn keypress_handler(state: &mut DialogState<'_>, key_press: KeyPress) -> EventLoopResult {
    match key_press {
        KeyPress::Resize(size) => {
            state.set_resize_hint(size);
            EventLoopResult::ContinueAndRerenderAndClear
        }
        KeyPress::Down | KeyPress::Tab => {
            state.focus_next();
            EventLoopResult::ContinueAndRerender
        }
        KeyPress::Up | KeyPress::BackTab => {
            state.focus_previous();
            EventLoopResult::ContinueAndRerender
        }
        KeyPress::Enter => {
            let index = state.activate_focused();
            tracing::debug!(index, "choice button activated");
            EventLoopResult::ExitWithResult(index)
        }
        KeyPress::Esc | KeyPress::CtrlC => EventLoopResult::ExitWithoutResult,
        KeyPress::Noop => EventLoopResult::Continue,
        KeyPress::Error => EventLoopResult::ExitWithError,
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Error, ErrorKind, Result as IoResult};

    use pretty_assertions::assert_eq;
    use serial_test::serial;

    use super::*;
    use crate::{term::Size,
                test_utils::{contains_ansi_escape_sequence, TestStringWriter,
                             TestVecKeyPressReader}};

    fn test_window() -> Window {
        Window::new(Rect {
            col: 0,
            row: 0,
            width: 80,
            height: 24,
        })
    }

    fn yes_no() -> Vec<ChoiceItem> {
        vec![
            ChoiceItem::new("Yes", "Confirm and continue"),
            ChoiceItem::new("No", "Cancel"),
        ]
    }

    fn open_scripted(
        dialog: &mut ChoicesDialog<'_>,
        key_presses: Vec<KeyPress>,
    ) -> (Result<isize, ChoicesDialogError>, String) {
        let mut component =
            DialogComponent::new(TestStringWriter::new(), StyleSheet::default());
        let mut reader = TestVecKeyPressReader::new(key_presses);
        let result = dialog.open_with(&mut component, &mut reader);
        (result, component.write.get_buffer().to_string())
    }

    #[test]
    fn zero_style_is_rejected() {
        let window = test_window();
        let result = ChoicesDialog::new(&window, DialogStyle::from_bits(0));
        assert!(matches!(
            result,
            Err(ChoicesDialogError::UnsupportedStyle { .. })
        ));
    }

    #[test]
    fn combined_modality_flags_are_rejected() {
        let window = test_window();
        let style = DialogStyle::APPLICATION_MODAL | DialogStyle::SYSTEM_MODAL;
        let result = ChoicesDialog::new(&window, style);
        assert!(matches!(
            result,
            Err(ChoicesDialogError::ConflictingStyles { .. })
        ));
    }

    #[test]
    fn empty_choices_are_rejected() {
        let window = test_window();
        let mut dialog =
            ChoicesDialog::new(&window, DialogStyle::APPLICATION_MODAL).unwrap();
        let empty: Vec<ChoiceItem> = vec![];
        assert!(matches!(
            dialog.set_choices(&empty),
            Err(ChoicesDialogError::EmptyChoices)
        ));
    }

    #[test]
    fn getters_are_stable_between_setter_calls() {
        let window = test_window();
        let choices = yes_no();
        let mut dialog =
            ChoicesDialog::new(&window, DialogStyle::APPLICATION_MODAL).unwrap();
        dialog.set_title("Quit?");
        dialog.set_message("Sure?");
        dialog.set_choices(&choices).unwrap();

        assert_eq!(dialog.title(), "Quit?");
        assert_eq!(dialog.title(), dialog.title());
        assert_eq!(dialog.message(), "Sure?");
        assert_eq!(dialog.choices().unwrap(), choices.as_slice());
        assert_eq!(dialog.style(), DialogStyle::APPLICATION_MODAL);

        dialog.set_title("Exit?");
        assert_eq!(dialog.title(), "Exit?");
        assert_eq!(dialog.message(), "Sure?");
    }

    #[test]
    #[serial]
    fn open_without_choices_fails() {
        let window = test_window();
        let mut dialog =
            ChoicesDialog::new(&window, DialogStyle::APPLICATION_MODAL).unwrap();
        let (result, _) = open_scripted(&mut dialog, vec![KeyPress::Enter]);
        assert!(matches!(result, Err(ChoicesDialogError::ChoicesNotSet)));
    }

    #[test]
    #[serial]
    fn down_then_enter_returns_the_second_choice() {
        let window = test_window();
        let choices = yes_no();
        let mut dialog =
            ChoicesDialog::new(&window, DialogStyle::APPLICATION_MODAL).unwrap();
        dialog.set_title("Quit?");
        dialog.set_message("There are unsaved changes.");
        dialog.set_choices(&choices).unwrap();

        let (result, buffer) =
            open_scripted(&mut dialog, vec![KeyPress::Down, KeyPress::Enter]);

        assert_eq!(result.unwrap(), 1);
        assert!(buffer.contains("Quit?"));
        assert!(buffer.contains("[ Yes ]"));
        assert!(buffer.contains("[ No ]"));
        assert!(contains_ansi_escape_sequence(&buffer));
    }

    #[test]
    #[serial]
    fn closing_the_window_returns_minus_one() {
        let window = test_window();
        let choices = [ChoiceItem::new("OK", "")];
        let mut dialog =
            ChoicesDialog::new(&window, DialogStyle::APPLICATION_MODAL).unwrap();
        dialog.set_choices(&choices).unwrap();

        let (result, _) = open_scripted(&mut dialog, vec![KeyPress::Esc]);
        assert_eq!(result.unwrap(), -1);
    }

    #[test]
    #[serial]
    fn ctrl_c_returns_minus_one() {
        let window = test_window();
        let choices = yes_no();
        let mut dialog =
            ChoicesDialog::new(&window, DialogStyle::PRIMARY_MODAL).unwrap();
        dialog.set_choices(&choices).unwrap();

        let (result, _) = open_scripted(&mut dialog, vec![KeyPress::CtrlC]);
        assert_eq!(result.unwrap(), -1);
    }

    #[test]
    #[serial]
    fn default_choice_starts_focused() {
        let window = test_window();
        let choices = vec![
            ChoiceItem::new("Save", ""),
            ChoiceItem::new("Discard", ""),
            ChoiceItem::new("Cancel", ""),
        ];
        let mut dialog =
            ChoicesDialog::new(&window, DialogStyle::APPLICATION_MODAL).unwrap();
        dialog.set_choices(&choices).unwrap();
        dialog.set_default_choice(Some(&choices[1]));

        let (result, _) = open_scripted(&mut dialog, vec![KeyPress::Enter]);
        assert_eq!(result.unwrap(), 1);
    }

    #[test]
    #[serial]
    fn default_choice_matches_by_identity_not_value() {
        let window = test_window();
        // First and third are equal by value; only identity tells them apart.
        let choices = vec![
            ChoiceItem::new("Retry", ""),
            ChoiceItem::new("Abort", ""),
            ChoiceItem::new("Retry", ""),
        ];
        let mut dialog =
            ChoicesDialog::new(&window, DialogStyle::APPLICATION_MODAL).unwrap();
        dialog.set_choices(&choices).unwrap();
        dialog.set_default_choice(Some(&choices[2]));

        let (result, _) = open_scripted(&mut dialog, vec![KeyPress::Enter]);
        assert_eq!(result.unwrap(), 2);
    }

    #[test]
    #[serial]
    fn default_choice_outside_the_list_is_ignored() {
        let window = test_window();
        let choices = yes_no();
        let stranger = ChoiceItem::new("Yes", "Confirm and continue");
        let mut dialog =
            ChoicesDialog::new(&window, DialogStyle::APPLICATION_MODAL).unwrap();
        dialog.set_choices(&choices).unwrap();
        dialog.set_default_choice(Some(&stranger));

        let (result, _) = open_scripted(&mut dialog, vec![KeyPress::Enter]);
        assert_eq!(result.unwrap(), 0);
    }

    #[test]
    #[serial]
    fn a_dialog_can_be_reopened() {
        let window = test_window();
        let choices = yes_no();
        let mut dialog =
            ChoicesDialog::new(&window, DialogStyle::APPLICATION_MODAL).unwrap();
        dialog.set_choices(&choices).unwrap();

        let (first, _) = open_scripted(&mut dialog, vec![KeyPress::Enter]);
        assert_eq!(first.unwrap(), 0);

        let (second, _) =
            open_scripted(&mut dialog, vec![KeyPress::Down, KeyPress::Enter]);
        assert_eq!(second.unwrap(), 1);
    }

    #[test]
    #[serial]
    fn focus_is_clamped_at_the_last_button() {
        let window = test_window();
        let choices = yes_no();
        let mut dialog =
            ChoicesDialog::new(&window, DialogStyle::APPLICATION_MODAL).unwrap();
        dialog.set_choices(&choices).unwrap();

        let (result, _) = open_scripted(
            &mut dialog,
            vec![
                KeyPress::Down,
                KeyPress::Down,
                KeyPress::Tab,
                KeyPress::Enter,
            ],
        );
        assert_eq!(result.unwrap(), 1);
    }

    #[test]
    #[serial]
    fn noop_keys_do_not_close_the_window() {
        let window = test_window();
        let choices = yes_no();
        let mut dialog =
            ChoicesDialog::new(&window, DialogStyle::MODELESS).unwrap();
        dialog.set_choices(&choices).unwrap();

        let (result, _) = open_scripted(
            &mut dialog,
            vec![KeyPress::Noop, KeyPress::Noop, KeyPress::Enter],
        );
        assert_eq!(result.unwrap(), 0);
    }

    fn scripted_state<'a>(
        choices: &'a [ChoiceItem],
        arrow: &Icon,
    ) -> DialogState<'a> {
        DialogState {
            title: "t",
            message: "m",
            image: None,
            arrow: Some(arrow.clone()),
            choices,
            show_arrows: true,
            focused_index: 0,
            selected_index: -1,
            parent_bounds: Rect {
                col: 0,
                row: 0,
                width: 80,
                height: 24,
            },
            dialog_bounds: Rect::default(),
            resize_hint: None,
            window_size: Some(Size {
                col_count: 80,
                row_count: 24,
            }),
        }
    }

    #[test]
    #[serial]
    fn arrow_is_disposed_after_activation() {
        let choices = yes_no();
        let arrow = Icon::load(ARROW_ICON).unwrap();
        let mut state = scripted_state(&choices, &arrow);
        let mut component =
            DialogComponent::new(TestStringWriter::new(), StyleSheet::default());
        let mut reader = TestVecKeyPressReader::new(vec![KeyPress::Enter]);

        let result =
            run_session(&mut state, &mut component, &mut reader, Some(arrow.clone()));
        assert_eq!(result.unwrap(), 0);
        assert!(arrow.is_disposed());
    }

    #[test]
    #[serial]
    fn arrow_is_disposed_after_window_close() {
        let choices = yes_no();
        let arrow = Icon::load(ARROW_ICON).unwrap();
        let mut state = scripted_state(&choices, &arrow);
        let mut component =
            DialogComponent::new(TestStringWriter::new(), StyleSheet::default());
        let mut reader = TestVecKeyPressReader::new(vec![KeyPress::Esc]);

        let result =
            run_session(&mut state, &mut component, &mut reader, Some(arrow.clone()));
        assert_eq!(result.unwrap(), -1);
        assert!(arrow.is_disposed());
    }

    struct FailingWriter;

    impl std::io::Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> IoResult<usize> {
            Err(Error::new(ErrorKind::Other, "terminal went away"))
        }

        fn flush(&mut self) -> IoResult<()> {
            Err(Error::new(ErrorKind::Other, "terminal went away"))
        }
    }

    #[test]
    #[serial]
    fn arrow_is_disposed_when_rendering_fails() {
        let choices = yes_no();
        let arrow = Icon::load(ARROW_ICON).unwrap();
        let mut state = scripted_state(&choices, &arrow);
        let mut component = DialogComponent::new(FailingWriter, StyleSheet::default());
        let mut reader = TestVecKeyPressReader::new(vec![KeyPress::Enter]);

        let result =
            run_session(&mut state, &mut component, &mut reader, Some(arrow.clone()));
        assert!(matches!(result, Err(ChoicesDialogError::Terminal(_))));
        assert!(arrow.is_disposed());
    }
}
