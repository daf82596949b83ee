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

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::term::Size;

/// The keyboard / terminal events the dialog window reacts to. Everything
/// else is [`KeyPress::Noop`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyPress {
    Up,
    Down,
    Tab,
    BackTab,
    Enter,
    Esc,
    CtrlC,
    Resize(Size),
    #[default]
    Noop,
    Error,
}

/// Seam between the event loop and the terminal, so tests can inject
/// scripted key presses.
pub trait KeyPressReader {
    fn read_key_press(&mut self) -> KeyPress;
}

/// How long to sleep before checking the event queue again.
const SLEEP_TIMEOUT: Duration = Duration::from_millis(250);

#[derive(Debug, Default)]
pub struct CrosstermKeyPressReader;

impl KeyPressReader for CrosstermKeyPressReader {
    /// Processes a pending terminal event if one is available, otherwise
    /// sleeps until one arrives. The calling thread is the pump; nothing else
    /// drives the terminal while a dialog is open.
    fn read_key_press(&mut self) -> KeyPress {
        loop {
            match event::poll(SLEEP_TIMEOUT) {
                Ok(true) => {
                    return match event::read() {
                        Ok(terminal_event) => translate_event(terminal_event),
                        Err(_) => KeyPress::Error,
                    };
                }
                // Timed out with nothing pending. Sleep again.
                Ok(false) => continue,
                Err(_) => return KeyPress::Error,
            }
        }
    }
}

/// [KeyEvent::kind] values other than `Press` show up on Windows (and on Unix
/// when keyboard enhancement flags are pushed); only presses count.
pub(crate) fn translate_event(terminal_event: Event) -> KeyPress {
    match terminal_event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind,
            ..
        }) => {
            if kind != KeyEventKind::Press {
                return KeyPress::Noop;
            }
            match (code, modifiers) {
                (KeyCode::Up, _) => KeyPress::Up,
                (KeyCode::Down, _) => KeyPress::Down,
                (KeyCode::Tab, _) => KeyPress::Tab,
                (KeyCode::BackTab, _) => KeyPress::BackTab,
                (KeyCode::Enter, _) => KeyPress::Enter,
                (KeyCode::Esc, _) => KeyPress::Esc,
                (KeyCode::Char('c'), KeyModifiers::CONTROL) => KeyPress::CtrlC,
                _ => KeyPress::Noop,
            }
        }
        Event::Resize(col_count, row_count) => KeyPress::Resize(Size {
            col_count,
            row_count,
        }),
        _ => KeyPress::Noop,
    }
}
