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

use std::io::{Result, Write};

use crossterm::{cursor::{Hide, Show},
                execute,
                terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen,
                           LeaveAlternateScreen}};

use crate::{function_component::{CalculateResizeHint, FunctionComponent},
            keypress::{KeyPress, KeyPressReader},
            term::{is_fully_uninteractive_terminal, TTYResult}};

/// What the keypress handler tells the event loop to do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventLoopResult {
    Continue,
    ContinueAndRerender,
    ContinueAndRerenderAndClear,
    ExitWithResult(usize),
    ExitWithoutResult,
    ExitWithError,
}

/// Runs the blocking render / read / handle loop until the handler closes the
/// window. The calling thread is the event pump for the whole time; `open()`
/// does not return until this does.
///
/// The alternate screen is the transient child window: entering it shows the
/// dialog surface, leaving it disposes the surface and restores whatever the
/// parent had painted. Raw mode and the alternate screen are real-terminal
/// concerns, skipped when no TTY is attached (tests, CI).
pub fn enter_event_loop<W: Write, S: CalculateResizeHint>(
    state: &mut S,
    function_component: &mut impl FunctionComponent<W, S>,
    on_keypress: impl Fn(&mut S, KeyPress) -> EventLoopResult,
    reader: &mut impl KeyPressReader,
) -> Result<EventLoopResult> {
    let is_interactive = matches!(
        is_fully_uninteractive_terminal(),
        TTYResult::IsInteractive
    );

    if is_interactive {
        execute!(function_component.get_write(), EnterAlternateScreen, Hide)?;
        if let Err(error) = enable_raw_mode() {
            let _unused =
                execute!(function_component.get_write(), Show, LeaveAlternateScreen);
            return Err(error);
        }
    }

    let result = pump_until_closed(state, function_component, on_keypress, reader);

    // Cleanup must happen on every exit path, error or not.
    if is_interactive {
        let _unused = disable_raw_mode();
        let _unused =
            execute!(function_component.get_write(), Show, LeaveAlternateScreen);
    }

    result
}

fn pump_until_closed<W: Write, S: CalculateResizeHint>(
    state: &mut S,
    function_component: &mut impl FunctionComponent<W, S>,
    on_keypress: impl Fn(&mut S, KeyPress) -> EventLoopResult,
    reader: &mut impl KeyPressReader,
) -> Result<EventLoopResult> {
    loop {
        function_component.render(state)?;
        let key_press = reader.read_key_press();
        match on_keypress(state, key_press) {
            EventLoopResult::Continue | EventLoopResult::ContinueAndRerender => {
                // The loop repaints at the top of the next iteration.
            }
            EventLoopResult::ContinueAndRerenderAndClear => {
                function_component.clear_viewport_for_resize(state)?;
            }
            exit_result @ (EventLoopResult::ExitWithResult(_)
            | EventLoopResult::ExitWithoutResult
            | EventLoopResult::ExitWithError) => {
                function_component.clear_viewport(state)?;
                tracing::debug!(?exit_result, "dialog window closed");
                return Ok(exit_result);
            }
        }
    }
}
