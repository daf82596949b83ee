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

use crate::{state::ResizeHint, term::Size};

pub trait CalculateResizeHint {
    fn set_size(&mut self, new_size: Size);
    fn get_resize_hint(&self) -> Option<ResizeHint>;
    fn set_resize_hint(&mut self, new_size: Size);
    fn clear_resize_hint(&mut self);
}

/// A stateless painter driven by the event loop: render the current state,
/// and erase what was painted when the window goes away or moves.
pub trait FunctionComponent<W: Write, S: CalculateResizeHint> {
    fn get_write(&mut self) -> &mut W;

    /// Paint the whole surface for the current state.
    fn render(&mut self, state: &mut S) -> Result<()>;

    /// Erase everything this component painted.
    fn clear_viewport(&mut self, state: &mut S) -> Result<()>;

    /// Erase the stale painting after a terminal resize, so the next render
    /// starts from a clean surface. No-op when no resize is pending.
    fn clear_viewport_for_resize(&mut self, state: &mut S) -> Result<()> {
        if state.get_resize_hint().is_none() {
            return Ok(());
        }
        self.clear_viewport(state)?;
        state.clear_resize_hint();
        Ok(())
    }
}
