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

use crate::{choice_item::ChoiceItem,
            function_component::CalculateResizeHint,
            icon::Icon,
            term::{Rect, Size}};

/// The mutable session record behind one `open()` call. Owned by the opening
/// call, handed by reference to the event loop and the painter, and read back
/// after the loop exits. No global state.
#[derive(Debug)]
pub struct DialogState<'a> {
    pub title: &'a str,
    pub message: &'a str,
    /// Caller-supplied image, shown beside the message. Not disposed by the
    /// dialog; the caller owns it.
    pub image: Option<Icon>,
    /// Decorative arrow, one handle per `open()` call. Disposed when the
    /// window closes.
    pub arrow: Option<Icon>,
    pub choices: &'a [ChoiceItem],
    pub show_arrows: bool,
    /// The button that currently has keyboard focus.
    pub focused_index: usize,
    /// Written at most once, by the first button activation. -1 until then.
    pub selected_index: isize,
    /// Bounds of the parent window the dialog is centered over.
    pub parent_bounds: Rect,
    /// Where the dialog was last painted. Recomputed on each render
    /// (pack + center), consumed by viewport clearing.
    pub dialog_bounds: Rect,
    /// This is used to determine if the terminal has been resized.
    pub resize_hint: Option<ResizeHint>,
    /// This is used to determine if the terminal has been resized.
    pub window_size: Option<Size>,
}

impl DialogState<'_> {
    pub fn focused_choice(&self) -> &ChoiceItem { &self.choices[self.focused_index] }

    /// Move focus one button down, stopping at the last one.
    pub fn focus_next(&mut self) {
        if self.focused_index + 1 < self.choices.len() {
            self.focused_index += 1;
        }
    }

    /// Move focus one button up, stopping at the first one.
    pub fn focus_previous(&mut self) {
        self.focused_index = self.focused_index.saturating_sub(1);
    }

    /// Records the focused button as the selection. Only the first activation
    /// can write; the window closes right after, so no further activations
    /// are delivered.
    pub fn activate_focused(&mut self) -> usize {
        if self.selected_index < 0 {
            self.selected_index = self.focused_index as isize;
        }
        self.focused_index
    }
}

#[derive(Debug, Default, PartialEq, Eq, Hash, Clone)]
pub enum ResizeHint {
    GotBigger,
    GotSmaller,
    #[default]
    NoChange,
}

impl CalculateResizeHint for DialogState<'_> {
    fn set_size(&mut self, new_size: Size) {
        self.window_size = Some(new_size);
        self.clear_resize_hint();
    }

    fn get_resize_hint(&self) -> Option<ResizeHint> { self.resize_hint.clone() }

    fn set_resize_hint(&mut self, new_size: Size) {
        self.resize_hint = if let Some(old_size) = self.window_size {
            if new_size != old_size {
                if (new_size.col_count > old_size.col_count)
                    || (new_size.row_count > old_size.row_count)
                {
                    Some(ResizeHint::GotBigger)
                } else if (new_size.col_count < old_size.col_count)
                    || (new_size.row_count < old_size.row_count)
                {
                    Some(ResizeHint::GotSmaller)
                } else {
                    Some(ResizeHint::NoChange)
                }
            } else {
                None
            }
        } else {
            None
        };

        if self.window_size.is_some() {
            let hint = self.resize_hint.clone();
            self.set_size(new_size);
            self.resize_hint = hint;
        }
    }

    fn clear_resize_hint(&mut self) { self.resize_hint = None; }
}
