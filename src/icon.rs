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

use std::{cell::Cell, rc::Rc};

use crate::error::ChoicesDialogError;

/// Logical name of the decorative arrow placed next to each choice button.
pub const ARROW_ICON: &str = "arrow";
/// Logical names of icons usable as the dialog image.
pub const INFO_ICON: &str = "info";
pub const WARNING_ICON: &str = "warning";
pub const QUESTION_ICON: &str = "question";

/// Glyph art bundled with the crate, keyed by logical name.
const BUNDLED_ICONS: &[(&str, &[&str])] = &[
    (ARROW_ICON, &["›"]),
    (INFO_ICON, &["(i)"]),
    (WARNING_ICON, &["(!)"]),
    (QUESTION_ICON, &["(?)"]),
];

/// A handle to a bundled glyph-art resource, with an explicit dispose
/// lifecycle. Clones are handle copies: they share the disposed flag, the way
/// copies of a native image handle would.
#[derive(Debug, Clone)]
pub struct Icon {
    name: &'static str,
    rows: &'static [&'static str],
    disposed: Rc<Cell<bool>>,
}

impl Icon {
    /// Loads a bundled icon by logical name. Fails with
    /// [`ChoicesDialogError::UnknownIconResource`] when no such resource is
    /// bundled.
    pub fn load(name: &str) -> Result<Self, ChoicesDialogError> {
        BUNDLED_ICONS
            .iter()
            .find(|(bundled_name, _)| *bundled_name == name)
            .map(|(bundled_name, rows)| Self {
                name: bundled_name,
                rows,
                disposed: Rc::new(Cell::new(false)),
            })
            .ok_or_else(|| ChoicesDialogError::UnknownIconResource {
                name: name.to_string(),
            })
    }

    pub fn name(&self) -> &str { self.name }

    pub fn rows(&self) -> &[&'static str] { self.rows }

    /// Width in character cells (the widest row).
    pub fn width(&self) -> u16 {
        self.rows
            .iter()
            .map(|row| row.chars().count())
            .max()
            .unwrap_or(0) as u16
    }

    /// Height in character cells.
    pub fn height(&self) -> u16 { self.rows.len() as u16 }

    /// Releases the handle. Idempotent.
    pub fn dispose(&self) { self.disposed.set(true); }

    pub fn is_disposed(&self) -> bool { self.disposed.get() }
}

/// Disposes the wrapped icon when the owning scope ends, no matter how it
/// ends. This is how the dialog window guarantees the arrow icon is released
/// on every exit path: button activation, window close, or an error while the
/// window is up.
#[derive(Debug)]
pub struct DisposeOnClose(pub Icon);

impl Drop for DisposeOnClose {
    fn drop(&mut self) {
        if !self.0.is_disposed() {
            self.0.dispose();
        }
    }
}
