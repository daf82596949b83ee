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

use std::io;

use crossterm::terminal::size;

/// Terminal dimensions in character cells.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Size {
    pub col_count: u16,
    pub row_count: u16,
}

/// A rectangular region of the terminal, in character cells.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub col: u16,
    pub row: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    /// Centers a region of the given size within `parent`, truncating toward
    /// zero. Terminal cells cannot go negative, so a region larger than its
    /// parent pins to the parent origin.
    pub fn center_within(parent: Rect, size: Size) -> Rect {
        let col = i32::from(parent.col)
            + (i32::from(parent.width) - i32::from(size.col_count)) / 2;
        let row = i32::from(parent.row)
            + (i32::from(parent.height) - i32::from(size.row_count)) / 2;
        Rect {
            col: col.max(i32::from(parent.col)) as u16,
            row: row.max(i32::from(parent.row)) as u16,
            width: size.col_count,
            height: size.row_count,
        }
    }
}

/// Get the terminal size.
pub fn get_size() -> io::Result<Size> {
    let (columns, rows) = size()?;
    Ok(Size {
        col_count: columns,
        row_count: rows,
    })
}

/// The surface a [`ChoicesDialog`](crate::ChoicesDialog) opens over. The
/// dialog window packs to its natural size and is centered within these
/// bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    bounds: Rect,
}

impl Window {
    /// A window over an arbitrary region, eg a pane of a larger TUI app.
    pub fn new(bounds: Rect) -> Self { Self { bounds } }

    /// A window spanning the whole terminal as it is sized right now.
    pub fn fullscreen() -> io::Result<Self> {
        let size = get_size()?;
        Ok(Self {
            bounds: Rect {
                col: 0,
                row: 0,
                width: size.col_count,
                height: size.row_count,
            },
        })
    }

    pub fn bounds(&self) -> Rect { self.bounds }
}

#[derive(Debug)]
pub enum TTYResult {
    IsInteractive,
    IsNotInteractive,
}

/// Returns [TTYResult::IsNotInteractive] if stdin, stdout, and stderr are
/// *all* fully uninteractive. This happens when `cargo test` runs.
///
/// There are situations where some streams can be interactive and others not,
/// such as when piping is active.
pub fn is_fully_uninteractive_terminal() -> TTYResult {
    use crossterm::tty::IsTty;
    let stdin_is_tty: bool = std::io::stdin().is_tty();
    let stdout_is_tty: bool = std::io::stdout().is_tty();
    let stderr_is_tty: bool = std::io::stderr().is_tty();
    match !stdin_is_tty && !stdout_is_tty && !stderr_is_tty {
        true => TTYResult::IsNotInteractive,
        false => TTYResult::IsInteractive,
    }
}
