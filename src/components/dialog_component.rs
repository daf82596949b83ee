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

use crossterm::{cursor::MoveTo,
                queue,
                style::{Attribute, Print, ResetColor, SetAttribute}};

use crate::{apply_style,
            components::style::{Style, StyleSheet},
            function_component::FunctionComponent,
            state::DialogState,
            term::{Rect, Size}};

/// Window margins in character cells. Slightly more breathing room below and
/// to the right, like a native dialog shell.
const MARGIN_TOP: u16 = 1;
const MARGIN_BOTTOM: u16 = 2;
const MARGIN_LEFT: u16 = 2;
const MARGIN_RIGHT: u16 = 3;

const TOP_LEFT: &str = "┌";
const BOTTOM_LEFT: &str = "└";
const BOTTOM_RIGHT: &str = "┘";
const HORIZONTAL: &str = "─";
const VERTICAL: &str = "│";
/// Close affordance in the title bar, including the top-right corner.
const CLOSE_AFFORDANCE: &str = " ✕ ┐";
const CLOSE_AFFORDANCE_WIDTH: usize = 4;

/// Paints one dialog window: border and title bar, optional image beside the
/// message, one button row per choice (with the decorative arrow gutter), and
/// a footer showing the focused button's tooltip.
pub struct DialogComponent<W: Write> {
    pub write: W,
    pub style: StyleSheet,
}

struct Segment {
    style: Style,
    text: String,
}

impl<W: Write> DialogComponent<W> {
    pub fn new(write: W, style: StyleSheet) -> Self { Self { write, style } }

    /// Natural (packed) size of the dialog window for this state: content
    /// plus margins plus border, never wider or taller than the parent.
    pub fn pack(&self, state: &DialogState<'_>) -> Size {
        let rows = self.build_rows(state);
        let content_width = rows.iter().map(|row| row_width(row)).max().unwrap_or(0);

        // The footer shows whichever tooltip is focused; size for the widest
        // one so the window does not change size as focus moves.
        let max_tooltip_width = state
            .choices
            .iter()
            .map(|it| it.tooltip_text().chars().count())
            .max()
            .unwrap_or(0);
        let content_width = content_width.max(max_tooltip_width);

        let title_bar_min_width = match state.title.is_empty() {
            true => 1 + CLOSE_AFFORDANCE_WIDTH,
            false => 3 + state.title.chars().count() + 1 + CLOSE_AFFORDANCE_WIDTH,
        };

        let width = (content_width + usize::from(MARGIN_LEFT + MARGIN_RIGHT) + 2)
            .max(title_bar_min_width)
            .min(usize::from(state.parent_bounds.width));
        let height = (rows.len() + usize::from(MARGIN_TOP + MARGIN_BOTTOM) + 2)
            .min(usize::from(state.parent_bounds.height));

        Size {
            col_count: width as u16,
            row_count: height as u16,
        }
    }

    fn build_rows(&self, state: &DialogState<'_>) -> Vec<Vec<Segment>> {
        let sheet = self.style;
        let mut rows: Vec<Vec<Segment>> = Vec::new();

        // Header band: image (when set) with the message beside it; the
        // message alone spans the full content width otherwise.
        let message_lines: Vec<&str> = match state.message.is_empty() {
            true => Vec::new(),
            false => state.message.lines().collect(),
        };
        let image = state.image.as_ref().filter(|it| !it.is_disposed());
        match image {
            Some(image) => {
                let band_height =
                    usize::from(image.height()).max(message_lines.len()).max(1);
                let image_width = usize::from(image.width());
                for band_row in 0..band_height {
                    let mut segments = Vec::new();
                    let glyph_row = image.rows().get(band_row).copied().unwrap_or("");
                    segments.push(Segment {
                        style: sheet.message_style,
                        text: format!("{glyph_row:<image_width$}"),
                    });
                    if let Some(line) = message_lines.get(band_row) {
                        segments.push(Segment {
                            style: sheet.message_style,
                            text: format!(" {line}"),
                        });
                    }
                    rows.push(segments);
                }
            }
            None => {
                for line in &message_lines {
                    rows.push(vec![Segment {
                        style: sheet.message_style,
                        text: (*line).to_string(),
                    }]);
                }
            }
        }
        if !rows.is_empty() {
            rows.push(Vec::new());
        }

        // One row per choice, in caller order: arrow gutter first when arrows
        // are on, then the button.
        for (index, item) in state.choices.iter().enumerate() {
            let mut segments = Vec::new();
            if state.show_arrows {
                let glyph = state
                    .arrow
                    .as_ref()
                    .filter(|it| !it.is_disposed())
                    .and_then(|it| it.rows().first().copied())
                    .unwrap_or(" ");
                segments.push(Segment {
                    style: sheet.border_style,
                    text: format!("{glyph} "),
                });
            }
            let button_style = match index == state.focused_index {
                true => sheet.focused_style,
                false => sheet.normal_style,
            };
            segments.push(Segment {
                style: button_style,
                text: format!("[ {} ]", item.text()),
            });
            rows.push(segments);
        }

        // Tooltip footer, present whenever any choice carries a tooltip.
        if state
            .choices
            .iter()
            .any(|it| !it.tooltip_text().is_empty())
        {
            rows.push(Vec::new());
            rows.push(vec![Segment {
                style: sheet.tooltip_style,
                text: state.focused_choice().tooltip_text().to_string(),
            }]);
        }

        rows
    }

    fn paint_title_bar(
        &mut self,
        title: &str,
        col: u16,
        row: u16,
        width: u16,
    ) -> Result<()> {
        let sheet = self.style;
        let title_text = match title.is_empty() {
            true => String::new(),
            false => clip_string_to_width_with_ellipsis(title, width.saturating_sub(8)),
        };
        let prefix_width = match title_text.is_empty() {
            true => 1,
            false => 3 + title_text.chars().count() + 1,
        };
        let fill = usize::from(width).saturating_sub(prefix_width + CLOSE_AFFORDANCE_WIDTH);

        let writer = &mut self.write;
        apply_full_style(writer, sheet.border_style)?;
        queue!(writer, MoveTo(col, row))?;
        if title_text.is_empty() {
            queue!(writer, Print(TOP_LEFT))?;
        } else {
            queue!(writer, Print(format!("{TOP_LEFT}{HORIZONTAL} ")))?;
            apply_full_style(writer, sheet.title_style)?;
            queue!(writer, Print(&title_text))?;
            apply_full_style(writer, sheet.border_style)?;
            queue!(writer, Print(" "))?;
        }
        queue!(
            writer,
            Print(HORIZONTAL.repeat(fill)),
            Print(CLOSE_AFFORDANCE),
            ResetColor
        )?;
        Ok(())
    }

    fn paint_inner_row(
        &mut self,
        segments: &[Segment],
        col: u16,
        row: u16,
        inner_width: u16,
    ) -> Result<()> {
        let border_style = self.style.border_style;
        let writer = &mut self.write;

        apply_full_style(writer, border_style)?;
        queue!(writer, MoveTo(col, row), Print(VERTICAL))?;

        let mut used = usize::from(MARGIN_LEFT).min(usize::from(inner_width));
        queue!(writer, Print(" ".repeat(used)))?;

        for segment in segments {
            let remaining = usize::from(inner_width).saturating_sub(used);
            if remaining == 0 {
                break;
            }
            let text =
                clip_string_to_width_with_ellipsis(&segment.text, remaining as u16);
            used += text.chars().count();
            apply_full_style(writer, segment.style)?;
            queue!(writer, Print(text))?;
        }

        apply_full_style(writer, border_style)?;
        queue!(
            writer,
            Print(" ".repeat(usize::from(inner_width).saturating_sub(used))),
            Print(VERTICAL),
            ResetColor
        )?;
        Ok(())
    }

    fn paint_bottom_bar(&mut self, col: u16, row: u16, width: u16) -> Result<()> {
        let border_style = self.style.border_style;
        let writer = &mut self.write;
        apply_full_style(writer, border_style)?;
        queue!(
            writer,
            MoveTo(col, row),
            Print(format!(
                "{BOTTOM_LEFT}{}{BOTTOM_RIGHT}",
                HORIZONTAL.repeat(usize::from(width).saturating_sub(2))
            )),
            ResetColor
        )?;
        Ok(())
    }
}

impl<'a, W: Write> FunctionComponent<W, DialogState<'a>> for DialogComponent<W> {
    fn get_write(&mut self) -> &mut W { &mut self.write }

    fn render(&mut self, state: &mut DialogState<'a>) -> Result<()> {
        // Pack to natural size, then center over the parent window's bounds.
        let size = self.pack(state);
        state.dialog_bounds = Rect::center_within(state.parent_bounds, size);
        let bounds = state.dialog_bounds;

        let rows = self.build_rows(state);
        let inner_width = bounds.width.saturating_sub(2);
        let title = state.title;

        self.paint_title_bar(title, bounds.col, bounds.row, bounds.width)?;

        let last_content_row = bounds.row + bounds.height.saturating_sub(2);
        let mut current_row = bounds.row + 1;
        for _ in 0..MARGIN_TOP {
            if current_row > last_content_row {
                break;
            }
            self.paint_inner_row(&[], bounds.col, current_row, inner_width)?;
            current_row += 1;
        }
        for row in &rows {
            if current_row > last_content_row {
                break;
            }
            self.paint_inner_row(row, bounds.col, current_row, inner_width)?;
            current_row += 1;
        }
        while current_row <= last_content_row {
            self.paint_inner_row(&[], bounds.col, current_row, inner_width)?;
            current_row += 1;
        }

        self.paint_bottom_bar(
            bounds.col,
            bounds.row + bounds.height.saturating_sub(1),
            bounds.width,
        )?;

        self.write.flush()?;
        Ok(())
    }

    fn clear_viewport(&mut self, state: &mut DialogState<'a>) -> Result<()> {
        let bounds = state.dialog_bounds;
        let writer = &mut self.write;
        queue!(writer, ResetColor)?;
        for row_offset in 0..bounds.height {
            queue!(
                writer,
                MoveTo(bounds.col, bounds.row + row_offset),
                Print(" ".repeat(usize::from(bounds.width)))
            )?;
        }
        queue!(writer, MoveTo(bounds.col, bounds.row))?;
        writer.flush()?;
        Ok(())
    }
}

fn row_width(segments: &[Segment]) -> usize {
    segments
        .iter()
        .map(|segment| segment.text.chars().count())
        .sum()
}

fn apply_full_style<W: Write>(writer: &mut W, style: Style) -> Result<()> {
    queue! {
        writer,
        SetAttribute(Attribute::Reset),
        apply_style!(style => fg_color),
        apply_style!(style => bg_color),
        apply_style!(style => bold),
        apply_style!(style => dim),
        apply_style!(style => underline),
        apply_style!(style => reverse),
    }?;
    Ok(())
}

/// Clips to the given width in characters, with a `...` suffix when anything
/// was cut off.
pub fn clip_string_to_width_with_ellipsis(line: &str, width: u16) -> String {
    let width = usize::from(width);
    let char_count = line.chars().count();
    if char_count <= width {
        return line.to_string();
    }
    if width <= 3 {
        return line.chars().take(width).collect();
    }
    let clipped: String = line.chars().take(width - 3).collect();
    format!("{clipped}...")
}
