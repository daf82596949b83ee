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

//! A restyled picker without the arrow gutter. Run with
//! `cargo run --example pick_theme`.

use crossterm::style::Color;
use miette::IntoDiagnostic;
use r3bl_choices::{try_initialize_logging, ChoiceItem, ChoicesDialog, DialogStyle,
                   Style, StyleSheet, Window};

fn main() -> miette::Result<()> {
    let _log_guard = try_initialize_logging();

    let parent = Window::fullscreen().into_diagnostic()?;
    let choices = [
        ChoiceItem::new("Dark", "Low-light friendly"),
        ChoiceItem::new("Light", "High contrast on bright screens"),
        ChoiceItem::new("Solarized", "Easy on the eyes"),
    ];

    let mut dialog = ChoicesDialog::new(&parent, DialogStyle::MODELESS)?;
    dialog.set_title("Theme");
    dialog.set_message("Pick a color theme.");
    dialog.set_choices(&choices)?;
    dialog.set_show_arrows(false);
    dialog.set_style_sheet(StyleSheet {
        focused_style: Style {
            fg_color: Color::Black,
            bg_color: Color::Rgb {
                r: 133,
                g: 193,
                b: 117,
            },
            bold: true,
            ..Style::default()
        },
        ..StyleSheet::default()
    });

    match dialog.open()? {
        -1 => println!("No theme picked."),
        index => println!("Theme: {}", choices[index as usize].text()),
    }

    Ok(())
}
