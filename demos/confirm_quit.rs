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

//! A classic "unsaved changes" confirmation. Run with
//! `cargo run --example confirm_quit`.

use miette::IntoDiagnostic;
use r3bl_choices::{try_initialize_logging, ChoiceItem, ChoicesDialog, DialogStyle,
                   Icon, Window, WARNING_ICON};

fn main() -> miette::Result<()> {
    let _log_guard = try_initialize_logging();

    let parent = Window::fullscreen().into_diagnostic()?;
    let choices = [
        ChoiceItem::new("Save", "Write changes to disk, then quit"),
        ChoiceItem::new("Discard", "Quit and lose the changes"),
        ChoiceItem::new("Cancel", "Keep editing"),
    ];

    let mut dialog = ChoicesDialog::new(&parent, DialogStyle::APPLICATION_MODAL)?;
    dialog.set_title("Quit");
    dialog.set_message("There are unsaved changes.\nSave before quitting?");
    dialog.set_image(Some(Icon::load(WARNING_ICON)?));
    dialog.set_choices(&choices)?;
    dialog.set_default_choice(Some(&choices[0]));

    match dialog.open()? {
        -1 => println!("Dialog closed without a choice."),
        index => println!("You picked: {}", choices[index as usize].text()),
    }

    Ok(())
}
