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

//! Modal "pick one" dialogs for the terminal.
//!
//! A [`ChoicesDialog`] presents a message and a vertical list of choice
//! buttons in a bordered window centered over a parent [`Window`], and blocks
//! the calling thread (pumping terminal events the whole time) until the user
//! activates a button or closes the window.
//!
//! ```no_run
//! use miette::IntoDiagnostic;
//! use r3bl_choices::{ChoiceItem, ChoicesDialog, DialogStyle, Window};
//!
//! fn main() -> miette::Result<()> {
//!     let parent = Window::fullscreen().into_diagnostic()?;
//!     let choices = [
//!         ChoiceItem::new("Yes", "Save and quit"),
//!         ChoiceItem::new("No", "Quit without saving"),
//!         ChoiceItem::new("Cancel", "Keep editing"),
//!     ];
//!
//!     let mut dialog = ChoicesDialog::new(&parent, DialogStyle::APPLICATION_MODAL)?;
//!     dialog.set_title("Quit");
//!     dialog.set_message("There are unsaved changes. Save before quitting?");
//!     dialog.set_choices(&choices)?;
//!     dialog.set_default_choice(Some(&choices[0]));
//!
//!     match dialog.open()? {
//!         -1 => println!("dialog closed without a choice"),
//!         index => println!("picked: {}", choices[index as usize].text()),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! `open()` returns the zero-based index of the activated choice, or `-1`
//! when the window was closed without one (Esc or Ctrl+C).

#![warn(clippy::all)]
#![warn(clippy::unwrap_in_result)]
#![warn(rust_2018_idioms)]

pub mod choice_item;
pub mod components;
pub mod dialog;
pub mod dialog_style;
pub mod error;
pub mod event_loop;
pub mod function_component;
pub mod icon;
pub mod keypress;
pub mod logging;
pub mod state;
pub mod term;
pub mod test_utils;

pub use choice_item::*;
pub use components::*;
pub use dialog::*;
pub use dialog_style::*;
pub use error::*;
pub use event_loop::*;
pub use function_component::*;
pub use icon::*;
pub use keypress::*;
pub use logging::*;
pub use state::*;
pub use term::*;
