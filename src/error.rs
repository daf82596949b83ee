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

use miette::Diagnostic;
use thiserror::Error;

/// Everything that can go wrong while configuring or opening a
/// [`ChoicesDialog`](crate::ChoicesDialog). All variants are raised fail-fast
/// at the call that violates the contract; nothing is caught or retried
/// internally. Closing the dialog without making a choice is not an error, it
/// is the `-1` return value of [`open()`](crate::ChoicesDialog::open).
#[derive(Debug, Error, Diagnostic)]
pub enum ChoicesDialogError {
    /// The style value contains no recognized modality bit, or bits outside
    /// the recognized set.
    #[error("unsupported dialog style ({style:#x})")]
    #[diagnostic(help(
        "pass exactly one of APPLICATION_MODAL, PRIMARY_MODAL, SYSTEM_MODAL or MODELESS"
    ))]
    UnsupportedStyle { style: u32 },

    /// More than one modality bit is set.
    #[error(
        "only one of APPLICATION_MODAL, PRIMARY_MODAL, SYSTEM_MODAL or MODELESS \
         is supported ({style:#x})"
    )]
    #[diagnostic(help("modality styles are mutually exclusive, do not combine them"))]
    ConflictingStyles { style: u32 },

    /// `set_choices` was called with an empty slice.
    #[error("must provide at least one choice")]
    EmptyChoices,

    /// `open()` was called before `set_choices`.
    #[error("open() called before set_choices()")]
    #[diagnostic(help("configure the dialog with set_choices() before opening it"))]
    ChoicesNotSet,

    /// No bundled icon resource with the given logical name.
    #[error("unknown icon resource {name:?}")]
    UnknownIconResource { name: String },

    /// The terminal rejected raw mode, painting, or event delivery.
    #[error("terminal error")]
    Terminal(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn error_messages_are_stable() {
        assert_eq!(
            ChoicesDialogError::EmptyChoices.to_string(),
            "must provide at least one choice"
        );
        assert_eq!(
            ChoicesDialogError::UnsupportedStyle { style: 0 }.to_string(),
            "unsupported dialog style (0x0)"
        );
        assert_eq!(
            ChoicesDialogError::UnknownIconResource {
                name: "nope".into()
            }
            .to_string(),
            "unknown icon resource \"nope\""
        );
    }
}
