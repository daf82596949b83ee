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

use std::ops::BitOr;

use serde::{Deserialize, Serialize};

use crate::error::ChoicesDialogError;

/// Modality style of a [`ChoicesDialog`](crate::ChoicesDialog) window:
/// whether it blocks its parent, the whole application, the whole system, or
/// nothing at all.
///
/// Styles are single-bit flags. [`BitOr`] exists so that misuse is
/// representable, exactly like the underlying windowing toolkits this mirrors;
/// [`ChoicesDialog::new`](crate::ChoicesDialog::new) rejects anything that is
/// not exactly one recognized bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DialogStyle(u32);

impl DialogStyle {
    /// Blocks the entire application while the dialog is open.
    pub const APPLICATION_MODAL: DialogStyle = DialogStyle(1 << 0);
    /// Blocks only the parent window.
    pub const PRIMARY_MODAL: DialogStyle = DialogStyle(1 << 1);
    /// Blocks the whole system.
    pub const SYSTEM_MODAL: DialogStyle = DialogStyle(1 << 2);
    /// Blocks nothing.
    pub const MODELESS: DialogStyle = DialogStyle(1 << 3);

    const RECOGNIZED_MASK: u32 = Self::APPLICATION_MODAL.0
        | Self::PRIMARY_MODAL.0
        | Self::SYSTEM_MODAL.0
        | Self::MODELESS.0;

    /// Wraps raw bits without validation. Validation happens when the style
    /// reaches a dialog constructor.
    pub fn from_bits(bits: u32) -> Self { Self(bits) }

    pub fn bits(self) -> u32 { self.0 }

    /// Windowing protocol check: the style must be exactly one recognized
    /// modality bit.
    pub(crate) fn check(self) -> Result<Self, ChoicesDialogError> {
        if self.0 == 0 || self.0 & !Self::RECOGNIZED_MASK != 0 {
            return Err(ChoicesDialogError::UnsupportedStyle { style: self.0 });
        }
        if self.0.count_ones() > 1 {
            return Err(ChoicesDialogError::ConflictingStyles { style: self.0 });
        }
        Ok(self)
    }
}

impl BitOr for DialogStyle {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self { Self(self.0 | rhs.0) }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn each_recognized_style_passes_the_check() {
        for style in [
            DialogStyle::APPLICATION_MODAL,
            DialogStyle::PRIMARY_MODAL,
            DialogStyle::SYSTEM_MODAL,
            DialogStyle::MODELESS,
        ] {
            assert_eq!(style.check().unwrap(), style);
        }
    }

    #[test]
    fn zero_style_is_rejected() {
        let result = DialogStyle::from_bits(0).check();
        assert!(matches!(
            result,
            Err(ChoicesDialogError::UnsupportedStyle { style: 0 })
        ));
    }

    #[test]
    fn combined_styles_are_rejected() {
        let style = DialogStyle::APPLICATION_MODAL | DialogStyle::MODELESS;
        let result = style.check();
        assert!(matches!(
            result,
            Err(ChoicesDialogError::ConflictingStyles { .. })
        ));
    }

    #[test]
    fn out_of_mask_bits_are_rejected() {
        let result = DialogStyle::from_bits(1 << 7).check();
        assert!(matches!(
            result,
            Err(ChoicesDialogError::UnsupportedStyle { .. })
        ));

        // A recognized bit plus a stray bit is just as unsupported.
        let mixed = DialogStyle::APPLICATION_MODAL | DialogStyle::from_bits(1 << 30);
        assert!(matches!(
            mixed.check(),
            Err(ChoicesDialogError::UnsupportedStyle { .. })
        ));
    }
}
