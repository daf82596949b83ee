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

use serde::{Deserialize, Serialize};

/// One selectable option of a [`ChoicesDialog`](crate::ChoicesDialog):
/// display text for the button plus a tooltip shown while the button has
/// focus. Both are always present (empty is allowed, absent is not).
///
/// Items are owned by the caller. The dialog borrows the caller's slice, so
/// edits made between `open()` calls are visible to the dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceItem {
    text: String,
    tooltip_text: String,
}

impl ChoiceItem {
    pub fn new(text: impl Into<String>, tooltip_text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tooltip_text: tooltip_text.into(),
        }
    }

    pub fn text(&self) -> &str { &self.text }

    pub fn tooltip_text(&self) -> &str { &self.tooltip_text }

    pub fn set_text(&mut self, text: impl Into<String>) { self.text = text.into(); }

    pub fn set_tooltip_text(&mut self, tooltip_text: impl Into<String>) {
        self.tooltip_text = tooltip_text.into();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn new_then_getters_round_trip() {
        let item = ChoiceItem::new("Yes", "Confirm");
        assert_eq!(item.text(), "Yes");
        assert_eq!(item.tooltip_text(), "Confirm");
    }

    #[test]
    fn setters_overwrite_fields() {
        let mut item = ChoiceItem::new("Yes", "Confirm");
        item.set_text("No");
        item.set_tooltip_text("Cancel");
        assert_eq!(item.text(), "No");
        assert_eq!(item.tooltip_text(), "Cancel");
    }

    #[test]
    fn getters_are_stable_between_setter_calls() {
        let item = ChoiceItem::new("OK", "Accept");
        assert_eq!(item.text(), item.text());
        assert_eq!(item.tooltip_text(), item.tooltip_text());
    }

    #[test]
    fn choice_items_deserialize_from_json() {
        let json = r#"[
            { "text": "Yes", "tooltip_text": "Confirm" },
            { "text": "No", "tooltip_text": "Cancel" }
        ]"#;
        let items: Vec<ChoiceItem> = serde_json::from_str(json).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0], ChoiceItem::new("Yes", "Confirm"));
        assert_eq!(items[1].text(), "No");
    }
}
