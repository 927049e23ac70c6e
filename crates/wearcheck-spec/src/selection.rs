//! User slot selection.

use crate::slot::Slot;
use serde::{Deserialize, Deserializer, Serialize};

/// The slot choices made by the user for one wearable.
///
/// The selection is taken as given: `hidden_slots` may contain the target
/// slot or the same slot more than once, and both count toward the budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSelection {
    /// The slot the wearable occupies.
    pub target_slot: Slot,
    /// Slots whose geometry the wearable suppresses, in selection order.
    #[serde(default, deserialize_with = "deserialize_hidden_slots")]
    pub hidden_slots: Vec<Slot>,
    /// Hands only: the wearable replaces the base hands.
    #[serde(default)]
    pub hand_hides_base: bool,
}

impl UserSelection {
    /// Creates a selection with no hidden slots.
    pub fn new(target_slot: Slot) -> Self {
        Self {
            target_slot,
            hidden_slots: Vec::new(),
            hand_hides_base: false,
        }
    }

    /// Builder method to add a hidden slot.
    pub fn hide(mut self, slot: Slot) -> Self {
        self.hidden_slots.push(slot);
        self
    }

    /// Builder method to add several hidden slots.
    pub fn hide_all(mut self, slots: impl IntoIterator<Item = Slot>) -> Self {
        self.hidden_slots.extend(slots);
        self
    }

    /// Builder method to set the hands-hide-base flag.
    pub fn hand_hides_base(mut self, value: bool) -> Self {
        self.hand_hides_base = value;
        self
    }

    /// Builds a selection from raw hidden-slot identifiers.
    ///
    /// Identifiers that do not name a slot are dropped, which is the same as
    /// them contributing zero triangles.
    pub fn from_names<S: AsRef<str>>(
        target_slot: Slot,
        names: &[S],
        hand_hides_base: bool,
    ) -> Self {
        Self {
            target_slot,
            hidden_slots: parse_hidden_names(names.iter().map(AsRef::as_ref)),
            hand_hides_base,
        }
    }
}

fn parse_hidden_names<'a>(names: impl Iterator<Item = &'a str>) -> Vec<Slot> {
    names
        .filter_map(|name| match name.parse::<Slot>() {
            Ok(slot) => Some(slot),
            Err(err) => {
                tracing::warn!(slot = name, "ignoring hidden slot: {}", err);
                None
            }
        })
        .collect()
}

fn deserialize_hidden_slots<'de, D>(deserializer: D) -> Result<Vec<Slot>, D::Error>
where
    D: Deserializer<'de>,
{
    let names = Vec::<String>::deserialize(deserializer)?;
    Ok(parse_hidden_names(names.iter().map(String::as_str)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builder() {
        let selection = UserSelection::new(Slot::Hands)
            .hide(Slot::Hat)
            .hide_all([Slot::Mask, Slot::Mask])
            .hand_hides_base(true);
        assert_eq!(selection.target_slot, Slot::Hands);
        assert_eq!(selection.hidden_slots, vec![Slot::Hat, Slot::Mask, Slot::Mask]);
        assert!(selection.hand_hides_base);
    }

    #[test]
    fn test_from_names_drops_unknown() {
        let selection = UserSelection::from_names(Slot::UpperBody, &["feet", "tail", "hat"], false);
        assert_eq!(selection.hidden_slots, vec![Slot::Feet, Slot::Hat]);
    }

    #[test]
    fn test_deserialize() {
        let json = r#"{"targetSlot":"helmet","hiddenSlots":["hair","wings","hair"]}"#;
        let selection: UserSelection = serde_json::from_str(json).unwrap();
        assert_eq!(selection.target_slot, Slot::Helmet);
        assert_eq!(selection.hidden_slots, vec![Slot::Hair, Slot::Hair]);
        assert!(!selection.hand_hides_base);
    }

    #[test]
    fn test_serialize_camel_case() {
        let selection = UserSelection::new(Slot::Hands).hand_hides_base(true);
        let json = serde_json::to_value(&selection).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "targetSlot": "hands",
                "hiddenSlots": [],
                "handHidesBase": true
            })
        );
    }
}
