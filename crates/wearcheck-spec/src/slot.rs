//! Avatar attachment slots.

use crate::error::SlotError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named body or accessory attachment point on an avatar.
///
/// `Head` is only meaningful as a hidden slot; it is never offered as a
/// target slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    Hat,
    Helmet,
    UpperBody,
    LowerBody,
    Feet,
    Hair,
    Mask,
    Eyewear,
    Earring,
    Tiara,
    TopHead,
    FacialHair,
    Hands,
    Skin,
    Head,
}

impl Slot {
    /// Every slot, in canonical order.
    pub const ALL: [Slot; 15] = [
        Slot::Hat,
        Slot::Helmet,
        Slot::UpperBody,
        Slot::LowerBody,
        Slot::Feet,
        Slot::Hair,
        Slot::Mask,
        Slot::Eyewear,
        Slot::Earring,
        Slot::Tiara,
        Slot::TopHead,
        Slot::FacialHair,
        Slot::Hands,
        Slot::Skin,
        Slot::Head,
    ];

    /// Returns the wire identifier (e.g. `"upper_body"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Slot::Hat => "hat",
            Slot::Helmet => "helmet",
            Slot::UpperBody => "upper_body",
            Slot::LowerBody => "lower_body",
            Slot::Feet => "feet",
            Slot::Hair => "hair",
            Slot::Mask => "mask",
            Slot::Eyewear => "eyewear",
            Slot::Earring => "earring",
            Slot::Tiara => "tiara",
            Slot::TopHead => "top_head",
            Slot::FacialHair => "facial_hair",
            Slot::Hands => "hands",
            Slot::Skin => "skin",
            Slot::Head => "head",
        }
    }

    /// Returns true if a wearable may target this slot.
    pub fn is_target(&self) -> bool {
        !matches!(self, Slot::Head)
    }

    /// Parses a slot that must be usable as a target.
    pub fn parse_target(s: &str) -> Result<Slot, SlotError> {
        let slot: Slot = s.parse()?;
        if slot.is_target() {
            Ok(slot)
        } else {
            Err(SlotError::NotATarget(slot.as_str().to_string()))
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Slot {
    type Err = SlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Slot::ALL
            .iter()
            .copied()
            .find(|slot| slot.as_str() == needle)
            .ok_or_else(|| SlotError::UnknownSlot(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_round_trips_through_identifier() {
        for slot in Slot::ALL {
            assert_eq!(slot.as_str().parse::<Slot>().unwrap(), slot);
        }
    }

    #[test]
    fn test_unknown_slot_is_rejected() {
        assert_eq!(
            "tail".parse::<Slot>(),
            Err(SlotError::UnknownSlot("tail".to_string()))
        );
        assert!("UpperBody".parse::<Slot>().is_err());
    }

    #[test]
    fn test_head_is_not_a_target() {
        assert!(!Slot::Head.is_target());
        assert_eq!(
            Slot::parse_target("head"),
            Err(SlotError::NotATarget("head".to_string()))
        );
        assert_eq!(Slot::parse_target("helmet"), Ok(Slot::Helmet));
    }

    #[test]
    fn test_slot_serde_uses_snake_case() {
        let json = serde_json::to_string(&Slot::FacialHair).unwrap();
        assert_eq!(json, "\"facial_hair\"");
        let slot: Slot = serde_json::from_str("\"top_head\"").unwrap();
        assert_eq!(slot, Slot::TopHead);
    }
}
