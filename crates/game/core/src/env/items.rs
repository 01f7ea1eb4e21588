use crate::state::{Consumable, EntityId, Equippable, Item};

/// Item definition loaded from data files.
///
/// Consumable and equippable behaviours are independent; an item may carry
/// either, both, or neither.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemTemplate {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub consumable: Option<Consumable>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub equippable: Option<Equippable>,
}

impl ItemTemplate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            consumable: None,
            equippable: None,
        }
    }

    pub fn to_item(&self, id: EntityId) -> Item {
        Item {
            id,
            name: self.name.clone(),
            consumable: self.consumable,
            equippable: self.equippable,
        }
    }
}
