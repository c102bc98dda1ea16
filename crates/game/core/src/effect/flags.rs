use bitflags::bitflags;

bitflags! {
    /// Delivery methods a spell carrying this effect may use.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct TargetFlags: u8 {
        const CASTER_ONLY            = 1 << 0;
        const BY_TOUCH               = 1 << 1;
        const SINGLE_TARGET_AT_RANGE = 1 << 2;
        const AREA_AROUND_CASTER     = 1 << 3;
        const AREA_AT_RANGE          = 1 << 4;

        const ALL = Self::CASTER_ONLY.bits()
            | Self::BY_TOUCH.bits()
            | Self::SINGLE_TARGET_AT_RANGE.bits()
            | Self::AREA_AROUND_CASTER.bits()
            | Self::AREA_AT_RANGE.bits();
    }
}

bitflags! {
    /// Elements a spell carrying this effect may be cast with.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct ElementFlags: u8 {
        const FIRE   = 1 << 0;
        const COLD   = 1 << 1;
        const POISON = 1 << 2;
        const SHOCK  = 1 << 3;
        const MAGIC  = 1 << 4;

        const MAGIC_ONLY = Self::MAGIC.bits();
        const ALL = Self::FIRE.bits()
            | Self::COLD.bits()
            | Self::POISON.bits()
            | Self::SHOCK.bits()
            | Self::MAGIC.bits();
    }
}

bitflags! {
    /// Crafting stations allowed to build this effect into an item.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct CraftingStations: u8 {
        const SPELL_MAKER  = 1 << 0;
        const POTION_MAKER = 1 << 1;
        const ITEM_MAKER   = 1 << 2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_targets_covers_every_delivery() {
        assert_eq!(TargetFlags::ALL.bits(), 0b1_1111);
        assert!(TargetFlags::ALL.contains(TargetFlags::BY_TOUCH | TargetFlags::AREA_AT_RANGE));
    }

    #[test]
    fn magic_only_excludes_physical_elements() {
        assert!(ElementFlags::MAGIC_ONLY.contains(ElementFlags::MAGIC));
        assert!(!ElementFlags::MAGIC_ONLY.intersects(ElementFlags::FIRE | ElementFlags::SHOCK));
    }
}
