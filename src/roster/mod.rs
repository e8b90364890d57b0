//! Raw list records as exported to JSON

pub mod raw;

pub use raw::{
    RawArmy, RawRule, RawUnit, RawUpgrade, RawUpgradeInstance, RawUpgradeOption, RawWeapon,
    UpgradeCost, UpgradeGain, UpgradeKind,
};
