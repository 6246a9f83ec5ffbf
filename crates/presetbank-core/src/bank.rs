//! Preset bank aggregate.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::category::PresetCategory;
use crate::error::BankError;
use crate::preset::Preset;
use crate::settings::{Settings, SettingsSchema, Variant};

/// Wire value of [`BankId::Local`].
pub const LOCAL_BANK_ID: &str = "0";

/// Identity of a bank.
///
/// Persistence assigns real identifiers. A bank built in-process and never
/// stored is [`BankId::Local`], written as `"0"` on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BankId {
    /// Built locally, not yet persisted.
    #[default]
    Local,
    /// Identifier assigned by persistence.
    Persisted(String),
}

impl BankId {
    /// Wrap a persistence identifier. `"0"` maps to [`BankId::Local`].
    pub fn persisted(id: impl Into<String>) -> Self {
        Self::from(id.into())
    }

    /// Whether persistence has assigned this identifier.
    pub fn is_persisted(&self) -> bool {
        matches!(self, BankId::Persisted(_))
    }

    /// Wire form of the identifier.
    pub fn as_str(&self) -> &str {
        match self {
            BankId::Local => LOCAL_BANK_ID,
            BankId::Persisted(id) => id,
        }
    }
}

impl From<String> for BankId {
    fn from(id: String) -> Self {
        if id == LOCAL_BANK_ID {
            BankId::Local
        } else {
            BankId::Persisted(id)
        }
    }
}

impl From<BankId> for String {
    fn from(id: BankId) -> Self {
        match id {
            BankId::Local => LOCAL_BANK_ID.to_string(),
            BankId::Persisted(id) => id,
        }
    }
}

impl fmt::Display for BankId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An identified, ordered collection of preset categories.
///
/// Typed banks (`PresetBank<JvaSettings>`) can only hold one module's
/// settings. `PresetBank<Settings>` is the tagged form used at the
/// persistence boundary, where every preset carries its own discriminant
/// and mixing must be checked at run time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetBank<S> {
    /// Bank identity.
    #[serde(rename = "_id")]
    pub id: BankId,

    /// Categories in display order.
    pub categories: Vec<PresetCategory<S>>,
}

impl<S> Default for PresetBank<S> {
    fn default() -> Self {
        Self::local()
    }
}

impl<S> PresetBank<S> {
    /// Create an empty bank with the given identity.
    pub fn new(id: BankId) -> Self {
        Self {
            id,
            categories: Vec::new(),
        }
    }

    /// Create an empty, not yet persisted bank.
    pub fn local() -> Self {
        Self::new(BankId::Local)
    }

    /// Whether the bank came from (or was written to) persistence.
    pub fn is_persisted(&self) -> bool {
        self.id.is_persisted()
    }

    /// Append a category, rejecting a label already present.
    pub fn add_category(&mut self, category: PresetCategory<S>) -> Result<(), BankError> {
        if self.category(&category.category).is_some() {
            return Err(BankError::DuplicateCategory(category.category));
        }
        self.categories.push(category);
        Ok(())
    }

    /// Category with the given label.
    pub fn category(&self, label: &str) -> Option<&PresetCategory<S>> {
        self.categories.iter().find(|c| c.category == label)
    }

    /// Category with the given label, mutably.
    pub fn category_mut(&mut self, label: &str) -> Option<&mut PresetCategory<S>> {
        self.categories.iter_mut().find(|c| c.category == label)
    }

    /// Category with the given label, appended empty if missing.
    pub fn category_or_insert(&mut self, label: &str) -> &mut PresetCategory<S> {
        let index = match self.categories.iter().position(|c| c.category == label) {
            Some(index) => index,
            None => {
                self.categories.push(PresetCategory::new(label));
                self.categories.len() - 1
            }
        };
        &mut self.categories[index]
    }

    /// Remove and return the category with the given label.
    pub fn remove_category(&mut self, label: &str) -> Option<PresetCategory<S>> {
        let index = self.categories.iter().position(|c| c.category == label)?;
        Some(self.categories.remove(index))
    }

    /// Look up a preset by category label and preset name.
    pub fn find_preset(&self, label: &str, name: &str) -> Option<&Preset<S>> {
        self.category(label)?.get(name)
    }

    /// Every preset with its category label, in display order.
    pub fn presets(&self) -> impl Iterator<Item = (&str, &Preset<S>)> {
        self.categories
            .iter()
            .flat_map(|c| c.presets.iter().map(move |p| (c.category.as_str(), p)))
    }

    /// Total number of presets across all categories.
    pub fn preset_count(&self) -> usize {
        self.categories.iter().map(PresetCategory::len).sum()
    }

    /// Category labels in display order.
    pub fn labels(&self) -> Vec<&str> {
        self.categories
            .iter()
            .map(|c| c.category.as_str())
            .collect()
    }

    /// Convert every preset's settings, keeping structure and identity.
    pub fn map_settings<T>(self, mut f: impl FnMut(S) -> T) -> PresetBank<T> {
        PresetBank {
            id: self.id,
            categories: self
                .categories
                .into_iter()
                .map(|c| c.map_settings(&mut f))
                .collect(),
        }
    }
}

impl<S: SettingsSchema> PresetBank<S> {
    /// The module this bank is scoped to.
    pub fn variant(&self) -> Variant {
        S::VARIANT
    }

    /// Tagged form of this bank, as written by persistence.
    pub fn into_settings_bank(self) -> PresetBank<Settings> {
        self.map_settings(S::into_settings)
    }

    /// Narrow a tagged bank to this schema.
    ///
    /// Fails on the first preset whose settings belong to another module.
    pub fn try_from_settings_bank(bank: PresetBank<Settings>) -> Result<Self, BankError> {
        let mut categories = Vec::with_capacity(bank.categories.len());
        for category in bank.categories {
            let mut presets = Vec::with_capacity(category.presets.len());
            for preset in category.presets {
                let found = preset.settings.variant();
                let Ok(settings) = S::from_settings(preset.settings) else {
                    return Err(BankError::VariantMismatch {
                        category: category.category,
                        preset: preset.name,
                        expected: S::VARIANT,
                        found,
                    });
                };
                presets.push(Preset {
                    name: preset.name,
                    version: preset.version,
                    private: preset.private,
                    settings,
                });
            }
            categories.push(PresetCategory {
                category: category.category,
                presets,
            });
        }
        Ok(PresetBank {
            id: bank.id,
            categories,
        })
    }
}

impl PresetBank<Settings> {
    /// Variant of the first preset, `None` for a bank without presets.
    pub fn detected_variant(&self) -> Option<Variant> {
        self.presets().next().map(|(_, p)| p.settings.variant())
    }

    /// Narrow to a typed bank. See [`PresetBank::try_from_settings_bank`].
    pub fn into_typed<S: SettingsSchema>(self) -> Result<PresetBank<S>, BankError> {
        PresetBank::try_from_settings_bank(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{ArpeggioMode, ComputerMidiKeyboardSettings, JvaSettings};

    fn keyboard(octave_offset: i32) -> ComputerMidiKeyboardSettings {
        ComputerMidiKeyboardSettings {
            arp_on: false,
            arp_mode: ArpeggioMode::Up,
            arp_node_repeat: 1,
            chord_trigger: vec![0],
            octave_offset,
            transpose_offset: 0,
        }
    }

    fn bank() -> PresetBank<ComputerMidiKeyboardSettings> {
        let mut bank = PresetBank::new(BankId::persisted("abc123"));
        bank.add_category(
            PresetCategory::new("low")
                .with_preset(Preset::new("bass", keyboard(24)))
                .with_preset(Preset::new("sub", keyboard(12))),
        )
        .unwrap();
        bank.add_category(
            PresetCategory::new("high").with_preset(Preset::new("lead", keyboard(72))),
        )
        .unwrap();
        bank
    }

    #[test]
    fn bank_id_sentinel() {
        assert_eq!(BankId::persisted("0"), BankId::Local);
        assert!(!BankId::Local.is_persisted());
        assert!(BankId::persisted("64f0c2").is_persisted());
        assert_eq!(BankId::Local.to_string(), "0");
        assert_eq!(String::from(BankId::persisted("x1")), "x1");
    }

    #[test]
    fn bank_id_serializes_as_string() {
        let json = serde_json::to_string(&BankId::Local).unwrap();
        assert_eq!(json, "\"0\"");
        let id: BankId = serde_json::from_str("\"5f1e\"").unwrap();
        assert_eq!(id, BankId::Persisted("5f1e".to_string()));
    }

    #[test]
    fn add_category_rejects_duplicate_label() {
        let mut bank = bank();
        let err = bank.add_category(PresetCategory::new("low")).unwrap_err();
        assert_eq!(err, BankError::DuplicateCategory("low".to_string()));
        assert_eq!(bank.categories.len(), 2);
    }

    #[test]
    fn category_or_insert_reuses_existing() {
        let mut bank = bank();
        let extra = Preset::new("extra", keyboard(0));
        bank.category_or_insert("low").push(extra);
        let fresh = Preset::new("fresh", keyboard(0));
        bank.category_or_insert("new").push(fresh);
        assert_eq!(bank.labels(), vec!["low", "high", "new"]);
        assert_eq!(bank.category("low").unwrap().len(), 3);
    }

    #[test]
    fn lookup_and_removal() {
        let mut bank = bank();
        let sub = bank.find_preset("low", "sub").unwrap();
        assert_eq!(sub.settings.octave_offset, 12);
        assert!(bank.find_preset("high", "sub").is_none());
        assert!(bank.remove_category("low").is_some());
        assert_eq!(bank.preset_count(), 1);
        assert!(bank.remove_category("low").is_none());
    }

    #[test]
    fn presets_iterate_in_display_order() {
        let bank = bank();
        let names: Vec<_> = bank.presets().map(|(c, p)| (c, p.name.as_str())).collect();
        assert_eq!(
            names,
            vec![("low", "bass"), ("low", "sub"), ("high", "lead")]
        );
    }

    #[test]
    fn tagged_round_trip() {
        let original = bank();
        let tagged = original.clone().into_settings_bank();
        assert_eq!(
            tagged.detected_variant(),
            Some(Variant::ComputerMidiKeyboard)
        );
        let typed: PresetBank<ComputerMidiKeyboardSettings> = tagged.into_typed().unwrap();
        assert_eq!(typed, original);
    }

    #[test]
    fn narrowing_to_wrong_schema_fails() {
        let tagged = bank().into_settings_bank();
        let err = tagged.into_typed::<JvaSettings>().unwrap_err();
        assert_eq!(
            err,
            BankError::VariantMismatch {
                category: "low".to_string(),
                preset: "bass".to_string(),
                expected: Variant::Jva,
                found: Variant::ComputerMidiKeyboard,
            }
        );
    }

    #[test]
    fn empty_bank_has_no_detected_variant() {
        let bank: PresetBank<Settings> = PresetBank::local();
        assert_eq!(bank.detected_variant(), None);
        assert_eq!(bank.preset_count(), 0);
    }
}
