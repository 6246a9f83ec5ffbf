//! Labelled group of presets.

use serde::{Deserialize, Serialize};

use crate::preset::Preset;

/// An ordered group of presets under one label.
///
/// Presets keep insertion order, which is the order they are displayed in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetCategory<S> {
    /// Label, unique within its bank.
    pub category: String,

    /// Presets in display order.
    pub presets: Vec<Preset<S>>,
}

impl<S> PresetCategory<S> {
    /// Create an empty category.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            category: label.into(),
            presets: Vec::new(),
        }
    }

    /// Append a preset (builder form).
    pub fn with_preset(mut self, preset: Preset<S>) -> Self {
        self.presets.push(preset);
        self
    }

    /// Append a preset.
    pub fn push(&mut self, preset: Preset<S>) {
        self.presets.push(preset);
    }

    /// Insert a preset at `index`, clamped to the end.
    pub fn insert(&mut self, index: usize, preset: Preset<S>) {
        let idx = index.min(self.presets.len());
        self.presets.insert(idx, preset);
    }

    /// First preset with the given name.
    pub fn get(&self, name: &str) -> Option<&Preset<S>> {
        self.presets.iter().find(|p| p.name == name)
    }

    /// First preset with the given name, mutably.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Preset<S>> {
        self.presets.iter_mut().find(|p| p.name == name)
    }

    /// Remove and return the first preset with the given name.
    pub fn remove(&mut self, name: &str) -> Option<Preset<S>> {
        let index = self.presets.iter().position(|p| p.name == name)?;
        Some(self.presets.remove(index))
    }

    /// Preset names in display order.
    pub fn names(&self) -> Vec<&str> {
        self.presets.iter().map(|p| p.name.as_str()).collect()
    }

    /// Iterate over presets in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Preset<S>> {
        self.presets.iter()
    }

    /// Number of presets.
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    /// Whether the category holds no presets.
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// Convert every preset's settings.
    pub fn map_settings<T>(self, mut f: impl FnMut(S) -> T) -> PresetCategory<T> {
        PresetCategory {
            category: self.category,
            presets: self
                .presets
                .into_iter()
                .map(|p| p.map_settings(&mut f))
                .collect(),
        }
    }
}
