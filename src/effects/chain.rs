//! Effect Chain management
//!
//! Effects are rendered in chain order (index 0 first). The chain never
//! reorders, merges or deduplicates effects: two adjacent `vol` effects
//! are rendered as two `vol` effects.

use super::{Effect, SoxEffect};
use crate::error::{Result, SoxError};
use log::debug;
use serde::{Deserialize, Serialize};

/// Render a sequence of effects into one flat token list
///
/// The first effect that fails to render aborts the whole render and is
/// reported as [`SoxError::RenderFailure`]; no partial output is returned.
pub fn render_chain(effects: &[Effect]) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    for (index, effect) in effects.iter().enumerate() {
        let rendered = effect.render().map_err(|source| SoxError::RenderFailure {
            index,
            effect: effect.name(),
            source: Box::new(source),
        })?;
        tokens.extend(rendered);
    }
    debug!(
        "Rendered {} effects into {} tokens",
        effects.len(),
        tokens.len()
    );
    Ok(tokens)
}

/// Ordered chain of effects
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EffectChain {
    effects: Vec<Effect>,
}

impl EffectChain {
    /// Create a new empty effect chain
    pub fn new() -> Self {
        Self {
            effects: Vec::new(),
        }
    }

    /// Append an effect to the end of the chain
    pub fn push(&mut self, effect: impl Into<Effect>) {
        self.effects.push(effect.into());
    }

    /// Builder form of [`EffectChain::push`]
    pub fn with(mut self, effect: impl Into<Effect>) -> Self {
        self.push(effect);
        self
    }

    /// Insert an effect at a specific index, clamped to the chain length
    pub fn insert(&mut self, index: usize, effect: impl Into<Effect>) {
        let index = index.min(self.effects.len());
        self.effects.insert(index, effect.into());
    }

    /// Remove the effect at `index`
    pub fn remove(&mut self, index: usize) -> Option<Effect> {
        if index < self.effects.len() {
            Some(self.effects.remove(index))
        } else {
            None
        }
    }

    /// Move an effect to a new position
    pub fn move_effect(&mut self, from: usize, to: usize) -> Result<()> {
        if from >= self.effects.len() {
            return Err(SoxError::IndexOutOfRange {
                index: from,
                len: self.effects.len(),
            });
        }

        let effect = self.effects.remove(from);
        let to = to.min(self.effects.len());
        self.effects.insert(to, effect);
        Ok(())
    }

    /// Remove every effect
    pub fn clear(&mut self) {
        self.effects.clear();
    }

    /// Get a reference to the effect at `index`
    pub fn get(&self, index: usize) -> Option<&Effect> {
        self.effects.get(index)
    }

    /// Get a mutable reference to the effect at `index`
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Effect> {
        self.effects.get_mut(index)
    }

    /// Get the number of effects in the chain
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    /// Check if the chain is empty
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Iterate over effects
    pub fn iter(&self) -> std::slice::Iter<'_, Effect> {
        self.effects.iter()
    }

    /// Effects as a slice
    pub fn as_slice(&self) -> &[Effect] {
        &self.effects
    }

    /// Render the whole chain, see [`render_chain`]
    pub fn render(&self) -> Result<Vec<String>> {
        render_chain(&self.effects)
    }
}

impl From<Vec<Effect>> for EffectChain {
    fn from(effects: Vec<Effect>) -> Self {
        Self { effects }
    }
}

impl FromIterator<Effect> for EffectChain {
    fn from_iter<I: IntoIterator<Item = Effect>>(iter: I) -> Self {
        Self {
            effects: iter.into_iter().collect(),
        }
    }
}

impl Extend<Effect> for EffectChain {
    fn extend<I: IntoIterator<Item = Effect>>(&mut self, iter: I) {
        self.effects.extend(iter);
    }
}

impl IntoIterator for EffectChain {
    type Item = Effect;
    type IntoIter = std::vec::IntoIter<Effect>;

    fn into_iter(self) -> Self::IntoIter {
        self.effects.into_iter()
    }
}

impl<'a> IntoIterator for &'a EffectChain {
    type Item = &'a Effect;
    type IntoIter = std::slice::Iter<'a, Effect>;

    fn into_iter(self) -> Self::IntoIter {
        self.effects.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::{Contrast, Echo, GainType, Reverse, Tempo, Volume};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_chain_new() {
        let chain = EffectChain::new();
        assert!(chain.is_empty());
        assert_eq!(chain.len(), 0);
        assert!(chain.render().unwrap().is_empty());
    }

    #[test]
    fn test_chain_concatenates_in_order() {
        let chain = EffectChain::new()
            .with(Volume::new(2.5).with_type(GainType::Db))
            .with(Contrast::default())
            .with(Reverse::new());
        assert_eq!(
            chain.render().unwrap(),
            vec!["vol", "2.5", "dB", "contrast", "75", "reverse"]
        );
    }

    #[test]
    fn test_chain_keeps_redundant_effects() {
        let chain = EffectChain::new()
            .with(Volume::new(2.0))
            .with(Volume::new(2.0));
        assert_eq!(chain.render().unwrap(), vec!["vol", "2", "vol", "2"]);
    }

    #[test]
    fn test_insert_and_move() {
        let mut chain = EffectChain::new();
        chain.push(Volume::new(1.0));
        chain.push(Reverse::new());
        chain.insert(0, Contrast::new(10.0));
        chain.insert(99, Tempo::new(1.5));
        assert_eq!(
            chain.render().unwrap(),
            vec!["contrast", "10", "vol", "1", "reverse", "tempo", "1.5"]
        );

        chain.move_effect(3, 0).unwrap();
        assert_eq!(chain.get(0).map(|e| e.name()), Some("tempo"));
        assert!(chain.move_effect(10, 0).is_err());

        let removed = chain.remove(1).unwrap();
        assert_eq!(removed.name(), "contrast");
        assert!(chain.remove(10).is_none());
        assert_eq!(chain.len(), 3);
    }

    #[test]
    fn test_failure_is_wrapped_with_index() {
        let chain = EffectChain::new()
            .with(Volume::new(1.0))
            .with(Echo::new(0.8, 0.9));
        match chain.render().unwrap_err() {
            SoxError::RenderFailure { index, effect, source } => {
                assert_eq!(index, 1);
                assert_eq!(effect, "echo");
                assert_eq!(source.error_code(), "INVALID_PARAMETER");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_get_mut_changes_render() {
        let mut chain = EffectChain::new().with(Volume::new(1.0));
        if let Some(Effect::Volume(vol)) = chain.get_mut(0) {
            vol.set_gain(0.5);
        }
        assert_eq!(chain.render().unwrap(), vec!["vol", "0.5"]);
    }

    #[test]
    fn test_chain_serializes_as_list() {
        let chain = EffectChain::new().with(Reverse::new());
        let json = serde_json::to_value(&chain).unwrap();
        assert_eq!(json, serde_json::json!([{"effect": "reverse"}]));
    }
}
