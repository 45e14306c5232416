//! Level and dynamics effects
//!
//! `vol`, `gain`, `norm`, `loudness`, `contrast` and `overdrive`.

use super::args::EffectArgs;
use super::types::{GainBalance, GainHeadroom, GainType};
use super::SoxEffect;
use crate::error::Result;
use serde::{Deserialize, Serialize};

// ============================================================================
// Constants
// ============================================================================

/// Default `contrast` enhancement
pub const DEFAULT_CONTRAST_ENHANCEMENT: f64 = 75.0;

fn default_enhancement() -> f64 {
    DEFAULT_CONTRAST_ENHANCEMENT
}

// ============================================================================
// Volume
// ============================================================================

/// Apply an amplification or attenuation to the audio signal
///
/// # Parameters
/// - `gain`: the gain, interpreted according to `type`
/// - `type`: optional [`GainType`] keyword (`amplitude`, `power` or `dB`)
/// - `limiter`: optional limiter gain, normally used together with `type`
///
/// A limiter without a type is accepted and rendered right after the gain.
/// Whether that makes sense is left to the caller.
///
/// # Example
/// ```
/// use soxfx::effects::{GainType, SoxEffect, Volume};
///
/// let vol = Volume::new(2.5).with_type(GainType::Db);
/// assert_eq!(vol.render().unwrap(), vec!["vol", "2.5", "dB"]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Volume {
    gain: f64,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    gain_type: Option<GainType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    limiter: Option<f64>,
}

impl Volume {
    /// Create a volume effect with only a gain
    pub fn new(gain: f64) -> Self {
        Self {
            gain,
            gain_type: None,
            limiter: None,
        }
    }

    /// Set the gain type
    pub fn with_type(mut self, gain_type: GainType) -> Self {
        self.gain_type = Some(gain_type);
        self
    }

    /// Set the limiter gain
    pub fn with_limiter(mut self, limiter: f64) -> Self {
        self.limiter = Some(limiter);
        self
    }

    pub fn gain(&self) -> f64 {
        self.gain
    }

    pub fn set_gain(&mut self, gain: f64) {
        self.gain = gain;
    }

    pub fn gain_type(&self) -> Option<GainType> {
        self.gain_type
    }

    pub fn set_gain_type(&mut self, gain_type: Option<GainType>) {
        self.gain_type = gain_type;
    }

    pub fn limiter(&self) -> Option<f64> {
        self.limiter
    }

    pub fn set_limiter(&mut self, limiter: Option<f64>) {
        self.limiter = limiter;
    }
}

impl SoxEffect for Volume {
    fn name(&self) -> &'static str {
        "vol"
    }

    fn write_args(&self, args: &mut EffectArgs) -> Result<()> {
        args.number("gain", self.gain)?;
        if let Some(gain_type) = self.gain_type {
            args.keyword(gain_type.token());
        }
        args.optional("limiter", self.limiter)?;
        Ok(())
    }
}

// ============================================================================
// Gain
// ============================================================================

/// Apply gain with optional normalisation, balancing and limiting
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Gain {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    balance: Option<GainBalance>,
    #[serde(default)]
    normalize: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    headroom: Option<GainHeadroom>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    db: Option<f64>,
}

impl Gain {
    /// Gain in dB
    pub fn new(db: f64) -> Self {
        Self {
            db: Some(db),
            ..Self::default()
        }
    }

    /// Normalise to 0 dBFS, then apply `db` (usually negative) on top
    pub fn normalized(db: Option<f64>) -> Self {
        Self {
            normalize: true,
            db,
            ..Self::default()
        }
    }

    pub fn with_balance(mut self, balance: GainBalance) -> Self {
        self.balance = Some(balance);
        self
    }

    pub fn with_headroom(mut self, headroom: GainHeadroom) -> Self {
        self.headroom = Some(headroom);
        self
    }

    pub fn balance(&self) -> Option<GainBalance> {
        self.balance
    }

    pub fn set_balance(&mut self, balance: Option<GainBalance>) {
        self.balance = balance;
    }

    pub fn normalize(&self) -> bool {
        self.normalize
    }

    pub fn set_normalize(&mut self, normalize: bool) {
        self.normalize = normalize;
    }

    pub fn headroom(&self) -> Option<GainHeadroom> {
        self.headroom
    }

    pub fn set_headroom(&mut self, headroom: Option<GainHeadroom>) {
        self.headroom = headroom;
    }

    pub fn db(&self) -> Option<f64> {
        self.db
    }

    pub fn set_db(&mut self, db: Option<f64>) {
        self.db = db;
    }
}

impl SoxEffect for Gain {
    fn name(&self) -> &'static str {
        "gain"
    }

    fn write_args(&self, args: &mut EffectArgs) -> Result<()> {
        if let Some(balance) = self.balance {
            args.keyword(balance.token());
        }
        args.flag(self.normalize, "-n");
        if let Some(headroom) = self.headroom {
            args.keyword(headroom.token());
        }
        args.optional("db", self.db)?;
        Ok(())
    }
}

// ============================================================================
// Norm
// ============================================================================

/// Normalise the audio to 0 dBFS, or to `level` dBFS if given
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Norm {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    level: Option<f64>,
}

impl Norm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_level(mut self, level: f64) -> Self {
        self.level = Some(level);
        self
    }

    pub fn level(&self) -> Option<f64> {
        self.level
    }

    pub fn set_level(&mut self, level: Option<f64>) {
        self.level = level;
    }
}

impl SoxEffect for Norm {
    fn name(&self) -> &'static str {
        "norm"
    }

    fn write_args(&self, args: &mut EffectArgs) -> Result<()> {
        args.optional("level", self.level)?;
        Ok(())
    }
}

// ============================================================================
// Loudness
// ============================================================================

/// Equal-loudness volume control
///
/// SoX defaults are a gain of -10 dB and a reference of 65 dB; a reference
/// can only be given together with a gain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Loudness {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    gain: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    reference: Option<f64>,
}

impl Loudness {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_gain(mut self, gain: f64) -> Self {
        self.gain = Some(gain);
        self
    }

    pub fn with_reference(mut self, reference: f64) -> Self {
        self.reference = Some(reference);
        self
    }

    pub fn gain(&self) -> Option<f64> {
        self.gain
    }

    pub fn set_gain(&mut self, gain: Option<f64>) {
        self.gain = gain;
    }

    pub fn reference(&self) -> Option<f64> {
        self.reference
    }

    pub fn set_reference(&mut self, reference: Option<f64>) {
        self.reference = reference;
    }
}

impl SoxEffect for Loudness {
    fn name(&self) -> &'static str {
        "loudness"
    }

    fn write_args(&self, args: &mut EffectArgs) -> Result<()> {
        args.positional(&[("gain", self.gain), ("reference", self.reference)])?;
        Ok(())
    }
}

// ============================================================================
// Contrast
// ============================================================================

/// Make the audio sound louder, comparable to compression
///
/// `enhancement` is conventionally in 0..=100 (default 75). Zero still gives
/// a significant enhancement and is always rendered; out-of-range values are
/// passed through for SoX to judge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contrast {
    #[serde(default = "default_enhancement")]
    enhancement: f64,
}

impl Contrast {
    pub fn new(enhancement: f64) -> Self {
        Self { enhancement }
    }

    pub fn enhancement(&self) -> f64 {
        self.enhancement
    }

    pub fn set_enhancement(&mut self, enhancement: f64) {
        self.enhancement = enhancement;
    }
}

impl Default for Contrast {
    fn default() -> Self {
        Self::new(DEFAULT_CONTRAST_ENHANCEMENT)
    }
}

impl SoxEffect for Contrast {
    fn name(&self) -> &'static str {
        "contrast"
    }

    fn write_args(&self, args: &mut EffectArgs) -> Result<()> {
        args.number("enhancement", self.enhancement)?;
        Ok(())
    }
}

// ============================================================================
// Overdrive
// ============================================================================

/// Non-linear distortion. SoX defaults: gain 20, colour 20.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Overdrive {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    gain: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    colour: Option<f64>,
}

impl Overdrive {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_gain(mut self, gain: f64) -> Self {
        self.gain = Some(gain);
        self
    }

    pub fn with_colour(mut self, colour: f64) -> Self {
        self.colour = Some(colour);
        self
    }

    pub fn gain(&self) -> Option<f64> {
        self.gain
    }

    pub fn set_gain(&mut self, gain: Option<f64>) {
        self.gain = gain;
    }

    pub fn colour(&self) -> Option<f64> {
        self.colour
    }

    pub fn set_colour(&mut self, colour: Option<f64>) {
        self.colour = colour;
    }
}

impl SoxEffect for Overdrive {
    fn name(&self) -> &'static str {
        "overdrive"
    }

    fn write_args(&self, args: &mut EffectArgs) -> Result<()> {
        args.positional(&[("gain", self.gain), ("colour", self.colour)])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_contrast_default() {
        assert_eq!(Contrast::default().render().unwrap(), vec!["contrast", "75"]);
    }

    #[test]
    fn test_contrast_zero_is_rendered() {
        assert_eq!(Contrast::new(0.0).render().unwrap(), vec!["contrast", "0"]);
    }

    #[test]
    fn test_contrast_out_of_range_is_deferred() {
        assert_eq!(
            Contrast::new(150.0).render().unwrap(),
            vec!["contrast", "150"]
        );
    }

    #[test]
    fn test_volume_gain_only() {
        assert_eq!(Volume::new(2.5).render().unwrap(), vec!["vol", "2.5"]);
        assert_eq!(Volume::new(1.0).render().unwrap(), vec!["vol", "1"]);
    }

    #[test]
    fn test_volume_with_type() {
        let vol = Volume::new(2.5).with_type(GainType::Db);
        assert_eq!(vol.render().unwrap(), vec!["vol", "2.5", "dB"]);
    }

    #[test]
    fn test_volume_with_type_and_limiter() {
        let vol = Volume::new(2.5)
            .with_type(GainType::Amplitude)
            .with_limiter(0.05);
        assert_eq!(
            vol.render().unwrap(),
            vec!["vol", "2.5", "amplitude", "0.05"]
        );
    }

    #[test]
    fn test_volume_limiter_without_type() {
        let vol = Volume::new(2.5).with_limiter(0.05);
        assert_eq!(vol.render().unwrap(), vec!["vol", "2.5", "0.05"]);
    }

    #[test]
    fn test_volume_setters() {
        let mut vol = Volume::new(1.0).with_type(GainType::Power);
        vol.set_gain(-3.2);
        vol.set_gain_type(None);
        assert_eq!(vol.render().unwrap(), vec!["vol", "-3.2"]);
    }

    #[test]
    fn test_volume_nan_gain_fails() {
        let err = Volume::new(f64::NAN).render().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_PARAMETER");
    }

    #[test]
    fn test_gain_full() {
        let gain = Gain::normalized(Some(-3.0))
            .with_balance(GainBalance::Equalise)
            .with_headroom(GainHeadroom::Limiter);
        assert_eq!(
            gain.render().unwrap(),
            vec!["gain", "-e", "-n", "-l", "-3"]
        );
    }

    #[test]
    fn test_gain_plain() {
        assert_eq!(Gain::new(6.0).render().unwrap(), vec!["gain", "6"]);
        assert_eq!(Gain::default().render().unwrap(), vec!["gain"]);
    }

    #[test]
    fn test_norm() {
        assert_eq!(Norm::new().render().unwrap(), vec!["norm"]);
        assert_eq!(
            Norm::new().with_level(-1.0).render().unwrap(),
            vec!["norm", "-1"]
        );
    }

    #[test]
    fn test_loudness_reference_requires_gain() {
        let loud = Loudness::new().with_reference(70.0);
        assert!(loud.render().is_err());

        let loud = Loudness::new().with_gain(-8.0).with_reference(70.0);
        assert_eq!(loud.render().unwrap(), vec!["loudness", "-8", "70"]);
    }

    #[test]
    fn test_overdrive() {
        assert_eq!(Overdrive::new().render().unwrap(), vec!["overdrive"]);
        assert_eq!(
            Overdrive::new().with_gain(30.0).render().unwrap(),
            vec!["overdrive", "30"]
        );
    }
}
