//! Reverberation, delay and modulation effects

use super::args::EffectArgs;
use super::types::{FlangerInterpolation, FlangerShape, PhaserModulation};
use super::SoxEffect;
use crate::error::{Result, SoxError};
use serde::{Deserialize, Serialize};

/// Builder, getter and setter for plain `Copy` fields
macro_rules! value_accessors {
    ($($field:ident, $with:ident, $set:ident: $ty:ty;)*) => {
        $(
            pub fn $with(mut self, $field: $ty) -> Self {
                self.$field = $field;
                self
            }

            pub fn $field(&self) -> $ty {
                self.$field
            }

            pub fn $set(&mut self, $field: $ty) {
                self.$field = $field;
            }
        )*
    };
}

// ============================================================================
// Reverb
// ============================================================================

/// Freeverb-style reverberation
///
/// All six values are always rendered, so a later value never shifts into an
/// earlier slot.
///
/// # Parameters
/// - `wet_only`: render `-w`, output only the reverberated signal
/// - `reverberance`: percent (default 50)
/// - `hf_damping`: percent (default 50)
/// - `room_scale`: percent (default 100)
/// - `stereo_depth`: percent (default 100)
/// - `pre_delay`: milliseconds (default 0)
/// - `wet_gain`: dB (default 0)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reverb {
    wet_only: bool,
    reverberance: f64,
    hf_damping: f64,
    room_scale: f64,
    stereo_depth: f64,
    pre_delay: f64,
    wet_gain: f64,
}

impl Reverb {
    pub fn new() -> Self {
        Self::default()
    }

    value_accessors! {
        reverberance, with_reverberance, set_reverberance: f64;
        hf_damping, with_hf_damping, set_hf_damping: f64;
        room_scale, with_room_scale, set_room_scale: f64;
        stereo_depth, with_stereo_depth, set_stereo_depth: f64;
        pre_delay, with_pre_delay, set_pre_delay: f64;
        wet_gain, with_wet_gain, set_wet_gain: f64;
    }

    pub fn wet_only(mut self) -> Self {
        self.wet_only = true;
        self
    }

    pub fn is_wet_only(&self) -> bool {
        self.wet_only
    }

    pub fn set_wet_only(&mut self, wet_only: bool) {
        self.wet_only = wet_only;
    }
}

impl Default for Reverb {
    fn default() -> Self {
        Self {
            wet_only: false,
            reverberance: 50.0,
            hf_damping: 50.0,
            room_scale: 100.0,
            stereo_depth: 100.0,
            pre_delay: 0.0,
            wet_gain: 0.0,
        }
    }
}

impl SoxEffect for Reverb {
    fn name(&self) -> &'static str {
        "reverb"
    }

    fn write_args(&self, args: &mut EffectArgs) -> Result<()> {
        args.flag(self.wet_only, "-w");
        args.number("reverberance", self.reverberance)?;
        args.number("hf_damping", self.hf_damping)?;
        args.number("room_scale", self.room_scale)?;
        args.number("stereo_depth", self.stereo_depth)?;
        args.number("pre_delay", self.pre_delay)?;
        args.number("wet_gain", self.wet_gain)?;
        Ok(())
    }
}

// ============================================================================
// Echo
// ============================================================================

/// One echo: delay in milliseconds and decay relative to the input
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EchoTap {
    delay: f64,
    decay: f64,
}

impl EchoTap {
    pub fn new(delay: f64, decay: f64) -> Self {
        Self { delay, decay }
    }

    pub fn delay(&self) -> f64 {
        self.delay
    }

    pub fn decay(&self) -> f64 {
        self.decay
    }
}

/// Add one or more echoes to the audio
///
/// At least one tap is required; an echo without taps fails to render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Echo {
    gain_in: f64,
    gain_out: f64,
    taps: Vec<EchoTap>,
}

impl Echo {
    pub fn new(gain_in: f64, gain_out: f64) -> Self {
        Self {
            gain_in,
            gain_out,
            taps: Vec::new(),
        }
    }

    /// Append a tap
    pub fn with_tap(mut self, delay: f64, decay: f64) -> Self {
        self.add_tap(delay, decay);
        self
    }

    pub fn add_tap(&mut self, delay: f64, decay: f64) {
        self.taps.push(EchoTap::new(delay, decay));
    }

    pub fn gain_in(&self) -> f64 {
        self.gain_in
    }

    pub fn set_gain_in(&mut self, gain_in: f64) {
        self.gain_in = gain_in;
    }

    pub fn gain_out(&self) -> f64 {
        self.gain_out
    }

    pub fn set_gain_out(&mut self, gain_out: f64) {
        self.gain_out = gain_out;
    }

    pub fn taps(&self) -> &[EchoTap] {
        &self.taps
    }

    pub fn clear_taps(&mut self) {
        self.taps.clear();
    }
}

impl SoxEffect for Echo {
    fn name(&self) -> &'static str {
        "echo"
    }

    fn write_args(&self, args: &mut EffectArgs) -> Result<()> {
        if self.taps.is_empty() {
            return Err(SoxError::invalid_parameter(
                "echo",
                "taps",
                "at least one delay/decay pair is required",
            ));
        }
        args.number("gain_in", self.gain_in)?;
        args.number("gain_out", self.gain_out)?;
        for tap in &self.taps {
            args.number("delay", tap.delay)?;
            args.number("decay", tap.decay)?;
        }
        Ok(())
    }
}

// ============================================================================
// Flanger
// ============================================================================

/// Flanging effect. Every parameter is rendered, SoX defaults otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Flanger {
    /// Base delay in ms (0 to 30)
    delay: f64,
    /// Added swept delay in ms (0 to 10)
    depth: f64,
    /// Percentage regeneration (-95 to 95)
    regen: f64,
    /// Percentage of delayed signal mixed with original (0 to 100)
    width: f64,
    /// Sweeps per second (0.1 to 10)
    speed: f64,
    shape: FlangerShape,
    /// Percentage phase shift for multi-channel audio (0 to 100)
    phase: f64,
    interpolation: FlangerInterpolation,
}

impl Flanger {
    pub fn new() -> Self {
        Self::default()
    }

    value_accessors! {
        delay, with_delay, set_delay: f64;
        depth, with_depth, set_depth: f64;
        regen, with_regen, set_regen: f64;
        width, with_width, set_width: f64;
        speed, with_speed, set_speed: f64;
        shape, with_shape, set_shape: FlangerShape;
        phase, with_phase, set_phase: f64;
        interpolation, with_interpolation, set_interpolation: FlangerInterpolation;
    }
}

impl Default for Flanger {
    fn default() -> Self {
        Self {
            delay: 0.0,
            depth: 2.0,
            regen: 0.0,
            width: 71.0,
            speed: 0.5,
            shape: FlangerShape::Sine,
            phase: 25.0,
            interpolation: FlangerInterpolation::Linear,
        }
    }
}

impl SoxEffect for Flanger {
    fn name(&self) -> &'static str {
        "flanger"
    }

    fn write_args(&self, args: &mut EffectArgs) -> Result<()> {
        args.number("delay", self.delay)?;
        args.number("depth", self.depth)?;
        args.number("regen", self.regen)?;
        args.number("width", self.width)?;
        args.number("speed", self.speed)?;
        args.keyword(self.shape.token());
        args.number("phase", self.phase)?;
        args.keyword(self.interpolation.token());
        Ok(())
    }
}

// ============================================================================
// Phaser
// ============================================================================

/// Phaser effect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Phaser {
    gain_in: f64,
    gain_out: f64,
    /// Delay in ms
    delay: f64,
    decay: f64,
    /// Modulation speed in Hz
    speed: f64,
    modulation: PhaserModulation,
}

impl Phaser {
    pub fn new() -> Self {
        Self::default()
    }

    value_accessors! {
        gain_in, with_gain_in, set_gain_in: f64;
        gain_out, with_gain_out, set_gain_out: f64;
        delay, with_delay, set_delay: f64;
        decay, with_decay, set_decay: f64;
        speed, with_speed, set_speed: f64;
        modulation, with_modulation, set_modulation: PhaserModulation;
    }
}

impl Default for Phaser {
    fn default() -> Self {
        Self {
            gain_in: 0.8,
            gain_out: 0.74,
            delay: 3.0,
            decay: 0.4,
            speed: 0.5,
            modulation: PhaserModulation::Sinusoidal,
        }
    }
}

impl SoxEffect for Phaser {
    fn name(&self) -> &'static str {
        "phaser"
    }

    fn write_args(&self, args: &mut EffectArgs) -> Result<()> {
        args.number("gain_in", self.gain_in)?;
        args.number("gain_out", self.gain_out)?;
        args.number("delay", self.delay)?;
        args.number("decay", self.decay)?;
        args.number("speed", self.speed)?;
        args.keyword(self.modulation.token());
        Ok(())
    }
}

// ============================================================================
// Tremolo
// ============================================================================

/// Sinusoidal amplitude modulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tremolo {
    speed: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    depth: Option<f64>,
}

impl Tremolo {
    /// `speed` in Hz
    pub fn new(speed: f64) -> Self {
        Self { speed, depth: None }
    }

    /// Depth in percent (SoX default 40)
    pub fn with_depth(mut self, depth: f64) -> Self {
        self.depth = Some(depth);
        self
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed;
    }

    pub fn depth(&self) -> Option<f64> {
        self.depth
    }

    pub fn set_depth(&mut self, depth: Option<f64>) {
        self.depth = depth;
    }
}

impl SoxEffect for Tremolo {
    fn name(&self) -> &'static str {
        "tremolo"
    }

    fn write_args(&self, args: &mut EffectArgs) -> Result<()> {
        args.number("speed", self.speed)?;
        args.optional("depth", self.depth)?;
        Ok(())
    }
}
