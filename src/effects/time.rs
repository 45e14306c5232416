//! Time, pitch and editing effects

use super::args::EffectArgs;
use super::types::{FadeShape, Position, SpeedUnit, TempoProfile};
use super::SoxEffect;
use crate::error::{Result, SoxError};
use serde::{Deserialize, Serialize};

// ============================================================================
// Tempo
// ============================================================================

/// Change the tempo without changing the pitch
///
/// # Parameters
/// - `quick`: render `-q`, trade quality for speed
/// - `profile`: optional [`TempoProfile`] (`-m`, `-s` or `-l`)
/// - `factor`: tempo ratio (`1.1` = 10% faster)
/// - `segment`, `search`, `overlap`: WSOLA tuning in ms, positional
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tempo {
    #[serde(default)]
    quick: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    profile: Option<TempoProfile>,
    factor: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    segment: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    search: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    overlap: Option<f64>,
}

impl Tempo {
    pub fn new(factor: f64) -> Self {
        Self {
            quick: false,
            profile: None,
            factor,
            segment: None,
            search: None,
            overlap: None,
        }
    }

    pub fn quick(mut self) -> Self {
        self.quick = true;
        self
    }

    pub fn with_profile(mut self, profile: TempoProfile) -> Self {
        self.profile = Some(profile);
        self
    }

    pub fn with_segment(mut self, segment: f64) -> Self {
        self.segment = Some(segment);
        self
    }

    pub fn with_search(mut self, search: f64) -> Self {
        self.search = Some(search);
        self
    }

    pub fn with_overlap(mut self, overlap: f64) -> Self {
        self.overlap = Some(overlap);
        self
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    pub fn set_factor(&mut self, factor: f64) {
        self.factor = factor;
    }

    pub fn set_quick(&mut self, quick: bool) {
        self.quick = quick;
    }

    pub fn set_profile(&mut self, profile: Option<TempoProfile>) {
        self.profile = profile;
    }

    pub fn set_segment(&mut self, segment: Option<f64>) {
        self.segment = segment;
    }

    pub fn set_search(&mut self, search: Option<f64>) {
        self.search = search;
    }

    pub fn set_overlap(&mut self, overlap: Option<f64>) {
        self.overlap = overlap;
    }
}

impl SoxEffect for Tempo {
    fn name(&self) -> &'static str {
        "tempo"
    }

    fn write_args(&self, args: &mut EffectArgs) -> Result<()> {
        args.flag(self.quick, "-q");
        if let Some(profile) = self.profile {
            args.keyword(profile.token());
        }
        args.number("factor", self.factor)?;
        args.positional(&[
            ("segment", self.segment),
            ("search", self.search),
            ("overlap", self.overlap),
        ])?;
        Ok(())
    }
}

// ============================================================================
// Pitch
// ============================================================================

/// Change the pitch without changing the tempo
///
/// `shift` is in cents; tuning values behave as for [`Tempo`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pitch {
    #[serde(default)]
    quick: bool,
    shift: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    segment: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    search: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    overlap: Option<f64>,
}

impl Pitch {
    pub fn new(shift: f64) -> Self {
        Self {
            quick: false,
            shift,
            segment: None,
            search: None,
            overlap: None,
        }
    }

    pub fn quick(mut self) -> Self {
        self.quick = true;
        self
    }

    pub fn with_segment(mut self, segment: f64) -> Self {
        self.segment = Some(segment);
        self
    }

    pub fn with_search(mut self, search: f64) -> Self {
        self.search = Some(search);
        self
    }

    pub fn with_overlap(mut self, overlap: f64) -> Self {
        self.overlap = Some(overlap);
        self
    }

    pub fn shift(&self) -> f64 {
        self.shift
    }

    pub fn set_shift(&mut self, shift: f64) {
        self.shift = shift;
    }

    pub fn set_quick(&mut self, quick: bool) {
        self.quick = quick;
    }

    pub fn set_segment(&mut self, segment: Option<f64>) {
        self.segment = segment;
    }

    pub fn set_search(&mut self, search: Option<f64>) {
        self.search = search;
    }

    pub fn set_overlap(&mut self, overlap: Option<f64>) {
        self.overlap = overlap;
    }
}

impl SoxEffect for Pitch {
    fn name(&self) -> &'static str {
        "pitch"
    }

    fn write_args(&self, args: &mut EffectArgs) -> Result<()> {
        args.flag(self.quick, "-q");
        args.number("shift", self.shift)?;
        args.positional(&[
            ("segment", self.segment),
            ("search", self.search),
            ("overlap", self.overlap),
        ])?;
        Ok(())
    }
}

// ============================================================================
// Speed
// ============================================================================

/// Change pitch and tempo together
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Speed {
    value: f64,
    #[serde(default)]
    unit: SpeedUnit,
}

impl Speed {
    /// Speed ratio (`2` = twice as fast, an octave up)
    pub fn factor(factor: f64) -> Self {
        Self {
            value: factor,
            unit: SpeedUnit::Factor,
        }
    }

    /// Shift in cents (`1200` = an octave up)
    pub fn cents(cents: f64) -> Self {
        Self {
            value: cents,
            unit: SpeedUnit::Cents,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> SpeedUnit {
        self.unit
    }

    pub fn set(&mut self, value: f64, unit: SpeedUnit) {
        self.value = value;
        self.unit = unit;
    }
}

impl SoxEffect for Speed {
    fn name(&self) -> &'static str {
        "speed"
    }

    fn write_args(&self, args: &mut EffectArgs) -> Result<()> {
        match self.unit {
            SpeedUnit::Factor => args.number("factor", self.value)?,
            SpeedUnit::Cents => args.number_with_suffix("cents", self.value, "c")?,
        };
        Ok(())
    }
}

// ============================================================================
// Fade
// ============================================================================

/// Fade in and optionally fade out
///
/// # Parameters
/// - `shape`: optional [`FadeShape`] (SoX default is logarithmic)
/// - `fade_in`: fade-in length in seconds (`0` for none)
/// - `stop`: position where the audio stops (`End(0)` for the end)
/// - `fade_out`: fade-out length in seconds, needs `stop`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fade {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    shape: Option<FadeShape>,
    fade_in: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    stop: Option<Position>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    fade_out: Option<f64>,
}

impl Fade {
    pub fn new(fade_in: f64) -> Self {
        Self {
            shape: None,
            fade_in,
            stop: None,
            fade_out: None,
        }
    }

    pub fn with_shape(mut self, shape: FadeShape) -> Self {
        self.shape = Some(shape);
        self
    }

    pub fn with_stop(mut self, stop: Position) -> Self {
        self.stop = Some(stop);
        self
    }

    pub fn with_fade_out(mut self, fade_out: f64) -> Self {
        self.fade_out = Some(fade_out);
        self
    }

    pub fn shape(&self) -> Option<FadeShape> {
        self.shape
    }

    pub fn set_shape(&mut self, shape: Option<FadeShape>) {
        self.shape = shape;
    }

    pub fn fade_in(&self) -> f64 {
        self.fade_in
    }

    pub fn set_fade_in(&mut self, fade_in: f64) {
        self.fade_in = fade_in;
    }

    pub fn stop(&self) -> Option<Position> {
        self.stop
    }

    pub fn set_stop(&mut self, stop: Option<Position>) {
        self.stop = stop;
    }

    pub fn fade_out(&self) -> Option<f64> {
        self.fade_out
    }

    pub fn set_fade_out(&mut self, fade_out: Option<f64>) {
        self.fade_out = fade_out;
    }
}

impl SoxEffect for Fade {
    fn name(&self) -> &'static str {
        "fade"
    }

    fn write_args(&self, args: &mut EffectArgs) -> Result<()> {
        if let Some(shape) = self.shape {
            args.keyword(shape.token());
        }
        let fade_in = args.duration_token("fade_in", self.fade_in)?;
        args.keyword(&fade_in);
        match (self.stop, self.fade_out) {
            (Some(stop), fade_out) => {
                stop.write(args, "stop")?;
                if let Some(fade_out) = fade_out {
                    let fade_out = args.duration_token("fade_out", fade_out)?;
                    args.keyword(&fade_out);
                }
            }
            (None, Some(_)) => {
                return Err(SoxError::invalid_parameter(
                    "fade",
                    "fade_out",
                    "cannot be set without 'stop'",
                ));
            }
            (None, None) => {}
        }
        Ok(())
    }
}

// ============================================================================
// Trim
// ============================================================================

/// Cut portions out of the audio
///
/// The first position is where audio starts being kept; further positions
/// alternate between stop-keeping and start-keeping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trim {
    positions: Vec<Position>,
}

impl Trim {
    pub fn new(start: Position) -> Self {
        Self {
            positions: vec![start],
        }
    }

    /// Keep `length` seconds starting `start` seconds in
    pub fn range(start: f64, length: f64) -> Self {
        Self::new(Position::Relative(start)).then(Position::Relative(length))
    }

    pub fn then(mut self, position: Position) -> Self {
        self.positions.push(position);
        self
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn positions_mut(&mut self) -> &mut Vec<Position> {
        &mut self.positions
    }
}

impl SoxEffect for Trim {
    fn name(&self) -> &'static str {
        "trim"
    }

    fn write_args(&self, args: &mut EffectArgs) -> Result<()> {
        if self.positions.is_empty() {
            return Err(SoxError::invalid_parameter(
                "trim",
                "positions",
                "at least one position is required",
            ));
        }
        for position in &self.positions {
            position.write(args, "position")?;
        }
        Ok(())
    }
}

// ============================================================================
// Pad
// ============================================================================

/// Add silence, at the start or at `position` seconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pad {
    length: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    position: Option<f64>,
}

impl Pad {
    pub fn new(length: f64) -> Self {
        Self {
            length,
            position: None,
        }
    }

    pub fn at(mut self, position: f64) -> Self {
        self.position = Some(position);
        self
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn set_length(&mut self, length: f64) {
        self.length = length;
    }

    pub fn position(&self) -> Option<f64> {
        self.position
    }

    pub fn set_position(&mut self, position: Option<f64>) {
        self.position = position;
    }
}

impl SoxEffect for Pad {
    fn name(&self) -> &'static str {
        "pad"
    }

    fn write_args(&self, args: &mut EffectArgs) -> Result<()> {
        let mut token = args.duration_token("length", self.length)?;
        if let Some(position) = self.position {
            token.push('@');
            token.push_str(&args.duration_token("position", position)?);
        }
        args.keyword(&token);
        Ok(())
    }
}

// ============================================================================
// Repeat / Reverse
// ============================================================================

/// Repeat the audio `count` more times
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repeat {
    count: u32,
}

impl Repeat {
    pub fn new(count: u32) -> Self {
        Self { count }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn set_count(&mut self, count: u32) {
        self.count = count;
    }
}

impl SoxEffect for Repeat {
    fn name(&self) -> &'static str {
        "repeat"
    }

    fn write_args(&self, args: &mut EffectArgs) -> Result<()> {
        args.count(self.count);
        Ok(())
    }
}

/// Reverse the audio
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reverse {}

impl Reverse {
    pub fn new() -> Self {
        Self {}
    }
}

impl SoxEffect for Reverse {
    fn name(&self) -> &'static str {
        "reverse"
    }

    fn write_args(&self, _args: &mut EffectArgs) -> Result<()> {
        Ok(())
    }
}
