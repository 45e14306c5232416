//! Enumerated effect options
//!
//! Each option maps 1:1 to the literal token SoX expects.

use super::args::EffectArgs;
use crate::error::Result;
use serde::{Deserialize, Serialize};

// ============================================================================
// Gain / level options
// ============================================================================

/// How the `vol` gain value is interpreted
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GainType {
    /// Linear amplitude ratio
    #[serde(rename = "amplitude")]
    Amplitude,
    /// Power ratio
    #[serde(rename = "power")]
    Power,
    /// Decibels
    #[serde(rename = "dB")]
    Db,
}

impl GainType {
    /// Get the SoX token
    pub fn token(&self) -> &'static str {
        match self {
            GainType::Amplitude => "amplitude",
            GainType::Power => "power",
            GainType::Db => "dB",
        }
    }
}

/// Multi-channel balancing mode of the `gain` effect
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GainBalance {
    /// `-e`: equalise gain across channels
    Equalise,
    /// `-B`: balance channels by RMS
    Balance,
    /// `-b`: balance with clipping protection
    BalanceProtected,
    /// `-r`: reclaim headroom stored by an earlier `gain -h`
    Reclaim,
}

impl GainBalance {
    pub fn token(&self) -> &'static str {
        match self {
            GainBalance::Equalise => "-e",
            GainBalance::Balance => "-B",
            GainBalance::BalanceProtected => "-b",
            GainBalance::Reclaim => "-r",
        }
    }
}

/// Clipping behaviour of the `gain` effect
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GainHeadroom {
    /// `-l`: apply a limiter instead of clipping
    Limiter,
    /// `-h`: reserve headroom for a later `gain -r`
    Reserve,
}

impl GainHeadroom {
    pub fn token(&self) -> &'static str {
        match self {
            GainHeadroom::Limiter => "-l",
            GainHeadroom::Reserve => "-h",
        }
    }
}

// ============================================================================
// Filter options
// ============================================================================

/// Filter band-width, tagged with its unit
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "unit", content = "value", rename_all = "snake_case")]
pub enum Width {
    /// Width in Hz (`h`)
    Hertz(f64),
    /// Width in kHz (`k`)
    Kilohertz(f64),
    /// Width in octaves (`o`)
    Octaves(f64),
    /// Quality factor (`q`)
    Q(f64),
    /// Shelf slope (`s`), only meaningful for `bass` and `treble`
    Slope(f64),
}

impl Width {
    /// Numeric part of the width
    pub fn value(&self) -> f64 {
        match *self {
            Width::Hertz(v)
            | Width::Kilohertz(v)
            | Width::Octaves(v)
            | Width::Q(v)
            | Width::Slope(v) => v,
        }
    }

    /// Unit suffix appended to the value
    pub fn suffix(&self) -> &'static str {
        match self {
            Width::Hertz(_) => "h",
            Width::Kilohertz(_) => "k",
            Width::Octaves(_) => "o",
            Width::Q(_) => "q",
            Width::Slope(_) => "s",
        }
    }

    pub(crate) fn write(&self, args: &mut EffectArgs) -> Result<()> {
        args.number_with_suffix("width", self.value(), self.suffix())?;
        Ok(())
    }
}

/// Number of poles of `highpass` / `lowpass`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Poles {
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
}

impl Poles {
    pub fn token(&self) -> &'static str {
        match self {
            Poles::One => "-1",
            Poles::Two => "-2",
        }
    }
}

// ============================================================================
// Modulation options
// ============================================================================

/// LFO modulation of the `phaser` effect
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PhaserModulation {
    #[default]
    Sinusoidal,
    Triangular,
}

impl PhaserModulation {
    pub fn token(&self) -> &'static str {
        match self {
            PhaserModulation::Sinusoidal => "-s",
            PhaserModulation::Triangular => "-t",
        }
    }
}

/// LFO waveform of the `flanger` effect
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum FlangerShape {
    #[default]
    Sine,
    Triangle,
}

impl FlangerShape {
    pub fn token(&self) -> &'static str {
        match self {
            FlangerShape::Sine => "sine",
            FlangerShape::Triangle => "triangle",
        }
    }
}

/// Delay-line interpolation of the `flanger` effect
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum FlangerInterpolation {
    #[default]
    Linear,
    Quadratic,
}

impl FlangerInterpolation {
    pub fn token(&self) -> &'static str {
        match self {
            FlangerInterpolation::Linear => "linear",
            FlangerInterpolation::Quadratic => "quadratic",
        }
    }
}

// ============================================================================
// Time / rate options
// ============================================================================

/// WSOLA tuning of the `tempo` effect
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TempoProfile {
    Music,
    Speech,
    Linear,
}

impl TempoProfile {
    pub fn token(&self) -> &'static str {
        match self {
            TempoProfile::Music => "-m",
            TempoProfile::Speech => "-s",
            TempoProfile::Linear => "-l",
        }
    }
}

/// Resampling quality of the `rate` effect
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RateQuality {
    Quick,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl RateQuality {
    pub fn token(&self) -> &'static str {
        match self {
            RateQuality::Quick => "-q",
            RateQuality::Low => "-l",
            RateQuality::Medium => "-m",
            RateQuality::High => "-h",
            RateQuality::VeryHigh => "-v",
        }
    }
}

/// Unit of the `speed` value
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SpeedUnit {
    /// Plain ratio (`2` = double speed)
    #[default]
    Factor,
    /// Pitch shift in cents (`200c`)
    Cents,
}

/// Gain envelope of the `fade` effect
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FadeShape {
    QuarterSine,
    HalfSine,
    Linear,
    Logarithmic,
    InvertedParabola,
}

impl FadeShape {
    pub fn token(&self) -> &'static str {
        match self {
            FadeShape::QuarterSine => "q",
            FadeShape::HalfSine => "h",
            FadeShape::Linear => "t",
            FadeShape::Logarithmic => "l",
            FadeShape::InvertedParabola => "p",
        }
    }
}

/// A position in the audio stream, in seconds
///
/// Seconds must not be negative; direction comes from the variant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "from", content = "seconds", rename_all = "snake_case")]
pub enum Position {
    /// Relative to the previous position (plain `N`)
    Relative(f64),
    /// From the start of the audio (`=N`)
    Start(f64),
    /// Back from the end of the audio (`-N`)
    End(f64),
}

impl Position {
    pub(crate) fn write(&self, args: &mut EffectArgs, parameter: &'static str) -> Result<()> {
        let (prefix, seconds) = match *self {
            Position::Relative(s) => ("", s),
            Position::Start(s) => ("=", s),
            Position::End(s) => ("-", s),
        };
        let token = format!("{}{}", prefix, args.duration_token(parameter, seconds)?);
        args.keyword(&token);
        Ok(())
    }
}

// ============================================================================
// Dither options
// ============================================================================

/// Noise-shaping filter of the `dither` effect
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum DitherFilter {
    Lipshitz,
    FWeighted,
    ModifiedEWeighted,
    ImprovedEWeighted,
    Gesemann,
    Shibata,
    LowShibata,
    HighShibata,
}

impl DitherFilter {
    pub fn token(&self) -> &'static str {
        match self {
            DitherFilter::Lipshitz => "lipshitz",
            DitherFilter::FWeighted => "f-weighted",
            DitherFilter::ModifiedEWeighted => "modified-e-weighted",
            DitherFilter::ImprovedEWeighted => "improved-e-weighted",
            DitherFilter::Gesemann => "gesemann",
            DitherFilter::Shibata => "shibata",
            DitherFilter::LowShibata => "low-shibata",
            DitherFilter::HighShibata => "high-shibata",
        }
    }
}

/// Dither noise shaping
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "filter", rename_all = "snake_case")]
pub enum DitherShaping {
    /// `-S`: sloped TPDF
    Sloped,
    /// `-s`: default noise-shaping filter for the sample rate
    NoiseShaped,
    /// `-f <filter>`
    Filter(DitherFilter),
}

impl DitherShaping {
    pub(crate) fn write(&self, args: &mut EffectArgs) {
        match self {
            DitherShaping::Sloped => {
                args.keyword("-S");
            }
            DitherShaping::NoiseShaped => {
                args.keyword("-s");
            }
            DitherShaping::Filter(filter) => {
                args.keyword("-f").keyword(filter.token());
            }
        }
    }
}
