//! Format conversion effects: `rate`, `channels`, `dither`

use super::args::EffectArgs;
use super::types::{DitherShaping, RateQuality};
use super::SoxEffect;
use crate::error::{Result, SoxError};
use serde::{Deserialize, Serialize};

// ============================================================================
// Rate
// ============================================================================

/// Change the sample rate
///
/// Without a rate, SoX takes the output rate from the output file options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    quality: Option<RateQuality>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sample_rate: Option<f64>,
}

impl Rate {
    pub fn new(sample_rate: f64) -> Self {
        Self {
            quality: None,
            sample_rate: Some(sample_rate),
        }
    }

    pub fn with_quality(mut self, quality: RateQuality) -> Self {
        self.quality = Some(quality);
        self
    }

    pub fn quality(&self) -> Option<RateQuality> {
        self.quality
    }

    pub fn set_quality(&mut self, quality: Option<RateQuality>) {
        self.quality = quality;
    }

    pub fn sample_rate(&self) -> Option<f64> {
        self.sample_rate
    }

    pub fn set_sample_rate(&mut self, sample_rate: Option<f64>) {
        self.sample_rate = sample_rate;
    }
}

impl SoxEffect for Rate {
    fn name(&self) -> &'static str {
        "rate"
    }

    fn write_args(&self, args: &mut EffectArgs) -> Result<()> {
        if let Some(quality) = self.quality {
            args.keyword(quality.token());
        }
        args.optional("sample_rate", self.sample_rate)?;
        Ok(())
    }
}

// ============================================================================
// Channels
// ============================================================================

/// Change the number of channels
///
/// A count of zero is rejected up front; SoX would otherwise fall back to
/// the output file's channel count without saying so.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ChannelsRepr", into = "ChannelsRepr")]
pub struct Channels {
    count: u32,
}

#[derive(Serialize, Deserialize)]
struct ChannelsRepr {
    count: u32,
}

impl TryFrom<ChannelsRepr> for Channels {
    type Error = SoxError;

    fn try_from(repr: ChannelsRepr) -> Result<Self> {
        Channels::new(repr.count)
    }
}

impl From<Channels> for ChannelsRepr {
    fn from(channels: Channels) -> Self {
        ChannelsRepr {
            count: channels.count,
        }
    }
}

impl Channels {
    pub fn new(count: u32) -> Result<Self> {
        Self::check(count)?;
        Ok(Self { count })
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn set_count(&mut self, count: u32) -> Result<()> {
        Self::check(count)?;
        self.count = count;
        Ok(())
    }

    fn check(count: u32) -> Result<()> {
        if count == 0 {
            return Err(SoxError::invalid_parameter(
                "channels",
                "count",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

impl SoxEffect for Channels {
    fn name(&self) -> &'static str {
        "channels"
    }

    fn write_args(&self, args: &mut EffectArgs) -> Result<()> {
        args.count(self.count);
        Ok(())
    }
}

// ============================================================================
// Dither
// ============================================================================

/// Add dither noise before a bit-depth reduction
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dither {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    shaping: Option<DitherShaping>,
    /// Only dither where the audio needs it
    #[serde(default)]
    auto: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    precision: Option<f64>,
}

impl Dither {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_shaping(mut self, shaping: DitherShaping) -> Self {
        self.shaping = Some(shaping);
        self
    }

    pub fn auto(mut self) -> Self {
        self.auto = true;
        self
    }

    /// Override the target precision in bits
    pub fn with_precision(mut self, precision: f64) -> Self {
        self.precision = Some(precision);
        self
    }

    pub fn shaping(&self) -> Option<DitherShaping> {
        self.shaping
    }

    pub fn set_shaping(&mut self, shaping: Option<DitherShaping>) {
        self.shaping = shaping;
    }

    pub fn is_auto(&self) -> bool {
        self.auto
    }

    pub fn set_auto(&mut self, auto: bool) {
        self.auto = auto;
    }

    pub fn precision(&self) -> Option<f64> {
        self.precision
    }

    pub fn set_precision(&mut self, precision: Option<f64>) {
        self.precision = precision;
    }
}

impl SoxEffect for Dither {
    fn name(&self) -> &'static str {
        "dither"
    }

    fn write_args(&self, args: &mut EffectArgs) -> Result<()> {
        if let Some(shaping) = self.shaping {
            shaping.write(args);
        }
        args.flag(self.auto, "-a");
        if let Some(precision) = self.precision {
            args.keyword("-p").number("precision", precision)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::types::DitherFilter;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rate() {
        assert_eq!(Rate::new(48000.0).render().unwrap(), vec!["rate", "48000"]);
        assert_eq!(
            Rate::new(22050.0)
                .with_quality(RateQuality::VeryHigh)
                .render()
                .unwrap(),
            vec!["rate", "-v", "22050"]
        );
        assert_eq!(Rate::default().render().unwrap(), vec!["rate"]);
    }

    #[test]
    fn test_channels_rejects_zero() {
        let err = Channels::new(0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_PARAMETER");

        let mut channels = Channels::new(2).unwrap();
        assert!(channels.set_count(0).is_err());
        assert_eq!(channels.count(), 2);
        assert_eq!(channels.render().unwrap(), vec!["channels", "2"]);
    }

    #[test]
    fn test_channels_deserialize_validates() {
        let result: std::result::Result<Channels, _> =
            serde_json::from_str(r#"{"count": 0}"#);
        assert!(result.is_err());

        let channels: Channels = serde_json::from_str(r#"{"count": 1}"#).unwrap();
        assert_eq!(channels.count(), 1);
    }

    #[test]
    fn test_dither() {
        assert_eq!(Dither::new().render().unwrap(), vec!["dither"]);
        let dither = Dither::new()
            .with_shaping(DitherShaping::Filter(DitherFilter::Shibata))
            .auto()
            .with_precision(12.0);
        assert_eq!(
            dither.render().unwrap(),
            vec!["dither", "-f", "shibata", "-a", "-p", "12"]
        );
    }
}
