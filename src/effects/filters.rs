//! Equalisation and filter effects

use super::args::EffectArgs;
use super::types::{Poles, Width};
use super::SoxEffect;
use crate::error::{Result, SoxError};
use serde::{Deserialize, Serialize};

/// Shelving filters: `<name> gain [frequency [width]]`
macro_rules! shelf_effect {
    ($(#[$meta:meta])* $type:ident, $name:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        pub struct $type {
            gain: f64,
            #[serde(default, skip_serializing_if = "Option::is_none")]
            frequency: Option<f64>,
            #[serde(default, skip_serializing_if = "Option::is_none")]
            width: Option<Width>,
        }

        impl $type {
            /// Boost (positive) or cut (negative) in dB
            pub fn new(gain: f64) -> Self {
                Self {
                    gain,
                    frequency: None,
                    width: None,
                }
            }

            /// Centre frequency in Hz
            pub fn with_frequency(mut self, frequency: f64) -> Self {
                self.frequency = Some(frequency);
                self
            }

            /// Shelf width; needs a frequency to be rendered
            pub fn with_width(mut self, width: Width) -> Self {
                self.width = Some(width);
                self
            }

            pub fn gain(&self) -> f64 {
                self.gain
            }

            pub fn set_gain(&mut self, gain: f64) {
                self.gain = gain;
            }

            pub fn frequency(&self) -> Option<f64> {
                self.frequency
            }

            pub fn set_frequency(&mut self, frequency: Option<f64>) {
                self.frequency = frequency;
            }

            pub fn width(&self) -> Option<Width> {
                self.width
            }

            pub fn set_width(&mut self, width: Option<Width>) {
                self.width = width;
            }
        }

        impl SoxEffect for $type {
            fn name(&self) -> &'static str {
                $name
            }

            fn write_args(&self, args: &mut EffectArgs) -> Result<()> {
                args.number("gain", self.gain)?;
                match (self.frequency, self.width) {
                    (Some(frequency), width) => {
                        args.number("frequency", frequency)?;
                        if let Some(width) = width {
                            width.write(args)?;
                        }
                    }
                    (None, Some(_)) => {
                        return Err(SoxError::invalid_parameter(
                            $name,
                            "width",
                            "cannot be set without 'frequency'",
                        ));
                    }
                    (None, None) => {}
                }
                Ok(())
            }
        }
    };
}

/// Two-pole filters: `<name> [-1|-2] frequency [width]`
macro_rules! pass_filter {
    ($(#[$meta:meta])* $type:ident, $name:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        pub struct $type {
            #[serde(default, skip_serializing_if = "Option::is_none")]
            poles: Option<Poles>,
            frequency: f64,
            #[serde(default, skip_serializing_if = "Option::is_none")]
            width: Option<Width>,
        }

        impl $type {
            /// Cut-off frequency in Hz
            pub fn new(frequency: f64) -> Self {
                Self {
                    poles: None,
                    frequency,
                    width: None,
                }
            }

            pub fn with_poles(mut self, poles: Poles) -> Self {
                self.poles = Some(poles);
                self
            }

            /// Filter width; SoX ignores it for single-pole filters
            pub fn with_width(mut self, width: Width) -> Self {
                self.width = Some(width);
                self
            }

            pub fn poles(&self) -> Option<Poles> {
                self.poles
            }

            pub fn set_poles(&mut self, poles: Option<Poles>) {
                self.poles = poles;
            }

            pub fn frequency(&self) -> f64 {
                self.frequency
            }

            pub fn set_frequency(&mut self, frequency: f64) {
                self.frequency = frequency;
            }

            pub fn width(&self) -> Option<Width> {
                self.width
            }

            pub fn set_width(&mut self, width: Option<Width>) {
                self.width = width;
            }
        }

        impl SoxEffect for $type {
            fn name(&self) -> &'static str {
                $name
            }

            fn write_args(&self, args: &mut EffectArgs) -> Result<()> {
                if let Some(poles) = self.poles {
                    args.keyword(poles.token());
                }
                args.number("frequency", self.frequency)?;
                if let Some(width) = self.width {
                    width.write(args)?;
                }
                Ok(())
            }
        }
    };
}

shelf_effect!(
    /// Boost or cut the bass (lower) frequencies, like a tone-control
    Bass,
    "bass"
);

shelf_effect!(
    /// Boost or cut the treble (upper) frequencies, like a tone-control
    Treble,
    "treble"
);

pass_filter!(
    /// High-pass filter
    HighPass,
    "highpass"
);

pass_filter!(
    /// Low-pass filter
    LowPass,
    "lowpass"
);

// ============================================================================
// Equalizer
// ============================================================================

/// Peaking equaliser band
///
/// # Parameters
/// - `frequency`: centre frequency in Hz
/// - `width`: band-width with unit
/// - `gain`: boost or cut in dB
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equalizer {
    frequency: f64,
    width: Width,
    gain: f64,
}

impl Equalizer {
    pub fn new(frequency: f64, width: Width, gain: f64) -> Self {
        Self {
            frequency,
            width,
            gain,
        }
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    pub fn set_frequency(&mut self, frequency: f64) {
        self.frequency = frequency;
    }

    pub fn width(&self) -> Width {
        self.width
    }

    pub fn set_width(&mut self, width: Width) {
        self.width = width;
    }

    pub fn gain(&self) -> f64 {
        self.gain
    }

    pub fn set_gain(&mut self, gain: f64) {
        self.gain = gain;
    }
}

impl SoxEffect for Equalizer {
    fn name(&self) -> &'static str {
        "equalizer"
    }

    fn write_args(&self, args: &mut EffectArgs) -> Result<()> {
        args.number("frequency", self.frequency)?;
        self.width.write(args)?;
        args.number("gain", self.gain)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bass_gain_only() {
        assert_eq!(Bass::new(6.0).render().unwrap(), vec!["bass", "6"]);
    }

    #[test]
    fn test_treble_full() {
        let treble = Treble::new(-3.5)
            .with_frequency(3000.0)
            .with_width(Width::Slope(0.5));
        assert_eq!(
            treble.render().unwrap(),
            vec!["treble", "-3.5", "3000", "0.5s"]
        );
    }

    #[test]
    fn test_shelf_width_requires_frequency() {
        let bass = Bass::new(3.0).with_width(Width::Q(0.7));
        let err = bass.render().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_PARAMETER");
    }

    #[test]
    fn test_highpass() {
        assert_eq!(
            HighPass::new(80.0).render().unwrap(),
            vec!["highpass", "80"]
        );
        let hp = HighPass::new(80.0)
            .with_poles(Poles::Two)
            .with_width(Width::Q(0.707));
        assert_eq!(
            hp.render().unwrap(),
            vec!["highpass", "-2", "80", "0.707q"]
        );
    }

    #[test]
    fn test_lowpass_single_pole() {
        let lp = LowPass::new(12000.0).with_poles(Poles::One);
        assert_eq!(lp.render().unwrap(), vec!["lowpass", "-1", "12000"]);
    }

    #[test]
    fn test_equalizer() {
        let eq = Equalizer::new(1000.0, Width::Octaves(1.5), -4.0);
        assert_eq!(
            eq.render().unwrap(),
            vec!["equalizer", "1000", "1.5o", "-4"]
        );
    }
}
