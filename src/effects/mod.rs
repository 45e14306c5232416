//! SoX Effects Library
//!
//! One struct per SoX effect, each implementing [`SoxEffect`]. The closed
//! [`Effect`] enum wraps every variant so chains can hold a mix of them and
//! be stored as JSON.

mod args;
mod chain;
mod conversion;
mod dynamics;
mod filters;
mod modulation;
mod time;
mod types;

pub use args::{format_number, EffectArgs};
pub use chain::{render_chain, EffectChain};
pub use conversion::{Channels, Dither, Rate};
pub use dynamics::{
    Contrast, Gain, Loudness, Norm, Overdrive, Volume, DEFAULT_CONTRAST_ENHANCEMENT,
};
pub use filters::{Bass, Equalizer, HighPass, LowPass, Treble};
pub use modulation::{Echo, EchoTap, Flanger, Phaser, Reverb, Tremolo};
pub use time::{Fade, Pad, Pitch, Repeat, Reverse, Speed, Tempo, Trim};
pub use types::{
    DitherFilter, DitherShaping, FadeShape, FlangerInterpolation, FlangerShape, GainBalance,
    GainHeadroom, GainType, PhaserModulation, Poles, Position, RateQuality, SpeedUnit,
    TempoProfile, Width,
};

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Base trait for all SoX effects
///
/// Rendering is a pure function of the effect's fields: calling
/// [`SoxEffect::render`] twice on an unchanged effect yields the same tokens.
pub trait SoxEffect {
    /// SoX effect keyword (e.g. `"vol"`)
    fn name(&self) -> &'static str;

    /// Write the parameters that follow the name
    fn write_args(&self, args: &mut EffectArgs) -> Result<()>;

    /// Render to argument tokens, name first
    fn render(&self) -> Result<Vec<String>> {
        let mut args = EffectArgs::new(self.name());
        self.write_args(&mut args)?;
        Ok(args.into_tokens())
    }
}

/// Declares the [`Effect`] enum, its dispatch and the `From` conversions
macro_rules! effect_catalog {
    ($($variant:ident => $name:literal),* $(,)?) => {
        /// Any supported SoX effect
        ///
        /// Serialized with the SoX keyword as tag:
        /// `{"effect": "vol", "gain": 2.5, "type": "dB"}`.
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(tag = "effect")]
        pub enum Effect {
            $(
                #[serde(rename = $name)]
                $variant($variant),
            )*
        }

        impl Effect {
            /// Every SoX keyword in the catalog
            pub const NAMES: &'static [&'static str] = &[$($name),*];
        }

        impl SoxEffect for Effect {
            fn name(&self) -> &'static str {
                match self {
                    $(Effect::$variant(effect) => effect.name(),)*
                }
            }

            fn write_args(&self, args: &mut EffectArgs) -> Result<()> {
                match self {
                    $(Effect::$variant(effect) => effect.write_args(args),)*
                }
            }
        }

        $(
            impl From<$variant> for Effect {
                fn from(effect: $variant) -> Self {
                    Effect::$variant(effect)
                }
            }
        )*
    };
}

effect_catalog! {
    Bass => "bass",
    Channels => "channels",
    Contrast => "contrast",
    Dither => "dither",
    Echo => "echo",
    Equalizer => "equalizer",
    Fade => "fade",
    Flanger => "flanger",
    Gain => "gain",
    HighPass => "highpass",
    Loudness => "loudness",
    LowPass => "lowpass",
    Norm => "norm",
    Overdrive => "overdrive",
    Pad => "pad",
    Phaser => "phaser",
    Pitch => "pitch",
    Rate => "rate",
    Repeat => "repeat",
    Reverb => "reverb",
    Reverse => "reverse",
    Speed => "speed",
    Tempo => "tempo",
    Treble => "treble",
    Tremolo => "tremolo",
    Trim => "trim",
    Volume => "vol",
}
