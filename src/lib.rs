//! soxfx - Typed SoX Effect Chains
//!
//! Builds SoX command lines from typed effect values instead of hand-written
//! strings.
//!
//! # Architecture
//!
//! - `effects`: one struct per SoX effect, the [`effects::Effect`] sum type
//!   and the chain renderer that flattens a chain into argument tokens
//! - `command`: the full argv for one SoX run (files + rendered chain)
//! - `config`: JSON chain files used by the CLI
//!
//! ```
//! use soxfx::effects::{Contrast, EffectChain, GainType, Volume};
//!
//! let chain = EffectChain::new()
//!     .with(Volume::new(2.5).with_type(GainType::Db))
//!     .with(Contrast::default());
//! assert_eq!(chain.render().unwrap(), vec!["vol", "2.5", "dB", "contrast", "75"]);
//! ```

pub mod cli;
pub mod command;
pub mod config;
pub mod effects;
pub mod error;

pub use command::SoxCommand;
pub use config::ChainConfig;
pub use effects::{render_chain, Effect, EffectChain, SoxEffect};
pub use error::{Result, SoxError};
