//! Argument token writer
//!
//! Every effect renders through an [`EffectArgs`], which is seeded with the
//! effect name so the name is always the first token.

use crate::error::{Result, SoxError};

/// Format a number the way SoX expects it on the command line.
///
/// Uses Rust's `f64` formatting, which is independent of any locale: `.` is
/// the decimal separator, there is no digit grouping and no exponent.
/// Integral values print without a fractional part (`75`, not `75.0`) and
/// negative zero prints as `0`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}

/// Ordered token sequence for a single effect
#[derive(Debug, Clone, PartialEq)]
pub struct EffectArgs {
    effect: &'static str,
    tokens: Vec<String>,
}

impl EffectArgs {
    /// Start a new token sequence for `effect`
    pub fn new(effect: &'static str) -> Self {
        Self {
            effect,
            tokens: vec![effect.to_string()],
        }
    }

    /// Name of the effect being rendered
    pub fn effect(&self) -> &'static str {
        self.effect
    }

    /// Push a number
    ///
    /// Fails with `InvalidParameter` for NaN and infinities, which SoX would
    /// otherwise misparse.
    pub fn number(&mut self, parameter: &'static str, value: f64) -> Result<&mut Self> {
        self.number_with_suffix(parameter, value, "")
    }

    /// Push a number immediately followed by a unit suffix (e.g. `200c`)
    pub fn number_with_suffix(
        &mut self,
        parameter: &'static str,
        value: f64,
        suffix: &str,
    ) -> Result<&mut Self> {
        let token = self.number_token(parameter, value)? + suffix;
        self.tokens.push(token);
        Ok(self)
    }

    /// Push an integer count
    pub fn count(&mut self, value: u32) -> &mut Self {
        self.tokens.push(value.to_string());
        self
    }

    /// Push a literal keyword token
    pub fn keyword(&mut self, token: &str) -> &mut Self {
        self.tokens.push(token.to_string());
        self
    }

    /// Push `token` only when `enabled`
    pub fn flag(&mut self, enabled: bool, token: &str) -> &mut Self {
        if enabled {
            self.keyword(token);
        }
        self
    }

    /// Push a number only when present
    pub fn optional(&mut self, parameter: &'static str, value: Option<f64>) -> Result<&mut Self> {
        if let Some(v) = value {
            self.number(parameter, v)?;
        }
        Ok(self)
    }

    /// Push a SoX positional tail
    ///
    /// Values are emitted in order until the first absent one. A value that
    /// is present after an absent one cannot be expressed positionally and is
    /// rejected.
    pub fn positional(&mut self, values: &[(&'static str, Option<f64>)]) -> Result<&mut Self> {
        let mut missing: Option<&'static str> = None;
        for &(parameter, value) in values {
            match (value, missing) {
                (Some(_), Some(previous)) => {
                    return Err(SoxError::invalid_parameter(
                        self.effect,
                        parameter,
                        format!("cannot be set without '{}'", previous),
                    ));
                }
                (Some(v), None) => {
                    self.number(parameter, v)?;
                }
                (None, None) => missing = Some(parameter),
                (None, Some(_)) => {}
            }
        }
        Ok(self)
    }

    /// Format a number token without pushing it
    pub fn number_token(&self, parameter: &'static str, value: f64) -> Result<String> {
        if !value.is_finite() {
            return Err(SoxError::invalid_parameter(
                self.effect,
                parameter,
                format!("must be a finite number, got {}", value),
            ));
        }
        Ok(format_number(value))
    }

    /// Format a time value, which must be a finite number of seconds >= 0
    ///
    /// Position prefixes carry the direction, so a negative value would turn
    /// into a different SoX position instead of failing.
    pub fn duration_token(&self, parameter: &'static str, seconds: f64) -> Result<String> {
        let token = self.number_token(parameter, seconds)?;
        if seconds < 0.0 {
            return Err(SoxError::invalid_parameter(
                self.effect,
                parameter,
                format!("must not be negative, got {}", token),
            ));
        }
        Ok(token)
    }

    /// Tokens rendered so far
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Consume the writer, returning the tokens
    pub fn into_tokens(self) -> Vec<String> {
        self.tokens
    }
}
