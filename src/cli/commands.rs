//! CLI Command Implementations
//!
//! Implements the actual logic for each CLI command.

use std::io::Write;
use std::path::{Path, PathBuf};

use log::info;

use crate::config::ChainConfig;
use crate::effects::Effect;
use crate::error::Result;

/// List every supported effect name.
pub fn list_effects(out: &mut impl Write) -> Result<()> {
    for name in Effect::NAMES {
        writeln!(out, "{}", name)?;
    }
    Ok(())
}

/// Render a chain file to effect tokens.
pub fn render(chain: &Path, json: bool, out: &mut impl Write) -> Result<()> {
    info!("Rendering chain: {}", chain.display());

    let config = ChainConfig::load(chain)?;
    let tokens = config.effects.render()?;

    if json {
        writeln!(out, "{}", serde_json::to_string(&tokens)?)?;
    } else {
        for token in &tokens {
            writeln!(out, "{}", token)?;
        }
    }

    Ok(())
}

/// Print the full SoX argument vector, one quoted argument per item.
pub fn print_command(
    chain: &Path,
    inputs: &[PathBuf],
    output: Option<&Path>,
    out: &mut impl Write,
) -> Result<()> {
    info!("Building command for chain: {}", chain.display());

    let config = ChainConfig::load(chain)?;
    let command = config.command(inputs, output);
    let args = command.args()?;

    write!(out, "{:?}", command.program_path())?;
    for arg in &args {
        write!(out, " {:?}", arg)?;
    }
    writeln!(out)?;

    Ok(())
}

/// Run SoX with the chain file.
pub fn run(chain: &Path, inputs: &[PathBuf], output: Option<&Path>) -> Result<()> {
    info!("Running chain: {}", chain.display());

    let config = ChainConfig::load(chain)?;
    let result = config.command(inputs, output).run()?;

    let stderr = String::from_utf8_lossy(&result.stderr);
    if !stderr.trim().is_empty() {
        eprintln!("{}", stderr.trim());
    }
    match output {
        Some(path) => println!("Wrote: {}", path.display()),
        None => println!("Done"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn write_chain(dir: &Path, json: &str) -> PathBuf {
        let path = dir.join("chain.json");
        std::fs::write(&path, json).unwrap();
        path
    }

    #[test]
    fn test_list_effects() {
        let mut out = Vec::new();
        list_effects(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), Effect::NAMES.len());
        assert!(text.lines().any(|l| l == "vol"));
    }

    #[test]
    fn test_render_lines_and_json() {
        let dir = tempdir().unwrap();
        let chain = write_chain(
            dir.path(),
            r#"{"effects": [{"effect": "vol", "gain": 2.5, "type": "amplitude", "limiter": 0.05}]}"#,
        );

        let mut out = Vec::new();
        render(&chain, false, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "vol\n2.5\namplitude\n0.05\n");

        let mut out = Vec::new();
        render(&chain, true, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "[\"vol\",\"2.5\",\"amplitude\",\"0.05\"]\n"
        );
    }

    #[test]
    fn test_print_command() {
        let dir = tempdir().unwrap();
        let chain = write_chain(dir.path(), r#"{"effects": [{"effect": "reverse"}]}"#);

        let mut out = Vec::new();
        print_command(
            &chain,
            &[PathBuf::from("in put.wav")],
            Some(Path::new("out.wav")),
            &mut out,
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\"sox\" \"in put.wav\" \"out.wav\" \"reverse\"\n"
        );
    }

    #[test]
    fn test_render_missing_chain() {
        let dir = tempdir().unwrap();
        let err = render(&dir.path().join("nope.json"), false, &mut Vec::<u8>::new()).unwrap_err();
        assert_eq!(err.error_code(), "FILE_NOT_FOUND");
    }
}
