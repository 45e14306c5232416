//! Integration Tests
//!
//! End-to-end tests for building SoX effect chains and command lines.

use pretty_assertions::assert_eq;
use test_case::test_case;

use soxfx::effects::{
    Bass, Contrast, Echo, EffectChain, Fade, GainType, HighPass, Norm, Pitch, Position, Reverb,
    Tempo, Trim, Volume, Width,
};
use soxfx::{render_chain, ChainConfig, Effect, SoxCommand, SoxEffect, SoxError};

fn strings(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|t| t.to_string()).collect()
}

// === Single Effect Rendering ===

#[test_case(Volume::new(2.5).into(), &["vol", "2.5"] ; "volume gain only")]
#[test_case(Volume::new(2.5).with_type(GainType::Db).into(), &["vol", "2.5", "dB"] ; "volume with type")]
#[test_case(
    Volume::new(2.5).with_type(GainType::Amplitude).with_limiter(0.05).into(),
    &["vol", "2.5", "amplitude", "0.05"] ;
    "volume with type and limiter"
)]
#[test_case(Volume::new(1.0).into(), &["vol", "1"] ; "volume without optionals")]
#[test_case(Contrast::new(75.0).into(), &["contrast", "75"] ; "contrast default value")]
#[test_case(Contrast::new(0.0).into(), &["contrast", "0"] ; "contrast zero")]
fn test_render_single(effect: Effect, expected: &[&str]) {
    assert_eq!(effect.render().unwrap(), strings(expected));
}

// === Chain Rendering ===

fn sample_set() -> Vec<Effect> {
    vec![
        Volume::new(0.8).into(),
        Contrast::default().into(),
        Bass::new(4.0).with_frequency(120.0).into(),
        Norm::new().with_level(-1.0).into(),
    ]
}

/// Heap's algorithm, enough for a handful of effects
fn permutations(items: Vec<Effect>) -> Vec<Vec<Effect>> {
    fn heap(k: usize, items: &mut Vec<Effect>, out: &mut Vec<Vec<Effect>>) {
        if k <= 1 {
            out.push(items.clone());
            return;
        }
        for i in 0..k - 1 {
            heap(k - 1, items, out);
            if k % 2 == 0 {
                items.swap(i, k - 1);
            } else {
                items.swap(0, k - 1);
            }
        }
        heap(k - 1, items, out);
    }
    let mut items = items;
    let mut out = Vec::new();
    let k = items.len();
    heap(k, &mut items, &mut out);
    out
}

#[test]
fn test_chain_order_follows_every_permutation() {
    let all = permutations(sample_set());
    assert_eq!(all.len(), 24);

    let mut distinct = std::collections::HashSet::new();
    for order in all {
        let expected: Vec<String> = order
            .iter()
            .flat_map(|effect| effect.render().unwrap())
            .collect();
        let chain: EffectChain = order.into_iter().collect();
        assert_eq!(chain.render().unwrap(), expected);
        distinct.insert(expected);
    }
    assert_eq!(distinct.len(), 24);
}

#[test]
fn test_chain_render_is_idempotent() {
    let chain: EffectChain = sample_set().into_iter().collect();
    let first = chain.render().unwrap();
    let second = chain.render().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_chain_reflects_mutation_between_renders() {
    let mut chain = EffectChain::new().with(Volume::new(1.0));
    assert_eq!(chain.render().unwrap(), strings(&["vol", "1"]));

    if let Some(Effect::Volume(vol)) = chain.get_mut(0) {
        vol.set_gain_type(Some(GainType::Power));
    }
    assert_eq!(chain.render().unwrap(), strings(&["vol", "1", "power"]));
}

#[test]
fn test_render_chain_stops_at_first_failure() {
    let effects: Vec<Effect> = vec![
        Volume::new(1.0).into(),
        Tempo::new(1.2).with_overlap(12.0).into(),
        Echo::new(0.8, 0.9).into(),
    ];
    match render_chain(&effects).unwrap_err() {
        SoxError::RenderFailure {
            index,
            effect,
            source,
        } => {
            assert_eq!(index, 1);
            assert_eq!(effect, "tempo");
            assert!(matches!(
                *source,
                SoxError::InvalidParameter {
                    parameter: "overlap",
                    ..
                }
            ));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_mastering_chain() {
    let chain = EffectChain::new()
        .with(HighPass::new(30.0).with_width(Width::Q(0.707)))
        .with(Trim::new(Position::Start(0.5)))
        .with(Reverb::new().with_reverberance(20.0))
        .with(Pitch::new(-50.0))
        .with(Fade::new(0.1).with_stop(Position::End(0.0)).with_fade_out(2.0))
        .with(Norm::new().with_level(-0.3));
    assert_eq!(
        chain.render().unwrap(),
        strings(&[
            "highpass", "30", "0.707q", "trim", "=0.5", "reverb", "20", "50", "100", "100", "0",
            "0", "pitch", "-50", "fade", "0.1", "-0", "2", "norm", "-0.3",
        ])
    );
}

// === Numeric Formatting ===

#[test_case(1234.5, "1234.5" ; "no digit grouping")]
#[test_case(1234567.0, "1234567" ; "integral without fraction")]
#[test_case(0.05, "0.05" ; "point as decimal separator")]
#[test_case(-3.2, "-3.2" ; "negative")]
#[test_case(1e-7, "0.0000001" ; "no exponent")]
fn test_numbers_use_fixed_decimal_format(gain: f64, expected: &str) {
    let effect: Effect = Volume::new(gain).with_type(GainType::Amplitude).into();
    let tokens = effect.render().unwrap();
    assert_eq!(tokens, strings(&["vol", expected, "amplitude"]));
    assert_eq!(tokens[1].parse::<f64>().unwrap(), gain);
}

// === Command Building ===

#[test]
fn test_command_from_chain_file() {
    let config = ChainConfig::from_json_str(
        r#"{
            "global_options": ["--no-show-progress"],
            "effects": [
                {"effect": "vol", "gain": 2.5, "type": "dB"},
                {"effect": "trim", "positions": [{"from": "relative", "seconds": 0}, {"from": "relative", "seconds": 30}]},
                {"effect": "equalizer", "frequency": 1000, "width": {"unit": "octaves", "value": 1}, "gain": -3}
            ]
        }"#,
    )
    .unwrap();

    let command: SoxCommand = config.command(
        &[std::path::PathBuf::from("input file.flac")],
        Some(std::path::Path::new("out.wav")),
    );
    let args: Vec<String> = command
        .args()
        .unwrap()
        .into_iter()
        .map(|a| a.to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        args,
        strings(&[
            "--no-show-progress",
            "input file.flac",
            "out.wav",
            "vol",
            "2.5",
            "dB",
            "trim",
            "0",
            "30",
            "equalizer",
            "1000",
            "1o",
            "-3",
        ])
    );
}

#[test]
fn test_invalid_chain_file() {
    let err = ChainConfig::from_json_str(r#"{"effects": [{"effect": "vol"}]}"#).unwrap_err();
    assert_eq!(err.error_code(), "INVALID_CONFIG");

    let err = ChainConfig::from_json_str(r#"{"effects": [{"effect": "channels", "count": 0}]}"#)
        .unwrap_err();
    assert_eq!(err.error_code(), "INVALID_CONFIG");
}
