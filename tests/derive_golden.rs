use gradientforge::{derive_gradient, ColorStop, GradientType, Rotation};
use serde::Deserialize;
use std::fs;

#[derive(Deserialize)]
struct Fixture {
    name: String,
    #[serde(rename = "type")]
    gradient_type: GradientType,
    rotation: u32,
    stops: Vec<(String, u32)>,
    expected: Option<String>,
}

#[test]
fn test_derive_gradient_golden() {
    let data = fs::read_to_string("tests/derive_golden.json").expect("Failed to read fixtures");
    let fixtures: Vec<Fixture> = serde_json::from_str(&data).expect("Invalid JSON");
    assert!(!fixtures.is_empty());

    for f in fixtures {
        let stops: Vec<ColorStop> = f
            .stops
            .iter()
            .enumerate()
            .map(|(i, (color, position))| ColorStop::new(format!("item_{}", i + 1), color.clone(), *position))
            .collect();
        let rotation = Rotation::new(f.rotation).expect("fixture rotation out of range");
        let got = derive_gradient(&stops, f.gradient_type, rotation);
        assert_eq!(got, f.expected, "Mismatch for fixture `{}`", f.name);
    }
}

#[test]
fn test_stop_grammar_for_every_type() {
    let stops = vec![
        ColorStop::new("a", "#102030", 0),
        ColorStop::new("b", "#405060", 50),
        ColorStop::new("c", "#708090", 100),
    ];
    let stop_list = "#102030 0%, #405060 50%, #708090 100%";
    for t in GradientType::ALL {
        let g = derive_gradient(&stops, t, Rotation::new(225).unwrap()).unwrap();
        let prefix = if !t.uses_rotation() {
            String::new()
        } else if matches!(t, GradientType::Conic | GradientType::RepeatingConic) {
            "from 225deg, ".to_string()
        } else {
            "225deg, ".to_string()
        };
        assert_eq!(g, format!("{}({}{})", t.css_function(), prefix, stop_list));
    }
}
