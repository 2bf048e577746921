use svsim::{build_scenario, write_csv, AnyScenario, NVec2, PresetConfig, Scenario, ScenarioConfig, SimError, State, System};

const BINARY_YAML: &str = r#"
parameters:
  dt: 0.01
  t_max: 0.05
  G: 0.5
bodies:
  - name: a
    x: [-0.5, 0.0]
    v: [0.0, -0.5]
    m: 2.0
  - x: [0.5, 0.0]
    p: [0.0, 1.0]
    m: 2.0
"#;

#[test]
fn parses_yaml_with_defaults() {
    let cfg = ScenarioConfig::from_yaml(BINARY_YAML).unwrap();
    assert_eq!(cfg.dimension, 2);
    assert_eq!(cfg.preset, None);
    assert_eq!(cfg.parameters.g, Some(0.5));
    assert_eq!(cfg.parameters.eps, None);
    assert_eq!(cfg.bodies.len(), 2);
    assert_eq!(cfg.bodies[1].name, None);
}

#[test]
fn builds_planar_scenario() {
    let cfg = ScenarioConfig::from_yaml(BINARY_YAML).unwrap();
    let AnyScenario::Planar(scenario) = build_scenario(cfg).unwrap() else {
        panic!("expected a 2D scenario");
    };

    assert_eq!(scenario.labels, vec!["a".to_string(), "body1".to_string()]);
    assert_eq!(scenario.parameters.g, 0.5);
    assert_eq!(scenario.parameters.eps, 0.0);
    assert_eq!(scenario.system.g, 0.5);

    // velocity is turned into momentum
    assert_eq!(scenario.system.bodies[0].p, NVec2::new(0.0, -1.0));
    assert_eq!(scenario.system.bodies[1].p, NVec2::new(0.0, 1.0));

    let traj = scenario.run().unwrap();
    assert_eq!(traj.len(), 6);
}

#[test]
fn rejects_wrong_component_count() {
    let yaml = r#"
dimension: 3
parameters: { dt: 0.1, t_max: 1.0 }
bodies:
  - x: [0.0, 0.0]
    m: 1.0
"#;
    let err = build_scenario(ScenarioConfig::from_yaml(yaml).unwrap()).unwrap_err();
    assert_eq!(err, SimError::ComponentCount { index: 0, field: "x", expected: 3, found: 2 });
}

#[test]
fn rejects_unknown_dimension() {
    let yaml = "dimension: 4\nparameters: { dt: 0.1, t_max: 1.0 }\n";
    let err = build_scenario(ScenarioConfig::from_yaml(yaml).unwrap()).unwrap_err();
    assert_eq!(err, SimError::UnsupportedDimension(4));
}

#[test]
fn fixed_dimension_build_names_both_dimensions() {
    let yaml = r#"
dimension: 3
parameters: { dt: 0.1, t_max: 1.0 }
bodies:
  - x: [0.0, 0.0, 0.0]
    m: 1.0
"#;
    let err = Scenario::<2>::build_scenario(ScenarioConfig::from_yaml(yaml).unwrap()).unwrap_err();
    assert_eq!(err, SimError::DimensionMismatch { requested: 3, built: 2 });
    assert!(err.to_string().contains("dimension 3"));

    assert!(Scenario::<3>::build_scenario(ScenarioConfig::from_yaml(yaml).unwrap()).is_ok());
}

#[test]
fn rejects_invalid_parameters_before_running() {
    let yaml = r#"
parameters: { dt: -0.1, t_max: 1.0 }
bodies:
  - x: [0.0, 0.0]
    m: 1.0
"#;
    let err = build_scenario(ScenarioConfig::from_yaml(yaml).unwrap()).unwrap_err();
    assert_eq!(err, SimError::NonPositiveStep(-0.1));

    let yaml = r#"
parameters: { dt: 0.1, t_max: 1.0 }
bodies:
  - x: [0.0, 0.0]
    m: -1.0
"#;
    let err = build_scenario(ScenarioConfig::from_yaml(yaml).unwrap()).unwrap_err();
    assert_eq!(err, SimError::NonPositiveMass { index: 0, mass: -1.0 });

    let yaml = "parameters: { dt: 0.1, t_max: 1.0 }\n";
    let err = build_scenario(ScenarioConfig::from_yaml(yaml).unwrap()).unwrap_err();
    assert_eq!(err, SimError::NoBodies);
}

#[test]
fn missing_step_size_is_a_parse_error() {
    assert!(ScenarioConfig::from_yaml("parameters: { t_max: 1.0 }\n").is_err());
}

#[test]
fn preset_supplies_bodies_and_constants() {
    let yaml = r#"
dimension: 3
preset: outer_solar_system
parameters: { dt: 10.0, t_max: 100.0 }
"#;
    let cfg = ScenarioConfig::from_yaml(yaml).unwrap();
    assert_eq!(cfg.preset, Some(PresetConfig::OuterSolarSystem));

    let AnyScenario::Spatial(scenario) = build_scenario(cfg).unwrap() else {
        panic!("expected a 3D scenario");
    };
    assert_eq!(scenario.labels[0], "Sun");
    assert_eq!(scenario.labels[5], "Pluto");
    assert_eq!(scenario.parameters.g, svsim::simulation::presets::G_SOLAR);
    assert_eq!(scenario.parameters.eps, 0.0);
    assert_eq!(scenario.run().unwrap().len(), 11);
}

#[test]
fn explicit_constants_override_preset() {
    let yaml = r#"
preset: near_radial_pair
parameters: { dt: 0.001, t_max: 0.01, G: 2.0, eps: 0.0 }
"#;
    let AnyScenario::Planar(scenario) = build_scenario(ScenarioConfig::from_yaml(yaml).unwrap()).unwrap() else {
        panic!("expected a 2D scenario");
    };
    assert_eq!(scenario.parameters.g, 2.0);
    assert_eq!(scenario.parameters.eps, 0.0);
    assert_eq!(scenario.labels, vec!["left".to_string(), "right".to_string()]);
}

#[test]
fn preset_dimension_must_match() {
    let yaml = "preset: outer_solar_system\nparameters: { dt: 1.0, t_max: 2.0 }\n";
    let err = build_scenario(ScenarioConfig::from_yaml(yaml).unwrap()).unwrap_err();
    assert_eq!(
        err,
        SimError::PresetDimension { preset: "outer_solar_system", actual: 3, requested: 2 }
    );
}

#[test]
fn preset_and_explicit_bodies_are_exclusive() {
    let yaml = r#"
preset: near_radial_pair
parameters: { dt: 0.001, t_max: 0.01 }
bodies:
  - x: [0.0, 0.0]
    m: 1.0
"#;
    let err = build_scenario(ScenarioConfig::from_yaml(yaml).unwrap()).unwrap_err();
    assert_eq!(err, SimError::PresetWithBodies { preset: "near_radial_pair", bodies: 1 });
}

#[test]
fn csv_export_writes_header_and_strided_rows() {
    let state = State::new(vec![NVec2::new(-1.0, 0.0), NVec2::new(1.0, 0.0)], vec![NVec2::new(0.0, -0.5), NVec2::new(0.0, 0.5)]);
    let sys = System::from_parts(&state, &[1.0, 1.0], 1.0, 0.0).unwrap();
    let traj = sys.integrate(0.1, 0.5).unwrap();
    assert_eq!(traj.len(), 6);

    let mut buf = Vec::new();
    write_csv(&mut buf, &traj, &["a".to_string()], 2).unwrap();
    let text = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "step,time,body,label,q0,q1,p0,p1");
    assert_eq!(lines[1], "0,0,0,a,-1,0,0,-0.5");
    assert_eq!(lines[2], "0,0,1,,1,0,0,0.5");

    // steps 0, 2, 4 and the last one (5), two bodies each
    assert_eq!(lines.len(), 1 + 4 * 2);
    let steps: Vec<&str> = lines[1..].iter().map(|l| l.split(',').next().unwrap()).collect();
    assert_eq!(steps, vec!["0", "0", "2", "2", "4", "4", "5", "5"]);
}
