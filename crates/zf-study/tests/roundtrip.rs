use zf_study::schema::*;
use zf_study::{load_json, load_yaml, save_json, save_yaml, validate_study};

#[test]
fn roundtrip_yaml_example() {
    let study = Study::example();
    validate_study(&study).unwrap();

    let path = std::env::temp_dir().join("zf_study_roundtrip_example.yaml");
    save_yaml(&path, &study).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(study, loaded);
}

#[test]
fn roundtrip_json_derivative_study() {
    let mut study = Study::example();
    study.name = "dZ/dTpr isobars".to_string();
    study.quantity = zf_sweeps::Output::DzDtpr;
    study.vary = zf_sweeps::VaryAxis::Temperature;
    study.derivative_bracket = Some(BracketDef {
        low: -5.0,
        high: 0.0,
    });

    let path = std::env::temp_dir().join("zf_study_roundtrip_derivative.json");
    save_json(&path, &study).unwrap();
    let loaded = load_json(&path).unwrap();

    assert_eq!(study, loaded);
}

#[test]
fn save_rejects_invalid_study() {
    let mut study = Study::example();
    study.solver.max_iterations = 0;

    let path = std::env::temp_dir().join("zf_study_roundtrip_invalid.yaml");
    assert!(save_yaml(&path, &study).is_err());
}

#[test]
fn defaults_fill_solver_and_output() {
    let yaml = r#"
version: 1
name: Minimal
gas:
  specific_gravity: 0.7
pressure:
  start: 50 atm
temperature:
  start: 40 C
"#;
    let study = zf_study::from_yaml_str(yaml).unwrap();
    assert_eq!(study.solver, SolverDef::default());
    assert_eq!(study.quantity, zf_sweeps::Output::Z);
    assert_eq!(study.z_bracket, None);
    assert_eq!(study.z_bracket(), zf_core::Bracket::from(WIDE_Z_BRACKET));

    let request = study.to_family_request().unwrap();
    assert_eq!(request.pressures.num_points, 1);
    assert_eq!(request.temperatures.num_points, 1);
}

#[test]
fn unknown_unit_is_reported_on_request() {
    let mut study = Study::example();
    study.pressure.start = "1 furlong".to_string();
    assert!(matches!(
        study.to_family_request(),
        Err(zf_study::StudyError::Sweep(_))
    ));
}
