use std::path::Path;
use zf_sweeps::compute_family;

fn studies_dir() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../studies")
}

#[test]
fn studies_load_and_validate() {
    let studies = [
        "sour_gas_isotherms.yaml",
        "craft_hawkins_derivative.yaml",
        "legacy_v0.yaml",
    ];

    for name in studies {
        let path = studies_dir().join(name);
        let study = zf_study::load_yaml(&path)
            .unwrap_or_else(|e| panic!("Failed to load {}: {}", name, e));
        zf_study::validate_study(&study)
            .unwrap_or_else(|e| panic!("Failed to validate {}: {}", name, e));
        assert_eq!(study.version, zf_study::LATEST_VERSION);
    }
}

#[test]
fn studies_solve_without_failures() {
    for name in ["sour_gas_isotherms.yaml", "craft_hawkins_derivative.yaml"] {
        let study = zf_study::load_yaml(&studies_dir().join(name)).unwrap();
        let family = compute_family(&study.to_family_request().unwrap()).unwrap();
        assert_eq!(family.num_failed(), 0, "{name}");
        assert_eq!(family.num_converged(), family.num_points(), "{name}");
    }
}

#[test]
fn legacy_study_uses_narrow_bracket() {
    let study = zf_study::load_yaml(&studies_dir().join("legacy_v0.yaml")).unwrap();
    assert_eq!(
        study.z_bracket,
        Some(zf_study::BracketDef {
            low: 0.7,
            high: 1.1
        })
    );
    let family = compute_family(&study.to_family_request().unwrap()).unwrap();
    assert_eq!(family.curves.len(), 1);
    assert_eq!(family.num_converged(), 10);
}
