//! Curve families at the size the plotting front-end asks for.

use zf_core::{Bracket, OperatingPoint};
use zf_gas::{GasSample, Quantity};
use zf_solver::{BisectionConfig, solve_z};
use zf_sweeps::{
    FamilyRequest, Output, SweepDefinition, SweepType, VaryAxis, compute_family,
};

fn isotherm_request(output: Output) -> FamilyRequest {
    FamilyRequest {
        gas: GasSample::new(0.9).unwrap(),
        output,
        vary: VaryAxis::Pressure,
        pressures: SweepDefinition::from_text(
            "0 atm",
            "500 atm",
            Quantity::Pressure,
            50,
            SweepType::Linear,
        )
        .unwrap(),
        temperatures: SweepDefinition::from_text(
            "0 C",
            "190 C",
            Quantity::Temperature,
            20,
            SweepType::Linear,
        )
        .unwrap(),
        z_bracket: Bracket::new(2.5e-4, 16.0),
        derivative_bracket: None,
        config: BisectionConfig::default(),
    }
}

#[test]
fn twenty_by_fifty_family_matches_sequential_solves() {
    let request = isotherm_request(Output::Z);
    let family = compute_family(&request).unwrap();

    assert_eq!(family.curves.len(), 20);
    assert_eq!(family.num_points(), 1000);
    assert_eq!(family.num_failed(), 0);

    for curve in &family.curves {
        for p in &curve.points {
            let sequential = solve_z(p.point, request.z_bracket, &request.config).unwrap();
            assert_eq!(p.value.map(f64::to_bits), Some(sequential.value.to_bits()));
            assert_eq!(p.converged, sequential.converged);
        }
    }
}

#[test]
fn curves_come_back_in_request_order() {
    let family = compute_family(&isotherm_request(Output::Z)).unwrap();
    let fixed: Vec<f64> = family.curves.iter().map(|c| c.fixed_value).collect();
    for pair in fixed.windows(2) {
        assert!(pair[0] < pair[1]);
    }
    assert!((fixed[0] - 0.0).abs() < 1e-9);
    assert!((fixed[19] - 190.0).abs() < 1e-9);
}

#[test]
fn zero_pressure_end_is_ideal_gas() {
    let family = compute_family(&isotherm_request(Output::Z)).unwrap();
    for curve in &family.curves {
        let first = &curve.points[0];
        assert_eq!(first.point.ppr, 0.0);
        assert!((first.value.unwrap() - 1.0).abs() < 1e-5);
    }
}

#[test]
fn derivative_family_signs() {
    let mut request = isotherm_request(Output::DzDtpr);
    request.pressures =
        SweepDefinition::from_text("10 atm", "200 atm", Quantity::Pressure, 10, SweepType::Linear)
            .unwrap();
    request.temperatures =
        SweepDefinition::from_text("40 C", "120 C", Quantity::Temperature, 3, SweepType::Linear)
            .unwrap();
    request.derivative_bracket = Some(Bracket::new(-10.0, 0.0));

    let family = compute_family(&request).unwrap();
    assert_eq!(family.num_converged(), family.num_points());
    assert!(family.points().all(|p| p.value.unwrap() < 0.0));

    request.output = Output::DzDppr;
    request.derivative_bracket = Some(Bracket::new(0.0, 10.0));
    let family = compute_family(&request).unwrap();
    assert_eq!(family.num_converged(), family.num_points());
    for p in family.points() {
        let OperatingPoint { tpr, .. } = p.point;
        assert!(p.value.unwrap() > 0.0);
        assert!(p.value.unwrap() < 0.27 / tpr / 0.2);
    }
}
