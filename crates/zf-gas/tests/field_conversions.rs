//! Field-unit conversions into pseudo-reduced coordinates.
//!
//! Reference case: Applied Petroleum Reservoir Engineering (Craft & Hawkins),
//! 3250 psia, 213 °F, gas gravity 0.666.

use zf_core::units::{constants::ATM_PA, degf, psia};
use zf_gas::{
    GasSample, operating_point, parse_pressure, parse_temperature, pseudo_reduced_pressure,
    pseudo_reduced_temperature,
};

#[test]
fn craft_hawkins_reduced_coordinates() {
    let p_atm = 3250.0 * 6894.757293168 / ATM_PA;
    let t_c = (213.0 - 32.0) * 5.0 / 9.0;
    let sg = 0.666;

    let ppr = pseudo_reduced_pressure(p_atm, sg);
    let tpr = pseudo_reduced_temperature(t_c, sg);

    assert!((ppr - 4.865_581).abs() < 1e-5, "ppr = {ppr}");
    assert!((tpr - 1.822_244).abs() < 1e-5, "tpr = {tpr}");
}

#[test]
fn typed_and_parsed_inputs_agree() {
    let gas = GasSample::new(0.666).unwrap();
    let typed = operating_point(psia(3250.0), degf(213.0), &gas);
    let parsed = operating_point(
        parse_pressure("3250 psia").unwrap(),
        parse_temperature("213 F").unwrap(),
        &gas,
    );

    assert!((typed.ppr - parsed.ppr).abs() < 1e-9);
    assert!((typed.tpr - parsed.tpr).abs() < 1e-9);
    assert!(typed.within_dak_range());
}

#[test]
fn reduced_pressure_grows_with_pressure() {
    let sg = 0.9;
    let mut last = -1.0;
    for p in [0.0, 50.0, 100.0, 250.0, 500.0] {
        let ppr = pseudo_reduced_pressure(p, sg);
        assert!(ppr > last);
        last = ppr;
    }
}
