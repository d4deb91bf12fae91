use ciede2000::{error::Result, Lab, Weights};
use std::result::Result as StdResult;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn wasm_init() {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("ciede2000 WASM module initialized");
}

/// ΔE00 between `lab(l1, a1, b1)` and `lab(l2, a2, b2)`.
#[wasm_bindgen]
pub fn ciede2000(l1: f64, a1: f64, b1: f64, l2: f64, a2: f64, b2: f64) -> f64 {
    ciede2000::ciede2000(l1, a1, b1, l2, a2, b2)
}

#[wasm_bindgen(js_name = deltaE)]
pub fn delta_e(first: Lab, second: Lab) -> f64 {
    first.delta_e(&second)
}

#[wasm_bindgen(js_name = deltaEWeighted)]
pub fn delta_e_weighted(first: Lab, second: Lab, weights: Weights) -> StdResult<f64, JsValue> {
    _delta_e_weighted(&first, &second, weights).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn _delta_e_weighted(first: &Lab, second: &Lab, weights: Weights) -> Result<f64> {
    let weights = Weights::validated(weights)?;
    log::debug!("Using weights: {:?}", weights);
    Ok(ciede2000::delta_e(first, second, &weights))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weighted_rejects_invalid_weights() {
        let lab = Lab::new(50.0, 10.0, -10.0);
        let weights = Weights::builder().hue(0.0).build();
        assert!(_delta_e_weighted(&lab, &lab, weights).is_err());
    }

    #[test]
    fn exports_match_core() {
        let first = Lab::new(46.6, -9.344, -127.6);
        let second = Lab::new(46.6, -9.44, -127.6);
        let expected = 0.03695828417;
        assert!((delta_e(first, second) - expected).abs() < 1e-10);
        assert!((ciede2000(46.6, -9.344, -127.6, 46.6, -9.44, -127.6) - expected).abs() < 1e-10);
        assert_eq!(
            _delta_e_weighted(&first, &second, Weights::default()).unwrap(),
            delta_e(first, second)
        );
    }
}
