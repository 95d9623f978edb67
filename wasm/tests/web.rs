//! Browser tests for the JavaScript bindings

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_list_regions() {
    let regions = agromet_wasm::list_regions();
    assert_eq!(regions.length(), 2);
    assert_eq!(regions.get(0).as_string().unwrap(), "N'ZI");
}

#[wasm_bindgen_test]
fn test_unknown_region_is_an_error() {
    assert!(agromet_wasm::list_stations("BAFING").is_err());
}

#[wasm_bindgen_test]
fn test_generate_daily_weather() {
    let json = agromet_wasm::generate_daily_weather("Gagnoa", 3, 42).unwrap();
    assert!(json.starts_with('['));
    assert!(agromet_wasm::generate_daily_weather("Gagnoa", 0, 42).is_err());
}
