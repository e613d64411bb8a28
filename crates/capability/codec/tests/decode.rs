use pvsr_codec::decode;

#[test]
fn extracts_declared_keys() {
    let bag = decode(
        "inverter",
        "Serial Number: SN001 | Rated Power: 50kW | Firmware: 3.20.11.R",
    );
    assert_eq!(bag.get("serial").map(String::as_str), Some("SN001"));
    assert_eq!(bag.get("rated_kw").map(String::as_str), Some("50"));
    assert_eq!(bag.get("firmware").map(String::as_str), Some("3.20.11.R"));
}

#[test]
fn extraction_is_order_independent() {
    let bag = decode("inverter", "Firmware: 1.0 | Serial Number: SN9");
    assert_eq!(bag.get("serial").map(String::as_str), Some("SN9"));
    assert_eq!(bag.get("firmware").map(String::as_str), Some("1.0"));
}

#[test]
fn labels_match_case_insensitively() {
    let bag = decode("inverter", "serial number: SN9 | RATED POWER: 20kW");
    assert_eq!(bag.get("serial").map(String::as_str), Some("SN9"));
    assert_eq!(bag.get("rated_kw").map(String::as_str), Some("20"));
}

#[test]
fn missing_tokens_are_absent_not_errors() {
    let bag = decode("inverter", "Serial Number: SN9");
    assert!(!bag.contains_key("rated_kw"));
    assert!(!bag.contains_key("firmware"));
}

#[test]
fn unknown_tokens_are_ignored() {
    let bag = decode("inverter", "Color: blue | Serial Number: SN9 | loose clause");
    assert_eq!(bag.len(), 1);
    assert_eq!(bag.get("serial").map(String::as_str), Some("SN9"));
}

#[test]
fn never_fails_on_garbage() {
    for input in [
        "",
        "   ",
        "|||",
        " | | ",
        "Serial Number:",
        "Serial Number",
        ": value",
        "Circuit Breaker: (Rated:",
        "Power: NaNWp | Power: 12",
        "\u{0}\u{1}binary",
    ] {
        let _ = decode("inverter", input);
        let _ = decode("protection", input);
        let _ = decode("unknown-category", input);
    }
}

#[test]
fn composite_splits_base_and_sub() {
    let bag = decode("protection", "Circuit Breaker: ABB S202 (Rated: 25A)");
    assert_eq!(bag.get("circuit_breaker").map(String::as_str), Some("ABB S202"));
    assert_eq!(
        bag.get("circuit_breaker_rated_current").map(String::as_str),
        Some("25")
    );
}

#[test]
fn composite_sub_tolerates_comma_decimal_and_case() {
    let bag = decode("protection", "Circuit Breaker: ABB (rated: 25,5a)");
    assert_eq!(
        bag.get("circuit_breaker_rated_current").map(String::as_str),
        Some("25.5")
    );
}

#[test]
fn truncated_composite_still_extracts() {
    let bag = decode("protection", "Circuit Breaker: ABB (Rated: 25");
    assert_eq!(bag.get("circuit_breaker").map(String::as_str), Some("ABB"));
    assert_eq!(
        bag.get("circuit_breaker_rated_current").map(String::as_str),
        Some("25")
    );
}

#[test]
fn malformed_sub_value_passes_through() {
    let bag = decode("protection", "Differential: Type A (Sensitivity: tbd)");
    assert_eq!(bag.get("differential").map(String::as_str), Some("Type A"));
    assert_eq!(
        bag.get("differential_sensitivity").map(String::as_str),
        Some("tbd")
    );
}

#[test]
fn unit_glyphs_normalize_to_canonical_spelling() {
    let bag = decode("protection", "AC Cable Section: 6mmÂ²");
    assert_eq!(bag.get("ac_cable_section").map(String::as_str), Some("6"));

    let bag = decode("protection", "SPD Type: Type 2 / 10mm2 tail");
    assert_eq!(
        bag.get("spd_type").map(String::as_str),
        Some("Type 2 / 10mm² tail")
    );
}

#[test]
fn number_fields_keep_unparsable_text_verbatim() {
    let bag = decode("pv_module", "Power: approx 450");
    assert_eq!(bag.get("power_wp").map(String::as_str), Some("approx 450"));
}
