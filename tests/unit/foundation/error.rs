use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ChoroplethError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(ChoroplethError::data("x").to_string().contains("data error:"));
    assert!(
        ChoroplethError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        ChoroplethError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ChoroplethError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde_variant() {
    let err: ChoroplethError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, ChoroplethError::Serde(_)));
}
