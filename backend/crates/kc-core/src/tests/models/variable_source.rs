use crate::VariableSource;

#[derive(serde::Deserialize)]
struct Wrapper {
    source: VariableSource,
}

#[test]
fn test_variable_source_parse_known_values() {
    assert_eq!(VariableSource::parse("header"), VariableSource::Header);
    assert_eq!(VariableSource::parse("ENV"), VariableSource::Env);
    assert_eq!(VariableSource::default(), VariableSource::Header);
}

#[test]
fn test_variable_source_keeps_unknown_value() {
    let source = VariableSource::parse("cookie");

    assert_eq!(source, VariableSource::Unsupported("cookie".to_string()));
    assert!(!source.is_supported());
    assert_eq!(source.to_string(), "cookie");
}

#[test]
fn test_variable_source_deserializes_unknown_without_error() {
    let parsed: Wrapper = serde_json::from_str(r#"{"source": "ldap"}"#).unwrap();

    assert_eq!(
        parsed.source,
        VariableSource::Unsupported("ldap".to_string())
    );
}
