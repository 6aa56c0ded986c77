// Compact element syntax: parsed fragments and their serialized shape

use dom_builder_wasm::{parse, AttrValue};
use serde_json::json;

#[test]
fn test_full_syntax_serializes_to_plain_object() {
    let fragment = parse("p#main-info.info.active{data-id:123,role=button} text content")
        .expect("parse should produce a fragment");

    let value = serde_json::to_value(&fragment).unwrap();
    assert_eq!(
        value,
        json!({
            "tag": "p",
            "id": "main-info",
            "className": "info active",
            "attrs": { "data-id": "123", "role": "button" },
            "content": "text content"
        })
    );
}

#[test]
fn test_class_only_uses_null_for_absent_fields() {
    let value = serde_json::to_value(parse(".another-div").unwrap()).unwrap();
    assert_eq!(
        value,
        json!({
            "tag": "div",
            "id": null,
            "className": "another-div",
            "attrs": {},
            "content": null
        })
    );
}

#[test]
fn test_flag_attribute_serializes_as_true() {
    let fragment = parse("input#search-field[type=text,disabled]").unwrap();
    assert_eq!(fragment.tag, "input");
    assert_eq!(fragment.attrs.get("disabled"), Some(&AttrValue::Bool(true)));

    let value = serde_json::to_value(&fragment).unwrap();
    assert_eq!(value["attrs"], json!({ "type": "text", "disabled": true }));
}

#[test]
fn test_attribute_order_is_preserved() {
    let fragment = parse("a(z:1,a:2,m:3)").unwrap();
    let names: Vec<&str> = fragment.attrs.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["z", "a", "m"]);

    let text = serde_json::to_string(&fragment.attrs).unwrap();
    assert_eq!(text, r#"{"z":"1","a":"2","m":"3"}"#);
}

#[test]
fn test_values_keep_inner_separators() {
    let fragment = parse("a(href:http://x.test/a=b)").unwrap();
    assert_eq!(
        fragment.attrs.get("href"),
        Some(&AttrValue::Text("http://x.test/a=b".into()))
    );
}
