//! WASM build test
//!
//! Builds into the browser document through `WebDocument` and the exported
//! JavaScript entry points.

#![cfg(target_arch = "wasm32")]

use dom_builder_wasm::api::{build_tree, decorate_node, parse_element};
use dom_builder_wasm::{build, BuildOptions, HostDocument, Item, SpecRecord, WebDocument};
use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Element, Node};

wasm_bindgen_test_configure!(run_in_browser);

fn fresh_root(doc: &mut WebDocument) -> Node {
    doc.create_element("section").unwrap()
}

fn html(node: &Node) -> String {
    node.dyn_ref::<Element>().unwrap().outer_html()
}

fn object(fields: &[(&str, JsValue)]) -> JsValue {
    let obj = Object::new();
    for (name, value) in fields {
        Reflect::set(&obj, &JsValue::from_str(name), value).unwrap();
    }
    obj.into()
}

#[wasm_bindgen_test]
fn test_web_document_builds_nested_items() {
    let mut doc = WebDocument::current().unwrap();
    let root = fresh_root(&mut doc);
    let items: Vec<Item<Node>> = vec![
        "h1#title Welcome".into(),
        SpecRecord::new("ul")
            .class_name("menu")
            .children(vec!["li Home".into(), "li About".into()])
            .into(),
    ];

    build(&mut doc, items, Some(&root), BuildOptions::default()).unwrap();

    assert_eq!(
        html(&root),
        r#"<section><h1 id="title">Welcome</h1><ul class="menu"><li>Home</li><li>About</li></ul></section>"#
    );
}

#[wasm_bindgen_test]
fn test_parse_export_returns_plain_object() {
    let value = parse_element("input#search-field[type=text,disabled]").unwrap();

    let attrs = Reflect::get(&value, &"attrs".into()).unwrap();
    assert_eq!(Reflect::get(&value, &"tag".into()).unwrap().as_string().as_deref(), Some("input"));
    assert!(Reflect::get(&value, &"content".into()).unwrap().is_null());
    assert_eq!(Reflect::get(&attrs, &"disabled".into()).unwrap().as_bool(), Some(true));
}

#[wasm_bindgen_test]
fn test_build_export_lowers_js_items() {
    let mut doc = WebDocument::current().unwrap();
    let root = fresh_root(&mut doc);

    let seen = Function::new_with_args("el", "el.dataset.seen = 'yes';");
    let producer = Function::new_no_args("return 'made';");
    let items = Array::of3(
        &JsValue::from_str("p.first One"),
        &object(&[
            ("tag", Array::of2(&"div.a".into(), &"span.b".into()).into()),
            ("className", "extra".into()),
            ("content", producer.into()),
            ("callback", seen.into()),
        ]),
        &object(&[("tag", "ul".into()), ("children", "not-an-array".into())]),
    );
    let options = object(&[("emptyParent", true.into())]);

    let first = build_tree(items.into(), Some(root.clone()), options).unwrap();

    assert_eq!(first.map(|n| html(&n)).as_deref(), Some(r#"<p class="first">One</p>"#));
    assert_eq!(
        html(&root),
        concat!(
            r#"<section><p class="first">One</p>"#,
            r#"<div class="a"><span class="b extra" data-seen="yes">made</span></div>"#,
            "<ul></ul></section>"
        )
    );
}

#[wasm_bindgen_test]
fn test_decorate_export_applies_precedence() {
    let mut doc = WebDocument::current().unwrap();
    let node = doc.create_element("div").unwrap();
    let attrs = object(&[("id", "y".into()), ("title", 5.into())]);
    let spec = object(&[("id", "x".into()), ("attrs", attrs)]);

    let node = decorate_node(node, spec).unwrap();

    assert_eq!(html(&node), r#"<div id="x" title="5"></div>"#);
}
