// Tree building against the in-memory document

use dom_builder_wasm::{
    build, decorate, Attrs, BuildOptions, Children, ClassName, Content, ContentValue,
    HostDocument, Item, MemoryDocument, NodeId, SpecRecord, TreeBuilder,
};
use std::cell::RefCell;
use std::rc::Rc;

fn document_with_root() -> (MemoryDocument, NodeId) {
    let mut doc = MemoryDocument::new();
    let root = doc.create_element("body").expect("body element");
    (doc, root)
}

#[test]
fn test_id_field_beats_id_attribute() {
    let (mut doc, root) = document_with_root();
    let record = SpecRecord::default()
        .id("x")
        .attrs(Attrs::Pair("id".into(), "y".into()));

    let first = build(&mut doc, vec![Item::from(record)], Some(&root), BuildOptions::default())
        .unwrap()
        .unwrap();

    assert_eq!(doc.id(&first), "x");
    assert_eq!(doc.outer_html(root), r#"<body><div id="x"></div></body>"#);
}

#[test]
fn test_condition_false_appends_nothing() {
    let (mut doc, root) = document_with_root();
    let items = vec![Item::from(SpecRecord::new("span").condition(false))];

    let first = build(&mut doc, items, Some(&root), BuildOptions::default()).unwrap();

    assert_eq!(first, None);
    assert_eq!(doc.outer_html(root), "<body></body>");
}

#[test]
fn test_tag_chain_nests_and_isolates_fields() {
    let (mut doc, root) = document_with_root();
    let record = SpecRecord::chain(["div.a", "span.b"]).class_name("extra");

    let first = build(&mut doc, vec![Item::from(record)], Some(&root), BuildOptions::default())
        .unwrap()
        .unwrap();

    let div = doc.children(root)[0];
    assert_eq!(doc.children(root).len(), 1);
    assert_eq!(doc.class_name(&div), "a");
    assert_eq!(doc.children(div), &[first]);
    assert_eq!(doc.class_name(&first), "b extra");
    assert_eq!(
        doc.outer_html(root),
        r#"<body><div class="a"><span class="b extra"></span></div></body>"#
    );
}

#[test]
fn test_chain_children_go_under_last_segment() {
    let (mut doc, root) = document_with_root();
    let record = SpecRecord::chain(["nav#top", "ul.menu"])
        .children(vec!["li Home".into(), "li About".into()]);

    build(&mut doc, vec![Item::from(record)], Some(&root), BuildOptions::default()).unwrap();

    assert_eq!(
        doc.outer_html(root),
        r#"<body><nav id="top"><ul class="menu"><li>Home</li><li>About</li></ul></nav></body>"#
    );
}

#[test]
fn test_sibling_after_chain_attaches_to_original_parent() {
    let (mut doc, root) = document_with_root();
    let items: Vec<Item<NodeId>> = vec![
        SpecRecord::chain(["section", "p"]).text("inside").into(),
        "footer".into(),
    ];

    build(&mut doc, items, Some(&root), BuildOptions::default()).unwrap();

    let tags: Vec<&str> = doc
        .children(root)
        .iter()
        .map(|c| doc.tag_name(*c).unwrap())
        .collect();
    assert_eq!(tags, vec!["section", "footer"]);
}

#[test]
fn test_non_sequence_children_are_reported() {
    let (mut doc, root) = document_with_root();
    let mut record = SpecRecord::new("ul");
    record.children = Some(Children::Invalid("string".into()));
    let items = vec!["h2 Before".into(), Item::from(record), "p After".into()];

    let mut builder = TreeBuilder::new(&mut doc);
    builder.build(items, Some(&root), BuildOptions::default()).unwrap();
    let diagnostics = builder.into_diagnostics();

    assert_eq!(
        doc.outer_html(root),
        "<body><h2>Before</h2><ul></ul><p>After</p></body>"
    );
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics.has_errors());
    let mark = diagnostics.iter().next().unwrap();
    assert_eq!(mark.path, vec![1]);
    assert!(mark.message.contains("string"));
}

#[test]
fn test_items_append_in_literal_order() {
    let (mut doc, root) = document_with_root();
    let items: Vec<Item<NodeId>> = vec!["a".into(), "b".into(), "c".into()];

    let first = build(&mut doc, items, Some(&root), BuildOptions::default())
        .unwrap()
        .unwrap();

    assert_eq!(doc.tag_name(first), Some("a"));
    assert_eq!(doc.outer_html(root), "<body><a></a><b></b><c></c></body>");
}

#[test]
fn test_empty_parent_clears_existing_content() {
    let (mut doc, root) = document_with_root();
    build(&mut doc, vec![Item::from("p Old")], Some(&root), BuildOptions::default()).unwrap();

    let options = BuildOptions { empty_parent: true };
    build(&mut doc, vec![Item::from("p New")], Some(&root), options).unwrap();

    assert_eq!(doc.outer_html(root), "<body><p>New</p></body>");
}

#[test]
fn test_without_parent_element_stays_detached() {
    let mut doc = MemoryDocument::new();
    let first = build(&mut doc, vec![Item::from("em loose")], None, BuildOptions::default())
        .unwrap()
        .unwrap();

    assert_eq!(doc.parent(first), None);
    assert_eq!(doc.outer_html(first), "<em>loose</em>");
}

#[test]
fn test_callbacks_run_after_children_are_built() {
    let (mut doc, root) = document_with_root();
    let seen: Rc<RefCell<Vec<&'static str>>> = Rc::new(RefCell::new(Vec::new()));

    let outer_log = Rc::clone(&seen);
    let inner_log = Rc::clone(&seen);
    let record = SpecRecord::new("ul")
        .children(vec![SpecRecord::new("li")
            .callback(move |_| inner_log.borrow_mut().push("li"))
            .into()])
        .callback(move |_| outer_log.borrow_mut().push("ul"));

    build(&mut doc, vec![Item::from(record)], Some(&root), BuildOptions::default()).unwrap();

    assert_eq!(*seen.borrow(), vec!["li", "ul"]);
}

#[test]
fn test_callback_receives_created_element() {
    let (mut doc, root) = document_with_root();
    let received: Rc<RefCell<Option<NodeId>>> = Rc::new(RefCell::new(None));

    let slot = Rc::clone(&received);
    let record = SpecRecord::new("button").callback(move |node| *slot.borrow_mut() = Some(*node));

    let first = build(&mut doc, vec![Item::from(record)], Some(&root), BuildOptions::default())
        .unwrap();

    assert_eq!(*received.borrow(), first);
    assert_eq!(first.and_then(|n| doc.parent(n)), Some(root));
}

#[test]
fn test_node_content_is_appended() {
    let (mut doc, root) = document_with_root();
    let strong = doc.create_element("strong").unwrap();

    let record = SpecRecord::new("p").content(Content::node(strong));
    build(&mut doc, vec![Item::from(record)], Some(&root), BuildOptions::default()).unwrap();

    assert_eq!(doc.outer_html(root), "<body><p><strong></strong></p></body>");
}

#[test]
fn test_producer_content_is_resolved() {
    let (mut doc, root) = document_with_root();
    let items: Vec<Item<NodeId>> = vec![
        SpecRecord::new("span")
            .content(Content::producer(|| Some(ContentValue::Text("<i>made</i>".into()))))
            .into(),
        SpecRecord::new("span").content(Content::number(2.5)).into(),
    ];

    build(&mut doc, items, Some(&root), BuildOptions::default()).unwrap();

    assert_eq!(
        doc.outer_html(root),
        "<body><span><i>made</i></span><span>2.5</span></body>"
    );
}

#[test]
fn test_nested_children_keep_depth_first_order() {
    let (mut doc, root) = document_with_root();
    let items: Vec<Item<NodeId>> = vec![
        SpecRecord::new("ol")
            .children(vec![
                SpecRecord::new("li")
                    .text("one")
                    .children(vec!["b 1a".into(), "b 1b".into()])
                    .into(),
                "li two".into(),
            ])
            .into(),
        "hr".into(),
    ];

    build(&mut doc, items, Some(&root), BuildOptions::default()).unwrap();

    assert_eq!(
        doc.outer_html(root),
        "<body><ol><li>one<b>1a</b><b>1b</b></li><li>two</li></ol><hr></body>"
    );
}

#[test]
fn test_class_list_and_attribute_values() {
    let (mut doc, root) = document_with_root();
    let record = SpecRecord::new("input")
        .class_name(ClassName::Many(vec![Some("field".into()), None, Some("wide".into())]))
        .attr("maxlength", 12)
        .attr("required", true)
        .attr("placeholder", None::<String>);

    let input = build(&mut doc, vec![Item::from(record)], Some(&root), BuildOptions::default())
        .unwrap()
        .unwrap();

    assert_eq!(doc.attribute(input, "maxlength"), Some("12"));
    assert_eq!(doc.attribute(input, "required"), Some("true"));
    assert_eq!(doc.attribute(input, "placeholder"), None);
    assert_eq!(doc.class_name(&input), "field wide");
}

#[test]
fn test_decorate_twice_matches_once() {
    let mut doc = MemoryDocument::new();
    let node = doc.create_element("div").unwrap();
    let record: SpecRecord<NodeId> = SpecRecord::new("div")
        .id("card")
        .class("panel")
        .attr("role", "region");

    decorate(&mut doc, &node, &record).unwrap();
    let once = doc.outer_html(node);
    decorate(&mut doc, &node, &record).unwrap();

    assert_eq!(doc.outer_html(node), once);
    assert_eq!(once, r#"<div role="region" class="panel" id="card"></div>"#);
}

#[test]
fn test_invalid_tag_is_a_host_error() {
    let (mut doc, root) = document_with_root();
    let record: SpecRecord<NodeId> = SpecRecord::new("not a tag");

    let result = build(&mut doc, vec![Item::from(record)], Some(&root), BuildOptions::default());

    assert!(result.is_err());
}
