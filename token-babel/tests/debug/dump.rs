use serde_json::{json, Value};
use token_babel::{Dictionary, FormatContext, FormatRegistry};

#[test]
fn dump_reproduces_the_engine_tree() {
    let export = json!({
        "allTokens": [
            { "path": ["color", "red"], "name": "xpl-color-red", "value": "#ff0000", "type": "color" }
        ],
        "tokens": {
            "color": {
                "red": { "value": "#ff0000", "original": { "value": "{palette.red}" }, "type": "color" }
            },
            "meta": { "version": 3, "tags": ["a", "b"], "draft": null }
        }
    });
    let dict = Dictionary::from_json(&export.to_string()).unwrap();
    let ctx = FormatContext::new("tokens.json");
    let out = FormatRegistry::default()
        .generate(&dict, "json/debug", &ctx)
        .unwrap();

    assert!(out.starts_with("{\n  \""));
    let parsed: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed, export["tokens"]);
}

#[test]
fn dump_synthesizes_a_tree_when_none_is_supplied() {
    let export = json!({
        "allTokens": [
            { "path": ["size", "m"], "name": "xpl-size-m", "value": 16, "type": "dimension" }
        ]
    });
    let dict = Dictionary::from_json(&export.to_string()).unwrap();
    let out = FormatRegistry::default()
        .generate(&dict, "json/debug", &FormatContext::new("tokens.json"))
        .unwrap();
    let parsed: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed["size"]["m"]["value"], 16);
    assert_eq!(parsed["size"]["m"]["name"], "xpl-size-m");
}
