use serde_json::Value;
use token_babel::{Dictionary, FormatContext, FormatRegistry, Token};

fn dictionary() -> Dictionary {
    Dictionary::new(vec![
        Token::new(&["color", "bg"], "xpl-color-bg", "#fff").with_type("color"),
        Token::new(&["color", "dark", "bg"], "xpl-color-dark-bg", "#000").with_type("color"),
        Token::new(&["color", "old"], "xpl-color-old", "#123")
            .with_type("color")
            .with_deprecation(Some("Use bg")),
        Token::new(&["size", "1.5rem"], "xpl-size-1-5rem", 24)
            .with_type("dimension")
            .with_comment("Large */ gap"),
    ])
}

fn render(format: &str, destination: &str) -> String {
    let ctx = FormatContext::new(destination).with_header(false);
    FormatRegistry::default()
        .generate(&dictionary(), format, &ctx)
        .unwrap()
}

#[test]
fn declarations_match_the_module_shape() {
    let out = render("typescript/declarations", "colors.d.ts");
    assert_eq!(
        out,
        "declare const _styleDictionary: {\n\
         \x20 readonly color: {\n\
         \x20   readonly bg: {\n\
         \x20     readonly value: { dark: string; light: string };\n\
         \x20     readonly type: \"color\";\n\
         \x20   };\n\
         \x20   /**\n\
         \x20    * @deprecated Use bg\n\
         \x20    */\n\
         \x20   readonly old: {\n\
         \x20     readonly value: string;\n\
         \x20     readonly type: \"color\";\n\
         \x20   };\n\
         \x20 };\n\
         \x20 readonly size: {\n\
         \x20   /**\n\
         \x20    * Large * / gap\n\
         \x20    */\n\
         \x20   readonly \"1.5rem\": {\n\
         \x20     readonly value: number;\n\
         \x20     readonly type: \"dimension\";\n\
         \x20   };\n\
         \x20 };\n\
         };\n\
         \n\
         export = _styleDictionary;\n\
         export as namespace StyleDictionary;\n"
    );
}

#[test]
fn module_carries_jsdoc_and_merged_values() {
    let out = render("javascript/umd-with-modes", "colors.js");

    assert!(out.starts_with("(function (root, factory) {\n"));
    assert!(out.contains("      /** @deprecated Use bg */\n      \"old\": {\n"));
    assert!(out.contains("      /** Large * / gap */\n      \"1.5rem\": {\n"));
    assert!(out.ends_with("});\n"));

    // Without the JSDoc lines the returned literal is plain JSON.
    let start = out.find("return ").unwrap() + "return ".len();
    let end = out.rfind(";\n});").unwrap();
    let literal: String = out[start..end]
        .lines()
        .filter(|line| !line.trim_start().starts_with("/**"))
        .collect::<Vec<_>>()
        .join("\n");
    let body: Value = serde_json::from_str(&literal).unwrap();
    assert_eq!(body["color"]["bg"]["value"]["light"], "#fff");
    assert_eq!(body["color"]["bg"]["value"]["dark"], "#000");
    assert_eq!(body["color"]["old"]["deprecated_comment"], "Use bg");
    assert_eq!(body["size"]["1.5rem"]["value"], 24);
    assert_eq!(body["size"]["1.5rem"]["path"][1], "1.5rem");
}

#[test]
fn empty_dictionary_exports_an_empty_object() {
    let ctx = FormatContext::new("font.js").with_header(false);
    let out = FormatRegistry::default()
        .generate(&Dictionary::new(Vec::new()), "javascript/umd-with-modes", &ctx)
        .unwrap();
    assert!(out.contains("  return {};\n"));

    let ctx = FormatContext::new("font.d.ts").with_header(false);
    let out = FormatRegistry::default()
        .generate(&Dictionary::new(Vec::new()), "typescript/declarations", &ctx)
        .unwrap();
    assert!(out.starts_with("declare const _styleDictionary: {\n};\n"));
}
