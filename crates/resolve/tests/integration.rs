use miniwing_core::{merge_tokens, TokenTable, UtilityFamily};
use miniwing_resolve::literal::literal_names;
use miniwing_resolve::{assemble, resolve, Resolver, UtilityRule, HEADER, RULES};
use pretty_assertions::assert_eq;
use serde_json::json;

const TOKENS_JSON: &str = include_str!("../../../tokens.json");

fn project_tokens() -> TokenTable {
    TokenTable::from_json_str(TOKENS_JSON).expect("tokens.json should be valid JSON")
}

#[test]
fn test_end_to_end_minimal_tokens() {
    // 1. 准备 token 表
    let tokens = TokenTable::from_json_value(&json!({
        "colors": { "blue": "#3b82f6" },
        "spacing": { "2": "0.5rem" }
    }));

    // 2. 组装
    let css = assemble(&["bg-blue", "p-2", "unknown-class", "flex"], &tokens);

    // 3. 验证输出
    let expected = format!(
        "{}{}\n{}\n{}\n",
        HEADER,
        ".bg-blue { background-color: #3b82f6; }",
        ".p-2 { padding: 0.5rem; }",
        ".flex { display: flex; }"
    );
    assert_eq!(css, expected);
}

#[test]
fn test_literal_fidelity() {
    let rule = resolve("flex", &TokenTable::new()).unwrap();
    assert_eq!(rule.to_string(), ".flex { display: flex; }");
}

#[test]
fn test_token_driven_fidelity_after_merge() {
    let base = project_tokens();
    let merged = merge_tokens(&base, &json!({ "colors": { "brand": "#ff5500" } }));

    let rule = resolve("bg-brand", &merged).unwrap();
    assert_eq!(rule.to_string(), ".bg-brand { background-color: #ff5500; }");

    // 基础表未被修改
    assert!(resolve("bg-brand", &base).is_none());
}

#[test]
fn test_composite_expansion() {
    let tokens = project_tokens();
    assert_eq!(
        resolve("px-4", &tokens).unwrap().to_string(),
        ".px-4 { padding-left: 1rem; padding-right: 1rem; }"
    );
    assert_eq!(
        resolve("my-2", &tokens).unwrap().to_string(),
        ".my-2 { margin-top: 0.5rem; margin-bottom: 0.5rem; }"
    );
}

#[test]
fn test_dimension_fallback_chain() {
    let tokens = project_tokens();
    assert!(!tokens.spacing.contains_key("full"));

    assert_eq!(
        resolve("w-full", &tokens).unwrap().to_string(),
        ".w-full { width: 100%; }"
    );
    assert_eq!(
        resolve("h-screen", &tokens).unwrap().to_string(),
        ".h-screen { height: 100vh; }"
    );
    assert_eq!(
        resolve("top-1/2", &tokens).unwrap().to_string(),
        ".top-1/2 { top: 50%; }"
    );
    assert_eq!(resolve("left-0", &TokenTable::new()).unwrap().body(), "left: 0;");
    assert!(resolve("top-0", &TokenTable::new()).is_none());
}

#[test]
fn test_spacing_token_shadows_keyword() {
    let mut tokens = TokenTable::new();
    tokens.spacing.insert("full".to_string(), "42px".to_string());
    assert_eq!(resolve("w-full", &tokens).unwrap().body(), "width: 42px;");
}

#[test]
fn test_assembler_passes_duplicates_through() {
    let css = assemble(&["flex", "bogus", "flex"], &TokenTable::new());
    assert_eq!(
        css,
        format!("{}.flex {{ display: flex; }}\n.flex {{ display: flex; }}\n", HEADER)
    );
}

#[test]
fn test_resolution_is_deterministic() {
    let tokens = project_tokens();
    let classes = ["text-lg", "shadow", "rounded", "z-10", "opacity-50", "rotate-45"];
    let first = assemble(&classes, &tokens);
    for _ in 0..3 {
        assert_eq!(assemble(&classes, &tokens), first);
    }
    for class in classes {
        assert_eq!(resolve(class, &tokens), resolve(class, &tokens));
    }
}

#[test]
fn test_unknown_class_names() {
    let tokens = project_tokens();
    let unknown = [
        "",
        "bg-",
        "bg-nope",
        "p-999",
        "hover:bg-blue",
        "bg-[#fff]",
        "md:flex",
        "Flex",
        "rounded-DEFAULT",
        "shadow-DEFAULT",
    ];
    for class in unknown {
        assert!(resolve(class, &tokens).is_none(), "{} should not resolve", class);
    }
}

#[test]
fn test_text_prefix_precedence() {
    // 颜色和字号同名时颜色优先
    let tokens = TokenTable::from_json_value(&json!({
        "colors": { "lg": "#111111" },
        "typography": { "fontSize": { "lg": "1.125rem", "xl": "1.25rem" } }
    }));

    assert_eq!(resolve("text-lg", &tokens).unwrap().body(), "color: #111111;");
    assert_eq!(resolve("text-xl", &tokens).unwrap().body(), "font-size: 1.25rem;");
    // 对齐字面量先于 token 查找
    assert_eq!(resolve("text-center", &tokens).unwrap().body(), "text-align: center;");
}

#[test]
fn test_default_keys_and_keyword_literals() {
    let tokens = project_tokens();
    assert_eq!(
        resolve("rounded", &tokens).unwrap().body(),
        "border-radius: 0.25rem;"
    );
    assert_eq!(
        resolve("rounded-full", &tokens).unwrap().body(),
        "border-radius: 9999px;"
    );
    assert_eq!(resolve("shadow-none", &tokens).unwrap().body(), "box-shadow: none;");
    assert!(resolve("rounded", &TokenTable::new()).is_none());
}

#[test]
fn test_computed_utilities() {
    let tokens = TokenTable::new();
    assert_eq!(
        resolve("transition-colors", &tokens).unwrap().body(),
        "transition-property: colors; transition-timing-function: cubic-bezier(0.4, 0, 0.2, 1); transition-duration: 150ms;"
    );
    assert_eq!(
        resolve("duration-300", &tokens).unwrap().body(),
        "transition-duration: 300ms;"
    );
    assert_eq!(
        resolve("scale-95", &tokens).unwrap().body(),
        "--tw-scale-x: 95; --tw-scale-y: 95; transform: scale(var(--tw-scale-x), var(--tw-scale-y));"
    );
    assert_eq!(
        resolve("rotate-45", &tokens).unwrap().body(),
        "--tw-rotate: 45deg; transform: rotate(var(--tw-rotate));"
    );
    assert_eq!(
        resolve("translate-4", &tokens).unwrap().body(),
        "--tw-translate-x: 4; transform: translateX(var(--tw-translate-x));"
    );
}

#[test]
fn test_project_vocabulary_has_single_claimant() {
    let tokens = project_tokens();
    let resolver = Resolver::new(&tokens);

    let mut classes: Vec<String> = literal_names().map(str::to_string).collect();
    for rule in RULES {
        if let UtilityRule::Token(rule) = rule {
            classes.extend(
                tokens
                    .category(rule.category)
                    .keys()
                    .filter(|key| Some(key.as_str()) != rule.bare_key)
                    .map(|key| format!("{}-{}", rule.prefix, key)),
            );
            if let Some(keywords) = rule.keywords {
                classes.extend(keywords.keys().map(|key| format!("{}-{}", rule.prefix, key)));
            }
            if rule.bare_key.is_some() {
                classes.push(rule.prefix.to_string());
            }
        }
    }

    for class in &classes {
        let claimants = resolver.claimants(class);
        assert_eq!(claimants.len(), 1, "{} claimed by {:?}", class, claimants);
    }
}

#[test]
fn test_families_toggled_by_config() {
    let tokens = project_tokens();
    let (utilities, diagnostics) = miniwing_core::UtilitySet::from_toggles(
        [
            ("padding".to_string(), false),
            ("display".to_string(), false),
        ]
        .iter()
        .map(|(k, v)| (k, v)),
    );
    assert!(diagnostics.is_empty());

    let resolver = Resolver::with_utilities(&tokens, utilities);
    assert!(resolver.resolve("p-4").is_none());
    assert!(resolver.resolve("px-4").is_none());
    assert!(resolver.resolve("flex").is_none());
    assert!(resolver.resolve("m-4").is_some());
    assert_eq!(
        resolver.resolve_with_family("grid").map(|(family, _)| family),
        Some(UtilityFamily::Grid)
    );
}

const TRANSFORM_BODY: &str = "transform: translateX(var(--tw-translate-x, 0)) translateY(var(--tw-translate-y, 0)) rotate(var(--tw-rotate, 0)) skewX(var(--tw-skew-x, 0)) skewY(var(--tw-skew-y, 0)) scaleX(var(--tw-scale-x, 1)) scaleY(var(--tw-scale-y, 1));";

#[test]
fn test_every_literal_declaration() {
    let cases = [
        ("block", "display: block;"),
        ("inline-block", "display: inline-block;"),
        ("inline", "display: inline;"),
        ("flex", "display: flex;"),
        ("inline-flex", "display: inline-flex;"),
        ("hidden", "display: none;"),
        ("grid", "display: grid;"),
        ("inline-grid", "display: inline-grid;"),
        ("visible", "visibility: visible;"),
        ("invisible", "visibility: hidden;"),
        ("flex-row", "flex-direction: row;"),
        ("flex-col", "flex-direction: column;"),
        ("flex-wrap", "flex-wrap: wrap;"),
        ("flex-nowrap", "flex-wrap: nowrap;"),
        ("items-center", "align-items: center;"),
        ("items-start", "align-items: flex-start;"),
        ("items-end", "align-items: flex-end;"),
        ("justify-center", "justify-content: center;"),
        ("justify-start", "justify-content: flex-start;"),
        ("justify-end", "justify-content: flex-end;"),
        ("justify-between", "justify-content: space-between;"),
        ("justify-around", "justify-content: space-around;"),
        ("text-center", "text-align: center;"),
        ("text-left", "text-align: left;"),
        ("text-right", "text-align: right;"),
        ("text-justify", "text-align: justify;"),
        ("static", "position: static;"),
        ("relative", "position: relative;"),
        ("absolute", "position: absolute;"),
        ("fixed", "position: fixed;"),
        ("sticky", "position: sticky;"),
        ("overflow-auto", "overflow: auto;"),
        ("overflow-hidden", "overflow: hidden;"),
        ("overflow-visible", "overflow: visible;"),
        ("overflow-scroll", "overflow: scroll;"),
        ("cursor-pointer", "cursor: pointer;"),
        ("cursor-default", "cursor: default;"),
        ("cursor-not-allowed", "cursor: not-allowed;"),
        ("cursor-move", "cursor: move;"),
        ("whitespace-normal", "white-space: normal;"),
        ("whitespace-nowrap", "white-space: nowrap;"),
        ("whitespace-pre", "white-space: pre;"),
        ("whitespace-pre-line", "white-space: pre-line;"),
        ("whitespace-pre-wrap", "white-space: pre-wrap;"),
        ("pointer-events-none", "pointer-events: none;"),
        ("pointer-events-auto", "pointer-events: auto;"),
        ("select-none", "user-select: none;"),
        ("select-text", "user-select: text;"),
        ("select-all", "user-select: all;"),
        ("select-auto", "user-select: auto;"),
        ("transform", TRANSFORM_BODY),
        ("border", "border-width: 1px;"),
        ("rounded-none", "border-radius: 0;"),
        ("rounded-full", "border-radius: 9999px;"),
        ("shadow-none", "box-shadow: none;"),
    ];

    // 字面量表的每一项都要在这里出现
    assert_eq!(cases.len(), literal_names().count());

    let tokens = TokenTable::new();
    for (class, body) in cases {
        let rule = resolve(class, &tokens).unwrap_or_else(|| panic!("{} should resolve", class));
        assert_eq!(rule.body(), body, "{}", class);
    }
}

#[test]
fn test_every_token_rule_declaration() {
    let cases = [
        ("bg-blue", "background-color: #3b82f6;"),
        ("text-red", "color: #ef4444;"),
        ("p-4", "padding: 1rem;"),
        ("pt-1", "padding-top: 0.25rem;"),
        ("pb-2", "padding-bottom: 0.5rem;"),
        ("pl-3", "padding-left: 0.75rem;"),
        ("pr-5", "padding-right: 1.25rem;"),
        ("m-6", "margin: 1.5rem;"),
        ("mt-8", "margin-top: 2rem;"),
        ("mb-10", "margin-bottom: 2.5rem;"),
        ("ml-12", "margin-left: 3rem;"),
        ("mr-16", "margin-right: 4rem;"),
        ("mx-px", "margin-left: 1px; margin-right: 1px;"),
        ("my-0.5", "margin-top: 0.125rem; margin-bottom: 0.125rem;"),
        ("px-20", "padding-left: 5rem; padding-right: 5rem;"),
        ("py-24", "padding-top: 6rem; padding-bottom: 6rem;"),
        ("w-32", "width: 8rem;"),
        ("h-40", "height: 10rem;"),
        ("text-2xl", "font-size: 1.5rem;"),
        ("font-semibold", "font-weight: 600;"),
        ("rounded-lg", "border-radius: 0.5rem;"),
        ("opacity-25", "opacity: 0.25;"),
        ("z-30", "z-index: 30;"),
        ("top-48", "top: 12rem;"),
        ("right-56", "right: 14rem;"),
        ("bottom-64", "bottom: 16rem;"),
        ("left-2", "left: 0.5rem;"),
        ("border-green", "border-color: #22c55e;"),
        (
            "shadow-md",
            "box-shadow: 0 4px 6px -1px rgb(0 0 0 / 0.1), 0 2px 4px -2px rgb(0 0 0 / 0.1);",
        ),
        ("leading-snug", "line-height: 1.375;"),
        ("tracking-wider", "letter-spacing: 0.05em;"),
    ];

    let tokens = project_tokens();
    let resolver = Resolver::new(&tokens);
    let resolved: Vec<(&str, UtilityFamily)> = cases
        .iter()
        .map(|&(class, body)| {
            let (family, rule) = resolver
                .resolve_with_family(class)
                .unwrap_or_else(|| panic!("{} should resolve", class));
            assert_eq!(rule.body(), body, "{}", class);
            (class, family)
        })
        .collect();

    // 每条 token 规则至少有一个用例命中
    let token_rules: Vec<_> = RULES
        .iter()
        .filter_map(|rule| match rule {
            UtilityRule::Token(rule) => Some(rule),
            _ => None,
        })
        .collect();
    assert_eq!(cases.len(), token_rules.len());
    for rule in token_rules {
        let prefix = format!("{}-", rule.prefix);
        assert!(
            resolved
                .iter()
                .any(|(class, family)| class.starts_with(&prefix) && *family == rule.family),
            "no case covers {} ({:?})",
            rule.prefix,
            rule.family
        );
    }
}

#[test]
fn test_whole_number_overrides_render_as_integers() {
    let merged = merge_tokens(
        &TokenTable::new(),
        &json!({ "zIndex": { "modal": 100.0 }, "opacity": { "full": 1.0 } }),
    );
    assert_eq!(resolve("z-modal", &merged).unwrap().body(), "z-index: 100;");
    assert_eq!(resolve("opacity-full", &merged).unwrap().body(), "opacity: 1;");
}
