use glint::Highlighter;
use indoc::indoc;

fn render(code: &str, language: &str) -> String {
    Highlighter::new().unwrap().highlight(code, language).unwrap()
}

#[test]
fn javascript_declaration_scenario() {
    assert_eq!(
        render("const x = 10;", "javascript"),
        "<span class=\"js-keyword\">const</span> \
         <span class=\"js-variable\">x</span> \
         <span class=\"js-delimiter\">=</span> \
         <span class=\"js-number\">10</span>\
         <span class=\"js-delimiter\">;</span>"
    );
}

#[test]
fn html_comment_and_tag_scenario() {
    assert_eq!(
        render("<!-- note --> <h1>Hi</h1>", "html"),
        "<span class=\"html-comment\">&lt;!-- note --&gt;</span> \
         <span class=\"html-tag\">&lt;h1&gt;</span>Hi\
         <span class=\"html-tag\">&lt;/h1&gt;</span>"
    );
}

#[test]
fn declared_variable_usage_is_consistent() {
    let html = render("let count = 1;\ncount + 2;", "js");
    assert_eq!(html.matches("<span class=\"js-variable\">count</span>").count(), 2);
}

#[test]
fn keywords_inside_strings_stay_strings() {
    let html = render(r#"const s = "if (x) { return; }";"#, "javascript");
    assert!(html.contains("<span class=\"js-string\">\"if (x) { return; }\"</span>"));
    assert!(!html.contains("js-keyword\">if"));
    assert!(!html.contains("js-keyword\">return"));
    assert!(!html.contains("js-delimiter\">(</span>"));
}

#[test]
fn comments_absorb_string_literals() {
    let html = render("let n = 1; // say \"hi\"", "javascript");
    assert!(html.contains("<span class=\"js-comment\">// say \"hi\"</span>"));
    assert!(!html.contains("js-string"));
}

#[test]
fn unknown_language_passes_through_escaped() {
    let highlighter = Highlighter::new().unwrap();
    let (html, report) = highlighter
        .highlight_with_report("const x = <1>;", "brainfuck")
        .unwrap();
    assert_eq!(html, "const x = &lt;1&gt;;");
    assert_eq!(report.tokens, 0);
    assert!(!html.contains("<span"));
}

#[test]
fn function_parameters_are_wrapped_everywhere() {
    let html = render(
        indoc! {r#"
            function greet(name) {
                return name + "!";
            }
        "#},
        "javascript",
    );
    assert_eq!(html.matches("<span class=\"js-parameter\">name</span>").count(), 2);
    assert!(html.contains("<span class=\"js-function\">greet</span>"));
    assert!(html.contains("<span class=\"js-keyword\">return</span>"));
}

#[test]
fn arrow_function_heads_record_names_and_parameters() {
    let html = render("const add = (a, b) => a + b;", "javascript");
    assert!(html.contains("<span class=\"js-function\">add</span>"));
    assert_eq!(html.matches("<span class=\"js-parameter\">a</span>").count(), 2);
    assert_eq!(html.matches("<span class=\"js-parameter\">b</span>").count(), 2);
}

#[test]
fn keyword_tables_do_not_bleed_across_languages() {
    let html = render("def greet(): pass", "javascript");
    assert!(!html.contains("js-keyword"));
}

#[test]
fn escaping_happens_exactly_once() {
    let html = render("if (a < b && c > 0) {}", "javascript");
    assert!(html.contains("<span class=\"js-delimiter\">&lt;</span>"));
    assert!(html.contains("<span class=\"js-delimiter\">&amp;</span>"));
    assert!(!html.contains("&amp;amp;"));
    assert!(!html.contains("&amp;lt;"));
}

#[test]
fn restoration_leaves_no_marker_residue() {
    let highlighter = Highlighter::new().unwrap();
    let code = indoc! {r#"
        // fetch and log
        async function load(url) {
            const res = await fetch(url);
            let data = await res.json();
            console.log(`got ${data.length}`);
            return data;
        }
    "#};
    let (html, report) = highlighter.highlight_with_report(code, "javascript").unwrap();
    assert_eq!(report.residue, 0);
    assert!(report.tokens > 0);
    assert!(!html.contains('\u{1}'));
    assert!(!html.contains('\u{2}'));
}

#[test]
fn python_functions_builtins_and_assignments() {
    let html = render(
        indoc! {r#"
            def add(a, b):
                return a + b

            total = add(1, 2)
            print(total)
        "#},
        "python",
    );
    assert_eq!(html.matches("<span class=\"py-function\">add</span>").count(), 2);
    assert!(html.contains("<span class=\"py-parameter\">a</span>"));
    assert!(html.contains("<span class=\"py-keyword\">def</span>"));
    assert!(html.contains("<span class=\"py-builtin\">print</span>"));
    assert_eq!(html.matches("<span class=\"py-variable\">total</span>").count(), 2);
}

#[test]
fn python_triple_quoted_strings_swallow_keywords() {
    let html = render("x = \"\"\"for while\nif\"\"\"", "python");
    assert!(html.contains("<span class=\"py-string\">\"\"\"for while\nif\"\"\"</span>"));
    assert!(!html.contains("py-keyword"));
}

#[test]
fn java_methods_annotations_and_locals() {
    let html = render(
        indoc! {r#"
            @Override
            public int add(int a, int b) {
                int count = 0;
                return a + b + count;
            }
        "#},
        "java",
    );
    assert!(html.contains("<span class=\"java-builtin\">@Override</span>"));
    assert!(html.contains("<span class=\"java-function\">add</span>"));
    assert_eq!(html.matches("<span class=\"java-parameter\">a</span>").count(), 2);
    assert_eq!(html.matches("<span class=\"java-variable\">count</span>").count(), 2);
    assert!(html.contains("<span class=\"java-keyword\">public</span>"));
}

#[test]
fn html_doctype_is_its_own_category() {
    let html = render("<!DOCTYPE html>\n<p>x</p>", "html");
    assert!(html.contains("<span class=\"html-doctype\">&lt;!DOCTYPE html&gt;</span>"));
    assert!(html.contains("<span class=\"html-tag\">&lt;p&gt;</span>"));
}

#[test]
fn unterminated_html_comment_fails_open() {
    let html = render("<!-- dangling <h1>Hi</h1>", "html");
    assert!(html.starts_with("<span class=\"html-comment\">&lt;!-- dangling"));
    assert!(!html.contains("html-tag"));
}

#[test]
fn css_selectors_properties_and_values() {
    let html = render(
        indoc! {r#"
            /* layout */
            h1, .title { color: #fff; margin: 10px; }
        "#},
        "css",
    );
    assert!(html.contains("<span class=\"css-comment\">/* layout */</span>"));
    assert!(html.contains("<span class=\"css-selector\">h1, .title "));
    assert!(html.contains("<span class=\"css-property\">color</span>"));
    assert!(html.contains("<span class=\"css-number\">#fff</span>"));
    assert!(html.contains("<span class=\"css-number\">10px</span>"));
}

#[test]
fn css_functions_are_builtins() {
    let html = render(".box { width: calc(100% - 20px); }", "css");
    assert!(html.contains("<span class=\"css-builtin\">calc</span>"));
    assert!(html.contains("<span class=\"css-number\">100%</span>"));
    assert!(html.contains("<span class=\"css-property\">width</span>"));
}

#[test]
fn line_comments_do_not_swallow_following_lines() {
    let html = render("// don't stop\nconst x = 1;", "javascript");
    assert!(html.contains("<span class=\"js-comment\">// don't stop</span>"));
    assert!(html.contains("<span class=\"js-keyword\">const</span>"));
}

#[test]
fn unterminated_strings_stop_at_the_line_break() {
    let html = render("let a = 'oops\nlet b = 2;", "javascript");
    assert!(html.contains("<span class=\"js-string\">'oops</span>"));
    assert_eq!(html.matches("<span class=\"js-keyword\">let</span>").count(), 2);
}

#[test]
fn builtins_take_precedence_over_declared_function_names() {
    let html = render("function log() { return 1; }", "javascript");
    assert!(html.contains("<span class=\"js-builtin\">log</span>"));
    assert!(!html.contains("js-function\">log"));
}

#[test]
fn tag_spans_cover_quoted_attribute_values() {
    let html = render("<a title=\"x>y\">link</a>", "html");
    assert!(html.contains("<span class=\"html-tag\">&lt;a title=\"x&gt;y\"&gt;</span>"));
}

#[test]
fn statement_initial_comparisons_are_not_declarations() {
    let html = render("x == y\nz = 1", "python");
    assert!(!html.contains("py-variable\">x"));
    assert_eq!(html.matches("<span class=\"py-variable\">z</span>").count(), 1);
}

#[test]
fn aliases_resolve_to_the_same_definition() {
    let a = render("const x = 1;", "js");
    let b = render("const x = 1;", "javascript");
    assert_eq!(a, b);
    assert!(a.contains("js-keyword"));
}
