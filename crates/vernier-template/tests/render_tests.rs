/*
 * render_tests.rs
 * Copyright (c) 2025 Vernier contributors
 *
 * End-to-end rendering tests for vernier-template.
 */

use pretty_assertions::assert_eq;
use vernier_template::{Context, Data, Template, TemplateError, render};

fn list_of(texts: &[&str]) -> Data {
    Data::list(texts.iter().copied().map(Data::from).collect())
}

#[test]
fn test_identity_render_for_directive_free_text() {
    let source = "a plain report line\nwith { nothing } special\n";
    let mut ctx = Context::new();
    assert_eq!(render(source, &mut ctx).unwrap(), source);
}

#[test]
fn test_nested_maps_resolve_dotted_paths() {
    let mut stats = Context::new();
    stats.insert("mean", "102 ns");
    stats.insert("stddev", "3 ns");

    let mut run = Context::new();
    run.insert("name", "push_back");
    run.insert("stats", stats);

    let mut ctx = Context::new();
    ctx.insert("run", run);

    assert_eq!(
        render("{$run.name}: {$run.stats.mean} +/- {$run.stats.stddev}", &mut ctx).unwrap(),
        "push_back: 102 ns +/- 3 ns"
    );
}

#[test]
fn test_absent_keys_render_their_own_placeholder() {
    let mut ctx = Context::new();
    assert_eq!(
        render("<td>{$benchmark.name}</td>", &mut ctx).unwrap(),
        "<td>{$benchmark.name}</td>"
    );
}

#[test]
fn test_loop_renders_rows_in_order() {
    let mut ctx = Context::new();
    ctx.insert("names", list_of(&["alpha", "beta", "gamma"]));

    assert_eq!(
        render("{% for n in names %}{$n},{% endfor %}", &mut ctx).unwrap(),
        "alpha,beta,gamma,"
    );

    ctx.insert("names", list_of(&["solo"]));
    assert_eq!(
        render("{% for n in names %}{$n},{% endfor %}", &mut ctx).unwrap(),
        "solo,"
    );

    ctx.insert("names", Data::list(vec![]));
    assert_eq!(
        render("{% for n in names %}{$n},{% endfor %}", &mut ctx).unwrap(),
        ""
    );
}

#[test]
fn test_loop_over_maps_renders_fields_per_item() {
    let mut first = Context::new();
    first.insert("name", "insert");
    first.insert("mean", "55 ns");
    let mut second = Context::new();
    second.insert("name", "erase");
    second.insert("mean", "61 ns");

    let mut ctx = Context::new();
    ctx.insert("runs", Data::list(vec![Data::map(first), Data::map(second)]));

    let source = "{% for run in runs %}{$loop.index0},{$run.name},{$run.mean}\n{% endfor %}";
    assert_eq!(
        render(source, &mut ctx).unwrap(),
        "0,insert,55 ns\n1,erase,61 ns\n"
    );
}

#[test]
fn test_conditional_sections_in_a_report() {
    let source = "{% if title %}# {$title}\n{% endif %}{% if not title %}# untitled\n{% endif %}";

    let mut ctx = Context::new();
    ctx.insert("title", "sort 1000 ints");
    assert_eq!(render(source, &mut ctx).unwrap(), "# sort 1000 ints\n");

    ctx.insert("title", "");
    assert_eq!(render(source, &mut ctx).unwrap(), "# untitled\n");
}

#[test]
fn test_comparison_against_quoted_literal() {
    let mut ctx = Context::new();
    ctx.insert("op", "multiply");

    let source = "{% if op == \"multiply\" %}geometric{% endif %}\
                  {% if op != \"multiply\" %}arithmetic{% endif %}";
    assert_eq!(render(source, &mut ctx).unwrap(), "geometric");

    ctx.insert("op", "add");
    assert_eq!(render(source, &mut ctx).unwrap(), "arithmetic");
}

#[test]
fn test_mixed_nesting_evaluates_in_source_order() {
    let mut ctx = Context::new();
    ctx.insert("verbose", "yes");
    ctx.insert("runs", list_of(&["a", "b"]));

    let source = "{% if verbose %}begin {% for r in runs %}{% if r == \"b\" %}<{$r}>{% endif %}{$r};{% endfor %}end{% endif %}";
    assert_eq!(render(source, &mut ctx).unwrap(), "begin a;<b>b;end");
}

#[test]
fn test_shared_handles_alias_between_context_and_caller() {
    let runs = list_of(&["first"]);
    let mut ctx = Context::new();
    ctx.insert("runs", runs.clone());

    // Growing the caller-held list is observed by the context binding.
    runs.push("second").unwrap();
    assert_eq!(
        render("{% for r in runs %}{$r} {% endfor %}", &mut ctx).unwrap(),
        "first second "
    );
}

#[test]
fn test_loop_variable_aliases_list_items_after_render() {
    let mut ctx = Context::new();
    ctx.insert("runs", list_of(&["a", "b"]));
    render("{% for r in runs %}{$r}{% endfor %}", &mut ctx).unwrap();

    // The leaked binding is the handle of the last item, not a copy.
    let bound = ctx.get("r").unwrap();
    let items = ctx.get("runs").unwrap().as_list().unwrap();
    bound.push("x").unwrap_err(); // still a scalar; just proving shape
    assert_eq!(bound.as_scalar().unwrap(), items[1].as_scalar().unwrap());
}

#[test]
fn test_json_results_render_into_a_csv_body() {
    let doc: serde_json::Value = serde_json::from_str(
        r#"{
            "benchmarks": [
                {"name": "fill", "mean": "12.3 ms", "outliers": "2"},
                {"name": "drain", "mean": "8.7 ms", "outliers": "0"}
            ]
        }"#,
    )
    .unwrap();

    let mut ctx = Data::from(doc).as_map().unwrap();
    let source = "name,mean,outliers\n{% for b in benchmarks %}{$b.name},{$b.mean},{$b.outliers}\n{% endfor %}";
    assert_eq!(
        render(source, &mut ctx).unwrap(),
        "name,mean,outliers\nfill,12.3 ms,2\ndrain,8.7 ms,0\n"
    );
}

#[test]
fn test_compile_reports_malformed_for_directive() {
    assert!(matches!(
        Template::compile("{% for broken %}{% endfor %}"),
        Err(TemplateError::MalformedDirective { .. })
    ));
}

#[test]
fn test_render_reports_type_mismatch_for_scalar_loop_source() {
    let mut ctx = Context::new();
    ctx.insert("xs", "scalar");
    assert!(matches!(
        render("{% for x in xs %}{$x}{% endfor %}", &mut ctx),
        Err(TemplateError::TypeMismatch { .. })
    ));
}

#[test]
fn test_literal_brace_passthrough_in_html() {
    let mut ctx = Context::new();
    ctx.insert("title", "t");
    assert_eq!(
        render("<style>body { margin: 0 }</style>{$title}", &mut ctx).unwrap(),
        "<style>body { margin: 0 }</style>t"
    );
}
