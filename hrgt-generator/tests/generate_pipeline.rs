use std::fs;
use std::path::{Path, PathBuf};

use hrgt_core::{GenerationConfig, RenderMethod};
use hrgt_generator::{ErrorKind, Generator, SUCCESS_STATUS};
use tempfile::TempDir;

const HTML_TPL: &str = "\
<!doctype html>
<main>
{{#each entries}}<article id=\"{{id}}\"><h2>{{term}}</h2>{{{glossaryText}}}</article>
{{/each}}</main>
";

const MUSTACHE_TPL: &str = "\
<main>
{{#each entries}}<article id=\"{{id}}\"><h2>{{term}}</h2>{{glossaryText}}</article>
{{/each}}</main>
";

fn mrg(entries: &[(&str, &str, &str)]) -> String {
    let mut yaml = String::from("terminology:\n  scopetag: tev2\nentries:\n");
    for (id, term, text) in entries {
        yaml.push_str(&format!(
            "  - id: {id}\n    term: {term}\n    glossaryText: \"{text}\"\n"
        ));
    }
    yaml
}

fn alpha_beta() -> String {
    mrg(&[
        ("a", "Alpha", "definition of *alpha*"),
        ("b", "Beta", "definition of beta"),
    ])
}

/// Scope with a SAF pointing at `glossaries/mrg.yaml`.
fn scope_with_default_mrg(content: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("glossaries")).unwrap();
    fs::write(
        dir.path().join("saf.yaml"),
        "scope:\n  glossarydir: glossaries\n  mrgfile: mrg.yaml\n",
    )
    .unwrap();
    fs::write(dir.path().join("glossaries").join("mrg.yaml"), content).unwrap();
    dir
}

fn html_config(scopedir: &Path, template: PathBuf) -> GenerationConfig {
    GenerationConfig {
        method: RenderMethod::Html,
        scopedir: scopedir.to_path_buf(),
        input: None,
        output: "index".to_string(),
        template: Some(template),
    }
}

fn ids_in_order(html: &str) -> Vec<String> {
    html.split("<article id=\"")
        .skip(1)
        .map(|rest| rest.split('"').next().unwrap_or_default().to_string())
        .collect()
}

#[tokio::test]
async fn two_entries_render_in_order_with_emphasis() {
    let out = scope_with_default_mrg(&alpha_beta());
    let tpl_dir = TempDir::new().unwrap();
    let template = tpl_dir.path().join("t.tmpl");
    fs::write(&template, HTML_TPL).unwrap();

    let report = Generator::new(html_config(out.path(), template))
        .generate()
        .await
        .expect("generate");

    assert_eq!(report.to_string(), SUCCESS_STATUS);
    assert_eq!(report.output_path, out.path().join("index.html"));
    assert_eq!(report.entry_count, 2);

    let html = fs::read_to_string(out.path().join("index.html")).unwrap();
    assert_eq!(ids_in_order(&html), ["a", "b"]);
    assert!(html.contains("<em>alpha</em>"), "{html}");
}

#[tokio::test]
async fn handlebars_method_name_renders_definition_list_template() {
    let out = scope_with_default_mrg(&alpha_beta());
    let template = out.path().join("glossary.hbs");
    fs::write(
        &template,
        "{{#each entries}}<dt>{{term}}</dt><dd>{{{glossaryText}}}</dd>{{/each}}",
    )
    .unwrap();
    let config = GenerationConfig {
        method: "handlebars".parse().unwrap(),
        template: Some(template),
        scopedir: out.path().to_path_buf(),
        ..Default::default()
    };

    Generator::new(config).generate().await.expect("generate");

    let html = fs::read_to_string(out.path().join("index.html")).unwrap();
    assert_eq!(
        html,
        "<dt>Alpha</dt><dd><p>definition of <em>alpha</em></p>\n</dd>\
         <dt>Beta</dt><dd><p>definition of beta</p>\n</dd>"
    );
}

#[tokio::test]
async fn glob_matches_concatenate_in_match_order() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("mrg")).unwrap();
    fs::write(dir.path().join("mrg").join("2-second.yaml"), mrg(&[("c", "C", "c")])).unwrap();
    fs::write(
        dir.path().join("mrg").join("1-first.yaml"),
        mrg(&[("a", "A", "a"), ("b", "B", "b")]),
    )
    .unwrap();
    fs::write(dir.path().join("mrg").join("3-third.yaml"), mrg(&[("a", "A2", "dup")])).unwrap();
    fs::write(dir.path().join("template.mustache"), MUSTACHE_TPL).unwrap();

    let config = GenerationConfig {
        method: RenderMethod::Mustache,
        scopedir: dir.path().to_path_buf(),
        input: Some("mrg/*.yaml".to_string()),
        output: "glossary".to_string(),
        template: None,
    };
    let report = Generator::new(config).generate().await.expect("generate");

    assert_eq!(report.fragments, 3);
    let html = fs::read_to_string(dir.path().join("glossary.html")).unwrap();
    assert_eq!(ids_in_order(&html), ["a", "b", "c", "a"]);
}

#[tokio::test]
async fn generating_twice_is_byte_identical() {
    let out = scope_with_default_mrg(&alpha_beta());
    let template = out.path().join("t.tmpl");
    fs::write(&template, HTML_TPL).unwrap();
    let generator = Generator::new(html_config(out.path(), template));

    generator.generate().await.unwrap();
    let first = fs::read(out.path().join("index.html")).unwrap();
    generator.generate().await.unwrap();
    let second = fs::read(out.path().join("index.html")).unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn mustache_method_leaves_markdown_unrendered() {
    let out = scope_with_default_mrg(&alpha_beta());
    fs::write(out.path().join("template.mustache"), MUSTACHE_TPL).unwrap();
    let config = GenerationConfig {
        method: RenderMethod::Mustache,
        scopedir: out.path().to_path_buf(),
        ..Default::default()
    };

    Generator::new(config).generate().await.unwrap();
    let html = fs::read_to_string(out.path().join("index.html")).unwrap();
    assert!(html.contains("definition of *alpha*"), "{html}");
    assert!(!html.contains("<em>"));
}

#[tokio::test]
async fn zero_entries_still_write_template_structure() {
    let out = scope_with_default_mrg("terminology:\n  scopetag: tev2\nentries: []\n");
    let template = out.path().join("t.tmpl");
    fs::write(&template, HTML_TPL).unwrap();

    let report = Generator::new(html_config(out.path(), template))
        .generate()
        .await
        .unwrap();
    assert_eq!(report.entry_count, 0);
    let html = fs::read_to_string(out.path().join("index.html")).unwrap();
    assert_eq!(html, "<!doctype html>\n<main>\n</main>\n");
}

#[tokio::test]
async fn missing_template_fails_without_touching_existing_output() {
    let out = scope_with_default_mrg(&alpha_beta());
    let existing = out.path().join("index.html");
    fs::write(&existing, "keep me").unwrap();

    let err = Generator::new(html_config(out.path(), out.path().join("missing.tmpl")))
        .generate()
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Template);
    assert_eq!(fs::read_to_string(&existing).unwrap(), "keep me");
}

#[tokio::test]
async fn missing_template_creates_no_output() {
    let out = scope_with_default_mrg(&alpha_beta());
    let err = Generator::new(html_config(out.path(), out.path().join("missing.tmpl")))
        .generate()
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Template);
    assert!(!out.path().join("index.html").exists());
}

#[tokio::test]
async fn missing_saf_is_glossary_source_failure() {
    let dir = TempDir::new().unwrap();
    let template = dir.path().join("t.tmpl");
    fs::write(&template, HTML_TPL).unwrap();

    let err = Generator::new(html_config(dir.path(), template))
        .generate()
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::GlossarySource);
    assert!(err.to_string().contains("(default MRG)"), "{err}");
}

#[tokio::test]
async fn missing_scopedir_for_output_is_write_failure() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("mrg.yaml"), alpha_beta()).unwrap();
    fs::write(dir.path().join("template.mustache"), MUSTACHE_TPL).unwrap();

    // Absolute input outside the (nonexistent) scope directory.
    let input = dir.path().join("mrg.yaml").to_string_lossy().into_owned();
    let scopedir = dir.path().join("absent");
    let config = GenerationConfig {
        method: RenderMethod::Html,
        scopedir: scopedir.clone(),
        input: Some(input),
        output: "index".to_string(),
        template: Some(dir.path().join("t.tmpl")),
    };
    fs::write(dir.path().join("t.tmpl"), HTML_TPL).unwrap();

    let err = Generator::new(config).generate().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Write);
    assert!(!scopedir.exists());
}
