//! Content-prepare hook and file-based configuration.

mod common;

use std::io::Write;

use common::{members, region};
use contactinfo::{Config, Engine, Error, Language};

#[test]
fn handled_context_rewrites_in_place() {
    let engine = Engine::new(members(), Config::default()).unwrap();
    let mut text = format!("Hi {}", region("id=1", "[firstname]"));

    assert!(engine.prepare_content("com_content.article", &mut text).unwrap());
    assert_eq!(text, "Hi Max");
}

#[test]
fn custom_module_context_is_handled() {
    let engine = Engine::new(members(), Config::default()).unwrap();
    let mut text = region("id=3", "[lastname]");

    assert!(engine.prepare_content("mod_custom.content", &mut text).unwrap());
    assert_eq!(text, "Musterfrau");
}

#[test]
fn other_context_is_skipped() {
    let engine = Engine::new(members(), Config::default()).unwrap();
    let original = region("id=1", "[firstname]");
    let mut text = original.clone();

    assert!(!engine.prepare_content("com_content.category", &mut text).unwrap());
    assert_eq!(text, original);
}

#[test]
fn text_without_region_reports_no_change() {
    let engine = Engine::new(members(), Config::default()).unwrap();
    let mut text = "nothing to do".to_string();

    assert!(!engine.prepare_content("com_content.article", &mut text).unwrap());
    assert_eq!(text, "nothing to do");
}

#[test]
fn configured_contexts_replace_defaults() {
    let config = Config::default().with_contexts(["newsletter"]);
    let engine = Engine::new(members(), config).unwrap();

    let mut text = region("id=1", "[firstname]");
    assert!(!engine.prepare_content("com_content.article", &mut text).unwrap());
    assert!(engine.prepare_content("newsletter", &mut text).unwrap());
    assert_eq!(text, "Max");
}

// ============================================================================
// Config files
// ============================================================================

fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn yaml_config_drives_rendering() {
    let file = write_temp(
        ".yaml",
        "prefix_class: team_\nuse_css_styling: 1\nlanguage: de\n",
    );
    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.language, Language::De);

    let engine = Engine::new(members(), config).unwrap();
    assert_eq!(
        engine.transform(&region("id=2", "[firstname]")).unwrap(),
        "<span class=\"team_member_data\"><span class=\"team_field-firstname\">Erika</span></span>"
    );
    assert_eq!(
        engine.transform(&region("query=lastname:Mustermann", "x")).unwrap(),
        "Die Abfrage ist nicht eindeutig: 2 Datensätze gefunden."
    );
}

#[test]
fn json_config_with_message_override() {
    let file = write_temp(
        ".json",
        r#"{ "messages": { "not_unique": "{count} matches", "no_record": "none" } }"#,
    );
    let engine = Engine::new(members(), Config::load(file.path()).unwrap()).unwrap();

    assert_eq!(
        engine.transform(&region("query=firstname:Max", "x")).unwrap(),
        "2 matches"
    );
    assert_eq!(
        engine.transform(&region("query=firstname:Nobody", "x")).unwrap(),
        "none"
    );
}

#[test]
fn unsupported_config_extension() {
    let file = write_temp(".ini", "use_css_styling=1");
    assert!(matches!(
        Config::load(file.path()),
        Err(Error::UnsupportedFormat(_))
    ));
}

#[test]
fn malformed_yaml_config() {
    let file = write_temp(".yml", "use_css_styling: [1, 2]\n");
    assert!(matches!(Config::load(file.path()), Err(Error::Yaml(_))));
}
