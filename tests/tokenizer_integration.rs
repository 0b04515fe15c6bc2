use std::fs;

use tempfile::TempDir;

use compound_tokenizer::{NormalizerConfig, Tokenizer, TokenizerConfig};

const COMPONENTS: &str = "\
# Baustoffe und Bauteile
brand
schutz
konzept
stahl
beton
decke
wärme
dämm
dämmung
verbund
system
haus
tür
";

fn setup(config: &TokenizerConfig) -> (TempDir, Tokenizer) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("components.txt");
    fs::write(&path, COMPONENTS).unwrap();
    let tokenizer = Tokenizer::new(&path, config).unwrap();
    (dir, tokenizer)
}

fn unstemmed() -> TokenizerConfig {
    TokenizerConfig::default().with_normalizers(NormalizerConfig::without_stemming())
}

#[test]
fn sentence_yields_originals_then_segments() {
    let (_dir, tokenizer) = setup(&unstemmed());

    let tokens = tokenizer.tokenize("Brandschutzkonzept für die Stahlbetondecke.");
    assert_eq!(
        tokens,
        vec![
            "brandschutzkonzept",
            "brand",
            "schutz",
            "konzept",
            "für",
            "fur",
            "die",
            "stahlbetondecke",
            "stahl",
            "beton",
            "decke",
        ]
    );
}

#[test]
fn long_compound() {
    let (_dir, tokenizer) = setup(&unstemmed().with_lowercase_original(false));

    assert_eq!(
        tokenizer.tokenize("Wärmedämmverbundsystem"),
        vec!["warme", "damm", "verbund", "system"]
    );
}

#[test]
fn hyphen_separates_runs() {
    let (_dir, tokenizer) = setup(&unstemmed().with_lowercase_original(false));

    assert_eq!(
        tokenizer.tokenize("Brand-Schutz"),
        vec!["brand", "schutz"]
    );
}

#[test]
fn dictionary_changes_through_tokenizer() {
    let (dir, tokenizer) = setup(&unstemmed().with_lowercase_original(false));

    assert!(tokenizer.add_word("Fenster").unwrap());
    assert!(!tokenizer.add_word("fenster").unwrap());
    assert_eq!(tokenizer.tokenize("Fensterrahmen"), vec!["fensterrahmen"]);

    assert!(tokenizer.add_word("rahmen").unwrap());
    assert_eq!(tokenizer.tokenize("Fensterrahmen"), vec!["fenster", "rahmen"]);

    assert!(tokenizer.remove_word("Rahmen").unwrap());
    assert!(!tokenizer.remove_word("rahmen").unwrap());
    assert_eq!(tokenizer.tokenize("Fensterrahmen"), vec!["fensterrahmen"]);

    // Mutations rewrite the source in canonical form
    let source = fs::read_to_string(dir.path().join("components.txt")).unwrap();
    assert!(!source.contains('#'));
    assert!(source.contains("fenster\n"));
}

#[test]
fn rebuild_keeps_behavior() {
    let (_dir, tokenizer) = setup(&unstemmed());
    let before = tokenizer.tokenize("Brandschutz Haustür");

    tokenizer.rebuild_dictionary().unwrap();
    assert_eq!(tokenizer.tokenize("Brandschutz Haustür"), before);
    assert_eq!(tokenizer.dictionary_word_count(), 13);
}

#[test]
fn config_from_json() {
    let config = TokenizerConfig::from_json_str(
        r#"{ "lowercase_original": false, "normalizers": { "stem_german": false } }"#,
    )
    .unwrap();
    let (_dir, tokenizer) = setup(&config);

    assert_eq!(
        tokenizer.tokenize("Stahlbetondecke"),
        vec!["stahl", "beton", "decke"]
    );
}

#[test]
fn positions_follow_word_runs() {
    let (_dir, tokenizer) = setup(&unstemmed().with_lowercase_original(false));

    assert_eq!(
        tokenizer.tokenize_with_positions("Haustür, Brandschutz"),
        vec![
            ("haus".to_string(), 0),
            ("tur".to_string(), 0),
            ("brand".to_string(), 1),
            ("schutz".to_string(), 1),
        ]
    );
}
