//! Word assembly and structuring tests.

use cvparse::{DocumentStructurer, Fragment, Line, StructureConfig, Word, WordAssembler};

fn assemble(texts: &[&str]) -> Vec<Word> {
    WordAssembler::assemble(texts.iter().copied())
}

fn classify(config: StructureConfig, texts: &[&str]) -> Vec<Line> {
    DocumentStructurer::new(config)
        .structure(&assemble(texts))
        .lines
}

#[test]
fn test_fragments_to_lines() {
    let fragments = [
        "•", " ", "Deve", "loped", " ", "UI", " ", "EXPERIENCE", " ", "Acme",
    ];
    assert_eq!(
        classify(StructureConfig::default(), &fragments),
        vec![
            Line::bullet("•", vec!["Developed", "UI"]),
            Line::heading("EXPERIENCE"),
            Line::text(vec!["Acme"]),
        ]
    );
}

#[test]
fn test_only_single_space_separates() {
    let words = assemble(&["Hello", "  ", "World", " ", " ", "again"]);
    let words: Vec<&str> = words.iter().map(Word::as_str).collect();
    assert_eq!(words, vec!["Hello  World", "again"]);
}

#[test]
fn test_assemble_fragments_keeps_order() {
    let fragments = vec![
        Fragment::new("ab", 1),
        Fragment::new(" ", 1),
        Fragment::new("cd", 2),
    ];
    let words = WordAssembler::assemble_fragments(&fragments);
    assert_eq!(words.len(), 2);
    assert_eq!(words[1].as_str(), "cd");
}

#[test]
fn test_custom_vocabulary() {
    let config = StructureConfig::empty()
        .with_heading_keyword("SKILLS")
        .with_bullet_marker("-")
        .with_bullet_terminator("References");

    let lines = classify(
        config,
        &["SKILLS", " ", "-", " ", "Rust", " ", "References", " ", "EDUCATION"],
    );
    assert_eq!(
        lines,
        vec![
            Line::heading("SKILLS"),
            Line::bullet("-", vec!["Rust"]),
            Line::text(vec!["References", "EDUCATION"]),
        ]
    );
}

#[test]
fn test_case_insensitive_matching() {
    let lines = classify(
        StructureConfig::default().case_insensitive(),
        &["Education", " ", "MIT"],
    );
    assert_eq!(
        lines,
        vec![Line::heading("Education"), Line::text(vec!["MIT"])]
    );

    let lines = classify(StructureConfig::default(), &["Education", " ", "MIT"]);
    assert_eq!(lines, vec![Line::text(vec!["Education", "MIT"])]);
}

#[test]
fn test_config_from_json() {
    let config = StructureConfig::from_json_str(
        r#"{ "heading_keywords": ["PROJECTS"], "case_sensitive": false }"#,
    )
    .unwrap();

    assert!(config.is_heading("projects"));
    assert!(!config.is_heading("EDUCATION"));
    // Omitted fields keep their defaults.
    assert!(config.is_bullet("•"));
    assert!(config.ends_bullet("Frontend"));
}

#[test]
fn test_config_rejects_empty_keyword() {
    assert!(StructureConfig::from_json_str(r#"{ "bullet_markers": [""] }"#).is_err());
}

#[test]
fn test_every_word_lands_in_one_line() {
    let texts = [
        "Jane", " ", "•", " ", "a", " ", "●", " ", "b", " ", "ACHIEVEMENTS", " ", "c", " ", "•",
    ];
    let words = assemble(&texts);
    let structure = DocumentStructurer::default().structure(&words);

    let total: usize = structure.iter().map(Line::word_count).sum();
    assert_eq!(total, words.len());
    assert_eq!(structure.bullet_count(), 3);
}
