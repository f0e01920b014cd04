use super::*;
use arcade_shelf_catalog::LegacyMapping;
use serde_json::json;

fn game(title: &str, category: &str) -> GameRecord {
    GameRecord::new(title).with_category(category)
}

fn slug_of<'a>(classifier: &Classifier<'a>, title: &str, category: &str) -> &'a str {
    classifier.classify(&game(title, category)).definition.slug.as_str()
}

// -- Single-record scoring --

#[test]
fn test_keyword_match_wins() {
    let table = CategoryTable::builtin();
    let classifier = Classifier::new(&table).unwrap();

    let assignment = classifier.classify(&game("Moto X3M", "/t/racing/"));
    assert_eq!(assignment.definition.slug, "racing");
    // "moto" keyword plus the current-category bonus
    assert_eq!(assignment.placement, Placement::Scored(7));
}

#[test]
fn test_current_category_bonus_keeps_category() {
    let table = CategoryTable::builtin();
    let classifier = Classifier::new(&table).unwrap();

    let assignment = classifier.classify(&game("Slope", "/sports/"));
    assert_eq!(assignment.definition.slug, "sports");
    assert_eq!(assignment.placement, Placement::Scored(CURRENT_CATEGORY_BONUS));
}

#[test]
fn test_below_threshold_falls_back_to_default() {
    let table = CategoryTable::builtin();
    let classifier = Classifier::new(&table).unwrap();

    let assignment = classifier.classify(&game("Zzqx Thing", "/xyz123/"));
    assert_eq!(assignment.definition.slug, DEFAULT_CATEGORY);
    assert_eq!(assignment.placement, Placement::Default);
}

#[test]
fn test_keyword_substrings_count_inside_words() {
    let table = CategoryTable::builtin();
    let classifier = Classifier::new(&table).unwrap();

    // "puzzle" is a substring of "puzzleless"
    assert_eq!(slug_of(&classifier, "Zzqx Puzzleless Thing", "/xyz123/"), "puzzle");
}

#[test]
fn test_legacy_mapping_used_when_nothing_scores() {
    let table = CategoryTable::builtin();
    let classifier = Classifier::new(&table).unwrap();

    let assignment = classifier.classify(&game("Zzqx", "/car/"));
    assert_eq!(assignment.definition.slug, "vehicle-simulator");
    assert_eq!(assignment.placement, Placement::Legacy);

    assert_eq!(slug_of(&classifier, "Zzqx", "/t/car/"), "vehicle-simulator");
    assert_eq!(slug_of(&classifier, "Zzqx", "/t/arcade/"), "classic");
}

#[test]
fn test_legacy_token_mapped_to_nothing_uses_default() {
    let table = CategoryTable::builtin();
    let classifier = Classifier::new(&table).unwrap();

    let assignment = classifier.classify(&game("Zzqx", "/html5/"));
    assert_eq!(assignment.definition.slug, DEFAULT_CATEGORY);
    assert_eq!(assignment.placement, Placement::Default);
}

#[test]
fn test_ties_go_to_earlier_definition() {
    let table = CategoryTable::builtin();
    let classifier = Classifier::new(&table).unwrap();

    // puzzle and board both score 2; puzzle comes first in the table
    assert_eq!(slug_of(&classifier, "Chess Puzzle", "/html5/"), "puzzle");
    // puzzle and classic both list "tetris"
    assert_eq!(slug_of(&classifier, "Tetris", "/new-games/"), "puzzle");
}

#[test]
fn test_empty_title() {
    let table = CategoryTable::builtin();
    let classifier = Classifier::new(&table).unwrap();

    assert_eq!(slug_of(&classifier, "", "/html5/"), DEFAULT_CATEGORY);
    assert_eq!(slug_of(&classifier, "", "/sports/"), "sports");
    assert_eq!(slug_of(&classifier, "", ""), DEFAULT_CATEGORY);
}

#[test]
fn test_repeated_keyword_counts_twice() {
    let defs = vec![
        CategoryDefinition::new("racing", "Racing", "🏎️", &["race"]),
        CategoryDefinition::new("puzzle", "Puzzle", "🧩", &["race", "race"]),
        CategoryDefinition::new("casual", "Casual", "🎪", &[]),
    ];
    let table = CategoryTable::new(defs, LegacyMapping::new()).unwrap();
    let classifier = Classifier::new(&table).unwrap();

    let assignment = classifier.classify(&game("Race", "/xyz/"));
    assert_eq!(assignment.definition.slug, "puzzle");
    assert_eq!(assignment.placement, Placement::Scored(4));
}

#[test]
fn test_score_definition() {
    let def = CategoryDefinition::new("racing", "Racing", "🏎️", &["race", "car", "DRIFT"]);
    assert_eq!(score_definition(&def, "car drift race", "html5"), 6);
    assert_eq!(score_definition(&def, "car drift race", "racing"), 11);
    assert_eq!(score_definition(&def, "zzqx", "racing"), 5);
    assert_eq!(score_definition(&def, "zzqx", "action"), 0);
}

#[test]
fn test_table_without_default_rejected() {
    let table = CategoryTable::empty();
    assert!(matches!(
        Classifier::new(&table),
        Err(CatalogError::NoDefaultCategory(_))
    ));
}

// -- Whole-corpus runs --

fn sample_corpus() -> Vec<GameRecord> {
    let mut papa = game("Papa's Pizzeria", "/t/html5/")
        .with_urls("https://example.com/papas", "https://example.com/embed/papas");
    papa.extra.insert("rating".to_string(), json!(4.5));

    vec![
        game("Moto X3M", "/t/racing/"),
        game("Chess Puzzle", "/html5/"),
        game("Zzqx Thing", "/xyz123/"),
        game("Zzqx", "/car/"),
        game("Slope", "/sports/"),
        game("", "/new-games/"),
        papa,
    ]
}

#[test]
fn test_classify_corpus_assigns_every_record() {
    let table = CategoryTable::builtin();
    let classifier = Classifier::new(&table).unwrap();
    let corpus = sample_corpus();

    let classified = classifier.classify_corpus(&corpus);
    assert_eq!(classified.games.len(), corpus.len());

    for (before, after) in corpus.iter().zip(&classified.games) {
        assert_eq!(before.title, after.title);
        let def = table
            .get(after.category_slug())
            .expect("every output category is defined");
        assert_eq!(after.category, format!("/{}/", def.slug));
        assert_eq!(after.category_name, def.display_name);
        assert_eq!(after.category_icon, def.icon);
    }
}

#[test]
fn test_classify_corpus_keeps_other_fields() {
    let table = CategoryTable::builtin();
    let classifier = Classifier::new(&table).unwrap();
    let corpus = sample_corpus();

    let classified = classifier.classify_corpus(&corpus);
    let papa = classified.games.last().unwrap();
    assert_eq!(papa.source_url, "https://example.com/papas");
    assert_eq!(papa.embed_url, "https://example.com/embed/papas");
    assert_eq!(papa.extra.get("rating"), Some(&json!(4.5)));
    // html5 maps to nothing
    assert_eq!(papa.category, "/casual/");
}

#[test]
fn test_classify_corpus_leaves_input_untouched() {
    let table = CategoryTable::builtin();
    let classifier = Classifier::new(&table).unwrap();
    let corpus = sample_corpus();
    let snapshot = corpus.clone();

    let _ = classifier.classify_corpus(&corpus);
    assert_eq!(corpus, snapshot);
}

#[test]
fn test_classify_corpus_report() {
    let table = CategoryTable::builtin();
    let classifier = Classifier::new(&table).unwrap();

    let report = classifier.classify_corpus(&sample_corpus()).report;
    assert_eq!(report.total(), 7);
    assert_eq!(report.scored, 3);
    assert_eq!(report.legacy, 1);
    assert_eq!(report.defaulted, 3);

    let originals: Vec<_> = report.original_categories.iter().map(String::as_str).collect();
    assert_eq!(
        originals,
        vec!["car", "html5", "new-games", "racing", "sports", "xyz123"]
    );
}

#[test]
fn test_summary_counts_reconcile() {
    let table = CategoryTable::builtin();
    let classifier = Classifier::new(&table).unwrap();

    let classified = classifier.classify_corpus(&sample_corpus());
    let summaries = &classified.report.summaries;

    let total: usize = summaries.iter().map(|s| s.count).sum();
    assert_eq!(total, classified.games.len());
    assert!(summaries.iter().all(|s| s.count > 0));
    assert!(summaries.windows(2).all(|w| w[0].count >= w[1].count));
    assert_eq!(summaries[0].slug, DEFAULT_CATEGORY);
    assert_eq!(summaries[0].count, 3);
}

#[test]
fn test_classification_is_idempotent() {
    let table = CategoryTable::builtin();
    let classifier = Classifier::new(&table).unwrap();

    let once = classifier.classify_corpus(&sample_corpus());
    let twice = classifier.classify_corpus(&once.games);
    assert_eq!(once.games, twice.games);
    assert_eq!(once.report.summaries, twice.report.summaries);
}

#[test]
fn test_classify_empty_corpus() {
    let table = CategoryTable::builtin();
    let classifier = Classifier::new(&table).unwrap();

    let classified = classifier.classify_corpus(&[]);
    assert!(classified.games.is_empty());
    assert_eq!(classified.report.total(), 0);
    assert!(classified.report.summaries.is_empty());
}
