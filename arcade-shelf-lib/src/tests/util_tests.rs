use super::*;

#[test]
fn test_thumbnail_path_remote() {
    let game = GameRecord::new("Slope").with_thumbnail("https://cdn.example.com/slope.jpg");
    assert_eq!(thumbnail_path(&game), "https://cdn.example.com/slope.jpg");
}

#[test]
fn test_thumbnail_path_local_is_encoded() {
    let mut game = GameRecord::new("Papa's Pizzeria").with_thumbnail("https://cdn.example.com/p.jpg");
    game.local_thumbnail_ref = "Papa's Pizzeria.jpg".into();
    assert_eq!(
        thumbnail_path(&game),
        "/improved-game-data/images/Papa%27s%20Pizzeria.jpg"
    );
}

#[test]
fn test_validate_record() {
    let game = GameRecord::new("Slope")
        .with_category("racing")
        .with_urls("https://example.com/slope", "https://example.com/embed/slope");
    assert!(validate_record(&game).is_ok());

    let mut missing_frame = game.clone();
    missing_frame.embed_url = "  ".into();
    assert!(matches!(
        validate_record(&missing_frame),
        Err(CatalogError::MissingField("gameFrame"))
    ));

    let untitled = GameRecord::new("").with_category("racing");
    assert!(matches!(
        validate_record(&untitled),
        Err(CatalogError::MissingField("title"))
    ));
}

#[test]
fn test_plural() {
    assert_eq!(plural(1, "game"), "1 game");
    assert_eq!(plural(0, "game"), "0 games");
    assert_eq!(plural(12, "record"), "12 records");
    assert_eq!(plural(2, "category"), "2 categories");
    assert_eq!(plural(3, "day"), "3 days");
}
