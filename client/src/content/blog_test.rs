use super::*;

// =============================================================
// Helpers
// =============================================================

fn entry(id: &str, first_block: Option<ContentBlock>) -> BlogEntry {
    BlogEntry {
        id: id.to_owned(),
        title: format!("Post {id}"),
        image: format!("/assets/{id}.webp"),
        highlight: String::new(),
        date: "1 January 2025".to_owned(),
        time: None,
        author: None,
        detail: BlogDetail { content: first_block.into_iter().collect() },
    }
}

fn text(value: &str) -> ContentBlock {
    ContentBlock::Text { value: value.to_owned() }
}

// =============================================================
// Bundled content
// =============================================================

#[test]
fn bundled_content_parses() {
    let repo = StaticBlogRepository::bundled().unwrap();
    assert!(repo.entries().len() >= TEASER_LEN);
    assert_eq!(repo.entries()[0].id, "1");
}

#[test]
fn numeric_and_string_ids_are_accepted() {
    let json = r#"{"blogLists":[
        {"id":7,"title":"a","image":"i","highlight":"h","date":"d"},
        {"id":"slug","title":"b","image":"i","highlight":"h","date":"d"}
    ]}"#;
    let repo = StaticBlogRepository::from_json(json).unwrap();
    assert_eq!(repo.entries()[0].id, "7");
    assert_eq!(repo.entries()[1].id, "slug");
    assert!(repo.entries()[0].detail.content.is_empty());
}

#[test]
fn boolean_id_is_rejected() {
    let json = r#"{"blogLists":[{"id":true,"title":"a","image":"i","highlight":"h","date":"d"}]}"#;
    assert!(StaticBlogRepository::from_json(json).is_err());
}

#[test]
fn unknown_block_type_parses_as_unknown() {
    let block: ContentBlock = serde_json::from_str(r#"{"type":"video","url":"x"}"#).unwrap();
    assert_eq!(block, ContentBlock::Unknown);
}

// =============================================================
// EntryKind
// =============================================================

#[test]
fn text_first_entry_is_article() {
    assert_eq!(EntryKind::of(&entry("1", Some(text("hello")))), EntryKind::Article);
    assert_eq!(EntryKind::Article.label(), "Article");
}

#[test]
fn non_text_first_entry_is_news() {
    let image = ContentBlock::Image { src: "x".to_owned(), alt: String::new() };
    assert_eq!(EntryKind::of(&entry("1", Some(image))), EntryKind::News);
    assert_eq!(EntryKind::News.label(), "News");
}

#[test]
fn empty_content_is_news() {
    assert_eq!(EntryKind::of(&entry("1", None)), EntryKind::News);
}

// =============================================================
// BlogTeaser
// =============================================================

#[test]
fn teaser_features_first_and_lists_next_three() {
    let entries: Vec<BlogEntry> = (1..=6).map(|i| entry(&i.to_string(), None)).collect();
    let teaser = BlogTeaser::from_entries(&entries).unwrap();

    assert_eq!(teaser.featured.id, "1");
    let recent: Vec<&str> = teaser.recent.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(recent, ["2", "3", "4"]);
}

#[test]
fn teaser_with_fewer_entries_lists_what_exists() {
    let entries = vec![entry("a", None), entry("b", None)];
    let teaser = BlogTeaser::from_entries(&entries).unwrap();
    assert_eq!(teaser.featured.id, "a");
    assert_eq!(teaser.recent.len(), 1);
}

#[test]
fn teaser_of_empty_list_is_none() {
    assert_eq!(BlogTeaser::from_entries(&[]), None);
}

// =============================================================
// Repository
// =============================================================

#[test]
fn find_looks_up_by_id() {
    let repo = StaticBlogRepository::new(vec![entry("a", None), entry("b", None)]);
    assert_eq!(repo.find("b").map(|e| e.title.as_str()), Some("Post b"));
    assert!(repo.find("zzz").is_none());
}

#[test]
fn blog_source_derefs_to_repository() {
    let source = BlogSource::new(StaticBlogRepository::new(vec![entry("x", None)]));
    assert_eq!(source.entries().len(), 1);
    assert!(source.find("x").is_some());
}

#[test]
fn blog_href_builds_detail_route() {
    assert_eq!(blog_href("42"), "/blog/42");
}
