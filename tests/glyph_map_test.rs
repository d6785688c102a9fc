use std::io::Write;

use bijoy_rs::error::GlyphMapError;
use bijoy_rs::glyph_map::GlyphMap;
use bijoy_rs::table::CONVERSION_TABLE;

fn apply(map: &GlyphMap, s: &str) -> String {
    let cps: Vec<char> = s.chars().collect();
    let mut out = String::new();
    map.apply(&cps, &mut out);
    out
}

#[test]
fn test_builtin_table_size() {
    let map = GlyphMap::builtin();
    // One duplicated key in the table
    assert_eq!(map.len(), CONVERSION_TABLE.len() - 1);
    assert_eq!(map.max_key_length(), 5);
}

#[test]
fn test_empty_map() {
    let map = GlyphMap::default();
    assert!(map.is_empty());
    assert_eq!(map.len(), 0);
}

#[test]
fn test_duplicate_key_last_wins() {
    let map = GlyphMap::builtin();
    assert_eq!(map.lookup("দ্ব"), Some("Ø"));
    assert_eq!(apply(&map, "দ্ব"), "Ø");
}

#[test]
fn test_longest_match_preferred() {
    let map = GlyphMap::builtin();
    let cps: Vec<char> = "ত্ত্বা".chars().collect();
    assert_eq!(map.longest_match(&cps, 0), Some((5, "Ë¡")));
    assert_eq!(map.longest_match(&cps, 5), Some((1, "v")));
    assert_eq!(map.longest_match(&cps, 6), None);
}

#[test]
fn test_longest_match_falls_back_to_prefix() {
    let map = GlyphMap::builtin();
    // ঙ্ক্ষ is a key, ঙ্ক্ is not: the walk must back off to ঙ্ক
    assert_eq!(apply(&map, "ঙ্ক্"), "¼&");
    assert_eq!(apply(&map, "ঙ্ক্ষ"), "•¶");
}

#[test]
fn test_documented_conjuncts_exact() {
    let map = GlyphMap::builtin();
    for &(key, glyph) in CONVERSION_TABLE.iter().filter(|(k, _)| k.chars().count() >= 3) {
        if key == "দ্ব" {
            continue;
        }
        assert_eq!(apply(&map, key), glyph, "conjunct {} split", key);
    }
}

#[test]
fn test_unmapped_pass_through() {
    let map = GlyphMap::builtin();
    assert_eq!(apply(&map, "abc ক ৺"), "abc K ৺");
}

#[test]
fn test_from_pairs_and_insert() {
    let mut map = GlyphMap::from_pairs([("ক", "K"), ("কক", "X")]);
    assert_eq!(apply(&map, "ককক"), "XK");

    map.insert("ক", "Q").unwrap();
    assert_eq!(map.len(), 2);
    assert!(!map.is_empty());
    assert_eq!(apply(&map, "ককক"), "XQ");

    assert!(matches!(map.insert("", "Z"), Err(GlyphMapError::EmptyKey)));
}

#[test]
fn test_overrides_from_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"দ্ব": "˜¡", "৺": "~"}}"#).unwrap();

    let map = GlyphMap::with_overrides_from_path(file.path()).unwrap();
    assert_eq!(map.lookup("দ্ব"), Some("˜¡"));
    assert_eq!(map.lookup("৺"), Some("~"));
    assert_eq!(map.lookup("ক"), Some("K"));
}

#[test]
fn test_overrides_errors() {
    let missing = GlyphMap::with_overrides_from_path(std::path::Path::new("/nonexistent/bijoy.json"));
    assert!(matches!(missing, Err(GlyphMapError::Io { .. })));

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();
    let invalid = GlyphMap::with_overrides_from_path(file.path());
    assert!(matches!(invalid, Err(GlyphMapError::Parse { .. })));

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"": "x"}}"#).unwrap();
    let empty = GlyphMap::with_overrides_from_path(file.path());
    assert!(matches!(empty, Err(GlyphMapError::EmptyKey)));
}
