use super::*;

#[test]
fn glyph_catalog_covers_every_variant_once() {
    assert_eq!(Glyph::ALL.len(), 10);
    for (i, a) in Glyph::ALL.iter().enumerate() {
        for (j, b) in Glyph::ALL.iter().enumerate() {
            if i == j {
                assert_eq!(a, b);
            } else {
                assert_ne!(a, b);
            }
        }
    }
}

#[test]
fn glyph_titles_are_nonempty() {
    for glyph in Glyph::ALL {
        assert!(!glyph.title().is_empty());
    }
}

#[test]
fn theme_glyph_titles_are_distinct() {
    assert_ne!(Glyph::Moon.title(), Glyph::Sun.title());
}
