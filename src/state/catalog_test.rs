use super::*;

// =============================================================
// Stat cards
// =============================================================

#[test]
fn stat_cards_hold_the_four_campaign_figures() {
    assert_eq!(STAT_CARDS.len(), 4);
    let figures = STAT_CARDS.iter().map(|c| (c.name, c.stat)).collect::<Vec<_>>();
    assert_eq!(
        figures,
        vec![
            ("Total Campaigns", "12"),
            ("Active Contacts", "2,100"),
            ("Emails Sent", "24,550"),
            ("Templates", "15"),
        ]
    );
}

#[test]
fn stat_card_tones_follow_the_page_order() {
    let tones = STAT_CARDS.iter().map(|c| c.tone).collect::<Vec<_>>();
    assert_eq!(tones, vec![Tone::Pink, Tone::Blue, Tone::Green, Tone::Purple]);
}

// =============================================================
// Sidebar navigation
// =============================================================

#[test]
fn nav_items_mirror_stat_cards_in_name_order_and_figure() {
    assert_eq!(NAV_ITEMS.len(), STAT_CARDS.len());
    for (nav, card) in NAV_ITEMS.iter().zip(STAT_CARDS.iter()) {
        assert_eq!(nav.name, card.name);
        assert_eq!(nav.count, card.stat);
        assert_eq!(nav.glyph, card.glyph);
    }
}

// =============================================================
// Quick actions
// =============================================================

#[test]
fn quick_actions_hold_the_three_labels() {
    let labels = QUICK_ACTIONS.iter().map(|a| a.name).collect::<Vec<_>>();
    assert_eq!(labels, vec!["New Campaign", "Import Contacts", "Create Template"]);
}

#[test]
fn quick_action_tones_are_distinct() {
    let tones = QUICK_ACTIONS.iter().map(|a| a.tone).collect::<Vec<_>>();
    assert_eq!(tones, vec![Tone::Indigo, Tone::Green, Tone::Purple]);
}

// =============================================================
// Tones
// =============================================================

#[test]
fn tone_slugs_are_unique_lowercase() {
    let tones = [Tone::Pink, Tone::Blue, Tone::Green, Tone::Purple, Tone::Indigo];
    for (i, a) in tones.iter().enumerate() {
        let slug = a.slug();
        assert_eq!(slug, slug.to_lowercase());
        for b in tones.iter().skip(i + 1) {
            assert_ne!(a.slug(), b.slug());
        }
    }
}
