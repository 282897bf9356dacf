use super::*;

#[test]
fn entrance_delay_steps_by_stagger() {
    assert_eq!(entrance_delay_ms(0), 0);
    assert_eq!(entrance_delay_ms(1), 100);
    assert_eq!(entrance_delay_ms(2), 200);
    assert_eq!(entrance_delay_ms(3), 300);
}

#[test]
fn entrance_delay_saturates_instead_of_overflowing() {
    assert_eq!(entrance_delay_ms(usize::MAX), u32::MAX);
}

#[test]
fn entrance_style_embeds_duration_and_delay() {
    let style = entrance_style(entrance_delay_ms(2));
    assert!(style.contains("transition-duration: 500ms"));
    assert!(style.contains("transition-delay: 200ms"));
}

#[test]
fn actions_enter_after_the_last_card_starts() {
    assert!(ACTIONS_ENTRANCE_DELAY_MS > entrance_delay_ms(3));
}
