use plume_editor_core::Mark;
use plume_toolbar::{KeyChord, Modifiers, mark_for_chord};

#[test]
fn primary_chords_map_to_their_marks() {
    assert_eq!(mark_for_chord(&KeyChord::primary("b")), Some(Mark::Bold));
    assert_eq!(mark_for_chord(&KeyChord::primary("i")), Some(Mark::Italic));
    assert_eq!(
        mark_for_chord(&KeyChord::primary("u")),
        Some(Mark::Underlined)
    );
    assert_eq!(mark_for_chord(&KeyChord::primary("`")), Some(Mark::Code));
}

#[test]
fn unmapped_keys_are_not_intercepted() {
    assert_eq!(mark_for_chord(&KeyChord::primary("x")), None);
    assert_eq!(mark_for_chord(&KeyChord::primary("1")), None);
}

#[test]
fn bare_keys_are_not_intercepted() {
    let chord = KeyChord::new("b", Modifiers::default());
    assert_eq!(mark_for_chord(&chord), None);
}

#[test]
fn extra_modifiers_defeat_the_match() {
    let chord = KeyChord::new(
        "b",
        Modifiers {
            shift: true,
            ..Modifiers::primary()
        },
    );
    assert_eq!(mark_for_chord(&chord), None);

    let chord = KeyChord::new(
        "b",
        Modifiers {
            alt: true,
            ..Modifiers::primary()
        },
    );
    assert_eq!(mark_for_chord(&chord), None);
}
