use geofind_core::config::Options;
use geofind_core::control::GeocoderControl;
use geofind_core::language::{resolve, StaticLocaleProvider, DEFAULT_LANGUAGE};
use geofind_core::marker::RecordingMapHost;

fn build(options: Options, locales: &StaticLocaleProvider) -> GeocoderControl {
    GeocoderControl::new(options, locales, Box::new(RecordingMapHost::default()))
        .expect("options should validate")
}

#[test]
fn explicit_language_option_is_used_verbatim() {
    let locales = StaticLocaleProvider::new(&["fr_FR.UTF-8"]);
    let control = build(
        Options {
            language: Some("en-UK".to_string()),
            ..Default::default()
        },
        &locales,
    );
    assert_eq!(control.language().primary(), "en-UK");
}

#[test]
fn environment_language_is_picked_up_as_an_iso_tag() {
    let locales = StaticLocaleProvider::new(&["de_DE.UTF-8"]);
    let control = build(Options::default(), &locales);
    assert_eq!(control.language().primary(), "de-DE");
    assert_eq!(control.language().primary().split('-').count(), 2);
}

#[test]
fn resolution_always_yields_a_language() {
    let locales = StaticLocaleProvider::new(&[]);
    let list = resolve(None, &locales);
    assert_eq!(list.primary(), DEFAULT_LANGUAGE);
}

#[test]
fn placeholder_localizes_from_the_language_option() {
    let locales = StaticLocaleProvider::new(&[]);
    let control = build(
        Options {
            language: Some("de-DE".to_string()),
            ..Default::default()
        },
        &locales,
    );
    assert_eq!(control.placeholder(), "Suche");
}

#[test]
fn placeholder_uses_the_primary_of_a_language_list() {
    let locales = StaticLocaleProvider::new(&[]);
    let control = build(
        Options {
            language: Some("de-DE,lv".to_string()),
            ..Default::default()
        },
        &locales,
    );
    assert_eq!(control.placeholder(), "Suche");
}

#[test]
fn custom_placeholder_wins_over_localization() {
    let locales = StaticLocaleProvider::new(&[]);
    let control = build(
        Options {
            language: Some("de-DE".to_string()),
            placeholder: Some("foo to the bar".to_string()),
            ..Default::default()
        },
        &locales,
    );
    assert_eq!(control.placeholder(), "foo to the bar");
}
