//! Unit tests for [`Optional`], the accessor for foci that may be absent.

use std::collections::BTreeMap;

use lenspath::{Lens, Optional, identity};
use rstest::rstest;

// =============================================================================
// Test Structures
// =============================================================================

#[derive(Clone, PartialEq, Debug)]
struct Profile {
    spouse: Option<Box<Profile>>,
    name: String,
}

fn spouse() -> Lens<Profile, Option<Box<Profile>>> {
    Lens::named(
        "spouse",
        |profile: &Profile| &profile.spouse,
        |profile: &Profile, spouse| Profile {
            spouse,
            name: profile.name.clone(),
        },
    )
}

fn name() -> Lens<Profile, String> {
    Lens::named(
        "name",
        |profile: &Profile| &profile.name,
        |profile: &Profile, name| Profile {
            spouse: profile.spouse.clone(),
            name,
        },
    )
}

fn unboxed() -> Lens<Box<Profile>, Profile> {
    Lens::new(|boxed: &Box<Profile>| &**boxed, |_, profile| Box::new(profile))
}

fn single(name: &str) -> Profile {
    Profile {
        spouse: None,
        name: name.to_owned(),
    }
}

fn married(name: &str, spouse: &str) -> Profile {
    Profile {
        spouse: Some(Box::new(single(spouse))),
        name: name.to_owned(),
    }
}

type Scores = BTreeMap<&'static str, i32>;

/// A key lookup in a map, absent when the key is missing.
fn entry(key: &'static str) -> Optional<Scores, i32> {
    Optional::new(
        move |map: &Scores| map.get(key),
        move |map: &Scores, value| {
            map.contains_key(key).then(|| {
                let mut copy = map.clone();
                copy.insert(key, value);
                copy
            })
        },
    )
}

// =============================================================================
// Absence
// =============================================================================

/// Test that reading through a missing option is absent
#[test]
fn test_get_option_absent() {
    let spouse_name = spouse().some().compose(unboxed()).compose(name());
    assert_eq!(spouse_name.get_option(&single("Azusa")), None);
    assert!(!spouse_name.is_present(&single("Azusa")));
}

/// Test that reading through a present option finds the focus
#[test]
fn test_get_option_present() {
    let spouse_name = spouse().some().compose(unboxed()).compose(name());
    let profile = married("Yui", "Azusa");
    assert_eq!(spouse_name.get_option(&profile).map(String::as_str), Some("Azusa"));
    assert_eq!(spouse_name.path().to_string(), "spouse?.<fn>.name");
}

/// Test that writing through a missing option changes nothing
#[test]
fn test_set_through_absent_is_noop() {
    let spouse_name = spouse().some().compose(unboxed()).compose(name());
    let profile = single("Azusa");

    assert_eq!(spouse_name.try_set(&profile, "Ui".to_owned()), None);
    assert_eq!(spouse_name.set(&profile, "Ui".to_owned()), profile);
    assert_eq!(spouse_name.update(&profile, |name| name.to_uppercase()), profile);
    assert_eq!(spouse_name.try_update(&profile, |name| name.to_uppercase()), None);
}

/// Test that writing through a present option rebuilds the path
#[test]
fn test_set_through_present() {
    let spouse_name = spouse().some().compose(unboxed()).compose(name());
    let profile = married("Yui", "Azusa");
    let updated = spouse_name.set(&profile, "Ui".to_owned());

    assert_eq!(updated, married("Yui", "Ui"));
    assert_eq!(profile, married("Yui", "Azusa"));
}

// =============================================================================
// Custom optionals
// =============================================================================

#[rstest]
#[case("guitar", Some(1))]
#[case("drums", None)]
fn test_custom_optional_get(#[case] key: &'static str, #[case] expected: Option<i32>) {
    let map = BTreeMap::from([("guitar", 1), ("bass", 2)]);
    assert_eq!(entry(key).get_option(&map).copied(), expected);
}

/// Test that a custom optional never inserts a missing key
#[test]
fn test_custom_optional_set() {
    let map = BTreeMap::from([("guitar", 1)]);
    assert_eq!(entry("guitar").set(&map, 5), BTreeMap::from([("guitar", 5)]));
    assert_eq!(entry("drums").set(&map, 5), map);
}

/// Test that two optionals compose and stay absent if either step is
#[test]
fn test_compose_optional() {
    let nested = Optional::<Vec<Scores>, Scores>::element(1).compose_optional(entry("bass"));
    let maps = vec![BTreeMap::new(), BTreeMap::from([("bass", 2)])];

    assert_eq!(nested.get_option(&maps), Some(&2));
    assert_eq!(nested.set(&maps, 4)[1], BTreeMap::from([("bass", 4)]));
    assert_eq!(nested.get_option(&maps[..1].to_vec()), None);
}

/// Test that a lens composes with an optional
#[test]
fn test_lens_compose_optional() {
    let bass = identity::<Scores>().compose_optional(entry("bass"));
    assert_eq!(bass.get_option(&BTreeMap::from([("bass", 3)])), Some(&3));
}

// =============================================================================
// Dual Forms and Identity
// =============================================================================

/// Test view, viewer, setter and modifier on an optional
#[test]
fn test_dual_forms() {
    let first = Optional::<Vec<String>, String>::element(0);
    let names = vec!["Azusa".to_owned(), "Yui".to_owned()];

    assert_eq!(first.view(&names, String::len), Some(5));
    assert_eq!(first.view(&Vec::new(), String::len), None);

    let initial = first.viewer(|name: &String| name.chars().next());
    assert_eq!(initial(&names), Some(Some('A')));

    let rename = first.setter("Mio".to_owned());
    assert_eq!(rename(&names)[0], "Mio");
    assert_eq!(rename(&Vec::new()), Vec::<String>::new());

    let shout = first.modifier(|name: &String| name.to_uppercase());
    assert_eq!(shout(&names)[0], "AZUSA");
}

/// Test that the default optional is the always-present identity
#[test]
fn test_default_is_identity() {
    let whole = Optional::<i32, i32>::default();
    assert_eq!(whole.get_option(&4), Some(&4));
    assert_eq!(whole.set(&4, 5), 5);
    assert!(whole.path().is_empty());
}

/// Test present() on a bare Option
#[test]
fn test_present() {
    let inside = Optional::<Option<i32>, i32>::present();
    assert_eq!(inside.set(&Some(1), 2), Some(2));
    assert_eq!(inside.set(&None, 2), None);
    assert_eq!(inside.path().to_string(), "?");
}
