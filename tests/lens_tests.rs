//! Unit tests for lenses built by hand.
//!
//! This module exercises [`Lens`] without the derive macro:
//!
//! - construction with `Lens::new` / `Lens::named`
//! - get, set, update and their dual forms (view, viewer, setter, modifier)
//! - composition, identity and the free functions
//! - navigation with `index`, `some` and `shared`
//! - structural sharing of untouched children

use std::collections::VecDeque;
use std::sync::Arc;

use lenspath::{Lens, compose, get, identity, set, update};
use rstest::rstest;

// =============================================================================
// Test Structures
// =============================================================================

#[derive(Clone, PartialEq, Debug)]
struct Account {
    kind: String,
    handle: String,
}

#[derive(Clone, PartialEq, Debug)]
struct Person {
    name: String,
    age: u32,
    accounts: Vec<Arc<Account>>,
    nickname: Option<String>,
}

fn name() -> Lens<Person, String> {
    Lens::named(
        "name",
        |person: &Person| &person.name,
        |person: &Person, name| Person {
            name,
            ..person.clone()
        },
    )
}

fn age() -> Lens<Person, u32> {
    Lens::named(
        "age",
        |person: &Person| &person.age,
        |person: &Person, age| Person {
            age,
            ..person.clone()
        },
    )
}

fn accounts() -> Lens<Person, Vec<Arc<Account>>> {
    Lens::named(
        "accounts",
        |person: &Person| &person.accounts,
        |person: &Person, accounts| Person {
            accounts,
            ..person.clone()
        },
    )
}

fn nickname() -> Lens<Person, Option<String>> {
    Lens::named(
        "nickname",
        |person: &Person| &person.nickname,
        |person: &Person, nickname| Person {
            nickname,
            ..person.clone()
        },
    )
}

fn kind() -> Lens<Account, String> {
    Lens::named(
        "kind",
        |account: &Account| &account.kind,
        |account: &Account, kind| Account {
            kind,
            handle: account.handle.clone(),
        },
    )
}

fn handle() -> Lens<Account, String> {
    Lens::named(
        "handle",
        |account: &Account| &account.handle,
        |account: &Account, handle| Account {
            kind: account.kind.clone(),
            handle,
        },
    )
}

fn account(kind: &str, handle: &str) -> Arc<Account> {
    Arc::new(Account {
        kind: kind.to_owned(),
        handle: handle.to_owned(),
    })
}

fn azusa() -> Person {
    Person {
        name: "Nakano Azusa".to_owned(),
        age: 15,
        accounts: vec![
            account("twitter", "@azusa"),
            account("facebook", "nakano.azusa"),
        ],
        nickname: None,
    }
}

// =============================================================================
// Basic Operations
// =============================================================================

/// Test that a lens reads its field
#[test]
fn test_lens_get() {
    let person = azusa();
    assert_eq!(name().get(&person), "Nakano Azusa");
    assert_eq!(*age().get(&person), 15);
}

/// Test that set returns a new root and leaves the original alone
#[test]
fn test_lens_set_does_not_mutate() {
    let person = azusa();
    let updated = age().set(&person, 16);

    assert_eq!(updated.age, 16);
    assert_eq!(person.age, 15);
    assert_eq!(updated.name, person.name);
}

/// Test that set copies siblings shallowly
#[test]
fn test_lens_set_shares_untouched_children() {
    let person = azusa();
    let updated = name().set(&person, "中野梓".to_owned());

    assert!(Arc::ptr_eq(&updated.accounts[0], &person.accounts[0]));
    assert!(Arc::ptr_eq(&updated.accounts[1], &person.accounts[1]));
}

/// Test that update applies the function to the current focus
#[test]
fn test_lens_update() {
    let person = azusa();
    let older = age().update(&person, |age| age + 1);
    assert_eq!(older.age, 16);
}

#[rstest]
#[case(0, 0)]
#[case(15, 15)]
#[case(15, 30)]
fn test_lens_set_then_get(#[case] start: u32, #[case] value: u32) {
    let person = Person {
        age: start,
        ..azusa()
    };
    assert_eq!(*age().get(&age().set(&person, value)), value);
}

// =============================================================================
// Dual Forms
// =============================================================================

/// Test that view applies a projection to the focus
#[test]
fn test_view_projects_focus() {
    let kinds = accounts().view(&azusa(), |accounts| {
        accounts
            .iter()
            .map(|account| account.kind.clone())
            .collect::<Vec<_>>()
    });
    assert_eq!(kinds, vec!["twitter", "facebook"]);
}

/// Test that a viewer can be stored and reused
#[test]
fn test_viewer_is_reusable() {
    let count = accounts().viewer(Vec::len);
    let person = azusa();
    let without_accounts = accounts().set(&person, Vec::new());

    assert_eq!(count(&person), 2);
    assert_eq!(count(&without_accounts), 0);
}

/// Test that a stored setter writes the same value to any root
#[test]
fn test_setter_is_reusable() {
    let rename = name().setter("Azusa".to_owned());
    let first = rename(&azusa());
    let second = rename(&Person {
        age: 16,
        ..azusa()
    });

    assert_eq!(first.name, "Azusa");
    assert_eq!(second.name, "Azusa");
    assert_eq!(second.age, 16);
}

/// Test that a modifier reverses the words of a name
#[test]
fn test_modifier_reverses_name() {
    let reverse = name().modifier(|name: &String| {
        name.split(' ').rev().collect::<Vec<_>>().join(" ")
    });
    assert_eq!(reverse(&azusa()).name, "Azusa Nakano");
}

/// Test that a setter of an inner lens composes as the modifier of an outer one
#[test]
fn test_modifier_accepts_inner_setter() {
    let first_account = accounts().index(0).shared();
    let write = first_account.modifier(handle().setter("yui".to_owned()));
    let updated = write(&azusa());

    assert_eq!(updated.accounts[0].handle, "yui");
    assert_eq!(updated.accounts[0].kind, "twitter");
    assert_eq!(azusa().accounts[0].handle, "@azusa");
}

// =============================================================================
// Composition
// =============================================================================

/// Test that compose reads and writes through both lenses
#[test]
fn test_compose_get_and_set() {
    let first_kind = accounts().index(0).shared().compose(kind());
    let person = azusa();

    assert_eq!(first_kind.get_option(&person).map(String::as_str), Some("twitter"));
    let updated = first_kind.set(&person, "mastodon".to_owned());
    assert_eq!(updated.accounts[0].kind, "mastodon");
    assert_eq!(person.accounts[0].kind, "twitter");
}

/// Test that the free functions agree with the methods
#[test]
fn test_free_functions() {
    let person = azusa();
    let lens = compose(identity::<Person>(), name());

    assert_eq!(get(&lens, &person), "Nakano Azusa");
    assert_eq!(set(&lens, "Azusa".to_owned(), &person).name, "Azusa");
    assert_eq!(
        update(&lens, |name| name.to_uppercase(), &person).name,
        "NAKANO AZUSA"
    );
}

/// Test that identity is a unit on both sides
#[test]
fn test_identity_is_unit() {
    let person = azusa();
    let left = identity::<Person>().compose(age());
    let right = age().compose(identity::<u32>());

    assert_eq!(left.get(&person), age().get(&person));
    assert_eq!(right.set(&person, 3), age().set(&person, 3));
    assert_eq!(left.path().to_string(), "age");
    assert_eq!(right.path().to_string(), "age");
}

/// Test that composed lenses report the full path
#[test]
fn test_composed_path() {
    let lens = identity::<Person>().compose(accounts()).index(1).shared().compose(handle());
    assert_eq!(lens.path().to_string(), "accounts[1].handle");
}

// =============================================================================
// Navigation
// =============================================================================

/// Test that an out of range index reads as absent and writes as a no-op
#[test]
fn test_index_out_of_range() {
    let lens = accounts().index(5).shared().compose(handle());
    let person = azusa();

    assert_eq!(lens.get_option(&person), None);
    assert_eq!(lens.set(&person, "nobody".to_owned()), person);
}

/// Test that some() never materializes a missing value
#[test]
fn test_some_does_not_autovivify() {
    let lens = nickname().some();
    let person = azusa();

    assert_eq!(lens.get_option(&person), None);
    assert_eq!(lens.set(&person, "Azunyan".to_owned()).nickname, None);

    let named = nickname().set(&person, Some("Azusa".to_owned()));
    assert_eq!(
        lens.set(&named, "Azunyan".to_owned()).nickname.as_deref(),
        Some("Azunyan")
    );
}

/// Test that index works on every sequence type
#[test]
fn test_index_on_sequences() {
    let array = identity::<[i32; 3]>().index(2);
    assert_eq!(array.set(&[1, 2, 3], 9), [1, 2, 9]);

    let deque = identity::<VecDeque<i32>>().index(0);
    let source: VecDeque<i32> = VecDeque::from(vec![1, 2]);
    assert_eq!(deque.set(&source, 7), VecDeque::from(vec![7, 2]));

    let shared_slice = identity::<Arc<[i32]>>().index(1);
    let slice: Arc<[i32]> = Arc::from(vec![1, 2]);
    assert_eq!(&*shared_slice.set(&slice, 5), &[1, 5]);
    assert_eq!(&*slice, &[1, 2]);

    let shared_vec = identity::<Arc<Vec<i32>>>().index(1);
    let vector = Arc::new(vec![1, 2]);
    assert_eq!(*shared_vec.set(&vector, 5), vec![1, 5]);
}

/// Test that shared() rebuilds one Arc and leaves the old one intact
#[test]
fn test_shared_rebuilds_one_arc() {
    let lens = identity::<Arc<Account>>().shared().compose(handle());
    let original = account("twitter", "@azusa");
    let updated = lens.set(&original, "@azunyan".to_owned());

    assert!(!Arc::ptr_eq(&original, &updated));
    assert_eq!(updated.handle, "@azunyan");
    assert_eq!(original.handle, "@azusa");
}

/// Test that cloned lenses behave identically
#[test]
fn test_clone_behaves_the_same() {
    let lens = accounts().index(1).shared().compose(handle());
    let copy = lens.clone();
    let person = azusa();

    assert_eq!(lens.get_option(&person), copy.get_option(&person));
    assert_eq!(format!("{copy:?}"), "Optional { path: accounts[1].handle, .. }");
}
