//! Alias add/remove behaviour across gears.

use std::fs;

use gear_frontend::routing::{DocumentOutcome, NameViolation};
use gear_frontend::FrontendError;

mod common;

use common::Fleet;

fn dir_listing(path: &std::path::Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(path)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn test_alias_unique_across_gears_ignoring_case() {
    let fleet = Fleet::new();
    let a = fleet.gear("app", "alpha");
    let b = fleet.gear("app", "beta");

    a.add_alias("Foo.Example.com").unwrap();
    let err = b.add_alias("foo.example.com").unwrap_err();

    match err {
        FrontendError::AliasAlreadyExists { gear, alias } => {
            assert_eq!(&gear, b.gear());
            assert_eq!(alias, "foo.example.com");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(b.aliases().unwrap().is_empty());
}

#[test]
fn test_same_gear_cannot_add_twice() {
    let fleet = Fleet::new();
    let a = fleet.gear("app", "alpha");

    a.add_alias("www.example.com").unwrap();
    assert!(matches!(
        a.add_alias("WWW.example.com"),
        Err(FrontendError::AliasAlreadyExists { .. })
    ));
}

#[test]
fn test_conflict_does_not_reload() {
    let fleet = Fleet::new();
    let a = fleet.gear("app", "alpha");
    let b = fleet.gear("app", "beta");
    a.add_alias("taken.example.com").unwrap();
    let calls_before = fleet.runner.calls().len();

    b.add_alias("taken.example.com").unwrap_err();
    assert_eq!(fleet.runner.calls().len(), calls_before);
}

#[test]
fn test_invalid_names_fail_before_any_write() {
    let fleet = Fleet::new();
    let a = fleet.gear("app", "alpha");
    let gear_dir = a.layout().gear_dir(a.gear());

    let cases = [
        ("foo_bar", NameViolation::InvalidCharacters),
        ("", NameViolation::Blank),
        ("1.2.3.4", NameViolation::IpAddress),
    ];
    for (name, expected) in cases {
        match a.add_alias(name) {
            Err(FrontendError::Name { kind, .. }) => assert_eq!(kind, expected, "{name:?}"),
            other => panic!("{name:?}: unexpected {other:?}"),
        }
    }
    let long = "a".repeat(256);
    assert!(matches!(
        a.add_alias(&long),
        Err(FrontendError::Name { kind: NameViolation::TooLong, .. })
    ));

    assert!(dir_listing(&gear_dir).is_empty());
    assert!(fleet.runner.calls().is_empty());
}

#[test]
fn test_add_derives_routes_document() {
    let fleet = Fleet::new();
    let gear = fleet.handle("u", "name", "ns");
    gear.create().unwrap();

    let canonical = r#"{"name-ns.cloud.example":[{"endpoints":["127.1.2.3:8080"],"limits":{"connections":5}}],"name-ns.cloud.example/health":[]}"#;
    fs::write(gear.layout().default_routes(gear.gear()), canonical).unwrap();

    let added = gear.add_alias("bar.example.com").unwrap();
    let path = gear.layout().alias_routes(gear.gear(), "bar.example.com");
    assert_eq!(added.routes, DocumentOutcome::Written { path: path.clone() });
    assert_eq!(
        fs::read_to_string(path).unwrap(),
        canonical.replace("name-ns.cloud.example", "bar.example.com")
    );
}

#[test]
fn test_routes_failure_does_not_abort_add() {
    let fleet = Fleet::new();
    let gear = fleet.gear("app", "alpha");

    let added = gear.add_alias("www.example.com").unwrap();
    assert!(matches!(added.routes, DocumentOutcome::Failed { .. }));
    assert_eq!(gear.aliases().unwrap(), vec!["www.example.com".to_string()]);
    assert_eq!(fleet.runner.calls().len(), 2);
}

#[test]
fn test_case_folding_non_ascii_alias_is_rejected() {
    let fleet = Fleet::new();
    let a = fleet.gear("app", "alpha");
    let b = fleet.gear("app", "beta");

    assert!(matches!(
        a.add_alias("\u{212A}.example.com"),
        Err(FrontendError::Name { kind: NameViolation::InvalidCharacters, .. })
    ));
    assert!(a.aliases().unwrap().is_empty());

    b.add_alias("k.example.com").unwrap();
    assert!(matches!(
        a.add_alias("K.example.com"),
        Err(FrontendError::AliasAlreadyExists { .. })
    ));
    assert!(matches!(
        b.remove_alias("\u{212A}.example.com"),
        Err(FrontendError::Name { kind: NameViolation::InvalidCharacters, .. })
    ));

    let removed = b.remove_alias("K.Example.com").unwrap();
    assert_eq!(removed.markers.len(), 1);
    assert!(b.aliases().unwrap().is_empty());
}

#[test]
fn test_remove_unknown_alias_is_noop() {
    let fleet = Fleet::new();
    let gear = fleet.gear("app", "alpha");
    gear.add_alias("keep.example.com").unwrap();
    let gear_dir = gear.layout().gear_dir(gear.gear());
    let before = dir_listing(&gear_dir);

    let removed = gear.remove_alias("never.example.com").unwrap();
    assert!(removed.markers.is_empty());
    assert!(!removed.routes_removed);
    assert_eq!(dir_listing(&gear_dir), before);
}

#[test]
fn test_remove_clears_marker_and_routes() {
    let fleet = Fleet::new();
    let gear = fleet.gear("app", "alpha");
    fs::write(
        gear.layout().default_routes(gear.gear()),
        r#"{"app-alpha.cloud.example":[]}"#,
    )
    .unwrap();
    gear.add_alias("Shop.Example.com").unwrap();

    let removed = gear.remove_alias("shop.EXAMPLE.com").unwrap();
    assert_eq!(removed.alias, "shop.example.com");
    assert_eq!(removed.markers.len(), 1);
    assert!(removed.routes_removed);
    assert_eq!(dir_listing(&gear.layout().gear_dir(gear.gear())), vec!["routes.json"]);
}

#[test]
fn test_remove_leaves_other_gears_alone() {
    let fleet = Fleet::new();
    let a = fleet.gear("app", "alpha");
    let b = fleet.gear("app", "beta");
    a.add_alias("a.example.com").unwrap();

    b.remove_alias("a.example.com").unwrap();
    assert_eq!(a.aliases().unwrap(), vec!["a.example.com".to_string()]);
}

#[test]
fn test_alias_free_again_after_removal() {
    let fleet = Fleet::new();
    let a = fleet.gear("app", "alpha");
    let b = fleet.gear("app", "beta");

    a.add_alias("moving.example.com").unwrap();
    a.remove_alias("moving.example.com").unwrap();
    b.add_alias("moving.example.com").unwrap();

    assert_eq!(b.search_aliases("Moving.Example.com", true).unwrap().len(), 1);
}

#[test]
fn test_concurrent_adds_claim_alias_once() {
    let fleet = Fleet::new();
    let gears: Vec<_> = (0..8).map(|i| fleet.gear("app", &format!("ns{i}"))).collect();

    let wins = std::thread::scope(|s| {
        let handles: Vec<_> = gears
            .iter()
            .map(|g| s.spawn(move || g.add_alias("race.example.com").is_ok()))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count()
    });

    assert_eq!(wins, 1);
    let owners: usize = gears.iter().map(|g| g.aliases().unwrap().len()).sum();
    assert_eq!(owners, 1);
}
