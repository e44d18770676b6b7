use stylemod::{lens, Field, Lens, LensExt, Mod};

#[derive(Debug, Clone, PartialEq, Eq)]
struct User {
    name: String,
    age: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Team {
    title: String,
    members: Vec<User>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Card {
    header: User,
    pinned: bool,
}

fn user(name: &str, age: u32) -> User {
    User {
        name: name.into(),
        age,
    }
}

fn uppercase() -> Mod<String> {
    Mod::new(|s: &mut String| *s = s.to_uppercase())
}

#[test]
fn field_lens_reads_and_writes() {
    let name = lens!(User, name);
    let mut u = user("blob", 78);
    assert_eq!(name.get(&u), "blob");

    name.set(&mut u, "glob".into());
    assert_eq!(u, user("glob", 78));
}

#[test]
fn field_lens_set_get_round_trips() {
    let age = lens!(User, age);
    let mut u = user("blob", 78);

    // writing back the read value is a no-op
    let current = age.get(&u);
    age.set(&mut u, current);
    assert_eq!(u, user("blob", 78));

    // last write wins
    age.set(&mut u, 1);
    age.set(&mut u, 2);
    assert_eq!(age.get(&u), 2);
}

#[test]
fn pullback_touches_only_the_addressed_field() {
    let m = uppercase().pullback(lens!(User, name));
    let after = m.applied(&user("blob", 78));
    assert_eq!(after, user("BLOB", 78));
}

#[test]
fn pullback_through_composed_lenses() {
    let header_name = lens!(Card, header).compose(lens!(User, name));
    let m = uppercase().pullback(header_name);
    let after = m.applied(&Card {
        header: user("blob", 78),
        pinned: true,
    });
    assert_eq!(after.header, user("BLOB", 78));
    assert!(after.pinned);
}

#[test]
fn for_each_maps_every_element_in_order() {
    let team = Team {
        title: "blobs".into(),
        members: vec![user("elie", 30), user("aria", 31)],
    };
    let m = uppercase()
        .pullback(lens!(User, name))
        .for_each(lens!(Team, members));
    let after = m.applied(&team);
    assert_eq!(after.title, "blobs");
    assert_eq!(after.members, vec![user("ELIE", 30), user("ARIA", 31)]);
}

#[test]
fn each_builds_a_fresh_sequence() {
    let names = vec!["elie".to_string(), "aria".to_string()];
    let before = names.clone();
    let after = uppercase().each().applied(&names);
    assert_eq!(names, before);
    assert_eq!(after, vec!["ELIE".to_string(), "ARIA".to_string()]);
}

#[test]
fn for_each_preserves_length_on_empty_sequences() {
    let team = Team {
        title: "empty".into(),
        members: Vec::new(),
    };
    let m = uppercase()
        .pullback(lens!(User, name))
        .for_each(lens!(Team, members));
    assert_eq!(m.applied(&team), team);
}

#[test]
fn explicit_field_lens_matches_macro() {
    let by_macro = lens!(User, age);
    let by_hand = Field::new(|u: &User| &u.age, |u: &mut User| &mut u.age);
    let u = user("blob", 78);
    assert_eq!(by_macro.get(&u), by_hand.get(&u));
}

#[test]
fn identity_lens_addresses_the_whole_value() {
    let m = uppercase().pullback(stylemod::Identity);
    let mut s = "blob".to_string();
    m.apply(&mut s);
    assert_eq!(s, "BLOB");
}

#[test]
fn with_mut_yields_the_closure_result() {
    let name = lens!(User, name);
    let mut u = user("blob", 78);
    let len = name.with_mut(&mut u, |n| {
        n.push('!');
        n.len()
    });
    assert_eq!(len, 5);
    assert_eq!(u.name, "blob!");
}
