use crate::{Characters, InputChar};

const A: InputChar = InputChar::Char('a');
const B: InputChar = InputChar::Char('b');
const C: InputChar = InputChar::Char('c');

#[test]
fn additive_contains() {
    let set = Characters::of([A, B]);
    assert!(set.contains(A));
    assert!(set.contains(B));
    assert!(!set.contains(C));
    assert!(!set.contains(InputChar::Eoi));
}

#[test]
fn all_contains_sentinels() {
    let all = Characters::all();
    assert!(all.contains(A));
    assert!(all.contains(InputChar::Eoi));
    assert!(all.contains(InputChar::Empty));
    assert!(Characters::none().is_none());
}

#[test]
fn union_of_mixed_sets() {
    let additive = Characters::of([A, B]);
    let subtractive = Characters::all_but([B, C]);

    let set = additive.union(&subtractive);
    assert!(set.is_subtractive());
    assert!(set.contains(A));
    assert!(set.contains(B));
    assert!(!set.contains(C));

    let set = subtractive.union(&additive);
    assert!(set.contains(B));
    assert!(!set.contains(C));
}

#[test]
fn union_of_subtractive_sets() {
    let set = Characters::all_but([A, B]).union(&Characters::all_but([B, C]));
    assert!(set.contains(A));
    assert!(!set.contains(B));
    assert!(set.contains(C));
}

#[test]
fn difference_of_mixed_sets() {
    let set = Characters::of([A, B]).difference(&Characters::all_but([B]));
    assert_eq!(set, Characters::of([B]));

    let set = Characters::all_but([A]).difference(&Characters::of([B]));
    assert!(!set.contains(A));
    assert!(!set.contains(B));
    assert!(set.contains(C));

    let set = Characters::all_but([A]).difference(&Characters::all_but([A, B]));
    assert_eq!(set, Characters::of([B]));
}

#[test]
fn with_and_without_sentinel() {
    let set = Characters::of([A]).with(InputChar::Empty);
    assert!(set.contains(InputChar::Empty));
    assert!(!set.clone().without(InputChar::Empty).contains(InputChar::Empty));

    let set = Characters::all().without(InputChar::Empty);
    assert!(!set.contains(InputChar::Empty));
    assert!(set.with(InputChar::Empty).contains(InputChar::Empty));
}

#[test]
fn display() {
    assert_eq!(Characters::of([A, InputChar::Eoi]).to_string(), "['a',EOI]");
    assert_eq!(Characters::all_but([B]).to_string(), "!['b']");
    assert_eq!(InputChar::Char('\n').to_string(), r"'\n'");
}

#[test]
fn wide_range_is_exact() {
    let cjk = Characters::range('\u{4e00}', '\u{9fa5}');
    assert!(cjk.contains(InputChar::Char('\u{4e00}')));
    assert!(cjk.contains(InputChar::Char('\u{7000}')));
    assert!(cjk.contains(InputChar::Char('\u{9fa5}')));
    assert!(!cjk.contains(InputChar::Char('x')));
    assert!(!cjk.contains(InputChar::Char('\u{9fa6}')));
    assert!(!cjk.contains(InputChar::Eoi));
    assert_eq!(cjk.to_string(), "['\u{4e00}'..'\u{9fa5}']");
}

#[test]
fn adjacent_ranges_merge() {
    let set = Characters::range('a', 'f').union(&Characters::range('g', 'z'));
    assert_eq!(set, Characters::range('a', 'z'));
    assert_eq!(set.to_string(), "['a'..'z']");

    let set = set.without(InputChar::Char('m'));
    assert!(!set.contains(InputChar::Char('m')));
    assert!(set.contains(InputChar::Char('l')));
    assert!(set.contains(InputChar::Char('n')));
    assert_eq!(set.to_string(), "['a'..'l','n'..'z']");
}

#[test]
fn short_runs_are_listed() {
    assert_eq!(Characters::range('0', '2').to_string(), "['0','1','2']");
    assert!(Characters::range('b', 'a').is_none());
}
