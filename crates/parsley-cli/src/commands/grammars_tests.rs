use indoc::indoc;

use super::grammars::listing;

#[test]
fn listing_aligns_names() {
    assert_eq!(
        listing(),
        indoc! {r#"
            calc   integer arithmetic (+ - * / and parentheses), valued with the result (e.g. "(1+2)*3")
            list   bracketed list of lowercase words, valued with the item count (e.g. "[a, bb, c]")
            chars  keywords, identifiers, numbers and punctuation, valued with the token count (e.g. "let x = 42;")
        "#}
    );
}
