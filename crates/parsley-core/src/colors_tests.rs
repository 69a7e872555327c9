use crate::{Colors, Style};

#[test]
fn plain_output_has_no_escape_codes() {
    let colors = Colors::default();

    assert!(!colors.is_enabled());
    assert_eq!(colors.paint(Style::Failure, "fail").to_string(), "fail");
    assert_eq!(colors.paint(Style::Faint, 42).to_string(), "42");
}

#[test]
fn enabled_output_wraps_each_value() {
    let colors = Colors::new(true);
    let line = format!(
        "{} {}",
        colors.paint(Style::Label, "Sum"),
        colors.paint(Style::Success, "ok")
    );

    assert!(colors.is_enabled());
    insta::assert_debug_snapshot!(line, @r#""\u{1b}[34mSum\u{1b}[0m \u{1b}[32mok\u{1b}[0m""#);
}

#[test]
fn styles_use_distinct_codes() {
    let colors = Colors::new(true);
    let painted: Vec<String> = [Style::Label, Style::Success, Style::Failure, Style::Faint]
        .into_iter()
        .map(|style| colors.paint(style, "x").to_string())
        .collect();

    insta::assert_debug_snapshot!(painted, @r#"
    [
        "\u{1b}[34mx\u{1b}[0m",
        "\u{1b}[32mx\u{1b}[0m",
        "\u{1b}[31mx\u{1b}[0m",
        "\u{1b}[2mx\u{1b}[0m",
    ]
    "#);
}
