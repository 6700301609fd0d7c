//! Tests for h-card rendering.

use super::*;
use microformats_model::{Geo, Value};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

struct InitialsFormatter;

impl Format<Name> for InitialsFormatter {
    fn format(&self, name: &Name) -> String {
        name.given()
            .chars()
            .take(1)
            .chain(name.surname().chars().take(1))
            .collect()
    }
}

struct LocalityFormatter;

impl Format<Address> for LocalityFormatter {
    fn format(&self, address: &Address) -> String {
        address.locality().unwrap_or_default().to_uppercase()
    }
}

#[test_log::test]
fn name_and_email() {
    let card = Card::new([("p-name", "Jane Doe"), ("u-email", "jane@example.com")]);

    assert_eq!(
        CardFormatter::new().format(&card),
        concat!(
            r#"<dl class="h-card">"#,
            r#"<dt>Name</dt><dd><span class="p-name">Jane Doe</span></dd> "#,
            r#"<dt>Email</dt><dd><a href="mailto:jane@example.com" class="u-email">jane@example.com</a></dd>"#,
            "</dl>"
        )
    );
}

#[test]
fn empty_card() {
    assert_eq!(
        CardFormatter::new().format(&Card::default()),
        r#"<dl class="h-card"></dl>"#
    );
}

#[test]
fn structured_name_uses_name_formatter() {
    let card = Card::new([("p-name", Value::from(Name::new("Jane", "", "Doe")))]);

    let html = CardFormatter::new().format(&card);
    assert!(html.contains(concat!(
        r#"<dd><span class="p-name"><span class="p-name">"#,
        r#"<span class="p-given-name">Jane</span> <span class="p-family-name">Doe</span>"#,
        "</span></span></dd>"
    )));
}

#[test]
fn structured_name_with_maiden() {
    let name = Name::builder("Jane", "", "Doe").maiden("Roe").build();
    let html = CardFormatter::new().format(&Card::new([("p-name", name)]));

    assert!(html.contains(concat!(
        r#"<span class="p-family-name">Doe</span> "#,
        r#"<span class="p-maiden-name">Roe</span> "#,
        r#"(née <span class="p-maiden-name">Roe</span>)"#,
        "</span></span></dd>"
    )));
}

#[test]
fn blank_fields_are_skipped() {
    let card = Card::new([("p-name", ""), ("p-role", "  "), ("p-note", "Hi")]);

    assert_eq!(
        CardFormatter::new().format(&card),
        r#"<dl class="h-card"><dt>Note</dt><dd><div class="p-note">Hi</div></dd></dl>"#
    );
}

#[test]
fn images_links_and_phone() {
    let card = Card::new([
        ("u-photo", "/me.jpg"),
        ("u-logo", "/logo.png"),
        ("p-tel", "+1 (555) 010-0199"),
        ("u-url", "https://example.com/?a=1&b=2"),
        ("u-impp", "xmpp:jane@example.com"),
    ]);

    let html = CardFormatter::new().format(&card);

    assert!(html.contains(
        r#"<dt>Photo</dt><dd><img class="u-photo" src="/me.jpg" alt="Photo" /></dd></span> <dt>Logo</dt>"#
    ));
    assert!(html.contains(
        r#"<dt>Logo</dt><dd><img class="u-logo" src="/logo.png" alt="Logo" /></dd></span> <dt>Phone</dt>"#
    ));
    assert!(html.contains(
        r#"<dt>Phone</dt><dd><a href="tel:+15550100199" class="p-tel">+1 (555) 010-0199</a></dd>"#
    ));
    assert!(html.contains(
        r#"<dt>Homepage</dt><dd><a href="https://example.com/?a=1&amp;b=2" class="u-url">https://example.com/?a=1&amp;b=2</a></dd>"#
    ));
    assert!(html.contains(
        r#"<dt>IMPP</dt><dd><a href="xmpp:jane@example.com" class="u-impp">xmpp:jane@example.com</a></dd>"#
    ));
}

#[test]
fn present_photo_renders_even_when_blank() {
    let card = Card::new([("u-photo", " ")]);

    assert_eq!(
        CardFormatter::new().format(&card),
        r#"<dl class="h-card"><dt>Photo</dt><dd><img class="u-photo" src="" alt="Photo" /></dd></span></dl>"#
    );
}

#[test]
fn rows_follow_fixed_order() {
    let card = Card::new([
        ("p-note", "note"),
        ("p-category", "friend"),
        ("u-key", "https://example.com/key.asc"),
        ("p-gender-identity", "woman"),
        ("p-sex", "F"),
        ("p-role", "Lead"),
        ("p-job-title", "Engineer"),
        ("p-name", "Jane"),
    ]);

    let html = CardFormatter::new().format(&card);
    let labels: Vec<&str> = html
        .split("<dt>")
        .skip(1)
        .filter_map(|chunk| chunk.split("</dt>").next())
        .collect();

    assert_eq!(
        labels,
        ["Name", "Title", "Role", "Sex", "Gender", "Public Key", "Category", "Note"]
    );
}

#[test]
fn sex_row_displays_role() {
    let card = Card::new([("p-sex", "F"), ("p-role", "Lead")]);
    let html = CardFormatter::new().format(&card);

    assert!(html.contains(r#"<dt>Sex</dt><dd><span class="p-sex">Lead</span></dd>"#));
    assert!(!html.contains(">F<"));
    assert!(!html.contains("<dt>Gender</dt>"));
}

#[test]
fn sex_row_without_role_is_empty() {
    let card = Card::new([("sex", "M")]);

    assert_eq!(
        CardFormatter::new().format(&card),
        r#"<dl class="h-card"><dt>Sex</dt><dd><span class="p-sex"></span></dd></dl>"#
    );
}

#[test]
fn sex_row_needs_sex() {
    let card = Card::new([("p-role", "Lead")]);
    assert!(!CardFormatter::new().format(&card).contains("<dt>Sex</dt>"));
}

#[test]
fn organization_card_is_nested() {
    let acme = Card::new([("p-name", "Acme <Inc>"), ("u-url", "https://acme.example")]);
    let card = Card::new([("p-name", Value::from("Wile E.")), ("p-org", Value::from(acme))]);

    let html = CardFormatter::new().format(&card);

    assert!(html.contains(r#"<dt>Organization</dt><dd class="p-org"><dl class="h-card">"#));
    assert!(html.contains(r#"<span class="p-name">Acme &lt;Inc&gt;</span>"#));
    assert_eq!(html.matches(r#"<dl class="h-card">"#).count(), 2);
}

#[test]
fn organization_name() {
    let card = Card::new([("p-organization-name", "Initech")]);

    assert_eq!(
        CardFormatter::new().format(&card),
        r#"<dl class="h-card"><dt>Organization</dt><dd><span class="p-org p-organization-name">Initech</span></dd></dl>"#
    );
}

#[test]
fn address_is_delegated() {
    let address = Address::builder()
        .locality("Springfield")
        .geo(Geo::new(39.8, -89.6, None))
        .build();
    let card = Card::new([("p-adr", address)]);

    let html = CardFormatter::new().format(&card);
    assert!(html.contains(r#"<dt>Address</dt><dd class="p-adr"><span class="h-adr">"#));
    assert!(html.contains(r#"<span class="p-locality">Springfield</span>"#));
    assert!(html.contains(r#"<span class="h-geo">"#));
}

#[test]
fn dates_render_as_time_elements() {
    let card = Card::new([
        ("dt-bday", Value::from(date(1990, 7, 4))),
        ("anniversary", Value::from(date(2015, 6, 20))),
    ]);

    let html = CardFormatter::new().format(&card);

    assert!(html.contains(
        r#"<dt>Birthday</dt><dd><time class="dt-bday" datetime="1990-07-04">July 4, 1990</time></dd>"#
    ));
    assert!(html.contains(
        r#"<dt>Anniversary</dt><dd><time class="dt-anniversary" datetime="2015-06-20">June 20, 2015</time></dd>"#
    ));
}

#[test]
fn config_changes_dates_and_separator() {
    let config = FormatConfig {
        date_display: "%d/%m/%Y".to_string(),
        separator: "\n".to_string(),
        ..FormatConfig::default()
    };
    let card = Card::new([("p-name", Value::from("Jo")), ("dt-bday", Value::from(date(2001, 2, 3)))]);

    let html = CardFormatter::new().with_config(config).format(&card);

    assert!(html.contains(">03/02/2001</time>"));
    assert!(html.contains("</dd>\n<dt>Birthday</dt>"));
}

#[test]
fn bad_date_pattern_falls_back_to_iso() {
    let config = FormatConfig {
        date_display: "%Q".to_string(),
        ..FormatConfig::default()
    };
    let card = Card::new([("dt-bday", date(2001, 2, 3))]);

    let html = CardFormatter::new().with_config(config).format(&card);
    assert!(html.contains(r#"datetime="2001-02-03">2001-02-03</time>"#));
}

#[test]
fn injected_formatters_are_used() {
    let card = Card::new([
        ("p-name", Value::from(Name::new("Jane", "", "Doe"))),
        ("p-adr", Value::from(Address::builder().locality("Oslo").build())),
    ]);

    let html = CardFormatter::with_formatters(LocalityFormatter, InitialsFormatter).format(&card);

    assert_eq!(
        html,
        r#"<dl class="h-card"><dt>Name</dt><dd><span class="p-name">JD</span></dd> <dt>Address</dt><dd class="p-adr">OSLO</dd></dl>"#
    );
}
