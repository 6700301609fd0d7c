//! End-to-end rendering of model objects built the way callers build them.

use chrono::NaiveDate;
use microformats_html::{AddressFormatter, CardFormatter, Format, GeoFormatter, NameFormatter};
use microformats_model::{
    Address, Card, DateRange, Event, Geo, Location, Name, Resume, Skill, SkillHeading, Tag, Value,
};

#[test_log::test]
fn contact_card_markup() {
    let card = Card::new([("p-name", "Jane Doe"), ("u-email", "jane@example.com")]);
    let html = CardFormatter::new().format(&card);

    assert!(html.contains(r#"<span class="p-name">Jane Doe</span>"#));
    assert!(html.contains(r#"href="mailto:jane@example.com""#));
    assert!(html.contains(r#"class="u-email""#));
}

#[test]
fn address_markup_is_escaped() {
    let address = Address::builder().street("<b>X</b>").locality("Y").build();
    let html = AddressFormatter::new().format(&address);

    assert!(html.starts_with(r#"<span class="h-adr">"#));
    assert!(html.contains("&lt;b&gt;X&lt;/b&gt;"));
    assert!(html.contains(r#"<span class="p-locality">Y</span>"#));
}

#[test]
fn full_card_with_everything() {
    let acme = Card::new([
        ("p-name", Value::from("Acme Corporation")),
        ("u-url", Value::from("https://acme.example")),
    ]);
    let name = Name::builder("Wile", "E.", "Coyote").suffix("Esq.").nick("Genius").build();
    let address = Address::builder()
        .street("1 Mesa Rd")
        .locality("Desert")
        .geo(Geo::new(36.1, -115.2, Some(610.0)))
        .build();

    let card = Card::new([
        ("name", Value::from(name.clone())),
        ("address", Value::from(address)),
        ("org", Value::from(acme)),
        ("tel", Value::from("555-0100")),
        ("birthday", Value::from(NaiveDate::from_ymd_opt(1949, 9, 17))),
    ]);

    assert_eq!(card.name(), Some(&name));
    assert!(card.geo().is_some());

    let html = CardFormatter::new().format(&card);

    assert!(html.starts_with(r#"<dl class="h-card"><dt>Name</dt>"#));
    assert!(html.contains(r#"<span class="p-nickname">Genius</span>"#));
    assert!(html.contains(r#"(elevation <span class="p-altitude">610</span>)"#));
    assert!(html.contains(r#"<a href="tel:5550100" class="p-tel">555-0100</a>"#));
    assert!(html.contains(r#"<dd class="p-org"><dl class="h-card">"#));
    assert!(html.contains(r#"datetime="1949-09-17">September 17, 1949</time>"#));
    assert!(html.ends_with("</dl>"));
}

#[test]
fn default_formatters_match_explicit_ones() {
    let card = Card::new([
        ("p-name", Value::from(Name::new("Ada", "", "Lovelace"))),
        ("p-adr", Value::from(Address::builder().country("UK").build())),
    ]);

    let explicit = CardFormatter::with_formatters(
        AddressFormatter::with_geo_formatter(GeoFormatter::new()),
        NameFormatter::new(),
    );

    assert_eq!(explicit.format(&card), CardFormatter::new().format(&card));
}

#[test]
fn resume_filters_mixed_sections() {
    let d = |y| NaiveDate::from_ymd_opt(y, 9, 1).unwrap();
    let school = Event::builder("University")
        .date(DateRange::from_dates(d(2008), d(2012)))
        .location(Geo::new(42.37, -71.11, None))
        .build();
    let job = Event::builder("Engineer").date(DateRange::from_dates(d(2012), d(2020))).build();

    let rust = Skill::new(
        Tag::new("https://www.rust-lang.org/", "Rust"),
        Some(4),
        [DateRange::from_dates(d(2015), d(2020))],
    );
    let heading = SkillHeading::new("Languages", [rust]);

    let resume = Resume::builder("Jane Doe")
        .contact(Card::new([("p-name", "Jane Doe")]))
        .education(vec![Value::from(school.clone()), Value::from(42), Value::from(job.clone())])
        .skills([heading])
        .build();

    assert_eq!(resume.education(), &[school, job]);
    assert_eq!(resume.skill_headings()[0].skills()[0].name(), Some("Rust"));

    let contact = resume.contact().unwrap();
    assert!(CardFormatter::new().format(contact).contains("Jane Doe"));
}
