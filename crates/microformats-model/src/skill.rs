//! Résumé skills and the headings that group them.

use crate::date_range::DateRange;
use crate::tag::Tag;
use crate::value::{Value, filter_kind};

/// What a skill is called: a linked [`Tag`] or plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkillName {
    Tag(Tag),
    Text(String),
}

/// A single skill with an optional self-assessed rating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    name: Option<SkillName>,
    rating: Option<u8>,
    dates: Vec<DateRange>,
}

impl Skill {
    /// Creates a skill.
    ///
    /// `name` may be a [`Tag`] (stored as-is) or anything [`Value::to_text`]
    /// accepts; `Null` leaves the skill unnamed. `rating` runs 1–4 (beginner,
    /// intermediate, advanced, expert). Only [`DateRange`] elements of `dates`
    /// are kept.
    #[must_use]
    pub fn new<I>(name: impl Into<Value>, rating: Option<u8>, dates: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let name = match name.into() {
            Value::Tag(tag) => Some(SkillName::Tag(tag)),
            other => other.to_text().map(SkillName::Text),
        };

        Self {
            name,
            rating,
            dates: filter_kind(dates),
        }
    }

    /// The tag's name when tagged, otherwise the plain name.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match &self.name {
            Some(SkillName::Tag(tag)) => Some(tag.name()),
            Some(SkillName::Text(text)) => Some(text.as_str()),
            None => None,
        }
    }

    #[must_use]
    pub fn tag(&self) -> Option<&Tag> {
        match &self.name {
            Some(SkillName::Tag(tag)) => Some(tag),
            _ => None,
        }
    }

    #[must_use]
    pub const fn skill_name(&self) -> Option<&SkillName> {
        self.name.as_ref()
    }

    #[must_use]
    pub const fn rating(&self) -> Option<u8> {
        self.rating
    }

    /// Periods during which the skill was practised.
    #[must_use]
    pub fn dates(&self) -> &[DateRange] {
        &self.dates
    }
}

/// A titled group of skills.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillHeading {
    name: String,
    skills: Vec<Skill>,
}

impl SkillHeading {
    /// Creates a heading; only [`Skill`] elements of `skills` are kept.
    #[must_use]
    pub fn new<I>(name: &str, skills: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Self {
            name: name.trim().to_string(),
            skills: filter_kind(skills),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const NO_DATES: [Value; 0] = [];

    #[test]
    fn tagged_skill_takes_tag_name() {
        let tag = Tag::new("https://www.rust-lang.org/", " Rust ");
        let skill = Skill::new(tag.clone(), Some(4), NO_DATES);

        assert_eq!(skill.name(), Some("Rust"));
        assert_eq!(skill.tag(), Some(&tag));
        assert_eq!(skill.rating(), Some(4));
    }

    #[test]
    fn text_skill_is_trimmed() {
        let skill = Skill::new("  Woodworking ", None, NO_DATES);

        assert_eq!(skill.name(), Some("Woodworking"));
        assert_eq!(skill.tag(), None);
        assert_eq!(skill.skill_name(), Some(&SkillName::Text("Woodworking".to_string())));
    }

    #[test]
    fn null_name_leaves_skill_unnamed() {
        let skill = Skill::new(Value::Null, None, NO_DATES);
        assert_eq!(skill.name(), None);
        assert_eq!(skill.tag(), None);
    }

    #[test]
    fn only_date_ranges_are_kept() {
        let d = |y| NaiveDate::from_ymd_opt(y, 1, 1).unwrap();
        let early = DateRange::from_dates(d(2001), d(2003));
        let late = DateRange::from_dates(d(2010), d(2012));

        let skill = Skill::new(
            "Fortran",
            Some(2),
            vec![Value::from(early), Value::from("2005"), Value::from(late)],
        );

        assert_eq!(skill.dates(), &[early, late]);
    }

    #[test]
    fn heading_keeps_only_skills() {
        let rust = Skill::new("Rust", Some(3), NO_DATES);
        let go = Skill::new("Go", Some(2), NO_DATES);

        let heading = SkillHeading::new(
            " Languages ",
            vec![Value::from(rust.clone()), Value::from(7), Value::from(go.clone())],
        );

        assert_eq!(heading.name(), "Languages");
        assert_eq!(heading.skills(), &[rust, go]);
    }
}
