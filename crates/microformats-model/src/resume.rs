//! Résumés (h-resume).

use crate::card::Card;
use crate::event::Event;
use crate::skill::SkillHeading;
use crate::value::{Value, filter_kind, trim_opt};

#[derive(Debug, Clone, PartialEq)]
pub struct Resume {
    name: String,
    summary: Option<String>,
    contact: Option<Card>,
    education: Vec<Event>,
    experience: Vec<Event>,
    volunteering: Vec<Event>,
    skills: Vec<SkillHeading>,
}

impl Resume {
    /// Starts a résumé with a brief name.
    pub fn builder(name: &str) -> ResumeBuilder {
        ResumeBuilder {
            name: name.to_string(),
            ..ResumeBuilder::default()
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Overview of qualifications and objectives.
    #[must_use]
    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    /// Current contact details.
    #[must_use]
    pub const fn contact(&self) -> Option<&Card> {
        self.contact.as_ref()
    }

    #[must_use]
    pub fn education(&self) -> &[Event] {
        &self.education
    }

    #[must_use]
    pub fn experience(&self) -> &[Event] {
        &self.experience
    }

    #[must_use]
    pub fn volunteering(&self) -> &[Event] {
        &self.volunteering
    }

    #[must_use]
    pub fn skill_headings(&self) -> &[SkillHeading] {
        &self.skills
    }
}

/// Collects résumé sections. List setters keep only elements of the
/// expected kind, in order, and replace any earlier list.
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct ResumeBuilder {
    name: String,
    summary: Option<String>,
    contact: Option<Card>,
    education: Vec<Event>,
    experience: Vec<Event>,
    volunteering: Vec<Event>,
    skills: Vec<SkillHeading>,
}

impl ResumeBuilder {
    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn contact(mut self, contact: Card) -> Self {
        self.contact = Some(contact);
        self
    }

    pub fn education<I>(mut self, events: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.education = filter_kind(events);
        self
    }

    pub fn experience<I>(mut self, events: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.experience = filter_kind(events);
        self
    }

    pub fn volunteering<I>(mut self, events: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.volunteering = filter_kind(events);
        self
    }

    pub fn skills<I>(mut self, headings: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.skills = filter_kind(headings);
        self
    }

    #[must_use]
    pub fn build(self) -> Resume {
        Resume {
            name: self.name.trim().to_string(),
            summary: trim_opt(self.summary),
            contact: self.contact,
            education: self.education,
            experience: self.experience,
            volunteering: self.volunteering,
            skills: self.skills,
        }
    }
}
