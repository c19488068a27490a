//! Event names and their firing forms.

use std::fmt;

/// Suffix that selects the confirming form of an event, as in `"checkout!"`.
pub const CONFIRMING_MARKER: char = '!';

/// Failure policy an event is fired with.
///
/// Both forms share one transition table. They only differ in how a
/// validating executor reports a rejected or unsaved transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EventForm {
    /// Rejections and save failures come back as `Ok(false)`.
    #[default]
    BestEffort,

    /// Rejections and save failures come back as errors.
    Confirming,
}

/// An event name paired with the form it is fired in.
///
/// # Example
///
/// ```rust
/// use entity_fsm::core::{Event, EventForm};
///
/// let event = Event::parse("checkout!");
/// assert_eq!(event.name(), "checkout");
/// assert_eq!(event.form(), EventForm::Confirming);
/// assert_eq!(event.to_string(), "checkout!");
///
/// let event: Event = "checkout".into();
/// assert_eq!(event.form(), EventForm::BestEffort);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Event<'a> {
    name: &'a str,
    form: EventForm,
}

impl<'a> Event<'a> {
    pub fn new(name: &'a str, form: EventForm) -> Self {
        Self { name, form }
    }

    pub fn best_effort(name: &'a str) -> Self {
        Self::new(name, EventForm::BestEffort)
    }

    pub fn confirming(name: &'a str) -> Self {
        Self::new(name, EventForm::Confirming)
    }

    /// Split a trailing [`CONFIRMING_MARKER`] off a raw event name.
    ///
    /// Only one marker is stripped; `"a!!"` names the event `"a!"`, which a
    /// validated definition never declares.
    pub fn parse(raw: &'a str) -> Self {
        match raw.strip_suffix(CONFIRMING_MARKER) {
            Some(name) => Self::confirming(name),
            None => Self::best_effort(raw),
        }
    }

    /// Name used to look up the transition table.
    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn form(&self) -> EventForm {
        self.form
    }

    pub fn is_confirming(&self) -> bool {
        self.form == EventForm::Confirming
    }
}

impl<'a> From<&'a str> for Event<'a> {
    fn from(raw: &'a str) -> Self {
        Self::parse(raw)
    }
}

impl fmt::Display for Event<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.form {
            EventForm::BestEffort => f.write_str(self.name),
            EventForm::Confirming => write!(f, "{}{}", self.name, CONFIRMING_MARKER),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_name_is_best_effort() {
        let event = Event::parse("publish");
        assert_eq!(event.name(), "publish");
        assert_eq!(event.form(), EventForm::BestEffort);
        assert!(!event.is_confirming());
    }

    #[test]
    fn parse_strips_single_marker() {
        let event = Event::parse("publish!");
        assert_eq!(event.name(), "publish");
        assert!(event.is_confirming());

        let doubled = Event::parse("publish!!");
        assert_eq!(doubled.name(), "publish!");
        assert!(doubled.is_confirming());
    }

    #[test]
    fn display_restores_marker() {
        assert_eq!(Event::confirming("archive").to_string(), "archive!");
        assert_eq!(Event::best_effort("archive").to_string(), "archive");
    }

    #[test]
    fn default_form_is_best_effort() {
        assert_eq!(EventForm::default(), EventForm::BestEffort);
    }
}
