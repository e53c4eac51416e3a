use std::fmt;

use thiserror::Error;

/// Fake round trip before the form reports success.
pub const SUBMIT_DELAY_MS: u32 = 1_500;
/// How long the success banner stays up.
pub const SUCCESS_DISPLAY_MS: u32 = 5_000;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// Also the input's `id` and `name`.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Your Name",
            Field::Email => "Your Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "John Doe",
            Field::Email => "john@example.com",
            Field::Subject => "Project Inquiry",
            Field::Message => "Your message here...",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("field `{0}` is required")]
    MissingField(Field),
    #[error("a message is already being sent")]
    AlreadySubmitting,
}

/// Ticket for one submission; timers carry it so they only act on their own.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Submission(u32);

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub is_submitting: bool,
    pub is_submitted: bool,
    seq: u32,
}

impl ContactForm {
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        };
        *slot = value;
    }

    /// Same rule as the inputs' `required`: present, nothing more.
    pub fn validate(&self) -> Result<(), ContactError> {
        match Field::ALL.into_iter().find(|f| self.field(*f).is_empty()) {
            Some(missing) => Err(ContactError::MissingField(missing)),
            None => Ok(()),
        }
    }

    pub fn begin_submit(&mut self) -> Result<Submission, ContactError> {
        if self.is_submitting {
            return Err(ContactError::AlreadySubmitting);
        }
        self.validate()?;

        self.seq = self.seq.wrapping_add(1);
        self.is_submitting = true;
        Ok(Submission(self.seq))
    }

    /// Delay elapsed: clear the fields and raise the success banner.
    pub fn complete_submit(&mut self, ticket: Submission) -> bool {
        if ticket.0 != self.seq || !self.is_submitting {
            return false;
        }
        self.name.clear();
        self.email.clear();
        self.subject.clear();
        self.message.clear();
        self.is_submitting = false;
        self.is_submitted = true;
        true
    }

    /// Drops the banner unless a newer submission has taken over since.
    pub fn dismiss_success(&mut self, ticket: Submission) -> bool {
        if ticket.0 != self.seq || !self.is_submitted {
            return false;
        }
        self.is_submitted = false;
        true
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_submitting { "Sending..." } else { "Send Message" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.set_field(Field::Name, "Asha".into());
        form.set_field(Field::Email, "asha@example.com".into());
        form.set_field(Field::Subject, "Hydrant audit".into());
        form.set_field(Field::Message, "Need a quote for a 6-floor office.".into());
        form
    }

    #[test]
    fn full_submission_cycle() {
        let mut form = filled();

        let ticket = form.begin_submit().unwrap();
        assert!(form.is_submitting);
        assert!(!form.is_submitted);
        assert_eq!(form.name, "Asha");
        assert_eq!(form.button_label(), "Sending...");

        assert!(form.complete_submit(ticket));
        assert!(!form.is_submitting);
        assert!(form.is_submitted);
        for f in Field::ALL {
            assert_eq!(form.field(f), "", "{f} not cleared");
        }

        assert!(form.dismiss_success(ticket));
        assert!(!form.is_submitted);
        assert_eq!(form.button_label(), "Send Message");
    }

    #[test]
    fn missing_field_rejects_and_leaves_flags() {
        let mut form = filled();
        form.set_field(Field::Subject, String::new());

        assert_eq!(
            form.begin_submit(),
            Err(ContactError::MissingField(Field::Subject))
        );
        assert!(!form.is_submitting);
        assert_eq!(form.name, "Asha");
    }

    #[test]
    fn blank_but_present_field_is_accepted() {
        let mut form = filled();
        form.set_field(Field::Subject, " ".into());

        let ticket = form.begin_submit().unwrap();
        assert!(form.is_submitting);
        assert!(form.complete_submit(ticket));
        assert!(form.is_submitted);
    }

    #[test]
    fn first_missing_field_is_reported() {
        let form = ContactForm::default();
        assert_eq!(form.validate(), Err(ContactError::MissingField(Field::Name)));
        assert_eq!(
            ContactError::MissingField(Field::Email).to_string(),
            "field `email` is required"
        );
    }

    #[test]
    fn double_submit_is_refused() {
        let mut form = filled();
        form.begin_submit().unwrap();
        assert_eq!(form.begin_submit(), Err(ContactError::AlreadySubmitting));
    }

    #[test]
    fn stale_dismiss_keeps_newer_banner() {
        let mut form = filled();
        let first = form.begin_submit().unwrap();
        form.complete_submit(first);

        // banner still up, user sends another one
        let refill = filled();
        for f in Field::ALL {
            form.set_field(f, refill.field(f).to_owned());
        }
        let second = form.begin_submit().unwrap();
        assert!(form.is_submitted);

        // first banner's timer fires mid-send
        assert!(!form.dismiss_success(first));
        assert!(form.complete_submit(second));
        assert!(form.is_submitted);

        assert!(form.dismiss_success(second));
        assert!(!form.is_submitted);
    }

    #[test]
    fn typing_during_send_survives_until_completion() {
        let mut form = filled();
        let ticket = form.begin_submit().unwrap();
        form.set_field(Field::Message, "edited".into());
        assert_eq!(form.message, "edited");
        form.complete_submit(ticket);
        assert_eq!(form.message, "");
    }
}
