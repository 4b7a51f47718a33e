//! Contact form state. Submission is simulated: the frontend waits
//! `ContactConfig::submit_delay_ms` and resets the form. There is no backend.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    submitting: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind an input by its `name` attribute. Unknown names are ignored.
    pub fn set_field(&mut self, name: &str, value: &str) -> bool {
        let slot = match name {
            "name" => &mut self.name,
            "email" => &mut self.email,
            "subject" => &mut self.subject,
            "message" => &mut self.message,
            _ => return false,
        };
        slot.clear();
        slot.push_str(value);
        true
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        match name {
            "name" => Some(&self.name),
            "email" => Some(&self.email),
            "subject" => Some(&self.subject),
            "message" => Some(&self.message),
            _ => None,
        }
    }

    #[inline]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Enter the submitting state. Returns `false` if a submission is
    /// already running.
    pub fn begin_submit(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        true
    }

    /// Leave the submitting state, returning what was submitted and
    /// clearing every field.
    pub fn finish_submit(&mut self) -> ContactForm {
        ContactForm {
            submitting: false,
            ..std::mem::take(self)
        }
    }
}
