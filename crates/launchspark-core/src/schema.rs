//! Field tables for the three lead forms.
//!
//! Each form is described by an [`Operation`] (which endpoint path it posts
//! to) and an ordered list of [`FieldSpec`]s. The controller, the validator
//! and the payload mapping are all driven from these tables, so adding a
//! field means adding one row here.

/// The endpoint operation a form submits to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// General contact inquiry.
    Contact,
    /// Free quote request.
    Quote,
    /// Request to replicate a portfolio design.
    Replication,
}

impl Operation {
    /// Path of the operation, relative to the API base URL.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Contact => "/contact-us",
            Self::Quote => "/get-quote",
            Self::Replication => "/replicate-website",
        }
    }

    /// Short human-readable name.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Contact => "contact inquiry",
            Self::Quote => "quote request",
            Self::Replication => "replication request",
        }
    }

    /// Message shown on success when the endpoint sends none.
    #[must_use]
    pub fn success_fallback(self) -> &'static str {
        match self {
            Self::Contact => "Your message has been sent successfully!",
            Self::Quote => "Quote request sent!",
            Self::Replication => "Replication request sent!",
        }
    }

    /// Message shown on a business rejection when the endpoint sends none.
    #[must_use]
    pub fn failure_fallback(self) -> &'static str {
        match self {
            Self::Contact => "An unknown error occurred.",
            Self::Quote => "Failed to send quote request.",
            Self::Replication => "Failed to send replication request.",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One selectable option of a [`Rule::Choice`] field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    /// Value stored in the form state and sent to the endpoint.
    pub value: &'static str,
    /// Display text.
    pub label: &'static str,
}

/// Validation rule attached to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Non-blank after trimming.
    Required,
    /// Required, and shaped like `text@text.text`.
    Email,
    /// Required, and shaped like an international phone number.
    Mobile,
    /// Required selection from a fixed option set.
    Choice(&'static [Choice]),
    /// Free text of at least `min_chars` characters after trimming.
    Description { min_chars: usize },
    /// Never validated.
    Optional,
}

/// A single form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Key in the form state.
    pub name: &'static str,
    /// Key in the endpoint payload.
    pub payload_key: &'static str,
    /// Display label.
    pub label: &'static str,
    pub rule: Rule,
    /// Value the field holds when the form is opened.
    pub initial: &'static str,
    /// Error recorded when the field is blank.
    pub required_message: &'static str,
    /// Error recorded when the field is present but malformed. Falls back to
    /// `required_message` when `None`.
    pub invalid_message: Option<&'static str>,
}

impl FieldSpec {
    /// The message for a present-but-malformed value.
    #[must_use]
    pub fn invalid_message(&self) -> &'static str {
        self.invalid_message.unwrap_or(self.required_message)
    }
}

pub const SERVICE_CHOICES: &[Choice] = &[
    Choice { value: "launchpad", label: "LaunchPad Package" },
    Choice { value: "growth", label: "Growth Package" },
    Choice { value: "scale", label: "Scale Package" },
    Choice { value: "other", label: "Other Inquiry" },
];

pub const PAGE_CHOICES: &[Choice] = &[
    Choice { value: "1-3", label: "1-3 Pages" },
    Choice { value: "4-6", label: "4-6 Pages" },
    Choice { value: "7+", label: "7+ Pages" },
];

pub const BUDGET_CHOICES: &[Choice] = &[
    Choice { value: "<500", label: "Under $500" },
    Choice { value: "500-1000", label: "$500 - $1000" },
    Choice { value: "1000-2000", label: "$1000 - $2000" },
    Choice { value: "2000+", label: "$2000+" },
];

const NAME: FieldSpec = FieldSpec {
    name: "name",
    payload_key: "fullName",
    label: "Full Name",
    rule: Rule::Required,
    initial: "",
    required_message: "Full name is required.",
    invalid_message: None,
};

const EMAIL: FieldSpec = FieldSpec {
    name: "email",
    payload_key: "email",
    label: "Email Address",
    rule: Rule::Email,
    initial: "",
    required_message: "Email is required.",
    invalid_message: Some("Email address is invalid."),
};

const MOBILE: FieldSpec = FieldSpec {
    name: "mobile",
    payload_key: "mobileNumber",
    label: "Mobile Number",
    rule: Rule::Mobile,
    initial: "",
    required_message: "Mobile number is required.",
    invalid_message: Some("Please enter a valid mobile number."),
};

const CONTACT_FIELDS: &[FieldSpec] = &[
    NAME,
    EMAIL,
    MOBILE,
    FieldSpec {
        name: "service",
        payload_key: "serviceOfInterest",
        label: "Service of Interest",
        rule: Rule::Choice(SERVICE_CHOICES),
        initial: "launchpad",
        required_message: "Please select a service.",
        invalid_message: None,
    },
    FieldSpec {
        name: "inquiry",
        payload_key: "projectDescription",
        label: "Your Message",
        rule: Rule::Description { min_chars: 10 },
        initial: "",
        required_message: "Please provide a brief message (at least 10 characters).",
        invalid_message: None,
    },
];

const QUOTE_FIELDS: &[FieldSpec] = &[
    NAME,
    EMAIL,
    MOBILE,
    FieldSpec {
        name: "pages",
        payload_key: "numberOfPages",
        label: "Number of Pages",
        rule: Rule::Choice(PAGE_CHOICES),
        initial: "",
        required_message: "Please select the number of pages.",
        invalid_message: None,
    },
    FieldSpec {
        name: "budget",
        payload_key: "budgetRange",
        label: "Your Budget",
        rule: Rule::Choice(BUDGET_CHOICES),
        initial: "",
        required_message: "Please select your budget range.",
        invalid_message: None,
    },
    FieldSpec {
        name: "details",
        payload_key: "projectDescription",
        label: "Tell us about your project",
        rule: Rule::Description { min_chars: 10 },
        initial: "",
        required_message: "Please provide at least a brief description (10 characters min).",
        invalid_message: None,
    },
];

const REPLICATION_FIELDS: &[FieldSpec] = &[
    NAME,
    EMAIL,
    MOBILE,
    FieldSpec {
        name: "notes",
        payload_key: "additionalNotes",
        label: "Additional Notes",
        rule: Rule::Optional,
        initial: "",
        required_message: "",
        invalid_message: None,
    },
];

/// A form: the operation it submits to and its ordered field table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormSchema {
    operation: Operation,
    fields: &'static [FieldSpec],
}

impl FormSchema {
    /// The contact page form.
    #[must_use]
    pub fn contact() -> Self {
        Self::for_operation(Operation::Contact)
    }

    /// The free quote form.
    #[must_use]
    pub fn quote() -> Self {
        Self::for_operation(Operation::Quote)
    }

    /// The design replication form.
    #[must_use]
    pub fn replication() -> Self {
        Self::for_operation(Operation::Replication)
    }

    /// The form that submits to `operation`.
    #[must_use]
    pub fn for_operation(operation: Operation) -> Self {
        let fields = match operation {
            Operation::Contact => CONTACT_FIELDS,
            Operation::Quote => QUOTE_FIELDS,
            Operation::Replication => REPLICATION_FIELDS,
        };
        Self { operation, fields }
    }

    /// All three forms, in display order.
    #[must_use]
    pub fn all() -> [Self; 3] {
        [Self::contact(), Self::quote(), Self::replication()]
    }

    #[must_use]
    pub fn operation(&self) -> Operation {
        self.operation
    }

    #[must_use]
    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    /// Look up a field by its form-state name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Text shown in place of the form once a submission is accepted.
    ///
    /// `project` is the portfolio item title for replication requests and
    /// is ignored by the other forms.
    #[must_use]
    pub fn thank_you(&self, project: Option<&str>) -> String {
        match self.operation {
            Operation::Contact => "Your message has been sent. We will be in touch within 24 hours \
                                   to discuss your project."
                .to_owned(),
            Operation::Quote => "Thank you for your interest. We've received your details and will \
                                 get back to you within one business day with your free quote."
                .to_owned(),
            Operation::Replication => format!(
                "Thank you for your interest in the '{}' design. We will contact you shortly to \
                 discuss the next steps.",
                project.unwrap_or("selected")
            ),
        }
    }
}
