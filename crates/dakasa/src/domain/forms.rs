//! The concrete forms of the application and the requests built from them.

use chrono::{Local, NaiveDate};
use identity::{
    LoginRequest, RecoveryCloseRequest, RecoveryCreateRequest, RecoveryValidateRequest,
    RegistrationRequest,
};

use super::validators::{self, Verdict, VALIDATION_CODE_LEN};
use super::wizard::FormWizard;
use crate::form::{Form, FormField, FormFieldKind, FormSchema, FormState};

/// Field keys shared by the forms, the request builders and the tests.
pub mod keys {
    pub const IDENTIFIER: &str = "identifier";
    pub const PASSWORD: &str = "password";
    pub const PASSWORD_CONFIRM: &str = "password_confirm";
    pub const USERNAME: &str = "username";
    pub const AVATAR: &str = "avatar";
    pub const EMAIL: &str = "email";
    pub const EMAIL_CONFIRM: &str = "email_confirm";
    pub const NAME: &str = "name";
    pub const BIRTHDAY: &str = "birthday";
    pub const ADDRESS: &str = "address";
    pub const PHONE: &str = "phone_number";
    pub const CODE: &str = "code";
}

pub const REGISTRATION_STEPS: usize = 3;

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn message(verdict: Verdict) -> Result<(), String> {
    verdict.map_err(|e| e.to_string())
}

fn password_pair() -> Vec<FormField> {
    vec![
        FormField::new(keys::PASSWORD, "Password", FormFieldKind::Secret)
            .required()
            .help("8+ characters with upper and lower case, a digit and a symbol")
            .validator(|v, _| message(validators::password(v))),
        FormField::new(keys::PASSWORD_CONFIRM, "Confirm password", FormFieldKind::Secret)
            .required()
            .validator(|v, s: &FormState| {
                message(validators::password_confirmation(s.value(keys::PASSWORD), v))
            }),
    ]
}

pub fn login_form() -> Form {
    Form::new(FormSchema::new(
        "Log in",
        vec![
            FormField::new(keys::IDENTIFIER, "Username or email", FormFieldKind::Text).required(),
            FormField::new(keys::PASSWORD, "Password", FormFieldKind::Secret).required(),
        ],
    ))
}

/// Three panels: profile, contact & password, personal details.
pub fn registration_wizard(today: NaiveDate) -> FormWizard {
    let profile = FormSchema::new(
        "Create your account",
        vec![
            FormField::new(keys::USERNAME, "Username", FormFieldKind::Text)
                .required()
                .help("3 to 13 characters: letters, digits, '.', '-' or '_'")
                .validator(|v, _| message(validators::username(v))),
            FormField::new(keys::AVATAR, "Avatar URL", FormFieldKind::Text)
                .help("Optional link to a profile picture"),
        ],
    );

    let mut contact_fields = vec![
        FormField::new(keys::EMAIL, "Email", FormFieldKind::Text)
            .required()
            .validator(|v, _| message(validators::email(v))),
        FormField::new(keys::EMAIL_CONFIRM, "Confirm email", FormFieldKind::Text)
            .required()
            .validator(|v, s: &FormState| {
                message(validators::email_confirmation(s.value(keys::EMAIL), v))
            }),
    ];
    contact_fields.extend(password_pair());
    let contact = FormSchema::new("Contact & password", contact_fields);

    let details = FormSchema::new(
        "About you",
        vec![
            FormField::new(keys::NAME, "Full name", FormFieldKind::Text)
                .required()
                .validator(|v, _| message(validators::name(v))),
            FormField::new(keys::BIRTHDAY, "Birthdate", FormFieldKind::Text)
                .required()
                .help("YYYY-MM-DD or DD/MM/YYYY")
                .validator(move |v, _| message(validators::birthdate(v, today))),
            FormField::new(keys::ADDRESS, "Address", FormFieldKind::Text),
            FormField::new(keys::PHONE, "Phone number", FormFieldKind::Text)
                .validator(|v, _| message(validators::phone_number(v))),
        ],
    );

    FormWizard::new(Form::new(profile), [Form::new(contact), Form::new(details)])
}

pub fn recovery_request_form() -> Form {
    Form::new(
        FormSchema::new(
            "Let's recover this account",
            vec![FormField::new(keys::IDENTIFIER, "Email", FormFieldKind::Text)
                .required()
                .validator(|v, _| message(validators::email(v)))],
        )
        .description("We will send a validation code to your email."),
    )
}

pub fn recovery_code_form() -> Form {
    Form::new(
        FormSchema::new(
            "Validation",
            vec![FormField::new(
                keys::CODE,
                "Validation code",
                FormFieldKind::Digits {
                    max_len: VALIDATION_CODE_LEN,
                },
            )
            .required()
            .help("000000")
            .validator(|v, _| message(validators::validation_code(v)))],
        )
        .description("Enter the code we sent you."),
    )
}

pub fn recovery_password_form() -> Form {
    Form::new(FormSchema::new("Choose a new password", password_pair()))
}

/// `None` unless every step validates.
pub fn registration_request(wizard: &FormWizard) -> Option<RegistrationRequest> {
    if !wizard.all_valid() {
        return None;
    }
    let birthday = validators::parse_birthdate(wizard.value(keys::BIRTHDAY)).ok()?;
    Some(RegistrationRequest {
        username: wizard.value(keys::USERNAME).to_string(),
        email: wizard.value(keys::EMAIL).trim().to_string(),
        password: wizard.value(keys::PASSWORD).to_string(),
        name: wizard.value(keys::NAME).trim().to_string(),
        birthday,
        phone_number: wizard.optional(keys::PHONE),
        address: wizard.optional(keys::ADDRESS),
        avatar: wizard.optional(keys::AVATAR),
    })
}

pub fn login_request(form: &Form) -> LoginRequest {
    LoginRequest::new(form.value(keys::IDENTIFIER).trim(), form.value(keys::PASSWORD))
}

pub fn recovery_create_request(form: &Form) -> RecoveryCreateRequest {
    RecoveryCreateRequest {
        identifier: form.value(keys::IDENTIFIER).trim().to_string(),
    }
}

pub fn recovery_validate_request(ticket: &str, form: &Form) -> RecoveryValidateRequest {
    RecoveryValidateRequest {
        ticket: ticket.to_string(),
        code: form.value(keys::CODE).to_string(),
    }
}

pub fn recovery_close_request(ticket: &str, password: &str) -> RecoveryCloseRequest {
    RecoveryCloseRequest {
        ticket: ticket.to_string(),
        password: password.to_string(),
    }
}
