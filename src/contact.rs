//! Contact relay contract.
//!
//! Parses the JSON body posted by the contact form, drops bot submissions
//! that fill the hidden `company` field, validates the remaining fields and
//! hands a composed message to a [`MailTransport`]. Delivery itself is the
//! transport's business.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Pause before answering a honeypot submission, so bots see a plausible send.
pub const HONEYPOT_DELAY: Duration = Duration::from_millis(300);

pub const DEFAULT_SMTP_PORT: u16 = 465;
pub const DEFAULT_MAIL_FROM: &str = "no-reply@example.com";
pub const DEFAULT_MAIL_TO: &str = "inbox@example.com";
pub const FORM_INCOMPLETE: &str = "Please fill out all fields.";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    /// Honeypot; humans never see it, so it must stay empty.
    #[serde(default)]
    pub company: Option<String>,
}

/// Outcome of the browser-side pre-check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormCheck {
    /// Ready to post (fields trimmed).
    Submit(ContactRequest),
    /// Honeypot filled: report success without posting.
    SilentSuccess,
    Incomplete(&'static str),
}

fn field(v: &Option<String>) -> &str {
    v.as_deref().unwrap_or("")
}

impl ContactRequest {
    pub fn from_json(body: &str) -> Result<Self, ContactError> {
        Ok(serde_json::from_str(body)?)
    }

    fn honeypot_filled(&self) -> bool {
        !field(&self.company).is_empty()
    }

    fn has_required(&self) -> bool {
        [&self.name, &self.email, &self.message]
            .iter()
            .all(|f| !field(f).is_empty())
    }

    /// Trim every field the way the form does before submitting.
    pub fn trimmed(&self) -> Self {
        let t = |v: &Option<String>| Some(field(v).trim().to_string());
        Self {
            name: t(&self.name),
            email: t(&self.email),
            message: t(&self.message),
            company: t(&self.company),
        }
    }

    pub fn check_form(&self) -> FormCheck {
        let req = self.trimmed();
        if req.honeypot_filled() {
            FormCheck::SilentSuccess
        } else if !req.has_required() {
            FormCheck::Incomplete(FORM_INCOMPLETE)
        } else {
            FormCheck::Submit(req)
        }
    }
}

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("malformed request body: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("Missing fields")]
    MissingFields,
    #[error("Email failed to send")]
    Transport(#[source] anyhow::Error),
}

impl ContactError {
    pub fn status(&self) -> u16 {
        match self {
            ContactError::MissingFields => 400,
            // An unreadable body lands in the same catch-all as a failed send.
            ContactError::Malformed(_) | ContactError::Transport(_) => 500,
        }
    }

    fn public_message(&self) -> &'static str {
        match self {
            ContactError::MissingFields => "Missing fields",
            ContactError::Malformed(_) | ContactError::Transport(_) => "Email failed to send",
        }
    }
}

/// JSON reply body: `{"ok":true}` or `{"error":"..."}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactReply {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ok: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ContactReply {
    pub fn for_result(result: &Result<Disposition, ContactError>) -> (u16, ContactReply) {
        match result {
            Ok(_) => (
                200,
                ContactReply {
                    ok: Some(true),
                    error: None,
                },
            ),
            Err(e) => (
                e.status(),
                ContactReply {
                    ok: None,
                    error: Some(e.public_message().to_string()),
                },
            ),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| String::from("{}"))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Disposition {
    Delivered,
    /// Honeypot submission, accepted and dropped.
    Discarded,
}

impl Disposition {
    /// How long the caller should wait before sending the success reply.
    pub fn reply_delay(&self) -> Duration {
        match self {
            Disposition::Delivered => Duration::ZERO,
            Disposition::Discarded => HONEYPOT_DELAY,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MailerConfig {
    pub host: Option<String>,
    pub port: u16,
    /// Implicit TLS, used when talking to port 465.
    pub secure: bool,
    pub user: Option<String>,
    pub pass: Option<String>,
    pub from: String,
    pub to: String,
}

impl MailerConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |k: &str| lookup(k).filter(|v| !v.is_empty());
        let port = get("SMTP_PORT")
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(DEFAULT_SMTP_PORT);
        let user = get("SMTP_USER");
        let from = get("MAIL_FROM")
            .or_else(|| user.clone())
            .unwrap_or_else(|| DEFAULT_MAIL_FROM.to_string());
        Self {
            host: get("SMTP_HOST"),
            port,
            secure: port == 465,
            user,
            pass: get("SMTP_PASS"),
            from,
            to: get("MAIL_TO").unwrap_or_else(|| DEFAULT_MAIL_TO.to_string()),
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|k| std::env::var(k).ok())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutgoingMail {
    pub from: String,
    pub to: String,
    pub reply_to: String,
    pub subject: String,
    pub text: String,
    pub html: String,
}

impl OutgoingMail {
    pub fn compose(config: &MailerConfig, name: &str, email: &str, message: &str) -> Self {
        Self {
            from: config.from.clone(),
            to: config.to.clone(),
            reply_to: email.to_string(),
            subject: format!("Portfolio contact — {name}"),
            text: format!("From: {name} <{email}>\n\n{message}"),
            html: format!(
                "<p><strong>From:</strong> {} &lt;{}&gt;</p><p>{}</p>",
                escape_html(name),
                escape_html(email),
                escape_html(message).replace('\n', "<br/>")
            ),
        }
    }
}

/// Anything that can deliver an [`OutgoingMail`] (SMTP client, queue, test double).
pub trait MailTransport {
    fn send(&mut self, config: &MailerConfig, mail: &OutgoingMail) -> anyhow::Result<()>;
}

/// Escape `&`, `<` and `>`.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn handle_contact<T: MailTransport + ?Sized>(
    body: &str,
    config: &MailerConfig,
    transport: &mut T,
) -> Result<Disposition, ContactError> {
    let req = ContactRequest::from_json(body)?;
    if req.honeypot_filled() {
        log::info!("[contact] honeypot filled; dropping submission");
        return Ok(Disposition::Discarded);
    }
    if !req.has_required() {
        return Err(ContactError::MissingFields);
    }
    let mail = OutgoingMail::compose(
        config,
        field(&req.name),
        field(&req.email),
        field(&req.message),
    );
    transport.send(config, &mail).map_err(|e| {
        log::error!("[contact] send failed: {:?}", e);
        ContactError::Transport(e)
    })?;
    Ok(Disposition::Delivered)
}
