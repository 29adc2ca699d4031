//! Contact page: company details plus the quote request form.
//!
//! The form block depends on the submission state. `success` replaces the
//! form with a thank-you note and a "send another message" button; every
//! other state shows the form, prefilled from the session's fields.

use maud::{Markup, html};

use ajil_core::form::{ContactForm, FormState, SERVICE_OPTIONS};
use ajil_core::submission::ContactSession;

/// Shown on `error`, whatever the underlying failure was.
pub const ERROR_MESSAGE: &str =
    "Sorry, we couldn't send your message. Please try again, or email us at info@ajilsoils.com.";

/// Shown on `success`.
pub const SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent. We'll be in touch shortly.";

const PENDING_MESSAGE: &str = "Sending your message…";

const REASONS: [&str; 6] = [
    "Rush delivery available (1-2 days)",
    "Free, no-obligation quotes",
    "Quick response times",
    "After-hours and weekend options",
    "Flexible scheduling that works for you",
    "Expert advice on oil management",
];

pub(super) fn page(session: Option<&ContactSession>) -> Markup {
    let state = session.map_or(FormState::Idle, ContactSession::state);
    let blank = ContactForm::default();
    let fields = session.map_or(&blank, ContactSession::fields);

    html! {
        section class="page" {
            div class="center" {
                span class="eyebrow" { "Get In Touch" }
                h1 class="page-title" { "Contact Ajil's Oils" }
                p class="lead" {
                    "Request a free quote, arrange a delivery, or speak with our team about your requirements. "
                    "We respond quickly and can usually accommodate rush requests within 1-2 days."
                }
            }
            div class="contact-grid" {
                div class="grid" {
                    div class="card" {
                        h3 { "Contact Information" }
                        dl class="contact-info" {
                            dt { "Email" }
                            dd { a href="mailto:info@ajilsoils.com" { "info@ajilsoils.com" } }
                            dt { "Phone" }
                            dd { "+44 XXXX XXXXXX" }
                            dt { "Location" }
                            dd { "United Kingdom" }
                        }
                    }
                    div class="card" {
                        h3 { "Why Contact Us?" }
                        ul class="checks" {
                            @for reason in REASONS {
                                li { (reason) }
                            }
                        }
                    }
                }
                div class="card" id="quote" data-form-state=(state.as_str()) {
                    h3 { "Request a Quote" }
                    (form_block(state, fields))
                }
            }
        }
    }
}

fn form_block(state: FormState, fields: &ContactForm) -> Markup {
    html! {
        @match state {
            FormState::Success => {
                (notice("notice-success", SUCCESS_MESSAGE))
                form class="reset-form" method="post" action="/contact/reset" {
                    button type="submit" class="btn btn-primary" { "Send another message" }
                }
            }
            FormState::Error => {
                (notice("notice-error", ERROR_MESSAGE))
                (quote_form(fields, false))
            }
            FormState::Submitting => {
                (notice("notice-pending", PENDING_MESSAGE))
                (quote_form(fields, true))
            }
            FormState::Idle => {
                (quote_form(fields, false))
            }
        }
    }
}

fn notice(class: &str, message: &str) -> Markup {
    html! {
        div class=(format!("notice {class}")) role="status" { (message) }
    }
}

fn quote_form(fields: &ContactForm, busy: bool) -> Markup {
    html! {
        form class="form" method="post" action="/contact" {
            (input("Name", "name", "text", &fields.name, true))
            (input("Email", "email", "email", &fields.email, true))
            (input("Phone", "phone", "tel", &fields.phone, false))
            (input("Business name", "business", "text", &fields.business, false))
            label {
                "Service"
                select name="service" required {
                    option value="" { "Choose a service" }
                    @for opt in SERVICE_OPTIONS {
                        option value=(opt.value) selected[fields.service == opt.value] { (opt.label) }
                    }
                }
            }
            label {
                "Message"
                textarea name="message" required { (fields.message) }
            }
            @if busy {
                button type="submit" class="btn btn-primary" disabled { "Sending…" }
            } @else {
                button type="submit" class="btn btn-primary" { "Send Message" }
            }
        }
    }
}

fn input(label: &str, name: &str, kind: &str, value: &str, required: bool) -> Markup {
    html! {
        label {
            (label)
            input type=(kind) name=(name) value=(value) required[required];
        }
    }
}
