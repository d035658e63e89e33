//! Contact link construction
//!
//! Turns the contact record into the entries shown in the contact section,
//! each with a display value and the link it opens.

use crate::portfolio::Contact;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Email,
    LinkedIn,
    GitHub,
    Instagram,
}

impl ContactKind {
    pub fn label(&self) -> &'static str {
        match self {
            ContactKind::Email => "Email",
            ContactKind::LinkedIn => "LinkedIn",
            ContactKind::GitHub => "GitHub",
            ContactKind::Instagram => "Instagram",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactLink {
    pub kind: ContactKind,
    /// Text shown under the label
    pub value: String,
    /// What open/copy acts on
    pub href: String,
}

/// Build contact entries in display order, skipping fields that are not set
///
/// # Arguments
/// * `contact` - The contact record
/// * `display_name` - Shown for the LinkedIn entry (profile URLs are not readable)
///
/// # Examples
/// ```
/// use folio::logic::contact::{contact_links, ContactKind};
/// use folio::portfolio::Contact;
///
/// let contact = Contact {
///     email: Some("me@example.com".into()),
///     instagram: Some("@me".into()),
///     ..Default::default()
/// };
/// let links = contact_links(&contact, "Me");
/// assert_eq!(links[0].kind, ContactKind::Email);
/// assert_eq!(links[0].href, "mailto:me@example.com");
/// assert_eq!(links[1].href, "https://instagram.com/me");
/// ```
pub fn contact_links(contact: &Contact, display_name: &str) -> Vec<ContactLink> {
    let mut links = Vec::with_capacity(4);

    if let Some(email) = &contact.email {
        links.push(ContactLink {
            kind: ContactKind::Email,
            value: email.clone(),
            href: format!("mailto:{}", email),
        });
    }

    if let Some(linkedin) = &contact.linkedin {
        links.push(ContactLink {
            kind: ContactKind::LinkedIn,
            value: display_name.to_string(),
            href: linkedin.clone(),
        });
    }

    if let Some(github) = &contact.github {
        links.push(ContactLink {
            kind: ContactKind::GitHub,
            value: github_handle(github).to_string(),
            href: github.clone(),
        });
    }

    if let Some(instagram) = &contact.instagram {
        links.push(ContactLink {
            kind: ContactKind::Instagram,
            value: instagram.clone(),
            href: instagram_url(instagram),
        });
    }

    links
}

/// Profile URL for an Instagram handle. Only the first `@` is removed.
pub fn instagram_url(handle: &str) -> String {
    format!("https://instagram.com/{}", handle.replacen('@', "", 1))
}

/// Last path segment of a GitHub profile URL (the account name)
pub fn github_handle(url: &str) -> &str {
    url.trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or(url)
}
