//! Plain-text rendering of the weekly digest.
//!
//! Turns a [`DigestPayload`] into the subject and body of the weekly list
//! email. Rendering is deterministic; delivery is the mailer's job.

use davenlist_core::digest::DigestPayload;

/// Subject line for the weekly digest email.
pub fn digest_subject(payload: &DigestPayload) -> String {
    format!("Davening list for {}", payload.full_week_label)
}

/// Render the digest body: an optional admin message, then each category
/// heading followed by its names, one per line. Paired names render as
/// "A and B".
pub fn render_digest(payload: &DigestPayload) -> String {
    let mut body = String::new();

    body.push_str(&format!("{}\n\n", payload.full_week_label));

    if let Some(message) = &payload.custom_message {
        body.push_str(message.trim());
        body.push_str("\n\n");
    }

    for group in &payload.groups {
        body.push_str(&format!(
            "== {} ({}) ==\n",
            group.category.name_english, group.category.name_hebrew
        ));
        for name in &group.names {
            match &name.spouse {
                Some((spouse_en, spouse_he)) => body.push_str(&format!(
                    "  {} ({}) and {} ({})\n",
                    name.name_english, name.name_hebrew, spouse_en, spouse_he
                )),
                None => body.push_str(&format!(
                    "  {} ({})\n",
                    name.name_english, name.name_hebrew
                )),
            }
        }
        body.push('\n');
    }

    body
}

#[cfg(test)]
mod tests {
    use davenlist_core::digest::{assemble_weekly, DigestCategory, DigestName};
    use davenlist_core::parasha;

    use super::*;

    fn sample_payload(message: Option<String>) -> DigestPayload {
        let categories = vec![DigestCategory {
            id: 1,
            name_english: "Refua Shelema".to_string(),
            name_hebrew: "רפואה שלמה".to_string(),
            display_order: 1,
        }];
        let names = vec![
            DigestName {
                category_id: 1,
                name_english: "Ploni".to_string(),
                name_hebrew: "Almoni".to_string(),
                spouse: None,
            },
            DigestName {
                category_id: 1,
                name_english: "David".to_string(),
                name_hebrew: "Dovid".to_string(),
                spouse: Some(("Sara".to_string(), "Sarah".to_string())),
            },
        ];
        assemble_weekly(parasha::find(2).unwrap(), &categories, names, message)
    }

    #[test]
    fn subject_carries_the_week_label() {
        let payload = sample_payload(None);
        assert_eq!(digest_subject(&payload), "Davening list for Parashat Noach");
    }

    #[test]
    fn body_lists_names_under_category_heading() {
        let body = render_digest(&sample_payload(None));
        assert!(body.starts_with("Parashat Noach\n"));
        assert!(body.contains("== Refua Shelema"));
        assert!(body.contains("  Ploni (Almoni)\n"));
        assert!(body.contains("  David (Dovid) and Sara (Sarah)\n"));
    }

    #[test]
    fn custom_message_precedes_the_groups() {
        let body = render_digest(&sample_payload(Some("Shabbat shalom".to_string())));
        let message_pos = body.find("Shabbat shalom").unwrap();
        let group_pos = body.find("== Refua").unwrap();
        assert!(message_pos < group_pos);
    }
}
