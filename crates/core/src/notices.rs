//! Admin notification text assembly.
//!
//! Pure formatting: deterministic `(subject, body)` pairs built from record
//! fields. Delivery is the email crate's concern; whether a notice is sent at
//! all is decided by the admin settings the boundary passes in.

/// A rendered notification ready for the mailer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub subject: String,
    pub body: String,
}

/// Notice sent to the admin when a new name is submitted.
pub fn submission_notice(
    name_english: &str,
    name_hebrew: &str,
    category_name: &str,
    submitter_email: &str,
) -> Notice {
    Notice {
        subject: "A new name has been submitted to your davening list".to_string(),
        body: format!(
            "The name {name_english} ({name_hebrew}) has been submitted under the \
             category '{category_name}' by {submitter_email}."
        ),
    }
}

/// Notice sent to the admin when an existing name is updated.
pub fn update_notice(
    name_english: &str,
    name_hebrew: &str,
    category_name: &str,
    submitter_email: &str,
) -> Notice {
    Notice {
        subject: "A name on your davening list has been updated".to_string(),
        body: format!(
            "{submitter_email} has updated the name {name_english} ({name_hebrew}) \
             in the category '{category_name}'."
        ),
    }
}

/// One-off urgent notice broadcast for a specific request.
pub fn urgent_notice(
    name_english: &str,
    name_hebrew: &str,
    category_name: &str,
) -> Notice {
    Notice {
        subject: format!("Urgent tefillah request: {name_english}"),
        body: format!(
            "Please daven urgently for {name_english} ({name_hebrew}), \
             category '{category_name}'."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_notice_mentions_all_fields() {
        let n = submission_notice("Ploni", "Almoni", "Refua Shelema", "new@sub.com");
        assert!(n.body.contains("Ploni"));
        assert!(n.body.contains("Almoni"));
        assert!(n.body.contains("Refua Shelema"));
        assert!(n.body.contains("new@sub.com"));
    }

    #[test]
    fn notices_are_deterministic() {
        let a = update_notice("A", "B", "C", "d@e.fg");
        let b = update_notice("A", "B", "C", "d@e.fg");
        assert_eq!(a, b);
    }

    #[test]
    fn urgent_notice_subject_carries_the_name() {
        let n = urgent_notice("Ploni", "Almoni", "Refua Shelema");
        assert_eq!(n.subject, "Urgent tefillah request: Ploni");
    }
}
