//! Weekly digest assembly.
//!
//! Given the parasha, the category registry, and the currently active
//! requests, produce a [`DigestPayload`] grouped by category in registry
//! display order. Rendering and delivery are external concerns; this module
//! only shapes the data. Filtering to active, unexpired requests happens in
//! the query that feeds this function.

use serde::Serialize;

use crate::parasha::Parasha;
use crate::types::DbId;

/// Category data the digest needs, detached from the persistence model.
#[derive(Debug, Clone, Serialize)]
pub struct DigestCategory {
    pub id: DbId,
    pub name_english: String,
    pub name_hebrew: String,
    pub display_order: i32,
}

/// One name entry in the digest.
#[derive(Debug, Clone, Serialize)]
pub struct DigestName {
    pub category_id: DbId,
    pub name_english: String,
    pub name_hebrew: String,
    /// `(english, hebrew)` spouse pair for paired categories.
    pub spouse: Option<(String, String)>,
}

/// All names of one category, in submission order.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryGroup {
    pub category: DigestCategory,
    pub names: Vec<DigestName>,
}

/// The assembled digest, ready for the renderer and mailer.
#[derive(Debug, Clone, Serialize)]
pub struct DigestPayload {
    pub parasha_name: String,
    pub full_week_label: String,
    pub groups: Vec<CategoryGroup>,
    pub custom_message: Option<String>,
}

/// Group the active names by category in registry display order.
///
/// Categories with no active names are omitted. The same assembly path
/// serves both the admin-composed send (with a custom message) and the
/// link-triggered resend (without one).
pub fn assemble_weekly(
    parasha: &Parasha,
    categories: &[DigestCategory],
    names: Vec<DigestName>,
    custom_message: Option<String>,
) -> DigestPayload {
    let mut ordered: Vec<&DigestCategory> = categories.iter().collect();
    ordered.sort_by_key(|c| c.display_order);

    let groups = ordered
        .into_iter()
        .map(|category| CategoryGroup {
            category: category.clone(),
            names: names
                .iter()
                .filter(|n| n.category_id == category.id)
                .cloned()
                .collect(),
        })
        .filter(|group| !group.names.is_empty())
        .collect();

    DigestPayload {
        parasha_name: parasha.name.to_string(),
        full_week_label: parasha.full_name.to_string(),
        groups,
        custom_message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parasha;

    fn category(id: DbId, order: i32, name: &str) -> DigestCategory {
        DigestCategory {
            id,
            name_english: name.to_string(),
            name_hebrew: format!("{name}-he"),
            display_order: order,
        }
    }

    fn name(category_id: DbId, english: &str) -> DigestName {
        DigestName {
            category_id,
            name_english: english.to_string(),
            name_hebrew: format!("{english}-he"),
            spouse: None,
        }
    }

    #[test]
    fn groups_follow_registry_display_order() {
        // Category B sorts first by display order even though A has id 1.
        let categories = vec![category(1, 20, "A"), category(2, 10, "B")];
        let names = vec![name(1, "Ploni"), name(2, "Almoni"), name(1, "Shlomo")];

        let payload = assemble_weekly(parasha::find(2).unwrap(), &categories, names, None);

        assert_eq!(payload.parasha_name, "Noach");
        assert_eq!(payload.full_week_label, "Parashat Noach");
        assert_eq!(payload.groups.len(), 2);
        assert_eq!(payload.groups[0].category.name_english, "B");
        assert_eq!(payload.groups[0].names.len(), 1);
        assert_eq!(payload.groups[1].category.name_english, "A");
        assert_eq!(payload.groups[1].names.len(), 2);
    }

    #[test]
    fn empty_categories_are_omitted() {
        let categories = vec![category(1, 1, "A"), category(2, 2, "B")];
        let names = vec![name(1, "Ploni")];

        let payload = assemble_weekly(parasha::find(1).unwrap(), &categories, names, None);

        assert_eq!(payload.groups.len(), 1);
        assert_eq!(payload.groups[0].category.id, 1);
    }

    #[test]
    fn custom_message_is_carried_through() {
        let payload = assemble_weekly(
            parasha::find(1).unwrap(),
            &[],
            vec![],
            Some("Shabbat shalom".to_string()),
        );
        assert_eq!(payload.custom_message.as_deref(), Some("Shabbat shalom"));
    }
}
