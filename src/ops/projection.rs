use indexmap::IndexMap;
use serde::Serialize;

use crate::model::email::{Category, Email, EmailGroup, EmailId};

/// One visible group after filtering: borrowed label and emails
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupView<'a> {
    pub label: &'a str,
    pub emails: Vec<&'a Email>,
}

/// Project groups through an optional category filter. Group and email order
/// are preserved; groups with nothing left are omitted. No filter returns
/// everything.
pub fn project(groups: &[EmailGroup], filter: Option<Category>) -> Vec<GroupView<'_>> {
    groups
        .iter()
        .filter_map(|group| {
            let emails: Vec<&Email> = group
                .emails
                .iter()
                .filter(|e| filter.is_none_or(|c| e.category == Some(c)))
                .collect();
            if emails.is_empty() {
                None
            } else {
                Some(GroupView {
                    label: &group.label,
                    emails,
                })
            }
        })
        .collect()
}

/// Ids of the projection in display order
pub fn visible_ids(groups: &[EmailGroup], filter: Option<Category>) -> Vec<EmailId> {
    project(groups, filter)
        .into_iter()
        .flat_map(|g| g.emails.into_iter().map(|e| e.id.clone()))
        .collect()
}

/// Unfiltered number of emails per category, for every category in tab order
pub fn category_counts(groups: &[EmailGroup]) -> IndexMap<Category, usize> {
    let mut counts: IndexMap<Category, usize> =
        Category::ALL.into_iter().map(|c| (c, 0)).collect();
    for email in groups.iter().flat_map(|g| g.emails.iter()) {
        if let Some(c) = email.category
            && let Some(n) = counts.get_mut(&c)
        {
            *n += 1;
        }
    }
    counts
}

/// Neighbor of `id` inside its own group of the projection: the next email,
/// else the previous one, else none.
pub fn neighbor_in_group(
    groups: &[EmailGroup],
    filter: Option<Category>,
    id: &EmailId,
) -> Option<EmailId> {
    let view = project(groups, filter);
    let group = view
        .iter()
        .find(|g| g.emails.iter().any(|e| &e.id == id))?;
    let pos = group.emails.iter().position(|e| &e.id == id)?;
    group
        .emails
        .get(pos + 1)
        .or_else(|| pos.checked_sub(1).and_then(|p| group.emails.get(p)))
        .map(|e| e.id.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::fixture::load_fixture;

    fn ids<'a>(view: &'a [GroupView<'a>]) -> Vec<Vec<&'a str>> {
        view.iter()
            .map(|g| g.emails.iter().map(|e| e.id.as_str()).collect())
            .collect()
    }

    fn mixed_groups() -> Vec<EmailGroup> {
        vec![
            EmailGroup::new(
                "",
                vec![
                    Email::new("a", "A", "a", "s", "p", "d").with_category(Category::Important),
                    Email::new("b", "B", "b", "s", "p", "d"),
                ],
            ),
            EmailGroup::new(
                "Last 7 days",
                vec![Email::new("d", "D", "d", "s", "p", "d").with_category(Category::News)],
            ),
        ]
    }

    #[test]
    fn no_filter_is_identity() {
        let (mailbox, _) = load_fixture().unwrap();
        let view = project(mailbox.groups(), None);
        assert_eq!(
            ids(&view),
            vec![vec!["1", "2", "3", "4"], vec!["5", "6", "7"], vec!["8"]]
        );
        assert_eq!(view[1].label, "Last 7 days");
    }

    #[test]
    fn filter_keeps_order_and_drops_empty_groups() {
        let (mailbox, _) = load_fixture().unwrap();
        let view = project(mailbox.groups(), Some(Category::News));
        assert_eq!(ids(&view), vec![vec!["3"], vec!["6"]]);
        assert_eq!(view[0].label, "");
        assert_eq!(view[1].label, "Last 7 days");
    }

    #[test]
    fn news_filter_with_single_match() {
        let groups = mixed_groups();
        let view = project(&groups, Some(Category::News));
        assert_eq!(view.len(), 1);
        assert_eq!(ids(&view), vec![vec!["d"]]);

        let counts = category_counts(&groups);
        assert_eq!(counts[&Category::News], 1);
        assert_eq!(counts[&Category::Important], 1);
        assert_eq!(counts[&Category::Github], 0);
        assert_eq!(counts[&Category::Other], 0);
    }

    #[test]
    fn counts_cover_every_category_in_order() {
        let (mailbox, _) = load_fixture().unwrap();
        let counts = category_counts(mailbox.groups());
        let keys: Vec<Category> = counts.keys().copied().collect();
        assert_eq!(keys, Category::ALL.to_vec());
        assert_eq!(counts[&Category::Important], 2);
        assert_eq!(counts[&Category::News], 2);
        assert_eq!(counts[&Category::Linear], 0);
    }

    #[test]
    fn uncategorized_emails_count_nowhere() {
        let groups = mixed_groups();
        let total: usize = category_counts(&groups).values().sum();
        assert_eq!(total, 2);
        assert!(total <= groups.iter().map(|g| g.emails.len()).sum());
    }

    #[test]
    fn filter_with_no_matches_is_empty() {
        let groups = mixed_groups();
        assert!(project(&groups, Some(Category::Linear)).is_empty());
        assert!(visible_ids(&groups, Some(Category::Linear)).is_empty());
    }

    #[test]
    fn neighbor_prefers_next_then_previous() {
        let (mailbox, _) = load_fixture().unwrap();
        let g = mailbox.groups();
        assert_eq!(neighbor_in_group(g, None, &EmailId::new("1")), Some(EmailId::new("2")));
        assert_eq!(neighbor_in_group(g, None, &EmailId::new("4")), Some(EmailId::new("3")));
        assert_eq!(neighbor_in_group(g, None, &EmailId::new("8")), None);
    }

    #[test]
    fn neighbor_uses_filtered_view() {
        let (mailbox, _) = load_fixture().unwrap();
        let g = mailbox.groups();
        // Under "important" the first group is [1, 2]
        assert_eq!(
            neighbor_in_group(g, Some(Category::Important), &EmailId::new("2")),
            Some(EmailId::new("1"))
        );
        // Under "news" email 6 is alone in its group
        assert_eq!(neighbor_in_group(g, Some(Category::News), &EmailId::new("6")), None);
    }
}
