use super::prelude::*;

/// Optional predicates on the attributes of an issue.
///
/// A missing predicate matches all issues.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IssueFilter {
    pub category: Option<IssueCategory>,
    pub status: Option<IssueStatus>,
}

impl IssueFilter {
    pub fn matches(&self, issue: &Issue) -> bool {
        self.category.map_or(true, |category| category == issue.category)
            && self.status.map_or(true, |status| status == issue.status)
    }
}

/// Select the matching issues, preserving their order.
pub fn filter_issues<'a>(
    issues: impl IntoIterator<Item = &'a Issue>,
    filter: IssueFilter,
) -> impl Iterator<Item = &'a Issue> {
    issues.into_iter().filter(move |issue| filter.matches(issue))
}

#[cfg(test)]
mod tests {
    use super::*;
    use civicspot_entities::builders::*;

    fn issues() -> Vec<Issue> {
        vec![
            Issue::build()
                .id("1")
                .category(IssueCategory::RoadDamage)
                .status(IssueStatus::Open)
                .finish(),
            Issue::build()
                .id("2")
                .category(IssueCategory::Lighting)
                .status(IssueStatus::InProgress)
                .finish(),
            Issue::build()
                .id("3")
                .category(IssueCategory::Sanitation)
                .status(IssueStatus::Resolved)
                .finish(),
            Issue::build()
                .id("4")
                .category(IssueCategory::Vegetation)
                .status(IssueStatus::InProgress)
                .finish(),
        ]
    }

    fn ids<'a>(issues: impl Iterator<Item = &'a Issue>) -> Vec<&'a str> {
        issues.map(|issue| issue.id.as_str()).collect()
    }

    #[test]
    fn empty_filter_matches_all() {
        let issues = issues();
        assert_eq!(
            vec!["1", "2", "3", "4"],
            ids(filter_issues(&issues, IssueFilter::default()))
        );
    }

    #[test]
    fn filter_by_status() {
        let issues = issues();
        let filter = IssueFilter {
            status: Some(IssueStatus::InProgress),
            ..Default::default()
        };
        assert_eq!(vec!["2", "4"], ids(filter_issues(&issues, filter)));
    }

    #[test]
    fn filter_by_category_and_status() {
        let issues = issues();
        let filter = IssueFilter {
            category: Some(IssueCategory::Lighting),
            status: Some(IssueStatus::InProgress),
        };
        assert_eq!(vec!["2"], ids(filter_issues(&issues, filter)));
        let filter = IssueFilter {
            category: Some(IssueCategory::Lighting),
            status: Some(IssueStatus::Resolved),
        };
        assert_eq!(0, filter_issues(&issues, filter).count());
    }
}
