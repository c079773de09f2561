use super::types::Response;

/// Presence filter on the respondent's email address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseFilter {
    #[default]
    All,
    Identified,
    Anonymous,
}

impl ResponseFilter {
    /// Query-string form: `all` (default), `identified`, `anonymous`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("identified") => ResponseFilter::Identified,
            Some("anonymous") => ResponseFilter::Anonymous,
            _ => ResponseFilter::All,
        }
    }

    fn matches(self, response: &Response) -> bool {
        match self {
            ResponseFilter::All => true,
            ResponseFilter::Identified => response.is_identified(),
            ResponseFilter::Anonymous => !response.is_identified(),
        }
    }
}

/// Submission-time ordering; ties keep creation order (stable sort).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
}

impl SortOrder {
    /// Query-string form: `newest` (default) or `oldest`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("oldest") => SortOrder::Oldest,
            _ => SortOrder::Newest,
        }
    }
}

/// Apply filter and sort to responses listed in creation order.
pub fn filter_and_sort(
    responses: Vec<Response>,
    filter: ResponseFilter,
    order: SortOrder,
) -> Vec<Response> {
    let mut kept: Vec<Response> = responses
        .into_iter()
        .filter(|r| filter.matches(r))
        .collect();

    match order {
        SortOrder::Oldest => kept.sort_by_key(|r| r.submitted_at),
        SortOrder::Newest => kept.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at)),
    }
    kept
}
