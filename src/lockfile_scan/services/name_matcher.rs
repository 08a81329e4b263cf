/// NameMatcher - decides whether a lockfile package name satisfies a query name
///
/// Matching is deliberately loose. In order, first hit wins:
/// 1. exact equality
/// 2. scope equivalence: `@types/node` and `node` match in either direction
/// 3. either name contains the other (`react-dom` matches `react`)
///
/// Step 3 over-matches on purpose; every hit is reviewed by a person, while a
/// missed compromised package is not.
pub struct NameMatcher;

impl NameMatcher {
    pub fn matches(candidate_name: &str, query_name: &str) -> bool {
        if candidate_name == query_name {
            return true;
        }

        if Self::matches_unscoped(candidate_name, query_name)
            || Self::matches_unscoped(query_name, candidate_name)
        {
            return true;
        }

        candidate_name.contains(query_name) || query_name.contains(candidate_name)
    }

    /// `scoped` is `@scope/name` and `plain` equals its `name` part
    fn matches_unscoped(scoped: &str, plain: &str) -> bool {
        if !scoped.starts_with('@') || plain.starts_with('@') {
            return false;
        }

        let mut parts = scoped.split('/');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(_scope), Some(bare_name), None) => bare_name == plain,
            _ => false,
        }
    }
}
