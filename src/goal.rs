/// Goal of a search: a literal target node, or a predicate over nodes for
/// searches where no single target identity exists.
pub enum Goal<N> {
    Node(N),
    Predicate(Box<dyn Fn(&N) -> bool + Send + Sync>),
}

impl<N: Eq> Goal<N> {
    /// Goal met by any node the predicate accepts
    pub fn predicate(f: impl Fn(&N) -> bool + Send + Sync + 'static) -> Self {
        Goal::Predicate(Box::new(f))
    }

    /// Collapse both variants into one goal test
    /// Resolved once per search, before the frontier is seeded
    pub(crate) fn matcher(&self) -> Box<dyn Fn(&N) -> bool + Send + Sync + '_>
    where
        N: Sync,
    {
        match self {
            Goal::Node(target) => Box::new(move |node| node == target),
            Goal::Predicate(test) => Box::new(move |node| test(node)),
        }
    }
}

impl<N> From<N> for Goal<N> {
    fn from(node: N) -> Self {
        Goal::Node(node)
    }
}
