/// Iterator that is either an untouched source or a transformed pipeline
///
/// Backs the [`ConditionalIterator`](crate::ConditionalIterator) combinators
/// whose two branches produce different adapter types, such as `apply_if`
/// and `union_if`.
pub enum Applied<A, B> {
    /// The condition did not hold; the source passes through unchanged
    Unchanged(A),
    /// The condition held; the transformed pipeline is yielded instead
    Transformed(B),
}

impl<A, B> Iterator for Applied<A, B>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
{
    type Item = A::Item;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Applied::Unchanged(source) => source.next(),
            Applied::Transformed(pipeline) => pipeline.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Applied::Unchanged(source) => source.size_hint(),
            Applied::Transformed(pipeline) => pipeline.size_hint(),
        }
    }
}
