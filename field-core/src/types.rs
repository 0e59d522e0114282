/// Identifier for a point in a [`crate::field::Field`].
///
/// This is an index into `Field::points`, and is only meaningful within
/// the lifetime of a given `Field` instance.
pub type PointId = usize;
