use std::fmt::Display;

/// A prediction capability: maps a feature matrix to one label per row.
///
/// The output must be parallel to the input, one label per feature row.
/// Implemented for any fallible closure, so a plain function works at the
/// call site. Infallible predictors can use [`std::convert::Infallible`] as
/// their error type.
pub trait Predictor<X, L> {
    type Error: Display;

    fn predict(&self, features: &[X]) -> std::result::Result<Vec<L>, Self::Error>;
}

impl<X, L, E, F> Predictor<X, L> for F
where
    F: Fn(&[X]) -> std::result::Result<Vec<L>, E>,
    E: Display,
{
    type Error = E;

    fn predict(&self, features: &[X]) -> std::result::Result<Vec<L>, E> {
        self(features)
    }
}
