use kleisli::{Chain, Of};

/// An optional value defined outside the library to check the capability traits are enough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Maybe<T> {
    Just(T),
    Nothing,
}

impl<A, B> Chain<A, Maybe<B>> for Maybe<A> {
    fn chain<F>(self, mut f: F) -> Maybe<B>
    where
        F: FnMut(A) -> Maybe<B>,
    {
        match self {
            Maybe::Just(x) => f(x),
            Maybe::Nothing => Maybe::Nothing,
        }
    }
}

impl<A> Of<A> for Maybe<A> {
    fn of(value: A) -> Self {
        Maybe::Just(value)
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(x) => Maybe::Just(x),
            None => Maybe::Nothing,
        }
    }
}
