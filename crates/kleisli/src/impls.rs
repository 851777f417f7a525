use crate::traits::{Chain, Of};

impl<A, B> Chain<A, Option<B>> for Option<A> {
    fn chain<F>(self, f: F) -> Option<B>
    where
        F: FnMut(A) -> Option<B>,
    {
        self.and_then(f)
    }
}

impl<A> Of<A> for Option<A> {
    fn of(value: A) -> Self {
        Some(value)
    }
}

impl<A, B, E> Chain<A, Result<B, E>> for Result<A, E> {
    fn chain<F>(self, f: F) -> Result<B, E>
    where
        F: FnMut(A) -> Result<B, E>,
    {
        self.and_then(f)
    }
}

impl<A, E> Of<A> for Result<A, E> {
    fn of(value: A) -> Self {
        Ok(value)
    }
}

impl<A, B> Chain<A, Vec<B>> for Vec<A> {
    fn chain<F>(self, f: F) -> Vec<B>
    where
        F: FnMut(A) -> Vec<B>,
    {
        self.into_iter().flat_map(f).collect()
    }
}

impl<A> Of<A> for Vec<A> {
    fn of(value: A) -> Self {
        vec![value]
    }
}
