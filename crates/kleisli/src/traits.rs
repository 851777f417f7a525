/// Object has a configuration state. It can take an input, process it, and return output.
pub trait Function {
    type Input;
    type Output;

    /// Map the input to the output.
    fn map(&self, input: Self::Input) -> Self::Output;
}

/// A wrapped `A` which can be bound with a continuation `A -> MB` into an `MB`.
///
/// This is `chain`/`bind`/`flatMap`. The continuation's output is returned as is, so a pipeline of
/// chained functions stays flat instead of nesting (no `Option<Option<_>>`).
///
/// Both the item and the result are trait parameters so that they are inferred from the
/// continuation's signature at the call site.
pub trait Chain<A, MB>: Sized {
    /// Feed the wrapped value(s) into `f` and flatten the result.
    fn chain<F>(self, f: F) -> MB
    where
        F: FnMut(A) -> MB;
}

/// Wrap a plain value. The `of`/`return`/`pure` half of a monad.
pub trait Of<A> {
    fn of(value: A) -> Self;
}

/// Free function form of [`Of::of`]. Useful as a pipeline stage, e.g. `compose!(of, str::len)`.
pub fn of<M, A>(value: A) -> M
where
    M: Of<A>,
{
    M::of(value)
}
