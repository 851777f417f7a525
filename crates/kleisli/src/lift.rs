use crate::traits::Chain;

/// Binds `f` over `m`. Free function form of [`Chain::chain`] with the continuation first.
pub fn chain<M, A, MB, F>(f: F, m: M) -> MB
where
    M: Chain<A, MB>,
    F: FnMut(A) -> MB,
{
    m.chain(f)
}

/// Lifts `f: A -> MB` into `f': M -> MB` where `f'(m) = chain(f, m)`.
///
/// The returned function expects an already wrapped value.
pub fn chain_lift<M, A, MB, F>(f: F) -> impl Fn(M) -> MB
where
    M: Chain<A, MB>,
    F: Fn(A) -> MB,
{
    move |m: M| m.chain(&f)
}

/// Lifts every arrow of an ordered sequence with [`chain_lift`], preserving length and order.
pub fn lift_all<M, A, I, F>(arrows: I) -> Vec<Box<dyn Fn(M) -> M>>
where
    M: Chain<A, M> + 'static,
    A: 'static,
    I: IntoIterator<Item = F>,
    F: Fn(A) -> M + 'static,
{
    arrows
        .into_iter()
        .map(|f| Box::new(chain_lift::<M, A, M, F>(f)) as Box<dyn Fn(M) -> M>)
        .collect()
}
