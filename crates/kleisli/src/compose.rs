/// Returns its argument unchanged.
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Composes a new function that passes its input into `g` and the result of that into `f`.
///
/// Right to left, `compose(f, g)(x) == f(g(x))`.
pub fn compose<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |input: A| f(g(input))
}

/// Composes a new function that passes its input into `f` and the result of that into `g`.
///
/// Left to right, `pipe(f, g)(x) == g(f(x))`.
pub fn pipe<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    move |input: A| g(f(input))
}

/// Right to left composition of any number of functions.
///
/// `compose!(f, g, h)(x) == f(g(h(x)))`. With no functions this is [`identity`].
///
/// ```
/// use kleisli::compose;
///
/// let f = compose!(|x: i32| x + 1, |x: i32| x * 2);
/// assert_eq!(f(5), 11);
/// assert_eq!(compose!()(5), 5);
/// ```
#[macro_export]
macro_rules! compose {
    () => {
        $crate::compose::identity
    };
    ($f:expr $(,)?) => {
        $f
    };
    ($f:expr, $($rest:expr),+ $(,)?) => {
        $crate::compose::compose($f, $crate::compose!($($rest),+))
    };
}

/// Left to right composition of any number of functions.
///
/// `pipe!(f, g, h)(x) == h(g(f(x)))`. With no functions this is [`identity`].
#[macro_export]
macro_rules! pipe {
    () => {
        $crate::compose::identity
    };
    ($f:expr $(,)?) => {
        $f
    };
    ($f:expr, $($rest:expr),+ $(,)?) => {
        $crate::compose::pipe($f, $crate::pipe!($($rest),+))
    };
}
