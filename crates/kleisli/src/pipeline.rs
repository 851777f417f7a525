use crate::{
    compose::identity,
    lift::lift_all,
    traits::{Chain, Function},
};
use log::trace;
use std::fmt;

/// Right to left Kleisli composition of any number of functions `A -> M<B>`.
///
/// `compose_k!(h, g, f)` is `compose!(chain_lift(h), chain_lift(g), chain_lift(f))`, so the
/// composed function takes an already wrapped value and `f` runs first. Each stage's output is
/// flattened by [`Chain::chain`] before the next stage sees it. With no functions this is
/// [`identity`].
///
/// ```
/// use kleisli::compose_k;
///
/// let parse = |s: &str| s.parse::<u32>().ok();
/// let reciprocal = |n: u32| (n != 0).then(|| 1.0 / n as f64);
/// let f = compose_k!(reciprocal, parse);
/// assert_eq!(f(Some("4")), Some(0.25));
/// assert_eq!(f(Some("0")), None);
/// assert_eq!(f(Some("four")), None);
/// ```
#[macro_export]
macro_rules! compose_k {
    () => {
        $crate::compose::identity
    };
    ($($f:expr),+ $(,)?) => {
        $crate::compose!($($crate::lift::chain_lift($f)),+)
    };
}

/// Left to right Kleisli composition. `pipe_k!(f, g, h)` is `compose_k!(h, g, f)`.
#[macro_export]
macro_rules! pipe_k {
    () => {
        $crate::compose::identity
    };
    ($($f:expr),+ $(,)?) => {
        $crate::pipe!($($crate::lift::chain_lift($f)),+)
    };
}

/// Kleisli composition of a runtime sized list of arrows `A -> M` which all share a type.
///
/// For arrows that change types between stages use [`compose_k!`] instead.
pub struct KleisliPipeline<M> {
    /// The lifted stages in the order they run.
    stages: Vec<Box<dyn Fn(M) -> M>>,
}

impl<M: 'static> KleisliPipeline<M> {
    /// Right to left. The last arrow runs first.
    pub fn compose<A, I, F>(arrows: I) -> Self
    where
        M: Chain<A, M>,
        A: 'static,
        I: IntoIterator<Item = F>,
        F: Fn(A) -> M + 'static,
    {
        let mut stages = lift_all(arrows);
        stages.reverse();
        Self::from_stages(stages)
    }

    /// Left to right. The first arrow runs first.
    pub fn pipe<A, I, F>(arrows: I) -> Self
    where
        M: Chain<A, M>,
        A: 'static,
        I: IntoIterator<Item = F>,
        F: Fn(A) -> M + 'static,
    {
        Self::from_stages(lift_all(arrows))
    }

    fn from_stages(stages: Vec<Box<dyn Fn(M) -> M>>) -> Self {
        trace!("Composing {} kleisli stages", stages.len());
        Self { stages }
    }
}

impl<M> KleisliPipeline<M> {
    /// Run the pipeline on an already wrapped value.
    ///
    /// Stages run one after another in a loop, so stack use doesn't grow with the pipeline length.
    pub fn apply(&self, input: M) -> M {
        if self.stages.is_empty() {
            return identity(input);
        }
        self.stages.iter().fold(input, |m, stage| stage(m))
    }

    /// Number of arrows in the pipeline.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl<M> Function for KleisliPipeline<M> {
    type Input = M;
    type Output = M;

    fn map(&self, input: Self::Input) -> Self::Output {
        self.apply(input)
    }
}

impl<M> fmt::Debug for KleisliPipeline<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KleisliPipeline")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}
