//! Right-to-left Kleisli composition of functions returning a [`Chain`](traits::Chain) type.
//!
//! `compose_k!(h, g, f)` is equivalent to `compose!(chain_lift(h), chain_lift(g), chain_lift(f))`.

/// Capabilities a wrapped value must have to be threaded through a pipeline.
pub mod traits;

/// Plain function composition.
pub mod compose;

/// Lifting `a -> m b` functions into `m a -> m b` through [`Chain::chain`](traits::Chain::chain).
pub mod lift;

/// Kleisli composition. Statically typed macros and a dynamic pipeline.
pub mod pipeline;

/// [`Chain`](traits::Chain) and [`Of`](traits::Of) for standard library types.
mod impls;

pub use crate::{
    compose::identity,
    lift::{chain, chain_lift},
    pipeline::KleisliPipeline,
    traits::{of, Chain, Function, Of},
};
