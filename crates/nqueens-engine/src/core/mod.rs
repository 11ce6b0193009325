pub use self::{board::*, solution::*};

pub(crate) mod board;
pub(crate) mod solution;
