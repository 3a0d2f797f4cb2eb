pub mod collaborators;
pub mod random;

pub use collaborators::{Classifier, NarrativeGenerator, Renderer};
pub use random::{FixedSequence, RandomSource, RngSource};
