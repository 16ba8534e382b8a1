// Analysis generation: the generator seam plus the mock implementation and
// the static copy it draws from.

pub mod generator;
pub mod templates;
