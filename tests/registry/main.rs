mod generation;
mod lookup;
