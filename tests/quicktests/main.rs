//! Exercises the public API the way a caller would: the walkthrough scenario step by step, plus
//! property tests for the whole-tree comparisons.

mod comparisons;
mod scenario;
