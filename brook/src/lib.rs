//! Fluent, chainable transformations over in-memory integer and string
//! sequences: mapping, filtering, deduplication, sorting, slicing and
//! aggregation.
//!
//! Every transformation returns a brand-new sequence with its own backing
//! storage, so an intermediate sequence can be handed to several
//! independent chains without the chains affecting each other.
//!
//! ```rust
//! use brook::IntegerSequence;
//!
//! let result = IntegerSequence::new(vec![5, 6, -1, 1, 1, 1, 1, 1, 4, 2, 3])
//!     .distinct()
//!     .sorted()
//!     .skip(1)
//!     .limit(5)
//!     .collect();
//! assert_eq!(result, vec![1, 2, 3, 4, 5]);
//! ```

mod integer;
mod string;

pub use integer::IntegerSequence;
pub use string::StringSequence;
