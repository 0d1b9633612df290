//! Count the fewest words between one word and a later occurrence of another.
//!
//! ```
//! use wordgap::shortest_distance;
//!
//! let text = ["At Acme, we do care: motivation drives the development"];
//! assert_eq!(shortest_distance(text, "motivation", "development"), Some(2));
//! assert_eq!(shortest_distance(text, "development", "motivation"), None);
//! ```

pub mod finder;
pub mod positions;
pub mod search;

pub use finder::{shortest_distance, DistanceFinder};
pub use search::Strategy;
