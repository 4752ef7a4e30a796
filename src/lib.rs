//! A doubly linked chain that is built front to back and handed out by its
//! tail, plus an iterator that walks it back to the front.
//!
//! ```
//! let tail = backlist::build([1, 2, 3, 4]).unwrap();
//!
//! for value in tail.iter_back() {
//!     println!("{}", value);
//! }
//!
//! assert_eq!(tail.iter_back().copied().collect::<Vec<_>>(), [4, 3, 2, 1]);
//! ```

pub mod chain;
pub mod truthy;

pub use chain::{build, iter_back, Iter, Node};
pub use truthy::{Truthy, UntilFalsy};
