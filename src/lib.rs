/// Event tree: dispatcher, nodes, subscriber contexts, rate-limit combinators.
pub mod events;

// -----------------------------------------------------------------------------
//  Frequently used public types
// -----------------------------------------------------------------------------

/// Event tree API: Emitter, Context, Handler, Several, Through.
pub use events::{parse_path, Context, Emitter, EventNode, Handler, Several, Through};
