#![deny(missing_docs)]
#![doc = "Textual notation for BHO ordinal terms. The parser produces raw terms for bho-calc to normalize; the renderer prints canonical terms so that parse, normalize, render, and parse again is the identity."]

/// Recursive-descent parser for the notation grammar.
pub mod parse;
/// Term-to-notation rendering.
pub mod print;

pub use parse::parse;
pub use print::render;
