//! nuframe, a resolver for .NET target framework names, package folders and version ranges.

#![warn(missing_docs)]

pub mod cli;
