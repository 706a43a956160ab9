//! `nbmyst` - Jupyter notebook to MyST preprocessor
//!
//! Rewrites the cells of the notebooks listed in a Jupyter Book table of
//! contents: bare `res/` image links become `{figure}` directives and
//! `<!-- begin NAME -->` ... `<!-- end -->` sections become styled
//! `{admonition}` blocks.

pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
pub mod notebook;
pub mod observability;
pub mod pipeline;
pub mod toc;
