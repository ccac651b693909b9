//! Built-in language definitions.

pub(crate) mod css;
pub(crate) mod html;
pub(crate) mod java;
pub(crate) mod javascript;
pub(crate) mod python;
