#[doc(hidden)]
pub mod err;
#[cfg(test)]
pub(crate) mod fixtures;
