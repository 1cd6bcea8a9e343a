pub(crate) mod framer;
pub(crate) mod transform;
