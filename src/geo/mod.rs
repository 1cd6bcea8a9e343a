pub(crate) mod counts;
pub(crate) mod feature;
pub(crate) mod path;
