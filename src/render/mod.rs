pub(crate) mod areas;
pub(crate) mod legend;
pub(crate) mod map;
pub(crate) mod pipeline;
pub(crate) mod raster;
pub(crate) mod scene;
pub(crate) mod style;
