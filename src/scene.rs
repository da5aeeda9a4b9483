pub(crate) mod grid;
pub(crate) mod op;
pub(crate) mod painter;
