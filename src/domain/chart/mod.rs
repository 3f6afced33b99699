//! Chart aggregate: what can be plotted and how it is shaped for the widget.

pub mod entities;
pub mod figure;
pub mod value_objects;

pub use entities::*;
pub use figure::*;
pub use value_objects::*;
