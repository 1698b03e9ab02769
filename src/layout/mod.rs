//! Table layout: turns a contract curve into a renderer-agnostic tree.

pub mod builder;
pub mod format;
pub mod model;
pub mod node;
pub mod rows;
pub mod style;

pub use builder::TableLayoutBuilder;
pub use model::TableModel;
pub use style::TableStyle;
