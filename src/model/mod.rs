mod collection;
mod descriptor;
mod style;

pub use collection::IconCollection;
pub use descriptor::IconDescriptor;
pub use style::IconStyle;
