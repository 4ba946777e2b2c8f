use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconStyle {
    Solid,
    Brands,
}

impl IconStyle {
    /// Class prefix used by font-based renderers ("fas"/"fab").
    pub const fn prefix(self) -> &'static str {
        match self {
            IconStyle::Solid => "fas",
            IconStyle::Brands => "fab",
        }
    }
}

impl fmt::Display for IconStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            IconStyle::Solid => "solid",
            IconStyle::Brands => "brands",
        })
    }
}
