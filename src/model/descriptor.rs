use super::IconStyle;

/// A single renderable glyph owned by one of the built-in providers.
///
/// Descriptors are only ever constructed as statics inside provider modules;
/// everything downstream works with `&'static IconDescriptor` references.
#[derive(Debug, PartialEq, Eq)]
pub struct IconDescriptor {
    pub name: &'static str,
    pub label: &'static str,
    pub style: IconStyle,
    pub codepoint: u32,
}

impl IconDescriptor {
    pub(crate) const fn new(
        name: &'static str,
        label: &'static str,
        style: IconStyle,
        codepoint: u32,
    ) -> IconDescriptor {
        IconDescriptor {
            name,
            label,
            style,
            codepoint,
        }
    }

    /// Class string in the form renderers accept, e.g. `"fas fa-code"`.
    pub fn classes(&self) -> String {
        format!("{} fa-{}", self.style.prefix(), self.name)
    }

    pub fn glyph(&self) -> char {
        char::from_u32(self.codepoint).unwrap_or(char::REPLACEMENT_CHARACTER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes_carry_style_prefix() {
        let icon = IconDescriptor::new("code", "Code", IconStyle::Solid, 0xF121);
        assert_eq!(icon.classes(), "fas fa-code");

        let icon = IconDescriptor::new("linux", "Linux", IconStyle::Brands, 0xF17C);
        assert_eq!(icon.classes(), "fab fa-linux");
    }

    #[test]
    fn glyph_maps_codepoint() {
        let icon = IconDescriptor::new("terminal", "Terminal", IconStyle::Solid, 0xF120);
        assert_eq!(icon.glyph(), '\u{F120}');
    }
}
