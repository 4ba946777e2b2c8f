use icon_registry::ICONS;

fn main() {
    for icon in &*ICONS {
        println!(
            "U+{:04X}  {:<24}  {}",
            icon.codepoint,
            icon.classes(),
            icon.label
        );
    }
}
