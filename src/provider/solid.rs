use std::sync::LazyLock;

use super::Provider;
use crate::model::{IconDescriptor, IconStyle};

const STYLE: IconStyle = IconStyle::Solid;

pub static CODE: IconDescriptor = IconDescriptor::new("code", "Code", STYLE, 0xF121);
pub static DATABASE: IconDescriptor = IconDescriptor::new("database", "Database", STYLE, 0xF1C0);
pub static SERVER: IconDescriptor = IconDescriptor::new("server", "Server", STYLE, 0xF233);
pub static BOOK_READER: IconDescriptor =
    IconDescriptor::new("book-reader", "Book Reader", STYLE, 0xF5DA);
pub static SQUARE_ROOT_ALT: IconDescriptor =
    IconDescriptor::new("square-root-alt", "Alternate Square Root", STYLE, 0xF698);
pub static TERMINAL: IconDescriptor = IconDescriptor::new("terminal", "Terminal", STYLE, 0xF120);
pub static BUG: IconDescriptor = IconDescriptor::new("bug", "Bug", STYLE, 0xF188);
pub static CLOUD: IconDescriptor = IconDescriptor::new("cloud", "Cloud", STYLE, 0xF0C2);
pub static COGS: IconDescriptor = IconDescriptor::new("cogs", "Cogs", STYLE, 0xF085);
pub static GLOBE: IconDescriptor = IconDescriptor::new("globe", "Globe", STYLE, 0xF0AC);
pub static MICROCHIP: IconDescriptor = IconDescriptor::new("microchip", "Microchip", STYLE, 0xF2DB);
pub static SITEMAP: IconDescriptor = IconDescriptor::new("sitemap", "Sitemap", STYLE, 0xF0E8);

static PROVIDER: LazyLock<Provider> = LazyLock::new(|| {
    Provider::new(
        "solid",
        STYLE,
        &[
            &CODE,
            &DATABASE,
            &SERVER,
            &BOOK_READER,
            &SQUARE_ROOT_ALT,
            &TERMINAL,
            &BUG,
            &CLOUD,
            &COGS,
            &GLOBE,
            &MICROCHIP,
            &SITEMAP,
        ],
    )
});

pub fn provider() -> &'static Provider {
    LazyLock::force(&PROVIDER)
}
