use std::sync::LazyLock;

use super::Provider;
use crate::model::{IconDescriptor, IconStyle};

const STYLE: IconStyle = IconStyle::Brands;

pub static CSS3: IconDescriptor = IconDescriptor::new("css3", "CSS 3 Logo", STYLE, 0xF13C);
pub static GOOGLE: IconDescriptor = IconDescriptor::new("google", "Google Logo", STYLE, 0xF1A0);
pub static HTML5: IconDescriptor = IconDescriptor::new("html5", "HTML 5 Logo", STYLE, 0xF13B);
pub static JS: IconDescriptor = IconDescriptor::new("js", "JavaScript (JS)", STYLE, 0xF3B8);
pub static LINUX: IconDescriptor = IconDescriptor::new("linux", "Linux", STYLE, 0xF17C);
pub static PHP: IconDescriptor = IconDescriptor::new("php", "PHP", STYLE, 0xF457);
pub static JAVA: IconDescriptor = IconDescriptor::new("java", "Java", STYLE, 0xF4E4);
pub static DOCKER: IconDescriptor = IconDescriptor::new("docker", "Docker", STYLE, 0xF395);
pub static GITHUB: IconDescriptor = IconDescriptor::new("github", "GitHub", STYLE, 0xF09B);
pub static PYTHON: IconDescriptor = IconDescriptor::new("python", "Python", STYLE, 0xF3E2);
pub static RUST: IconDescriptor = IconDescriptor::new("rust", "Rust", STYLE, 0xE07A);

static PROVIDER: LazyLock<Provider> = LazyLock::new(|| {
    Provider::new(
        "brands",
        STYLE,
        &[
            &CSS3, &GOOGLE, &HTML5, &JS, &LINUX, &PHP, &JAVA, &DOCKER, &GITHUB, &PYTHON, &RUST,
        ],
    )
});

pub fn provider() -> &'static Provider {
    LazyLock::force(&PROVIDER)
}
