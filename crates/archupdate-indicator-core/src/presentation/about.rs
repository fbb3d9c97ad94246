/// Static information for the About entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AboutInfo {
    /// Application name.
    pub name: &'static str,
    /// Application version.
    pub version: &'static str,
    /// What the application does, plus artwork credits.
    pub description: &'static str,
    /// Copyright line.
    pub copyright: &'static str,
    /// Main developer.
    pub developer: &'static str,
    /// Project homepage.
    pub website: &'static str,
}

/// About information for this build.
pub const ABOUT: AboutInfo = AboutInfo {
    name: "Arch Update Indicator",
    version: env!("CARGO_PKG_VERSION"),
    description: "Creates a taskbar icon that indicates if updates are available and \
provides a context menu to inspect and install them.

Artwork used in this project:

\"Arch linux, archlinux icon\" (from https://www.iconfinder.com/icons/386451/arch_linux_archlinux_icon) \
by Aha-Soft is licensed under Creative Commons (Attribution 3.0 Unported) \
(https://creativecommons.org/licenses/by/3.0/)

\"Green and Red Arch Linux Icons\" are a derivative of \"Arch linux, archlinux icon\" by Aha-Soft, \
used under Creative Commons (Attribution 3.0 Unported). They are hereby licensed under \
Creative Commons (Attribution 3.0 Unported) by epsilontheta.",
    copyright: "MIT License 2019 epsilontheta <voidptr@outlook.de>",
    developer: "epsilontheta",
    website: "https://github.com/epsilontheta/archupdate-indicator",
};

impl AboutInfo {
    /// Title line, e.g. `Arch Update Indicator 1.0.0`.
    pub fn title(&self) -> String {
        format!("{} {}", self.name, self.version)
    }

    /// Short text for a notification body: first paragraph, copyright and website.
    pub fn summary(&self) -> String {
        let first_paragraph = self.description.split("\n\n").next().unwrap_or_default();
        format!("{first_paragraph}\n\n{}\n{}", self.copyright, self.website)
    }
}
