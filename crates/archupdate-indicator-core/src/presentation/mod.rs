mod about;
mod appearance;
mod menu;

pub use {
    about::{ABOUT, AboutInfo},
    appearance::{StatusIcon, TrayAppearance, icon_for},
    menu::{MenuAction, MenuEntry, build_menu_descriptor},
};
