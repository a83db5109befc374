use termimad::{
    MadSkin,
    crossterm::style::{Attribute, Color},
};

/// Warm palette: streak headers burn orange, highlighted days glow yellow.
pub struct Ember;

impl Ember {
    pub fn skin() -> MadSkin {
        let mut skin = MadSkin::default();

        skin.paragraph.set_fg(Ember::FG);

        skin.headers[0].set_fg(Ember::FLAME);
        skin.headers[0].add_attr(Attribute::Bold);

        skin.bold.set_fg(Ember::GOLD);
        skin.italic.set_fg(Ember::ASH);
        skin.quote_mark.set_char('┃');
        skin.quote_mark.set_fg(Ember::FLAME);
        skin.table.set_fg(Ember::ASH);

        skin
    }

    pub const FG: Color = Color::Rgb {
        r: 0xE8,
        g: 0xE3,
        b: 0xD9,
    }; // #E8E3D9
    pub const FLAME: Color = Color::Rgb {
        r: 0xF2,
        g: 0x6B,
        b: 0x1D,
    }; // #F26B1D
    pub const GOLD: Color = Color::Rgb {
        r: 0xF5,
        g: 0xC2,
        b: 0x42,
    }; // #F5C242
    pub const ASH: Color = Color::Rgb {
        r: 0x8A,
        g: 0x84,
        b: 0x7A,
    }; // #8A847A
    pub const WARN: Color = Color::Rgb {
        r: 0xE0,
        g: 0x6C,
        b: 0x75,
    }; // #E06C75
}
