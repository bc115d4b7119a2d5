pub mod density;
pub mod font;
pub mod icon_gen;
