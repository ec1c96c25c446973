pub mod encode_png;
