/// Help line drawn over the preview.
pub const HELP_TEXT: &str = "\"Esc\" to Quit, \"H\" for Help, \"F\" to Toggle Fullscreen";

/// One `put_text` call: where, what colour (BGR), how thick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextPass {
    pub origin: (i32, i32),
    pub color: [u8; 3],
    pub thickness: i32,
    pub scale: f64,
}

/// Dark outline, drawn first, one pixel right of the fill.
pub const HELP_OUTLINE: TextPass = TextPass {
    origin: (11, 20),
    color: [32, 32, 32],
    thickness: 4,
    scale: 1.0,
};

pub const HELP_FILL: TextPass = TextPass {
    origin: (10, 20),
    color: [240, 240, 240],
    thickness: 1,
    scale: 1.0,
};

/// Outline then fill, so the text stays legible on any background.
pub const HELP_PASSES: [TextPass; 2] = [HELP_OUTLINE, HELP_FILL];
