//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (board logic, session control, terminal rendering).
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn position**: (3, 0), or (4, 0) for the O piece
//!
//! # Points
//!
//! | Constant | Value | Awarded for |
//! |----------|-------|-------------|
//! | `SOFT_DROP_POINTS` | 1 | each accepted manual move down |
//! | `HARD_DROP_POINTS` | 2 | each row travelled by a hard drop |
//! | `LINE_CLEAR_POINTS[1..=4]` | 100/300/500/800 | 1 to 4 rows, times `level + 1` |
//!
//! # Drop Intervals by Level
//!
//! Milliseconds between automatic drops. Levels past the end of the table keep
//! the last interval.
//!
//! | Level | Interval |
//! |-------|----------|
//! | 0 | 800ms |
//! | 1 | 720ms |
//! | 2 | 630ms |
//! | 3 | 550ms |
//! | 4 | 470ms |
//! | 5 | 380ms |
//! | 6 | 300ms |
//! | 7 | 220ms |
//! | 8 | 130ms |
//! | 9 | 100ms |
//! | 10-12 | 80ms |
//! | 13-15 | 70ms |
//! | 16-18 | 50ms |
//! | 19+ | 30ms |
//!
//! # Examples
//!
//! ```
//! use blockdrop_types::{Move, PieceKind, RotationDir, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::from_id(6), Some(PieceKind::T));
//! assert_eq!(PieceKind::T.id(), 6);
//! assert_eq!(PieceKind::T.letter(), "T");
//!
//! assert_eq!(Move::RotateRight.rotation(), Some(RotationDir::Right));
//! assert_eq!(Move::HardDrop.rotation(), None);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Default frame tick of the host loop in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Points per accepted soft drop (manual move down)
pub const SOFT_DROP_POINTS: u32 = 1;

/// Points per row travelled during a hard drop
pub const HARD_DROP_POINTS: u32 = 2;

/// Line clear points at level 0, indexed by number of cleared lines.
///
/// Multiplied by `level + 1` when awarded.
pub const LINE_CLEAR_POINTS: [u32; 5] = [0, 100, 300, 500, 800];

/// Cleared lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Drop intervals by level (milliseconds per row)
///
/// Index 0 = Level 0. Levels past the end use the last entry.
pub const LEVEL_INTERVALS_MS: [u32; 21] = [
    800, 720, 630, 550, 470, 380, 300, 220, 130, 100, 80, 80, 80, 70, 70, 70, 50, 50, 50, 30, 30,
];


/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const RED: Rgb = Rgb::new(220, 50, 50);
    pub const YELLOW: Rgb = Rgb::new(240, 220, 80);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Text weight used by `fill_text` on a drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Font {
    #[default]
    Regular,
    Bold,
}

/// The seven tetromino piece kinds
///
/// Ids match the values stored in board cells (0 is an empty cell).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Cell value for this kind (1..=7)
    pub fn id(&self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::J => 2,
            PieceKind::L => 3,
            PieceKind::O => 4,
            PieceKind::S => 5,
            PieceKind::T => 6,
            PieceKind::Z => 7,
        }
    }

    /// Parse a board cell value; `0` and unknown values are not pieces.
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(PieceKind::I),
            2 => Some(PieceKind::J),
            3 => Some(PieceKind::L),
            4 => Some(PieceKind::O),
            5 => Some(PieceKind::S),
            6 => Some(PieceKind::T),
            7 => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Fill color
    ///
    /// - **I**: cyan
    /// - **J**: blue
    /// - **L**: orange
    /// - **O**: yellow
    /// - **S**: green
    /// - **T**: purple
    /// - **Z**: red
    pub fn color(&self) -> Rgb {
        match self {
            PieceKind::I => Rgb::new(80, 220, 220),
            PieceKind::J => Rgb::new(80, 120, 220),
            PieceKind::L => Rgb::new(255, 165, 0),
            PieceKind::O => Rgb::new(240, 220, 80),
            PieceKind::S => Rgb::new(100, 220, 120),
            PieceKind::T => Rgb::new(170, 90, 200),
            PieceKind::Z => Rgb::new(220, 80, 80),
        }
    }

    pub fn letter(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::T => "T",
            PieceKind::Z => "Z",
        }
    }
}

/// Direction of a 90° rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationDir {
    /// Counter-clockwise
    Left,
    /// Clockwise
    Right,
}

/// Piece transforms bound to keys
///
/// Each move produces a candidate piece; the board decides whether it is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// One cell left
    Left,
    /// One cell right
    Right,
    /// One cell down (soft drop, scores on success)
    Down,
    /// One cell down, repeated until blocked, then lock
    HardDrop,
    /// Rotate 90° clockwise
    RotateRight,
    /// Rotate 90° counter-clockwise
    RotateLeft,
}

impl Move {
    /// Rotation requested by this move, if any
    pub fn rotation(&self) -> Option<RotationDir> {
        match self {
            Move::RotateRight => Some(RotationDir::Right),
            Move::RotateLeft => Some(RotationDir::Left),
            _ => None,
        }
    }
}

/// What a key press asks the session to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Transform the falling piece
    Move(Move),
    /// Toggle pause
    Pause,
    /// Force game over
    Escape,
    /// Press the Play control
    Play,
    /// Leave the program
    Quit,
}
