//! Marker palette for the lot map.
//!
//! Approximates the bold ANSI green/red/yellow/blue look of a 16-color
//! terminal on a dark background.

use parkgrid_core::Color;

/// Free spot 'O'.
pub const FREE: Color = Color::from_rgb(80, 200, 80);
/// Occupied spot 'X'.
pub const OCCUPIED: Color = Color::from_rgb(255, 85, 85);
/// Your starting location 'Y'.
pub const ORIGIN: Color = Color::from_rgb(220, 200, 60);
/// The found spot 'A'.
pub const SPOT: Color = Color::from_rgb(100, 130, 255);
