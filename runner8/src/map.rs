//! Scrolling obstacle map.
//!
//! A map is a read-only sequence of byte-wide columns, one bit per matrix
//! row. The visible window is `WINDOW` consecutive columns starting at the
//! scroll offset, which is why the last valid offset is `len - WINDOW`.

use log::warn;

/// Number of map columns visible at once
pub const WINDOW: usize = 8;

/// Reference level, twelve empty columns of lead-in, obstacles, then a clear
/// run-out of twenty-eight columns
#[rustfmt::skip]
pub static LEVEL: [u8; 120] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x80, 0x80, 0xC0, 0xC0, 0xE0, 0xE0, 0x80, 0x80,
    0x80, 0x80, 0xC0, 0xC0, 0x80, 0x80, 0xE0, 0xE0,
    0x80, 0x80, 0x80, 0xC0, 0xC0, 0x80, 0x86, 0x86,
    0x00, 0x00, 0x80, 0x80, 0xC0, 0xC0, 0x80, 0x80,
    0x00, 0x00, 0x80, 0x80, 0x80, 0xE0, 0xE0, 0x80,
    0x80, 0x80, 0xC0, 0xC0, 0xE0, 0xE0, 0x80, 0x80,
    0x80, 0x80, 0xC0, 0xC0, 0x80, 0x80, 0xE0, 0xE0,
    0x80, 0x80, 0x80, 0xC0, 0xC0, 0x80, 0x86, 0x86,
    0x00, 0x00, 0x80, 0x80, 0xC0, 0xC0, 0x80, 0x80,
    0x00, 0x00, 0x80, 0x80, 0x80, 0xE0, 0xE0, 0x80,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// Lead-in the reference level guarantees
pub const LEVEL_LEAD_IN: usize = 12;

/// Validated view over a map table
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ObstacleMap<'a>(&'a [u8]);

impl<'a> ObstacleMap<'a> {
    /// Wrap a column table, which has to scroll by at least one column
    pub fn new(columns: &'a [u8]) -> Result<Self, &'static str> {
        if columns.len() <= WINDOW {
            Err("Map does not extend past the visible window")
        } else {
            Ok(Self(columns))
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Offset at which the level counts as completed
    pub fn last_offset(&self) -> usize {
        self.0.len() - WINDOW
    }

    /// Number of obstacle-free columns at the start of the map
    pub fn lead_in(&self) -> usize {
        self.0.iter().take_while(|&&column| column == 0).count()
    }

    /// Columns visible at `offset`
    ///
    /// Offsets past `last_offset` are clamped, the window never reads past the
    /// end of the table.
    pub fn window(&self, offset: usize) -> [u8; WINDOW] {
        let offset = if offset > self.last_offset() {
            warn!(
                "scroll offset {} past last offset {}, clamping",
                offset,
                self.last_offset()
            );
            self.last_offset()
        } else {
            offset
        };
        let mut window = [0; WINDOW];
        window.copy_from_slice(&self.0[offset..offset + WINDOW]);
        window
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_level() {
        let map = ObstacleMap::new(&LEVEL).unwrap();
        assert_eq!(map.len(), 120);
        assert_eq!(map.last_offset(), 112);
        assert_eq!(map.lead_in(), LEVEL_LEAD_IN);
    }

    #[test]
    fn reference_level_ends_with_a_clear_run_out() {
        assert_eq!(LEVEL[91], 0x80);
        assert!(LEVEL[92..].iter().all(|&column| column == 0));
        assert_eq!(LEVEL[92..].len(), 28);
    }

    #[test]
    fn too_short() {
        assert_eq!(
            ObstacleMap::new(&[0; 8]),
            Err("Map does not extend past the visible window")
        );
        assert!(ObstacleMap::new(&[0; 9]).is_ok());
    }

    #[test]
    fn window_follows_offset() {
        let columns: [u8; 10] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
        let map = ObstacleMap::new(&columns).unwrap();
        assert_eq!(map.window(0), [0, 1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(map.window(2), [2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn window_is_clamped_at_the_end() {
        let columns: [u8; 10] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
        let map = ObstacleMap::new(&columns).unwrap();
        assert_eq!(map.window(50), map.window(2));
    }
}
