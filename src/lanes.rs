/*!
 * Vertical lane assignment for scrolling comments.
 *
 * Each comment is placed relative to the previous surviving comment only:
 * - the first comment, a comment arriving more than one second after the
 *   previous one, or a comment following one in the bottom-most usable lane
 *   goes to the top lane (row 0)
 * - any other comment goes one font-size row below the previous comment
 *
 * Lanes whose scroll animation is still crossing the screen are not tracked,
 * so a fast burst that wraps back to row 0 can overlap text that is still
 * visible. Output stays compatible with earlier renders of the same chat.
 */

/// Minimum gap (seconds) after which placement restarts from the top lane
pub const LANE_RESET_GAP_SECS: f64 = 1.0;

/// Single-pass lane assigner that remembers only the previous placement
#[derive(Debug, Clone)]
pub struct LaneAssigner {
    playfield_height: u32,
    font_size: u32,
    previous: Option<(f64, u32)>,
}

impl LaneAssigner {
    pub fn new(playfield_height: u32, font_size: u32) -> Self {
        LaneAssigner {
            playfield_height,
            font_size,
            previous: None,
        }
    }

    /// Lowest row at which the next comment wraps back to the top
    fn bottom_row(&self) -> i64 {
        i64::from(self.playfield_height) - 2 * i64::from(self.font_size)
    }

    /// Assign a row to the next comment and remember it
    pub fn assign(&mut self, display_time: f64) -> u32 {
        let row = match self.previous {
            None => 0,
            Some((previous_time, _)) if display_time - previous_time > LANE_RESET_GAP_SECS => 0,
            Some((_, previous_row)) if i64::from(previous_row) >= self.bottom_row() => 0,
            Some((_, previous_row)) => previous_row + self.font_size,
        };

        self.previous = Some((display_time, row));
        row
    }
}
