//! On-disk save record.
//!
//! ```json
//! {"board":[[2,0,0,0],...],"history":[[[...]]],"score":4,"moves":1,"accumulated_time":12.5}
//! ```
//!
//! Every field is required; a record missing any of them does not deserialize.

use serde::{Deserialize, Serialize};

use crate::core::{Grid, History, SessionState};
use crate::error::StoreError;
use crate::types::{is_tile_value, Cells};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveRecord {
    pub board: Cells,
    /// Oldest first.
    pub history: Vec<Cells>,
    pub score: u64,
    pub moves: u64,
    /// Seconds of play time.
    pub accumulated_time: f64,
}

impl SaveRecord {
    pub fn from_state(state: &SessionState) -> Self {
        Self {
            board: *state.grid().rows(),
            history: state.history().iter().map(|g| *g.rows()).collect(),
            score: state.score(),
            moves: state.moves(),
            accumulated_time: state.accumulated_secs(),
        }
    }

    /// Validate and convert into a live session.
    pub fn into_state(self) -> Result<SessionState, StoreError> {
        let board = validated(self.board, "board")?;
        if self.history.is_empty() {
            return Err(StoreError::InvalidHistory("history is empty".to_string()));
        }
        let snapshots = self
            .history
            .into_iter()
            .enumerate()
            .map(|(i, cells)| validated(cells, &format!("history[{i}]")))
            .collect::<Result<Vec<_>, _>>()?;
        if !self.accumulated_time.is_finite() || self.accumulated_time < 0.0 {
            return Err(StoreError::InvalidTime(self.accumulated_time));
        }

        Ok(SessionState::from_parts(
            board,
            History::from_snapshots(snapshots),
            self.score,
            self.moves,
            self.accumulated_time,
        ))
    }
}

fn validated(cells: Cells, field: &str) -> Result<Grid, StoreError> {
    for row in &cells {
        for &v in row {
            if v != 0 && !is_tile_value(v) {
                return Err(StoreError::InvalidTile {
                    field: field.to_string(),
                    value: v,
                });
            }
        }
    }
    Ok(Grid::from_rows(cells))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{"board":[[2,0,0,0],[0,4,0,0],[0,0,0,0],[0,0,0,8]],
            "history":[[[2,0,0,0],[0,4,0,0],[0,0,0,0],[0,0,0,8]]],
            "score":12,"moves":3,"accumulated_time":42.25}"#
    }

    #[test]
    fn parses_complete_record() {
        let rec: SaveRecord = serde_json::from_str(sample_json()).unwrap();
        let state = rec.into_state().unwrap();
        assert_eq!(state.score(), 12);
        assert_eq!(state.moves(), 3);
        assert_eq!(state.accumulated_secs(), 42.25);
        assert_eq!(state.grid().max_tile(), 8);
        assert_eq!(state.history().len(), 1);
    }

    #[test]
    fn missing_field_is_rejected() {
        for field in ["board", "history", "score", "moves", "accumulated_time"] {
            let mut value: serde_json::Value = serde_json::from_str(sample_json()).unwrap();
            value.as_object_mut().unwrap().remove(field);
            let parsed: Result<SaveRecord, _> = serde_json::from_value(value);
            assert!(parsed.is_err(), "record without {field} should not parse");
        }
    }

    #[test]
    fn wrong_board_shape_is_rejected() {
        let json = r#"{"board":[[2,0,0],[0,4,0,0],[0,0,0,0],[0,0,0,8]],
            "history":[],"score":0,"moves":0,"accumulated_time":0.0}"#;
        assert!(serde_json::from_str::<SaveRecord>(json).is_err());
    }

    #[test]
    fn non_power_of_two_is_rejected() {
        let mut rec: SaveRecord = serde_json::from_str(sample_json()).unwrap();
        rec.board[1][1] = 6;
        assert!(matches!(
            rec.into_state(),
            Err(StoreError::InvalidTile { value: 6, .. })
        ));
    }

    #[test]
    fn tile_above_the_cap_is_rejected() {
        let mut rec: SaveRecord = serde_json::from_str(sample_json()).unwrap();
        rec.board[0] = [2147483648, 2147483648, 0, 0];
        assert!(matches!(
            rec.into_state(),
            Err(StoreError::InvalidTile { value: 2147483648, .. })
        ));

        let mut rec: SaveRecord = serde_json::from_str(sample_json()).unwrap();
        rec.history[0][3][3] = 262144;
        assert!(matches!(
            rec.into_state(),
            Err(StoreError::InvalidTile { value: 262144, .. })
        ));
    }

    #[test]
    fn empty_history_is_rejected() {
        let mut rec: SaveRecord = serde_json::from_str(sample_json()).unwrap();
        rec.history.clear();
        assert!(matches!(rec.into_state(), Err(StoreError::InvalidHistory(_))));
    }

    #[test]
    fn negative_time_is_rejected() {
        let mut rec: SaveRecord = serde_json::from_str(sample_json()).unwrap();
        rec.accumulated_time = -1.0;
        assert!(matches!(rec.into_state(), Err(StoreError::InvalidTime(_))));
    }

    #[test]
    fn field_names_match_layout() {
        let rec: SaveRecord = serde_json::from_str(sample_json()).unwrap();
        let value = serde_json::to_value(&rec).unwrap();
        let obj = value.as_object().unwrap();
        for field in ["board", "history", "score", "moves", "accumulated_time"] {
            assert!(obj.contains_key(field));
        }
    }
}
