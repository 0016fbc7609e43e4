//! Best win streaks
//!
//! Kept in memory for the life of the process; tracks the top 10 streaks.

use serde::{Deserialize, Serialize};

/// Maximum number of streaks to keep
pub const MAX_RECORDS: usize = 10;

/// A single ended streak
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreakEntry {
    /// Consecutive landings
    pub streak: u32,
    /// Stage reached when the streak ended
    pub stage: u32,
    /// Session time (seconds) when it ended
    pub ended_at: f64,
}

impl StreakEntry {
    fn key(&self) -> (u32, u32) {
        (self.streak, self.stage)
    }
}

/// Streak leaderboard
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StreakRecords {
    pub entries: Vec<StreakEntry>,
}

impl StreakRecords {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Whether a streak ending at `stage` would make the board
    pub fn qualifies(&self, streak: u32, stage: u32) -> bool {
        streak > 0
            && (self.entries.len() < MAX_RECORDS
                || self.entries.last().is_none_or(|last| (streak, stage) > last.key()))
    }

    /// Record an ended streak. Returns the rank achieved (1-indexed).
    ///
    /// Longer streaks rank first; equal streaks are split by the stage the
    /// run reached, and a full tie goes behind the streak already recorded.
    pub fn submit(&mut self, streak: u32, stage: u32, ended_at: f64) -> Option<usize> {
        if !self.qualifies(streak, stage) {
            return None;
        }
        let index = self.entries.partition_point(|e| e.key() >= (streak, stage));
        self.entries.insert(index, StreakEntry { streak, stage, ended_at });
        self.entries.truncate(MAX_RECORDS);
        Some(index + 1)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Longest streak recorded so far
    pub fn best(&self) -> Option<u32> {
        self.entries.first().map(|e| e.streak)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_streak_never_recorded() {
        let mut records = StreakRecords::new();
        assert_eq!(records.submit(0, 0, 1.0), None);
        assert!(records.is_empty());
    }

    #[test]
    fn test_ranked_descending() {
        let mut records = StreakRecords::new();
        assert_eq!(records.submit(2, 2, 1.0), Some(1));
        assert_eq!(records.submit(5, 5, 2.0), Some(1));
        assert_eq!(records.submit(3, 3, 3.0), Some(2));
        assert_eq!(records.submit(3, 3, 4.0), Some(3));
        let streaks: Vec<u32> = records.entries.iter().map(|e| e.streak).collect();
        assert_eq!(streaks, vec![5, 3, 3, 2]);
        assert_eq!(records.best(), Some(5));
    }

    #[test]
    fn test_equal_streaks_split_by_stage() {
        let mut records = StreakRecords::new();
        // A streak that started late ends on a higher stage than one from stage 0
        assert_eq!(records.submit(3, 3, 1.0), Some(1));
        assert_eq!(records.submit(3, 7, 2.0), Some(1));
        assert_eq!(records.submit(3, 5, 3.0), Some(2));
        let stages: Vec<u32> = records.entries.iter().map(|e| e.stage).collect();
        assert_eq!(stages, vec![7, 5, 3]);
    }

    #[test]
    fn test_full_board_truncates() {
        let mut records = StreakRecords::new();
        for i in 1..=MAX_RECORDS as u32 {
            records.submit(i + 1, 0, i as f64);
        }
        assert!(!records.qualifies(1, 9));
        assert!(!records.qualifies(2, 0));
        // Same streak as the last entry but further along
        assert!(records.qualifies(2, 1));
        assert_eq!(records.submit(20, 9, 99.0), Some(1));
        assert_eq!(records.entries.len(), MAX_RECORDS);
        assert_eq!(records.entries.last().map(|e| e.streak), Some(3));
    }
}
