//! Day entries - the numbered groups of the vocabulary list

use serde::{Deserialize, Serialize};

/// A single day entry. `id` is always the decimal string of the number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    pub id: String,
    pub day: i64,
}

impl Day {
    /// Build the entry a create request should append: one past the highest
    /// existing number, or 1 when no days exist yet.
    ///
    /// Callers read the current list and then append, so two concurrent
    /// creates can assign the same number. Accepted contract behavior.
    pub fn next(days: &[Day]) -> Day {
        let highest = days.iter().fold(0, |max, d| max.max(d.day));
        let number = if highest > 0 { highest + 1 } else { 1 };
        Day {
            id: number.to_string(),
            day: number,
        }
    }

    /// Linear search by day number.
    pub fn find_by_number(days: &[Day], number: i64) -> Option<&Day> {
        days.iter().find(|d| d.day == number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(n: i64) -> Day {
        Day {
            id: n.to_string(),
            day: n,
        }
    }

    #[test]
    fn first_day_is_one() {
        let next = Day::next(&[]);
        assert_eq!(next.day, 1);
        assert_eq!(next.id, "1");
    }

    #[test]
    fn next_is_one_past_highest() {
        let days = vec![day(1), day(2), day(3)];
        let next = Day::next(&days);
        assert_eq!(next.day, 4);
        assert_eq!(next.id, "4");
    }

    #[test]
    fn next_uses_highest_not_last() {
        // Order in the stored array is not guaranteed to be sorted.
        let days = vec![day(5), day(2)];
        assert_eq!(Day::next(&days).day, 6);
    }

    #[test]
    fn find_by_number_hit_and_miss() {
        let days = vec![day(1), day(2)];
        assert_eq!(Day::find_by_number(&days, 2), Some(&days[1]));
        assert_eq!(Day::find_by_number(&days, 7), None);
    }

    #[test]
    fn serializes_with_contract_field_names() {
        let json = serde_json::to_value(day(3)).unwrap();
        assert_eq!(json, serde_json::json!({"id": "3", "day": 3}));
    }
}
