//! Grouping of selected days into consecutive blocks for summary display.

use chrono::{Duration, NaiveDate};

/// A maximal run of consecutive calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    Single(NaiveDate),
    Span { first: NaiveDate, last: NaiveDate },
}

impl Block {
    pub fn first(&self) -> NaiveDate {
        match self {
            Block::Single(date) => *date,
            Block::Span { first, .. } => *first,
        }
    }

    pub fn last(&self) -> NaiveDate {
        match self {
            Block::Single(date) => *date,
            Block::Span { last, .. } => *last,
        }
    }

    pub fn day_count(&self) -> i64 {
        (self.last() - self.first()).num_days() + 1
    }

    fn from_bounds(first: NaiveDate, last: NaiveDate) -> Block {
        if first == last {
            Block::Single(first)
        } else {
            Block::Span { first, last }
        }
    }
}

/// Greedy left-to-right grouping of a sorted, distinct sequence of dates.
/// Two dates share a block iff the second is exactly one day after the first.
pub fn group_consecutive(dates: &[NaiveDate]) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut iter = dates.iter().copied();
    let Some(mut first) = iter.next() else {
        return blocks;
    };
    let mut last = first;

    for date in iter {
        if date == last + Duration::days(1) {
            last = date;
        } else {
            blocks.push(Block::from_bounds(first, last));
            first = date;
            last = date;
        }
    }
    blocks.push(Block::from_bounds(first, last));
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_empty_input() {
        assert!(group_consecutive(&[]).is_empty());
    }

    #[test]
    fn test_run_and_singleton() {
        let dates = [
            date(2024, 1, 1),
            date(2024, 1, 2),
            date(2024, 1, 3),
            date(2024, 1, 10),
        ];
        let blocks = group_consecutive(&dates);
        assert_eq!(
            blocks,
            vec![
                Block::Span {
                    first: date(2024, 1, 1),
                    last: date(2024, 1, 3),
                },
                Block::Single(date(2024, 1, 10)),
            ]
        );
    }

    #[test]
    fn test_run_across_month_boundary() {
        let dates = [date(2024, 1, 31), date(2024, 2, 1)];
        let blocks = group_consecutive(&dates);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].day_count(), 2);
    }

    #[test]
    fn test_all_singletons() {
        let dates = [date(2024, 3, 1), date(2024, 3, 4), date(2024, 3, 8)];
        let blocks = group_consecutive(&dates);
        assert_eq!(blocks.len(), 3);
        assert!(blocks.iter().all(|b| matches!(b, Block::Single(_))));
    }

    #[test]
    fn test_blocks_ascending() {
        let dates = [date(2024, 5, 1), date(2024, 5, 2), date(2024, 5, 10), date(2024, 5, 11)];
        let blocks = group_consecutive(&dates);
        assert!(blocks.windows(2).all(|w| w[0].last() < w[1].first()));
    }
}
