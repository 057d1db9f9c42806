use serde::{Deserialize, Serialize};

use super::ascii::CaseClass;

/// Before/after case and space statistics for one line
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChangeRecord {
    pub lower_before: usize,
    pub lower_after: usize,
    pub upper_before: usize,
    pub upper_after: usize,
    pub spaces_before: usize,
    pub spaces_after: usize,
}

impl ChangeRecord {
    /// Count one letter that was `before` and ends up `after`
    pub fn record_letter(&mut self, before: CaseClass, after: CaseClass) {
        match before {
            CaseClass::Lower => self.lower_before += 1,
            CaseClass::Upper => self.upper_before += 1,
            CaseClass::Other => return,
        }
        match after {
            CaseClass::Lower => self.lower_after += 1,
            CaseClass::Upper => self.upper_after += 1,
            CaseClass::Other => {}
        }
    }

    /// Undo the "after" count of a byte that was deleted
    pub fn retract_after(&mut self, removed: u8) {
        match CaseClass::of(removed) {
            CaseClass::Lower => self.lower_after = self.lower_after.saturating_sub(1),
            CaseClass::Upper => self.upper_after = self.upper_after.saturating_sub(1),
            CaseClass::Other => {}
        }
    }

    /// Add another record into this one, used for batch totals
    pub fn accumulate(&mut self, other: &ChangeRecord) {
        self.lower_before += other.lower_before;
        self.lower_after += other.lower_after;
        self.upper_before += other.upper_before;
        self.upper_after += other.upper_after;
        self.spaces_before += other.spaces_before;
        self.spaces_after += other.spaces_after;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_letter_ignores_non_letters() {
        let mut changes = ChangeRecord::default();
        changes.record_letter(CaseClass::Other, CaseClass::Upper);
        assert_eq!(changes, ChangeRecord::default());

        changes.record_letter(CaseClass::Lower, CaseClass::Upper);
        changes.record_letter(CaseClass::Upper, CaseClass::Lower);
        assert_eq!(changes.lower_before, 1);
        assert_eq!(changes.upper_after, 1);
        assert_eq!(changes.upper_before, 1);
        assert_eq!(changes.lower_after, 1);
    }

    #[test]
    fn test_retract_after_never_underflows() {
        let mut changes = ChangeRecord::default();
        changes.retract_after(b'a');
        changes.retract_after(b'A');
        changes.retract_after(b'1');
        assert_eq!(changes, ChangeRecord::default());
    }

    #[test]
    fn test_accumulate() {
        let mut total = ChangeRecord::default();
        let line = ChangeRecord { lower_before: 1, lower_after: 2, upper_before: 3, upper_after: 4, spaces_before: 5, spaces_after: 6 };
        total.accumulate(&line);
        total.accumulate(&line);
        assert_eq!(total.lower_before, 2);
        assert_eq!(total.spaces_after, 12);
    }
}
