//! Sorted slot table
//!
//! Keeps `CAPACITY` slots in a plain array. After every mutation:
//!
//! - slots `[0, first_occupied)` are disabled
//! - slots `[first_occupied, CAPACITY)` are enabled, ascending by width
//!
//! A single update breaks the order in at most one place, so it is restored
//! with one insertion-sort step instead of a full sort.

use servomux_hal::PinId;

use super::{is_valid_width, Slot, CAPACITY, DISABLED};
use crate::error::ServoError;

/// Fixed-capacity table of servo slots sorted by pulse width
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SlotTable {
    slots: [Slot; CAPACITY],
    /// Index of the first enabled slot (== number of disabled slots)
    first_occupied: usize,
}

impl Default for SlotTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SlotTable {
    /// Create a table with every slot disabled
    pub const fn new() -> Self {
        Self {
            slots: [Slot::EMPTY; CAPACITY],
            first_occupied: CAPACITY,
        }
    }

    /// Disable every slot and forget all pins
    pub fn clear(&mut self) {
        self.slots = [Slot::EMPTY; CAPACITY];
        self.first_occupied = CAPACITY;
    }

    /// Set the pulse width for `pin`
    ///
    /// Width 0 disables the pin. A pin that already holds an enabled slot is
    /// updated in place; otherwise the first disabled slot is claimed.
    /// Disabling a pin that holds no slot leaves the table untouched, but
    /// still needs a free slot like any other new pin.
    ///
    /// # Errors
    /// - [`ServoError::InvalidPulseWidth`] if the width is nonzero and out of range
    /// - [`ServoError::NoFreeSlot`] if the pin is new and every slot is enabled
    pub fn upsert(&mut self, pin: PinId, width_us: u16) -> Result<(), ServoError> {
        if !is_valid_width(width_us) {
            return Err(ServoError::InvalidPulseWidth);
        }

        let target = match self.position(pin) {
            Some(index) => index,
            None if self.first_occupied == 0 => return Err(ServoError::NoFreeSlot),
            None if width_us == DISABLED => return Ok(()),
            None => 0,
        };

        self.place(target, Slot::new(pin, width_us));
        Ok(())
    }

    /// Disable `pin`
    ///
    /// Returns `true` if the pin held an enabled slot. Unlike
    /// [`upsert`](Self::upsert) with width 0, never reports
    /// [`ServoError::NoFreeSlot`].
    pub fn disable(&mut self, pin: PinId) -> bool {
        match self.position(pin) {
            Some(index) => {
                self.place(index, Slot::new(pin, DISABLED));
                true
            }
            None => false,
        }
    }

    /// Pulse width stored for `pin`, or 0 if the pin holds no enabled slot
    pub fn get(&self, pin: PinId) -> u16 {
        self.position(pin)
            .map_or(DISABLED, |index| self.slots[index].width_us)
    }

    /// Index of the first enabled slot
    ///
    /// Equals [`CAPACITY`] when nothing is enabled.
    pub fn first_occupied(&self) -> usize {
        self.first_occupied
    }

    /// Enabled slots, ascending by width
    pub fn enabled(&self) -> &[Slot] {
        &self.slots[self.first_occupied..]
    }

    /// All slots, disabled ones first
    pub fn slots(&self) -> &[Slot; CAPACITY] {
        &self.slots
    }

    /// Number of enabled slots
    pub fn enabled_count(&self) -> usize {
        CAPACITY - self.first_occupied
    }

    /// Check if no new pin can be added
    pub fn is_full(&self) -> bool {
        self.first_occupied == 0
    }

    /// Check the ordering invariant
    ///
    /// Always true for tables mutated only through this type; exposed for
    /// tests and debug assertions in callers.
    pub fn is_sorted(&self) -> bool {
        let (disabled, enabled) = self.slots.split_at(self.first_occupied);
        disabled.iter().all(|slot| !slot.is_enabled())
            && enabled.iter().all(Slot::is_enabled)
            && enabled.windows(2).all(|pair| pair[0].width_us <= pair[1].width_us)
    }

    /// Enabled slot index for `pin`
    ///
    /// Disabled slots keep stale pin numbers, so only the enabled range is
    /// searched.
    fn position(&self, pin: PinId) -> Option<usize> {
        self.slots[self.first_occupied..]
            .iter()
            .position(|slot| slot.pin == pin)
            .map(|offset| self.first_occupied + offset)
    }

    /// Write `slot` into `index` and restore the ordering
    fn place(&mut self, index: usize, slot: Slot) {
        let mut index = index;

        // Bubble down: pull the target back to the start of the enabled run
        // it belongs to, shifting the enabled predecessors up one place.
        while index > 0 && self.slots[index - 1].is_enabled() {
            self.slots[index] = self.slots[index - 1];
            index -= 1;
        }
        self.slots[index] = slot;

        // Bubble up: swap past every successor with a smaller width. Disabled
        // successors count as width 0, so a new slot claimed at the front
        // walks across the disabled region into place.
        while index + 1 < CAPACITY && self.slots[index + 1].width_us < slot.width_us {
            self.slots.swap(index, index + 1);
            index += 1;
        }

        self.first_occupied = self
            .slots
            .iter()
            .position(Slot::is_enabled)
            .unwrap_or(CAPACITY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widths(table: &SlotTable) -> [u16; CAPACITY] {
        let mut out = [0; CAPACITY];
        for (w, slot) in out.iter_mut().zip(table.slots()) {
            *w = slot.width_us;
        }
        out
    }

    fn filled() -> SlotTable {
        let mut table = SlotTable::new();
        for (i, pin) in (1..=8u8).enumerate() {
            table.upsert(pin, 100 * (i as u16 + 1)).unwrap();
        }
        table
    }

    #[test]
    fn test_new_table_is_empty() {
        let table = SlotTable::new();
        assert_eq!(table.first_occupied(), CAPACITY);
        assert_eq!(table.enabled_count(), 0);
        assert!(table.enabled().is_empty());
        assert!(!table.is_full());
        assert!(table.is_sorted());
    }

    #[test]
    fn test_upsert_then_get() {
        let mut table = SlotTable::new();
        table.upsert(5, 1500).unwrap();

        assert_eq!(table.get(5), 1500);
        assert_eq!(table.get(6), 0);
        assert_eq!(table.first_occupied(), CAPACITY - 1);
        assert_eq!(table.enabled(), &[Slot::new(5, 1500)]);
    }

    #[test]
    fn test_insert_keeps_ascending_order() {
        let mut table = SlotTable::new();
        table.upsert(1, 2000).unwrap();
        table.upsert(2, 500).unwrap();
        table.upsert(3, 1200).unwrap();
        table.upsert(4, 3000).unwrap();
        table.upsert(5, 100).unwrap();

        assert_eq!(widths(&table), [0, 0, 0, 100, 500, 1200, 2000, 3000]);
        let pins: [u8; 5] = core::array::from_fn(|i| table.enabled()[i].pin);
        assert_eq!(pins, [5, 2, 3, 1, 4]);
        assert!(table.is_sorted());
    }

    #[test]
    fn test_update_in_place_moves_slot() {
        let mut table = SlotTable::new();
        table.upsert(1, 500).unwrap();
        table.upsert(2, 1000).unwrap();
        table.upsert(3, 1500).unwrap();

        // Shortest becomes longest
        table.upsert(1, 2500).unwrap();
        assert_eq!(table.enabled_count(), 3);
        assert_eq!(table.get(1), 2500);
        assert_eq!(table.enabled().last(), Some(&Slot::new(1, 2500)));

        // Longest becomes shortest
        table.upsert(1, 200).unwrap();
        assert_eq!(table.enabled_count(), 3);
        assert_eq!(table.enabled().first(), Some(&Slot::new(1, 200)));
        assert!(table.is_sorted());
    }

    #[test]
    fn test_equal_widths() {
        let mut table = SlotTable::new();
        table.upsert(1, 1000).unwrap();
        table.upsert(2, 1000).unwrap();
        table.upsert(3, 1000).unwrap();

        assert_eq!(table.enabled_count(), 3);
        assert!(table.is_sorted());
        assert_eq!(table.get(1), 1000);
        assert_eq!(table.get(2), 1000);
        assert_eq!(table.get(3), 1000);
    }

    #[test]
    fn test_disable_removes_pin() {
        let mut table = SlotTable::new();
        table.upsert(1, 800).unwrap();
        table.upsert(2, 1600).unwrap();

        table.upsert(1, 0).unwrap();
        assert_eq!(table.get(1), 0);
        assert_eq!(table.get(2), 1600);
        assert_eq!(table.enabled_count(), 1);
        assert!(table.is_sorted());

        assert!(table.disable(2));
        assert!(!table.disable(2));
        assert_eq!(table.enabled_count(), 0);
        assert_eq!(table.first_occupied(), CAPACITY);
    }

    #[test]
    fn test_disable_unknown_pin_is_noop() {
        let mut table = SlotTable::new();
        table.upsert(1, 900).unwrap();
        let before = table.clone();

        assert_eq!(table.upsert(42, 0), Ok(()));
        assert_eq!(table, before);
    }

    #[test]
    fn test_disable_unknown_pin_on_full_table() {
        let mut table = filled();
        let before = table.clone();

        assert_eq!(table.upsert(20, 0), Err(ServoError::NoFreeSlot));
        assert_eq!(table, before);

        // The lenient path stays quiet
        assert!(!table.disable(20));
        assert_eq!(table, before);
    }

    #[test]
    fn test_invalid_width_leaves_table_unchanged() {
        let mut table = SlotTable::new();
        table.upsert(1, 700).unwrap();
        let before = table.clone();

        assert_eq!(table.upsert(2, 50), Err(ServoError::InvalidPulseWidth));
        assert_eq!(table.upsert(1, 3001), Err(ServoError::InvalidPulseWidth));
        assert_eq!(table, before);
    }

    #[test]
    fn test_full_table_rejects_new_pin() {
        let mut table = filled();
        assert!(table.is_full());
        assert_eq!(widths(&table), [100, 200, 300, 400, 500, 600, 700, 800]);

        assert_eq!(table.upsert(9, 900), Err(ServoError::NoFreeSlot));

        // Existing pins can still be updated
        assert_eq!(table.upsert(1, 900), Ok(()));
        assert_eq!(table.enabled().last(), Some(&Slot::new(1, 900)));

        // Freeing a slot makes room again
        table.upsert(2, 0).unwrap();
        assert_eq!(table.upsert(9, 900), Ok(()));
        assert!(table.is_sorted());
    }

    #[test]
    fn test_pin_zero_is_tracked() {
        // Disabled slots also carry pin 0; lookups must not confuse them
        let mut table = SlotTable::new();
        table.upsert(0, 1000).unwrap();
        assert_eq!(table.get(0), 1000);

        table.upsert(0, 1200).unwrap();
        assert_eq!(table.enabled_count(), 1);
        assert_eq!(table.get(0), 1200);
    }

    #[test]
    fn test_clear() {
        let mut table = filled();
        table.clear();
        assert_eq!(table, SlotTable::new());
        for pin in 0..=8 {
            assert_eq!(table.get(pin), 0);
        }
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Reference model: enabled pins and widths in insertion order
    fn model_upsert(model: &mut Vec<(PinId, u16)>, pin: PinId, width_us: u16) -> bool {
        if !is_valid_width(width_us) {
            return false;
        }
        match model.iter().position(|&(p, _)| p == pin) {
            Some(i) if width_us == DISABLED => {
                model.remove(i);
            }
            Some(i) => model[i].1 = width_us,
            None if model.len() == CAPACITY => return false,
            None if width_us == DISABLED => {}
            None => model.push((pin, width_us)),
        }
        true
    }

    fn width_strategy() -> impl Strategy<Value = u16> {
        prop_oneof![
            3 => 100u16..=3000,
            2 => Just(0u16),
            1 => 1u16..100,
            1 => 3001u16..=u16::MAX,
        ]
    }

    fn check_against_model(table: &SlotTable, model: &[(PinId, u16)]) {
        assert!(table.is_sorted());
        assert_eq!(table.enabled_count(), model.len());
        assert_eq!(table.first_occupied(), CAPACITY - model.len());
        for &(pin, width_us) in model {
            assert_eq!(table.get(pin), width_us);
        }
    }

    proptest! {
        #[test]
        fn prop_upsert_sequence_matches_model(
            ops in proptest::collection::vec((0u8..12, width_strategy()), 0..64)
        ) {
            let mut table = SlotTable::new();
            let mut model = Vec::new();

            for (pin, width_us) in ops {
                let before = table.clone();
                let accepted = model_upsert(&mut model, pin, width_us);
                let result = table.upsert(pin, width_us);

                prop_assert_eq!(result.is_ok(), accepted);
                if result.is_err() {
                    prop_assert_eq!(&table, &before);
                }
                check_against_model(&table, &model);
            }
        }

        #[test]
        fn prop_boundary_moves_by_one(
            seed in proptest::collection::vec(100u16..=3000, 0..=CAPACITY),
            pin in 0u8..12,
            width_us in prop_oneof![Just(0u16), 100u16..=3000],
        ) {
            let mut table = SlotTable::new();
            for (i, &w) in seed.iter().enumerate() {
                table.upsert(i as PinId, w).unwrap();
            }
            let first_before = table.first_occupied();
            let was_enabled = table.get(pin) != DISABLED;

            let result = table.upsert(pin, width_us);

            let expected_first = match (was_enabled, width_us == DISABLED, result.is_ok()) {
                (_, _, false) => first_before,
                (true, true, _) => first_before + 1,
                (false, false, _) => first_before - 1,
                _ => first_before,
            };
            prop_assert_eq!(table.first_occupied(), expected_first);
            prop_assert!(table.is_sorted());
            if result.is_ok() {
                prop_assert_eq!(table.get(pin), width_us);
            } else {
                prop_assert_eq!(result, Err(ServoError::NoFreeSlot));
                prop_assert!(table.is_full());
            }
        }
    }
}
