/// Positional storage where removal leaves a hole instead of shifting later
/// positions, so an index handed out once keeps addressing the same value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slots<T> {
    items: Vec<Option<T>>,
    present: usize,
}

impl<T> Default for Slots<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            present: 0,
        }
    }
}

impl<T> From<Vec<T>> for Slots<T> {
    fn from(values: Vec<T>) -> Self {
        let present = values.len();
        Self {
            items: values.into_iter().map(Some).collect(),
            present,
        }
    }
}

impl<T> Slots<T> {
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index).and_then(Option::as_mut)
    }

    pub fn contains(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    /// Assign at `index`, padding with holes when it lies past the end.
    pub fn set(&mut self, index: usize, value: T) {
        if index >= self.items.len() {
            self.items.resize_with(index + 1, || None);
        }
        if self.items[index].replace(value).is_none() {
            self.present += 1;
        }
    }

    pub fn push(&mut self, value: T) {
        self.items.push(Some(value));
        self.present += 1;
    }

    pub fn remove(&mut self, index: usize) -> Option<T> {
        let removed = self.items.get_mut(index).and_then(Option::take);
        if removed.is_some() {
            self.present -= 1;
        }
        removed
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.present = 0;
    }

    /// Number of occupied positions.
    pub fn len(&self) -> usize {
        self.present
    }

    pub fn is_empty(&self) -> bool {
        self.present == 0
    }

    pub fn values(&self) -> Values<'_, T> {
        Values {
            items: self.items.iter(),
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = (usize, &T)> {
        self.items
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|value| (index, value)))
    }
}

/// Occupied values in position order, skipping holes.
#[derive(Debug, Clone)]
pub struct Values<'a, T> {
    items: std::slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iterator for Values<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.items.find_map(Option::as_ref)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.items.size_hint().1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_leaves_hole() {
        let mut slots = Slots::from(vec!["a", "b", "c"]);
        assert_eq!(slots.remove(1), Some("b"));
        assert_eq!(slots.remove(1), None);
        assert_eq!(slots.len(), 2);
        assert_eq!(slots.get(2), Some(&"c"));
        assert_eq!(slots.entries().map(|(i, _)| i).collect::<Vec<_>>(), vec![0, 2]);
    }

    #[test]
    fn test_set_pads_and_refills() {
        let mut slots = Slots::default();
        slots.set(3, 'x');
        assert_eq!(slots.len(), 1);
        assert!(!slots.contains(0));
        slots.set(3, 'y');
        assert_eq!(slots.len(), 1);
        slots.set(0, 'z');
        assert_eq!(slots.values().collect::<String>(), "zy");
    }
}
