//! Orientation keys and the per-orientation property store

/// Concrete device orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Device held upright
    Portrait,
    /// Device held sideways
    Landscape,
}

impl Orientation {
    /// Both concrete orientations, portrait first
    pub const BOTH: [Orientation; 2] = [Orientation::Portrait, Orientation::Landscape];
}

/// Target selector for per-orientation setters.
///
/// Replaces the sentinel-index convention ("index == count means all") with
/// an explicit parameter: invalid orientations are unrepresentable, and
/// apply-to-all is spelled out at the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Apply to a single concrete orientation
    One(Orientation),
    /// Apply to every concrete orientation uniformly
    All,
}

impl From<Orientation> for Scope {
    fn from(orientation: Orientation) -> Self {
        Scope::One(orientation)
    }
}

/// Fixed two-slot store holding one value per concrete orientation
#[derive(Debug, Clone, Default)]
pub struct PerOrientation<T> {
    portrait: T,
    landscape: T,
}

impl<T> PerOrientation<T> {
    /// Create a store from explicit portrait and landscape values
    pub const fn new(portrait: T, landscape: T) -> Self {
        Self { portrait, landscape }
    }

    /// The value stored for an orientation
    pub const fn get(&self, orientation: Orientation) -> &T {
        match orientation {
            Orientation::Portrait => &self.portrait,
            Orientation::Landscape => &self.landscape,
        }
    }

    /// Mutable access to the value stored for an orientation
    pub fn get_mut(&mut self, orientation: Orientation) -> &mut T {
        match orientation {
            Orientation::Portrait => &mut self.portrait,
            Orientation::Landscape => &mut self.landscape,
        }
    }
}

impl<T: Clone> PerOrientation<T> {
    /// Overwrite the value for the selected scope.
    ///
    /// `Scope::All` writes the same value into both slots.
    pub fn set(&mut self, scope: Scope, value: T) {
        match scope {
            Scope::One(orientation) => *self.get_mut(orientation) = value,
            Scope::All => {
                self.portrait = value.clone();
                self.landscape = value;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_single_orientation() {
        let mut store = PerOrientation::new(1, 2);
        store.set(Scope::One(Orientation::Landscape), 9);

        assert_eq!(*store.get(Orientation::Portrait), 1);
        assert_eq!(*store.get(Orientation::Landscape), 9);
    }

    #[test]
    fn test_set_all_writes_both_slots() {
        let mut store = PerOrientation::new(1, 2);
        store.set(Scope::All, 7);

        assert_eq!(*store.get(Orientation::Portrait), 7);
        assert_eq!(*store.get(Orientation::Landscape), 7);
    }

    #[test]
    fn test_scope_from_orientation() {
        assert_eq!(Scope::from(Orientation::Portrait), Scope::One(Orientation::Portrait));
    }
}
