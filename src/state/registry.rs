use snackbars_util::Position;

/// Live snackbars grouped by position
///
/// Each position keeps its instances in creation order (oldest first), which
/// is also their visual stacking order, and remembers whether it was last
/// laid out stacked or expanded.
#[derive(Debug)]
pub struct Registry<T> {
    instances: [Vec<T>; 3],
    stacked: [bool; 3],
}

impl<T> Registry<T> {
    /// Create an empty registry with every position stacked
    pub fn new() -> Self {
        Self {
            instances: [Vec::new(), Vec::new(), Vec::new()],
            stacked: [true; 3],
        }
    }

    /// Append an instance to the top of its position's stack
    pub fn push(&mut self, position: Position, instance: T) {
        self.instances[position.index()].push(instance);
    }

    /// Remove the first instance at `position` matching `predicate`.
    ///
    /// Returns `None` without touching the registry when nothing matches.
    pub fn remove_first(
        &mut self,
        position: Position,
        predicate: impl Fn(&T) -> bool,
    ) -> Option<T> {
        let instances = &mut self.instances[position.index()];
        let index = instances.iter().position(predicate)?;
        Some(instances.remove(index))
    }

    pub fn get(&self, position: Position) -> &[T] {
        &self.instances[position.index()]
    }

    pub fn len(&self, position: Position) -> usize {
        self.instances[position.index()].len()
    }

    pub fn total(&self) -> usize {
        self.instances.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Whether `position` was last laid out stacked
    pub fn is_stacked(&self, position: Position) -> bool {
        self.stacked[position.index()]
    }

    pub fn set_stacked(&mut self, position: Position, stacked: bool) {
        self.stacked[position.index()] = stacked;
    }
}

impl<T: Clone> Registry<T> {
    /// Copy of the instances at `position`, oldest first
    pub fn snapshot(&self, position: Position) -> Vec<T> {
        self.instances[position.index()].clone()
    }

    /// Copy of every live instance, left to right, oldest first
    pub fn snapshot_all(&self) -> Vec<T> {
        Position::ALL
            .iter()
            .flat_map(|p| self.instances[p.index()].iter().cloned())
            .collect()
    }
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}
