use crate::{
    syntax::Node,
    walk::{Walker, walk},
};

/// Counts number literals.
struct Leaves;

/// Counts operator symbols.
struct Branches;

impl Walker for Leaves {
    type Output = usize;

    fn number(&mut self, _text: &str) -> usize {
        1
    }

    fn seed(&mut self, _operator: &str, first: usize) -> usize {
        first
    }

    fn combine(&mut self, _operator: &str, acc: usize, next: usize) -> usize {
        acc + next
    }
}

impl Walker for Branches {
    type Output = usize;

    fn number(&mut self, _text: &str) -> usize {
        0
    }

    fn seed(&mut self, _operator: &str, first: usize) -> usize {
        first + 1
    }

    fn combine(&mut self, _operator: &str, acc: usize, next: usize) -> usize {
        acc + next
    }
}

impl Node {
    pub fn count_leaves(&self) -> usize {
        walk(self, &mut Leaves)
    }

    pub fn count_branches(&self) -> usize {
        walk(self, &mut Branches)
    }
}
