/*!
The Luby sequence, 1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4, 8, …

Each element is computed directly from its position using the 'reluctant doubling' method of [Knuth](https://doi.org/10.1016/j.ipl.2011.01.004):
the sequence is held as a pair (u, v), where v is the current element, and u and v are updated by:

```none
(u, v) = if (u & -u) == v { (u + 1, 1) } else { (u, 2v) }
```

Note: The iterator yields the *current* element and then advances, so the first call to next returns 1.

```rust
# use marten_sat::generic::luby::Luby;
let sequence = Luby::default().take(15).collect::<Vec<_>>();
assert_eq!(sequence, vec![1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4, 8]);
```
*/

/// The representation of an element of the sequence.
pub type LubyRepresentation = u32;

/// The state of the sequence.
#[derive(Clone)]
pub struct Luby {
    u: LubyRepresentation,
    v: LubyRepresentation,
}

impl Default for Luby {
    fn default() -> Self {
        Luby { u: 1, v: 1 }
    }
}

impl Luby {
    /// The current element of the sequence, without advancing.
    pub fn current(&self) -> LubyRepresentation {
        self.v
    }

    fn advance(&mut self) {
        if (self.u & self.u.wrapping_neg()) == self.v {
            self.u += 1;
            self.v = 1;
        } else {
            self.v = self.v.saturating_mul(2);
        }
    }
}

impl Iterator for Luby {
    type Item = LubyRepresentation;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.v;
        self.advance();
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn luby_prefix() {
        let known = [1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4, 8, 1, 1, 2, 1, 1, 2, 4, 1, 1, 2];
        let sequence = Luby::default().take(known.len()).collect::<Vec<_>>();
        assert_eq!(sequence, known);
    }

    #[test]
    fn current_tracks_next() {
        let mut luby = Luby::default();
        for _ in 0..40 {
            let current = luby.current();
            assert_eq!(luby.next(), Some(current));
        }
    }
}
