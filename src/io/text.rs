use std::fmt::{self, Display};

use super::*;

/// Human-readable representation listing the sorted vertices and the sorted, normalized edges:
/// ```text
/// vertices: 0 1 2 3
/// edges: (0,1) (1,2)
/// ```
///
/// # Examples
/// ```
/// use graphstats::prelude::*;
///
/// let g: Graph = Graph::from_edges([3], [(2, 1), (0, 1)]).unwrap();
/// assert_eq!(g.to_string(), "vertices: 0 1 2 3\nedges: (0,1) (1,2)");
/// ```
impl<V> Display for Graph<V>
where
    V: Vertex + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vertices:")?;
        for v in self.ordered_vertices() {
            write!(f, " {v}")?;
        }

        write!(f, "\nedges:")?;
        for e in self.ordered_edges() {
            write!(f, " {e}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_graph() {
        assert_eq!(Graph::<u32>::new().to_string(), "vertices:\nedges:");
    }

    #[test]
    fn isolated_vertices() {
        let g: Graph = Graph::from_vertices([2, 0, 1]);
        assert_eq!(g.to_string(), "vertices: 0 1 2\nedges:");
    }

    #[test]
    fn deterministic_output() {
        let a: Graph<String> = Graph::from_edges(
            [],
            [("c", "a"), ("b", "a")].map(|(u, v)| (u.to_string(), v.to_string())),
        )
        .unwrap();
        let b: Graph<String> = Graph::from_edges(
            [],
            [("a", "b"), ("a", "c")].map(|(u, v)| (u.to_string(), v.to_string())),
        )
        .unwrap();

        assert_eq!(a.to_string(), "vertices: a b c\nedges: (a,b) (a,c)");
        assert_eq!(a.to_string(), b.to_string());
    }
}
