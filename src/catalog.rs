//! Read-only metadata for every traced algorithm
//!
//! Records are keyed by [`AlgorithmKind::id`] and carry what the info pane
//! and `algotrace list` show: category, difficulty, complexity, and a short
//! reference implementation.

use crate::algorithms::AlgorithmKind;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Sorting,
    Searching,
    Graph,
    DataStructure,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Sorting => "sorting",
            Category::Searching => "searching",
            Category::Graph => "graph",
            Category::DataStructure => "data-structure",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "sorting" | "sort" => Some(Category::Sorting),
            "searching" | "search" => Some(Category::Searching),
            "graph" => Some(Category::Graph),
            "data-structure" | "data-structures" | "structure" => Some(Category::DataStructure),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmInfo {
    pub kind: AlgorithmKind,
    pub category: Category,
    pub difficulty: Difficulty,
    pub description: &'static str,
    pub time_complexity: &'static str,
    pub space_complexity: &'static str,
    pub implementation: &'static str,
}

impl AlgorithmInfo {
    pub fn id(&self) -> &'static str {
        self.kind.id()
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }
}

static CATALOG: [AlgorithmInfo; 8] = [
    AlgorithmInfo {
        kind: AlgorithmKind::BubbleSort,
        category: Category::Sorting,
        difficulty: Difficulty::Beginner,
        description: "Repeatedly steps through the list, compares adjacent elements and swaps them if they are in the wrong order.",
        time_complexity: "O(n²)",
        space_complexity: "O(1)",
        implementation: "\
for i in 0..n - 1 {
    for j in 0..n - i - 1 {
        if a[j] > a[j + 1] {
            a.swap(j, j + 1);
        }
    }
}",
    },
    AlgorithmInfo {
        kind: AlgorithmKind::QuickSort,
        category: Category::Sorting,
        difficulty: Difficulty::Intermediate,
        description: "Divide-and-conquer sort that picks a pivot and partitions the array around it.",
        time_complexity: "O(n log n)",
        space_complexity: "O(log n)",
        implementation: "\
fn quick_sort(a, low, high) {
    if low < high {
        let p = partition(a, low, high);
        quick_sort(a, low, p - 1);
        quick_sort(a, p + 1, high);
    }
}",
    },
    AlgorithmInfo {
        kind: AlgorithmKind::LinearSearch,
        category: Category::Searching,
        difficulty: Difficulty::Beginner,
        description: "Checks every element in order until the target is found or the list ends.",
        time_complexity: "O(n)",
        space_complexity: "O(1)",
        implementation: "\
for (i, v) in a.iter().enumerate() {
    if *v == target {
        return Some(i);
    }
}
None",
    },
    AlgorithmInfo {
        kind: AlgorithmKind::BinarySearch,
        category: Category::Searching,
        difficulty: Difficulty::Beginner,
        description: "Finds an item in a sorted list by repeatedly halving the search interval.",
        time_complexity: "O(log n)",
        space_complexity: "O(1)",
        implementation: "\
let (mut left, mut right) = (0, a.len());
while left < right {
    let mid = left + (right - left - 1) / 2;
    if a[mid] == target { return Some(mid); }
    if a[mid] < target { left = mid + 1; } else { right = mid; }
}
None",
    },
    AlgorithmInfo {
        kind: AlgorithmKind::Dijkstra,
        category: Category::Graph,
        difficulty: Difficulty::Advanced,
        description: "Finds the shortest paths from a start node to every reachable node in a graph with non-negative weights.",
        time_complexity: "O(V² + E)",
        space_complexity: "O(V)",
        implementation: "\
dist[start] = 0
while let Some(u) = closest unvisited node {
    visit(u)
    for (u, v, w) in edges from u {
        if dist[u] + w < dist[v] {
            dist[v] = dist[u] + w; prev[v] = u
        }
    }
}",
    },
    AlgorithmInfo {
        kind: AlgorithmKind::BreadthFirstSearch,
        category: Category::Graph,
        difficulty: Difficulty::Intermediate,
        description: "Visits nodes level by level from the start node using a FIFO queue.",
        time_complexity: "O(V + E)",
        space_complexity: "O(V)",
        implementation: "\
queue.push_back(start)
while let Some(u) = queue.pop_front() {
    if !visited.insert(u) { continue }
    queue.extend(unvisited neighbors of u)
}",
    },
    AlgorithmInfo {
        kind: AlgorithmKind::Stack,
        category: Category::DataStructure,
        difficulty: Difficulty::Beginner,
        description: "Last-in, first-out collection supporting push, pop, and peek.",
        time_complexity: "O(1) per operation",
        space_complexity: "O(n)",
        implementation: "\
stack.push(x);      // add on top
stack.pop();        // remove from top
stack.last();       // peek",
    },
    AlgorithmInfo {
        kind: AlgorithmKind::Queue,
        category: Category::DataStructure,
        difficulty: Difficulty::Beginner,
        description: "First-in, first-out collection supporting enqueue, dequeue, and front.",
        time_complexity: "O(1) per operation",
        space_complexity: "O(n)",
        implementation: "\
queue.push_back(x); // enqueue
queue.pop_front();  // dequeue
queue.front();      // front",
    },
];

/// Every record, in catalog order
pub fn all() -> &'static [AlgorithmInfo] {
    &CATALOG
}

pub fn get(kind: AlgorithmKind) -> &'static AlgorithmInfo {
    // CATALOG lists every kind exactly once, in AlgorithmKind::ALL order
    let idx = AlgorithmKind::ALL
        .iter()
        .position(|k| *k == kind)
        .unwrap_or_default();
    &CATALOG[idx]
}

/// Look up a record by id
pub fn find(id: &str) -> Option<&'static AlgorithmInfo> {
    CATALOG.iter().find(|info| info.id() == id)
}

pub fn by_category(category: Category) -> impl Iterator<Item = &'static AlgorithmInfo> {
    CATALOG.iter().filter(move |info| info.category == category)
}
