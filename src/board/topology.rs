// Fixed graph of the mill board: three concentric rings of eight nodes.
//
//   07-----00-----01
//   |      |       |
//   | 15---08---09 |
//   | |    |     | |
//   | | 23-16-17 | |
//   | | |      | | |
// 06-14-22    18-10-02
//   | | |      | | |
//   | | 21-20-19 | |
//   | |    |     | |
//   | 13---12---11 |
//   |      |       |
//   05-----04-----03
//
// Ring 0 is the outer ring. Nodes are counted clockwise from the top middle,
// so even nodes are edge midpoints and odd nodes are corners.

use std::fmt;

pub const RINGS: usize = 3;
pub const NODES: usize = 8;
pub const SLOTS: usize = RINGS * NODES;
pub const TRIAD_COUNT: usize = 16;

/// One of the 24 board slots, `index = ring * 8 + node`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position(u8);

pub type Triad = [Position; 3];

impl Position {
    pub const fn new(index: usize) -> Option<Self> {
        if index < SLOTS { Some(Self(index as u8)) } else { None }
    }

    /// Ring and node wrap modulo 3 and 8, so `node - 1` at node 0 is node 7.
    pub const fn from_ring_node(ring: i32, node: i32) -> Self {
        let ring = ring.rem_euclid(RINGS as i32);
        let node = node.rem_euclid(NODES as i32);
        Self((ring * NODES as i32 + node) as u8)
    }

    pub const fn index(self) -> usize { self.0 as usize }
    pub const fn ring(self) -> usize { self.0 as usize / NODES }
    pub const fn node(self) -> usize { self.0 as usize % NODES }
    pub const fn is_edge_mid(self) -> bool { self.node() % 2 == 0 }

    pub fn all() -> impl Iterator<Item = Position> + Clone {
        (0..SLOTS as u8).map(Position)
    }

    pub fn neighbors(self) -> &'static [Position] {
        let (list, len) = &ADJACENCY[self.index()];
        &list[..*len]
    }

    pub fn is_adjacent(self, other: Position) -> bool {
        self.neighbors().contains(&other)
    }

    /// The two triads running through this position.
    pub fn triads(self) -> [&'static Triad; 2] {
        let [a, b] = MEMBERSHIP[self.index()];
        [&TRIADS[a], &TRIADS[b]]
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ring sides first (ring 0..2, sides centred on nodes 0, 2, 4, 6), then the
/// four spokes across the rings at nodes 0, 2, 4, 6.
pub static TRIADS: [Triad; TRIAD_COUNT] = build_triads();

static MEMBERSHIP: [[usize; 2]; SLOTS] = build_membership();

static ADJACENCY: [([Position; 4], usize); SLOTS] = build_adjacency();

const fn build_triads() -> [Triad; TRIAD_COUNT] {
    let mut out = [[Position(0); 3]; TRIAD_COUNT];
    let mut i = 0;
    let mut ring = 0;
    while ring < RINGS as i32 {
        let mut mid = 0;
        while mid < NODES as i32 {
            out[i] = [
                Position::from_ring_node(ring, mid - 1),
                Position::from_ring_node(ring, mid),
                Position::from_ring_node(ring, mid + 1),
            ];
            i += 1;
            mid += 2;
        }
        ring += 1;
    }
    let mut node = 0;
    while node < NODES as i32 {
        out[i] = [
            Position::from_ring_node(0, node),
            Position::from_ring_node(1, node),
            Position::from_ring_node(2, node),
        ];
        i += 1;
        node += 2;
    }
    out
}

const fn build_membership() -> [[usize; 2]; SLOTS] {
    let triads = build_triads();
    let mut out = [[usize::MAX; 2]; SLOTS];
    let mut t = 0;
    while t < TRIAD_COUNT {
        let mut k = 0;
        while k < 3 {
            let p = triads[t][k].index();
            if out[p][0] == usize::MAX { out[p][0] = t; } else { out[p][1] = t; }
            k += 1;
        }
        t += 1;
    }
    out
}

const fn build_adjacency() -> [([Position; 4], usize); SLOTS] {
    let mut out = [([Position(0); 4], 0); SLOTS];
    let mut idx = 0;
    while idx < SLOTS {
        let ring = (idx / NODES) as i32;
        let node = (idx % NODES) as i32;
        let mut list = [Position(0); 4];
        list[0] = Position::from_ring_node(ring, node - 1);
        list[1] = Position::from_ring_node(ring, node + 1);
        let mut len = 2;
        // Only edge midpoints connect across rings; rings 0 and 2 never touch.
        if node % 2 == 0 {
            if ring > 0 { list[len] = Position::from_ring_node(ring - 1, node); len += 1; }
            if ring < RINGS as i32 - 1 { list[len] = Position::from_ring_node(ring + 1, node); len += 1; }
        }
        out[idx] = (list, len);
        idx += 1;
    }
    out
}
