//! Integer bounding rectangles and the overlap tests built on them.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Rect { x, y, width, height }
    }

    /// Truncates a fractional position to the cell it starts in.
    pub fn from_position(x: f32, y: f32, width: u16, height: u16) -> Self {
        Rect::new(x as i32, y as i32, width as i32, height as i32)
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn centerx(&self) -> i32 {
        self.x + self.width / 2
    }

    /// Rectangles that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Half-open: the right and bottom edges are outside.
    pub fn contains(&self, column: i32, row: i32) -> bool {
        column >= self.left() && column < self.right() && row >= self.top() && row < self.bottom()
    }
}

/// True if `target` overlaps any rect in `others`.
pub fn collide_any(target: &Rect, others: impl IntoIterator<Item = Rect>) -> bool {
    others.into_iter().any(|r| target.overlaps(&r))
}

/// Pairwise collision between two groups, both sides destroyed on contact.
///
/// Walks `a` in order; each entry removes every still-alive `b` it overlaps.
/// Returns `(hit_a, hit_b)`, the indices in each group that collided, with
/// no index repeated.
pub fn group_collide(a: &[Rect], b: &[Rect]) -> (Vec<usize>, Vec<usize>) {
    let mut hit_a = Vec::new();
    let mut hit_b: Vec<usize> = Vec::new();

    for (ai, ra) in a.iter().enumerate() {
        let mut any = false;
        for (bi, rb) in b.iter().enumerate() {
            if !hit_b.contains(&bi) && ra.overlaps(rb) {
                hit_b.push(bi);
                any = true;
            }
        }
        if any {
            hit_a.push(ai);
        }
    }

    (hit_a, hit_b)
}
