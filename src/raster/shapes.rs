//! Integer geometry and the fillable regions built from it
//!
//! A [`Region`] answers point-membership queries in continuous canvas space;
//! the coverage rasterizer samples it to produce anti-aliased masks.

/// Integer point in canvas space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// Horizontal coordinate
    pub x: i32,
    /// Vertical coordinate
    pub y: i32,
}

impl Point {
    /// Create a point
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Left edge
    pub x: i32,
    /// Top edge
    pub y: i32,
    /// Horizontal extent
    pub width: i32,
    /// Vertical extent
    pub height: i32,
}

impl Rect {
    /// Create a rectangle from its top-left corner and extent
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Exclusive bottom edge
    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Check whether the rectangle encloses no area
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

/// Continuous bounding box of a region
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Smallest x covered
    pub min_x: f64,
    /// Smallest y covered
    pub min_y: f64,
    /// Largest x covered
    pub max_x: f64,
    /// Largest y covered
    pub max_y: f64,
}

/// A closed area that can be filled
pub trait Region {
    /// Box enclosing every point of the region
    fn bounds(&self) -> Bounds;

    /// Test whether a continuous point lies inside the region
    fn contains(&self, x: f64, y: f64) -> bool;
}

impl Region for Rect {
    fn bounds(&self) -> Bounds {
        Bounds {
            min_x: f64::from(self.x),
            min_y: f64::from(self.y),
            max_x: f64::from(self.right()),
            max_y: f64::from(self.bottom()),
        }
    }

    fn contains(&self, x: f64, y: f64) -> bool {
        !self.is_empty()
            && x >= f64::from(self.x)
            && x < f64::from(self.right())
            && y >= f64::from(self.y)
            && y < f64::from(self.bottom())
    }
}

/// Axis-aligned ellipse inscribed in a bounding rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ellipse {
    /// Rectangle the ellipse touches on all four sides
    pub frame: Rect,
}

impl Ellipse {
    /// Ellipse inscribed in `frame`
    pub const fn new(frame: Rect) -> Self {
        Self { frame }
    }
}

impl Region for Ellipse {
    fn bounds(&self) -> Bounds {
        self.frame.bounds()
    }

    fn contains(&self, x: f64, y: f64) -> bool {
        if self.frame.is_empty() {
            return false;
        }
        let rx = f64::from(self.frame.width) / 2.0;
        let ry = f64::from(self.frame.height) / 2.0;
        let dx = (x - (f64::from(self.frame.x) + rx)) / rx;
        let dy = (y - (f64::from(self.frame.y) + ry)) / ry;
        dx.mul_add(dx, dy * dy) <= 1.0
    }
}

/// Closed polygon with implicit edge from the last vertex back to the first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polygon {
    /// Vertices in drawing order
    pub vertices: Vec<Point>,
}

impl Polygon {
    /// Polygon through `vertices`
    pub fn new(vertices: impl Into<Vec<Point>>) -> Self {
        Self {
            vertices: vertices.into(),
        }
    }
}

impl Region for Polygon {
    fn bounds(&self) -> Bounds {
        let mut bounds = Bounds {
            min_x: f64::INFINITY,
            min_y: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            max_y: f64::NEG_INFINITY,
        };
        for vertex in &self.vertices {
            bounds.min_x = bounds.min_x.min(f64::from(vertex.x));
            bounds.min_y = bounds.min_y.min(f64::from(vertex.y));
            bounds.max_x = bounds.max_x.max(f64::from(vertex.x));
            bounds.max_y = bounds.max_y.max(f64::from(vertex.y));
        }
        bounds
    }

    // Even-odd crossing test
    fn contains(&self, x: f64, y: f64) -> bool {
        let Some(&last) = self.vertices.last() else {
            return false;
        };

        let mut inside = false;
        let mut previous = last;
        for &current in &self.vertices {
            let (x1, y1) = (f64::from(previous.x), f64::from(previous.y));
            let (x2, y2) = (f64::from(current.x), f64::from(current.y));

            if (y1 > y) != (y2 > y) {
                let crossing = ((x2 - x1) / (y2 - y1)).mul_add(y - y1, x1);
                if x < crossing {
                    inside = !inside;
                }
            }
            previous = current;
        }
        inside
    }
}
