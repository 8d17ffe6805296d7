use indexmap::{indexmap, IndexMap};

/// A letter grade on the ten-point scale and the grade points it carries.
#[derive(Clone, Debug)]
pub struct Grade {
    pub label: String,
    pub points: f64,
}

impl Grade {
    /// The fixed scale, in the order the grade picker lists it.
    pub fn defaults() -> IndexMap<String, Grade> {
        indexmap! {
            "O".into() => Grade { label: "O".into(), points: 10.0 },
            "A+".into() => Grade { label: "A+".into(), points: 9.0 },
            "A".into() => Grade { label: "A".into(), points: 8.0 },
            "B+".into() => Grade { label: "B+".into(), points: 7.0 },
            "B".into() => Grade { label: "B".into(), points: 6.0 },
            "C".into() => Grade { label: "C".into(), points: 5.0 },
            "F".into() => Grade { label: "F".into(), points: 0.0 },
        }
    }
}

/// Grade points for a symbol. A symbol outside the scale counts as zero
/// points, the same fail-soft rule the numeric fields follow.
pub fn points_for(scale: &IndexMap<String, Grade>, symbol: &str) -> f64 {
    scale.get(symbol).map_or(0.0, |grade| grade.points)
}
