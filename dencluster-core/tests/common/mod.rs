use dencluster_core::{ClusterLabel, Labelled, LinearIndex, Point};

#[must_use]
pub fn line(xs: &[f64]) -> LinearIndex<Point<1>> {
    xs.iter().map(|x| Point::new([*x])).collect()
}

#[must_use]
pub fn planar(points: &[[f64; 2]]) -> LinearIndex<Point<2>> {
    points.iter().copied().map(Point::new).collect()
}

#[must_use]
pub fn labels<R>(index: &LinearIndex<R>) -> Vec<ClusterLabel<R::Width>>
where
    R: Labelled,
{
    index.iter().map(|(_, point)| point.label()).collect()
}
