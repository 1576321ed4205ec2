//! Plain text form of point lists: whitespace separated numbers read pairwise as `x y`.
use crate::{Error, Point, Result};

pub fn parse_points(input: &str) -> Result<Vec<Point>> {
    let mut coords = input.split_whitespace().enumerate().map(|(index, token)| {
        token
            .parse::<f64>()
            .map_err(|_| Error::InvalidCoordinate {
                index,
                token: token.to_owned(),
            })
    });

    let mut points = Vec::new();
    while let Some(x) = coords.next() {
        let x = x?;
        let y = coords.next().ok_or(Error::MissingY { x })??;
        points.push(Point::new(x, y));
    }
    Ok(points)
}

/// One `x y` line per point.
pub fn render<'a, It>(points: It) -> String
where
    It: IntoIterator<Item = &'a Point>,
{
    let mut out = String::new();
    for p in points {
        out.push_str(&p.to_string());
        out.push('\n');
    }
    out
}
