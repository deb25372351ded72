//! Shared fixtures and XML inspection helpers.

use chrono::{DateTime, Duration, TimeZone, Utc};
use quick_xml::events::Event as XmlEvent;
use quick_xml::Reader;
use tcxport::model::{Activity, Creator, Point, Position, SportType};

pub fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 15, 10, 0, 0).unwrap()
}

/// Point without a position fix, `offset` seconds after start.
pub fn gap(offset: i64) -> Point {
    Point::new(start() + Duration::seconds(offset))
}

/// Point with a position fix, `offset` seconds after start.
pub fn fix(offset: i64) -> Point {
    gap(offset).with_position(Position::new(
        46.5197 + offset as f64 * 0.0001,
        6.6323 + offset as f64 * 0.0001,
    ))
}

pub fn activity(points: Vec<Point>) -> Activity {
    Activity::new(SportType::Running, start(), Creator::new("Suunto Ambit3"))
        .with_summary(1800.0, 4200.0)
        .with_points(points)
        .unwrap()
}

/// Read the whole document, panicking on malformed markup.
/// Returns the number of elements with the given name.
pub fn count_elements(xml: &str, name: &str) -> usize {
    let mut reader = Reader::from_str(xml);
    let mut count = 0;
    loop {
        match reader.read_event() {
            Ok(XmlEvent::Start(e)) if e.name().as_ref() == name.as_bytes() => count += 1,
            Ok(XmlEvent::Empty(e)) if e.name().as_ref() == name.as_bytes() => count += 1,
            Ok(XmlEvent::Eof) => break,
            Ok(_) => {}
            Err(e) => panic!("malformed XML at {}: {}", reader.buffer_position(), e),
        }
    }
    count
}

/// Texts of the elements whose path ends with `path` (e.g. `"HeartRateBpm/Value"`).
pub fn texts_at(xml: &str, path: &str) -> Vec<String> {
    let wanted: Vec<&str> = path.split('/').collect();
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<String> = Vec::new();
    let mut texts = Vec::new();

    loop {
        match reader.read_event() {
            Ok(XmlEvent::Start(e)) => {
                stack.push(String::from_utf8_lossy(e.name().as_ref()).into_owned());
            }
            Ok(XmlEvent::End(_)) => {
                stack.pop();
            }
            Ok(XmlEvent::Text(e)) => {
                if stack.len() >= wanted.len()
                    && stack[stack.len() - wanted.len()..]
                        .iter()
                        .zip(&wanted)
                        .all(|(a, b)| a == b)
                {
                    let text = e.unescape().unwrap().into_owned();
                    if !text.trim().is_empty() {
                        texts.push(text);
                    }
                }
            }
            Ok(XmlEvent::Eof) => break,
            Ok(_) => {}
            Err(e) => panic!("malformed XML at {}: {}", reader.buffer_position(), e),
        }
    }
    texts
}
