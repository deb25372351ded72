//! TCX export of events.
//!
//! Every activity of an event becomes one `<Activity>` with a single lap
//! spanning all of its points. Points without a position fix are not written;
//! their samples are carried to the next point that has one.

use super::carry::{CarryState, SampleSet};
use super::dispatch::{FieldValue, TcxField, DISPATCH_TABLE};
use super::types::{Document, ExportError, ExportReport, ExportSettings, FailurePolicy};
use super::{dispatch, EventExporter};
use crate::model::{Activity, Event, Point, Position};
use chrono::{DateTime, Utc};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event as XmlEvent};
use quick_xml::Writer;
use std::io::{Cursor, Write};

/// TCX XML namespaces
const NS_XSD: &str = "http://www.w3.org/2001/XMLSchema";
const NS_XSI: &str = "http://www.w3.org/2001/XMLSchema-instance";
const NS_TCX: &str = "http://www.garmin.com/xmlschemas/TrainingCenterDatabase/v2";
const NS_USER_PROFILE: &str = "http://www.garmin.com/xmlschemas/UserProfile/v2";
const NS_TPX: &str = "http://www.garmin.com/xmlschemas/ActivityExtension/v2";

/// Seconds precision, always UTC.
const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Format a timestamp the way TCX ids and times are written.
pub fn format_time(time: &DateTime<Utc>) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// Writes events as Training Center XML.
#[derive(Debug, Clone, Default)]
pub struct TcxExporter {
    settings: ExportSettings,
}

impl TcxExporter {
    pub fn new(settings: ExportSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ExportSettings {
        &self.settings
    }

    /// Export an event, skipping activities that fail and reporting them.
    pub fn export_report(&self, event: &Event) -> Result<ExportReport, ExportError> {
        self.render(event, FailurePolicy::Skip)
    }

    fn new_writer(&self) -> Writer<Cursor<Vec<u8>>> {
        let buffer = Cursor::new(Vec::new());
        if self.settings.indent_size > 0 {
            Writer::new_with_indent(buffer, b' ', self.settings.indent_size)
        } else {
            Writer::new(buffer)
        }
    }

    fn render(&self, event: &Event, policy: FailurePolicy) -> Result<ExportReport, ExportError> {
        let mut writer = self.new_writer();

        // XML declaration
        writer
            .write_event(XmlEvent::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(|e| ExportError::XmlError(e.to_string()))?;

        // Root element
        let mut root = BytesStart::new("TrainingCenterDatabase");
        root.push_attribute(("xmlns:xsd", NS_XSD));
        root.push_attribute(("xmlns:xsi", NS_XSI));
        root.push_attribute(("xmlns", NS_TCX));
        root.push_attribute(("xmlns:ns2", NS_USER_PROFILE));
        root.push_attribute(("xmlns:ns3", NS_TPX));
        open(&mut writer, root)?;
        open(&mut writer, BytesStart::new("Activities"))?;

        let mut exported = 0;
        let mut failures = Vec::new();

        for (index, activity) in event.activities.iter().enumerate() {
            // Checked before anything of the activity is written
            let first_point = match self.check_activity(index, event, activity) {
                Ok(point) => point,
                Err(e) if policy == FailurePolicy::Skip => {
                    tracing::warn!(activity = index, error = %e, "Skipping activity");
                    failures.push(e);
                    continue;
                }
                Err(e) => return Err(e),
            };

            tracing::debug!(
                activity = index,
                sport = %activity.sport_type,
                points = activity.points().len(),
                "Writing activity"
            );
            write_activity(&mut writer, event, activity, first_point)?;
            exported += 1;
        }

        close(&mut writer, "Activities")?;
        close(&mut writer, "TrainingCenterDatabase")?;

        let result = writer.into_inner().into_inner();
        let content = String::from_utf8(result).map_err(|e| ExportError::XmlError(e.to_string()))?;

        tracing::info!(
            activities = exported,
            skipped = failures.len(),
            bytes = content.len(),
            "Exported event to TCX"
        );

        Ok(ExportReport {
            document: Document::new(content),
            exported,
            failures,
        })
    }

    /// Preconditions of an activity; returns its first point.
    fn check_activity<'a>(
        &self,
        index: usize,
        event: &Event,
        activity: &'a Activity,
    ) -> Result<&'a Point, ExportError> {
        let first_point = activity
            .first_point()
            .ok_or(ExportError::EmptyActivity { index })?;

        if let Some(field) = first_non_finite_field(event, activity) {
            return Err(ExportError::NonFiniteValue { index, field });
        }

        if self.settings.strict_sample_kinds {
            let unrepresentable = activity
                .points()
                .iter()
                .flat_map(|point| point.samples())
                .map(|sample| sample.kind())
                .find(|kind| !dispatch::is_representable(*kind));
            if let Some(kind) = unrepresentable {
                return Err(ExportError::UnrepresentableSampleKind { index, kind });
            }
        }

        Ok(first_point)
    }
}

impl EventExporter for TcxExporter {
    fn export(&self, event: &Event) -> Result<Document, ExportError> {
        self.render(event, self.settings.on_activity_error)
            .map(|report| report.document)
    }
}

/// First written field of the activity whose value is NaN or infinite.
/// Every sample of an exported kind counts, carried or not.
fn first_non_finite_field(event: &Event, activity: &Activity) -> Option<&'static str> {
    if !activity.summary.total_duration_seconds.is_finite() {
        return Some("TotalTimeSeconds");
    }
    if !event.summary.total_distance_meters.is_finite() {
        return Some("DistanceMeters");
    }

    activity.points().iter().find_map(|point| {
        if let Some(position) = point.position {
            if !position.latitude_degrees.is_finite() {
                return Some("LatitudeDegrees");
            }
            if !position.longitude_degrees.is_finite() {
                return Some("LongitudeDegrees");
            }
        }
        point.samples().find_map(|sample| {
            dispatch::rule_for(sample.kind())
                .filter(|_| !sample.value().is_finite())
                .map(|rule| rule.field.element_name())
        })
    })
}

/// Write one activity with its single lap.
fn write_activity<W: Write>(
    writer: &mut Writer<W>,
    event: &Event,
    activity: &Activity,
    first_point: &Point,
) -> Result<(), ExportError> {
    let mut element = BytesStart::new("Activity");
    element.push_attribute(("Sport", activity.sport_type.as_str()));
    open(writer, element)?;

    write_element(writer, "Id", &format_time(&activity.start_date))?;

    open(writer, BytesStart::new("Creator"))?;
    write_element(writer, "Name", &activity.creator.name)?;
    close(writer, "Creator")?;

    write_lap(writer, event, activity, first_point)?;

    close(writer, "Activity")
}

/// Write the lap covering the whole activity.
fn write_lap<W: Write>(
    writer: &mut Writer<W>,
    event: &Event,
    activity: &Activity,
    first_point: &Point,
) -> Result<(), ExportError> {
    let mut lap = BytesStart::new("Lap");
    lap.push_attribute(("StartTime", format_time(&first_point.timestamp).as_str()));
    open(writer, lap)?;

    write_element(
        writer,
        "TotalTimeSeconds",
        &activity.summary.total_duration_seconds.to_string(),
    )?;

    // Event total, not the activity's own distance. Every lap of a
    // multi-activity event reports the same value.
    write_element(
        writer,
        "DistanceMeters",
        &event.summary.total_distance_meters.to_string(),
    )?;

    write_track(writer, activity.points())?;

    close(writer, "Lap")
}

/// Write the track, folding unpositioned points into the next fix.
fn write_track<W: Write>(writer: &mut Writer<W>, points: &[Point]) -> Result<(), ExportError> {
    open(writer, BytesStart::new("Track"))?;

    let mut carry = CarryState::Idle;
    for point in points {
        match point.position {
            None => carry = carry.absorb(point),
            Some(position) => {
                let samples = carry.resolve(point);
                carry = CarryState::Idle;
                write_trackpoint(writer, point, position, &samples)?;
            }
        }
    }

    if !carry.is_empty() {
        tracing::trace!(
            samples = carry.len(),
            "Dropping samples recorded after the last position fix"
        );
    }

    close(writer, "Track")
}

/// Write a single trackpoint.
fn write_trackpoint<W: Write>(
    writer: &mut Writer<W>,
    point: &Point,
    position: Position,
    samples: &SampleSet<'_>,
) -> Result<(), ExportError> {
    open(writer, BytesStart::new("Trackpoint"))?;

    write_element(writer, "Time", &format_time(&point.timestamp))?;

    open(writer, BytesStart::new("Position"))?;
    write_element(
        writer,
        "LatitudeDegrees",
        &position.latitude_degrees.to_string(),
    )?;
    write_element(
        writer,
        "LongitudeDegrees",
        &position.longitude_degrees.to_string(),
    )?;
    close(writer, "Position")?;

    let mut extensions = Vec::new();
    for rule in DISPATCH_TABLE {
        let Some(sample) = samples.get(&rule.kind) else {
            continue;
        };
        let value = rule.transform.apply(sample.value());

        if rule.field.is_extension() {
            extensions.push((rule.field, value));
            continue;
        }

        match rule.field {
            TcxField::HeartRateBpm => write_heart_rate_element(writer, value)?,
            field => write_element(writer, field.element_name(), &value.to_string())?,
        }
    }

    if !extensions.is_empty() {
        write_trackpoint_extensions(writer, &extensions)?;
    }

    close(writer, "Trackpoint")
}

/// Write the ActivityExtension block of a trackpoint.
fn write_trackpoint_extensions<W: Write>(
    writer: &mut Writer<W>,
    fields: &[(TcxField, FieldValue)],
) -> Result<(), ExportError> {
    open(writer, BytesStart::new("Extensions"))?;

    let mut tpx = BytesStart::new("TPX");
    tpx.push_attribute(("xmlns", NS_TPX));
    open(writer, tpx)?;

    for (field, value) in fields {
        write_element(writer, field.element_name(), &value.to_string())?;
    }

    close(writer, "TPX")?;
    close(writer, "Extensions")
}

/// Write a heart rate element with Value sub-element.
fn write_heart_rate_element<W: Write>(
    writer: &mut Writer<W>,
    value: FieldValue,
) -> Result<(), ExportError> {
    open(writer, BytesStart::new("HeartRateBpm"))?;
    write_element(writer, "Value", &value.to_string())?;
    close(writer, "HeartRateBpm")
}

/// Write a simple element with text content.
fn write_element<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    value: &str,
) -> Result<(), ExportError> {
    open(writer, BytesStart::new(name))?;

    writer
        .write_event(XmlEvent::Text(BytesText::new(value)))
        .map_err(|e| ExportError::XmlError(e.to_string()))?;

    close(writer, name)
}

fn open<W: Write>(writer: &mut Writer<W>, element: BytesStart<'_>) -> Result<(), ExportError> {
    writer
        .write_event(XmlEvent::Start(element))
        .map_err(|e| ExportError::XmlError(e.to_string()))
}

fn close<W: Write>(writer: &mut Writer<W>, name: &str) -> Result<(), ExportError> {
    writer
        .write_event(XmlEvent::End(BytesEnd::new(name)))
        .map_err(|e| ExportError::XmlError(e.to_string()))
}
