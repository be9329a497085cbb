//! Airport records and the parsing of the OurAirports dataset.

use std::collections::HashMap;

use super::csv;
use super::ports::DatasetError;

/// One airport as loaded from the dataset. Immutable for the process
/// lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct Airport {
    /// Uppercase 3-letter IATA code.
    pub iata: String,
    /// Airport display name as published in the dataset.
    pub name: String,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

/// Lookup from uppercase IATA code to airport record.
pub type AirportMap = HashMap<String, Airport>;

/// Parse the raw dataset CSV into an [`AirportMap`].
///
/// Policy, in order:
/// - blank lines are skipped entirely; the first non-blank line is the
///   header;
/// - the header must contain `iata_code`, `name`, `latitude_deg` and
///   `longitude_deg`, otherwise the dataset is rejected as malformed;
/// - data rows with fewer columns than needed to reach the highest required
///   index are skipped;
/// - the IATA code is trimmed and uppercased; rows with an empty code are
///   skipped;
/// - latitude and longitude are trimmed and must parse to finite numbers;
/// - the first valid row per code wins, later duplicates are dropped.
pub fn parse_airport_map(text: &str) -> Result<AirportMap, DatasetError> {
    let mut lines = text.lines().filter(|line| !line.trim().is_empty());
    let header = lines
        .next()
        .ok_or_else(|| DatasetError::format("dataset is empty"))?;
    let columns = csv::parse_line(header);
    let index_of = |name: &str| columns.iter().position(|column| column == name);

    let (Some(iata_idx), Some(name_idx), Some(lat_idx), Some(lon_idx)) = (
        index_of("iata_code"),
        index_of("name"),
        index_of("latitude_deg"),
        index_of("longitude_deg"),
    ) else {
        return Err(DatasetError::format(
            "header is missing one of iata_code, name, latitude_deg, longitude_deg",
        ));
    };
    let max_idx = iata_idx.max(name_idx).max(lat_idx).max(lon_idx);

    let mut map = AirportMap::new();
    for line in lines {
        let fields = csv::parse_line(line);
        if fields.len() <= max_idx {
            continue;
        }
        let Some(iata) = fields
            .get(iata_idx)
            .map(|field| field.trim().to_uppercase())
            .filter(|code| !code.is_empty())
        else {
            continue;
        };
        let (Some(latitude), Some(longitude)) = (
            parse_coordinate(fields.get(lat_idx)),
            parse_coordinate(fields.get(lon_idx)),
        ) else {
            continue;
        };
        let name = fields
            .get(name_idx)
            .map(|field| field.trim().to_owned())
            .unwrap_or_default();
        if !map.contains_key(&iata) {
            map.insert(
                iata.clone(),
                Airport {
                    iata,
                    name,
                    latitude,
                    longitude,
                },
            );
        }
    }
    Ok(map)
}

/// Trim and parse a coordinate field, rejecting non-finite values.
fn parse_coordinate(field: Option<&String>) -> Option<f64> {
    field?
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    //! Unit tests for dataset parsing policy.

    use rstest::rstest;

    use super::parse_airport_map;

    const HEADER: &str = "id,ident,type,name,latitude_deg,longitude_deg,iata_code";

    fn dataset(rows: &[&str]) -> String {
        let mut text = String::from(HEADER);
        for row in rows {
            text.push('\n');
            text.push_str(row);
        }
        text
    }

    #[test]
    fn parses_valid_rows() {
        let text = dataset(&[
            "1,KLAX,large_airport,Los Angeles International,33.9425,-118.408,LAX",
            "2,KJFK,large_airport,\"John F Kennedy, Intl\",40.6398,-73.7789,JFK",
        ]);
        let map = parse_airport_map(&text).expect("dataset should parse");
        assert_eq!(map.len(), 2);
        let jfk = map.get("JFK").expect("JFK present");
        assert_eq!(jfk.name, "John F Kennedy, Intl");
        assert_eq!(jfk.latitude, 40.6398);
        assert_eq!(jfk.longitude, -73.7789);
    }

    #[test]
    fn first_row_per_code_wins() {
        let text = dataset(&[
            "1,KLAX,large_airport,First,33.9425,-118.408,LAX",
            "2,XLAX,small_airport,Second,1.0,2.0,LAX",
        ]);
        let map = parse_airport_map(&text).expect("dataset should parse");
        let lax = map.get("LAX").expect("LAX present");
        assert_eq!(lax.name, "First");
    }

    #[rstest]
    #[case::short_row("1,KLAX,large_airport,Short")]
    #[case::empty_code("1,KLAX,large_airport,No code,33.9425,-118.408,")]
    #[case::blank_code("1,KLAX,large_airport,Blank code,33.9425,-118.408,   ")]
    #[case::bad_latitude("1,KLAX,large_airport,Bad lat,not-a-number,-118.408,LAX")]
    #[case::empty_latitude("1,KLAX,large_airport,Empty lat,,-118.408,LAX")]
    #[case::infinite_longitude("1,KLAX,large_airport,Inf lon,33.9425,inf,LAX")]
    fn skips_invalid_rows(#[case] row: &str) {
        let map = parse_airport_map(&dataset(&[row])).expect("dataset should parse");
        assert!(map.is_empty(), "row should have been skipped: {row:?}");
    }

    #[test]
    fn skips_blank_lines_and_normalises_code_case() {
        let text = format!(
            "{HEADER}\n\n1,KSFO,large_airport,San Francisco,37.6213,-122.379, sfo \n\n"
        );
        let map = parse_airport_map(&text).expect("dataset should parse");
        assert!(map.contains_key("SFO"));
    }

    #[test]
    fn trims_carriage_returns_from_fields() {
        let text = format!(
            "{HEADER}\r\n1,KLAX,large_airport,Los Angeles International,33.9425,-118.408,LAX\r\n"
        );
        let map = parse_airport_map(&text).expect("dataset should parse");
        assert_eq!(
            map.get("LAX").map(|a| a.latitude),
            Some(33.9425),
            "CRLF line endings must not break coordinate parsing",
        );
    }

    #[rstest]
    #[case::missing_iata("id,name,latitude_deg,longitude_deg")]
    #[case::missing_coords("id,name,iata_code")]
    #[case::unrelated("completely,different,columns")]
    fn rejects_header_without_required_columns(#[case] header: &str) {
        let err = parse_airport_map(header).expect_err("header should be rejected");
        assert!(err.to_string().contains("header"), "got: {err}");
    }

    #[test]
    fn rejects_empty_dataset() {
        assert!(parse_airport_map("\n  \n").is_err());
    }
}
