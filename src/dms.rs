//! Angle strings: decimal degrees or degree/minute/second notation.
//!
//! Accepted forms: `12.5`, `-12.5`, `90w`, `9d07'54.862"W`, `2d20'14.025"E`,
//! `45d30'`, `0.5r` (radians). Hemisphere suffixes `S`/`W` negate.

use std::f64::consts::PI;

/// Parse an angle string, returning degrees.
pub fn parse_degrees(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    let (body, sign) = match s.as_bytes()[0] {
        b'-' => (&s[1..], -1.0),
        b'+' => (&s[1..], 1.0),
        _ => (s, 1.0),
    };

    // Hemisphere suffix
    let (body, hemi) = match body.chars().last() {
        Some('N' | 'n' | 'E' | 'e') => (&body[..body.len() - 1], 1.0),
        Some('S' | 's' | 'W' | 'w') => (&body[..body.len() - 1], -1.0),
        _ => (body, 1.0),
    };

    if let Some(rad) = body.strip_suffix(['r', 'R']) {
        let value: f64 = rad.parse().ok()?;
        return Some(sign * hemi * value.to_degrees());
    }

    let mut total = 0.0;
    let mut rest = body;
    // Index of the finest field parsed so far: 0 degrees, 1 minutes, 2 seconds.
    let mut last_field = None;
    let fields: [&[char]; 3] = [&['d', 'D', '°'], &['\''], &['"']];
    for (field, markers) in fields.into_iter().enumerate() {
        if let Some(idx) = rest.find(markers) {
            let value: f64 = rest[..idx].parse().ok()?;
            if value < 0.0 || (field > 0 && value >= 60.0) {
                return None;
            }
            total += value / 60f64.powi(field as i32);
            let marker_len = rest[idx..].chars().next()?.len_utf8();
            rest = &rest[idx + marker_len..];
            last_field = Some(field);
        }
    }

    if !rest.is_empty() {
        // Trailing number without a marker: plain degrees when nothing else
        // was given, otherwise the next finer field.
        let value: f64 = rest.parse().ok()?;
        total += match last_field {
            None => value,
            Some(field) if field < 2 => {
                if value < 0.0 || value >= 60.0 {
                    return None;
                }
                value / 60f64.powi(field as i32 + 1)
            }
            Some(_) => return None,
        };
    } else if last_field.is_none() {
        return None;
    }

    if !total.is_finite() {
        return None;
    }
    Some(sign * hemi * total)
}

/// Parse an angle string, returning radians.
pub fn parse_radians(s: &str) -> Option<f64> {
    parse_degrees(s).map(|deg| deg * PI / 180.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_decimal() {
        assert_relative_eq!(parse_degrees("12.5").unwrap(), 12.5);
        assert_relative_eq!(parse_degrees("-12.5").unwrap(), -12.5);
        assert_relative_eq!(parse_degrees("+3").unwrap(), 3.0);
    }

    #[test]
    fn test_hemisphere() {
        assert_relative_eq!(parse_degrees("90w").unwrap(), -90.0);
        assert_relative_eq!(parse_degrees("45N").unwrap(), 45.0);
        assert_relative_eq!(parse_degrees("10S").unwrap(), -10.0);
    }

    #[test]
    fn test_dms() {
        // Lisbon prime meridian
        let lisbon = parse_degrees("9d07'54.862\"W").unwrap();
        assert_relative_eq!(lisbon, -(9.0 + 7.0 / 60.0 + 54.862 / 3600.0), epsilon = 1e-12);

        let paris = parse_degrees("2d20'14.025\"E").unwrap();
        assert_relative_eq!(paris, 2.0 + 20.0 / 60.0 + 14.025 / 3600.0, epsilon = 1e-12);

        assert_relative_eq!(parse_degrees("45d30'").unwrap(), 45.5);
        assert_relative_eq!(parse_degrees("45d30").unwrap(), 45.5);
    }

    #[test]
    fn test_unmarked_field_follows_last_marker() {
        let explicit = parse_degrees("12d30'30\"").unwrap();
        assert_relative_eq!(explicit, 12.0 + 30.0 / 60.0 + 30.0 / 3600.0, epsilon = 1e-12);
        assert_relative_eq!(parse_degrees("12d30'30").unwrap(), explicit, epsilon = 1e-12);
        assert_relative_eq!(parse_degrees("12d30'30W").unwrap(), -explicit, epsilon = 1e-12);
        assert!(parse_degrees("12d30'30\"15").is_none());
        assert!(parse_degrees("12d75").is_none());
    }

    #[test]
    fn test_radians_suffix() {
        assert_relative_eq!(parse_radians("0.5r").unwrap(), 0.5, epsilon = 1e-15);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(parse_degrees("").is_none());
        assert!(parse_degrees("abc").is_none());
        assert!(parse_degrees("12d75'").is_none());
        assert!(parse_degrees("w").is_none());
    }
}
