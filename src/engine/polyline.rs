//! Encoded-polyline codec (precision 5): signed deltas packed into
//! base-32 characters offset by 63, as emitted by the directions
//! provider's compact geometry format.

/// Decodes an encoded polyline into (lat, lng) pairs, in the order the
/// provider emitted them.
pub fn decode(encoded: &str) -> Vec<(f64, f64)> {
    let bytes = encoded.as_bytes();
    let mut points = Vec::new();
    let mut index = 0;
    let mut lat = 0i64;
    let mut lng = 0i64;

    while index < bytes.len() {
        let (delta, read) = decode_signed(&bytes[index..]);
        index += read;
        lat += delta;

        if index >= bytes.len() {
            break;
        }

        let (delta, read) = decode_signed(&bytes[index..]);
        index += read;
        lng += delta;

        points.push((lat as f64 / 1e5, lng as f64 / 1e5));
    }

    points
}

fn decode_signed(bytes: &[u8]) -> (i64, usize) {
    let mut value = 0i64;
    let mut shift = 0;
    let mut read = 0;

    for &byte in bytes {
        read += 1;
        let chunk = (byte as i64) - 63;
        value |= (chunk & 0x1f) << shift;
        shift += 5;

        if chunk < 0x20 {
            break;
        }
    }

    if value & 1 != 0 {
        (!(value >> 1), read)
    } else {
        (value >> 1, read)
    }
}

/// Encodes (lat, lng) pairs into a polyline string.
pub fn encode(points: &[(f64, f64)]) -> String {
    let mut encoded = String::new();
    let mut prev_lat = 0i64;
    let mut prev_lng = 0i64;

    for &(lat, lng) in points {
        let lat_e5 = (lat * 1e5).round() as i64;
        let lng_e5 = (lng * 1e5).round() as i64;

        encode_signed(lat_e5 - prev_lat, &mut encoded);
        encode_signed(lng_e5 - prev_lng, &mut encoded);

        prev_lat = lat_e5;
        prev_lng = lng_e5;
    }

    encoded
}

fn encode_signed(value: i64, out: &mut String) {
    let mut value = if value < 0 { !(value << 1) } else { value << 1 };

    while value >= 0x20 {
        out.push((((value & 0x1f) | 0x20) as u8 + 63) as char);
        value >>= 5;
    }

    out.push((value as u8 + 63) as char);
}
