use cityfind_core::{City, DatasetStats};
use std::io::{self, Write};

/// One line per city: `Name, CC (lat, lon)`.
pub fn write_text<W: Write>(out: &mut W, cities: &[City]) -> io::Result<()> {
    for c in cities {
        writeln!(
            out,
            "{}, {} ({:.4}, {:.4})",
            c.name, c.country, c.coordinates.latitude, c.coordinates.longitude
        )?;
    }
    Ok(())
}

pub fn write_json<W: Write>(out: &mut W, cities: &[City]) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, cities)?;
    writeln!(out)?;
    Ok(())
}

pub fn write_stats<W: Write>(out: &mut W, stats: DatasetStats) -> io::Result<()> {
    writeln!(out, "Dataset statistics:")?;
    writeln!(out, "  Cities: {}", stats.cities)?;
    writeln!(out, "  Countries: {}", stats.countries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cityfind_core::{Coordinates, ImageHandle};

    fn sydney() -> City {
        City {
            id: 2147714,
            name: "Sydney".into(),
            country: "AU".into(),
            image: ImageHandle::Placeholder,
            coordinates: Coordinates::new(-33.867851, 151.207321),
        }
    }

    #[test]
    fn text_lines() {
        let mut buf = Vec::new();
        write_text(&mut buf, &[sydney()]).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Sydney, AU (-33.8679, 151.2073)\n"
        );
    }

    #[test]
    fn json_array() {
        let mut buf = Vec::new();
        write_json(&mut buf, &[sydney()]).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value[0]["id"], 2147714);
        assert_eq!(value[0]["country"], "AU");
    }

    #[test]
    fn stats_block() {
        let mut buf = Vec::new();
        write_stats(
            &mut buf,
            DatasetStats {
                cities: 40,
                countries: 25,
            },
        )
        .unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Cities: 40"));
        assert!(text.contains("Countries: 25"));
    }
}
