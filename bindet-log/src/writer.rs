use bindet_core::TrialRecord;
use std::io::{self, Write};

/// Writes one participant's trials in the four-field log layout.
///
/// Block names and stimulus ids may not contain commas or line breaks, nor
/// start or end with whitespace, since the reader trims every field.
pub fn write_log<W: Write>(mut out: W, records: &[TrialRecord]) -> io::Result<()> {
    for record in records {
        for field in [&record.block_name, &record.stimulus_id] {
            let padded = field.trim() != field.as_str();
            if field.is_empty() || padded || field.contains([',', '\n', '\r']) {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("cannot encode log field {field:?}"),
                ));
            }
        }
        writeln!(
            out,
            "{},{},{},{}",
            record.block_name,
            record.stimulus_id,
            record.response.code(),
            record.reaction_time_ms
        )?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TrialLogReader;
    use bindet_core::Response;
    use std::path::Path;

    #[test]
    fn written_log_reads_back() {
        let records = vec![
            TrialRecord::new("Training Block", "G000", Response::Yes, 400),
            TrialRecord::new("Block 1", "R000", Response::Yes, 500),
            TrialRecord::new("Block 1", "N000", Response::No, 600),
        ];
        let mut buf = Vec::new();
        write_log(&mut buf, &records).unwrap();
        assert_eq!(
            String::from_utf8(buf.clone()).unwrap(),
            "Training Block,G000,Y,400\nBlock 1,R000,Y,500\nBlock 1,N000,N,600\n"
        );

        let parsed = TrialLogReader::default()
            .parse_source(Path::new("mem"), buf.as_slice())
            .unwrap();
        assert_eq!(parsed, records);
    }

    #[test]
    fn refuses_embedded_commas() {
        let records = [TrialRecord::new("Block 1, late", "R000", Response::Yes, 500)];
        let err = write_log(Vec::new(), &records).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn refuses_padded_fields() {
        for (block, id) in [
            ("Training Block ", "R000"),
            (" Block 1", "R000"),
            ("Block 1", "R000\t"),
        ] {
            let records = [TrialRecord::new(block, id, Response::Yes, 500)];
            let err = write_log(Vec::new(), &records).unwrap_err();
            assert_eq!(err.kind(), io::ErrorKind::InvalidInput, "{block:?}/{id:?}");
        }
    }
}
